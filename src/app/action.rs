#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    // --- System / Terminal ---
    Tick,
    Resize(u16, u16),
    Quit,

    // --- Row navigation ---
    FocusNext,
    FocusPrev,
    FocusFirst,
    FocusLast,

    // --- Field editing ---
    ToggleShortcut(usize), // Toggle shortcut by index in the focused row's group
    ClearField,            // The trash action: deselect, empty the control, write ""
    StartEdit,             // Begin typing into the focused row
    StopEdit,              // Back to navigation
    EditorInput(crossterm::event::KeyEvent),

    // --- Suggestions ---
    SuggestionNext,
    SuggestionPrev,
    AcceptSuggestion,

    // --- Page chrome ---
    Save, // Inert by design; persistence is entirely via the session link
    ToggleHelp,
    ToggleShareLink,
    CancelMode,
}
