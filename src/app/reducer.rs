use super::action::Action;
use super::state::{AppMode, AppState, Editor};

pub fn update(state: &mut AppState, action: Action) {
    match action {
        // --- System ---
        Action::Tick => {
            state.frame_count = state.frame_count.wrapping_add(1);
        }
        Action::Resize(_, _) => {} // Layout is recomputed on every draw
        Action::Quit => {
            state.should_quit = true;
        }

        // --- Row navigation ---
        Action::FocusNext => {
            let target = (state.focused + 1) % state.row_count();
            focus(state, target);
        }
        Action::FocusPrev => {
            let count = state.row_count();
            let target = (state.focused + count - 1) % count;
            focus(state, target);
        }
        Action::FocusFirst => focus(state, 0),
        Action::FocusLast => focus(state, state.row_count() - 1),

        // --- Shortcut buttons ---
        Action::ToggleShortcut(i) => {
            let def = state.focused_def();
            let Some(shortcut) = def.shortcuts.get(i) else {
                return;
            };
            let row = &mut state.rows[state.focused];
            if row.selected == Some(i) {
                // Pressing the lit button again clears the field.
                row.selected = None;
                if let Some(editor) = state.editor.as_mut() {
                    *editor = Editor::default();
                }
                state.store.set(def.key, "");
            } else {
                row.selected = Some(i);
                if let Some(editor) = state.editor.as_mut() {
                    *editor = Editor::from_text(shortcut.value);
                }
                state.store.set(def.key, shortcut.value);
            }
        }
        Action::ClearField => {
            let def = state.focused_def();
            state.rows[state.focused].selected = None;
            state.suggestion_index = None;
            if let Some(editor) = state.editor.as_mut() {
                *editor = Editor::default();
            }
            state.store.set(def.key, "");
        }

        // --- Editing ---
        Action::StartEdit => {
            let value = state.store.value_of(state.focused_def().key).to_string();
            state.editor = Some(Editor::from_text(&value));
            state.suggestion_index = None;
            state.mode = AppMode::Edit;
        }
        Action::StopEdit => {
            state.editor = None;
            state.suggestion_index = None;
            state.mode = AppMode::Normal;
        }
        Action::EditorInput(key) => {
            if let Some(editor) = state.editor.as_mut() {
                editor.input(key);
                let text = editor.text();
                let field = state.defs[state.focused].key;
                // Every keystroke writes through; no debouncing.
                state.store.set(field, text);
                state.suggestion_index = None;
            }
        }

        // --- Suggestions ---
        Action::SuggestionNext => {
            let len = state.suggestion_matches().len();
            state.suggestion_index = match (len, state.suggestion_index) {
                (0, _) => None,
                (_, None) => Some(0),
                (_, Some(i)) => Some((i + 1) % len),
            };
        }
        Action::SuggestionPrev => {
            let len = state.suggestion_matches().len();
            state.suggestion_index = match (len, state.suggestion_index) {
                (0, _) => None,
                (_, None) => Some(len - 1),
                (_, Some(i)) => Some((i + len - 1) % len),
            };
        }
        Action::AcceptSuggestion => {
            let matches = state.suggestion_matches();
            let Some(text) = state.suggestion_index.and_then(|i| matches.get(i).copied()) else {
                return;
            };
            state.editor = Some(Editor::from_text(text));
            state.store.set(state.defs[state.focused].key, text);
            state.suggestion_index = None;
        }

        // --- Page chrome ---
        Action::Save => {
            // The button is inert: the session link already holds the sheet.
            state.status_message = Some("Saved. The session link holds this sheet.".to_string());
        }
        Action::ToggleHelp => {
            state.mode = if state.mode == AppMode::Help {
                AppMode::Normal
            } else {
                AppMode::Help
            };
        }
        Action::ToggleShareLink => {
            state.mode = if state.mode == AppMode::ShareLink {
                AppMode::Normal
            } else {
                AppMode::ShareLink
            };
        }
        Action::CancelMode => {
            state.mode = AppMode::Normal;
            state.status_message = None;
        }
    }
}

fn focus(state: &mut AppState, target: usize) {
    state.focused = target;
    state.suggestion_index = None;
    if state.mode == AppMode::Edit {
        // One-time sync from the store for the newly focused row; nothing
        // else writes this key, so the editor never needs to re-sync.
        let value = state.store.value_of(state.defs[target].key).to_string();
        state.editor = Some(Editor::from_text(&value));
    }
}
