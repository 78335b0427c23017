use crate::app::action::Action;
use crate::app::state::{AppMode, AppState};
use crossterm::event::{Event, KeyCode, KeyEventKind, KeyModifiers};

pub fn map_event_to_action(event: Event, app_state: &AppState<'_>) -> Option<Action> {
    if let Event::Key(key) = &event {
        if key.kind == KeyEventKind::Release {
            return None;
        }
        // Always available, regardless of mode.
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            return Some(Action::Quit);
        }
    }

    match app_state.mode {
        AppMode::Help | AppMode::ShareLink => match event {
            Event::Key(key) => match key.code {
                KeyCode::Esc | KeyCode::Enter | KeyCode::Char('q' | '?' | 'y') => {
                    Some(Action::CancelMode)
                }
                _ => None,
            },
            Event::Resize(w, h) => Some(Action::Resize(w, h)),
            _ => None,
        },
        AppMode::Edit => match event {
            Event::Key(key) => {
                let multiline = app_state.focused_def().multiline;
                if key.modifiers.contains(KeyModifiers::CONTROL) {
                    return match key.code {
                        KeyCode::Char('u') => Some(Action::ClearField),
                        KeyCode::Char('n') => Some(Action::SuggestionNext),
                        KeyCode::Char('p') => Some(Action::SuggestionPrev),
                        KeyCode::Char('y') => Some(Action::AcceptSuggestion),
                        _ => Some(Action::EditorInput(key)),
                    };
                }
                match key.code {
                    KeyCode::Esc => Some(Action::StopEdit),
                    KeyCode::Tab => Some(Action::FocusNext),
                    KeyCode::BackTab => Some(Action::FocusPrev),
                    // In the multi-line Notes row these belong to the editor.
                    KeyCode::Enter if !multiline => Some(Action::FocusNext),
                    KeyCode::Down if !multiline => Some(Action::FocusNext),
                    KeyCode::Up if !multiline => Some(Action::FocusPrev),
                    _ => Some(Action::EditorInput(key)),
                }
            }
            Event::Resize(w, h) => Some(Action::Resize(w, h)),
            _ => None,
        },
        AppMode::Normal => match event {
            Event::Key(key) => app_state.keymap.get_action(key),
            Event::Resize(w, h) => Some(Action::Resize(w, h)),
            _ => None,
        },
    }
}
