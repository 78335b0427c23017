use super::keymap::{KeyConfig, KeyMap};
use crate::codec;
use crate::schema::{self, FieldDef, FormState};
use crate::store::FormStore;
use crate::theme::Theme;
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::widgets::Widget;
use std::fmt;
use std::ops::{Deref, DerefMut};
use std::sync::Arc;
use tui_textarea::{CursorMove, TextArea};

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum AppMode {
    Normal,    // Navigating rows, toggling shortcuts
    Edit,      // Typing into the focused row
    Help,      // Help overlay
    ShareLink, // Share-link overlay
}

/// Wrapper around `TextArea` so it can live inside `AppState` with the
/// derives the rest of the state wants.
#[derive(Default)]
pub struct Editor<'a>(pub TextArea<'a>);

impl Editor<'_> {
    /// Seed an editor from the stored value, cursor at the end.
    pub fn from_text(text: &str) -> Self {
        let mut area = TextArea::new(text.split('\n').map(str::to_string).collect());
        area.move_cursor(CursorMove::Bottom);
        area.move_cursor(CursorMove::End);
        Self(area)
    }

    /// The raw text currently in the editor.
    pub fn text(&self) -> String {
        self.0.lines().join("\n")
    }

    pub fn line_count(&self) -> usize {
        self.0.lines().len()
    }
}

impl fmt::Debug for Editor<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Editor")
            .field("lines", &self.0.lines())
            .field("cursor", &self.0.cursor())
            .finish()
    }
}

impl<'a> Deref for Editor<'a> {
    type Target = TextArea<'a>;
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl DerefMut for Editor<'_> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}

impl Widget for &Editor<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Widget::render(&self.0, area, buf);
    }
}

/// Per-row UI state. `selected` is which shortcut is lit, and is deliberately
/// not derived from the stored value: typing a shortcut's code by hand does
/// not light its button.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RowState {
    pub selected: Option<usize>,
}

#[derive(Debug)]
pub struct AppState<'a> {
    pub should_quit: bool,
    pub mode: AppMode,

    // --- The source of truth ---
    pub store: FormStore,
    /// Link prefix before `?`, preserved from whatever link started the session.
    pub base: String,

    // --- Page schema & per-row UI state ---
    pub defs: Vec<&'static FieldDef>,
    pub rows: Vec<RowState>,
    pub focused: usize,

    // --- Input handling ---
    pub editor: Option<Editor<'a>>,
    pub suggestion_index: Option<usize>,

    // --- Chrome ---
    pub scroll: u16,
    pub status_message: Option<String>,
    pub frame_count: u64,
    pub keymap: Arc<KeyMap>,
    pub theme: Theme,
}

impl AppState<'_> {
    pub fn new(store: FormStore, config: KeyConfig) -> Self {
        Self {
            keymap: Arc::new(KeyMap::from_config(&config)),
            store,
            ..Default::default()
        }
    }

    pub fn focused_def(&self) -> &'static FieldDef {
        self.defs[self.focused]
    }

    pub fn row_count(&self) -> usize {
        self.defs.len()
    }

    /// The full session link for the current state.
    pub fn current_link(&self) -> String {
        format!("{}?{}", self.base, codec::encode_query(self.store.state()))
    }

    /// Suggestions for the focused row, filtered by what has been typed so
    /// far (case-insensitive containment). Never constrains input.
    pub fn suggestion_matches(&self) -> Vec<&'static str> {
        let def = self.focused_def();
        if def.suggestions.is_empty() {
            return Vec::new();
        }
        let needle = self
            .editor
            .as_ref()
            .map(|e| e.text().to_lowercase())
            .unwrap_or_default();
        def.suggestions
            .iter()
            .copied()
            .filter(|s| needle.is_empty() || s.to_lowercase().contains(&needle))
            .collect()
    }
}

impl Default for AppState<'_> {
    fn default() -> Self {
        Self {
            should_quit: false,
            mode: AppMode::Normal,
            store: FormStore::new(FormState::default()),
            base: String::new(),
            defs: schema::field_defs().collect(),
            rows: vec![RowState::default(); schema::field_count()],
            focused: 0,
            editor: None,
            suggestion_index: None,
            scroll: 0,
            status_message: None,
            frame_count: 0,
            keymap: Arc::new(KeyMap::from_config(&KeyConfig::default())),
            theme: Theme::default(),
        }
    }
}
