use crate::app::state::{AppMode, AppState};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

pub struct Footer<'a> {
    pub state: &'a AppState<'a>,
}

impl Widget for Footer<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let state = self.state;
        let theme = &state.theme;

        let mode_text = match state.mode {
            AppMode::Normal => " NORMAL ",
            AppMode::Edit => " EDIT ",
            AppMode::Help => " HELP ",
            AppMode::ShareLink => " LINK ",
        };

        let status_span = if let Some(msg) = &state.status_message {
            Span::styled(format!("  {msg}  "), theme.status_info)
        } else {
            Span::styled(
                format!("  {}  ", state.focused_def().label),
                theme.footer,
            )
        };

        let link_badge = format!(" link {}ch ", state.current_link().len());

        let mut spans = vec![
            Span::styled(mode_text, theme.mode_badge),
            status_span,
            Span::styled(link_badge, theme.footer),
            Span::raw("  "),
        ];

        let hints: &[(&str, &str)] = match state.mode {
            AppMode::Normal => &[
                ("j/k", "move"),
                ("1-9", "toggle"),
                ("i", "edit"),
                ("x", "clear"),
                ("y", "link"),
                ("s", "save"),
                ("?", "help"),
                ("q", "quit"),
            ],
            AppMode::Edit => &[
                ("Esc", "done"),
                ("Tab", "next"),
                ("C-n/C-p", "suggest"),
                ("C-y", "accept"),
                ("C-u", "clear"),
            ],
            _ => &[("Esc", "close")],
        };
        for (key, desc) in hints {
            spans.push(Span::styled(*key, theme.key_binding));
            spans.push(Span::styled(format!(": {desc}  "), theme.footer));
        }

        Paragraph::new(Line::from(spans))
            .style(theme.footer)
            .render(area, buf);
    }
}
