use crate::app::persistence;
use crate::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph, Widget, Wrap},
};

use super::helpers::{centered_rect, draw_drop_shadow};

/// Shows the current encoded session link, the one piece of state that
/// outlives the process.
pub struct ShareLinkModal<'a> {
    pub theme: &'a Theme,
    pub link: &'a str,
}

impl Widget for ShareLinkModal<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let modal_area = centered_rect(70, 50, area);
        if modal_area.width == 0 || modal_area.height == 0 {
            return;
        }

        draw_drop_shadow(buf, modal_area, area);
        Clear.render(modal_area, buf);

        let block = Block::default()
            .title(Line::from(vec![
                Span::raw(" "),
                Span::styled(" SHARE LINK ", self.theme.header_logo),
                Span::raw(" "),
            ]))
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(self.theme.border_focus);

        let inner = block.inner(modal_area);
        block.render(modal_area, buf);

        let mut lines = vec![
            Line::default(),
            Line::from(Span::styled(self.link, self.theme.input_focused)),
            Line::default(),
            Line::from(Span::styled(
                "Relaunch with this link as the first argument to restore the sheet.",
                self.theme.list_item,
            )),
        ];
        if let Some(path) = persistence::session_link_path() {
            lines.push(Line::from(vec![
                Span::styled("Also kept current in ", self.theme.list_item),
                Span::styled(path.display().to_string(), self.theme.key_binding),
            ]));
        }

        Paragraph::new(lines)
            .wrap(Wrap { trim: false })
            .render(inner, buf);
    }
}
