use crate::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph, Widget},
};

use super::helpers::{centered_rect_fixed_height, draw_drop_shadow};

pub struct HelpModal<'a> {
    pub theme: &'a Theme,
}

const NORMAL_KEYS: &[(&str, &str)] = &[
    ("j / k / Tab", "move between rows"),
    ("1-9", "toggle a shortcut button (again to clear)"),
    ("i / Enter", "edit the focused row"),
    ("x / Delete", "clear the row (trash)"),
    ("y", "show the share link"),
    ("s", "save (the link already holds the sheet)"),
    ("g / G", "first / last row"),
    ("q / Ctrl-c", "quit"),
];

const EDIT_KEYS: &[(&str, &str)] = &[
    ("Esc", "back to navigation"),
    ("Tab / Enter", "next row"),
    ("Ctrl-n / Ctrl-p", "cycle suggestions"),
    ("Ctrl-y", "accept the highlighted suggestion"),
    ("Ctrl-u", "clear the row"),
];

impl Widget for HelpModal<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let height = (NORMAL_KEYS.len() + EDIT_KEYS.len() + 5) as u16;
        let modal_area = centered_rect_fixed_height(60, height, area);
        if modal_area.width == 0 || modal_area.height == 0 {
            return;
        }

        draw_drop_shadow(buf, modal_area, area);
        Clear.render(modal_area, buf);

        let block = Block::default()
            .title(Line::from(vec![
                Span::raw(" "),
                Span::styled(" HELP ", self.theme.header_logo),
                Span::raw(" "),
            ]))
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(self.theme.border_focus);

        let inner = block.inner(modal_area);
        block.render(modal_area, buf);

        let mut lines = vec![Line::from(Span::styled(
            " Navigation",
            self.theme.section_title,
        ))];
        for (key, desc) in NORMAL_KEYS {
            lines.push(key_line(self.theme, key, desc));
        }
        lines.push(Line::default());
        lines.push(Line::from(Span::styled(" Editing", self.theme.section_title)));
        for (key, desc) in EDIT_KEYS {
            lines.push(key_line(self.theme, key, desc));
        }

        Paragraph::new(lines).render(inner, buf);
    }
}

fn key_line<'a>(theme: &Theme, key: &'a str, desc: &'a str) -> Line<'a> {
    Line::from(vec![
        Span::styled(format!("  {key:<16}"), theme.key_binding),
        Span::styled(desc, theme.list_item),
    ])
}
