use crate::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, List, ListItem, Widget},
};

/// The lookup list shown while typing into a row that carries suggestions.
/// Purely advisory: it never constrains what the field accepts.
pub struct SuggestionPopup<'a> {
    pub matches: &'a [&'static str],
    pub selected: Option<usize>,
    pub theme: &'a Theme,
}

impl Widget for SuggestionPopup<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.width < 4 || area.height < 3 {
            return;
        }

        Clear.render(area, buf);

        let block = Block::default()
            .title(Line::from(vec![
                Span::raw(" "),
                Span::styled("suggestions", self.theme.section_title),
                Span::raw(" "),
            ]))
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(self.theme.border_focus);

        let inner = block.inner(area);
        block.render(area, buf);

        let items: Vec<ListItem> = self
            .matches
            .iter()
            .enumerate()
            .map(|(i, text)| {
                let (prefix, style) = if self.selected == Some(i) {
                    ("> ", self.theme.list_selected)
                } else {
                    ("  ", self.theme.list_item)
                };
                ListItem::new(Line::from(vec![
                    Span::styled(prefix, style),
                    Span::styled(*text, style),
                ]))
            })
            .collect();

        List::new(items).render(inner, buf);
    }
}
