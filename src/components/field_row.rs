use crate::schema::FieldDef;
use crate::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::Widget,
};

const LABEL_WIDTH: u16 = 26;

/// One form row: focus marker, label, optional shortcut button group, and the
/// field's text. The editor itself is rendered over [`input_area`] by the
/// caller while the row is being edited.
///
/// [`input_area`]: FieldRow::input_area
pub struct FieldRow<'a> {
    pub def: &'static FieldDef,
    pub value: &'a str,
    pub selected: Option<usize>,
    pub focused: bool,
    pub editing: bool,
    pub theme: &'a Theme,
}

impl FieldRow<'_> {
    /// Rendered width of the shortcut button group, zero when there is none.
    fn group_width(&self) -> u16 {
        if self.def.shortcuts.is_empty() {
            return 0;
        }
        let values: u16 = self
            .def
            .shortcuts
            .iter()
            .map(|s| s.value.len() as u16 + 2)
            .sum();
        let separators = self.def.shortcuts.len() as u16 - 1;
        values + separators + 2 // plus the enclosing brackets
    }

    /// Where the editable text lives inside `area`. Mirrors the layout used
    /// by `render` so the caller can overlay the editor and the suggestion
    /// popup on the right spot.
    pub fn input_area(&self, area: Rect) -> Rect {
        if self.def.multiline {
            return Rect {
                x: area.x + LABEL_WIDTH,
                y: area.y,
                width: area.width.saturating_sub(LABEL_WIDTH),
                height: area.height,
            };
        }
        let group = self.group_width();
        let offset = LABEL_WIDTH + if group > 0 { group + 1 } else { 0 };
        Rect {
            x: area.x + offset,
            y: area.y,
            width: area.width.saturating_sub(offset),
            height: 1,
        }
    }
}

impl Widget for FieldRow<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.width <= LABEL_WIDTH || area.height == 0 {
            return;
        }
        let theme = self.theme;

        // Focus marker and label.
        let (marker, label_style) = if self.focused {
            ("❯ ", theme.label_focused)
        } else {
            ("  ", theme.label)
        };
        let label = Line::from(vec![
            Span::styled(marker, theme.section_title),
            Span::styled(self.def.label, label_style),
        ]);
        buf.set_line(area.x, area.y, &label, LABEL_WIDTH);

        // Shortcut button group.
        let mut x = area.x + LABEL_WIDTH;
        if !self.def.shortcuts.is_empty() {
            let mut spans = vec![Span::styled("[", theme.shortcut_separator)];
            for (i, shortcut) in self.def.shortcuts.iter().enumerate() {
                if i > 0 {
                    spans.push(Span::styled("│", theme.shortcut_separator));
                }
                let style = if self.selected == Some(i) {
                    theme.shortcut_selected
                } else {
                    theme.shortcut
                };
                spans.push(Span::styled(format!(" {} ", shortcut.value), style));
            }
            spans.push(Span::styled("]", theme.shortcut_separator));
            let group = Line::from(spans);
            buf.set_line(x, area.y, &group, self.group_width());
            x += self.group_width() + 1;
        }

        // Field text. While editing, the caller draws the editor on top.
        if self.editing {
            return;
        }
        let input_style = if self.focused {
            theme.input_focused
        } else {
            theme.input
        };
        if self.def.multiline {
            let input = self.input_area(area);
            for (i, line) in self.value.lines().take(area.height as usize).enumerate() {
                buf.set_line(
                    input.x,
                    input.y + i as u16,
                    &Line::from(Span::styled(line, input_style)),
                    input.width,
                );
            }
        } else {
            let width = area.right().saturating_sub(x);
            // Single-line rows only ever hold single-line text, but a link
            // written by hand could smuggle a newline in; show the first line.
            let text = self.value.lines().next().unwrap_or("");
            buf.set_line(x, area.y, &Line::from(Span::styled(text, input_style)), width);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::{field_defs, FieldKey};
    use crate::theme::Theme;

    fn def_for(key: FieldKey) -> &'static FieldDef {
        field_defs().find(|d| d.key == key).unwrap()
    }

    #[test]
    fn input_area_sits_after_the_shortcut_group() {
        let theme = Theme::default();
        let row = FieldRow {
            def: def_for(FieldKey::Gender), // [ M │ F ]
            value: "",
            selected: None,
            focused: false,
            editing: false,
            theme: &theme,
        };
        let area = Rect::new(0, 0, 80, 1);
        let input = row.input_area(area);

        // "[ M │ F ]" is 9 cells wide plus a 1-cell gap.
        assert_eq!(input.x, LABEL_WIDTH + 10);
        assert_eq!(input.width, 80 - LABEL_WIDTH - 10);
    }

    #[test]
    fn rows_without_shortcuts_start_right_after_the_label() {
        let theme = Theme::default();
        let row = FieldRow {
            def: def_for(FieldKey::Age),
            value: "30",
            selected: None,
            focused: true,
            editing: false,
            theme: &theme,
        };
        let input = row.input_area(Rect::new(0, 0, 80, 1));
        assert_eq!(input.x, LABEL_WIDTH);
    }

    #[test]
    fn selected_shortcut_renders_highlighted() {
        let theme = Theme::default();
        let def = def_for(FieldKey::Thoughts);
        let row = FieldRow {
            def,
            value: "Y",
            selected: Some(0),
            focused: true,
            editing: false,
            theme: &theme,
        };
        let area = Rect::new(0, 0, 60, 1);
        let mut buf = Buffer::empty(area);
        row.render(area, &mut buf);

        // The "Y" button cell carries the selected style.
        let y_cell = &buf[(LABEL_WIDTH + 2, 0)];
        assert_eq!(y_cell.symbol(), "Y");
        assert_eq!(y_cell.style().bg, theme.shortcut_selected.bg);
    }
}
