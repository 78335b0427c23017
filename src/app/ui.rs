use crate::app::state::{AppMode, AppState};
use crate::components::field_row::FieldRow;
use crate::components::footer::Footer;
use crate::components::modals::{HelpModal, ShareLinkModal};
use crate::components::suggestions::SuggestionPopup;
use crate::schema::SECTIONS;

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// The vertical page structure: section headings, separators and field rows,
/// indexed into the flat field list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageRow {
    Heading(&'static str),
    Separator,
    Field(usize),
}

pub fn page_rows() -> Vec<PageRow> {
    let mut rows = Vec::new();
    let mut idx = 0;
    for (i, section) in SECTIONS.iter().enumerate() {
        if i > 0 {
            rows.push(PageRow::Separator);
        }
        if let Some(title) = section.title {
            rows.push(PageRow::Heading(title));
        }
        for _ in section.fields {
            rows.push(PageRow::Field(idx));
            idx += 1;
        }
    }
    rows
}

fn row_height(state: &AppState, row: &PageRow) -> u16 {
    match row {
        PageRow::Heading(_) => 2,
        PageRow::Separator => 1,
        PageRow::Field(i) => {
            let def = state.defs[*i];
            if !def.multiline {
                return 1;
            }
            // The notes area grows with its content, within reason.
            let lines = if *i == state.focused && state.mode == AppMode::Edit {
                state.editor.as_ref().map_or(1, |e| e.line_count())
            } else {
                state.store.value_of(def.key).lines().count().max(1)
            };
            lines.clamp(1, 6) as u16
        }
    }
}

pub struct AppLayout {
    pub main: Vec<Rect>,
}

pub fn get_layout(area: Rect) -> AppLayout {
    let main = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Header
            Constraint::Min(0),    // Form body
            Constraint::Length(1), // Footer
        ])
        .split(area)
        .to_vec();

    AppLayout { main }
}

pub fn draw(f: &mut Frame, app_state: &mut AppState) {
    if f.area().width == 0 || f.area().height == 0 {
        return;
    }

    let layout = get_layout(f.area());

    draw_header(f, app_state, layout.main[0]);
    draw_body(f, app_state, layout.main[1]);

    let footer = Footer { state: &*app_state };
    f.render_widget(footer, layout.main[2]);

    match app_state.mode {
        AppMode::Help => {
            let help = HelpModal {
                theme: &app_state.theme,
            };
            f.render_widget(help, f.area());
        }
        AppMode::ShareLink => {
            let link = app_state.current_link();
            let modal = ShareLinkModal {
                theme: &app_state.theme,
                link: &link,
            };
            f.render_widget(modal, f.area());
        }
        _ => {}
    }
}

/// Section the focused row belongs to, for the header badge.
fn focused_section_title(app_state: &AppState) -> &'static str {
    let mut idx = app_state.focused;
    for section in SECTIONS {
        if idx < section.fields.len() {
            return section.title.unwrap_or("Notes");
        }
        idx -= section.fields.len();
    }
    "Notes"
}

fn draw_header(f: &mut Frame, app_state: &AppState, area: Rect) {
    if area.width == 0 || area.height == 0 {
        return;
    }
    let theme = &app_state.theme;
    let section = format!(" Crisis Line Intake · {} ", focused_section_title(app_state));
    // The paragraph style paints the rest of the row.
    let header = Paragraph::new(Line::from(vec![
        Span::styled(" HALFSHEET ", theme.header_logo),
        Span::styled(section, theme.header),
    ]))
    .style(theme.header);
    f.render_widget(header, area);
}

fn draw_body(f: &mut Frame, app_state: &mut AppState, area: Rect) {
    let body = Rect {
        x: area.x + 2,
        y: area.y + 1,
        width: area.width.saturating_sub(4),
        height: area.height.saturating_sub(1),
    };
    if body.width == 0 || body.height == 0 {
        return;
    }

    let rows = page_rows();
    let heights: Vec<u16> = rows.iter().map(|r| row_height(app_state, r)).collect();

    // Keep the focused row inside the viewport.
    let mut focused_top = 0u16;
    let mut focused_height = 1u16;
    let mut acc = 0u16;
    for (row, h) in rows.iter().zip(&heights) {
        if matches!(row, PageRow::Field(i) if *i == app_state.focused) {
            focused_top = acc;
            focused_height = *h;
            break;
        }
        acc += h;
    }
    if focused_top < app_state.scroll {
        app_state.scroll = focused_top;
    } else if focused_top + focused_height > app_state.scroll + body.height {
        app_state.scroll = (focused_top + focused_height).saturating_sub(body.height);
    }

    let mut focused_input: Option<Rect> = None;
    let mut y = -(app_state.scroll as i32);
    for (row, h) in rows.iter().zip(&heights) {
        let top = y;
        y += i32::from(*h);
        if top < 0 {
            continue;
        }
        if top + i32::from(*h) > i32::from(body.height) {
            break;
        }
        let rect = Rect {
            x: body.x,
            y: body.y + top as u16,
            width: body.width,
            height: *h,
        };

        match row {
            PageRow::Heading(title) => {
                let heading = Paragraph::new(vec![
                    Line::from(Span::styled(*title, app_state.theme.section_title)),
                    Line::default(),
                ]);
                f.render_widget(heading, rect);
            }
            PageRow::Separator => {
                let line = Line::from(Span::styled(
                    "─".repeat(rect.width as usize),
                    app_state.theme.border,
                ));
                f.render_widget(Paragraph::new(line), rect);
            }
            PageRow::Field(i) => {
                let focused = *i == app_state.focused;
                let editing = focused && app_state.mode == AppMode::Edit;
                let field_row = FieldRow {
                    def: app_state.defs[*i],
                    value: app_state.store.value_of(app_state.defs[*i].key),
                    selected: app_state.rows[*i].selected,
                    focused,
                    editing,
                    theme: &app_state.theme,
                };
                let input_rect = field_row.input_area(rect);
                f.render_widget(field_row, rect);

                if editing {
                    if let Some(editor) = &app_state.editor {
                        f.render_widget(editor, input_rect);
                    }
                    focused_input = Some(input_rect);
                }
            }
        }
    }

    // Suggestion popup under (or above) the focused input.
    if app_state.mode == AppMode::Edit {
        let matches = app_state.suggestion_matches();
        if let (Some(anchor), false) = (focused_input, matches.is_empty()) {
            let height = (matches.len() as u16 + 2).min(8);
            let width = anchor.width.clamp(20, 46);
            let below = anchor.y + anchor.height;
            let y = if below + height <= area.y + area.height {
                below
            } else {
                anchor.y.saturating_sub(height)
            };
            let popup_area = Rect {
                x: anchor.x,
                y,
                width,
                height,
            }
            .intersection(f.area());

            let popup = SuggestionPopup {
                matches: &matches,
                selected: app_state.suggestion_index,
                theme: &app_state.theme,
            };
            f.render_widget(popup, popup_area);
        }
    }
}
