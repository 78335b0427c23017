use ratatui::style::{Color, Modifier, Style};

#[derive(Debug, Clone)]
pub struct Theme {
    pub border: Style,
    pub border_focus: Style,

    pub header_logo: Style,
    pub header: Style,
    pub footer: Style,
    pub key_binding: Style,
    pub status_info: Style,
    pub mode_badge: Style,

    pub section_title: Style,
    pub label: Style,
    pub label_focused: Style,
    pub input: Style,
    pub input_focused: Style,
    pub shortcut: Style,
    pub shortcut_selected: Style,
    pub shortcut_separator: Style,

    pub list_item: Style,
    pub list_selected: Style,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            border: Style::default().fg(Color::Rgb(80, 80, 80)),
            border_focus: Style::default().fg(Color::Magenta),

            header_logo: Style::default()
                .bg(Color::Magenta)
                .fg(Color::Black)
                .add_modifier(Modifier::BOLD),
            header: Style::default().bg(Color::Rgb(40, 40, 40)).fg(Color::White),
            footer: Style::default()
                .bg(Color::Rgb(30, 30, 30))
                .fg(Color::Rgb(150, 150, 150)),
            key_binding: Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
            status_info: Style::default().fg(Color::Green),
            mode_badge: Style::default()
                .bg(Color::Rgb(60, 60, 60))
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),

            section_title: Style::default()
                .fg(Color::Magenta)
                .add_modifier(Modifier::BOLD),
            label: Style::default().fg(Color::Rgb(150, 150, 150)),
            label_focused: Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
            input: Style::default().fg(Color::Rgb(200, 200, 200)),
            input_focused: Style::default().fg(Color::White),
            shortcut: Style::default().fg(Color::Rgb(170, 140, 200)),
            shortcut_selected: Style::default()
                .bg(Color::Magenta)
                .fg(Color::Black)
                .add_modifier(Modifier::BOLD),
            shortcut_separator: Style::default().fg(Color::Rgb(80, 80, 80)),

            list_item: Style::default().fg(Color::Rgb(180, 180, 180)),
            list_selected: Style::default()
                .bg(Color::Rgb(50, 50, 50))
                .add_modifier(Modifier::BOLD),
        }
    }
}
