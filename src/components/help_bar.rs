//! One-line key hints at the bottom of the screen

use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Key hints; the set shown depends on whether the picker is open
pub struct HelpBar {
    pub picker_open: bool,
}

impl HelpBar {
    fn hints(&self) -> Vec<(&'static str, &'static str, Color)> {
        if self.picker_open {
            vec![
                (" ←↑↓→ ", "Move ", Color::Cyan),
                (" PgUp/PgDn ", "Month ", Color::Cyan),
                (" Home ", "Today ", Color::Cyan),
                (" Enter ", "Choose ", Color::Green),
                (" Esc ", "Cancel", Color::Yellow),
            ]
        } else {
            vec![
                (" q ", "Quit ", Color::Yellow),
                (" Tab ", "Next field ", Color::Cyan),
                (" Enter ", "Pick date", Color::Green),
            ]
        }
    }

    pub fn draw(&self, frame: &mut Frame, area: Rect) {
        let spans: Vec<_> = self
            .hints()
            .into_iter()
            .flat_map(|(key, label, color)| {
                [
                    Span::styled(key, Style::default().fg(color).add_modifier(Modifier::BOLD)),
                    Span::raw(label),
                ]
            })
            .collect();

        let paragraph = Paragraph::new(Line::from(spans)).alignment(Alignment::Left);
        frame.render_widget(paragraph, area);
    }
}
