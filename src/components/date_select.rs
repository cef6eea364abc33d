//! Select control that shows a date and opens the picker dialog

use std::fmt::Write;

use anyhow::Result;
use chrono::{format::StrftimeItems, NaiveDate};
use crossterm::event::{KeyCode, KeyEvent, MouseButton, MouseEvent, MouseEventKind};
use log::info;
use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::Span,
    widgets::{Block, BorderType, Borders, Padding, Paragraph},
    Frame,
};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::action::Action;
use crate::component::Component;
use crate::components::{DatePicker, DatePickerDialog, DatePickerDialogScreen};
use crate::error::Error;
use crate::model::{ScreenStack, Size, WidgetId};

pub const CHEVRON: char = '\u{25bc}';
pub const DEFAULT_FORMAT: &str = "%Y-%m-%d";

/// Rows the control occupies, border included
pub const SELECT_HEIGHT: u16 = 3;

pub struct DateSelect {
    id: WidgetId,
    pub name: Option<String>,
    date: Option<NaiveDate>,
    format: String,
    placeholder: String,
    pub focused: bool,
    /// Area from the last draw, used for mouse hit-testing
    area: Rect,
}

impl DateSelect {
    pub fn new(id: impl Into<WidgetId>) -> Self {
        Self {
            id: id.into(),
            name: None,
            date: None,
            format: DEFAULT_FORMAT.to_string(),
            placeholder: String::new(),
            focused: false,
            area: Rect::default(),
        }
    }

    pub fn with_date(mut self, date: Option<NaiveDate>) -> Self {
        self.date = date;
        self
    }

    /// Use a strftime-style display format
    pub fn with_format(mut self, format: &str) -> crate::Result<Self> {
        validate_format(format)?;
        self.format = format.to_string();
        Ok(self)
    }

    pub fn with_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = placeholder.into();
        self
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn id(&self) -> &WidgetId {
        &self.id
    }

    /// The current date, if one was chosen
    pub fn value(&self) -> Option<NaiveDate> {
        self.date
    }

    pub fn set_date(&mut self, date: Option<NaiveDate>) {
        self.date = date;
    }

    pub fn format(&self) -> &str {
        &self.format
    }

    /// Name this select's dialog screen is installed under
    pub fn screen_name(&self) -> String {
        format!("date_picker_dialog_screen:{}", self.id)
    }

    /// Text shown in a control `width` cells wide: the date (or the
    /// placeholder) padded to `width - 2`, then a space and the chevron
    pub fn render_value(&self, width: u16) -> String {
        let text_space = usize::from(width.saturating_sub(2));

        let text = match self.date {
            Some(date) => date.format(&self.format).to_string(),
            None => self.placeholder.clone(),
        };
        let text = truncate_to_width(&text, text_space);
        let padding = text_space.saturating_sub(text.width());

        format!("{text}{} {CHEVRON}", " ".repeat(padding))
    }

    /// Create the dialog and install its screen
    pub fn on_mount(
        &self,
        screens: &mut ScreenStack<DatePickerDialogScreen>,
        date_picker: DatePicker,
    ) -> crate::Result<()> {
        let dialog = DatePickerDialog::new(Some(self.id.clone()), date_picker);
        screens.install_screen(self.screen_name(), DatePickerDialogScreen::new(dialog))
    }

    /// Show the dialog and push its screen on top
    pub fn show_date_picker(
        &self,
        screens: &mut ScreenStack<DatePickerDialogScreen>,
        viewport: Size,
    ) -> crate::Result<()> {
        let name = self.screen_name();
        let screen = screens
            .get_mut(&name)
            .ok_or_else(|| Error::ScreenNotInstalled(name.clone()))?;

        screen.dialog.display = true;
        screen.date = self.date;

        screens.push_screen(&name)?;
        if let Some(screen) = screens.active_mut() {
            screen.on_mount(viewport);
        }
        Ok(())
    }

    pub fn on_date_picker_selected(&mut self, date: NaiveDate) {
        info!("{} set to {}", self.id, date);
        self.date = Some(date);
    }
}

impl Component for DateSelect {
    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        match key.code {
            KeyCode::Enter => Ok(Some(Action::OpenDatePicker(self.id.clone()))),
            _ => Ok(None),
        }
    }

    fn handle_mouse_event(&mut self, mouse: MouseEvent) -> Result<Option<Action>> {
        let clicked = mouse.kind == MouseEventKind::Down(MouseButton::Left)
            && self.area.contains((mouse.column, mouse.row).into());

        Ok(clicked.then(|| Action::OpenDatePicker(self.id.clone())))
    }

    fn draw(&mut self, frame: &mut Frame, area: Rect) -> Result<()> {
        self.area = Rect {
            height: area.height.min(SELECT_HEIGHT),
            ..area
        };

        let border_color = if self.focused { Color::Cyan } else { Color::DarkGray };
        let mut block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Thick)
            .border_style(Style::default().fg(border_color))
            .padding(Padding::horizontal(2));
        if let Some(name) = &self.name {
            block = block.title(format!(" {} ", name));
        }

        let inner = block.inner(self.area);
        let text_style = if self.date.is_some() {
            Style::default().fg(Color::White)
        } else {
            Style::default().fg(Color::DarkGray)
        };

        frame.render_widget(
            Paragraph::new(Span::styled(self.render_value(inner.width), text_style)).block(block),
            self.area,
        );
        Ok(())
    }
}

/// A format must parse and must only need date fields
fn validate_format(format: &str) -> crate::Result<()> {
    let mut sample = String::new();
    write!(sample, "{}", NaiveDate::MIN.format_with_items(StrftimeItems::new(format)))
        .map_err(|_| Error::InvalidFormat(format.to_string()))
}

fn truncate_to_width(text: &str, max_width: usize) -> String {
    let mut width = 0;
    text.chars()
        .take_while(|c| {
            width += c.width().unwrap_or(0);
            width <= max_width
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;
    use ratatui::{backend::TestBackend, Terminal};

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn click(column: u16, row: u16) -> MouseEvent {
        MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column,
            row,
            modifiers: KeyModifiers::NONE,
        }
    }

    #[test]
    fn test_render_value_pads_date() {
        let select = DateSelect::new("due").with_date(Some(ymd(2026, 10, 17)));
        assert_eq!(select.render_value(14), "2026-10-17   \u{25bc}");
    }

    #[test]
    fn test_render_value_truncates() {
        let select = DateSelect::new("due").with_date(Some(ymd(2026, 10, 17)));
        assert_eq!(select.render_value(5), "202 \u{25bc}");
        assert_eq!(select.render_value(2), " \u{25bc}");
        assert_eq!(select.render_value(0), " \u{25bc}");
    }

    #[test]
    fn test_render_value_placeholder() {
        let select = DateSelect::new("due").with_placeholder("Pick a date");
        assert_eq!(select.render_value(8), "Pick a \u{25bc}");
        assert_eq!(DateSelect::new("due").render_value(6), "     \u{25bc}");
    }

    #[test]
    fn test_render_value_wide_chars() {
        let select = DateSelect::new("due").with_placeholder("日付を選択");
        // Each character is two cells wide; a half character never fits
        assert_eq!(select.render_value(7), "日付  \u{25bc}");
    }

    #[test]
    fn test_custom_format() {
        let select = DateSelect::new("due")
            .with_format("%d %B %Y")
            .unwrap()
            .with_date(Some(ymd(2026, 3, 1)));
        assert_eq!(select.render_value(18), "01 March 2026    \u{25bc}");
    }

    #[test]
    fn test_invalid_format() {
        assert!(matches!(
            DateSelect::new("due").with_format("%Y-%Q"),
            Err(Error::InvalidFormat(_))
        ));
    }

    #[test]
    fn test_time_format_rejected() {
        for format in ["%H:%M", "%Y %z", "%Y-%m-%d %S"] {
            assert!(matches!(
                DateSelect::new("due").with_format(format),
                Err(Error::InvalidFormat(_))
            ));
        }
        assert!(DateSelect::new("due").with_format("%A %e %b %Y").is_ok());
    }

    #[test]
    fn test_enter_opens_picker() {
        let mut select = DateSelect::new("due");
        let action = select
            .handle_key_event(KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE))
            .unwrap();
        assert_eq!(action, Some(Action::OpenDatePicker("due".into())));

        let action = select
            .handle_key_event(KeyEvent::new(KeyCode::Char('x'), KeyModifiers::NONE))
            .unwrap();
        assert_eq!(action, None);
    }

    #[test]
    fn test_click_opens_picker() {
        let mut select = DateSelect::new("due");
        let mut terminal = Terminal::new(TestBackend::new(30, 6)).unwrap();
        terminal
            .draw(|frame| select.draw(frame, Rect::new(0, 1, 30, 4)).unwrap())
            .unwrap();

        assert_eq!(
            select.handle_mouse_event(click(5, 2)).unwrap(),
            Some(Action::OpenDatePicker("due".into()))
        );
        // Below the three rows of the control
        assert_eq!(select.handle_mouse_event(click(5, 4)).unwrap(), None);
    }

    #[test]
    fn test_draw_shows_value() {
        let mut select = DateSelect::new("due").with_date(Some(ymd(2026, 10, 17)));
        let mut terminal = Terminal::new(TestBackend::new(20, 3)).unwrap();
        terminal
            .draw(|frame| select.draw(frame, frame.area()).unwrap())
            .unwrap();

        let buffer = terminal.backend().buffer();
        let row: String = (0..20).map(|x| buffer[(x, 1)].symbol().to_string()).collect();
        // Border, two cells of padding, 12 cells of text, chevron, padding, border
        assert_eq!(row, "┃  2026-10-17   ▼  ┃");
    }

    #[test]
    fn test_mount_installs_screen() {
        let mut screens = ScreenStack::new();
        let select = DateSelect::new("due");
        select
            .on_mount(&mut screens, DatePicker::new(ymd(2026, 10, 17)))
            .unwrap();

        let screen = screens.get(&select.screen_name()).unwrap();
        assert_eq!(screen.dialog.target, Some(WidgetId::new("due")));

        assert!(select
            .on_mount(&mut screens, DatePicker::new(ymd(2026, 10, 17)))
            .is_err());
    }

    #[test]
    fn test_show_date_picker() {
        let mut screens = ScreenStack::new();
        let select = DateSelect::new("due").with_date(Some(ymd(2026, 2, 14)));
        select
            .on_mount(&mut screens, DatePicker::new(ymd(2026, 10, 17)))
            .unwrap();

        select.show_date_picker(&mut screens, Size::new(80, 24)).unwrap();

        let screen = screens.active().unwrap();
        assert!(screen.dialog.display);
        assert_eq!(screen.dialog.date_picker.focused_date(), Some(ymd(2026, 2, 14)));
    }

    #[test]
    fn test_show_without_mount() {
        let mut screens = ScreenStack::new();
        let select = DateSelect::new("due");
        assert!(matches!(
            select.show_date_picker(&mut screens, Size::new(80, 24)),
            Err(Error::ScreenNotInstalled(_))
        ));
    }

    #[test]
    fn test_selected_date_becomes_value() {
        let mut select = DateSelect::new("due");
        assert_eq!(select.value(), None);

        select.on_date_picker_selected(ymd(2026, 10, 20));
        assert_eq!(select.value(), Some(ymd(2026, 10, 20)));
    }
}
