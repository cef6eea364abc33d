//! Popup dialog hosting the calendar grid

use anyhow::Result;
use chrono::NaiveDate;
use crossterm::event::{KeyEvent, MouseEvent};
use log::debug;
use ratatui::{
    layout::Rect,
    style::{Color, Style},
    widgets::{Block, BorderType, Borders, Clear},
    Frame,
};

use crate::action::Action;
use crate::component::Component;
use crate::components::DatePicker;
use crate::model::{Offset, Size, WidgetId};

/// Fixed size of the dialog, border included
pub const DIALOG_SIZE: Size = Size::new(30, 17);

pub struct DatePickerDialog {
    pub date_picker: DatePicker,
    /// Whether the dialog is drawn at all
    pub display: bool,
    pub size: Size,
    /// Top-left corner in screen cells, maintained by the hosting screen
    pub offset: Offset,
    /// Select control the chosen date is sent to
    pub target: Option<WidgetId>,
}

impl DatePickerDialog {
    /// Compose the dialog around a picker; the picker reports to the
    /// dialog's target
    pub fn new(target: Option<WidgetId>, mut date_picker: DatePicker) -> Self {
        date_picker.target = target.clone();
        Self {
            date_picker,
            display: false,
            size: DIALOG_SIZE,
            offset: Offset::default(),
            target,
        }
    }

    /// Hide the dialog once nothing inside it holds focus
    pub fn on_descendant_blur(&mut self) {
        if !self.date_picker.has_focus() {
            self.display = false;
        }
    }

    /// A day was picked: hide and ask for the screen to close
    pub fn on_date_picker_selected(&mut self, date: NaiveDate) -> Action {
        debug!("dialog for {:?} picked {date}", self.target);
        self.display = false;
        Action::CloseDatePicker(self.target.clone())
    }
}

impl Component for DatePickerDialog {
    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        self.date_picker.handle_key_event(key)
    }

    fn handle_mouse_event(&mut self, mouse: MouseEvent) -> Result<Option<Action>> {
        self.date_picker.handle_mouse_event(mouse)
    }

    fn draw(&mut self, frame: &mut Frame, area: Rect) -> Result<()> {
        if !self.display {
            return Ok(());
        }

        frame.render_widget(Clear, area);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Thick)
            .border_style(Style::default().fg(Color::Cyan))
            .style(Style::default().bg(Color::Rgb(36, 40, 48)));

        let inner = block.inner(area);
        frame.render_widget(block, area);

        self.date_picker.draw(frame, inner)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dialog() -> DatePickerDialog {
        let today = NaiveDate::from_ymd_opt(2026, 10, 17).unwrap();
        DatePickerDialog::new(Some("due".into()), DatePicker::new(today))
    }

    #[test]
    fn test_picker_reports_to_target() {
        let dialog = dialog();
        assert_eq!(dialog.date_picker.target, Some(WidgetId::new("due")));
        assert!(!dialog.display);
        assert_eq!(dialog.size, DIALOG_SIZE);
    }

    #[test]
    fn test_blur_hides_dialog() {
        let mut dialog = dialog();
        dialog.display = true;
        dialog.date_picker.focus_day(3);

        dialog.on_descendant_blur();
        assert!(dialog.display);

        dialog.date_picker.blur();
        dialog.on_descendant_blur();
        assert!(!dialog.display);
    }

    #[test]
    fn test_selection_hides_and_closes() {
        let mut dialog = dialog();
        dialog.display = true;

        let date = NaiveDate::from_ymd_opt(2026, 10, 2).unwrap();
        let action = dialog.on_date_picker_selected(date);

        assert!(!dialog.display);
        assert_eq!(action, Action::CloseDatePicker(Some("due".into())));
    }
}
