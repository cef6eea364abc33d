//! Modal screen that centers the date picker dialog and dismisses it

use anyhow::Result;
use chrono::NaiveDate;
use crossterm::event::{KeyCode, KeyEvent, MouseButton, MouseEvent, MouseEventKind};
use log::debug;
use ratatui::{layout::Rect, Frame};

use crate::action::Action;
use crate::component::Component;
use crate::components::{centered_offset, contains, dialog_rect, DatePickerDialog};
use crate::model::Size;

pub struct DatePickerDialogScreen {
    /// Date to open the picker on; `None` opens on today
    pub date: Option<NaiveDate>,
    pub dialog: DatePickerDialog,
}

impl DatePickerDialogScreen {
    pub fn new(dialog: DatePickerDialog) -> Self {
        Self { date: None, dialog }
    }

    /// Called each time the screen is pushed
    pub fn on_mount(&mut self, viewport: Size) {
        self.on_resize(viewport);
        self.dialog.date_picker.focus_initial(self.date);
    }

    /// Called when the screen is popped
    pub fn on_unmount(&mut self) {
        self.dialog.date_picker.blur();
        self.dialog.on_descendant_blur();
    }

    pub fn on_resize(&mut self, viewport: Size) {
        self.dialog.offset = centered_offset(viewport, self.dialog.size);
    }

    /// Clicks outside the dialog dismiss the screen
    pub fn on_click(&mut self, mouse: MouseEvent) -> Result<Option<Action>> {
        if !contains(self.dialog.offset, self.dialog.size, mouse.column, mouse.row) {
            debug!("click at ({}, {}) outside date picker", mouse.column, mouse.row);
            return Ok(Some(Action::PopScreen));
        }
        self.dialog.handle_mouse_event(mouse)
    }
}

impl Component for DatePickerDialogScreen {
    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        match key.code {
            KeyCode::Esc => Ok(Some(Action::PopScreen)),
            _ => self.dialog.handle_key_event(key),
        }
    }

    fn handle_mouse_event(&mut self, mouse: MouseEvent) -> Result<Option<Action>> {
        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => self.on_click(mouse),
            _ => Ok(None),
        }
    }

    fn update(&mut self, action: Action) -> Result<Option<Action>> {
        if let Action::Resize(width, height) = action {
            self.on_resize(Size::new(width, height));
        }
        Ok(None)
    }

    fn draw(&mut self, frame: &mut Frame, area: Rect) -> Result<()> {
        let rect = dialog_rect(self.dialog.offset, self.dialog.size, area);
        self.dialog.draw(frame, rect)
    }
}
