//! Demo form: a column of date selects sharing one screen stack

use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseEvent};
use log::{debug, warn};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::action::Action;
use crate::component::Component;
use crate::components::{calculate_form_layout, DatePicker, DatePickerDialogScreen, DateSelect, HelpBar};
use crate::model::{FocusRing, ScreenStack, Size, WidgetId};

pub struct App {
    pub selects: Vec<DateSelect>,
    pub screens: ScreenStack<DatePickerDialogScreen>,
    pub focus: FocusRing,
    pub should_quit: bool,
    viewport: Size,
}

impl App {
    pub fn new(selects: Vec<DateSelect>) -> Self {
        let focus = FocusRing::new(selects.iter().map(|s| s.id().clone()).collect());
        let mut app = Self {
            selects,
            screens: ScreenStack::new(),
            focus,
            should_quit: false,
            viewport: Size::default(),
        };
        app.sync_focus();
        app
    }

    /// Give every select its dialog screen
    pub fn mount(&mut self, make_picker: impl Fn() -> DatePicker) -> crate::Result<()> {
        for select in &self.selects {
            select.on_mount(&mut self.screens, make_picker())?;
        }
        Ok(())
    }

    pub fn set_viewport(&mut self, viewport: Size) {
        self.viewport = viewport;
    }

    pub fn select(&self, id: &WidgetId) -> Option<&DateSelect> {
        self.selects.iter().find(|s| s.id() == id)
    }

    fn select_mut(&mut self, id: &WidgetId) -> Option<&mut DateSelect> {
        self.selects.iter_mut().find(|s| s.id() == id)
    }

    pub fn picker_open(&self) -> bool {
        !self.screens.is_empty()
    }

    fn sync_focus(&mut self) {
        for select in &mut self.selects {
            select.focused = self.focus.is_focused(select.id());
        }
    }

    fn pop_active_screen(&mut self) -> Result<()> {
        match self.screens.active_mut() {
            Some(screen) => screen.on_unmount(),
            None => return Ok(()),
        }
        self.screens.pop_screen()?;
        Ok(())
    }

    fn draw_status(&self, frame: &mut Frame, area: Rect) {
        let mut spans = Vec::new();
        for select in &self.selects {
            let label = select.name.clone().unwrap_or_else(|| select.id().to_string());
            let value = match select.value() {
                Some(date) => date.format(select.format()).to_string(),
                None => "-".to_string(),
            };
            spans.push(Span::styled(
                format!(" {}: ", label),
                Style::default().fg(Color::DarkGray),
            ));
            spans.push(Span::styled(value, Style::default().fg(Color::White)));
        }

        let paragraph = Paragraph::new(Line::from(spans)).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::DarkGray))
                .title(" Values "),
        );
        frame.render_widget(paragraph, area);
    }
}

impl Component for App {
    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        if let Some(screen) = self.screens.active_mut() {
            return screen.handle_key_event(key);
        }

        let action = match (key.modifiers, key.code) {
            (KeyModifiers::CONTROL, KeyCode::Char('c')) => Some(Action::Quit),
            (_, KeyCode::Char('q')) => Some(Action::Quit),
            (_, KeyCode::Tab) | (_, KeyCode::Down) => Some(Action::FocusNext),
            (_, KeyCode::BackTab) | (_, KeyCode::Up) => Some(Action::FocusPrev),
            _ => {
                let focused = self.focus.focused().cloned();
                match focused.and_then(|id| self.select_mut(&id)) {
                    Some(select) => select.handle_key_event(key)?,
                    None => None,
                }
            }
        };
        Ok(action)
    }

    fn handle_mouse_event(&mut self, mouse: MouseEvent) -> Result<Option<Action>> {
        if let Some(screen) = self.screens.active_mut() {
            return screen.handle_mouse_event(mouse);
        }

        for select in &mut self.selects {
            if let Some(action) = select.handle_mouse_event(mouse)? {
                return Ok(Some(action));
            }
        }
        Ok(None)
    }

    fn update(&mut self, action: Action) -> Result<Option<Action>> {
        match action {
            Action::Tick => {}
            Action::Resize(width, height) => {
                self.viewport = Size::new(width, height);
                if let Some(screen) = self.screens.active_mut() {
                    return screen.update(action);
                }
            }
            Action::Quit => {
                self.should_quit = true;
            }

            Action::FocusNext => {
                self.focus.focus_next();
                self.sync_focus();
            }
            Action::FocusPrev => {
                self.focus.focus_prev();
                self.sync_focus();
            }
            Action::Focus(id) => {
                if !self.focus.focus(&id) {
                    warn!("cannot focus unknown field {id}");
                }
                self.sync_focus();
            }

            Action::OpenDatePicker(id) => {
                self.focus.focus(&id);
                self.sync_focus();

                let viewport = self.viewport;
                match self.selects.iter().find(|s| *s.id() == id) {
                    Some(select) => select.show_date_picker(&mut self.screens, viewport)?,
                    None => warn!("no select {id} to open a picker for"),
                }
            }
            Action::DateSelected { target, date } => {
                if let Some(select) = target.as_ref().and_then(|id| self.select_mut(id)) {
                    select.on_date_picker_selected(date);
                }
                if let Some(screen) = self.screens.active_mut() {
                    return Ok(Some(screen.dialog.on_date_picker_selected(date)));
                }
            }
            Action::CloseDatePicker(target) => {
                self.pop_active_screen()?;
                return Ok(target.map(Action::Focus));
            }
            Action::PopScreen => {
                debug!("dismiss picker without a selection");
                self.pop_active_screen()?;
            }
        }

        Ok(None)
    }

    fn draw(&mut self, frame: &mut Frame, area: Rect) -> Result<()> {
        self.viewport = Size::new(area.width, area.height);

        let layout = calculate_form_layout(area, self.selects.len());

        frame.render_widget(
            Paragraph::new(Span::styled(
                " Pick some dates",
                Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
            )),
            layout.title,
        );

        for (select, field) in self.selects.iter_mut().zip(layout.fields.iter()) {
            select.draw(frame, *field)?;
        }

        self.draw_status(frame, layout.status);
        HelpBar {
            picker_open: self.picker_open(),
        }
        .draw(frame, layout.help);

        if let Some(screen) = self.screens.active_mut() {
            screen.draw(frame, area)?;
        }
        Ok(())
    }
}
