//! Calendar grid for choosing a day
//!
//! One month is shown at a time: a header with previous/next arrows, a row
//! of weekday names and up to six week rows. Only days of the shown month
//! get a label; the cells before the first and after the last day stay
//! blank.

use anyhow::Result;
use chrono::{Datelike, Days, Local, Months, NaiveDate, Weekday};
use crossterm::event::{KeyCode, KeyEvent, MouseButton, MouseEvent, MouseEventKind};
use log::debug;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::action::Action;
use crate::component::Component;
use crate::model::WidgetId;

/// Width of one day cell
pub const CELL_WIDTH: u16 = 4;
/// Width of the full seven-column grid
pub const GRID_WIDTH: u16 = CELL_WIDTH * 7;
/// Rows needed to draw a six-week month
pub const GRID_HEIGHT: u16 = FIRST_WEEK_ROW + 5 * WEEK_ROW_STRIDE + 1;

const HEADER_ROW: u16 = 0;
const FIRST_WEEK_ROW: u16 = 4;
const WEEK_ROW_STRIDE: u16 = 2;
const ARROW_WIDTH: u16 = 3;

/// A day of the shown month and where it sits in the grid
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DayLabel {
    pub day: u32,
    pub week: u16,
    pub column: u16,
    pub is_today: bool,
}

/// What a click on the grid landed on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GridHit {
    PrevMonth,
    NextMonth,
    Day(u32),
}

pub struct DatePicker {
    /// A day in the shown month; the focused day when one is focused
    date: NaiveDate,
    today: NaiveDate,
    focused_day: Option<u32>,
    first_weekday: Weekday,
    /// Select control that receives the chosen date
    pub target: Option<WidgetId>,
    /// Grid area from the last draw, used for mouse hit-testing
    grid_area: Rect,
}

impl Default for DatePicker {
    fn default() -> Self {
        Self::new(Local::now().date_naive())
    }
}

impl DatePicker {
    /// Picker showing the month of `today`
    pub fn new(today: NaiveDate) -> Self {
        Self {
            date: today,
            today,
            focused_day: None,
            first_weekday: Weekday::Mon,
            target: None,
            grid_area: Rect::default(),
        }
    }

    pub fn with_first_weekday(mut self, first_weekday: Weekday) -> Self {
        self.first_weekday = first_weekday;
        self
    }

    /// Show the month containing `date`, dropping any focus
    pub fn set_date(&mut self, date: NaiveDate) {
        self.date = date;
        self.focused_day = None;
    }

    pub fn focused_day(&self) -> Option<u32> {
        self.focused_day
    }

    pub fn focused_date(&self) -> Option<NaiveDate> {
        self.focused_day.and_then(|day| self.date.with_day(day))
    }

    pub fn has_focus(&self) -> bool {
        self.focused_day.is_some()
    }

    pub fn blur(&mut self) {
        self.focused_day = None;
    }

    /// Labels for every day of the shown month, in order
    pub fn day_labels(&self) -> Vec<DayLabel> {
        let first = first_of_month(self.date);
        let lead = (first.weekday().num_days_from_monday() + 7
            - self.first_weekday.num_days_from_monday())
            % 7;

        (1..=days_in_month(self.date))
            .map(|day| {
                let index = lead + day - 1;
                DayLabel {
                    day,
                    week: (index / 7) as u16,
                    column: (index % 7) as u16,
                    is_today: first.with_day(day) == Some(self.today),
                }
            })
            .collect()
    }

    /// The label for today, if today falls in the shown month
    pub fn today_label(&self) -> Option<DayLabel> {
        self.day_labels().into_iter().find(|label| label.is_today)
    }

    /// Focus the label with this day number
    pub fn focus_day(&mut self, day: u32) -> bool {
        match self.date.with_day(day) {
            Some(date) => {
                self.date = date;
                self.focused_day = Some(day);
                true
            }
            None => false,
        }
    }

    /// Focus the day to start from when the picker opens
    ///
    /// With a date, its month is shown and its day focused. Without one,
    /// the picker goes back to this month and focuses today's label, or the
    /// first day if that lookup fails.
    pub fn focus_initial(&mut self, date: Option<NaiveDate>) {
        if let Some(date) = date {
            self.set_date(date);
            let day = date.day();
            if let Some(label) = self.day_labels().into_iter().find(|l| l.day == day) {
                self.focus_day(label.day);
            }
            return;
        }

        self.set_date(self.today);
        match self.today_label() {
            Some(label) => {
                self.focus_day(label.day);
            }
            None => {
                debug!("today is not in {}, focusing first day", self.date.format("%B %Y"));
                if let Some(label) = self.day_labels().first() {
                    self.focus_day(label.day);
                }
            }
        }
    }

    /// Build the selection message for a day of the shown month
    pub fn selected(&self, day: u32) -> Option<Action> {
        let date = self.date.with_day(day)?;
        Some(Action::DateSelected {
            target: self.target.clone(),
            date,
        })
    }

    pub fn prev_month(&mut self) {
        self.shift_months(false);
    }

    pub fn next_month(&mut self) {
        self.shift_months(true);
    }

    fn shift_months(&mut self, forward: bool) {
        // chrono clamps the day to the length of the target month
        let months = Months::new(1);
        let shifted = if forward {
            self.date.checked_add_months(months)
        } else {
            self.date.checked_sub_months(months)
        };

        if let Some(date) = shifted {
            self.date = date;
            if self.focused_day.is_some() {
                self.focused_day = Some(date.day());
            }
        }
    }

    fn move_focus(&mut self, days: i64) {
        let Some(current) = self.focused_date() else {
            if let Some(label) = self.day_labels().first() {
                self.focus_day(label.day);
            }
            return;
        };

        let delta = Days::new(days.unsigned_abs());
        let moved = if days >= 0 {
            current.checked_add_days(delta)
        } else {
            current.checked_sub_days(delta)
        };

        if let Some(date) = moved {
            self.date = date;
            self.focused_day = Some(date.day());
        }
    }

    fn focus_today(&mut self) {
        self.date = self.today;
        self.focused_day = Some(self.today.day());
    }

    /// Map a cell relative to the grid's top-left corner to what is there
    pub fn hit_test(&self, column: u16, row: u16) -> Option<GridHit> {
        if row == HEADER_ROW {
            if column < ARROW_WIDTH {
                return Some(GridHit::PrevMonth);
            }
            if (GRID_WIDTH - ARROW_WIDTH..GRID_WIDTH).contains(&column) {
                return Some(GridHit::NextMonth);
            }
            return None;
        }

        if row < FIRST_WEEK_ROW || (row - FIRST_WEEK_ROW) % WEEK_ROW_STRIDE != 0 {
            return None;
        }
        if column >= GRID_WIDTH {
            return None;
        }

        let week = (row - FIRST_WEEK_ROW) / WEEK_ROW_STRIDE;
        let cell = column / CELL_WIDTH;

        self.day_labels()
            .into_iter()
            .find(|label| label.week == week && label.column == cell)
            .map(|label| GridHit::Day(label.day))
    }

    fn weekday_names(&self) -> Vec<String> {
        std::iter::successors(Some(self.first_weekday), |d| Some(d.succ()))
            .take(7)
            .map(|d| d.to_string().chars().take(2).collect())
            .collect()
    }

    fn header_line(&self) -> Line<'static> {
        let arrow_style = Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD);
        let title_width = (GRID_WIDTH - 2 * ARROW_WIDTH) as usize;

        Line::from(vec![
            Span::styled(" < ", arrow_style),
            Span::styled(
                format!("{:^width$}", self.date.format("%B %Y").to_string(), width = title_width),
                Style::default().add_modifier(Modifier::BOLD),
            ),
            Span::styled(" > ", arrow_style),
        ])
    }

    fn lines(&self) -> Vec<Line<'static>> {
        let mut lines = vec![self.header_line(), Line::raw("")];

        lines.push(Line::from(
            self.weekday_names()
                .into_iter()
                .map(|name| {
                    Span::styled(format!("{:>3} ", name), Style::default().fg(Color::Yellow))
                })
                .collect::<Vec<_>>(),
        ));

        let labels = self.day_labels();
        let weeks = labels.last().map(|l| l.week + 1).unwrap_or(0);

        for week in 0..weeks {
            lines.push(Line::raw(""));

            let spans: Vec<_> = (0..7)
                .map(|column| {
                    match labels.iter().find(|l| l.week == week && l.column == column) {
                        Some(label) => {
                            Span::styled(format!("{:>3} ", label.day), self.day_style(label))
                        }
                        None => Span::raw(" ".repeat(CELL_WIDTH as usize)),
                    }
                })
                .collect();

            lines.push(Line::from(spans));
        }

        lines
    }

    fn day_style(&self, label: &DayLabel) -> Style {
        if self.focused_day == Some(label.day) {
            Style::default()
                .add_modifier(Modifier::REVERSED)
                .add_modifier(Modifier::BOLD)
        } else if label.is_today {
            Style::default().fg(Color::Cyan)
        } else {
            Style::default()
        }
    }
}

impl Component for DatePicker {
    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        match key.code {
            KeyCode::Left | KeyCode::Char('h') => self.move_focus(-1),
            KeyCode::Right | KeyCode::Char('l') => self.move_focus(1),
            KeyCode::Up | KeyCode::Char('k') => self.move_focus(-7),
            KeyCode::Down | KeyCode::Char('j') => self.move_focus(7),
            KeyCode::PageUp => self.prev_month(),
            KeyCode::PageDown => self.next_month(),
            KeyCode::Home => self.focus_today(),
            KeyCode::Enter | KeyCode::Char(' ') => {
                return Ok(self.focused_day.and_then(|day| self.selected(day)));
            }
            _ => {}
        }
        Ok(None)
    }

    fn handle_mouse_event(&mut self, mouse: MouseEvent) -> Result<Option<Action>> {
        if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
            return Ok(None);
        }

        let area = self.grid_area;
        if !area.contains((mouse.column, mouse.row).into()) {
            return Ok(None);
        }

        match self.hit_test(mouse.column - area.x, mouse.row - area.y) {
            Some(GridHit::PrevMonth) => self.prev_month(),
            Some(GridHit::NextMonth) => self.next_month(),
            Some(GridHit::Day(day)) => {
                self.focus_day(day);
                return Ok(self.selected(day));
            }
            None => {}
        }
        Ok(None)
    }

    fn draw(&mut self, frame: &mut Frame, area: Rect) -> Result<()> {
        let x = area.x + area.width.saturating_sub(GRID_WIDTH) / 2;
        self.grid_area = Rect::new(x, area.y, GRID_WIDTH.min(area.width), area.height)
            .intersection(area);

        frame.render_widget(Paragraph::new(self.lines()), self.grid_area);
        Ok(())
    }
}

fn first_of_month(date: NaiveDate) -> NaiveDate {
    date.with_day(1).unwrap_or(date)
}

fn days_in_month(date: NaiveDate) -> u32 {
    let first = first_of_month(date);
    match first.checked_add_months(Months::new(1)) {
        Some(next) => next.signed_duration_since(first).num_days() as u32,
        None => 31,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyModifiers, MouseEvent};
    use ratatui::{backend::TestBackend, Terminal};

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn click(column: u16, row: u16) -> MouseEvent {
        MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column,
            row,
            modifiers: KeyModifiers::NONE,
        }
    }

    fn drawn(picker: &mut DatePicker) -> Terminal<TestBackend> {
        let mut terminal = Terminal::new(TestBackend::new(GRID_WIDTH, GRID_HEIGHT)).unwrap();
        terminal
            .draw(|frame| picker.draw(frame, frame.area()).unwrap())
            .unwrap();
        terminal
    }

    #[test]
    fn test_day_labels_layout() {
        // October 2026 starts on a Thursday
        let picker = DatePicker::new(ymd(2026, 10, 17));
        let labels = picker.day_labels();

        assert_eq!(labels.len(), 31);
        assert_eq!(labels[0].week, 0);
        assert_eq!(labels[0].column, 3);
        assert_eq!(labels[30].week, 4);
        assert_eq!(labels[30].column, 5);
    }

    #[test]
    fn test_day_labels_sunday_first() {
        let picker = DatePicker::new(ymd(2026, 10, 17)).with_first_weekday(Weekday::Sun);
        assert_eq!(picker.day_labels()[0].column, 4);
    }

    #[test]
    fn test_february_leap_year() {
        let picker = DatePicker::new(ymd(2028, 2, 10));
        assert_eq!(picker.day_labels().len(), 29);
    }

    #[test]
    fn test_today_label() {
        let mut picker = DatePicker::new(ymd(2026, 10, 17));
        assert_eq!(picker.today_label().map(|l| l.day), Some(17));

        picker.set_date(ymd(2026, 11, 3));
        assert!(picker.today_label().is_none());
    }

    #[test]
    fn test_focus_initial_with_date() {
        let mut picker = DatePicker::new(ymd(2026, 10, 17));
        picker.focus_initial(Some(ymd(2025, 3, 9)));

        assert_eq!(picker.focused_date(), Some(ymd(2025, 3, 9)));
    }

    #[test]
    fn test_focus_initial_today() {
        let mut picker = DatePicker::new(ymd(2026, 10, 17));
        picker.focus_initial(None);

        assert_eq!(picker.focused_day(), Some(17));
    }

    #[test]
    fn test_focus_initial_returns_to_this_month() {
        let mut picker = DatePicker::new(ymd(2026, 10, 17));
        picker.next_month();
        picker.next_month();
        picker.focus_initial(None);

        assert_eq!(picker.focused_date(), Some(ymd(2026, 10, 17)));
    }

    #[test]
    fn test_arrow_keys_cross_month() {
        let mut picker = DatePicker::new(ymd(2026, 10, 17));
        picker.focus_day(1);

        picker.handle_key_event(key(KeyCode::Left)).unwrap();
        assert_eq!(picker.focused_date(), Some(ymd(2026, 9, 30)));

        picker.handle_key_event(key(KeyCode::Down)).unwrap();
        assert_eq!(picker.focused_date(), Some(ymd(2026, 10, 7)));

        picker.handle_key_event(key(KeyCode::Up)).unwrap();
        picker.handle_key_event(key(KeyCode::Right)).unwrap();
        assert_eq!(picker.focused_date(), Some(ymd(2026, 10, 1)));
    }

    #[test]
    fn test_page_keys_clamp_day() {
        let mut picker = DatePicker::new(ymd(2026, 1, 31));
        picker.focus_day(31);

        picker.handle_key_event(key(KeyCode::PageDown)).unwrap();
        assert_eq!(picker.focused_date(), Some(ymd(2026, 2, 28)));

        picker.handle_key_event(key(KeyCode::PageUp)).unwrap();
        assert_eq!(picker.focused_date(), Some(ymd(2026, 1, 28)));
    }

    #[test]
    fn test_home_focuses_today() {
        let mut picker = DatePicker::new(ymd(2026, 10, 17));
        picker.set_date(ymd(2024, 5, 5));
        picker.handle_key_event(key(KeyCode::Home)).unwrap();

        assert_eq!(picker.focused_date(), Some(ymd(2026, 10, 17)));
    }

    #[test]
    fn test_enter_selects_focused_day() {
        let mut picker = DatePicker::new(ymd(2026, 10, 17));
        picker.target = Some("start".into());
        assert_eq!(picker.handle_key_event(key(KeyCode::Enter)).unwrap(), None);

        picker.focus_day(20);
        let action = picker.handle_key_event(key(KeyCode::Enter)).unwrap();
        assert_eq!(
            action,
            Some(Action::DateSelected {
                target: Some("start".into()),
                date: ymd(2026, 10, 20),
            })
        );
    }

    #[test]
    fn test_hit_test() {
        let picker = DatePicker::new(ymd(2026, 10, 17));

        assert_eq!(picker.hit_test(0, 0), Some(GridHit::PrevMonth));
        assert_eq!(picker.hit_test(GRID_WIDTH - 1, 0), Some(GridHit::NextMonth));
        assert_eq!(picker.hit_test(10, 0), None);
        // Thursday column of the first week
        assert_eq!(picker.hit_test(12, 4), Some(GridHit::Day(1)));
        // Blank row between weeks
        assert_eq!(picker.hit_test(12, 5), None);
        // Monday of the first week is padding
        assert_eq!(picker.hit_test(0, 4), None);
        assert_eq!(picker.hit_test(0, 6), Some(GridHit::Day(5)));
    }

    #[test]
    fn test_click_selects_day() {
        let mut picker = DatePicker::new(ymd(2026, 10, 17));
        drawn(&mut picker);

        let action = picker.handle_mouse_event(click(0, 6)).unwrap();
        assert_eq!(
            action,
            Some(Action::DateSelected {
                target: None,
                date: ymd(2026, 10, 5),
            })
        );
    }

    #[test]
    fn test_click_arrows_change_month() {
        let mut picker = DatePicker::new(ymd(2026, 10, 17));
        drawn(&mut picker);

        picker.handle_mouse_event(click(1, 0)).unwrap();
        assert_eq!(picker.date.month(), 9);
        picker.handle_mouse_event(click(GRID_WIDTH - 2, 0)).unwrap();
        picker.handle_mouse_event(click(GRID_WIDTH - 2, 0)).unwrap();
        assert_eq!(picker.date.month(), 11);
    }

    #[test]
    fn test_render_grid() {
        let mut picker = DatePicker::new(ymd(2026, 10, 17));
        let terminal = drawn(&mut picker);
        let buffer = terminal.backend().buffer();

        let row = |y: u16| -> String {
            (0..GRID_WIDTH)
                .map(|x| buffer[(x, y)].symbol().to_string())
                .collect()
        };

        assert!(row(0).contains("October 2026"));
        assert_eq!(row(2), " Mo  Tu  We  Th  Fr  Sa  Su ");
        assert_eq!(row(4), format!("{}{}", " ".repeat(12), "  1   2   3   4 "));
    }
}
