//! Action enum - All possible application actions
//!
//! Actions are discrete operations that the application can perform.
//! Components emit Actions in response to events, and the App processes
//! them to update state.

use std::fmt;

use chrono::NaiveDate;

use crate::model::WidgetId;

/// All possible actions in the application
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    // ─────────────────────────────────────────────────────────────────────────
    // App Lifecycle
    // ─────────────────────────────────────────────────────────────────────────
    /// Regular tick for time-based updates
    Tick,
    /// Terminal was resized
    Resize(u16, u16),
    /// Quit the application
    Quit,

    // ─────────────────────────────────────────────────────────────────────────
    // Focus
    // ─────────────────────────────────────────────────────────────────────────
    /// Move focus to the next field
    FocusNext,
    /// Move focus to the previous field
    FocusPrev,
    /// Give focus to a specific field
    Focus(WidgetId),

    // ─────────────────────────────────────────────────────────────────────────
    // Date picker
    // ─────────────────────────────────────────────────────────────────────────
    /// Open the picker dialog belonging to a select
    OpenDatePicker(WidgetId),
    /// A day was chosen in the picker
    DateSelected {
        target: Option<WidgetId>,
        date: NaiveDate,
    },
    /// Close the picker after a selection and refocus its select
    CloseDatePicker(Option<WidgetId>),
    /// Remove the top screen without choosing a date
    PopScreen,
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Action::Tick => write!(f, "Tick"),
            Action::Resize(w, h) => write!(f, "Resize({}, {})", w, h),
            Action::Quit => write!(f, "Quit"),
            Action::FocusNext => write!(f, "FocusNext"),
            Action::FocusPrev => write!(f, "FocusPrev"),
            Action::Focus(id) => write!(f, "Focus({})", id),
            Action::OpenDatePicker(id) => write!(f, "OpenDatePicker({})", id),
            Action::DateSelected { target, date } => match target {
                Some(id) => write!(f, "DateSelected({}, {})", id, date),
                None => write!(f, "DateSelected({})", date),
            },
            Action::CloseDatePicker(Some(id)) => write!(f, "CloseDatePicker({})", id),
            Action::CloseDatePicker(None) => write!(f, "CloseDatePicker"),
            Action::PopScreen => write!(f, "PopScreen"),
        }
    }
}
