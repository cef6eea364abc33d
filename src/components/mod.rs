//! UI Components
//!
//! Each component encapsulates its own state, event handling, and rendering logic.
//! Components communicate through Actions rather than direct state mutation.

pub mod date_picker;
pub mod date_picker_dialog;
pub mod date_picker_screen;
pub mod date_select;
pub mod help_bar;
pub mod layout;

pub use date_picker::{DatePicker, DayLabel, GridHit};
pub use date_picker_dialog::{DatePickerDialog, DIALOG_SIZE};
pub use date_picker_screen::DatePickerDialogScreen;
pub use date_select::{DateSelect, CHEVRON, DEFAULT_FORMAT};
pub use help_bar::HelpBar;
pub use layout::{calculate_form_layout, centered_offset, contains, dialog_rect, FormLayout};
