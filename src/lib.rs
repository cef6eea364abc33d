//! datepick - a date select control and calendar popup for ratatui apps
//!
//! A [`DateSelect`](components::DateSelect) shows the chosen date and a
//! chevron. Enter or a click opens its
//! [`DatePickerDialog`](components::DatePickerDialog) on a modal
//! [`DatePickerDialogScreen`](components::DatePickerDialogScreen), which
//! centers the dialog, focuses a day, and closes on selection, Escape or a
//! click outside.

pub mod action;
pub mod app;
pub mod component;
pub mod components;
pub mod config;
pub mod error;
pub mod logger;
pub mod model;
pub mod tui;

pub use error::{Error, Result};
