pub mod focus;
pub mod geometry;
pub mod screen;

pub use focus::FocusRing;
pub use geometry::{Offset, Size, WidgetId};
pub use screen::ScreenStack;
