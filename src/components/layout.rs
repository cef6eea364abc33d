//! Layout calculations for the UI

use ratatui::layout::{Constraint, Direction, Layout, Rect};

use crate::model::{Offset, Size};

/// Offset that centers `dialog` in `viewport`
///
/// A dialog larger than the viewport is pinned to the top-left corner.
pub fn centered_offset(viewport: Size, dialog: Size) -> Offset {
    Offset::new(
        viewport.width.saturating_sub(dialog.width) / 2,
        viewport.height.saturating_sub(dialog.height) / 2,
    )
}

/// Whether the cell (`x`, `y`) falls inside the rectangle at `offset`
pub fn contains(offset: Offset, size: Size, x: u16, y: u16) -> bool {
    let (x, y) = (u32::from(x), u32::from(y));
    let (ox, oy) = (u32::from(offset.x), u32::from(offset.y));

    ox <= x && x < ox + u32::from(size.width) && oy <= y && y < oy + u32::from(size.height)
}

/// Rectangle a dialog occupies inside `area`, clipped to it
pub fn dialog_rect(offset: Offset, size: Size, area: Rect) -> Rect {
    Rect::new(
        area.x.saturating_add(offset.x),
        area.y.saturating_add(offset.y),
        size.width,
        size.height,
    )
    .intersection(area)
}

/// Form layout areas
pub struct FormLayout {
    pub title: Rect,
    pub fields: Vec<Rect>,
    pub status: Rect,
    pub help: Rect,
}

/// Calculate the demo form layout: a title, one row per field, a status
/// panel and a one-line help bar
pub fn calculate_form_layout(area: Rect, field_count: usize) -> FormLayout {
    let main_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2),
            Constraint::Min(0),
            Constraint::Length(3),
            Constraint::Length(1),
        ])
        .split(area);

    // Fields take the left column so the dialog has room to center over them
    let column = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Max(40), Constraint::Min(0)])
        .split(main_chunks[1])[0];

    let fields = Layout::default()
        .direction(Direction::Vertical)
        .constraints(
            std::iter::repeat(Constraint::Length(4))
                .take(field_count)
                .chain(std::iter::once(Constraint::Min(0))),
        )
        .split(column)
        .iter()
        .take(field_count)
        .copied()
        .collect();

    FormLayout {
        title: main_chunks[0],
        fields,
        status: main_chunks[2],
        help: main_chunks[3],
    }
}
