//! Keyboard focus across the widgets of the base screen

use crate::model::geometry::WidgetId;

/// Ordered set of focusable widgets with at most one focused
#[derive(Debug, Default)]
pub struct FocusRing {
    order: Vec<WidgetId>,
    focused: Option<usize>,
}

impl FocusRing {
    pub fn new(order: Vec<WidgetId>) -> Self {
        let focused = if order.is_empty() { None } else { Some(0) };
        Self { order, focused }
    }

    pub fn focused(&self) -> Option<&WidgetId> {
        self.focused.and_then(|i| self.order.get(i))
    }

    pub fn is_focused(&self, id: &WidgetId) -> bool {
        self.focused() == Some(id)
    }

    /// Focus `id`; returns false if it is not part of the ring
    pub fn focus(&mut self, id: &WidgetId) -> bool {
        match self.order.iter().position(|w| w == id) {
            Some(i) => {
                self.focused = Some(i);
                true
            }
            None => false,
        }
    }

    pub fn focus_next(&mut self) {
        let len = self.order.len();
        if len == 0 {
            return;
        }
        self.focused = Some(match self.focused {
            None => 0,
            Some(i) => (i + 1) % len,
        });
    }

    pub fn focus_prev(&mut self) {
        let len = self.order.len();
        if len == 0 {
            return;
        }
        self.focused = Some(match self.focused {
            None => len - 1,
            Some(i) => (len + i - 1) % len,
        });
    }
}
