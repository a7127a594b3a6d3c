//! Pointer-drag and wheel scrolling for horizontal movie strips.
//!
//! # Design
//! - Pure state machine: callers feed pointer coordinates and the element's
//!   current scroll offset, and apply the returned offset themselves.
//! - `Idle -> Dragging` on pointer-down; pointer-up or pointer-leave returns
//!   to `Idle`. Nothing is persisted.

/// Multiplier applied to pointer travel while dragging.
pub const DRAG_SPEED: i32 = 3;

/// Drag interaction state.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DragScroll {
    /// No drag in progress.
    #[default]
    Idle,
    /// Pointer is held down on the strip.
    Dragging {
        /// Pointer x relative to the strip when the drag started.
        start_x: i32,
        /// Strip scroll offset when the drag started.
        scroll_left: i32,
    },
}

impl DragScroll {
    /// Whether a drag is in progress.
    #[must_use]
    pub const fn is_dragging(&self) -> bool {
        matches!(self, Self::Dragging { .. })
    }

    /// Begin dragging at `page_x` over a strip positioned at `offset_left`.
    pub const fn pointer_down(&mut self, page_x: i32, offset_left: i32, scroll_left: i32) {
        *self = Self::Dragging {
            start_x: page_x.saturating_sub(offset_left),
            scroll_left,
        };
    }

    /// Pointer moved; returns the new scroll offset while dragging.
    #[must_use]
    pub const fn pointer_move(&self, page_x: i32, offset_left: i32) -> Option<i32> {
        match *self {
            Self::Idle => None,
            Self::Dragging {
                start_x,
                scroll_left,
            } => {
                let x = page_x.saturating_sub(offset_left);
                let walk = x.saturating_sub(start_x).saturating_mul(DRAG_SPEED);
                Some(scroll_left.saturating_sub(walk))
            }
        }
    }

    /// Pointer released over the strip.
    pub const fn pointer_up(&mut self) {
        *self = Self::Idle;
    }

    /// Pointer left the strip.
    pub const fn pointer_leave(&mut self) {
        *self = Self::Idle;
    }
}

/// Translate vertical wheel travel into a horizontal scroll offset.
#[must_use]
pub fn wheel_scroll(scroll_left: i32, delta_y: f64) -> i32 {
    let delta = delta_y.round().clamp(f64::from(i32::MIN), f64::from(i32::MAX));
    #[allow(clippy::cast_possible_truncation)]
    let delta = delta as i32;
    scroll_left.saturating_add(delta)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn move_without_press_does_nothing() {
        let drag = DragScroll::default();
        assert_eq!(drag.pointer_move(200, 10), None);
    }

    #[test]
    fn drag_scrolls_three_times_pointer_travel() {
        let mut drag = DragScroll::Idle;
        drag.pointer_down(110, 10, 500);
        assert!(drag.is_dragging());
        assert_eq!(drag.pointer_move(140, 10), Some(410));
        assert_eq!(drag.pointer_move(90, 10), Some(560));
    }

    #[test]
    fn release_and_leave_end_the_drag() {
        let mut drag = DragScroll::Idle;
        drag.pointer_down(0, 0, 0);
        drag.pointer_up();
        assert_eq!(drag, DragScroll::Idle);
        drag.pointer_down(0, 0, 0);
        drag.pointer_leave();
        assert_eq!(drag.pointer_move(50, 0), None);
    }

    #[test]
    fn extreme_coordinates_saturate() {
        let mut drag = DragScroll::Idle;
        drag.pointer_down(0, 0, 0);
        assert_eq!(drag.pointer_move(i32::MIN, 1), Some(i32::MAX));
        drag.pointer_down(i32::MIN, 1, 0);
        assert_eq!(drag.pointer_move(i32::MAX, 0), Some(-i32::MAX));
    }

    #[test]
    fn wheel_adds_vertical_delta() {
        assert_eq!(wheel_scroll(100, 40.0), 140);
        assert_eq!(wheel_scroll(100, -120.4), -20);
        assert_eq!(wheel_scroll(i32::MAX, 10.0), i32::MAX);
    }
}
