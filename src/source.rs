//! Terminal pointer source - crossterm mouse events as touch batches.
//!
//! The controller is input-agnostic; this adapter feeds it from a
//! terminal. Left-button press, drag and release become single-pointer
//! began/moved/ended batches in cell coordinates. Hover motion, other
//! buttons and scroll are ignored. Terminals report no touch
//! cancellation, so cancelled batches never originate here.
//!
//! # API
//!
//! - `MouseAdapter::convert(event)` - Translate one crossterm event
//! - `MouseAdapter::feed(event, pad)` - Translate and dispatch
//! - `enable_mouse` / `disable_mouse` - Control mouse capture
//!
//! # Example
//!
//! ```ignore
//! use crossterm::event::{self, Event};
//! use vpad::{MouseAdapter, TouchController};
//!
//! let mut adapter = MouseAdapter::new();
//! if let Event::Mouse(mouse) = event::read()? {
//!     adapter.feed(&mouse, &mut pad);
//! }
//! ```

use std::io::stdout;

use crossterm::event::{
    DisableMouseCapture, EnableMouseCapture, MouseButton, MouseEvent, MouseEventKind,
};
use crossterm::execute;

use crate::controller::{Touch, TouchController};
use crate::types::Point;

/// The terminal's single pointer id.
const POINTER_ID: u64 = 0;

// =============================================================================
// PointerEvent
// =============================================================================

/// A phase-tagged single-pointer batch produced by [`MouseAdapter`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointerEvent {
    Began(Touch),
    Moved(Touch),
    Ended(Touch),
}

// =============================================================================
// MouseAdapter
// =============================================================================

/// Tracks the mouse pointer across crossterm events.
///
/// Keeps the last reported position so drags carry the previous endpoint
/// the controller's move pass samples. The tracked contact starts on
/// left-button down and clears on release.
#[derive(Debug, Clone, Copy, Default)]
pub struct MouseAdapter {
    last: Option<Point>,
}

impl MouseAdapter {
    /// Adapter with no tracked contact.
    pub const fn new() -> Self {
        Self { last: None }
    }

    /// Translate one crossterm mouse event.
    ///
    /// Returns `None` for hover motion, non-left buttons and scroll. A
    /// drag with no tracked contact (capture enabled mid-drag) counts as
    /// a fresh contact.
    pub fn convert(&mut self, event: &MouseEvent) -> Option<PointerEvent> {
        let position = Point::new(event.column as f32, event.row as f32);
        match event.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                self.last = Some(position);
                Some(PointerEvent::Began(Touch::new(POINTER_ID, position)))
            }
            MouseEventKind::Drag(MouseButton::Left) => match self.last.replace(position) {
                Some(previous) => Some(PointerEvent::Moved(Touch::moved(
                    POINTER_ID, previous, position,
                ))),
                None => Some(PointerEvent::Began(Touch::new(POINTER_ID, position))),
            },
            MouseEventKind::Up(MouseButton::Left) => {
                let previous = self.last.take().unwrap_or(position);
                Some(PointerEvent::Ended(Touch::moved(
                    POINTER_ID, previous, position,
                )))
            }
            _ => None,
        }
    }

    /// Translate and dispatch into the controller.
    pub fn feed(&mut self, event: &MouseEvent, pad: &mut TouchController) {
        match self.convert(event) {
            Some(PointerEvent::Began(touch)) => pad.touches_began(&[touch]),
            Some(PointerEvent::Moved(touch)) => pad.touches_moved(&[touch]),
            Some(PointerEvent::Ended(touch)) => pad.touches_ended(&[touch]),
            None => {}
        }
    }
}

// =============================================================================
// Mouse capture
// =============================================================================

/// Enable mouse capture. Call this to start receiving mouse events.
pub fn enable_mouse() -> std::io::Result<()> {
    execute!(stdout(), EnableMouseCapture)
}

/// Disable mouse capture.
pub fn disable_mouse() -> std::io::Result<()> {
    execute!(stdout(), DisableMouseCapture)
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::key::InputKey;
    use crate::region::ButtonRegion;
    use crate::types::Rect;
    use crossterm::event::KeyModifiers;

    fn mouse(kind: MouseEventKind, column: u16, row: u16) -> MouseEvent {
        MouseEvent {
            kind,
            column,
            row,
            modifiers: KeyModifiers::empty(),
        }
    }

    /// Cell-space fixture: one button per row band, far apart.
    fn cell_regions() -> [ButtonRegion; 8] {
        let boxed = |key, col, row| ButtonRegion::new(key, Rect::centered_at(col, row, 6.0, 3.0));
        [
            boxed(InputKey::Up, 10.0, 2.0),
            boxed(InputKey::Down, 10.0, 12.0),
            boxed(InputKey::Left, 30.0, 2.0),
            boxed(InputKey::Right, 30.0, 12.0),
            boxed(InputKey::X, 50.0, 2.0),
            boxed(InputKey::Y, 50.0, 12.0),
            boxed(InputKey::A, 70.0, 2.0),
            boxed(InputKey::B, 70.0, 12.0),
        ]
    }

    #[test]
    fn test_down_starts_contact() {
        let mut adapter = MouseAdapter::new();

        let event = adapter.convert(&mouse(MouseEventKind::Down(MouseButton::Left), 5, 3));

        let expected = Touch::new(0, Point::new(5.0, 3.0));
        assert_eq!(event, Some(PointerEvent::Began(expected)));
    }

    #[test]
    fn test_drag_chains_previous_positions() {
        let mut adapter = MouseAdapter::new();
        adapter.convert(&mouse(MouseEventKind::Down(MouseButton::Left), 5, 3));

        let first = adapter.convert(&mouse(MouseEventKind::Drag(MouseButton::Left), 6, 4));
        let second = adapter.convert(&mouse(MouseEventKind::Drag(MouseButton::Left), 9, 4));

        assert_eq!(
            first,
            Some(PointerEvent::Moved(Touch::moved(
                0,
                Point::new(5.0, 3.0),
                Point::new(6.0, 4.0)
            )))
        );
        assert_eq!(
            second,
            Some(PointerEvent::Moved(Touch::moved(
                0,
                Point::new(6.0, 4.0),
                Point::new(9.0, 4.0)
            )))
        );
    }

    #[test]
    fn test_up_ends_and_clears_contact() {
        let mut adapter = MouseAdapter::new();
        adapter.convert(&mouse(MouseEventKind::Down(MouseButton::Left), 5, 3));
        adapter.convert(&mouse(MouseEventKind::Drag(MouseButton::Left), 6, 4));

        let ended = adapter.convert(&mouse(MouseEventKind::Up(MouseButton::Left), 7, 5));
        assert_eq!(
            ended,
            Some(PointerEvent::Ended(Touch::moved(
                0,
                Point::new(6.0, 4.0),
                Point::new(7.0, 5.0)
            )))
        );

        // Contact cleared: the next drag counts as a fresh one.
        let next = adapter.convert(&mouse(MouseEventKind::Drag(MouseButton::Left), 8, 5));
        assert_eq!(
            next,
            Some(PointerEvent::Began(Touch::new(0, Point::new(8.0, 5.0))))
        );
    }

    #[test]
    fn test_up_without_contact_is_stationary() {
        let mut adapter = MouseAdapter::new();

        let event = adapter.convert(&mouse(MouseEventKind::Up(MouseButton::Left), 2, 2));

        let expected = Touch::new(0, Point::new(2.0, 2.0));
        assert_eq!(event, Some(PointerEvent::Ended(expected)));
    }

    #[test]
    fn test_ignored_kinds() {
        let mut adapter = MouseAdapter::new();

        assert_eq!(adapter.convert(&mouse(MouseEventKind::Moved, 5, 5)), None);
        assert_eq!(
            adapter.convert(&mouse(MouseEventKind::Down(MouseButton::Right), 5, 5)),
            None
        );
        assert_eq!(
            adapter.convert(&mouse(MouseEventKind::Drag(MouseButton::Middle), 5, 5)),
            None
        );
        assert_eq!(
            adapter.convert(&mouse(MouseEventKind::ScrollDown, 5, 5)),
            None
        );
    }

    #[test]
    fn test_feed_drives_controller() {
        let mut adapter = MouseAdapter::new();
        let mut pad = TouchController::new(cell_regions());

        adapter.feed(&mouse(MouseEventKind::Down(MouseButton::Left), 10, 2), &mut pad);
        assert!(pad.is_pressed(InputKey::Up));

        // Drag down into the Down button.
        adapter.feed(&mouse(MouseEventKind::Drag(MouseButton::Left), 10, 12), &mut pad);
        assert!(!pad.is_pressed(InputKey::Up));
        assert!(pad.is_pressed(InputKey::Down));

        adapter.feed(&mouse(MouseEventKind::Up(MouseButton::Left), 10, 12), &mut pad);
        assert!(pad.pressed().is_empty());
    }

    #[test]
    fn test_feed_ignores_hover() {
        let mut adapter = MouseAdapter::new();
        let mut pad = TouchController::new(cell_regions());

        adapter.feed(&mouse(MouseEventKind::Moved, 10, 2), &mut pad);
        assert!(pad.pressed().is_empty());
    }
}
