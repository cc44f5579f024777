//! Button hit regions.
//!
//! One [`ButtonRegion`] per [`InputKey`]: a rectangle in the touch space
//! plus the pressed flag renderers read back. Regions are created with the
//! controller and live as long as it does; only the controller flips the
//! pressed flag.
//!
//! Rendering itself stays outside the crate. The visual contract is the
//! pressed flag and the alpha convention below: buttons draw at half
//! opacity until pressed.

use crate::key::InputKey;
use crate::types::{Point, Rect};

/// Render alpha for an idle button.
pub const ALPHA_IDLE: f32 = 0.5;

/// Render alpha for a pressed button.
pub const ALPHA_PRESSED: f32 = 0.9;

// =============================================================================
// ButtonRegion
// =============================================================================

/// A named hit-test region with its pressed state.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ButtonRegion {
    key: InputKey,
    bounds: Rect,
    pressed: bool,
}

impl ButtonRegion {
    /// Create an unpressed region for `key`.
    #[inline]
    pub const fn new(key: InputKey, bounds: Rect) -> Self {
        Self {
            key,
            bounds,
            pressed: false,
        }
    }

    /// The key this region stands for.
    #[inline]
    pub const fn key(&self) -> InputKey {
        self.key
    }

    /// Current bounds.
    #[inline]
    pub const fn bounds(&self) -> Rect {
        self.bounds
    }

    /// Whether the region is currently pressed.
    #[inline]
    pub const fn is_pressed(&self) -> bool {
        self.pressed
    }

    /// Point-in-region test against the current bounds. Pure.
    #[inline]
    pub fn contains(&self, point: Point) -> bool {
        self.bounds.contains(point)
    }

    /// Render alpha for the current pressed state.
    #[inline]
    pub fn alpha(&self) -> f32 {
        if self.pressed { ALPHA_PRESSED } else { ALPHA_IDLE }
    }

    pub(crate) fn set_pressed(&mut self, pressed: bool) {
        self.pressed = pressed;
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn up_region() -> ButtonRegion {
        ButtonRegion::new(InputKey::Up, Rect::centered_at(0.0, 120.0, 40.0, 40.0))
    }

    #[test]
    fn test_new_region_is_unpressed() {
        let region = up_region();
        assert_eq!(region.key(), InputKey::Up);
        assert!(!region.is_pressed());
    }

    #[test]
    fn test_contains_uses_bounds() {
        let region = up_region();
        assert!(region.contains(Point::new(0.0, 120.0)));
        assert!(region.contains(Point::new(15.0, 105.0)));
        assert!(!region.contains(Point::new(0.0, 0.0)));
    }

    #[test]
    fn test_alpha_follows_pressed_flag() {
        let mut region = up_region();
        assert_eq!(region.alpha(), ALPHA_IDLE);

        region.set_pressed(true);
        assert!(region.is_pressed());
        assert_eq!(region.alpha(), ALPHA_PRESSED);

        region.set_pressed(false);
        assert_eq!(region.alpha(), ALPHA_IDLE);
    }

    #[test]
    fn test_pressed_flag_does_not_move_bounds() {
        let mut region = up_region();
        let before = region.bounds();
        region.set_pressed(true);
        assert_eq!(region.bounds(), before);
    }
}
