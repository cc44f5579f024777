//! Control pad layout.
//!
//! Declarative geometry for the eight buttons. The D-Pad sits left of the
//! view center, the action cluster mirrors it on the right. Each cluster
//! is a center with four satellite buttons spread by `key_offset`:
//!
//! ```text
//!        Up                   X
//!  Left      Right   |   Y        A
//!       Down                  B
//! ```
//!
//! Coordinates are y-up with the origin at the view center. The layout
//! affects rendered geometry only; the multiplexing algorithm never reads
//! the config.
//!
//! # API
//!
//! - `LayoutConfig::for_view(width, height)` - Standard layout for a view
//! - `LayoutConfig::build()` - Validate and produce the region table
//! - `LayoutError` - Rejected config fields

use thiserror::Error;

use crate::key::InputKey;
use crate::region::ButtonRegion;
use crate::types::Rect;

/// Default satellite spread within a cluster, in view units.
pub const DEFAULT_KEY_OFFSET: f32 = 50.0;

/// Default button extent (square), in view units.
pub const DEFAULT_BUTTON_SIZE: f32 = 40.0;

// =============================================================================
// LayoutError
// =============================================================================

/// A layout config field the builder rejected.
#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum LayoutError {
    #[error("layout field `{field}` must be finite, got {value}")]
    NonFinite { field: &'static str, value: f32 },

    #[error("layout field `{field}` must be positive, got {value}")]
    NonPositive { field: &'static str, value: f32 },
}

impl LayoutError {
    fn non_finite(field: &'static str, value: f32) -> Self {
        LayoutError::NonFinite { field, value }
    }

    fn non_positive(field: &'static str, value: f32) -> Self {
        LayoutError::NonPositive { field, value }
    }
}

// =============================================================================
// LayoutConfig
// =============================================================================

/// Spatial configuration for the standard two-cluster layout.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LayoutConfig {
    /// Horizontal distance from the view center to each cluster center.
    pub center_x: f32,
    /// Vertical distance from the view center down to the cluster row.
    pub center_y: f32,
    /// Satellite spread within a cluster.
    pub key_offset: f32,
    /// Button extent (square), before scaling.
    pub button_size: f32,
    /// Scale factor applied to button extent only, never to positions.
    pub scale: f32,
}

impl Default for LayoutConfig {
    /// The standard layout for a 960x640 view.
    fn default() -> Self {
        Self::for_view(960.0, 640.0)
    }
}

impl LayoutConfig {
    /// Standard layout for a view of the given size: cluster centers a
    /// third of the width out and a quarter of the height below center.
    pub fn for_view(width: f32, height: f32) -> Self {
        Self {
            center_x: width / 3.0,
            center_y: height / 4.0,
            key_offset: DEFAULT_KEY_OFFSET,
            button_size: DEFAULT_BUTTON_SIZE,
            scale: 1.0,
        }
    }

    /// Validate the config and build the region table in canonical order.
    pub fn build(&self) -> Result<[ButtonRegion; 8], LayoutError> {
        self.check()?;
        Ok(PLACEMENTS.map(|(key, side, dx, dy)| {
            let x = side * self.center_x + dx * self.key_offset;
            let y = dy * self.key_offset - self.center_y;
            let bounds = Rect::centered_at(x, y, self.button_size, self.button_size)
                .scaled(self.scale);
            ButtonRegion::new(key, bounds)
        }))
    }

    fn check(&self) -> Result<(), LayoutError> {
        let fields = [
            ("center_x", self.center_x),
            ("center_y", self.center_y),
            ("key_offset", self.key_offset),
            ("button_size", self.button_size),
            ("scale", self.scale),
        ];
        for (field, value) in fields {
            if !value.is_finite() {
                return Err(LayoutError::non_finite(field, value));
            }
        }
        for (field, value) in [("button_size", self.button_size), ("scale", self.scale)] {
            if value <= 0.0 {
                return Err(LayoutError::non_positive(field, value));
            }
        }
        Ok(())
    }
}

/// Button placement table, in canonical order.
///
/// `side` is -1 for the D-Pad cluster, +1 for the action cluster;
/// `(dx, dy)` pick the satellite within the cluster.
const PLACEMENTS: [(InputKey, f32, f32, f32); 8] = [
    (InputKey::Up, -1.0, 0.0, 1.0),
    (InputKey::Down, -1.0, 0.0, -1.0),
    (InputKey::Left, -1.0, -1.0, 0.0),
    (InputKey::Right, -1.0, 1.0, 0.0),
    (InputKey::X, 1.0, 0.0, 1.0),
    (InputKey::Y, 1.0, -1.0, 0.0),
    (InputKey::A, 1.0, 1.0, 0.0),
    (InputKey::B, 1.0, 0.0, -1.0),
];

// =============================================================================
// TESTS
// =============================================================================
