//! # vpad
//!
//! Virtual D-Pad and action buttons for touch input.
//!
//! Eight fixed buttons (Up/Down/Left/Right and X/Y/A/B) are hit-tested
//! against raw pointer batches; presses, slides and lifts come out as a
//! de-duplicated [`InputCommand`] stream. The crate is the state machine
//! between a touch source and a consumer:
//!
//! ```text
//! pointer batches → TouchController → hit test → pressed-set diff → InputDelegate
//! ```
//!
//! Rendering, animation and assets stay outside. A renderer needs only
//! each region's bounds and pressed flag (plus the alpha convention in
//! [`region`]); a touch source needs only to deliver positioned pointer
//! batches per phase. [`source`] ships one such source for terminal mouse
//! input.
//!
//! ## Modules
//!
//! - [`types`] - Point and Rect geometry
//! - [`key`] - InputKey vocabulary and KeySet
//! - [`command`] - InputCommand and the InputDelegate trait
//! - [`region`] - ButtonRegion hit areas
//! - [`layout`] - Declarative button layout
//! - [`controller`] - The multiplexing state machine
//! - [`source`] - Crossterm mouse adapter
//!
//! ## Example
//!
//! ```
//! use vpad::{InputKey, LayoutConfig, Touch, TouchController};
//!
//! let mut pad = TouchController::with_layout(&LayoutConfig::default())?;
//! let up = pad.region(InputKey::Up).bounds().center;
//!
//! pad.touches_began(&[Touch::new(1, up)]);
//! assert!(pad.is_pressed(InputKey::Up));
//! # Ok::<(), vpad::LayoutError>(())
//! ```

pub mod command;
pub mod controller;
pub mod key;
pub mod layout;
pub mod region;
pub mod source;
pub mod types;

// Re-export the working vocabulary
pub use command::{InputCommand, InputDelegate};
pub use controller::{Touch, TouchController};
pub use key::{InputKey, KeySet};
pub use layout::{DEFAULT_BUTTON_SIZE, DEFAULT_KEY_OFFSET, LayoutConfig, LayoutError};
pub use region::{ALPHA_IDLE, ALPHA_PRESSED, ButtonRegion};
pub use source::{MouseAdapter, PointerEvent};
pub use types::{Point, Rect};
