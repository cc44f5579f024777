//! Touch input controller - the touch-to-button multiplexing state machine.
//!
//! Tracks which buttons are down across concurrent pointers and turns raw
//! touch batches into a de-duplicated [`InputCommand`] stream: every button
//! goes through press/release exactly once per contact episode, slides
//! between buttons surface as Cancel plus Hold, and lifted or cancelled
//! pointers release whatever they held.
//!
//! Single-threaded and fully synchronous: batches are processed in arrival
//! order, pointers in caller order, regions in canonical key order, and
//! commands are emitted the moment their condition is discovered. No entry
//! point can fail; an absent consumer just means computed commands are not
//! delivered.
//!
//! # API
//!
//! - `TouchController::new(regions)` - Controller over explicit regions
//! - `TouchController::with_layout(config)` - Controller over the standard layout
//! - `set_delegate(rc)` / `clear_delegate()` - Consumer wiring (weak)
//! - `touches_began/moved/ended/cancelled(batch)` - Touch phase entry points
//! - `pressed()` / `is_pressed(key)` - Pressed set readback
//! - `region(key)` / `regions()` - Region state for renderers
//! - `reset()` - Drop all pressed state without emitting
//!
//! # Example
//!
//! ```
//! use std::rc::Rc;
//! use vpad::{InputCommand, InputDelegate, InputKey, LayoutConfig, Touch, TouchController};
//!
//! struct Printer;
//! impl InputDelegate for Printer {
//!     fn handle(&self, command: InputCommand) {
//!         println!("{command:?}");
//!     }
//! }
//!
//! let mut pad = TouchController::with_layout(&LayoutConfig::default())?;
//! let printer = Rc::new(Printer);
//! pad.set_delegate(&printer);
//!
//! // One finger lands on the D-Pad Up button and lifts again.
//! let up = pad.region(InputKey::Up).bounds().center;
//! pad.touches_began(&[Touch::new(1, up)]);
//! assert!(pad.is_pressed(InputKey::Up));
//!
//! pad.touches_ended(&[Touch::new(1, up)]);
//! assert!(pad.pressed().is_empty());
//! # Ok::<(), vpad::LayoutError>(())
//! ```

use std::rc::{Rc, Weak};

use crate::command::{InputCommand, InputDelegate};
use crate::key::{InputKey, KeySet};
use crate::layout::{LayoutConfig, LayoutError};
use crate::region::ButtonRegion;
use crate::types::Point;

// =============================================================================
// Touch
// =============================================================================

/// One pointer's report within a touch batch.
///
/// `previous` is the position from the pointer's last report. A fresh
/// contact reports `previous == position`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Touch {
    /// Stable pointer identity across the contact.
    pub id: u64,
    /// Position in this report.
    pub position: Point,
    /// Position in the previous report for the same pointer.
    pub previous: Point,
}

impl Touch {
    /// A stationary report: a fresh contact, or a lift without motion.
    #[inline]
    pub const fn new(id: u64, position: Point) -> Self {
        Self {
            id,
            position,
            previous: position,
        }
    }

    /// A movement report from `previous` to `position`.
    #[inline]
    pub const fn moved(id: u64, previous: Point, position: Point) -> Self {
        Self {
            id,
            position,
            previous,
        }
    }
}

// =============================================================================
// TouchController
// =============================================================================

/// The touch-to-button multiplexing controller.
///
/// Owns the eight [`ButtonRegion`]s and the pressed set. Regions are fixed
/// at construction; the pressed set and the per-region flags move in
/// lockstep, mutated only here.
#[derive(Debug)]
pub struct TouchController {
    /// Regions indexed by `InputKey::index()`, scanned in canonical order.
    regions: [ButtonRegion; 8],
    pressed: KeySet,
    delegate: Option<Weak<dyn InputDelegate>>,
}

impl TouchController {
    /// Build a controller over an explicit region table.
    ///
    /// Regions may arrive in any order; they are slotted by key. Two
    /// regions sharing a key is a construction contract violation and
    /// panics.
    pub fn new(regions: [ButtonRegion; 8]) -> Self {
        let mut slots: [Option<ButtonRegion>; 8] = [None; 8];
        for region in regions {
            let slot = &mut slots[region.key().index()];
            assert!(slot.is_none(), "duplicate region for {:?}", region.key());
            *slot = Some(region);
        }
        // Eight regions with distinct keys fill all eight slots.
        let regions = slots.map(|slot| match slot {
            Some(region) => region,
            None => unreachable!("region table covers every key"),
        });
        log::debug!("touch controller ready");
        Self {
            regions,
            pressed: KeySet::empty(),
            delegate: None,
        }
    }

    /// Build a controller over the standard two-cluster layout.
    pub fn with_layout(config: &LayoutConfig) -> Result<Self, LayoutError> {
        Ok(Self::new(config.build()?))
    }

    /// Wire the consumer.
    ///
    /// Only a weak reference is kept: the controller never extends the
    /// consumer's lifetime, and a dropped consumer silently stops
    /// receiving.
    pub fn set_delegate<D: InputDelegate + 'static>(&mut self, delegate: &Rc<D>) {
        let weak = Rc::downgrade(delegate);
        self.delegate = Some(weak);
        log::debug!("input delegate attached");
    }

    /// Detach the consumer. Commands keep being computed, not delivered.
    pub fn clear_delegate(&mut self) {
        self.delegate = None;
        log::debug!("input delegate detached");
    }

    /// Currently pressed keys.
    #[inline]
    pub const fn pressed(&self) -> KeySet {
        self.pressed
    }

    /// Whether `key` is currently pressed.
    #[inline]
    pub const fn is_pressed(&self, key: InputKey) -> bool {
        self.pressed.contains(key.bit())
    }

    /// Region state for one key: bounds plus pressed flag, for renderers.
    #[inline]
    pub fn region(&self, key: InputKey) -> &ButtonRegion {
        &self.regions[key.index()]
    }

    /// All regions, in canonical order.
    #[inline]
    pub const fn regions(&self) -> &[ButtonRegion; 8] {
        &self.regions
    }

    /// A batch of pointers landed.
    ///
    /// Every region containing a landing point and not already pressed
    /// emits `Hold`. A second pointer landing on a pressed region emits
    /// nothing.
    pub fn touches_began(&mut self, touches: &[Touch]) {
        for touch in touches {
            for key in InputKey::ALL {
                if self.regions[key.index()].contains(touch.position) && !self.is_pressed(key) {
                    self.press(key);
                }
            }
        }
    }

    /// A batch of pointers moved.
    ///
    /// Membership is sampled at the two report endpoints only. Leaving a
    /// pressed region emits `Cancel`; entering an unpressed region emits
    /// `Hold`. A motion that jumps clear across a region puts neither
    /// endpoint inside it and emits nothing for it.
    pub fn touches_moved(&mut self, touches: &[Touch]) {
        for touch in touches {
            for key in InputKey::ALL {
                let region = &self.regions[key.index()];
                let was_inside = region.contains(touch.previous);
                let is_inside = region.contains(touch.position);
                if was_inside && !is_inside && self.is_pressed(key) {
                    self.lift(key, InputCommand::Cancel(key));
                } else if !was_inside && is_inside && !self.is_pressed(key) {
                    self.press(key);
                }
            }
        }
    }

    /// A batch of pointers lifted.
    ///
    /// Every pressed region containing a pointer's current or previous
    /// position emits `Release`.
    pub fn touches_ended(&mut self, touches: &[Touch]) {
        self.touch_up(touches);
    }

    /// A batch of pointers was cancelled by the host.
    ///
    /// Indistinguishable from [`touches_ended`](Self::touches_ended) at
    /// the command level: cancellation is a forced release.
    pub fn touches_cancelled(&mut self, touches: &[Touch]) {
        self.touch_up(touches);
    }

    /// Drop all pressed state without emitting commands. For host
    /// teardown; not part of the normal touch flow.
    pub fn reset(&mut self) {
        self.pressed = KeySet::empty();
        for region in &mut self.regions {
            region.set_pressed(false);
        }
    }

    // =========================================================================
    // Internal
    // =========================================================================

    /// Shared terminal handler: ended and cancelled release identically.
    fn touch_up(&mut self, touches: &[Touch]) {
        for touch in touches {
            for key in InputKey::ALL {
                let region = &self.regions[key.index()];
                let over = region.contains(touch.position) || region.contains(touch.previous);
                if over && self.is_pressed(key) {
                    self.lift(key, InputCommand::Release(key));
                }
            }
        }
    }

    fn press(&mut self, key: InputKey) {
        self.pressed.insert(key.bit());
        self.regions[key.index()].set_pressed(true);
        self.dispatch(InputCommand::Hold(key));
    }

    fn lift(&mut self, key: InputKey, command: InputCommand) {
        self.pressed.remove(key.bit());
        self.regions[key.index()].set_pressed(false);
        self.dispatch(command);
    }

    /// Deliver one command if the consumer is still alive. Pressed state
    /// is already updated either way.
    fn dispatch(&self, command: InputCommand) {
        match self.delegate.as_ref().and_then(Weak::upgrade) {
            Some(delegate) => {
                log::trace!("emit {command:?}");
                delegate.handle(command);
            }
            None => log::trace!("drop {command:?} (no delegate)"),
        }
    }
}

// =============================================================================
// TESTS
// =============================================================================
