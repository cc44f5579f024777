//! Input command vocabulary and the consumer contract.
//!
//! [`InputCommand`] is the closed event vocabulary the controller emits;
//! consumers match it exhaustively. [`InputDelegate`] is the consumer
//! contract, held by the controller as a non-owning weak reference.

use crate::key::InputKey;

// =============================================================================
// InputCommand
// =============================================================================

/// A discrete button transition.
///
/// Exactly one command per transition, in the order the controller
/// discovers them. No return channel: commands are fire-and-forget.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum InputCommand {
    /// The button went from not pressed to pressed.
    Hold(InputKey),
    /// A pressed button lost its pointer without a terminal up, e.g. the
    /// pointer slid off it.
    Cancel(InputKey),
    /// The pointer lifted (or the host cancelled it) over or previously
    /// over the button.
    Release(InputKey),
}

impl InputCommand {
    /// The key this command addresses.
    #[inline]
    pub const fn key(self) -> InputKey {
        match self {
            InputCommand::Hold(key)
            | InputCommand::Cancel(key)
            | InputCommand::Release(key) => key,
        }
    }

    /// True for [`InputCommand::Hold`].
    #[inline]
    pub const fn is_hold(self) -> bool {
        matches!(self, InputCommand::Hold(_))
    }
}

// =============================================================================
// InputDelegate
// =============================================================================

/// Consumer of the controller's command stream.
///
/// The controller holds the delegate as a `Weak` reference and upgrades it
/// before each delivery: it never extends the consumer's lifetime, and a
/// dropped consumer just stops receiving. Single-threaded, like the rest
/// of the crate.
pub trait InputDelegate {
    /// Receive one command.
    fn handle(&self, command: InputCommand);
}

// =============================================================================
// TESTS
// =============================================================================
