//! Input key vocabulary.
//!
//! The eight addressable buttons: the directional pad (Up, Down, Left,
//! Right) and the action cluster (X, Y, A, B). Declaration order is the
//! canonical scan order for every per-region pass, which is what makes
//! command emission deterministic.
//!
//! # API
//!
//! - `InputKey::ALL` - Every key in canonical order
//! - `InputKey::index` - Slot in region tables
//! - `InputKey::bit` - The key's bit in a `KeySet`
//! - `KeySet` - Pressed-set representation, one bit per key

// =============================================================================
// InputKey
// =============================================================================

/// Identifies one of the eight controller buttons.
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum InputKey {
    Up = 0,
    Down = 1,
    Left = 2,
    Right = 3,
    X = 4,
    Y = 5,
    A = 6,
    B = 7,
}

impl InputKey {
    /// Every key in canonical scan order.
    pub const ALL: [InputKey; 8] = [
        InputKey::Up,
        InputKey::Down,
        InputKey::Left,
        InputKey::Right,
        InputKey::X,
        InputKey::Y,
        InputKey::A,
        InputKey::B,
    ];

    /// Slot of this key in region tables.
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// The key's bit in a [`KeySet`].
    #[inline]
    pub const fn bit(self) -> KeySet {
        KeySet::from_bits_truncate(1 << self as u8)
    }

    /// Short display label.
    pub const fn label(self) -> &'static str {
        match self {
            InputKey::Up => "Up",
            InputKey::Down => "Down",
            InputKey::Left => "Left",
            InputKey::Right => "Right",
            InputKey::X => "X",
            InputKey::Y => "Y",
            InputKey::A => "A",
            InputKey::B => "B",
        }
    }
}

// =============================================================================
// KeySet
// =============================================================================

bitflags::bitflags! {
    /// A set of keys, one bit per [`InputKey`].
    ///
    /// Combine with bitwise OR: `KeySet::UP | KeySet::X`
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct KeySet: u8 {
        const UP = 1 << 0;
        const DOWN = 1 << 1;
        const LEFT = 1 << 2;
        const RIGHT = 1 << 3;
        const X = 1 << 4;
        const Y = 1 << 5;
        const A = 1 << 6;
        const B = 1 << 7;
    }
}

impl KeySet {
    /// Keys present in the set, in canonical order.
    pub fn keys(self) -> impl Iterator<Item = InputKey> {
        InputKey::ALL.into_iter().filter(move |key| self.contains(key.bit()))
    }
}

impl From<InputKey> for KeySet {
    fn from(key: InputKey) -> Self {
        key.bit()
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_canonical_order_matches_indices() {
        for (position, key) in InputKey::ALL.into_iter().enumerate() {
            assert_eq!(key.index(), position);
        }
    }

    #[test]
    fn test_bits_are_distinct_and_total() {
        let mut seen = KeySet::empty();
        for key in InputKey::ALL {
            assert!(!seen.contains(key.bit()));
            seen |= key.bit();
        }
        assert_eq!(seen, KeySet::all());
    }

    #[test]
    fn test_bit_matches_named_flags() {
        assert_eq!(InputKey::Up.bit(), KeySet::UP);
        assert_eq!(InputKey::Down.bit(), KeySet::DOWN);
        assert_eq!(InputKey::Left.bit(), KeySet::LEFT);
        assert_eq!(InputKey::Right.bit(), KeySet::RIGHT);
        assert_eq!(InputKey::X.bit(), KeySet::X);
        assert_eq!(InputKey::Y.bit(), KeySet::Y);
        assert_eq!(InputKey::A.bit(), KeySet::A);
        assert_eq!(InputKey::B.bit(), KeySet::B);
    }

    #[test]
    fn test_keys_iterates_in_canonical_order() {
        let set = KeySet::B | KeySet::UP | KeySet::X;
        let keys: Vec<InputKey> = set.keys().collect();
        assert_eq!(keys, vec![InputKey::Up, InputKey::X, InputKey::B]);
    }

    #[test]
    fn test_from_key() {
        assert_eq!(KeySet::from(InputKey::A), KeySet::A);
    }

    #[test]
    fn test_labels() {
        assert_eq!(InputKey::Up.label(), "Up");
        assert_eq!(InputKey::B.label(), "B");
    }
}
