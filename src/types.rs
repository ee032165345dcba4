//! Identifier newtypes and shared value types.
//!
//! Handles reference definitions owned by the host; the controller never
//! dereferences them beyond equality and lookup.

use std::fmt;

/// Reference to an item definition stored outside this crate (the host's
/// item registry owns the actual data).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ItemHandle(pub u32);

/// Reference to a skill definition (lookup via [`crate::skills::SkillOracle`]).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SkillHandle(pub u32);

/// Unique identifier for a combat entity, passed through to the host untouched.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EntityId(pub u32);

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Index into the host's animation table.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AnimationId(pub u16);

/// 1-based designer-facing equipment slot number.
///
/// Differs by one from the 0-based index used to address a combatant's slot
/// list; [`SlotNumber::index`] performs the conversion and rejects the
/// non-positive case.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SlotNumber(pub u8);

impl SlotNumber {
    /// The 0-based slot index, or `None` when the slot number is 0.
    #[inline]
    pub const fn index(self) -> Option<usize> {
        match self.0 {
            0 => None,
            n => Some(n as usize - 1),
        }
    }
}

impl fmt::Display for SlotNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Which hand a tagged skill keeps equipped.
///
/// The literal variant names `Right` and `Left` are the values skill authors
/// write in skill metadata; parsing is case-sensitive and any other value
/// means the skill is untagged.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum HandTag {
    /// Keep the right-hand weapon; the left-hand slot is vacated.
    Right,
    /// Keep the left-hand weapon; the right-hand slot is vacated.
    Left,
}

/// Outcome of an attack-animation request.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AttackAnimation {
    pub animation: AnimationId,
    /// Horizontally flipped playback. The host's single-weapon animation
    /// assumes a right-hand weapon; flipping matches it to a left-hand one.
    pub mirrored: bool,
}

impl AttackAnimation {
    /// Animation played as-is.
    pub const fn normal(animation: AnimationId) -> Self {
        Self {
            animation,
            mirrored: false,
        }
    }

    /// Horizontally flipped variant of `animation`.
    pub const fn mirrored(animation: AnimationId) -> Self {
        Self {
            animation,
            mirrored: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slot_number_converts_to_zero_based_index() {
        assert_eq!(SlotNumber(1).index(), Some(0));
        assert_eq!(SlotNumber(2).index(), Some(1));
        assert_eq!(SlotNumber(0).index(), None);
    }

    #[test]
    fn hand_tag_parses_literal_values_only() {
        assert_eq!("Right".parse(), Ok(HandTag::Right));
        assert_eq!("Left".parse(), Ok(HandTag::Left));
        assert!("right".parse::<HandTag>().is_err());
        assert!("Both".parse::<HandTag>().is_err());
        assert!("".parse::<HandTag>().is_err());
    }

    #[test]
    fn hand_tag_displays_literal_value() {
        assert_eq!(HandTag::Right.to_string(), "Right");
        assert_eq!(HandTag::Left.as_ref(), "Left");
    }
}
