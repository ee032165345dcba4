use crate::error::ConfigError;
use crate::types::{HandTag, SlotNumber};

/// Which equipment slots hold a dual-wielder's right- and left-hand weapons.
///
/// Supplied once at process start and immutable afterwards; fields are
/// private so a validated configuration cannot drift.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SlotConfig {
    right_hand: SlotNumber,
    left_hand: SlotNumber,
}

impl SlotConfig {
    pub const DEFAULT_RIGHT_HAND: SlotNumber = SlotNumber(1);
    pub const DEFAULT_LEFT_HAND: SlotNumber = SlotNumber(2);

    /// Builds a configuration from host parameters.
    ///
    /// Rejects non-positive slot numbers and both hands sharing one slot.
    pub fn new(right_hand: SlotNumber, left_hand: SlotNumber) -> Result<Self, ConfigError> {
        if right_hand.0 == 0 || left_hand.0 == 0 {
            return Err(ConfigError::ZeroSlotNumber);
        }
        if right_hand == left_hand {
            return Err(ConfigError::OverlappingSlots { slot: right_hand });
        }
        Ok(Self {
            right_hand,
            left_hand,
        })
    }

    pub fn right_hand(&self) -> SlotNumber {
        self.right_hand
    }

    pub fn left_hand(&self) -> SlotNumber {
        self.left_hand
    }

    /// The slot vacated while a skill tagged `tag` resolves.
    ///
    /// The tag names the kept hand, so the opposite hand's slot is the one
    /// removed.
    pub fn removed_slot(&self, tag: HandTag) -> SlotNumber {
        match tag {
            HandTag::Right => self.left_hand,
            HandTag::Left => self.right_hand,
        }
    }
}

impl Default for SlotConfig {
    fn default() -> Self {
        Self {
            right_hand: Self::DEFAULT_RIGHT_HAND,
            left_hand: Self::DEFAULT_LEFT_HAND,
        }
    }
}
