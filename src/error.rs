//! Configuration errors.
//!
//! Runtime behavior of the controller is infallible by design: every
//! unexpected condition falls back to default host behavior (see the module
//! docs on [`crate::controller`]). The only fallible surface is building a
//! [`crate::config::SlotConfig`] from host-supplied parameters.

use crate::types::SlotNumber;

/// Errors raised while validating slot configuration at startup.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ConfigError {
    /// Slot numbers are 1-based; 0 names no slot.
    #[error("hand slot number must be positive (slot numbers are 1-based)")]
    ZeroSlotNumber,

    /// Both hands mapped to the same slot.
    #[error("right and left hand both mapped to slot {slot}")]
    OverlappingSlots { slot: SlotNumber },
}
