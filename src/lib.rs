//! Temporary unequip control for one-hand skills.
//!
//! A dual-wielding combatant can use a skill tagged to a single hand: the
//! opposite weapon is removed just before the skill resolves and re-equipped
//! when the action ends, and the attack animation is mirrored when the
//! remaining weapon sits in the left hand. [`OneHandBattleLog`] wraps the
//! host resolver's battle log and drives the [`UnequipController`] from its
//! lifecycle events; everything else defers to the wrapped log.
pub mod combatant;
pub mod config;
pub mod controller;
pub mod error;
pub mod log;
pub mod skills;
pub mod types;

pub use combatant::Combatant;
pub use config::SlotConfig;
pub use controller::UnequipController;
pub use error::ConfigError;
pub use log::{BattleAction, BattleLog, OneHandBattleLog};
pub use skills::{HAND_TAG_KEY, SkillBook, SkillDefinition, SkillOracle};
pub use types::{
    AnimationId, AttackAnimation, EntityId, HandTag, ItemHandle, SkillHandle, SlotNumber,
};
