//! Static skill definitions and lookup.
//!
//! Skill metadata is authored as data, not code: a skill may carry a note
//! tag under [`HAND_TAG_KEY`] whose value restricts the skill to one hand's
//! weapon. The controller reads the definition once per action start through
//! the [`SkillOracle`] trait.

use std::collections::HashMap;

use crate::types::{HandTag, SkillHandle};

/// Note-tag key a skill definition carries to restrict it to one hand.
pub const HAND_TAG_KEY: &str = "OneHand";

/// Static skill metadata the controller reads at action start.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SkillDefinition {
    pub handle: SkillHandle,
    /// Hand the skill is restricted to, if tagged.
    pub hand_tag: Option<HandTag>,
}

impl SkillDefinition {
    /// An untagged skill.
    pub fn new(handle: SkillHandle) -> Self {
        Self {
            handle,
            hand_tag: None,
        }
    }

    /// Restricts the skill to the given hand.
    pub fn with_hand_tag(mut self, tag: HandTag) -> Self {
        self.hand_tag = Some(tag);
        self
    }

    /// Builds a definition from a raw note-tag metadata map.
    ///
    /// Only the value under [`HAND_TAG_KEY`] is inspected. A value that is
    /// not exactly `Right` or `Left` leaves the skill untagged rather than
    /// failing, matching the authoring contract.
    pub fn from_meta(handle: SkillHandle, meta: &HashMap<String, String>) -> Self {
        let hand_tag = meta
            .get(HAND_TAG_KEY)
            .and_then(|value| value.parse::<HandTag>().ok());
        Self { handle, hand_tag }
    }
}

/// Keyed lookup of skill definitions, provided by the host.
pub trait SkillOracle: Send + Sync {
    fn definition(&self, handle: SkillHandle) -> Option<SkillDefinition>;
}

/// In-memory [`SkillOracle`] backed by a hash map.
#[derive(Clone, Debug, Default)]
pub struct SkillBook {
    skills: HashMap<SkillHandle, SkillDefinition>,
}

impl SkillBook {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a definition, replacing any previous one for the same handle.
    pub fn insert(&mut self, definition: SkillDefinition) {
        self.skills.insert(definition.handle, definition);
    }

    pub fn len(&self) -> usize {
        self.skills.len()
    }

    pub fn is_empty(&self) -> bool {
        self.skills.is_empty()
    }
}

impl SkillOracle for SkillBook {
    fn definition(&self, handle: SkillHandle) -> Option<SkillDefinition> {
        self.skills.get(&handle).copied()
    }
}
