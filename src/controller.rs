//! The temporary unequip controller.
//!
//! Removes one hand's weapon around the resolution of a hand-tagged skill
//! and restores it when the action ends. Every condition that would prevent
//! the removal (untagged skill, empty slot, non-qualifying combatant) falls
//! back silently to default host behavior: leaving a combatant partially
//! unequipped would be worse than skipping the effect.

use crate::combatant::Combatant;
use crate::config::SlotConfig;
use crate::skills::SkillOracle;
use crate::types::{AttackAnimation, ItemHandle, SkillHandle, SlotNumber};

/// A weapon temporarily removed from a combatant, remembered for restoration.
///
/// Held as `Option<Stash>` so the slot and item are recorded together or not
/// at all.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct Stash {
    slot: SlotNumber,
    item: ItemHandle,
}

/// Controls the equipment swap for one combat context.
///
/// The host resolver drives the three lifecycle operations strictly in
/// order: [`on_action_start`](Self::on_action_start), zero or more
/// [`on_attack_animation`](Self::on_attack_animation), then
/// [`on_action_end`](Self::on_action_end); sequences for different actions
/// never interleave. The stash is empty between actions.
#[derive(Debug)]
pub struct UnequipController {
    config: SlotConfig,
    stash: Option<Stash>,
}

impl UnequipController {
    pub fn new(config: SlotConfig) -> Self {
        Self {
            config,
            stash: None,
        }
    }

    pub fn config(&self) -> &SlotConfig {
        &self.config
    }

    /// True while a weapon is removed and awaiting restoration.
    pub fn is_stashed(&self) -> bool {
        self.stash.is_some()
    }

    /// Prepares the combatant for the skill about to resolve.
    ///
    /// For a player-controlled dual-wielder using a hand-tagged skill, the
    /// opposite hand's slot is vacated and its item remembered. Any stale
    /// stash from an action whose end was never signalled is restored first,
    /// so no action starts half-unequipped.
    pub fn on_action_start(
        &mut self,
        subject: &mut dyn Combatant,
        skill: SkillHandle,
        skills: &dyn SkillOracle,
    ) {
        if !subject.is_player_controlled() || !subject.is_dual_wield() {
            return;
        }

        // Multi-hit and reaction skills can skip the end-of-action signal.
        if let Some(stash) = self.stash.take() {
            tracing::warn!(
                slot = %stash.slot,
                item = ?stash.item,
                "restoring stale stash at action start"
            );
            subject.set_slot(stash.slot, stash.item);
        }

        let Some(tag) = skills.definition(skill).and_then(|def| def.hand_tag) else {
            return;
        };

        let slot = self.config.removed_slot(tag);
        let Some(index) = slot.index() else {
            return;
        };
        let Some(&Some(item)) = subject.equipped_slots().get(index) else {
            // Nothing equipped there; the skill resolves with what is worn.
            return;
        };

        tracing::debug!(%slot, ?item, %tag, "stashing off-hand weapon");
        self.stash = Some(Stash { slot, item });
        subject.clear_slot(index);
    }

    /// Selects the animation outcome for an attack request.
    ///
    /// Pure read: the mirrored single-weapon animation when the right-hand
    /// slot is the one vacated (the remaining weapon sits in the left hand),
    /// otherwise `default` unchanged. Never mutates equipment or the stash.
    pub fn on_attack_animation(
        &self,
        subject: &dyn Combatant,
        default: AttackAnimation,
    ) -> AttackAnimation {
        self.mirrored_attack_animation(subject).unwrap_or(default)
    }

    /// The mirrored animation alone, when one applies.
    ///
    /// Lets the battle-log decorator skip producing the inner default on the
    /// mirror path, matching the host override it replaces.
    pub fn mirrored_attack_animation(&self, subject: &dyn Combatant) -> Option<AttackAnimation> {
        let stash = self.stash.as_ref()?;
        (stash.slot == self.config.right_hand())
            .then(|| AttackAnimation::mirrored(subject.attack_animation_id()))
    }

    /// Restores the stashed weapon, if any, and returns to the idle state.
    ///
    /// After this returns the stash is always empty, whatever happened
    /// during the action.
    pub fn on_action_end(&mut self, subject: &mut dyn Combatant) {
        if let Some(stash) = self.stash.take() {
            tracing::debug!(slot = %stash.slot, item = ?stash.item, "restoring stashed weapon");
            subject.set_slot(stash.slot, stash.item);
        }
    }
}
