//! Battle-log event sink and the one-hand decorator.

use std::sync::Arc;

use crate::combatant::Combatant;
use crate::config::SlotConfig;
use crate::controller::UnequipController;
use crate::skills::SkillOracle;
use crate::types::{AttackAnimation, EntityId, SkillHandle};

/// An action the resolver is about to resolve, as seen by the battle log.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BattleAction {
    pub skill: SkillHandle,
}

/// Lifecycle events of the host's action resolver.
///
/// The host fires these strictly in order for one action at a time:
/// `start_action`, zero or more `attack_animation` requests, `end_action`.
pub trait BattleLog {
    fn start_action(&mut self, subject: &mut dyn Combatant, action: &BattleAction);

    /// Produces the animation outcome for an attack against `targets`.
    fn attack_animation(
        &mut self,
        subject: &dyn Combatant,
        targets: &[EntityId],
    ) -> AttackAnimation;

    fn end_action(&mut self, subject: &mut dyn Combatant);
}

/// Decorator adding the temporary-unequip behavior to a host battle log.
///
/// Defers to the wrapped log everywhere except the three overridden
/// branches: stash before the inner start, mirrored animation instead of the
/// inner default when the remaining weapon sits in the left hand, restore
/// after the inner end.
pub struct OneHandBattleLog<L> {
    inner: L,
    controller: UnequipController,
    skills: Arc<dyn SkillOracle>,
}

impl<L> OneHandBattleLog<L> {
    pub fn new(inner: L, config: SlotConfig, skills: Arc<dyn SkillOracle>) -> Self {
        Self {
            inner,
            controller: UnequipController::new(config),
            skills,
        }
    }

    pub fn inner(&self) -> &L {
        &self.inner
    }

    pub fn controller(&self) -> &UnequipController {
        &self.controller
    }

    /// Unwraps the decorator, dropping the one-hand behavior.
    pub fn into_inner(self) -> L {
        self.inner
    }
}

impl<L: BattleLog> BattleLog for OneHandBattleLog<L> {
    fn start_action(&mut self, subject: &mut dyn Combatant, action: &BattleAction) {
        self.controller
            .on_action_start(subject, action.skill, self.skills.as_ref());
        self.inner.start_action(subject, action);
    }

    fn attack_animation(
        &mut self,
        subject: &dyn Combatant,
        targets: &[EntityId],
    ) -> AttackAnimation {
        match self.controller.mirrored_attack_animation(subject) {
            Some(animation) => animation,
            None => self.inner.attack_animation(subject, targets),
        }
    }

    fn end_action(&mut self, subject: &mut dyn Combatant) {
        self.inner.end_action(subject);
        self.controller.on_action_end(subject);
    }
}
