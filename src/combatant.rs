//! Host combatant abstraction.

use crate::types::{AnimationId, ItemHandle, SlotNumber};

/// The view of a combatant the controller needs: capability predicates, an
/// ordered slot list, and the two equipment mutators.
///
/// The controller never constructs combatants. The host owns them and passes
/// them into the battle-log callbacks; this trait keeps the controller
/// decoupled from whatever the host's actor type looks like.
///
/// Clearing takes a 0-based slot index while re-equipping takes a 1-based
/// slot number, mirroring the host mutators each operation maps onto.
pub trait Combatant {
    /// True for actors under player control.
    ///
    /// Enemies and other host-driven combatants return false and bypass the
    /// one-hand mechanism entirely.
    fn is_player_controlled(&self) -> bool;

    /// True when the combatant can carry a weapon in both hand slots.
    fn is_dual_wield(&self) -> bool;

    /// Ordered view of equipped items, addressed by 0-based slot index.
    fn equipped_slots(&self) -> &[Option<ItemHandle>];

    /// Empties the slot at the given 0-based index.
    fn clear_slot(&mut self, index: usize);

    /// Equips `item` into the given 1-based slot number.
    fn set_slot(&mut self, slot: SlotNumber, item: ItemHandle);

    /// Animation the host plays for this combatant's single-weapon attack.
    fn attack_animation_id(&self) -> AnimationId;
}
