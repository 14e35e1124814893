//! The world transition contract.
//!
//! Every operation is a pure function of the receiver snapshot and its
//! inputs: implementations take `&self`, build the successor value, and leave
//! the receiver untouched. Callers compose by threading returned values; no
//! operation calls back into a live mutable world.

mod memory;

pub use memory::InMemoryWorld;

use crate::error::WorldError;
use crate::state::{Identity, Movement, Position, Thing};

/// Transition operations over a world snapshot.
///
/// Failure semantics are deliberate and threefold:
/// - identity lookups that miss abort the whole operation with
///   [`WorldError::NotFound`] and the receiver stays authoritative;
/// - movement into an occupied destination is *not* an error; the operation
///   succeeds and hands back the unmoved thing;
/// - combat against a thing that cannot take damage fails with
///   [`WorldError::InvalidTarget`].
pub trait World: Sized {
    /// Adds `thing` to the world. Nothing is recorded and identity
    /// uniqueness is not checked.
    fn appear(&self, thing: Thing) -> Self;

    /// Removes every thing structurally equal to `thing`. No-op if absent.
    fn disappear(&self, thing: &Thing) -> Self;

    /// Adds a player and records `Joined`.
    fn join(&self, player: Thing) -> Self;

    /// Removes a player by identity and records `Left`. Removal is a no-op
    /// if the player is absent; `Left` is recorded regardless.
    fn leave(&self, player: &Thing) -> Self;

    /// True when any thing lies strictly within the collision radius of
    /// `position`. The check excludes nothing, so a mover's own pre-move
    /// position blocks it; see [`World::exists_at_excluding`] for the
    /// explicit alternative.
    fn exists_at(&self, position: Position) -> bool;

    /// Occupancy check ignoring the thing identified by `except`.
    fn exists_at_excluding(&self, position: Position, except: &Identity) -> bool;

    /// Collision-checked relative move. Returns the successor world and the
    /// resulting thing (the input thing, unchanged, when the destination is
    /// occupied). Nothing is recorded.
    fn try_move(&self, thing: Thing, movement: Movement) -> (Self, Thing);

    /// Collision-checked absolute move. `MovedTo` is recorded whether or not
    /// the move was accepted.
    fn try_move_to(&self, thing: Thing, position: Position) -> (Self, Thing);

    /// Looks up `id` and delegates to [`World::try_move_to`].
    fn try_move_by_id(
        &self,
        id: &Identity,
        position: Position,
    ) -> Result<(Self, Thing), WorldError>;

    /// Applies one fixed-damage hit from `attacker` to `target`, records
    /// `Attacked`, and returns the successor world, the attacker, and the
    /// post-attack thing as found in the successor.
    fn attack(&self, attacker: Thing, target: Thing) -> Result<(Self, Thing, Thing), WorldError>;

    /// Looks up both identities and delegates to [`World::attack`].
    fn try_attack(
        &self,
        attacker: &Identity,
        target: &Identity,
    ) -> Result<(Self, Thing, Thing), WorldError>;

    /// Appends a `Say` entry to the speech log and records `Said`.
    fn say(&self, speaker: &Thing, text: &str) -> Self;

    /// Looks up `id` and delegates to [`World::say`].
    fn try_say(&self, id: &Identity, text: &str) -> Result<Self, WorldError>;

    /// Appends a `Shout` entry and records `Shouted`. No lookup is
    /// performed, so an unknown identity still shouts.
    fn try_shout(&self, id: &Identity, text: &str) -> Self;

    /// First thing with the given identity. Absence is a valid result.
    fn find(&self, id: &Identity) -> Option<&Thing>;

    /// Every thing except the one with the given identity.
    fn find_except(&self, id: &Identity) -> Vec<&Thing>;
}
