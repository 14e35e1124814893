use bitflags::bitflags;

use super::{Identity, Movement, Position};
use crate::error::WorldError;
use crate::world::World;

bitflags! {
    /// Capability set of a thing, exposed as queryable metadata.
    ///
    /// Authoritative capability checks in transition operations are explicit
    /// pattern matches over [`Thing`]; the flag set exists for observers
    /// (presentation, logging, tests).
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct Capabilities: u8 {
        const PLAYER   = 1 << 0;
        const LIVING   = 1 << 1;
        const ATTACKER = 1 << 2;
        const TARGET   = 1 << 3;
        const DIED     = 1 << 4;
    }
}

/// Any entity placed in the world.
///
/// The variant can change at most once over a thing's lifetime: a
/// [`Thing::LivingPlayer`] whose life reaches zero becomes a
/// [`Thing::DiedPlayer`] with the same identity and position, and that
/// transition is irreversible. Death does not freeze position; a died player
/// still moves geometrically.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Thing {
    /// Inert scenery, identified by the prefab it was spawned from.
    StaticObject {
        id: Identity,
        prefab: String,
        position: Position,
    },

    /// A player that can act and be damaged. `life` is strictly positive.
    LivingPlayer {
        id: Identity,
        life: f32,
        position: Position,
    },

    /// Terminal player state. Carries no life and cannot attack or be
    /// damaged further.
    DiedPlayer { id: Identity, position: Position },
}

impl Thing {
    pub fn static_object(id: impl Into<Identity>, prefab: impl Into<String>, position: Position) -> Self {
        Self::StaticObject {
            id: id.into(),
            prefab: prefab.into(),
            position,
        }
    }

    pub fn living_player(id: impl Into<Identity>, life: f32, position: Position) -> Self {
        Self::LivingPlayer {
            id: id.into(),
            life,
            position,
        }
    }

    pub fn id(&self) -> &Identity {
        match self {
            Self::StaticObject { id, .. }
            | Self::LivingPlayer { id, .. }
            | Self::DiedPlayer { id, .. } => id,
        }
    }

    pub fn position(&self) -> Position {
        match self {
            Self::StaticObject { position, .. }
            | Self::LivingPlayer { position, .. }
            | Self::DiedPlayer { position, .. } => *position,
        }
    }

    /// Remaining life, for living players only.
    pub fn life(&self) -> Option<f32> {
        match self {
            Self::LivingPlayer { life, .. } => Some(*life),
            _ => None,
        }
    }

    pub fn capabilities(&self) -> Capabilities {
        match self {
            Self::StaticObject { .. } => Capabilities::empty(),
            Self::LivingPlayer { .. } => {
                Capabilities::PLAYER
                    | Capabilities::LIVING
                    | Capabilities::ATTACKER
                    | Capabilities::TARGET
            }
            Self::DiedPlayer { .. } => Capabilities::PLAYER | Capabilities::DIED,
        }
    }

    #[inline]
    pub fn is_living(&self) -> bool {
        matches!(self, Self::LivingPlayer { .. })
    }

    /// Returns this thing translated by `movement`, unconditionally.
    pub fn move_by(self, movement: Movement) -> Self {
        let destination = self.position().translated(movement);
        self.move_to(destination)
    }

    /// Returns this thing relocated to `position`, unconditionally.
    pub fn move_to(self, position: Position) -> Self {
        match self {
            Self::StaticObject { id, prefab, .. } => Self::StaticObject {
                id,
                prefab,
                position,
            },
            Self::LivingPlayer { id, life, .. } => Self::LivingPlayer { id, life, position },
            Self::DiedPlayer { id, .. } => Self::DiedPlayer { id, position },
        }
    }

    /// Collision-checked translation: returns the moved thing unless the
    /// destination is occupied in `world`, in which case the thing is
    /// returned unchanged.
    pub fn try_move<W: World>(self, movement: Movement, world: &W) -> Self {
        let destination = self.position().translated(movement);
        self.try_move_to(destination, world)
    }

    /// Collision-checked relocation to an absolute position.
    pub fn try_move_to<W: World>(self, position: Position, world: &W) -> Self {
        if world.exists_at(position) {
            self
        } else {
            self.move_to(position)
        }
    }

    /// Applies `amount` damage. Only a living player can take damage; life
    /// crossing to zero or below yields the died variant at the same
    /// position.
    pub fn reduce_life(self, amount: f32) -> Result<Self, WorldError> {
        match self {
            Self::LivingPlayer { id, life, position } => {
                let remaining = life - amount;
                if remaining > 0.0 {
                    Ok(Self::LivingPlayer {
                        id,
                        life: remaining,
                        position,
                    })
                } else {
                    Ok(Self::DiedPlayer { id, position })
                }
            }
            other => Err(WorldError::InvalidTarget {
                id: other.id().clone(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn capability_sets_per_variant() {
        let rock = Thing::static_object("rock", "boulder", Position::ORIGIN);
        assert_eq!(rock.capabilities(), Capabilities::empty());

        let alice = Thing::living_player("alice", 3.0, Position::ORIGIN);
        assert!(alice.capabilities().contains(Capabilities::TARGET));
        assert!(alice.is_living());

        let corpse = alice.reduce_life(3.0).unwrap();
        assert_eq!(
            corpse.capabilities(),
            Capabilities::PLAYER | Capabilities::DIED
        );
        assert!(!corpse.is_living());
    }

    #[test]
    fn reduce_life_keeps_living_above_zero() {
        let alice = Thing::living_player("alice", 3.0, Position::new(1.0, 2.0));
        let hit = alice.reduce_life(1.0).unwrap();
        assert_eq!(hit.life(), Some(2.0));
        assert_eq!(hit.position(), Position::new(1.0, 2.0));
    }

    #[test]
    fn reduce_life_to_exactly_zero_kills() {
        let alice = Thing::living_player("alice", 1.0, Position::new(4.0, 4.0));
        let corpse = alice.reduce_life(1.0).unwrap();
        assert!(matches!(corpse, Thing::DiedPlayer { .. }));
        assert_eq!(corpse.id(), &Identity::new("alice"));
        assert_eq!(corpse.position(), Position::new(4.0, 4.0));
        assert_eq!(corpse.life(), None);
    }

    #[test]
    fn reduce_life_rejects_non_targets() {
        let rock = Thing::static_object("rock", "boulder", Position::ORIGIN);
        let result = rock.reduce_life(1.0);
        assert_eq!(
            result,
            Err(WorldError::InvalidTarget {
                id: Identity::new("rock")
            })
        );

        let corpse = Thing::living_player("bob", 1.0, Position::ORIGIN)
            .reduce_life(5.0)
            .unwrap();
        assert!(corpse.reduce_life(1.0).is_err());
    }

    #[test]
    fn collision_checked_moves_consult_the_world() {
        use crate::env::FlatTerrain;
        use crate::world::{InMemoryWorld, World as _};
        use std::sync::Arc;

        let world = InMemoryWorld::new(Arc::new(FlatTerrain)).appear(Thing::static_object(
            "rock",
            "boulder",
            Position::new(2.0, 0.0),
        ));
        let bob = Thing::living_player("bob", 5.0, Position::new(5.0, 0.0));

        let blocked = bob.clone().try_move_to(Position::new(2.5, 0.0), &world);
        assert_eq!(blocked.position(), Position::new(5.0, 0.0));

        let moved = bob.try_move(Movement::new(-1.5, 0.0), &world);
        assert_eq!(moved.position(), Position::new(3.5, 0.0));
    }

    #[test]
    fn unconditional_moves_never_check_occupancy() {
        let corpse = Thing::living_player("bob", 1.0, Position::ORIGIN)
            .reduce_life(1.0)
            .unwrap();
        // Death does not freeze position.
        let dragged = corpse.move_by(Movement::new(2.0, 0.0));
        assert_eq!(dragged.position(), Position::new(2.0, 0.0));
    }
}
