use crate::changes::{ChangeLog, WorldChange};
use crate::config::WorldConfig;
use crate::env::TerrainRef;
use crate::error::WorldError;
use crate::state::{Identity, Movement, Position, Speech, Thing};
use crate::world::World;

/// Snapshot realization of [`World`] over in-memory collections.
///
/// Every mutating operation clones the receiver and returns the successor;
/// the prior value remains valid. The entity sequence is ordered but order
/// only matters as "first match" in lookups. Identity uniqueness is assumed,
/// not enforced: `appear`/`join` accept duplicates and lookups resolve to
/// the first match.
#[derive(Clone, Debug)]
pub struct InMemoryWorld {
    config: WorldConfig,
    things: Vec<Thing>,
    terrain: TerrainRef,
    speech_log: Vec<Speech>,
    changes: ChangeLog,
}

impl InMemoryWorld {
    pub fn new(terrain: TerrainRef) -> Self {
        Self::with_config(WorldConfig::default(), terrain)
    }

    pub fn with_config(config: WorldConfig, terrain: TerrainRef) -> Self {
        Self {
            config,
            things: Vec::new(),
            terrain,
            speech_log: Vec::new(),
            changes: ChangeLog::new(),
        }
    }

    pub fn config(&self) -> &WorldConfig {
        &self.config
    }

    pub fn things(&self) -> &[Thing] {
        &self.things
    }

    pub fn terrain(&self) -> &TerrainRef {
        &self.terrain
    }

    /// The append-only speech log. Never truncated here; retention is the
    /// caller's policy.
    pub fn speech_log(&self) -> &[Speech] {
        &self.speech_log
    }

    /// Changes recorded since this world lineage was created.
    pub fn changes(&self) -> &ChangeLog {
        &self.changes
    }

    /// Records a handshake change on behalf of an external session layer.
    ///
    /// The core never emits presentation/told events itself; it only keeps
    /// them in order with the rest of the log.
    pub fn record_session_change(&self, change: WorldChange) -> Self {
        let mut next = self.clone();
        next.changes.record(change);
        next
    }

    /// Replaces every thing sharing `updated`'s identity.
    fn replace(&mut self, updated: &Thing) {
        for thing in &mut self.things {
            if thing.id() == updated.id() {
                *thing = updated.clone();
            }
        }
    }
}

impl World for InMemoryWorld {
    fn appear(&self, thing: Thing) -> Self {
        let mut next = self.clone();
        next.things.push(thing);
        next
    }

    fn disappear(&self, thing: &Thing) -> Self {
        let mut next = self.clone();
        next.things.retain(|existing| existing != thing);
        next
    }

    fn join(&self, player: Thing) -> Self {
        let mut next = self.clone();
        next.changes.record(WorldChange::Joined {
            id: player.id().clone(),
        });
        next.things.push(player);
        next
    }

    fn leave(&self, player: &Thing) -> Self {
        let mut next = self.clone();
        next.things.retain(|existing| existing.id() != player.id());
        next.changes.record(WorldChange::Left {
            id: player.id().clone(),
        });
        next
    }

    fn exists_at(&self, position: Position) -> bool {
        self.things
            .iter()
            .any(|thing| thing.position().distance(position) < self.config.collision_radius)
    }

    fn exists_at_excluding(&self, position: Position, except: &Identity) -> bool {
        self.things.iter().any(|thing| {
            thing.id() != except
                && thing.position().distance(position) < self.config.collision_radius
        })
    }

    fn try_move(&self, thing: Thing, movement: Movement) -> (Self, Thing) {
        let destination = thing.position().translated(movement);
        if self.exists_at(destination) {
            (self.clone(), thing)
        } else {
            let moved = thing.move_to(destination);
            let mut next = self.clone();
            next.replace(&moved);
            (next, moved)
        }
    }

    fn try_move_to(&self, thing: Thing, position: Position) -> (Self, Thing) {
        let mut next = self.clone();
        next.changes.record(WorldChange::MovedTo {
            id: thing.id().clone(),
            position,
        });
        if self.exists_at(position) {
            (next, thing)
        } else {
            let moved = thing.move_to(position);
            next.replace(&moved);
            (next, moved)
        }
    }

    fn try_move_by_id(
        &self,
        id: &Identity,
        position: Position,
    ) -> Result<(Self, Thing), WorldError> {
        let thing = self
            .find(id)
            .cloned()
            .ok_or_else(|| WorldError::NotFound(id.clone()))?;
        Ok(self.try_move_to(thing, position))
    }

    fn attack(&self, attacker: Thing, target: Thing) -> Result<(Self, Thing, Thing), WorldError> {
        let damage = self.config.attack_damage;
        let hit = target.reduce_life(damage)?;

        let mut next = self.clone();
        next.replace(&hit);
        next.changes.record(WorldChange::Attacked {
            attacker: attacker.id().clone(),
            target: hit.id().clone(),
            damage,
        });

        // The target must be resolvable in the successor; a miss here means
        // the caller handed in a thing that was never part of this world.
        let resolved = next
            .find(hit.id())
            .cloned()
            .ok_or_else(|| WorldError::NotFound(hit.id().clone()))?;
        Ok((next, attacker, resolved))
    }

    fn try_attack(
        &self,
        attacker: &Identity,
        target: &Identity,
    ) -> Result<(Self, Thing, Thing), WorldError> {
        let attacker = self
            .find(attacker)
            .cloned()
            .ok_or_else(|| WorldError::NotFound(attacker.clone()))?;
        let target = self
            .find(target)
            .cloned()
            .ok_or_else(|| WorldError::NotFound(target.clone()))?;
        self.attack(attacker, target)
    }

    fn say(&self, speaker: &Thing, text: &str) -> Self {
        let mut next = self.clone();
        next.speech_log.push(Speech::say(speaker.id().clone(), text));
        next.changes.record(WorldChange::Said {
            id: speaker.id().clone(),
            text: text.to_owned(),
        });
        next
    }

    fn try_say(&self, id: &Identity, text: &str) -> Result<Self, WorldError> {
        let speaker = self
            .find(id)
            .cloned()
            .ok_or_else(|| WorldError::NotFound(id.clone()))?;
        Ok(self.say(&speaker, text))
    }

    fn try_shout(&self, id: &Identity, text: &str) -> Self {
        let mut next = self.clone();
        next.speech_log.push(Speech::shout(id.clone(), text));
        next.changes.record(WorldChange::Shouted {
            id: id.clone(),
            text: text.to_owned(),
        });
        next
    }

    fn find(&self, id: &Identity) -> Option<&Thing> {
        self.things.iter().find(|thing| thing.id() == id)
    }

    fn find_except(&self, id: &Identity) -> Vec<&Thing> {
        self.things.iter().filter(|thing| thing.id() != id).collect()
    }
}
