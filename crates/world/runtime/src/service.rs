use world_core::{
    ChangeHandler, ErrorSeverity, Identity, InMemoryWorld, Position, TerrainRef, Thing, World,
    WorldChange, WorldError,
};

use crate::config::RuntimeConfig;
use crate::error::{Result, RuntimeError};
use crate::session::ClientSession;

/// Intent issued against the world by a client or the surrounding server.
#[derive(Clone, Debug, PartialEq)]
pub enum Command {
    /// Add a living player.
    Join {
        id: Identity,
        life: f32,
        position: Position,
    },

    /// Place inert scenery.
    Spawn {
        id: Identity,
        prefab: String,
        position: Position,
    },

    Leave { id: Identity },

    /// Collision-checked absolute move.
    MoveTo { id: Identity, position: Position },

    Attack { attacker: Identity, target: Identity },

    Say { id: Identity, text: String },

    Shout { id: Identity, text: String },
}

/// Result value handed back to the issuer of a [`Command`].
#[derive(Clone, Debug, PartialEq)]
pub enum CommandOutcome {
    Joined { id: Identity },
    Spawned { id: Identity },
    Left { id: Identity },
    /// The thing after the move attempt, unchanged when the destination
    /// was occupied.
    Moved { thing: Thing },
    Attacked { attacker: Thing, target: Thing },
    Spoke { id: Identity },
}

/// The single logical writer over a world lineage.
///
/// Owns the current [`InMemoryWorld`] value, applies commands by replacing
/// it with the successor, and tracks a high-water mark into the change log
/// so each newly recorded change is delivered exactly once.
pub struct WorldService {
    world: InMemoryWorld,
    delivered: usize,
    transcript_cap: usize,
}

impl WorldService {
    pub fn new(config: &RuntimeConfig, terrain: TerrainRef) -> Self {
        tracing::info!(terrain = terrain.name(), "world service starting");
        Self {
            world: InMemoryWorld::with_config(config.world, terrain),
            delivered: 0,
            transcript_cap: config.transcript_cap,
        }
    }

    pub fn world(&self) -> &InMemoryWorld {
        &self.world
    }

    /// Applies one command. On error the current world value is untouched.
    pub fn apply(&mut self, command: Command) -> Result<CommandOutcome> {
        match self.dispatch(command) {
            Ok(outcome) => Ok(outcome),
            Err(RuntimeError::World(error)) => {
                match error.severity() {
                    ErrorSeverity::Fatal => tracing::error!(%error, "command aborted"),
                    _ => tracing::warn!(%error, "command rejected"),
                }
                Err(RuntimeError::World(error))
            }
            Err(other) => Err(other),
        }
    }

    fn dispatch(&mut self, command: Command) -> Result<CommandOutcome> {
        match command {
            Command::Join { id, life, position } => {
                tracing::info!(player = %id, "join");
                self.world = self.world.join(Thing::living_player(id.clone(), life, position));
                Ok(CommandOutcome::Joined { id })
            }
            Command::Spawn {
                id,
                prefab,
                position,
            } => {
                tracing::debug!(thing = %id, prefab = %prefab, "spawn");
                self.world = self
                    .world
                    .appear(Thing::static_object(id.clone(), prefab, position));
                Ok(CommandOutcome::Spawned { id })
            }
            Command::Leave { id } => {
                let player = self
                    .world
                    .find(&id)
                    .cloned()
                    .ok_or_else(|| WorldError::NotFound(id.clone()))?;
                tracing::info!(player = %id, "leave");
                self.world = self.world.leave(&player);
                Ok(CommandOutcome::Left { id })
            }
            Command::MoveTo { id, position } => {
                let (world, thing) = self.world.try_move_by_id(&id, position)?;
                tracing::debug!(player = %id, to = %thing.position(), "move");
                self.world = world;
                Ok(CommandOutcome::Moved { thing })
            }
            Command::Attack { attacker, target } => {
                let (world, attacker, target) = self.world.try_attack(&attacker, &target)?;
                tracing::debug!(attacker = %attacker.id(), target = %target.id(), "attack");
                self.world = world;
                Ok(CommandOutcome::Attacked { attacker, target })
            }
            Command::Say { id, text } => {
                self.world = self.world.try_say(&id, &text)?;
                Ok(CommandOutcome::Spoke { id })
            }
            Command::Shout { id, text } => {
                self.world = self.world.try_shout(&id, &text);
                Ok(CommandOutcome::Spoke { id })
            }
        }
    }

    /// Changes recorded since the previous drain, oldest first.
    pub fn drain_changes(&mut self) -> Vec<WorldChange> {
        let entries = self.world.changes().entries();
        let fresh = entries[self.delivered..].to_vec();
        self.delivered = entries.len();
        fresh
    }

    /// Creates a client view for `id` and records the handshake
    /// (presentation, own id, things, position) in the world's change log so
    /// every consumer sees it in order.
    pub fn bootstrap_session(&mut self, id: &Identity) -> ClientSession {
        let things = self.world.things().to_vec();
        let position = self.world.find(id).map(Thing::position);

        let mut world = self
            .world
            .record_session_change(WorldChange::PresentationCreated { id: id.clone() })
            .record_session_change(WorldChange::OwnIdTold { id: id.clone() })
            .record_session_change(WorldChange::ThingsTold {
                to: id.clone(),
                things: things.clone(),
            });

        let mut session = ClientSession::new(self.transcript_cap)
            .presentation_created(id)
            .own_id_told(id)
            .things_told(id, &things);

        if let Some(position) = position {
            world = world.record_session_change(WorldChange::PositionTold {
                id: id.clone(),
                position,
            });
            session = session.position_told(id, position);
        }

        self.world = world;
        session
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use world_core::FlatTerrain;

    fn service() -> WorldService {
        WorldService::new(&RuntimeConfig::default(), Arc::new(FlatTerrain))
    }

    fn join(service: &mut WorldService, id: &str, life: f32, x: f32, z: f32) {
        service
            .apply(Command::Join {
                id: Identity::new(id),
                life,
                position: Position::new(x, z),
            })
            .unwrap();
    }

    #[test]
    fn drain_delivers_each_change_once() {
        let mut service = service();
        join(&mut service, "alice", 10.0, 0.0, 0.0);

        let first = service.drain_changes();
        assert_eq!(
            first,
            vec![WorldChange::Joined {
                id: Identity::new("alice")
            }]
        );
        assert!(service.drain_changes().is_empty());

        join(&mut service, "bob", 10.0, 5.0, 0.0);
        let second = service.drain_changes();
        assert_eq!(
            second,
            vec![WorldChange::Joined {
                id: Identity::new("bob")
            }]
        );
    }

    #[test]
    fn failed_commands_leave_the_world_and_log_untouched() {
        let mut service = service();
        join(&mut service, "alice", 10.0, 0.0, 0.0);
        service.drain_changes();

        let result = service.apply(Command::MoveTo {
            id: Identity::new("ghost"),
            position: Position::new(1.0, 1.0),
        });
        assert_eq!(
            result,
            Err(RuntimeError::World(WorldError::NotFound(Identity::new(
                "ghost"
            ))))
        );
        assert!(service.drain_changes().is_empty());
        assert_eq!(service.world().things().len(), 1);
    }

    #[test]
    fn attack_outcome_carries_the_post_attack_target() {
        let mut service = service();
        join(&mut service, "alice", 1.0, 0.0, 0.0);
        join(&mut service, "bob", 10.0, 5.0, 0.0);

        let outcome = service
            .apply(Command::Attack {
                attacker: Identity::new("bob"),
                target: Identity::new("alice"),
            })
            .unwrap();
        match outcome {
            CommandOutcome::Attacked { target, .. } => {
                assert!(matches!(target, Thing::DiedPlayer { .. }));
            }
            other => panic!("unexpected outcome: {other:?}"),
        }
    }

    #[test]
    fn bootstrap_records_the_handshake_in_order() {
        let mut service = service();
        join(&mut service, "alice", 10.0, 2.0, 3.0);
        service.drain_changes();

        let session = service.bootstrap_session(&Identity::new("alice"));
        assert!(session.is_presented());
        assert_eq!(session.own_id(), Some(&Identity::new("alice")));
        assert_eq!(
            session.position_of(&Identity::new("alice")),
            Some(Position::new(2.0, 3.0))
        );

        let kinds: Vec<String> = service
            .drain_changes()
            .iter()
            .map(|change| change.as_ref().to_string())
            .collect();
        assert_eq!(
            kinds,
            vec![
                "presentation_created",
                "own_id_told",
                "things_told",
                "position_told"
            ]
        );
    }
}
