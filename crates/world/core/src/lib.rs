//! Deterministic state core of a small multiplayer world simulation.
//!
//! `world-core` defines the canonical data model (things, positions, speech)
//! and the pure transition operations over it: movement with collision
//! rejection, fixed-damage combat with death resolution, and speech logging.
//! Every mutation produces a successor world value and appends its
//! notification record to an append-only change log; delivery is entirely
//! the caller's concern. The crate performs no I/O, spawns nothing, and
//! assumes a single logical writer per world lineage.

pub mod changes;
pub mod config;
pub mod env;
pub mod error;
pub mod state;
pub mod world;

pub use changes::{ChangeHandler, ChangeLog, WorldChange};
pub use config::WorldConfig;
pub use env::{FlatTerrain, TerrainOracle, TerrainRef};
pub use error::{ErrorSeverity, WorldError};
pub use state::{Capabilities, Identity, Movement, Position, Speech, Thing};
pub use world::{InMemoryWorld, World};

#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn change_stream_encoding_is_deterministic() {
        let encode = || {
            let changes = vec![
                WorldChange::Joined {
                    id: Identity::new("alice"),
                },
                WorldChange::MovedTo {
                    id: Identity::new("alice"),
                    position: Position::new(2.0, -1.5),
                },
                WorldChange::Attacked {
                    attacker: Identity::new("alice"),
                    target: Identity::new("bob"),
                    damage: 1.0,
                },
            ];
            bincode::serialize(&changes).expect("change stream serializes")
        };
        assert_eq!(encode(), encode());
    }

    #[test]
    fn things_round_trip_through_json() {
        let thing = Thing::living_player("alice", 3.0, Position::new(1.0, 2.0));
        let encoded = serde_json::to_string(&thing).unwrap();
        let decoded: Thing = serde_json::from_str(&encoded).unwrap();
        assert_eq!(decoded, thing);
    }
}
