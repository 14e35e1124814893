//! Value types of the world state.
//!
//! Everything here is plain data: positions and displacements, the identity
//! key, the entity sum type, and speech log entries. Transition logic lives
//! in [`crate::world`]; nothing in this module performs lookups or I/O.

mod geometry;
mod identity;
mod speech;
mod thing;

pub use geometry::{Movement, Position};
pub use identity::Identity;
pub use speech::Speech;
pub use thing::{Capabilities, Thing};
