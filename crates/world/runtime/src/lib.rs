//! Single-writer service wrapper around [`world_core`].
//!
//! The runtime owns the authoritative world value and serializes every
//! mutation through one worker task: commands arrive over an mpsc channel,
//! outcomes return over oneshot replies, and the changes each command
//! records are fanned out on a broadcast bus. Client-facing views
//! ([`ClientSession`]) are built by replaying those changes. No networking
//! and no persistence; those layers sit above this crate.

pub mod config;
pub mod error;
pub mod service;
pub mod session;
pub mod worker;

pub use config::RuntimeConfig;
pub use error::{Result, RuntimeError};
pub use service::{Command, CommandOutcome, WorldService};
pub use session::ClientSession;
pub use worker::{WorldHandle, spawn};
