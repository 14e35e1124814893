//! Append-only record of world mutations and the consumer contract.
//!
//! Notification is modeled as a fold over an event log rather than an
//! immediate side-effecting call: every notifying transition appends exactly
//! one [`WorldChange`] to the world's [`ChangeLog`], in operation order, and
//! a [`ChangeHandler`] replays accumulated entries whenever the caller
//! decides to deliver. The core never blocks on delivery; batching, deferral,
//! and dropping are external policy.

use crate::state::{Identity, Position, Thing};

/// One recorded world mutation.
#[derive(Clone, Debug, PartialEq, strum::AsRefStr)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
pub enum WorldChange {
    /// A client-facing presentation record was created for `id`. The record
    /// itself is opaque to the core.
    PresentationCreated { id: Identity },

    /// `id` was told its own identity.
    OwnIdTold { id: Identity },

    /// `to` was told the current set of things.
    ThingsTold { to: Identity, things: Vec<Thing> },

    /// `id` was told a position.
    PositionTold { id: Identity, position: Position },

    Joined { id: Identity },

    Left { id: Identity },

    /// An absolute-position move was requested. Recorded even when the move
    /// was rejected by occupancy.
    MovedTo { id: Identity, position: Position },

    Attacked {
        attacker: Identity,
        target: Identity,
        damage: f32,
    },

    Said { id: Identity, text: String },

    Shouted { id: Identity, text: String },
}

/// Append-only sequence of [`WorldChange`] entries owned by a world value.
///
/// The log is never truncated by the core; bounding growth is the retention
/// policy of whoever drains it.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ChangeLog {
    entries: Vec<WorldChange>,
}

impl ChangeLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn record(&mut self, change: WorldChange) {
        self.entries.push(change);
    }

    pub fn entries(&self) -> &[WorldChange] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Folds every recorded entry into `handler`, oldest first.
    pub fn replay<H: ChangeHandler>(&self, handler: H) -> H {
        handler.replay(&self.entries)
    }
}

/// Notification sink for world mutations.
///
/// Fold style: each method consumes the handler and returns its updated
/// value. All methods default to identity so implementations override only
/// the events they care about.
pub trait ChangeHandler: Sized {
    fn presentation_created(self, _id: &Identity) -> Self {
        self
    }

    fn own_id_told(self, _id: &Identity) -> Self {
        self
    }

    fn things_told(self, _to: &Identity, _things: &[Thing]) -> Self {
        self
    }

    fn position_told(self, _id: &Identity, _position: Position) -> Self {
        self
    }

    fn joined(self, _id: &Identity) -> Self {
        self
    }

    fn left(self, _id: &Identity) -> Self {
        self
    }

    fn moved_to(self, _id: &Identity, _position: Position) -> Self {
        self
    }

    fn attacked(self, _attacker: &Identity, _target: &Identity, _damage: f32) -> Self {
        self
    }

    fn said(self, _id: &Identity, _text: &str) -> Self {
        self
    }

    fn shouted(self, _id: &Identity, _text: &str) -> Self {
        self
    }

    /// Batch delivery: folds `changes` into the handler in recorded order.
    fn replay(self, changes: &[WorldChange]) -> Self {
        changes.iter().fold(self, |handler, change| match change {
            WorldChange::PresentationCreated { id } => handler.presentation_created(id),
            WorldChange::OwnIdTold { id } => handler.own_id_told(id),
            WorldChange::ThingsTold { to, things } => handler.things_told(to, things),
            WorldChange::PositionTold { id, position } => handler.position_told(id, *position),
            WorldChange::Joined { id } => handler.joined(id),
            WorldChange::Left { id } => handler.left(id),
            WorldChange::MovedTo { id, position } => handler.moved_to(id, *position),
            WorldChange::Attacked {
                attacker,
                target,
                damage,
            } => handler.attacked(attacker, target, *damage),
            WorldChange::Said { id, text } => handler.said(id, text),
            WorldChange::Shouted { id, text } => handler.shouted(id, text),
        })
    }
}
