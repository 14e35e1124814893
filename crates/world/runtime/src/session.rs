use std::collections::HashMap;

use world_core::{ChangeHandler, Identity, Position, Thing};

/// One client's accumulated view of the world.
///
/// Built as a [`ChangeHandler`] fold: the worker bootstraps it with the
/// handshake events (presentation, own id, known things, own position) and
/// afterwards replays drained changes to keep the view current. The
/// transcript is bounded by the runtime's retention policy; the underlying
/// core logs stay untouched.
#[derive(Clone, Debug)]
pub struct ClientSession {
    presented: bool,
    own_id: Option<Identity>,
    known_positions: HashMap<Identity, Position>,
    transcript: Vec<String>,
    transcript_cap: usize,
}

impl ClientSession {
    pub fn new(transcript_cap: usize) -> Self {
        Self {
            presented: false,
            own_id: None,
            known_positions: HashMap::new(),
            transcript: Vec::new(),
            transcript_cap,
        }
    }

    pub fn is_presented(&self) -> bool {
        self.presented
    }

    pub fn own_id(&self) -> Option<&Identity> {
        self.own_id.as_ref()
    }

    pub fn position_of(&self, id: &Identity) -> Option<Position> {
        self.known_positions.get(id).copied()
    }

    pub fn known_things(&self) -> usize {
        self.known_positions.len()
    }

    pub fn transcript(&self) -> &[String] {
        &self.transcript
    }

    fn noted(mut self, line: String) -> Self {
        if self.transcript_cap == 0 {
            return self;
        }
        if self.transcript.len() == self.transcript_cap {
            self.transcript.remove(0);
        }
        self.transcript.push(line);
        self
    }
}

impl ChangeHandler for ClientSession {
    fn presentation_created(mut self, id: &Identity) -> Self {
        tracing::debug!(client = %id, "presentation created");
        self.presented = true;
        self
    }

    fn own_id_told(mut self, id: &Identity) -> Self {
        self.own_id = Some(id.clone());
        self
    }

    fn things_told(mut self, _to: &Identity, things: &[Thing]) -> Self {
        for thing in things {
            self.known_positions.insert(thing.id().clone(), thing.position());
        }
        self
    }

    fn position_told(mut self, id: &Identity, position: Position) -> Self {
        self.known_positions.insert(id.clone(), position);
        self
    }

    fn joined(self, id: &Identity) -> Self {
        self.noted(format!("{id} joined"))
    }

    fn left(mut self, id: &Identity) -> Self {
        self.known_positions.remove(id);
        self.noted(format!("{id} left"))
    }

    fn moved_to(mut self, id: &Identity, position: Position) -> Self {
        // `moved_to` is recorded even for rejected moves; the view follows
        // the record, matching what the contract makes observable.
        self.known_positions.insert(id.clone(), position);
        self
    }

    fn attacked(self, attacker: &Identity, target: &Identity, damage: f32) -> Self {
        self.noted(format!("{attacker} hit {target} for {damage}"))
    }

    fn said(self, id: &Identity, text: &str) -> Self {
        self.noted(format!("{id}: {text}"))
    }

    fn shouted(self, id: &Identity, text: &str) -> Self {
        self.noted(format!("{id}!: {text}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use world_core::WorldChange;

    #[test]
    fn bootstrap_fold_builds_the_view() {
        let alice = Identity::new("alice");
        let things = vec![
            Thing::living_player("alice", 10.0, Position::new(1.0, 1.0)),
            Thing::static_object("rock", "boulder", Position::new(4.0, 0.0)),
        ];

        let session = ClientSession::new(8)
            .presentation_created(&alice)
            .own_id_told(&alice)
            .things_told(&alice, &things)
            .position_told(&alice, Position::new(1.0, 1.0));

        assert!(session.is_presented());
        assert_eq!(session.own_id(), Some(&alice));
        assert_eq!(session.known_things(), 2);
        assert_eq!(
            session.position_of(&Identity::new("rock")),
            Some(Position::new(4.0, 0.0))
        );
    }

    #[test]
    fn replay_tracks_movement_and_departures() {
        let session = ClientSession::new(8).replay(&[
            WorldChange::Joined {
                id: Identity::new("bob"),
            },
            WorldChange::MovedTo {
                id: Identity::new("bob"),
                position: Position::new(3.0, 3.0),
            },
            WorldChange::Said {
                id: Identity::new("bob"),
                text: "hi".into(),
            },
            WorldChange::Left {
                id: Identity::new("bob"),
            },
        ]);

        assert_eq!(session.position_of(&Identity::new("bob")), None);
        assert_eq!(
            session.transcript(),
            &["#bob joined", "#bob: hi", "#bob left"]
        );
    }

    #[test]
    fn transcript_is_bounded() {
        let mut session = ClientSession::new(2);
        for line in ["one", "two", "three"] {
            session = session.said(&Identity::new("a"), line);
        }
        assert_eq!(session.transcript(), &["#a: two", "#a: three"]);
    }
}
