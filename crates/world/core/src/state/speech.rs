use super::Identity;

/// A single entry in the world's speech log: who said what.
///
/// The say/shout distinction carries no delivery radius here; fan-out is the
/// transport layer's concern.
#[derive(Clone, Debug, PartialEq, Eq, strum::AsRefStr)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
pub enum Speech {
    /// Local speech.
    Say { id: Identity, text: String },

    /// Broadcast speech.
    Shout { id: Identity, text: String },
}

impl Speech {
    pub fn say(id: impl Into<Identity>, text: impl Into<String>) -> Self {
        Self::Say {
            id: id.into(),
            text: text.into(),
        }
    }

    pub fn shout(id: impl Into<Identity>, text: impl Into<String>) -> Self {
        Self::Shout {
            id: id.into(),
            text: text.into(),
        }
    }

    pub fn speaker(&self) -> &Identity {
        match self {
            Self::Say { id, .. } | Self::Shout { id, .. } => id,
        }
    }

    pub fn text(&self) -> &str {
        match self {
            Self::Say { text, .. } | Self::Shout { text, .. } => text,
        }
    }
}
