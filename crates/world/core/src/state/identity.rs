use std::fmt;

/// Unique identifier for any thing placed in the world.
///
/// Identity is an opaque string key: equality and hashing follow the key, and
/// cross-references between things are always by identity lookup, never by
/// ownership links.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Identity(String);

impl Identity {
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    /// Returns the underlying key.
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for Identity {
    fn from(key: &str) -> Self {
        Self::new(key)
    }
}

impl From<String> for Identity {
    fn from(key: String) -> Self {
        Self(key)
    }
}

impl fmt::Display for Identity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn equality_follows_the_key() {
        assert_eq!(Identity::new("alice"), Identity::from("alice"));
        assert_ne!(Identity::new("alice"), Identity::new("bob"));
    }

    #[test]
    fn displays_with_hash_prefix() {
        assert_eq!(Identity::new("alice").to_string(), "#alice");
    }
}
