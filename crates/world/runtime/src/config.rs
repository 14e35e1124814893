use std::path::Path;

use world_core::WorldConfig;

use crate::error::{Result, RuntimeError};

/// Runtime configuration shared by the worker and its sessions.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct RuntimeConfig {
    /// Tunables handed to the world core.
    pub world: WorldConfig,

    /// Capacity of the command channel into the worker.
    pub command_buffer: usize,

    /// Capacity of the broadcast channel fanning out recorded changes.
    /// Slow subscribers lag and lose the oldest entries; the core's own logs
    /// are never truncated.
    pub event_buffer: usize,

    /// Maximum speech/combat lines retained per client session transcript.
    pub transcript_cap: usize,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            world: WorldConfig::default(),
            command_buffer: 32,
            event_buffer: 100,
            transcript_cap: 256,
        }
    }
}

impl RuntimeConfig {
    /// Loads configuration from a RON file.
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            RuntimeError::InvalidConfig(format!("failed to read config file: {e}"))
        })?;
        let config: RuntimeConfig = ron::from_str(&content)
            .map_err(|e| RuntimeError::InvalidConfig(format!("failed to parse config RON: {e}")))?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn loads_partial_ron_over_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            "(world: (collision_radius: 2.0, attack_damage: 5.0), event_buffer: 16)"
        )
        .unwrap();

        let config = RuntimeConfig::load_from_file(file.path()).unwrap();
        assert_eq!(config.world.collision_radius, 2.0);
        assert_eq!(config.world.attack_damage, 5.0);
        assert_eq!(config.event_buffer, 16);
        assert_eq!(config.command_buffer, RuntimeConfig::default().command_buffer);
    }

    #[test]
    fn rejects_malformed_config() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "(world: oops)").unwrap();

        let error = RuntimeConfig::load_from_file(file.path()).unwrap_err();
        assert!(matches!(error, RuntimeError::InvalidConfig(_)));
    }

    #[test]
    fn missing_file_is_an_invalid_config() {
        let error =
            RuntimeConfig::load_from_file(Path::new("/nonexistent/world.ron")).unwrap_err();
        assert!(matches!(error, RuntimeError::InvalidConfig(_)));
    }
}
