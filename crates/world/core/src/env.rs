//! Opaque external data carried by the world.

use std::fmt;
use std::sync::Arc;

/// Terrain data referenced by the world but never interpreted by it.
///
/// The core stores and clones the handle as pass-through state; geometry
/// semantics belong entirely to outer layers. The only surface is a stable
/// name for logging and presentation records.
pub trait TerrainOracle: fmt::Debug + Send + Sync {
    fn name(&self) -> &str;
}

/// Shared terrain handle as stored inside a world value.
pub type TerrainRef = Arc<dyn TerrainOracle>;

/// Featureless default terrain, used by tests and scratch worlds.
#[derive(Clone, Copy, Debug, Default)]
pub struct FlatTerrain;

impl TerrainOracle for FlatTerrain {
    fn name(&self) -> &str {
        "flat"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flat_terrain_names_itself() {
        let terrain: TerrainRef = Arc::new(FlatTerrain);
        assert_eq!(terrain.name(), "flat");
    }
}
