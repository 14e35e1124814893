use world_core::WorldError;

/// Errors surfaced by the runtime layer.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum RuntimeError {
    /// A world transition failed; the world value is unchanged.
    #[error(transparent)]
    World(#[from] WorldError),

    /// Configuration could not be read or parsed.
    #[error("invalid config: {0}")]
    InvalidConfig(String),

    /// The world worker task is gone and can no longer accept commands.
    #[error("world worker unavailable")]
    WorkerClosed,
}

pub type Result<T> = std::result::Result<T, RuntimeError>;
