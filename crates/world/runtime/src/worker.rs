use tokio::sync::{broadcast, mpsc, oneshot};
use tokio::task::JoinHandle;

use world_core::{TerrainRef, WorldChange};

use crate::config::RuntimeConfig;
use crate::error::{Result, RuntimeError};
use crate::service::{Command, CommandOutcome, WorldService};

struct Envelope {
    command: Command,
    reply: oneshot::Sender<Result<CommandOutcome>>,
}

/// Cloneable facade over the world worker.
///
/// Commands are serialized through one mpsc channel into the single-writer
/// task; recorded changes fan out on a broadcast channel in operation order.
#[derive(Clone)]
pub struct WorldHandle {
    commands: mpsc::Sender<Envelope>,
    events: broadcast::Sender<WorldChange>,
}

impl WorldHandle {
    /// Executes a command on the worker and waits for its outcome.
    pub async fn execute(&self, command: Command) -> Result<CommandOutcome> {
        let (reply, response) = oneshot::channel();
        self.commands
            .send(Envelope { command, reply })
            .await
            .map_err(|_| RuntimeError::WorkerClosed)?;
        response.await.map_err(|_| RuntimeError::WorkerClosed)?
    }

    /// Subscribes to changes recorded after this call. Slow subscribers lag
    /// per broadcast semantics; the world's own log is unaffected.
    pub fn subscribe(&self) -> broadcast::Receiver<WorldChange> {
        self.events.subscribe()
    }
}

/// Spawns the world worker task and returns its handle.
pub fn spawn(config: RuntimeConfig, terrain: TerrainRef) -> (WorldHandle, JoinHandle<()>) {
    let (command_tx, command_rx) = mpsc::channel(config.command_buffer);
    let (event_tx, _) = broadcast::channel(config.event_buffer);

    let handle = WorldHandle {
        commands: command_tx,
        events: event_tx.clone(),
    };

    let service = WorldService::new(&config, terrain);
    let task = tokio::spawn(run(service, command_rx, event_tx));

    (handle, task)
}

async fn run(
    mut service: WorldService,
    mut commands: mpsc::Receiver<Envelope>,
    events: broadcast::Sender<WorldChange>,
) {
    while let Some(Envelope { command, reply }) = commands.recv().await {
        let outcome = service.apply(command);
        for change in service.drain_changes() {
            // Send fails only when nobody subscribes.
            let _ = events.send(change);
        }
        let _ = reply.send(outcome);
    }
    tracing::info!("world worker stopped");
}
