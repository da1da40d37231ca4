//! Application state shared between the control surface and the game loop thread.

use std::sync::mpsc;
use std::sync::{Arc, Mutex};
use std::thread::JoinHandle;

use broadside_core::commands::PlayerCommand;
use broadside_core::state::GameStateSnapshot;

/// Commands sent from the control surface to the game loop thread.
#[derive(Debug)]
pub enum GameLoopCommand {
    /// A player command to forward to the simulation engine.
    PlayerCommand(PlayerCommand),
    /// Shut down the game loop thread gracefully.
    Shutdown,
}

/// Failures of the control surface.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("simulation already running")]
    AlreadyRunning,
    #[error("simulation not started")]
    NotStarted,
    #[error("game loop has stopped")]
    LoopStopped,
    #[error("game loop thread panicked")]
    LoopPanicked,
    #[error("shared state lock poisoned")]
    Poisoned,
    #[error("failed to spawn game loop thread: {0}")]
    Spawn(#[from] std::io::Error),
}

/// Shared application state.
///
/// - `mpsc::Sender` is wrapped in `Mutex` so the state is `Sync`
/// - `Mutex<Option<...>>` for handles that do not exist before `start_simulation`
/// - `Arc<Mutex<...>>` for the latest snapshot (shared with the game loop thread)
pub struct AppState {
    /// Channel sender to forward commands to the game loop thread.
    /// `None` before `start_simulation` is called.
    pub command_tx: Mutex<Option<mpsc::Sender<GameLoopCommand>>>,
    /// Latest snapshot for synchronous `get_snapshot` queries.
    /// Updated by the game loop thread after each tick.
    pub latest_snapshot: Arc<Mutex<Option<GameStateSnapshot>>>,
    /// Game loop thread, joined on shutdown.
    pub loop_thread: Mutex<Option<JoinHandle<()>>>,
    /// Whether the game loop is currently running.
    pub running: Mutex<bool>,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            command_tx: Mutex::new(None),
            latest_snapshot: Arc::new(Mutex::new(None)),
            loop_thread: Mutex::new(None),
            running: Mutex::new(false),
        }
    }
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_state_creation() {
        let state = AppState::new();
        assert!(state.command_tx.lock().unwrap().is_none());
        assert!(state.latest_snapshot.lock().unwrap().is_none());
        assert!(state.loop_thread.lock().unwrap().is_none());
        assert!(!*state.running.lock().unwrap());
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(AppError::NotStarted.to_string(), "simulation not started");
        assert_eq!(AppError::AlreadyRunning.to_string(), "simulation already running");
    }
}
