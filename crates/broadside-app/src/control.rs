//! Control surface for a frontend: start and stop the game loop, forward
//! player commands, poll the latest snapshot.

use broadside_core::commands::PlayerCommand;
use broadside_core::state::GameStateSnapshot;
use broadside_sim::engine::SimConfig;

use crate::game_loop;
use crate::state::{AppError, AppState, GameLoopCommand};

/// Start the simulation. Spawns the game loop thread if not already running.
pub fn start_simulation(state: &AppState, config: SimConfig) -> Result<(), AppError> {
    let mut running = state.running.lock().map_err(|_| AppError::Poisoned)?;

    if *running {
        return Err(AppError::AlreadyRunning);
    }

    let (cmd_tx, handle) = game_loop::spawn_game_loop(config, state.latest_snapshot.clone())?;

    *state.command_tx.lock().map_err(|_| AppError::Poisoned)? = Some(cmd_tx);
    *state.loop_thread.lock().map_err(|_| AppError::Poisoned)? = Some(handle);
    *running = true;

    Ok(())
}

/// Send a player command to the simulation.
pub fn send_command(state: &AppState, command: PlayerCommand) -> Result<(), AppError> {
    let tx_lock = state.command_tx.lock().map_err(|_| AppError::Poisoned)?;

    match tx_lock.as_ref() {
        Some(tx) => tx
            .send(GameLoopCommand::PlayerCommand(command))
            .map_err(|_| AppError::LoopStopped),
        None => Err(AppError::NotStarted),
    }
}

/// Get the latest snapshot synchronously (for polling / initial state).
pub fn get_snapshot(state: &AppState) -> Result<Option<GameStateSnapshot>, AppError> {
    let lock = state.latest_snapshot.lock().map_err(|_| AppError::Poisoned)?;
    Ok(lock.clone())
}

/// Stop the game loop and wait for its thread to finish.
pub fn stop_simulation(state: &AppState) -> Result<(), AppError> {
    let mut running = state.running.lock().map_err(|_| AppError::Poisoned)?;
    if !*running {
        return Err(AppError::NotStarted);
    }

    if let Some(tx) = state.command_tx.lock().map_err(|_| AppError::Poisoned)?.take() {
        // A loop that already exited has dropped its receiver.
        let _ = tx.send(GameLoopCommand::Shutdown);
    }
    let handle = state.loop_thread.lock().map_err(|_| AppError::Poisoned)?.take();
    *running = false;

    match handle {
        Some(handle) => handle.join().map_err(|_| AppError::LoopPanicked),
        None => Ok(()),
    }
}
