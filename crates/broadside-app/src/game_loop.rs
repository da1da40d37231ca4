//! Game loop thread. Runs the simulation engine at 60Hz and publishes snapshots.
//!
//! The engine is created inside this thread because it's cleaner for ownership.
//! Commands arrive via `mpsc` channel. Snapshots are stored in shared state
//! for synchronous polling; phase changes are logged.

use std::sync::mpsc;
use std::sync::{Arc, Mutex};
use std::thread::JoinHandle;
use std::time::{Duration, Instant};

use tracing::{debug, info};

use broadside_core::constants::TICK_RATE;
use broadside_core::enums::GamePhase;
use broadside_core::state::GameStateSnapshot;
use broadside_sim::engine::{SimConfig, SimulationEngine};

use crate::state::GameLoopCommand;

/// Nominal duration of one tick at 1x speed.
pub const TICK_DURATION: Duration = Duration::from_nanos(1_000_000_000 / TICK_RATE as u64);

/// Spawns the game loop in a new thread.
///
/// Returns the command sender for the control surface and the thread handle.
pub fn spawn_game_loop(
    config: SimConfig,
    latest_snapshot: Arc<Mutex<Option<GameStateSnapshot>>>,
) -> std::io::Result<(mpsc::Sender<GameLoopCommand>, JoinHandle<()>)> {
    let (cmd_tx, cmd_rx) = mpsc::channel::<GameLoopCommand>();

    let handle = std::thread::Builder::new()
        .name("broadside-game-loop".into())
        .spawn(move || {
            let engine = SimulationEngine::new(config);
            run_game_loop(engine, cmd_rx, &latest_snapshot);
        })?;

    Ok((cmd_tx, handle))
}

/// The game loop. Runs until Shutdown command or channel disconnect.
fn run_game_loop(
    mut engine: SimulationEngine,
    cmd_rx: mpsc::Receiver<GameLoopCommand>,
    latest_snapshot: &Mutex<Option<GameStateSnapshot>>,
) {
    let mut next_tick_time = Instant::now();
    let mut last_phase = engine.phase();

    loop {
        // 1. Drain all pending commands
        loop {
            match cmd_rx.try_recv() {
                Ok(GameLoopCommand::PlayerCommand(cmd)) => {
                    engine.queue_command(cmd);
                }
                Ok(GameLoopCommand::Shutdown) => {
                    info!(tick = engine.time().tick, "game loop shutting down");
                    return;
                }
                Err(mpsc::TryRecvError::Empty) => break,
                Err(mpsc::TryRecvError::Disconnected) => {
                    debug!("command channel closed");
                    return;
                }
            }
        }

        // 2. Advance one tick (engine handles pause semantics internally)
        let snapshot = engine.tick();

        // 3. Report phase transitions
        if snapshot.phase != last_phase {
            info!(from = ?last_phase, to = ?snapshot.phase, tick = snapshot.time.tick, "phase changed");
            if snapshot.phase == GamePhase::MissionComplete {
                info!(outcome = ?snapshot.outcome, score = ?snapshot.score, "mission finished");
            }
            last_phase = snapshot.phase;
        }

        // 4. Store latest snapshot for synchronous polling
        if let Ok(mut lock) = latest_snapshot.lock() {
            *lock = Some(snapshot);
        }

        // 5. Sleep until next tick, adjusting for time_scale
        let time_scale = engine.time_scale();
        let effective_tick_duration = if time_scale > 0.001 {
            TICK_DURATION.div_f64(time_scale)
        } else {
            TICK_DURATION
        };

        next_tick_time += effective_tick_duration;
        let now = Instant::now();
        if next_tick_time > now {
            std::thread::sleep(next_tick_time - now);
        } else if now - next_tick_time > effective_tick_duration * 2 {
            // Too far behind, reset to avoid catch-up spiral
            next_tick_time = now;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use broadside_core::commands::PlayerCommand;

    #[test]
    fn test_command_channel_round_trip() {
        let (tx, rx) = mpsc::channel::<GameLoopCommand>();

        tx.send(GameLoopCommand::PlayerCommand(PlayerCommand::StartMission))
            .unwrap();
        tx.send(GameLoopCommand::PlayerCommand(PlayerCommand::click(200.0, 200.0)))
            .unwrap();
        tx.send(GameLoopCommand::Shutdown).unwrap();

        let mut commands = Vec::new();
        while let Ok(cmd) = rx.try_recv() {
            commands.push(cmd);
        }

        assert_eq!(commands.len(), 3);
        assert!(matches!(
            commands[0],
            GameLoopCommand::PlayerCommand(PlayerCommand::StartMission)
        ));
        assert!(matches!(
            commands[1],
            GameLoopCommand::PlayerCommand(PlayerCommand::Click { .. })
        ));
        assert!(matches!(commands[2], GameLoopCommand::Shutdown));
    }

    #[test]
    fn test_loop_publishes_and_shuts_down() {
        let latest = Arc::new(Mutex::new(None));
        let (tx, handle) = spawn_game_loop(SimConfig::default(), latest.clone()).unwrap();
        tx.send(GameLoopCommand::PlayerCommand(PlayerCommand::StartMission))
            .unwrap();

        let deadline = Instant::now() + Duration::from_secs(5);
        let mut active = false;
        while Instant::now() < deadline {
            let phase = latest.lock().unwrap().as_ref().map(|s| s.phase);
            if phase == Some(GamePhase::Active) {
                active = true;
                break;
            }
            std::thread::sleep(Duration::from_millis(10));
        }
        assert!(active, "mission never became active");

        tx.send(GameLoopCommand::Shutdown).unwrap();
        handle.join().unwrap();
    }

    #[test]
    fn test_loop_exits_when_sender_dropped() {
        let latest = Arc::new(Mutex::new(None));
        let (tx, handle) = spawn_game_loop(SimConfig::default(), latest).unwrap();
        drop(tx);
        handle.join().unwrap();
    }

    #[test]
    fn test_snapshot_serialization_under_3ms() {
        let mut engine = SimulationEngine::new(SimConfig::default());
        engine.queue_command(PlayerCommand::StartMission);

        for _ in 0..50 {
            engine.tick();
        }

        let snapshot = engine.tick();
        let start = Instant::now();
        let json = serde_json::to_string(&snapshot).unwrap();
        let elapsed = start.elapsed();

        assert!(
            elapsed < Duration::from_millis(3),
            "Snapshot serialization took {:?}, should be <3ms",
            elapsed
        );
        assert!(json.contains("USS Monitor"));
    }

    #[test]
    fn test_tick_duration_constant() {
        // 60Hz = 16.667ms per tick
        let expected_nanos = 1_000_000_000u64 / 60;
        assert_eq!(TICK_DURATION.as_nanos(), expected_nanos as u128);
    }
}
