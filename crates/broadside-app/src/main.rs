use std::time::{Duration, Instant};

use tracing::{info, warn};

use broadside_app::control;
use broadside_app::state::AppState;
use broadside_core::commands::PlayerCommand;
use broadside_core::config::BroadsideConfig;
use broadside_core::enums::{GamePhase, Side};
use broadside_sim::engine::SimConfig;

/// Wall-clock limit for the scripted sortie.
const DEMO_DURATION: Duration = Duration::from_secs(30);
const POLL_INTERVAL: Duration = Duration::from_millis(250);

fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    let json = matches!(std::env::var("LOG_FORMAT").as_deref(), Ok("json"));
    if json {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .json()
            .with_current_span(true)
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .compact()
            .init();
    }

    std::panic::set_hook(Box::new(|info| {
        let backtrace = std::backtrace::Backtrace::capture();
        tracing::error!(%info, ?backtrace, "panic");
    }));
}

const SEED_ENV: &str = "BROADSIDE_SEED";
const DEFAULT_SEED: u64 = 42;

/// Seed from the environment value, falling back to the default when unset or malformed.
fn seed_from(raw: Option<&str>) -> u64 {
    match raw {
        Some(raw) => raw.trim().parse().unwrap_or_else(|err: std::num::ParseIntError| {
            warn!(value = %raw, %err, "BROADSIDE_SEED is not a u64, using the default seed");
            DEFAULT_SEED
        }),
        None => DEFAULT_SEED,
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_tracing();

    let broadside = BroadsideConfig::from_env_or_default()?;
    let seed = seed_from(std::env::var(SEED_ENV).ok().as_deref());
    info!(seed, player = %broadside.player.name, hostile = %broadside.hostile.name, "starting broadside");

    let state = AppState::new();
    control::start_simulation(
        &state,
        SimConfig {
            seed,
            broadside,
            ..Default::default()
        },
    )?;

    let result = run_sortie(&state);
    control::stop_simulation(&state)?;
    result
}

/// Scripted sortie: select the player's ship, steer it onto the hostile's
/// patrol route and let the guns work until the mission ends or time runs out.
fn run_sortie(state: &AppState) -> Result<(), Box<dyn std::error::Error>> {
    control::send_command(state, PlayerCommand::StartMission)?;
    control::send_command(state, PlayerCommand::SetTimeScale { scale: 4.0 })?;

    let Some(player_pos) = wait_for_player(state)? else {
        warn!("mission did not start");
        return Ok(());
    };
    control::send_command(state, PlayerCommand::click(player_pos.x, player_pos.y))?;
    control::send_command(state, PlayerCommand::click(990.0, 400.0))?;

    let deadline = Instant::now() + DEMO_DURATION;
    while Instant::now() < deadline {
        std::thread::sleep(POLL_INTERVAL);
        if let Some(snapshot) = control::get_snapshot(state)? {
            if snapshot.phase == GamePhase::MissionComplete {
                break;
            }
        }
    }

    if let Some(snapshot) = control::get_snapshot(state)? {
        info!(
            phase = ?snapshot.phase,
            outcome = ?snapshot.outcome,
            score = %serde_json::to_string(&snapshot.score)?,
            "sortie over"
        );
    }
    Ok(())
}

fn wait_for_player(
    state: &AppState,
) -> Result<Option<broadside_core::types::Position>, Box<dyn std::error::Error>> {
    let deadline = Instant::now() + Duration::from_secs(2);
    while Instant::now() < deadline {
        if let Some(snapshot) = control::get_snapshot(state)? {
            let player = snapshot
                .ships
                .iter()
                .find(|ship| ship.side == Side::Player)
                .and_then(|ship| ship.position);
            if player.is_some() {
                return Ok(player);
            }
        }
        std::thread::sleep(Duration::from_millis(10));
    }
    Ok(None)
}
