//! Simulation engine: the core of the game.
//!
//! `SimulationEngine` owns the hecs world, the ship registry and the
//! selection state, processes player commands, runs all systems and
//! produces `GameStateSnapshot`s. Completely headless, enabling
//! deterministic testing.

use std::collections::VecDeque;

use hecs::World;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tracing::{debug, error, info};

use broadside_core::commands::PlayerCommand;
use broadside_core::config::BroadsideConfig;
use broadside_core::enums::{GamePhase, MissionOutcome, MouseButton, Side};
use broadside_core::error::{ConfigError, SimError};
use broadside_core::events::{CombatEvent, RenderCommand};
use broadside_core::state::GameStateSnapshot;
use broadside_core::types::{Position, ShipId, SimTime};

use crate::input::{self, ClickTarget};
use crate::lifecycle::{self, DamageContext};
use crate::registry::{DamageOutcome, ShipRegistry};
use crate::score::ScoreState;
use crate::selection::{stats_panel, SelectionState};
use crate::systems;
use crate::systems::movement::Bounds;
use crate::systems::snapshot::TickOutput;
use crate::world_setup::{self, Fleet};

/// Configuration for starting a new simulation.
#[derive(Debug, Clone)]
pub struct SimConfig {
    /// RNG seed for determinism. Same seed = same simulation.
    pub seed: u64,
    /// Initial time scale (1.0 = normal).
    pub time_scale: f64,
    /// Playfield, fleets and tuning.
    pub broadside: BroadsideConfig,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            time_scale: 1.0,
            broadside: BroadsideConfig::default(),
        }
    }
}

/// The simulation engine. Owns the ECS world and all sim state.
pub struct SimulationEngine {
    world: World,
    registry: ShipRegistry,
    selection: SelectionState,
    config: BroadsideConfig,
    time: SimTime,
    phase: GamePhase,
    outcome: Option<MissionOutcome>,
    time_scale: f64,
    rng: ChaCha8Rng,
    fleet: Option<Fleet>,
    command_queue: VecDeque<PlayerCommand>,
    render_commands: Vec<RenderCommand>,
    combat_events: Vec<CombatEvent>,
    score: ScoreState,
}

impl SimulationEngine {
    /// Create a new simulation engine with the given config.
    pub fn new(config: SimConfig) -> Self {
        Self {
            world: World::new(),
            registry: ShipRegistry::new(),
            selection: SelectionState::new(),
            config: config.broadside,
            time: SimTime::default(),
            phase: GamePhase::default(),
            outcome: None,
            time_scale: config.time_scale,
            rng: ChaCha8Rng::seed_from_u64(config.seed),
            fleet: None,
            command_queue: VecDeque::new(),
            render_commands: Vec::new(),
            combat_events: Vec::new(),
            score: ScoreState::default(),
        }
    }

    /// Like [`SimulationEngine::new`], but rejects an invalid configuration.
    pub fn try_new(config: SimConfig) -> Result<Self, ConfigError> {
        config.broadside.validate()?;
        Ok(Self::new(config))
    }

    /// Queue a player command for processing at the next tick boundary.
    pub fn queue_command(&mut self, command: PlayerCommand) {
        self.command_queue.push_back(command);
    }

    /// Queue multiple commands.
    pub fn queue_commands(&mut self, commands: impl IntoIterator<Item = PlayerCommand>) {
        self.command_queue.extend(commands);
    }

    /// Advance the simulation by one tick and return the resulting snapshot.
    pub fn tick(&mut self) -> GameStateSnapshot {
        self.process_commands();

        if self.phase == GamePhase::Active {
            self.run_systems();
            self.time.advance();
        }

        let output = TickOutput {
            render_commands: std::mem::take(&mut self.render_commands),
            combat_events: std::mem::take(&mut self.combat_events),
        };
        systems::snapshot::build_snapshot(
            &self.world,
            &self.registry,
            &self.selection,
            &self.score,
            &self.time,
            self.phase,
            self.outcome,
            output,
        )
    }

    /// Get the current game phase.
    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    pub fn outcome(&self) -> Option<MissionOutcome> {
        self.outcome
    }

    /// Get the current simulation time.
    pub fn time(&self) -> SimTime {
        self.time
    }

    /// Get the current time scale.
    pub fn time_scale(&self) -> f64 {
        self.time_scale
    }

    pub fn config(&self) -> &BroadsideConfig {
        &self.config
    }

    /// Ids of the current mission's ships, if one is running.
    pub fn fleet(&self) -> Option<Fleet> {
        self.fleet
    }

    /// Get a read-only reference to the ECS world.
    pub fn world(&self) -> &World {
        &self.world
    }

    pub fn registry(&self) -> &ShipRegistry {
        &self.registry
    }

    pub fn selection(&self) -> &SelectionState {
        &self.selection
    }

    /// Position of a ship's body, `None` once it has left the world.
    pub fn position_of(&self, ship: ShipId) -> Option<Position> {
        self.registry
            .body(ship)
            .and_then(|e| crate::body::position_of(&self.world, e))
    }

    /// Apply damage outside of combat (scripted events, tests). Goes through
    /// the same lifecycle path as gunfire.
    pub fn apply_damage(&mut self, ship: ShipId, amount: u32) -> Result<DamageOutcome, SimError> {
        let mut ctx = DamageContext {
            world: &mut self.world,
            registry: &mut self.registry,
            selection: &mut self.selection,
            render: &mut self.render_commands,
            events: &mut self.combat_events,
        };
        lifecycle::apply_damage(&mut ctx, ship, amount)
    }

    /// Mutable world access for tests that place bodies directly.
    #[cfg(test)]
    pub fn world_mut(&mut self) -> &mut World {
        &mut self.world
    }

    /// Process all queued commands.
    fn process_commands(&mut self) {
        while let Some(command) = self.command_queue.pop_front() {
            self.handle_command(command);
        }
    }

    /// Handle a single player command.
    fn handle_command(&mut self, command: PlayerCommand) {
        match command {
            PlayerCommand::StartMission => {
                if self.phase == GamePhase::MainMenu {
                    self.start_mission();
                }
            }
            PlayerCommand::ReturnToMenu => {
                if self.phase != GamePhase::MainMenu {
                    self.teardown_mission();
                }
            }
            PlayerCommand::Pause => {
                if self.phase == GamePhase::Active {
                    self.phase = GamePhase::Paused;
                }
            }
            PlayerCommand::Resume => {
                if self.phase == GamePhase::Paused {
                    self.phase = GamePhase::Active;
                }
            }
            PlayerCommand::SetTimeScale { scale } => {
                self.time_scale = scale.clamp(0.0, 4.0);
            }
            PlayerCommand::Click { point, button } => {
                if button != MouseButton::Primary {
                    return;
                }
                match self.phase {
                    GamePhase::Active => self.handle_click(point),
                    // The sidebar stays live while paused; the playfield does not.
                    GamePhase::Paused => {
                        if input::classify_click(&self.world, &self.config.playfield, point)
                            == ClickTarget::Sidebar
                        {
                            self.selection
                                .deselect(&self.registry, &mut self.render_commands);
                        }
                    }
                    GamePhase::MainMenu | GamePhase::MissionComplete => {}
                }
            }
        }
    }

    fn start_mission(&mut self) {
        self.reset_context();
        match world_setup::setup_mission(&mut self.world, &mut self.registry, &self.config) {
            Ok(fleet) => {
                info!(player = %fleet.player, hostile = %fleet.hostile, "mission started");
                self.fleet = Some(fleet);
                self.phase = GamePhase::Active;
            }
            Err(err) => {
                error!(%err, "mission setup failed");
                self.reset_context();
            }
        }
    }

    fn teardown_mission(&mut self) {
        self.reset_context();
        self.render_commands.push(RenderCommand::ClearRangeCircle);
        self.phase = GamePhase::MainMenu;
        info!("mission torn down");
    }

    /// Empty world, registry and selection; rewind the clock.
    fn reset_context(&mut self) {
        self.world.clear();
        self.registry.clear();
        self.selection.reset();
        self.fleet = None;
        self.outcome = None;
        self.score = ScoreState::default();
        self.time = SimTime::default();
    }

    /// Dispatch one primary click.
    fn handle_click(&mut self, point: Position) {
        let target = input::classify_click(&self.world, &self.config.playfield, point);
        match target {
            ClickTarget::Sidebar => {
                self.selection
                    .deselect(&self.registry, &mut self.render_commands);
            }
            ClickTarget::Ship(ship) => {
                self.selection.select(
                    ship,
                    &mut self.world,
                    &self.registry,
                    &mut self.render_commands,
                );
            }
            ClickTarget::Background(destination) => {
                let ordered = self.selection.order_move(
                    destination,
                    self.config.movement.order_speed,
                    &mut self.world,
                    &self.registry,
                    &mut self.render_commands,
                );
                match ordered {
                    Ok(Some(order)) => {
                        debug!(ship = %order.ship, x = destination.x, y = destination.y, "move order issued");
                    }
                    Ok(None) => {}
                    Err(err) => {
                        debug!(%err, "move order rejected");
                        self.selection
                            .deselect(&self.registry, &mut self.render_commands);
                    }
                }
            }
        }
    }

    /// Run all systems in order.
    fn run_systems(&mut self) {
        let dt = self.time.dt();
        let now_ms = self.time.elapsed_ms();
        let playfield = &self.config.playfield;
        let bounds = Bounds::new(playfield.playable_width(), playfield.height);

        // 1. Patrol motion
        systems::patrol::run(&mut self.world, dt);
        // 2. Ordered motion + world bounds
        let bounds_hits = systems::movement::run(&mut self.world, &bounds);
        // 3. Combat resolution
        {
            let mut ctx = DamageContext {
                world: &mut self.world,
                registry: &mut self.registry,
                selection: &mut self.selection,
                render: &mut self.render_commands,
                events: &mut self.combat_events,
            };
            systems::combat::run(&mut ctx, &mut self.rng, &mut self.score, now_ms);
        }
        // 4. Selection bookkeeping
        systems::orders::run(
            &mut self.world,
            &self.registry,
            &mut self.selection,
            &mut self.render_commands,
            &bounds_hits,
            self.config.movement.arrival_epsilon,
        );
        // 5. Cleanup (sunk hostiles)
        systems::cleanup::run(&mut self.world, &mut self.registry, &mut self.render_commands);
        // 6. Mission outcome
        self.check_outcome();
    }

    fn check_outcome(&mut self) {
        let outcome = if self.registry.living_on(Side::Player) == 0 {
            Some(MissionOutcome::Defeat)
        } else if self.registry.living_on(Side::Hostile) == 0 {
            Some(MissionOutcome::Victory)
        } else {
            None
        };
        if let Some(outcome) = outcome {
            info!(?outcome, tick = self.time.tick, "mission complete");
            self.outcome = Some(outcome);
            self.phase = GamePhase::MissionComplete;
            if let Some(selected) = self.selection.selected() {
                self.render_commands
                    .push(stats_panel(&self.registry, selected, true));
            }
        }
    }
}
