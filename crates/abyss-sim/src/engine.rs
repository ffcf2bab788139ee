//! Simulation engine, the core of the game.
//!
//! `SimulationEngine` owns the hecs ECS world, drives the top-level mode
//! machine, processes player commands, runs all systems and produces
//! `GameStateSnapshot`s. Completely headless, enabling deterministic testing.

use std::collections::{HashMap, VecDeque};

use glam::Vec3;
use hecs::World;

use abyss_core::catalog::{find_entity, find_ocean, find_vessel};
use abyss_core::commands::{LaunchOptions, PlayerCommand};
use abyss_core::components::{Creature, Lifecycle, Transform};
use abyss_core::constants::*;
use abyss_core::enums::{AppMode, FireRejection, GameMode, LifeState};
use abyss_core::events::GameEvent;
use abyss_core::state::GameStateSnapshot;
use abyss_core::types::{InputSnapshot, ScreenPoint, SimTime, Viewport};

use crate::hit_index::HitIndex;
use crate::scheduler::{Scheduler, TimerAction};
use crate::session::Session;
use crate::systems;
use crate::systems::snapshot::FrontEnd;
use crate::world_setup;

/// Configuration for the simulation.
pub struct SimConfig {
    /// Output surface used for screen-space hit testing.
    pub viewport: Viewport,
    /// Multiplier applied to every frame duration (1.0 = normal).
    pub time_scale: f64,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            viewport: Viewport::default(),
            time_scale: 1.0,
        }
    }
}

/// The simulation engine. Owns the ECS world and all sim state.
pub struct SimulationEngine {
    world: World,
    /// Session clock. Frozen outside active, unpaused play.
    time: SimTime,
    mode: AppMode,
    paused: bool,
    intro_panel: u8,
    /// Real time spent in the current splash or sleep sequence.
    mode_timer_secs: f64,
    sleeping: bool,
    time_scale: f64,
    session: Session,
    scheduler: Scheduler,
    hit_index: HitIndex,
    /// Published world positions of alive creatures, refreshed every frame.
    positions: HashMap<String, Vec3>,
    command_queue: VecDeque<PlayerCommand>,
    despawn_buffer: Vec<hecs::Entity>,
    events: Vec<GameEvent>,
}

/// Keep the speed multiplier in `[0, MAX_TIME_SCALE]`; a non-finite
/// value falls back to normal speed.
pub fn clamp_time_scale(scale: f64) -> f64 {
    if scale.is_finite() {
        scale.clamp(0.0, MAX_TIME_SCALE)
    } else {
        1.0
    }
}

impl SimulationEngine {
    /// Create a new simulation engine with the given config.
    pub fn new(config: SimConfig) -> Self {
        Self {
            world: World::new(),
            time: SimTime::default(),
            mode: AppMode::default(),
            paused: false,
            intro_panel: 0,
            mode_timer_secs: 0.0,
            sleeping: false,
            time_scale: clamp_time_scale(config.time_scale),
            session: Session::default(),
            scheduler: Scheduler::default(),
            hit_index: HitIndex::new(config.viewport),
            positions: HashMap::new(),
            command_queue: VecDeque::new(),
            despawn_buffer: Vec::new(),
            events: Vec::new(),
        }
    }

    /// Queue a player command for processing at the next tick boundary.
    pub fn queue_command(&mut self, command: PlayerCommand) {
        self.command_queue.push_back(command);
    }

    /// Queue multiple commands.
    pub fn queue_commands(&mut self, commands: impl IntoIterator<Item = PlayerCommand>) {
        self.command_queue.extend(commands);
    }

    /// Advance by one frame of `dt` seconds with the input gathered since the
    /// previous frame, and return the resulting snapshot.
    pub fn tick(&mut self, dt: f64, input: InputSnapshot) -> GameStateSnapshot {
        let dt = dt * self.time_scale;

        self.process_commands();
        self.advance_front_end(dt);

        if self.is_active() {
            self.run_systems(dt, &input);
        }

        let events = std::mem::take(&mut self.events);
        let front = FrontEnd {
            mode: self.mode,
            paused: self.paused,
            intro_panel: self.intro_panel,
        };
        systems::snapshot::build_snapshot(&self.world, &self.time, &front, &self.session, events)
    }

    /// Get the current application mode.
    pub fn mode(&self) -> AppMode {
        self.mode
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    /// Get the session clock.
    pub fn time(&self) -> SimTime {
        self.time
    }

    /// Get the current time scale.
    pub fn time_scale(&self) -> f64 {
        self.time_scale
    }

    /// Get a read-only reference to the ECS world.
    pub fn world(&self) -> &World {
        &self.world
    }

    #[cfg(test)]
    pub fn session(&self) -> &Session {
        &self.session
    }

    #[cfg(test)]
    pub fn session_mut(&mut self) -> &mut Session {
        &mut self.session
    }

    #[cfg(test)]
    pub fn scheduler(&self) -> &Scheduler {
        &self.scheduler
    }

    #[cfg(test)]
    pub fn positions(&self) -> &HashMap<String, Vec3> {
        &self.positions
    }

    #[cfg(test)]
    pub fn hit_index(&self) -> &HitIndex {
        &self.hit_index
    }

    /// Place the vessel at `depth` with the target settled there.
    #[cfg(test)]
    pub fn set_depth(&mut self, depth: f64) {
        self.session.current_depth = depth;
        self.session.target_depth = depth;
    }

    /// Active play: in a dive, unpaused, and not yet won.
    fn is_active(&self) -> bool {
        self.mode == AppMode::Game && !self.paused && !self.session.won
    }

    fn set_mode(&mut self, to: AppMode) {
        if self.mode == to {
            return;
        }
        let from = self.mode;
        tracing::info!(?from, ?to, "mode change");
        self.mode = to;
        self.mode_timer_secs = 0.0;
        self.events.push(GameEvent::ModeChanged { from, to });
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
            PlayerCommand::AdvanceIntro if self.mode == AppMode::Intro => {
                self.intro_panel += 1;
                if self.intro_panel >= INTRO_PANEL_COUNT {
                    self.set_mode(AppMode::Splash);
                }
            }
            PlayerCommand::SkipIntro if self.mode == AppMode::Intro => {
                self.set_mode(AppMode::Splash);
            }
            PlayerCommand::Launch(options) if self.mode == AppMode::Menu => {
                self.launch(&options);
            }
            PlayerCommand::GoHome if self.mode == AppMode::Menu => {
                self.set_mode(AppMode::Home);
            }
            PlayerCommand::GoHome if self.mode == AppMode::Game => {
                self.abandon_run();
                self.set_mode(AppMode::Home);
            }
            PlayerCommand::Sleep if self.mode == AppMode::Home && !self.sleeping => {
                self.sleeping = true;
                self.mode_timer_secs = 0.0;
            }
            PlayerCommand::ReturnToMenu if self.mode == AppMode::Home && !self.sleeping => {
                self.set_mode(AppMode::Menu);
            }
            PlayerCommand::Pause if self.mode == AppMode::Game && !self.paused => {
                self.paused = true;
            }
            PlayerCommand::Resume if self.mode == AppMode::Game && self.paused => {
                self.paused = false;
            }
            PlayerCommand::Reset if matches!(self.mode, AppMode::Game | AppMode::GameOver) => {
                self.restart();
            }
            PlayerCommand::Exit if self.mode == AppMode::Game || self.mode.is_terminal() => {
                self.abandon_run();
                self.set_mode(AppMode::Menu);
            }
            PlayerCommand::InspectAt { x, y } if self.can_inspect() => {
                if let Some(entity_id) = self.hit_index.entity_at(ScreenPoint::new(x, y)) {
                    self.inspect(&entity_id);
                }
            }
            PlayerCommand::Inspect { entity_id } if self.can_inspect() => {
                self.inspect(&entity_id);
            }
            PlayerCommand::ApplyFact { entity_id, text } => {
                systems::inspection::apply_fact(&mut self.session, &entity_id, text);
            }
            PlayerCommand::CloseFact => {
                self.session.selection = None;
            }
            PlayerCommand::ToggleLight if self.mode == AppMode::Game => {
                self.session.light_on = !self.session.light_on;
            }
            PlayerCommand::Fire => self.fire(),
            other => {
                tracing::debug!(command = ?other, mode = ?self.mode, "command ignored");
            }
        }
    }

    fn launch(&mut self, options: &LaunchOptions) {
        let Some(vessel) = find_vessel(&options.vessel_id) else {
            tracing::debug!(vessel = %options.vessel_id, "unknown vessel");
            return;
        };
        if find_ocean(&options.ocean_id).is_none() {
            tracing::debug!(ocean = %options.ocean_id, "unknown ocean");
            return;
        }

        tracing::info!(
            vessel = vessel.id,
            ocean = %options.ocean_id,
            mode = ?options.mode,
            "launching dive"
        );
        self.session = Session::launch(vessel, options);
        self.begin_run();
    }

    fn restart(&mut self) {
        let Some(vessel) = find_vessel(&self.session.vessel_id) else {
            return;
        };
        self.session.restart(vessel);
        self.begin_run();
    }

    /// Common setup for launch and restart.
    fn begin_run(&mut self) {
        self.world.clear();
        self.scheduler.cancel_all();
        self.positions.clear();
        self.hit_index.rebuild(0.0);
        self.time = SimTime::default();
        self.paused = false;
        self.set_mode(AppMode::Game);
    }

    /// Stop the run in place: pending timers, projectiles and bursts go.
    fn leave_play(&mut self) {
        self.scheduler.cancel_all();
        world_setup::clear_effects(&mut self.world);
        self.session.firing_at = None;
    }

    /// Leave the dive entirely and surface.
    fn abandon_run(&mut self) {
        self.leave_play();
        self.world.clear();
        self.positions.clear();
        self.paused = false;
        self.session.current_depth = 0.0;
        self.session.target_depth = 0.0;
        self.session.selection = None;
    }

    fn can_inspect(&self) -> bool {
        self.is_active() && self.session.game_mode == GameMode::Exploration
    }

    fn inspect(&mut self, entity_id: &str) {
        if !self.positions.contains_key(entity_id) {
            tracing::debug!(entity = entity_id, "inspect target not in view");
            return;
        }
        if let Some(entity) = find_entity(entity_id) {
            systems::inspection::inspect(&mut self.session, entity, &mut self.events);
        }
    }

    fn fire(&mut self) {
        if self.mode != AppMode::Game {
            tracing::debug!(reason = ?FireRejection::NotCombat, "fire rejected");
            return;
        }
        let now = self.time.elapsed_secs;
        match systems::targeting::try_fire(&mut self.session, &self.hit_index, self.paused, now) {
            Ok(target_id) => {
                let id = self.session.next_projectile_id;
                self.session.next_projectile_id += 1;
                world_setup::spawn_projectile(
                    &mut self.world,
                    id,
                    &target_id,
                    self.session.current_depth,
                );
                self.scheduler
                    .schedule(now, TRIGGER_RESET_SECS, TimerAction::ClearTrigger);
                tracing::info!(target = %target_id, ammo = self.session.ammo, "fired");
                self.events.push(GameEvent::Fired {
                    target_id,
                    ammo_left: self.session.ammo,
                });
            }
            Err(reason) => {
                tracing::debug!(?reason, "fire rejected");
            }
        }
    }

    /// Splash fade and the home-base sleep cutscene run on real time.
    fn advance_front_end(&mut self, dt: f64) {
        match self.mode {
            AppMode::Splash => {
                self.mode_timer_secs += dt;
                if self.mode_timer_secs >= SPLASH_DURATION_SECS {
                    self.set_mode(AppMode::Menu);
                }
            }
            AppMode::Home if self.sleeping => {
                self.mode_timer_secs += dt;
                if self.mode_timer_secs >= SLEEP_DURATION_SECS {
                    self.sleeping = false;
                    if let Some(vessel) = find_vessel(&self.session.vessel_id) {
                        self.session.refit(vessel);
                    }
                    self.events.push(GameEvent::DayAdvanced);
                    self.set_mode(AppMode::Menu);
                }
            }
            _ => {}
        }
    }

    /// Run all systems in order.
    fn run_systems(&mut self, dt: f64, input: &InputSnapshot) {
        self.time.advance(dt);
        let now = self.time.elapsed_secs;

        // 1. Depth driver
        systems::depth::apply_input(&mut self.session, input);
        if systems::depth::run(&mut self.session, &mut self.events) {
            self.leave_play();
            self.set_mode(AppMode::GameWon);
            return;
        }

        // 2. Delayed callbacks
        for action in self.scheduler.take_due(now) {
            match action {
                TimerAction::ClearTrigger => self.session.firing_at = None,
                TimerAction::PruneDying { entity_id } => {
                    self.session.dying.retain(|id| *id != entity_id);
                }
            }
        }

        // 3. Render-set sync
        systems::visibility::run(&mut self.world, &self.session, now, &mut self.despawn_buffer);

        // 4. Creature motion + position publishing
        systems::creature_motion::run(
            &mut self.world,
            now,
            dt,
            self.session.is_combat(),
            &mut self.positions,
        );

        // 5. Hit index
        self.rebuild_hit_index();

        // 6. Targeting
        if self.session.is_combat() {
            systems::targeting::run(&mut self.session, input, &mut self.hit_index);
        }

        // 7. Projectiles
        let impacts =
            systems::projectile::run(&mut self.world, &self.positions, dt, &mut self.despawn_buffer);
        systems::projectile::resolve_impacts(
            &mut self.world,
            &mut self.session,
            &mut self.scheduler,
            impacts,
            now,
            &mut self.events,
        );

        // 8. Bursts
        systems::effects::run(&mut self.world, dt, &mut self.despawn_buffer);

        // 9. Cleanup
        systems::cleanup::run(&mut self.world, &mut self.session, &mut self.despawn_buffer);

        // 10. Survival
        if systems::survival::run(&mut self.session, dt, &mut self.events) {
            self.leave_play();
            self.set_mode(AppMode::GameOver);
        }
    }

    fn rebuild_hit_index(&mut self) {
        self.hit_index.rebuild(self.session.current_depth);
        for (_entity, (creature, transform, lifecycle)) in self
            .world
            .query::<(&Creature, &Transform, &Lifecycle)>()
            .iter()
        {
            if lifecycle.state == LifeState::Alive {
                self.hit_index
                    .register_entity(&creature.entity_id, transform.position, creature.base_scale);
            }
        }
    }
}
