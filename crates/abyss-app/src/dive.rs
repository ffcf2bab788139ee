//! Scripted dives.
//!
//! `Pilot` plays the game from snapshots: it gets through the front end,
//! launches, descends, inspects or fires, and leaves when the run ends.
//! `Expedition` routes the simulation's events into the campaign and the
//! fact desk and turns finished lookups back into commands.

use abyss_campaign::{Campaign, CampaignError, KeyValueStore};
use abyss_core::commands::{LaunchOptions, PlayerCommand};
use abyss_core::constants::DT;
use abyss_core::enums::{AppMode, GameMode, LifeState};
use abyss_core::events::GameEvent;
use abyss_core::state::GameStateSnapshot;
use abyss_core::types::InputSnapshot;
use abyss_facts::{FactDesk, FactRequest};
use abyss_sim::SimulationEngine;

/// Frames a fact card may stay loading before the pilot gives up on it.
const FACT_PATIENCE_FRAMES: u32 = 180;

/// Frames a loaded fact card stays open.
const READING_FRAMES: u32 = 60;

pub struct Pilot {
    launch: LaunchOptions,
    wheel_per_frame: f64,
    launched: bool,
    entered_game: bool,
    finished: bool,
    outcome: Option<AppMode>,
    card_frames: u32,
}

impl Pilot {
    pub fn new(launch: LaunchOptions, wheel_per_frame: f64) -> Self {
        Self {
            launch,
            wheel_per_frame,
            launched: false,
            entered_game: false,
            finished: false,
            outcome: None,
            card_frames: 0,
        }
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }

    /// How the run ended, if it reached a terminal mode.
    pub fn outcome(&self) -> Option<AppMode> {
        self.outcome
    }

    /// Decide this frame's commands and input from the latest snapshot.
    pub fn steer(&mut self, snapshot: &GameStateSnapshot) -> (Vec<PlayerCommand>, InputSnapshot) {
        match snapshot.mode {
            AppMode::Intro => (vec![PlayerCommand::SkipIntro], InputSnapshot::default()),
            AppMode::Splash => (Vec::new(), InputSnapshot::default()),
            AppMode::Menu => {
                if !self.launched {
                    self.launched = true;
                    (vec![PlayerCommand::Launch(self.launch.clone())], InputSnapshot::default())
                } else {
                    if self.entered_game {
                        self.finished = true;
                    }
                    (Vec::new(), InputSnapshot::default())
                }
            }
            AppMode::Home => (vec![PlayerCommand::ReturnToMenu], InputSnapshot::default()),
            AppMode::Game => {
                self.entered_game = true;
                if snapshot.paused {
                    return (vec![PlayerCommand::Resume], InputSnapshot::default());
                }
                match snapshot.game_mode {
                    GameMode::Exploration => self.explore(snapshot),
                    GameMode::Combat => self.fight(snapshot),
                }
            }
            AppMode::GameOver | AppMode::GameWon => {
                self.entered_game = true;
                self.outcome = Some(snapshot.mode);
                (vec![PlayerCommand::Exit], InputSnapshot::default())
            }
        }
    }

    fn explore(&mut self, snapshot: &GameStateSnapshot) -> (Vec<PlayerCommand>, InputSnapshot) {
        if let Some(selection) = &snapshot.selection {
            self.card_frames += 1;
            let limit = if selection.loading { FACT_PATIENCE_FRAMES } else { READING_FRAMES };
            if self.card_frames < limit {
                // Hold depth while the card is up.
                return (Vec::new(), InputSnapshot::default());
            }
            self.card_frames = 0;
            return (vec![PlayerCommand::CloseFact], InputSnapshot::default());
        }
        self.card_frames = 0;

        let commands = snapshot
            .entities
            .iter()
            .find(|e| e.life == LifeState::Alive && !e.catalogued)
            .map(|e| {
                vec![PlayerCommand::Inspect {
                    entity_id: e.entity_id.clone(),
                }]
            })
            .unwrap_or_default();
        (commands, InputSnapshot::wheel(self.wheel_per_frame))
    }

    fn fight(&mut self, snapshot: &GameStateSnapshot) -> (Vec<PlayerCommand>, InputSnapshot) {
        let weapons = &snapshot.weapons;
        let mut commands = Vec::new();
        if weapons.locked_target.is_some() && weapons.ammo > 0 && weapons.reload_progress >= 100.0 {
            commands.push(PlayerCommand::Fire);
        }

        // Sweep the reticle across the screen looking for a lock.
        let t = snapshot.time.elapsed_secs as f32;
        let mut input = InputSnapshot::joystick((t * 1.7).sin(), (t * 2.9).sin() * 0.6);
        input.wheel_delta = self.wheel_per_frame;
        (commands, input)
    }
}

/// Tallies for one dive.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DiveReport {
    pub frames: u64,
    pub outcome: Option<AppMode>,
    pub max_depth: f64,
    pub kills: u32,
    pub discoveries: u32,
    pub facts_shown: u32,
    pub coins: u64,
}

/// Campaign and fact plumbing around a running dive.
pub struct Expedition<'a> {
    pub campaign: &'a mut Campaign,
    desk: Option<FactDesk>,
    pending: Vec<PlayerCommand>,
    pub report: DiveReport,
    dirty: bool,
}

impl<'a> Expedition<'a> {
    pub fn new(campaign: &'a mut Campaign, desk: Option<FactDesk>) -> Self {
        Self {
            campaign,
            desk,
            pending: Vec::new(),
            report: DiveReport::default(),
            dirty: false,
        }
    }

    /// Save the campaign if any event changed it since the last checkpoint.
    /// Returns whether a save happened.
    pub fn checkpoint(&mut self, store: &mut dyn KeyValueStore) -> Result<bool, CampaignError> {
        if !self.dirty {
            return Ok(false);
        }
        self.campaign.save(store)?;
        self.dirty = false;
        tracing::debug!(coins = self.campaign.coins, "campaign checkpoint");
        Ok(true)
    }

    /// Fold one frame's events in.
    pub fn absorb(&mut self, events: &[GameEvent]) {
        for event in events {
            self.dirty |= self.campaign.apply_event(event);
            match event {
                GameEvent::Kill { .. } => self.report.kills += 1,
                GameEvent::Discovered { .. } => self.report.discoveries += 1,
                GameEvent::FactRequested { entity_id, name, depth } => {
                    if let Some(desk) = self.desk.as_mut() {
                        desk.request(FactRequest {
                            entity_id: entity_id.clone(),
                            name: name.clone(),
                            depth: *depth,
                        });
                    }
                }
                GameEvent::ModeChanged { to, .. } if *to != AppMode::Game => {
                    if let Some(desk) = self.desk.as_mut() {
                        desk.cancel();
                    }
                }
                _ => {}
            }
        }
        self.report.coins = self.campaign.coins;
    }

    /// Commands produced outside the pilot, such as finished fact lookups.
    pub fn take_commands(&mut self) -> Vec<PlayerCommand> {
        if let Some(desk) = self.desk.as_mut() {
            for ready in desk.drain() {
                self.report.facts_shown += 1;
                self.pending.push(PlayerCommand::ApplyFact {
                    entity_id: ready.entity_id,
                    text: ready.text,
                });
            }
        }
        std::mem::take(&mut self.pending)
    }

    pub fn observe(&mut self, snapshot: &GameStateSnapshot) {
        self.report.frames = snapshot.time.tick;
        self.report.max_depth = self.report.max_depth.max(snapshot.depth.current);
    }
}

/// Fly a dive frame by frame as fast as the engine runs, up to `max_frames`.
/// Campaign changes reach `store` on the frame they happen.
pub fn run_headless(
    engine: &mut SimulationEngine,
    pilot: &mut Pilot,
    expedition: &mut Expedition<'_>,
    store: &mut dyn KeyValueStore,
    max_frames: u64,
) -> Result<DiveReport, CampaignError> {
    let mut snapshot = engine.tick(DT, InputSnapshot::default());
    for _ in 0..max_frames {
        expedition.absorb(&snapshot.events);
        expedition.checkpoint(store)?;
        expedition.observe(&snapshot);
        if pilot.is_finished() {
            break;
        }

        let (commands, input) = pilot.steer(&snapshot);
        engine.queue_commands(commands);
        engine.queue_commands(expedition.take_commands());
        snapshot = engine.tick(DT, input);
    }
    expedition.absorb(&snapshot.events);
    expedition.checkpoint(store)?;
    expedition.observe(&snapshot);
    expedition.report.outcome = pilot.outcome();
    tracing::info!(
        frames = expedition.report.frames,
        max_depth = expedition.report.max_depth,
        kills = expedition.report.kills,
        discoveries = expedition.report.discoveries,
        outcome = ?expedition.report.outcome,
        "dive finished"
    );
    Ok(expedition.report.clone())
}
