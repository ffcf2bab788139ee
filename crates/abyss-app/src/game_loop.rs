//! Game loop thread: runs the simulation engine at 60Hz.
//!
//! The engine is created inside the thread that owns it. Commands and input
//! arrive on an `mpsc` channel; events go out on another; the latest
//! snapshot is kept in shared state for polling.

use std::sync::mpsc;
use std::sync::{Arc, Mutex};
use std::thread::JoinHandle;
use std::time::{Duration, Instant};

use anyhow::Context;

use abyss_core::constants::{DT, FRAME_RATE};
use abyss_core::events::GameEvent;
use abyss_core::state::GameStateSnapshot;
use abyss_core::types::InputSnapshot;
use abyss_sim::{SimConfig, SimulationEngine};

use crate::state::GameLoopCommand;

/// Wall-clock duration of one frame.
const FRAME_DURATION: Duration = Duration::from_nanos(1_000_000_000 / FRAME_RATE as u64);

/// Spawns the game loop in a new thread.
///
/// Returns the command sender and the thread handle; join the handle after
/// sending `Shutdown` to be sure every event has been forwarded.
pub fn spawn_game_loop(
    config: SimConfig,
    latest_snapshot: Arc<Mutex<Option<GameStateSnapshot>>>,
    events: mpsc::Sender<GameEvent>,
) -> anyhow::Result<(mpsc::Sender<GameLoopCommand>, JoinHandle<()>)> {
    let (cmd_tx, cmd_rx) = mpsc::channel::<GameLoopCommand>();

    let handle = std::thread::Builder::new()
        .name("abyss-game-loop".into())
        .spawn(move || {
            run_game_loop(config, cmd_rx, &latest_snapshot, &events);
        })
        .context("failed to spawn game loop thread")?;

    Ok((cmd_tx, handle))
}

/// Fold newly arrived input into what the next frame will consume.
fn merge_input(pending: &mut InputSnapshot, input: InputSnapshot) {
    pending.wheel_delta += input.wheel_delta;
    pending.drag_delta_y += input.drag_delta_y;
    pending.joystick = input.joystick;
}

/// Runs until Shutdown or channel disconnect. Commands queued ahead of
/// Shutdown still get one last frame.
fn run_game_loop(
    config: SimConfig,
    cmd_rx: mpsc::Receiver<GameLoopCommand>,
    latest_snapshot: &Mutex<Option<GameStateSnapshot>>,
    events: &mpsc::Sender<GameEvent>,
) {
    let mut engine = SimulationEngine::new(config);
    let mut input = InputSnapshot::default();
    let mut next_frame_time = Instant::now();
    tracing::info!("game loop started");

    loop {
        // 1. Drain all pending commands
        let mut stopping = false;
        loop {
            match cmd_rx.try_recv() {
                Ok(GameLoopCommand::PlayerCommand(cmd)) => engine.queue_command(cmd),
                Ok(GameLoopCommand::Input(fresh)) => merge_input(&mut input, fresh),
                Ok(GameLoopCommand::Shutdown) => {
                    stopping = true;
                    break;
                }
                Err(mpsc::TryRecvError::Disconnected) => {
                    tracing::info!(frames = engine.time().tick, "game loop disconnected");
                    return;
                }
                Err(mpsc::TryRecvError::Empty) => break,
            }
        }

        // 2. Advance one frame, consuming the accumulated deltas
        let snapshot = engine.tick(DT, input);
        input.wheel_delta = 0.0;
        input.drag_delta_y = 0.0;

        // 3. Forward events; the receiver may have gone away
        for event in &snapshot.events {
            let _ = events.send(event.clone());
        }

        // 4. Store latest snapshot for polling
        if let Ok(mut lock) = latest_snapshot.lock() {
            *lock = Some(snapshot);
        }

        if stopping {
            tracing::info!(frames = engine.time().tick, "game loop stopped");
            return;
        }

        // 5. Sleep until the next frame
        next_frame_time += FRAME_DURATION;
        let now = Instant::now();
        if next_frame_time > now {
            std::thread::sleep(next_frame_time - now);
        } else if now - next_frame_time > FRAME_DURATION * 2 {
            // Too far behind; drop the backlog instead of catching up
            next_frame_time = now;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use abyss_core::commands::PlayerCommand;
    use abyss_core::enums::AppMode;

    #[test]
    fn test_command_channel_round_trip() {
        let (tx, rx) = mpsc::channel::<GameLoopCommand>();

        tx.send(GameLoopCommand::PlayerCommand(PlayerCommand::SkipIntro))
            .unwrap();
        tx.send(GameLoopCommand::Input(InputSnapshot::wheel(40.0)))
            .unwrap();
        tx.send(GameLoopCommand::Shutdown).unwrap();

        let commands: Vec<_> = rx.try_iter().collect();
        assert_eq!(commands.len(), 3);
        assert!(matches!(
            commands[0],
            GameLoopCommand::PlayerCommand(PlayerCommand::SkipIntro)
        ));
        assert!(matches!(commands[1], GameLoopCommand::Input(_)));
        assert!(matches!(commands[2], GameLoopCommand::Shutdown));
    }

    #[test]
    fn test_input_deltas_accumulate_and_joystick_holds() {
        let mut pending = InputSnapshot::default();
        merge_input(&mut pending, InputSnapshot::wheel(10.0));
        merge_input(&mut pending, InputSnapshot::wheel(5.0));
        merge_input(&mut pending, InputSnapshot::drag(2.0));
        assert_eq!(pending.wheel_delta, 15.0);
        assert_eq!(pending.drag_delta_y, 2.0);
        assert_eq!(pending.joystick, glam::Vec2::ZERO);

        merge_input(&mut pending, InputSnapshot::joystick(0.5, 0.0));
        assert_eq!(pending.joystick, glam::Vec2::new(0.5, 0.0));
        assert_eq!(pending.wheel_delta, 15.0);
    }

    #[test]
    fn test_loop_publishes_snapshots_and_events() {
        let latest = Arc::new(Mutex::new(None));
        let (event_tx, event_rx) = mpsc::channel();
        let (cmd_tx, handle) = spawn_game_loop(SimConfig::default(), latest.clone(), event_tx).unwrap();

        cmd_tx
            .send(GameLoopCommand::PlayerCommand(PlayerCommand::SkipIntro))
            .unwrap();

        let deadline = Instant::now() + Duration::from_secs(2);
        let mut seen_splash = false;
        while Instant::now() < deadline && !seen_splash {
            std::thread::sleep(Duration::from_millis(20));
            seen_splash = latest
                .lock()
                .unwrap()
                .as_ref()
                .is_some_and(|s| s.mode == AppMode::Splash);
        }
        assert!(seen_splash, "loop should reach the splash screen");

        let event = event_rx.recv_timeout(Duration::from_secs(1)).unwrap();
        assert!(matches!(
            event,
            GameEvent::ModeChanged { from: AppMode::Intro, to: AppMode::Splash }
        ));

        cmd_tx.send(GameLoopCommand::Shutdown).unwrap();
        handle.join().unwrap();
    }

    #[test]
    fn test_shutdown_runs_commands_queued_before_it() {
        let latest = Arc::new(Mutex::new(None));
        let (event_tx, event_rx) = mpsc::channel();
        let (cmd_tx, handle) = spawn_game_loop(SimConfig::default(), latest.clone(), event_tx).unwrap();

        cmd_tx
            .send(GameLoopCommand::PlayerCommand(PlayerCommand::SkipIntro))
            .unwrap();
        cmd_tx.send(GameLoopCommand::Shutdown).unwrap();
        handle.join().unwrap();

        let events: Vec<GameEvent> = event_rx.try_iter().collect();
        assert!(events.contains(&GameEvent::ModeChanged {
            from: AppMode::Intro,
            to: AppMode::Splash,
        }));
        let mode = latest.lock().unwrap().as_ref().map(|s| s.mode);
        assert_eq!(mode, Some(AppMode::Splash));
    }

    #[test]
    fn test_snapshot_serialization_under_3ms() {
        let mut engine = SimulationEngine::new(SimConfig::default());
        engine.queue_command(PlayerCommand::SkipIntro);
        for _ in 0..200 {
            engine.tick(DT, InputSnapshot::default());
        }

        let snapshot = engine.tick(DT, InputSnapshot::default());
        let start = Instant::now();
        let json = serde_json::to_string(&snapshot).unwrap();
        let elapsed = start.elapsed();

        assert!(
            elapsed < Duration::from_millis(3),
            "Snapshot serialization took {:?}, should be <3ms",
            elapsed
        );
        assert!(!json.is_empty());
    }

    #[test]
    fn test_frame_duration_constant() {
        // 60Hz = 16.666ms per frame
        let expected_nanos = 1_000_000_000u64 / 60;
        assert_eq!(FRAME_DURATION.as_nanos(), expected_nanos as u128);
    }
}
