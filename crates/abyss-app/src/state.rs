//! State shared between the driver and the game loop thread.

use std::sync::mpsc;
use std::sync::{Arc, Mutex};
use std::thread::JoinHandle;

use anyhow::{anyhow, bail};

use abyss_core::commands::PlayerCommand;
use abyss_core::events::GameEvent;
use abyss_core::state::GameStateSnapshot;
use abyss_core::types::InputSnapshot;
use abyss_sim::SimConfig;

use crate::game_loop;

/// Messages to the game loop thread.
#[derive(Debug)]
pub enum GameLoopCommand {
    /// A player command to forward to the simulation engine.
    PlayerCommand(PlayerCommand),
    /// Input gathered since the last message. Wheel and drag deltas add up
    /// until the next frame consumes them; the joystick is held.
    Input(InputSnapshot),
    /// Shut down the game loop thread.
    Shutdown,
}

/// Handle to a running game loop.
///
/// - `command_tx` is `None` until `start_simulation`
/// - `latest_snapshot` is written by the loop after every frame
/// - `loop_handle` is joined by `shutdown`
pub struct AppState {
    pub command_tx: Mutex<Option<mpsc::Sender<GameLoopCommand>>>,
    pub latest_snapshot: Arc<Mutex<Option<GameStateSnapshot>>>,
    pub running: Mutex<bool>,
    loop_handle: Mutex<Option<JoinHandle<()>>>,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            command_tx: Mutex::new(None),
            latest_snapshot: Arc::new(Mutex::new(None)),
            running: Mutex::new(false),
            loop_handle: Mutex::new(None),
        }
    }

    /// Spawn the game loop. Simulation events are forwarded to `events`.
    pub fn start_simulation(
        &self,
        config: SimConfig,
        events: mpsc::Sender<GameEvent>,
    ) -> anyhow::Result<()> {
        let mut running = self.running.lock().map_err(|e| anyhow!(e.to_string()))?;
        if *running {
            bail!("simulation already running");
        }

        let (cmd_tx, handle) =
            game_loop::spawn_game_loop(config, self.latest_snapshot.clone(), events)?;

        let mut tx_lock = self.command_tx.lock().map_err(|e| anyhow!(e.to_string()))?;
        *tx_lock = Some(cmd_tx);
        let mut handle_lock = self.loop_handle.lock().map_err(|e| anyhow!(e.to_string()))?;
        *handle_lock = Some(handle);
        *running = true;
        Ok(())
    }

    fn send(&self, message: GameLoopCommand) -> anyhow::Result<()> {
        let tx_lock = self.command_tx.lock().map_err(|e| anyhow!(e.to_string()))?;
        match tx_lock.as_ref() {
            Some(tx) => tx
                .send(message)
                .map_err(|e| anyhow!("failed to send to game loop: {e}")),
            None => bail!("simulation not started"),
        }
    }

    pub fn send_command(&self, command: PlayerCommand) -> anyhow::Result<()> {
        self.send(GameLoopCommand::PlayerCommand(command))
    }

    pub fn send_input(&self, input: InputSnapshot) -> anyhow::Result<()> {
        self.send(GameLoopCommand::Input(input))
    }

    /// Latest snapshot, if the loop has produced one.
    pub fn get_snapshot(&self) -> anyhow::Result<Option<GameStateSnapshot>> {
        let lock = self.latest_snapshot.lock().map_err(|e| anyhow!(e.to_string()))?;
        Ok(lock.clone())
    }

    /// Stop the loop and wait for its thread to exit, so every event it
    /// produced is already in the events channel. Safe to call when it never
    /// started.
    pub fn shutdown(&self) -> anyhow::Result<()> {
        let mut running = self.running.lock().map_err(|e| anyhow!(e.to_string()))?;
        if !*running {
            return Ok(());
        }
        self.send(GameLoopCommand::Shutdown)?;
        *running = false;

        let handle = self
            .loop_handle
            .lock()
            .map_err(|e| anyhow!(e.to_string()))?
            .take();
        if let Some(handle) = handle {
            handle
                .join()
                .map_err(|_| anyhow!("game loop thread panicked"))?;
        }
        Ok(())
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use abyss_core::enums::AppMode;

    #[test]
    fn shutdown_before_start_is_a_no_op() {
        let state = AppState::new();
        state.shutdown().unwrap();
        assert!(state.send_command(PlayerCommand::SkipIntro).is_err());
    }

    #[test]
    fn shutdown_waits_for_the_loop_to_flush_events() {
        let state = AppState::new();
        let (event_tx, event_rx) = mpsc::channel();
        state.start_simulation(SimConfig::default(), event_tx).unwrap();
        assert!(state.start_simulation(SimConfig::default(), mpsc::channel().0).is_err());

        state.send_command(PlayerCommand::SkipIntro).unwrap();
        state.shutdown().unwrap();

        let events: Vec<GameEvent> = event_rx.try_iter().collect();
        assert!(events.contains(&GameEvent::ModeChanged {
            from: AppMode::Intro,
            to: AppMode::Splash,
        }));
        assert!(!*state.running.lock().unwrap());
        assert!(state.loop_handle.lock().unwrap().is_none());

        // Second shutdown is harmless.
        state.shutdown().unwrap();
    }
}
