use std::path::PathBuf;
use std::sync::mpsc;
use std::sync::Arc;
use std::time::{Duration, SystemTime, UNIX_EPOCH};

use anyhow::Context;
use clap::{Parser, ValueEnum};
use tracing::info;

use abyss_app::config::AppConfig;
use abyss_app::dive::{run_headless, DiveReport, Expedition, Pilot};
use abyss_app::state::AppState;
use abyss_campaign::{Campaign, JsonFileStore, KeyValueStore};
use abyss_core::catalog::{DEFAULT_OCEAN_ID, STARTER_VESSEL_ID};
use abyss_core::enums::GameMode;
use abyss_facts::{CatalogProvider, FactDesk, FactService};
use abyss_sim::SimulationEngine;

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Mode {
    Exploration,
    Combat,
}

impl From<Mode> for GameMode {
    fn from(mode: Mode) -> Self {
        match mode {
            Mode::Exploration => GameMode::Exploration,
            Mode::Combat => GameMode::Combat,
        }
    }
}

#[derive(Parser)]
#[command(name = "abyss", about = "Headless ABYSS dive runner")]
struct Args {
    /// JSON config file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Save file (overrides the config)
    #[arg(long)]
    save: Option<PathBuf>,

    /// Mission seed (overrides the config)
    #[arg(long)]
    seed: Option<u64>,

    /// Vessel to dive in
    #[arg(long, default_value = STARTER_VESSEL_ID)]
    vessel: String,

    /// Ocean to dive in
    #[arg(long, default_value = DEFAULT_OCEAN_ID)]
    ocean: String,

    #[arg(long, value_enum, default_value = "exploration")]
    mode: Mode,

    /// Frame budget for the dive
    #[arg(long, default_value_t = 36_000)]
    frames: u64,

    /// Scroll input per frame
    #[arg(long, default_value_t = 400.0)]
    wheel: f64,

    /// Run on the 60Hz game loop thread instead of as fast as possible
    #[arg(long)]
    realtime: bool,

    /// Buy this vessel before diving
    #[arg(long)]
    buy: Option<String>,
}

/// Mission date key: whole days since the Unix epoch.
fn today_stamp() -> String {
    let days = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs() / 86_400)
        .unwrap_or(0);
    format!("epoch-day-{days}")
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let args = Args::parse();

    let mut config = AppConfig::load(args.config.as_deref())?;
    if let Some(save) = args.save.clone() {
        config.save_path = save;
    }
    if let Some(seed) = args.seed {
        config.mission_seed = seed;
    }

    info!(save = %config.save_path.display(), "loading campaign");
    let mut store = JsonFileStore::open(&config.save_path)
        .with_context(|| format!("opening save {}", config.save_path.display()))?;
    let mut campaign = Campaign::load(&mut store, &today_stamp(), config.mission_seed)?;
    for mission in campaign.missions.iter().filter(|m| !m.completed) {
        info!(mission = %mission.description, reward = mission.reward, "open mission");
    }

    if let Some(vessel) = args.buy.as_deref() {
        if let Err(e) = campaign.buy_vessel(vessel) {
            tracing::warn!(vessel, error = %e, "purchase refused");
        }
    }
    let launch = campaign.launch_options(&args.vessel, &args.ocean, args.mode.into())?;

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .worker_threads(2)
        .enable_all()
        .build()
        .context("starting async runtime")?;
    let service = if config.facts.enabled {
        FactService::new(Arc::new(CatalogProvider), config.facts.timeout())
    } else {
        FactService::offline()
    };
    let desk = FactDesk::new(service, runtime.handle().clone());

    let mut pilot = Pilot::new(launch, args.wheel);
    let mut expedition = Expedition::new(&mut campaign, Some(desk));

    let report = if args.realtime {
        run_realtime(&config, &mut pilot, &mut expedition, &mut store, args.frames)?
    } else {
        let mut engine = SimulationEngine::new(config.sim_config());
        run_headless(&mut engine, &mut pilot, &mut expedition, &mut store, args.frames)?
    };

    campaign.save(&mut store)?;
    info!(
        coins = report.coins,
        discovered = campaign.discovery_percent(),
        day = campaign.day,
        "campaign saved"
    );
    println!("{}", serde_json::to_string_pretty(&summary(&report))?);
    Ok(())
}

/// Fly the dive against the real-time game loop thread, saving campaign
/// changes to `store` as they arrive.
fn run_realtime(
    config: &AppConfig,
    pilot: &mut Pilot,
    expedition: &mut Expedition<'_>,
    store: &mut dyn KeyValueStore,
    max_frames: u64,
) -> anyhow::Result<DiveReport> {
    let state = AppState::new();
    let (event_tx, event_rx) = mpsc::channel();
    state.start_simulation(config.sim_config(), event_tx)?;

    let poll = Duration::from_millis(16);
    let mut polls = 0u64;
    while !pilot.is_finished() && polls < max_frames {
        std::thread::sleep(poll);
        polls += 1;

        let events: Vec<_> = event_rx.try_iter().collect();
        expedition.absorb(&events);
        expedition.checkpoint(store)?;

        let Some(snapshot) = state.get_snapshot()? else {
            continue;
        };
        expedition.observe(&snapshot);

        let (commands, input) = pilot.steer(&snapshot);
        for command in commands.into_iter().chain(expedition.take_commands()) {
            state.send_command(command)?;
        }
        state.send_input(input)?;
    }

    state.shutdown()?;
    let events: Vec<_> = event_rx.try_iter().collect();
    expedition.absorb(&events);
    expedition.checkpoint(store)?;
    expedition.report.outcome = pilot.outcome();
    Ok(expedition.report.clone())
}

fn summary(report: &DiveReport) -> serde_json::Value {
    serde_json::json!({
        "frames": report.frames,
        "outcome": report.outcome.map(|m| format!("{m:?}")),
        "max_depth": report.max_depth,
        "kills": report.kills,
        "discoveries": report.discoveries,
        "facts_shown": report.facts_shown,
        "coins": report.coins,
    })
}
