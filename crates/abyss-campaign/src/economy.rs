//! Coins, discoveries, vessels, days and daily missions.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use abyss_core::catalog::{find_entity, find_ocean, find_vessel, SEA_ENTITIES, STARTER_VESSEL_ID};
use abyss_core::commands::LaunchOptions;
use abyss_core::constants::{HOSTILE_KILL_REWARD, PEACEFUL_KILL_PENALTY};
use abyss_core::enums::GameMode;
use abyss_core::events::GameEvent;

use abyss_procgen::missions::{roll_daily, Mission};
use abyss_procgen::placement::stable_hash;

use crate::error::CampaignError;
use crate::store::KeyValueStore;

pub const COINS_KEY: &str = "abyss_coins";
pub const CATALOG_KEY: &str = "abyss_catalog";
pub const OWNED_VESSELS_KEY: &str = "abyss_owned_subs";
pub const DAY_KEY: &str = "abyss_day";
pub const MISSIONS_KEY: &str = "abyss_missions";
pub const MISSION_DATE_KEY: &str = "abyss_mission_date";

/// Progression that survives between dives.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Campaign {
    pub coins: u64,
    /// Catalogued entity identifiers, in discovery order.
    pub catalogued: Vec<String>,
    pub owned_vessels: Vec<String>,
    pub day: u32,
    pub missions: Vec<Mission>,
    /// Date key the missions were rolled for.
    pub mission_date: String,
}

impl Default for Campaign {
    fn default() -> Self {
        Self {
            coins: 0,
            catalogued: Vec::new(),
            owned_vessels: vec![STARTER_VESSEL_ID.to_string()],
            day: 1,
            missions: Vec::new(),
            mission_date: String::new(),
        }
    }
}

/// Coin balance after killing an entity. Hostiles pay; anything else costs,
/// never below zero.
pub fn settle_kill(coins: u64, hostile: bool) -> u64 {
    if hostile {
        coins + HOSTILE_KILL_REWARD
    } else {
        coins.saturating_sub(PEACEFUL_KILL_PENALTY)
    }
}

impl Campaign {
    /// Load saved progression. Missing keys keep their defaults; values that
    /// fail to parse are logged and ignored. Missions are re-rolled when the
    /// stored date differs from `today`.
    pub fn load(
        store: &mut dyn KeyValueStore,
        today: &str,
        seed: u64,
    ) -> Result<Self, CampaignError> {
        let mut campaign = Self::default();

        if let Some(coins) = read_parsed::<u64>(store, COINS_KEY)? {
            campaign.coins = coins;
        }
        if let Some(catalogued) = read_json::<Vec<String>>(store, CATALOG_KEY)? {
            campaign.catalogued = catalogued;
        }
        if let Some(owned) = read_json::<Vec<String>>(store, OWNED_VESSELS_KEY)? {
            campaign.owned_vessels = owned;
        }
        if let Some(day) = read_parsed::<u32>(store, DAY_KEY)? {
            campaign.day = day;
        }

        if let (Some(date), Some(missions)) = (
            store.get(MISSION_DATE_KEY)?,
            read_json::<Vec<Mission>>(store, MISSIONS_KEY)?,
        ) {
            campaign.missions = missions;
            campaign.mission_date = date;
        }
        if campaign.ensure_missions(today, seed) {
            store.set(MISSIONS_KEY, &to_json(&campaign.missions)?)?;
            store.set(MISSION_DATE_KEY, today)?;
        }

        tracing::info!(
            coins = campaign.coins,
            catalogued = campaign.catalogued.len(),
            day = campaign.day,
            "campaign loaded"
        );
        Ok(campaign)
    }

    /// Write every key.
    pub fn save(&self, store: &mut dyn KeyValueStore) -> Result<(), CampaignError> {
        store.set(COINS_KEY, &self.coins.to_string())?;
        store.set(CATALOG_KEY, &to_json(&self.catalogued)?)?;
        store.set(OWNED_VESSELS_KEY, &to_json(&self.owned_vessels)?)?;
        store.set(DAY_KEY, &self.day.to_string())?;
        if !self.missions.is_empty() {
            store.set(MISSIONS_KEY, &to_json(&self.missions)?)?;
            store.set(MISSION_DATE_KEY, &self.mission_date)?;
        }
        Ok(())
    }

    /// Roll missions for `today` unless they were already rolled for it.
    /// Returns whether a new roll happened.
    pub fn ensure_missions(&mut self, today: &str, seed: u64) -> bool {
        if self.mission_date == today && !self.missions.is_empty() {
            return false;
        }
        self.reroll_missions(today, seed);
        true
    }

    fn reroll_missions(&mut self, today: &str, seed: u64) {
        let mut rng = ChaCha8Rng::seed_from_u64(seed ^ u64::from(stable_hash(today) as u32));
        self.missions = roll_daily(&mut rng, today);
        self.mission_date = today.to_string();
        tracing::info!(date = today, count = self.missions.len(), "daily missions rolled");
    }

    /// Fold a simulation event into the campaign. Returns whether anything
    /// changed.
    pub fn apply_event(&mut self, event: &GameEvent) -> bool {
        match event {
            GameEvent::Kill { entity_id, hostile } => {
                let before = self.coins;
                self.coins = settle_kill(self.coins, *hostile);
                tracing::debug!(entity = %entity_id, hostile, coins = self.coins, "kill settled");
                before != self.coins
            }
            GameEvent::Won { reward } => {
                self.coins += reward;
                true
            }
            GameEvent::TreasureCollected { reward, .. } => {
                self.coins += reward;
                true
            }
            GameEvent::Discovered { entity_id } => {
                let added = if self.catalogued.iter().any(|id| id == entity_id) {
                    false
                } else {
                    self.catalogued.push(entity_id.clone());
                    true
                };
                self.progress_missions(entity_id) || added
            }
            GameEvent::Inspected { entity_id } => self.progress_missions(entity_id),
            GameEvent::DayAdvanced => {
                self.day += 1;
                tracing::info!(day = self.day, "new day");
                true
            }
            _ => false,
        }
    }

    /// Complete every open mission `entity_id` satisfies and pay its reward.
    fn progress_missions(&mut self, entity_id: &str) -> bool {
        let mut paid = false;
        for mission in self.missions.iter_mut().filter(|m| !m.completed) {
            if mission.matches(entity_id) {
                mission.completed = true;
                self.coins += mission.reward;
                paid = true;
                tracing::info!(mission = %mission.id, reward = mission.reward, "mission complete");
            }
        }
        paid
    }

    pub fn owns(&self, vessel_id: &str) -> bool {
        self.owned_vessels.iter().any(|id| id == vessel_id)
    }

    /// Buy a vessel from the shop.
    pub fn buy_vessel(&mut self, vessel_id: &str) -> Result<(), CampaignError> {
        let vessel = find_vessel(vessel_id)
            .ok_or_else(|| CampaignError::UnknownVessel(vessel_id.to_string()))?;
        if self.owns(vessel_id) {
            return Err(CampaignError::AlreadyOwned(vessel_id.to_string()));
        }
        if self.coins < vessel.price {
            return Err(CampaignError::InsufficientCoins {
                price: vessel.price,
                coins: self.coins,
            });
        }
        self.coins -= vessel.price;
        self.owned_vessels.push(vessel_id.to_string());
        tracing::info!(vessel = vessel_id, price = vessel.price, coins = self.coins, "vessel purchased");
        Ok(())
    }

    /// Build launch options for an owned vessel, carrying the catalogue.
    pub fn launch_options(
        &self,
        vessel_id: &str,
        ocean_id: &str,
        mode: GameMode,
    ) -> Result<LaunchOptions, CampaignError> {
        if find_vessel(vessel_id).is_none() {
            return Err(CampaignError::UnknownVessel(vessel_id.to_string()));
        }
        if !self.owns(vessel_id) {
            return Err(CampaignError::NotOwned(vessel_id.to_string()));
        }
        if find_ocean(ocean_id).is_none() {
            return Err(CampaignError::UnknownOcean(ocean_id.to_string()));
        }
        Ok(LaunchOptions {
            vessel_id: vessel_id.to_string(),
            ocean_id: ocean_id.to_string(),
            mode,
            catalogued: self.catalogued.clone(),
        })
    }

    /// Share of the catalog discovered, 0..=100.
    pub fn discovery_percent(&self) -> u32 {
        let known = self
            .catalogued
            .iter()
            .filter(|id| find_entity(id).is_some())
            .count();
        (known * 100 / SEA_ENTITIES.len()) as u32
    }
}

fn to_json<T: Serialize>(value: &T) -> Result<String, CampaignError> {
    serde_json::to_string(value).map_err(|e| CampaignError::Store(e.into()))
}

fn read_json<T: DeserializeOwned>(
    store: &dyn KeyValueStore,
    key: &str,
) -> Result<Option<T>, CampaignError> {
    let Some(raw) = store.get(key)? else {
        return Ok(None);
    };
    match serde_json::from_str(&raw) {
        Ok(value) => Ok(Some(value)),
        Err(e) => {
            tracing::warn!(key, error = %e, "ignoring malformed saved value");
            Ok(None)
        }
    }
}

fn read_parsed<T: std::str::FromStr>(
    store: &dyn KeyValueStore,
    key: &str,
) -> Result<Option<T>, CampaignError> {
    let Some(raw) = store.get(key)? else {
        return Ok(None);
    };
    match raw.trim().parse() {
        Ok(value) => Ok(Some(value)),
        Err(_) => {
            tracing::warn!(key, value = %raw, "ignoring malformed saved value");
            Ok(None)
        }
    }
}
