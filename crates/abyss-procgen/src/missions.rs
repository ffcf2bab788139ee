//! Daily mission rolls.

use rand::seq::SliceRandom;
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

use abyss_core::catalog::{MissionTemplate, MISSION_TEMPLATES};
use abyss_core::constants::DAILY_MISSION_COUNT;

/// A mission offered for the day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Mission {
    pub id: String,
    pub description: String,
    /// Catalog identifier, or an identifier prefix such as `treasure`.
    pub target_id: String,
    pub reward: u64,
    pub completed: bool,
}

impl Mission {
    fn from_template(template: &MissionTemplate, stamp: &str, index: usize) -> Self {
        Self {
            id: format!("m_{stamp}_{index}"),
            description: template.description.to_string(),
            target_id: template.target_id.to_string(),
            reward: template.reward,
            completed: false,
        }
    }

    /// Whether inspecting `entity_id` fulfils this mission.
    ///
    /// A target also matches any identifier containing it, so `treasure`
    /// is satisfied by `treasure-1` through `treasure-4`.
    pub fn matches(&self, entity_id: &str) -> bool {
        self.target_id == entity_id || entity_id.contains(self.target_id.as_str())
    }
}

/// Pick today's missions: distinct templates, shuffled by `rng`.
/// `stamp` makes the mission identifiers unique per roll.
pub fn roll_daily(rng: &mut ChaCha8Rng, stamp: &str) -> Vec<Mission> {
    MISSION_TEMPLATES
        .choose_multiple(rng, DAILY_MISSION_COUNT)
        .enumerate()
        .map(|(i, template)| Mission::from_template(template, stamp, i))
        .collect()
}
