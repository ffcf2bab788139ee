//! Between-dive progression for ABYSS.
//!
//! Owns everything that outlives a single dive: coins, the discovery
//! catalogue, owned vessels, the day counter and the daily missions. The
//! simulation reports what happened through `GameEvent`s and this crate
//! turns them into rewards and saved state.

pub mod economy;
pub mod error;
pub mod store;

pub use abyss_core as core;
pub use economy::Campaign;
pub use error::{CampaignError, StoreError};
pub use store::{JsonFileStore, KeyValueStore, MemoryStore};
