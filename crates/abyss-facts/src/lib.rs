//! Descriptive text for inspected entities.
//!
//! A `FactProvider` produces one sentence about an entity. `FactService`
//! wraps an optional provider with a timeout and maps every failure to a
//! player-facing fallback line. `FactDesk` runs lookups in the background
//! and drops any answer that arrives after a newer request.

pub mod desk;
pub mod error;
pub mod provider;
pub mod service;

pub use desk::{FactDesk, FactReady};
pub use error::FactError;
pub use provider::{CatalogProvider, FactFuture, FactProvider, FactRequest};
pub use service::FactService;

#[cfg(test)]
mod tests;
