use thiserror::Error;

/// Failures reading or writing the key/value store.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("malformed store file: {0}")]
    Json(#[from] serde_json::Error),
}

/// Failures of campaign operations.
#[derive(Debug, Error)]
pub enum CampaignError {
    #[error(transparent)]
    Store(#[from] StoreError),

    #[error("unknown vessel: {0}")]
    UnknownVessel(String),

    #[error("unknown ocean: {0}")]
    UnknownOcean(String),

    #[error("vessel '{0}' is already owned")]
    AlreadyOwned(String),

    #[error("vessel '{0}' is not owned")]
    NotOwned(String),

    #[error("insufficient coins: need {price}, have {coins}")]
    InsufficientCoins { price: u64, coins: u64 },
}
