use std::time::Duration;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum FactError {
    #[error("no record for entity: {0}")]
    UnknownEntity(String),

    #[error("lookup timed out after {0:?}")]
    Timeout(Duration),

    #[error("provider error: {0}")]
    Provider(String),
}
