use std::sync::Arc;
use std::time::Duration;

use crate::error::FactError;
use crate::provider::{FactProvider, FactRequest};

pub const OFFLINE_TEXT: &str = "AI Module Offline. Connect API Key for deep sea data.";
pub const INTERFERENCE_TEXT: &str = "Communication interference. Try again.";
pub const UNAVAILABLE_TEXT: &str = "Data unavailable.";

pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Looks up facts and never fails: every problem becomes a fallback line.
#[derive(Clone)]
pub struct FactService {
    provider: Option<Arc<dyn FactProvider>>,
    timeout: Duration,
}

impl FactService {
    pub fn new(provider: Arc<dyn FactProvider>, timeout: Duration) -> Self {
        Self {
            provider: Some(provider),
            timeout,
        }
    }

    /// A service with no backend configured.
    pub fn offline() -> Self {
        Self {
            provider: None,
            timeout: DEFAULT_TIMEOUT,
        }
    }

    pub fn is_online(&self) -> bool {
        self.provider.is_some()
    }

    pub async fn lookup(&self, request: &FactRequest) -> String {
        let Some(provider) = self.provider.as_ref() else {
            return OFFLINE_TEXT.to_string();
        };

        let result = match tokio::time::timeout(self.timeout, provider.describe(request)).await {
            Ok(result) => result,
            Err(_) => Err(FactError::Timeout(self.timeout)),
        };

        match result {
            Ok(text) => {
                let text = text.trim();
                if text.is_empty() {
                    UNAVAILABLE_TEXT.to_string()
                } else {
                    text.to_string()
                }
            }
            Err(e) => {
                tracing::warn!(entity = %request.entity_id, error = %e, "fact lookup failed");
                INTERFERENCE_TEXT.to_string()
            }
        }
    }
}
