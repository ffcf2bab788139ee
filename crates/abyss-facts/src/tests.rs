#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use std::time::Duration;

    use crate::desk::FactDesk;
    use crate::error::FactError;
    use crate::provider::{CatalogProvider, FactFuture, FactProvider, FactRequest};
    use crate::service::*;

    fn request(entity_id: &str) -> FactRequest {
        let entity = abyss_core::catalog::find_entity(entity_id).unwrap();
        FactRequest {
            entity_id: entity.id.to_string(),
            name: entity.name.to_string(),
            depth: entity.depth,
        }
    }

    /// Replies with a fixed string after a delay.
    struct Scripted {
        reply: &'static str,
        delay: Duration,
    }

    impl FactProvider for Scripted {
        fn describe<'a>(&'a self, _request: &'a FactRequest) -> FactFuture<'a> {
            Box::pin(async move {
                tokio::time::sleep(self.delay).await;
                Ok(self.reply.to_string())
            })
        }
    }

    struct Failing;

    impl FactProvider for Failing {
        fn describe<'a>(&'a self, _request: &'a FactRequest) -> FactFuture<'a> {
            Box::pin(async { Err(FactError::Provider("quota exceeded".into())) })
        }
    }

    /// Slow for the squid, instant for everything else.
    struct SlowSquid;

    impl FactProvider for SlowSquid {
        fn describe<'a>(&'a self, request: &'a FactRequest) -> FactFuture<'a> {
            Box::pin(async move {
                if request.entity_id == "squid" {
                    tokio::time::sleep(Duration::from_millis(200)).await;
                }
                Ok(format!("fact about {}", request.entity_id))
            })
        }
    }

    fn scripted(reply: &'static str, delay_ms: u64, timeout_ms: u64) -> FactService {
        FactService::new(
            Arc::new(Scripted {
                reply,
                delay: Duration::from_millis(delay_ms),
            }),
            Duration::from_millis(timeout_ms),
        )
    }

    // ---- Service ----

    #[tokio::test]
    async fn offline_service_says_so() {
        let service = FactService::offline();
        assert!(!service.is_online());
        assert_eq!(service.lookup(&request("angler")).await, OFFLINE_TEXT);
    }

    #[tokio::test]
    async fn provider_text_is_trimmed() {
        let service = scripted("  Glows in the dark.\n", 0, 1_000);
        assert_eq!(service.lookup(&request("angler")).await, "Glows in the dark.");
    }

    #[tokio::test]
    async fn blank_text_is_unavailable() {
        let service = scripted("   ", 0, 1_000);
        assert_eq!(service.lookup(&request("angler")).await, UNAVAILABLE_TEXT);
    }

    #[tokio::test]
    async fn provider_error_is_interference() {
        let service = FactService::new(Arc::new(Failing), Duration::from_secs(1));
        assert_eq!(service.lookup(&request("angler")).await, INTERFERENCE_TEXT);
    }

    #[tokio::test]
    async fn timeout_is_interference() {
        let service = scripted("too late", 5_000, 20);
        assert_eq!(service.lookup(&request("angler")).await, INTERFERENCE_TEXT);
    }

    // ---- Catalog provider ----

    #[tokio::test]
    async fn catalog_provider_describes_entity() {
        let text = CatalogProvider.describe(&request("angler")).await.unwrap();
        assert!(text.contains("Anglerfish"), "{text}");
        assert!(text.contains("1000 m"), "{text}");
        assert!(text.contains("Bathypelagic"), "{text}");
    }

    #[tokio::test]
    async fn catalog_provider_covers_every_entity() {
        for entity in abyss_core::catalog::SEA_ENTITIES {
            let text = CatalogProvider.describe(&request(entity.id)).await.unwrap();
            assert!(text.contains(entity.name), "{}: {text}", entity.id);
        }
    }

    #[tokio::test]
    async fn catalog_provider_rejects_unknown_id() {
        let unknown = FactRequest {
            entity_id: "kraken".into(),
            name: "Kraken".into(),
            depth: 9000.0,
        };
        assert!(matches!(
            CatalogProvider.describe(&unknown).await,
            Err(FactError::UnknownEntity(_))
        ));
    }

    // ---- Desk ----

    #[tokio::test]
    async fn desk_delivers_result() {
        let service = FactService::new(Arc::new(CatalogProvider), DEFAULT_TIMEOUT);
        let mut desk = FactDesk::new(service, tokio::runtime::Handle::current());

        desk.request(request("orca"));
        let ready = desk.next().await.unwrap();
        assert_eq!(ready.entity_id, "orca");
        assert!(ready.text.contains("Killer Whale"));
    }

    #[tokio::test]
    async fn desk_discards_superseded_result() {
        let service = FactService::new(Arc::new(SlowSquid), Duration::from_secs(5));
        let mut desk = FactDesk::new(service, tokio::runtime::Handle::current());

        desk.request(request("squid"));
        desk.request(request("orca"));
        let ready = desk.next().await.unwrap();
        assert_eq!(ready.entity_id, "orca");

        // The squid answer lands later and is dropped.
        tokio::time::sleep(Duration::from_millis(400)).await;
        assert!(desk.drain().is_empty());
    }

    #[tokio::test]
    async fn cancelled_request_is_dropped() {
        let service = FactService::new(Arc::new(CatalogProvider), DEFAULT_TIMEOUT);
        let mut desk = FactDesk::new(service, tokio::runtime::Handle::current());

        desk.request(request("orca"));
        desk.cancel();
        tokio::time::sleep(Duration::from_millis(50)).await;
        assert!(desk.drain().is_empty());
    }
}
