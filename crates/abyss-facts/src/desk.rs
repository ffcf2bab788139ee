//! Background fact lookups with stale-result discarding.
//!
//! Each request bumps a generation counter. Results carry the generation
//! they were started under and only the latest one is handed back, so a
//! slow answer for an old selection can never overwrite a newer card.

use std::sync::Arc;

use tokio::runtime::Handle;
use tokio::sync::mpsc;

use crate::provider::FactRequest;
use crate::service::FactService;

/// A finished lookup for the current request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FactReady {
    pub entity_id: String,
    pub text: String,
}

struct Delivery {
    generation: u64,
    ready: FactReady,
}

pub struct FactDesk {
    service: Arc<FactService>,
    runtime: Handle,
    generation: u64,
    tx: mpsc::UnboundedSender<Delivery>,
    rx: mpsc::UnboundedReceiver<Delivery>,
}

impl FactDesk {
    pub fn new(service: FactService, runtime: Handle) -> Self {
        let (tx, rx) = mpsc::unbounded_channel();
        Self {
            service: Arc::new(service),
            runtime,
            generation: 0,
            tx,
            rx,
        }
    }

    /// Start a lookup, superseding any in flight.
    pub fn request(&mut self, request: FactRequest) {
        self.generation += 1;
        let generation = self.generation;
        let service = Arc::clone(&self.service);
        let tx = self.tx.clone();
        tracing::debug!(entity = %request.entity_id, generation, "fact requested");

        self.runtime.spawn(async move {
            let text = service.lookup(&request).await;
            // The desk may be gone by now.
            let _ = tx.send(Delivery {
                generation,
                ready: FactReady {
                    entity_id: request.entity_id,
                    text,
                },
            });
        });
    }

    /// Forget the current request; its result will be dropped.
    pub fn cancel(&mut self) {
        self.generation += 1;
    }

    /// Results that arrived since the last call, stale ones removed.
    pub fn drain(&mut self) -> Vec<FactReady> {
        let mut ready = Vec::new();
        while let Ok(delivery) = self.rx.try_recv() {
            if let Some(fresh) = self.accept(delivery) {
                ready.push(fresh);
            }
        }
        ready
    }

    /// Wait for the next current result.
    pub async fn next(&mut self) -> Option<FactReady> {
        while let Some(delivery) = self.rx.recv().await {
            if let Some(fresh) = self.accept(delivery) {
                return Some(fresh);
            }
        }
        None
    }

    fn accept(&self, delivery: Delivery) -> Option<FactReady> {
        if delivery.generation == self.generation {
            Some(delivery.ready)
        } else {
            tracing::debug!(
                entity = %delivery.ready.entity_id,
                generation = delivery.generation,
                current = self.generation,
                "discarding stale fact"
            );
            None
        }
    }
}
