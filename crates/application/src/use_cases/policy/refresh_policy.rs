use crate::ports::{PolicySource, PolicyStore};
use dnsflow_domain::{DomainError, PolicyBuilder};
use std::sync::Arc;
use tracing::{debug, info};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RefreshOutcome {
    pub workloads: usize,
    pub firewalls: usize,
    pub entries: usize,
    pub sources: usize,
}

/// Use case: rebuild the egress policy snapshot from the inventory and publish it.
/// Should be run periodically (e.g., every 10 seconds)
///
/// On error nothing is published and the current snapshot stays in place.
pub struct RefreshPolicyUseCase {
    source: Arc<dyn PolicySource>,
    store: Arc<dyn PolicyStore>,
    node: Option<String>,
}

impl RefreshPolicyUseCase {
    pub fn new(source: Arc<dyn PolicySource>, store: Arc<dyn PolicyStore>) -> Self {
        Self {
            source,
            store,
            node: None,
        }
    }

    pub fn with_node(mut self, node: Option<String>) -> Self {
        self.node = node;
        self
    }

    pub async fn execute(&self) -> Result<RefreshOutcome, DomainError> {
        let node = self.node.as_deref();

        let workloads = self.source.list_workloads(node).await?;
        let firewalls = self.source.list_egress_firewalls().await?;
        debug!(
            node = node.unwrap_or("*"),
            workloads = workloads.len(),
            firewalls = firewalls.len(),
            "Policy inventory listed"
        );

        let snapshot = PolicyBuilder::for_node(node).build(&workloads, &firewalls);
        let outcome = RefreshOutcome {
            workloads: workloads.len(),
            firewalls: firewalls.len(),
            entries: snapshot.len(),
            sources: snapshot.total_sources(),
        };

        self.store.replace(snapshot);

        info!(
            entries = outcome.entries,
            sources = outcome.sources,
            "Egress policy snapshot published"
        );
        Ok(outcome)
    }
}
