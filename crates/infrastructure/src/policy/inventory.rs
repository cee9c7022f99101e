use async_trait::async_trait;
use dnsflow_application::ports::PolicySource;
use dnsflow_domain::{DomainError, EgressFirewall, Workload};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Cluster inventory document: workloads and their namespaces' egress
/// firewalls.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Inventory {
    #[serde(default)]
    pub workloads: Vec<Workload>,

    #[serde(default)]
    pub egress_firewalls: Vec<EgressFirewall>,
}

/// Policy source backed by a JSON inventory file, re-read on every call so
/// external updates show up on the next refresh.
pub struct FilePolicySource {
    path: PathBuf,
}

impl FilePolicySource {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub async fn load(&self) -> Result<Inventory, DomainError> {
        let contents = tokio::fs::read_to_string(&self.path).await.map_err(|e| {
            DomainError::PolicySource(format!(
                "Failed to read inventory {}: {}",
                self.path.display(),
                e
            ))
        })?;

        serde_json::from_str(&contents).map_err(|e| {
            DomainError::PolicySource(format!(
                "Failed to parse inventory {}: {}",
                self.path.display(),
                e
            ))
        })
    }
}

#[async_trait]
impl PolicySource for FilePolicySource {
    async fn list_workloads(&self, node: Option<&str>) -> Result<Vec<Workload>, DomainError> {
        let inventory = self.load().await?;
        let total = inventory.workloads.len();

        let workloads: Vec<Workload> = match node {
            Some(node) => inventory
                .workloads
                .into_iter()
                .filter(|w| w.runs_on(node))
                .collect(),
            None => inventory.workloads,
        };

        debug!(total, selected = workloads.len(), node = ?node, "Listed workloads");
        Ok(workloads)
    }

    async fn list_egress_firewalls(&self) -> Result<Vec<EgressFirewall>, DomainError> {
        Ok(self.load().await?.egress_firewalls)
    }
}
