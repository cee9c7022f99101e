use async_trait::async_trait;
use dnsflow_domain::{DomainError, EgressFirewall, Workload};

#[async_trait]
pub trait PolicySource: Send + Sync {
    /// Workloads scheduled on `node`, or all workloads when `node` is `None`.
    async fn list_workloads(&self, node: Option<&str>) -> Result<Vec<Workload>, DomainError>;

    async fn list_egress_firewalls(&self) -> Result<Vec<EgressFirewall>, DomainError>;
}
