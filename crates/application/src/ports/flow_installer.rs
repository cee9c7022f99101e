use async_trait::async_trait;
use dnsflow_domain::{DomainError, FlowRule};

/// Switch control boundary: the only state-changing external effect.
#[async_trait]
pub trait FlowInstaller: Send + Sync {
    /// Install `rule` synchronously. No retries are attempted by callers.
    async fn install(&self, rule: &FlowRule) -> Result<(), DomainError>;
}
