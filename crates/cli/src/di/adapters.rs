use dnsflow_domain::Config;
use dnsflow_infrastructure::flow::OvsFlowInstaller;
use dnsflow_infrastructure::policy::{ArcSwapPolicyStore, FilePolicySource};
use std::sync::Arc;

pub struct Adapters {
    pub policy_store: Arc<ArcSwapPolicyStore>,
    pub policy_source: Arc<FilePolicySource>,
    pub flow_installer: Arc<OvsFlowInstaller>,
}

impl Adapters {
    pub fn new(config: &Config) -> Self {
        Self {
            policy_store: Arc::new(ArcSwapPolicyStore::new()),
            policy_source: Arc::new(FilePolicySource::new(&config.policy.inventory_path)),
            flow_installer: Arc::new(OvsFlowInstaller::from_config(&config.flow)),
        }
    }
}
