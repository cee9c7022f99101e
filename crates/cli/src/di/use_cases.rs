use super::Adapters;
use dnsflow_application::use_cases::{AdmitResolutionUseCase, RefreshPolicyUseCase};
use dnsflow_domain::Config;
use std::sync::Arc;

pub struct UseCases {
    pub admit_resolution: Arc<AdmitResolutionUseCase>,
    pub refresh_policy: Arc<RefreshPolicyUseCase>,
}

impl UseCases {
    pub fn new(adapters: &Adapters, config: &Config) -> Self {
        Self {
            admit_resolution: Arc::new(
                AdmitResolutionUseCase::new(
                    adapters.policy_store.clone(),
                    adapters.flow_installer.clone(),
                    config.flow.clone(),
                )
                .with_mode(config.policy.admission_mode),
            ),
            refresh_policy: Arc::new(
                RefreshPolicyUseCase::new(
                    adapters.policy_source.clone(),
                    adapters.policy_store.clone(),
                )
                .with_node(config.policy.node.clone()),
            ),
        }
    }
}
