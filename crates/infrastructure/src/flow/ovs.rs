use async_trait::async_trait;
use dnsflow_application::ports::FlowInstaller;
use dnsflow_domain::{DomainError, FlowConfig, FlowRule};
use tokio::process::Command;
use tracing::debug;

/// Installs flows with `ovs-ofctl add-flow <bridge> <rule>`.
pub struct OvsFlowInstaller {
    ofctl_path: String,
    bridge: String,
}

impl OvsFlowInstaller {
    pub fn new(ofctl_path: impl Into<String>, bridge: impl Into<String>) -> Self {
        Self {
            ofctl_path: ofctl_path.into(),
            bridge: bridge.into(),
        }
    }

    pub fn from_config(config: &FlowConfig) -> Self {
        Self::new(config.ofctl_path.clone(), config.bridge.clone())
    }

    pub fn command_args(&self, rule: &FlowRule) -> [String; 3] {
        ["add-flow".to_string(), self.bridge.clone(), rule.to_string()]
    }
}

#[async_trait]
impl FlowInstaller for OvsFlowInstaller {
    async fn install(&self, rule: &FlowRule) -> Result<(), DomainError> {
        let output = Command::new(&self.ofctl_path)
            .args(self.command_args(rule))
            .output()
            .await
            .map_err(|e| {
                DomainError::FlowInstallFailed(format!(
                    "Failed to run {}: {}",
                    self.ofctl_path, e
                ))
            })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(DomainError::FlowInstallFailed(format!(
                "{} exited with {}: {}",
                self.ofctl_path,
                output.status,
                stderr.trim()
            )));
        }

        let stdout = String::from_utf8_lossy(&output.stdout);
        if !stdout.trim().is_empty() {
            debug!(output = %stdout.trim(), "ovs-ofctl output");
        }

        Ok(())
    }
}
