use crate::ports::{FlowInstaller, PolicyStore};
use dnsflow_domain::{AdmissionMode, FlowConfig, FlowRule, ResolutionEvent};
use std::sync::Arc;
use tracing::{debug, error, info, trace};

/// Result of admitting one resolution event.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AdmissionOutcome {
    pub requested: usize,
    pub installed: usize,
    pub failed: usize,
}

impl AdmissionOutcome {
    pub fn matched(&self) -> bool {
        self.requested > 0
    }
}

/// Use case: match a resolution against the current egress policy and
/// install a flow for every admission it triggers.
///
/// Installer failures are logged and counted; they never abort the caller.
pub struct AdmitResolutionUseCase {
    store: Arc<dyn PolicyStore>,
    installer: Arc<dyn FlowInstaller>,
    flow: FlowConfig,
    mode: AdmissionMode,
}

impl AdmitResolutionUseCase {
    pub fn new(
        store: Arc<dyn PolicyStore>,
        installer: Arc<dyn FlowInstaller>,
        flow: FlowConfig,
    ) -> Self {
        Self {
            store,
            installer,
            flow,
            mode: AdmissionMode::default(),
        }
    }

    pub fn with_mode(mut self, mode: AdmissionMode) -> Self {
        self.mode = mode;
        self
    }

    pub async fn execute(&self, event: &ResolutionEvent) -> AdmissionOutcome {
        let mut outcome = AdmissionOutcome::default();

        if !event.is_admissible() {
            trace!(name = %event.name, address = %event.address, "Resolution filtered");
            return outcome;
        }

        let snapshot = self.store.current();
        let requests = snapshot.admissions(event, self.mode);
        if requests.is_empty() {
            return outcome;
        }

        info!(
            name = %event.name,
            address = %event.address,
            requests = requests.len(),
            "Resolution matches egress policy"
        );

        outcome.requested = requests.len();
        for request in &requests {
            let rule = FlowRule::for_admission(&self.flow, request);
            debug!(rule = %rule, "Installing flow");

            match self.installer.install(&rule).await {
                Ok(()) => {
                    outcome.installed += 1;
                    info!(
                        source = %request.source,
                        destination = %request.destination,
                        "Flow installed"
                    );
                }
                Err(e) => {
                    outcome.failed += 1;
                    error!(error = %e, rule = %rule, "Failed to install flow");
                }
            }
        }

        outcome
    }
}
