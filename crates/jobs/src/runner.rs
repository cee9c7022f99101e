use crate::PolicyRefreshJob;
use std::sync::Arc;
use tokio_util::sync::CancellationToken;
use tracing::info;

/// Starts the configured background jobs, handing each the shared shutdown
/// token when one is set.
pub struct JobRunner {
    policy_refresh: Option<PolicyRefreshJob>,
    shutdown: Option<CancellationToken>,
}

impl JobRunner {
    pub fn new() -> Self {
        Self {
            policy_refresh: None,
            shutdown: None,
        }
    }

    pub fn with_policy_refresh(mut self, job: PolicyRefreshJob) -> Self {
        self.policy_refresh = Some(job);
        self
    }

    pub fn with_shutdown_token(mut self, token: CancellationToken) -> Self {
        self.shutdown = Some(token);
        self
    }

    pub async fn start(self) {
        info!("Starting background job runner");

        if let Some(mut job) = self.policy_refresh {
            if let Some(token) = &self.shutdown {
                job = job.with_cancellation(token.clone());
            }
            Arc::new(job).start().await;
        }

        info!("All background jobs started");
    }
}

impl Default for JobRunner {
    fn default() -> Self {
        Self::new()
    }
}
