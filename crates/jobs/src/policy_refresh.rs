use dnsflow_application::use_cases::RefreshPolicyUseCase;
use std::sync::Arc;
use std::time::Duration;
use tokio_util::sync::CancellationToken;
use tracing::{error, info};

/// Background job that periodically rebuilds the egress policy snapshot.
///
/// The first tick fires immediately so a policy is in place shortly after
/// startup. A failed refresh keeps the previous snapshot and waits for the
/// next tick. Default interval: 10 s.
pub struct PolicyRefreshJob {
    refresh: Arc<RefreshPolicyUseCase>,
    interval_secs: u64,
    shutdown: CancellationToken,
}

impl PolicyRefreshJob {
    pub fn new(refresh: Arc<RefreshPolicyUseCase>) -> Self {
        Self {
            refresh,
            interval_secs: 10,
            shutdown: CancellationToken::new(),
        }
    }

    pub fn with_interval(mut self, interval_secs: u64) -> Self {
        self.interval_secs = interval_secs;
        self
    }

    pub fn with_cancellation(mut self, token: CancellationToken) -> Self {
        self.shutdown = token;
        self
    }

    pub async fn start(self: Arc<Self>) {
        info!(
            interval_secs = self.interval_secs,
            "Starting policy refresh job"
        );

        tokio::spawn(async move {
            let mut interval = tokio::time::interval(Duration::from_secs(self.interval_secs));
            interval.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Delay);

            loop {
                tokio::select! {
                    _ = self.shutdown.cancelled() => {
                        info!("PolicyRefreshJob: shutting down");
                        break;
                    }
                    _ = interval.tick() => {
                        match self.refresh.execute().await {
                            Ok(outcome) => info!(
                                workloads = outcome.workloads,
                                firewalls = outcome.firewalls,
                                entries = outcome.entries,
                                "PolicyRefreshJob: refresh completed"
                            ),
                            Err(e) => error!(
                                error = %e,
                                "PolicyRefreshJob: refresh failed, keeping previous policy"
                            ),
                        }
                    }
                }
            }
        });
    }
}
