use bytes::Bytes;
use dnsflow_application::use_cases::AdmitResolutionUseCase;
use dnsflow_domain::DomainError;
use std::sync::Arc;
use tokio::sync::mpsc;
use tracing::{debug, error, info, trace};

use crate::dns::resolutions;
use crate::dnstap::TransactionDecoder;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ProcessorStats {
    pub frames: u64,
    pub client_responses: u64,
    pub resolutions: u64,
    pub admissions: u64,
    pub flows_installed: u64,
    pub flows_failed: u64,
}

/// Single consumer of the frame queue: decode, extract resolutions, admit.
///
/// Frames are handled strictly in arrival order. A frame that is not a valid
/// dnstap envelope, or a client response whose DNS payload cannot be parsed,
/// stops the processor; frames still queued at that point are not handled.
pub struct TransactionProcessor {
    admit: Arc<AdmitResolutionUseCase>,
}

impl TransactionProcessor {
    pub fn new(admit: Arc<AdmitResolutionUseCase>) -> Self {
        Self { admit }
    }

    pub async fn process_frame(
        &self,
        frame: &[u8],
        stats: &mut ProcessorStats,
    ) -> Result<(), DomainError> {
        let transaction = TransactionDecoder::decode(frame)?;
        stats.frames += 1;

        let Some(message) = transaction.response()? else {
            return Ok(());
        };
        stats.client_responses += 1;

        for event in resolutions(&message) {
            stats.resolutions += 1;
            trace!(name = %event.name, address = %event.address, "Resolution observed");

            let outcome = self.admit.execute(&event).await;
            stats.admissions += outcome.requested as u64;
            stats.flows_installed += outcome.installed as u64;
            stats.flows_failed += outcome.failed as u64;
        }

        Ok(())
    }

    /// Drain `frames` until every sender is gone or a fatal error occurs.
    pub async fn run(self, mut frames: mpsc::Receiver<Bytes>) -> Result<ProcessorStats, DomainError> {
        info!("Transaction processor started");
        let mut stats = ProcessorStats::default();

        while let Some(frame) = frames.recv().await {
            if let Err(e) = self.process_frame(&frame, &mut stats).await {
                error!(
                    error = %e,
                    frames = stats.frames,
                    pending = frames.len(),
                    "Fatal error processing dnstap frame"
                );
                return Err(e);
            }

            if stats.frames % 10_000 == 0 {
                debug!(
                    frames = stats.frames,
                    resolutions = stats.resolutions,
                    flows = stats.flows_installed,
                    "Transaction processor progress"
                );
            }
        }

        info!(
            frames = stats.frames,
            client_responses = stats.client_responses,
            resolutions = stats.resolutions,
            flows_installed = stats.flows_installed,
            flows_failed = stats.flows_failed,
            "Transaction processor stopped"
        );
        Ok(stats)
    }
}
