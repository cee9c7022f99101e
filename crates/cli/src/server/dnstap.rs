use dnsflow_application::use_cases::AdmitResolutionUseCase;
use dnsflow_domain::config::DnstapConfig;
use dnsflow_infrastructure::dnstap::DnstapListener;
use dnsflow_infrastructure::pipeline::TransactionProcessor;
use std::sync::Arc;
use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;
use tracing::info;

/// Bind the dnstap socket and drain its frames through the processor.
///
/// Returns once the listener has shut down and the queue is empty, or as soon
/// as the processor hits a fatal decode error.
pub async fn run_dnstap_pipeline(
    config: &DnstapConfig,
    admit: Arc<AdmitResolutionUseCase>,
    shutdown: CancellationToken,
) -> anyhow::Result<()> {
    let listener = DnstapListener::bind(&config.socket_path, config.max_frame_length)?;
    let (tx, rx) = mpsc::channel(config.queue_capacity);

    info!(
        socket = %listener.path().display(),
        queue_capacity = config.queue_capacity,
        "Accepting dnstap connections"
    );
    tokio::spawn(listener.run(tx, shutdown));

    TransactionProcessor::new(admit).run(rx).await?;
    Ok(())
}

pub fn spawn_signal_handler(shutdown: CancellationToken) {
    tokio::spawn(async move {
        wait_for_signal().await;
        info!("Shutdown signal received");
        shutdown.cancel();
    });
}

#[cfg(unix)]
async fn wait_for_signal() {
    use tokio::signal::unix::{signal, SignalKind};

    match signal(SignalKind::terminate()) {
        Ok(mut terminate) => {
            tokio::select! {
                _ = tokio::signal::ctrl_c() => {}
                _ = terminate.recv() => {}
            }
        }
        Err(_) => {
            let _ = tokio::signal::ctrl_c().await;
        }
    }
}

#[cfg(not(unix))]
async fn wait_for_signal() {
    let _ = tokio::signal::ctrl_c().await;
}
