use clap::Parser;
use dnsflow_domain::CliOverrides;
use dnsflow_jobs::{JobRunner, PolicyRefreshJob};
use tokio_util::sync::CancellationToken;
use tracing::{error, info};

mod bootstrap;
mod di;
mod server;

#[derive(Parser)]
#[command(name = "dnsflow")]
#[command(version)]
#[command(about = "dnsflow - programs Open vSwitch egress flows from observed DNS answers")]
struct Cli {
    /// Configuration file path
    #[arg(short = 'c', long, value_name = "FILE")]
    config: Option<String>,

    /// dnstap Unix socket path
    #[arg(short = 's', long, value_name = "PATH")]
    socket: Option<String>,

    /// Only consider workloads scheduled on this node
    #[arg(short = 'n', long)]
    node: Option<String>,

    /// Inventory file with workloads and egress firewalls
    #[arg(short = 'i', long, value_name = "FILE")]
    inventory: Option<String>,

    /// OVS bridge to program
    #[arg(short = 'b', long)]
    bridge: Option<String>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long)]
    log_level: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let cli_overrides = CliOverrides {
        socket_path: cli.socket,
        node: cli.node,
        inventory_path: cli.inventory,
        bridge: cli.bridge,
        log_level: cli.log_level,
    };

    let config = bootstrap::load_config(cli.config.as_deref(), cli_overrides)?;

    bootstrap::init_logging(&config);

    info!("Starting dnsflow v{}", env!("CARGO_PKG_VERSION"));
    info!(
        socket = %config.dnstap.socket_path,
        bridge = %config.flow.bridge,
        node = config.policy.node.as_deref().unwrap_or("*"),
        mode = ?config.policy.admission_mode,
        "Configuration loaded"
    );

    // Dependency Injection - Build all dependencies
    let adapters = di::Adapters::new(&config);
    let use_cases = di::UseCases::new(&adapters, &config);
    let shutdown = CancellationToken::new();

    JobRunner::new()
        .with_policy_refresh(
            PolicyRefreshJob::new(use_cases.refresh_policy.clone())
                .with_interval(config.policy.refresh_interval_secs),
        )
        .with_shutdown_token(shutdown.clone())
        .start()
        .await;

    server::spawn_signal_handler(shutdown.clone());

    let result = server::run_dnstap_pipeline(
        &config.dnstap,
        use_cases.admit_resolution.clone(),
        shutdown.clone(),
    )
    .await;

    shutdown.cancel();

    if let Err(e) = &result {
        error!(error = %e, "dnsflow stopped on fatal error");
    } else {
        info!("dnsflow shutdown complete");
    }
    result
}
