//! net-probe
//!
//! One-shot HTTPS reachability check.
//!
//! ```text
//!   resolve config ──▶ load system roots ──▶ HEAD ──ok──▶ classify ──▶ exit
//!   (file/env/flags)       (fatal)             │                ▲
//!                                              └─err──▶ GET ────┘
//! ```
//!
//! Exit codes: 0 pass, 2 configuration, 3 trust store / client setup,
//! 4 request failure, 5 unacceptable status.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use net_probe::config;
use net_probe::observability::init_logging;
use net_probe::Probe;

#[derive(Parser)]
#[command(name = "net-probe")]
#[command(about = "Check HTTPS reachability of a URL using the system trust store", long_about = None)]
struct Cli {
    /// TOML configuration file.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Target URL (overrides NET_TEST_URL and the config file).
    #[arg(short, long)]
    url: Option<String>,

    /// Per-request timeout in seconds.
    #[arg(short, long)]
    timeout_secs: Option<u64>,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    let overrides = config::Overrides {
        url: cli.url,
        request_secs: cli.timeout_secs,
    };
    let config = match config::resolve(cli.config.as_deref(), |key| std::env::var(key).ok(), &overrides) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("net-probe: {e}");
            return ExitCode::from(2);
        }
    };

    init_logging(&config.observability.log_level);

    tracing::info!(
        target_url = %config.target.url,
        request_timeout_secs = config.timeouts.request_secs,
        "Configuration loaded"
    );

    let outcome = match Probe::new(&config) {
        Ok(probe) => probe.run().await,
        Err(e) => Err(e),
    };

    match outcome {
        Ok(report) => {
            println!("ok {} {} {}", report.method, report.status, report.target);
            ExitCode::SUCCESS
        }
        Err(e) => {
            tracing::error!(kind = ?e.kind(), error = %e, "Probe failed");
            eprintln!("net-probe: {e}");
            ExitCode::from(e.kind().exit_code())
        }
    }
}
