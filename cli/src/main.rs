//! fargate-exec - run ssm-parent wrapped commands inside ECS Fargate tasks

use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use fargate_exec::cli::Cli;
use fargate_exec::output::json::format_error;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let json = cli.json;
    match cli.run().await {
        Ok(code) => code,
        Err(e) => {
            if json && let Ok(out) = format_error(&format!("{e:#}"), "ERROR") {
                println!("{out}");
            } else {
                eprintln!("Error: {e:#}");
            }
            ExitCode::FAILURE
        }
    }
}

/// Logs go to stderr so stdout stays usable for `--json` and the remote session.
fn init_tracing(verbose: u8) {
    let default = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default)),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
