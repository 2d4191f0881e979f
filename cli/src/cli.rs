//! CLI argument parsing with clap derive

use std::process::ExitCode;

use anyhow::Result;
use clap::builder::FalseyValueParser;
use clap::{ArgAction, Parser, Subcommand};

use crate::app::{AppContext, AppFlags, AwsFlags, OutputFlags};
use crate::commands;

/// Run ssm-parent wrapped commands inside ECS Fargate tasks
#[derive(Parser)]
#[command(
    name = "fargate-exec",
    version,
    propagate_version = true,
    subcommand_required = true,
    arg_required_else_help = true
)]
pub struct Cli {
    /// AWS shared-config profile
    #[arg(long, global = true, env = "AWS_PROFILE")]
    pub profile: Option<String>,

    /// AWS region (overrides the profile's region)
    #[arg(long, global = true, env = "AWS_REGION")]
    pub region: Option<String>,

    /// Output in JSON format
    #[arg(long, global = true)]
    pub json: bool,

    /// Suppress non-error output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Disable colored output (any non-empty `NO_COLOR` other than `0`/`false`)
    #[arg(
        long,
        global = true,
        env = "NO_COLOR",
        action = ArgAction::SetTrue,
        value_parser = FalseyValueParser::new()
    )]
    pub no_color: bool,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Run a command through ssm-parent in the service's latest task
    Exec(commands::exec::ExecArgs),

    /// Print the task ARN that exec would target
    Task(commands::TargetArgs),

    /// List running task ARNs of a service
    Tasks(commands::TargetArgs),

    /// Manage configuration
    #[command(subcommand)]
    Config(commands::config::ConfigCommand),

    /// Show version
    Version,
}

impl Cli {
    /// Execute the CLI command.
    ///
    /// # Errors
    ///
    /// Returns an error if the command fails.
    pub async fn run(self) -> Result<ExitCode> {
        let Cli {
            profile,
            region,
            json,
            quiet,
            no_color,
            verbose: _,
            command,
        } = self;

        let app = AppContext::new(AppFlags {
            output: OutputFlags {
                no_color,
                quiet,
                json,
            },
            aws: AwsFlags { profile, region },
        })?;

        match command {
            Command::Exec(args) => commands::exec::run(&app, &args).await,
            Command::Task(args) => commands::task::run_latest(&app, &args).await,
            Command::Tasks(args) => commands::task::run_list(&app, &args).await,
            Command::Config(cmd) => commands::config::run(&app, cmd),
            Command::Version => commands::version::run(&app),
        }
    }
}
