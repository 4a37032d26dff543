mod cmd;
mod input;
mod output;

use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "legis",
    about = "Classify legislative action logs and derive bill and resolution status",
    version,
    propagate_version = true
)]
struct Cli {
    /// Config file (YAML)
    #[arg(long, global = true, env = "LEGIS_CONFIG")]
    config: Option<PathBuf>,

    /// Committee registry file; overrides the config value
    #[arg(long, global = true)]
    registry: Option<PathBuf>,

    /// Output as JSON
    #[arg(long, global = true, short = 'j')]
    json: bool,

    /// Log classification decisions to stderr
    #[arg(long, global = true, short = 'v')]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Classify a single action line
    Classify {
        /// Action text, as it appears in the action log
        text: String,

        /// Item type (hr, s, hres, sres, hjres, sjres, hconres, sconres, hamdt, samdt)
        #[arg(long = "type", default_value = "hr")]
        item_type: String,

        /// Nesting level (0 top-level, 1 committee, 2 subcommittee)
        #[arg(long, default_value_t = 0)]
        level: u8,

        /// Status the item is in before this action
        #[arg(long, default_value = "INTRODUCED")]
        status: String,

        /// Official title (only matters for constitutional amendments)
        #[arg(long)]
        title: Option<String>,

        /// Action date (default: today)
        #[arg(long)]
        date: Option<NaiveDate>,
    },

    /// Process item files (YAML or JSON) through the full pipeline
    Process {
        #[arg(required = true)]
        files: Vec<PathBuf>,
    },

    /// List every life-cycle status code
    Statuses,
}

fn main() {
    let cli = Cli::parse();

    let default_level = if cli.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::WARN
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env().add_directive(default_level.into()),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let settings = cmd::Settings {
        config: cli.config,
        registry: cli.registry,
    };

    let result = match cli.command {
        Commands::Classify {
            text,
            item_type,
            level,
            status,
            title,
            date,
        } => cmd::classify::run(
            &settings,
            cmd::classify::Args {
                text,
                item_type,
                level,
                status,
                title,
                date,
            },
            cli.json,
        ),
        Commands::Process { files } => cmd::process::run(&settings, &files, cli.json),
        Commands::Statuses => cmd::statuses::run(cli.json),
    };

    if let Err(e) = result {
        eprintln!("error: {e:#}");
        std::process::exit(1);
    }
}
