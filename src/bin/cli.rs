//! linkmon CLI
//!
//! Console front end for the link availability engine.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use linkmon::{
    config::load_catalog,
    error::Result,
    models::Config,
    pipeline,
    utils::{log as console, truncate_graphemes},
};

/// linkmon - file-hosting link availability checker
#[derive(Parser, Debug)]
#[command(
    name = "linkmon",
    version,
    about = "Checks file-hosting links for availability"
)]
struct Cli {
    /// Path to the configuration file
    #[arg(short, long, default_value = "data/config.toml")]
    config: PathBuf,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Check every link in the catalog
    Check {
        /// Path to the links file (default: [paths].links_file)
        #[arg(long)]
        links: Option<PathBuf>,

        /// Maximum number of concurrent probes
        #[arg(long)]
        concurrency: Option<usize>,

        /// Override both provider timeouts, in seconds
        #[arg(long)]
        timeout: Option<u64>,
    },

    /// Validate configuration and catalog files
    Validate {
        /// Path to the links file (default: [paths].links_file)
        #[arg(long)]
        links: Option<PathBuf>,
    },

    /// List the catalog without touching the network
    Info {
        /// Path to the links file (default: [paths].links_file)
        #[arg(long)]
        links: Option<PathBuf>,
    },
}

/// Initialize logging based on verbosity flag.
fn init_logging(verbose: bool) {
    let level = if verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format_timestamp_secs()
        .init();
}

/// Main entry point for the CLI application.
#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let mut config = Config::load_or_default(&cli.config);
    console::init(&config.logging.level);

    match cli.command {
        Command::Check {
            links,
            concurrency,
            timeout,
        } => {
            config.validate()?;
            if let Some(concurrency) = concurrency {
                config.checker.max_concurrent = concurrency.max(1);
            }
            if let Some(timeout) = timeout {
                config.mediafire.timeout_secs = timeout.max(1);
                config.mega.timeout_secs = timeout.max(1);
            }

            let catalog = load_catalog(&config, links.as_deref())?;
            pipeline::run_check(&config, &catalog).await?;
        }

        Command::Validate { links } => {
            pipeline::run_validate(&config, links.as_deref())?;
        }

        Command::Info { links } => {
            let catalog = load_catalog(&config, links.as_deref())?;
            console::header("Link catalog");
            for entry in &catalog.links {
                console::info(&format!(
                    "{} | {} | {}",
                    entry.category,
                    truncate_graphemes(&entry.title, 48),
                    entry.url
                ));
            }
            console::separator();
            console::info(&format!("{} links total", catalog.len()));
        }
    }

    Ok(())
}
