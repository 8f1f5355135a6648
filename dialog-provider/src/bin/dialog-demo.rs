//! dialog-demo binary - thin wrapper around the dialog-provider library.
//!
//! Each subcommand issues a fixed set of dialogs and then answers them from
//! stdin, one line per dialog.

mod cli;

use clap::{Parser, Subcommand};
use dialog_provider::{ConfigOptions, LoggingOpts};
use human_panic::setup_panic;
use tracing::{Level, enabled, error, info};

/// dialog-demo
///
/// Walks through notices, confirmations and interception of the terminal's
/// native prompts. Custom dialogs are answered from stdin: `y`, `yes`, `ok`
/// or an empty line accept, anything else declines.
#[derive(Parser)]
#[clap(author, version, about)]
pub(crate) struct Cli {
    #[clap(flatten)]
    pub logging: LoggingOpts,

    #[clap(flatten)]
    pub config: ConfigOptions,

    #[clap(subcommand)]
    pub command: Command,
}

#[derive(Parser, Debug)]
pub(crate) struct CrawlStopArgs {
    /// Domain whose crawl is being stopped.
    #[arg(default_value = "example.com")]
    pub domain: String,
}

#[derive(Debug, Subcommand)]
pub(crate) enum Command {
    /// Show every kind of dialog: notices, confirmations, success and error.
    #[clap(alias("t"))]
    Tour,
    /// Route the native alert and confirm through the custom queue.
    #[clap(alias("i"))]
    Intercept,
    /// Stop intercepting, so alerts reach the native prompt again.
    #[clap(alias("r"))]
    Restore,
    /// Ask before stopping a crawl, then report the outcome.
    CrawlStop(CrawlStopArgs),
}

#[tokio::main]
async fn main() {
    setup_panic!();
    dotenvy::dotenv().ok();

    let opts = Cli::parse();

    let configured_logger = match opts
        .logging
        .configure_logging(&opts.config.get_run_id(), "demo")
    {
        Ok(logger) => logger,
        Err(e) => {
            eprintln!("Unable to configure logging. {e}");
            std::process::exit(2);
        }
    };

    let error_code = run_command(opts).await;

    if error_code != 0 || enabled!(Level::DEBUG) {
        info!(target: "user", "More detailed logs at {}", configured_logger.log_location);
    }

    drop(configured_logger);
    std::process::exit(error_code);
}

async fn run_command(opts: Cli) -> i32 {
    let config = match opts.config.load_config() {
        Ok(c) => c,
        Err(e) => {
            error!(target: "user", "Failed to load configuration: {}", e);
            return 2;
        }
    };

    cli::commands::handle_command(config, &opts.config, &opts.command)
        .await
        .unwrap_or_else(|e| {
            error!(target: "user", "Critical Error. {}", e);
            1
        })
}
