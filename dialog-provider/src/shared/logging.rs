use clap::{ArgGroup, Parser};
use lazy_static::lazy_static;
use std::fs::File;
use std::io::Write;
use std::path::PathBuf;
use std::sync::Arc;
use tokio::sync::RwLock;

use tracing::level_filters::LevelFilter;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::fmt::format::{Format, PrettyFields};
use tracing_subscriber::{Registry, filter::filter_fn, prelude::*};

pub const LOG_DIR: &str = "/tmp/dialog-demo";

#[derive(Parser, Debug)]
#[clap(group = ArgGroup::new("logging"))]
pub struct LoggingOpts {
    /// A level of verbosity, and can be used multiple times
    #[arg(short, long, action = clap::ArgAction::Count, global(true))]
    pub verbose: u8,

    /// Only print warnings and errors.
    #[arg(short, long, global(true), conflicts_with = "verbose")]
    pub quiet: bool,
}

lazy_static! {
    pub static ref STDOUT_WRITER: Arc<RwLock<Box<dyn Write + Sync + Send>>> =
        Arc::new(RwLock::new(Box::new(std::io::stdout())));
}

/// Keeps the file writer flushing until dropped.
pub struct ConfiguredLogger {
    _guard: WorkerGuard,
    pub log_location: String,
}

impl LoggingOpts {
    pub fn to_level_filter(&self) -> LevelFilter {
        if self.quiet {
            return LevelFilter::WARN;
        }
        match self.verbose {
            0 => LevelFilter::INFO,
            1 => LevelFilter::DEBUG,
            _ => LevelFilter::TRACE,
        }
    }

    pub fn configure_logging(
        &self,
        run_id: &str,
        prefix: &str,
    ) -> anyhow::Result<ConfiguredLogger> {
        let file_name = format!("dialog-{}-{}.log", prefix, run_id);
        std::fs::create_dir_all(LOG_DIR)?;
        let file_path = PathBuf::from(LOG_DIR).join(file_name);

        let (non_blocking, guard) = tracing_appender::non_blocking(
            strip_ansi_escapes::Writer::new(File::create(&file_path)?),
        );

        let file_output = tracing_subscriber::fmt::layer()
            .event_format(Format::default().pretty())
            .with_ansi(false)
            .with_writer(non_blocking);

        let level_filter = self.to_level_filter();
        let console_output = tracing_subscriber::fmt::layer()
            .event_format(
                Format::default()
                    .with_target(false)
                    .with_level(false)
                    .without_time()
                    .compact(),
            )
            .with_writer(std::io::stdout)
            .fmt_fields(PrettyFields::new())
            .with_filter(filter_fn(move |metadata| match metadata.target() {
                "user" => level_filter >= *metadata.level(),
                "always" => true,
                _ => false,
            }));

        let subscriber = Registry::default().with(console_output).with(file_output);
        tracing::subscriber::set_global_default(subscriber)?;

        Ok(ConfiguredLogger {
            _guard: guard,
            log_location: file_path.display().to_string(),
        })
    }
}
