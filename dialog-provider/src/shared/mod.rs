mod logging;
mod options;

pub mod prelude {
    pub use super::logging::{ConfiguredLogger, LOG_DIR, LoggingOpts, STDOUT_WRITER};
    pub use super::options::{CONFIG_FILE_ENV, ConfigOptions, RUN_ID_ENV_VAR};
}
