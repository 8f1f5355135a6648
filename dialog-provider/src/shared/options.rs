use crate::config::ProviderConfig;
use crate::error::DialogError;
use clap::{ArgGroup, Parser};
use std::path::PathBuf;
use tracing::debug;

pub const CONFIG_FILE_ENV: &str = "DIALOG_CONFIG";
pub const RUN_ID_ENV_VAR: &str = "DIALOG_RUN_ID";

#[derive(Parser, Debug, Default)]
#[clap(group = ArgGroup::new("config-options"))]
pub struct ConfigOptions {
    /// YAML file with default titles, labels and styles for each kind of dialog.
    #[arg(long, env = CONFIG_FILE_ENV, global(true))]
    pub config: Option<PathBuf>,

    /// When outputting logs, the run-id is the unique value that will define where they go.
    /// In the case that the run-id is re-used, the old values will be overwritten.
    #[arg(long, global(true), env = RUN_ID_ENV_VAR)]
    pub run_id: Option<String>,

    /// Never prompt through the terminal's native dialogs, decline them instead.
    #[arg(long, global(true), default_value = "false")]
    pub non_interactive: bool,
}

impl ConfigOptions {
    pub fn generate_run_id() -> String {
        let id = nanoid::nanoid!(4, &nanoid::alphabet::SAFE);
        let now = chrono::Local::now();
        let current_time = now.format("%Y%m%d");
        format!("{}-{}", current_time, id)
    }

    pub fn get_run_id(&self) -> String {
        self.run_id.clone().unwrap_or_else(Self::generate_run_id)
    }

    pub fn load_config(&self) -> Result<ProviderConfig, DialogError> {
        match &self.config {
            Some(path) => ProviderConfig::from_path(path),
            None => {
                debug!("No dialog config given, using defaults");
                Ok(ProviderConfig::default())
            }
        }
    }
}
