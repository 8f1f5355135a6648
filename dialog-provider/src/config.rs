//! Default presentation for each family of dialog.
//!
//! Callers only pass the options they care about; everything else comes from
//! [`ProviderConfig`]. The config can be loaded from YAML, for example:
//!
//! ```yaml
//! confirmation:
//!   title: Please confirm
//!   acceptLabel: Continue
//!   declineLabel: Go back
//!   style: warning
//! ```
//!
//! Sections that are omitted keep their built-in defaults. A section that is
//! present must list all of its keys (`title` may be `null`).

use crate::error::DialogError;
use crate::request::{ButtonLabels, DialogKind, DialogOptions, DialogRequest, DialogStyle};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::debug;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct DialogDefaults {
    pub title: Option<String>,
    pub accept_label: String,
    pub decline_label: String,
    pub style: DialogStyle,
}

impl DialogDefaults {
    fn new(title: &str, accept_label: &str, style: DialogStyle) -> Self {
        Self {
            title: Some(title.to_string()),
            accept_label: accept_label.to_string(),
            decline_label: "Cancel".to_string(),
            style,
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase", default)]
pub struct ProviderConfig {
    pub notice: DialogDefaults,
    pub confirmation: DialogDefaults,
    pub success: DialogDefaults,
    pub failure: DialogDefaults,
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self {
            notice: DialogDefaults::new("Notice", "OK", DialogStyle::Primary),
            confirmation: DialogDefaults::new("Confirm", "Accept", DialogStyle::Primary),
            success: DialogDefaults::new("Success", "OK", DialogStyle::Success),
            failure: DialogDefaults::new("Error", "OK", DialogStyle::Error),
        }
    }
}

/// The family a request is built from. Success and failure are notices with their own defaults.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Preset {
    Notice,
    Confirmation,
    Success,
    Failure,
}

impl Preset {
    fn kind(&self) -> DialogKind {
        match self {
            Preset::Confirmation => DialogKind::Confirmation,
            _ => DialogKind::Notice,
        }
    }
}

impl From<DialogKind> for Preset {
    fn from(kind: DialogKind) -> Self {
        match kind {
            DialogKind::Notice => Preset::Notice,
            DialogKind::Confirmation => Preset::Confirmation,
        }
    }
}

impl ProviderConfig {
    pub fn from_path(path: &Path) -> Result<Self, DialogError> {
        let body = std::fs::read_to_string(path).map_err(|error| DialogError::ConfigIo {
            path: path.to_path_buf(),
            error,
        })?;
        let config = serde_yaml::from_str(&body).map_err(|error| DialogError::ConfigParse {
            path: path.to_path_buf(),
            error,
        })?;
        debug!("Loaded dialog config from {}", path.display());
        Ok(config)
    }

    fn defaults(&self, preset: Preset) -> &DialogDefaults {
        match preset {
            Preset::Notice => &self.notice,
            Preset::Confirmation => &self.confirmation,
            Preset::Success => &self.success,
            Preset::Failure => &self.failure,
        }
    }

    pub(crate) fn build_request(
        &self,
        preset: Preset,
        message: &str,
        options: DialogOptions,
    ) -> DialogRequest {
        let defaults = self.defaults(preset);
        let style = match options.style {
            Some(tag) => DialogStyle::parse_or(&tag, defaults.style),
            None => defaults.style,
        };

        DialogRequest::new(
            preset.kind(),
            message.to_string(),
            non_blank(options.title, "title").or_else(|| defaults.title.clone()),
            ButtonLabels {
                confirm: non_blank(options.accept_label, "accept label")
                    .unwrap_or_else(|| defaults.accept_label.clone()),
                cancel: non_blank(options.decline_label, "decline label")
                    .unwrap_or_else(|| defaults.decline_label.clone()),
            },
            style,
        )
    }
}

fn non_blank(value: Option<String>, field: &str) -> Option<String> {
    match value {
        Some(text) if text.trim().is_empty() => {
            debug!("Ignoring blank {}", field);
            None
        }
        other => other,
    }
}
