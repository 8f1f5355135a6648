use derive_builder::Builder;
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};
use std::str::FromStr;
use strum::EnumString;
use tracing::debug;

/// The two shapes of dialog the provider knows how to present.
#[derive(
    Serialize,
    Deserialize,
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    strum::Display,
    EnumString,
)]
#[strum(ascii_case_insensitive)]
pub enum DialogKind {
    /// One button, acknowledgment only.
    Notice,
    /// Two outcomes, accept or decline.
    Confirmation,
}

/// Which backend services requests of a given kind made through the platform primitives.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, strum::Display)]
pub enum ProviderMode {
    #[default]
    Native,
    Custom,
}

#[derive(
    Serialize,
    Deserialize,
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    EnumString,
)]
#[strum(ascii_case_insensitive, serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum DialogStyle {
    Info,
    Primary,
    Success,
    Warning,
    Danger,
    Error,
}

impl DialogStyle {
    /// Parse a free-form style tag. Unknown or blank tags fall back to `fallback`.
    pub fn parse_or(tag: &str, fallback: DialogStyle) -> DialogStyle {
        match DialogStyle::from_str(tag.trim()) {
            Ok(style) => style,
            Err(_) => {
                debug!("Unknown dialog style {:?}, using {}", tag, fallback);
                fallback
            }
        }
    }
}

/// The user's interaction with the active dialog.
///
/// A notice treats either choice as an acknowledgment. Closing a confirmation
/// without picking an option is a `Decline`.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, strum::Display)]
pub enum Choice {
    Accept,
    Decline,
}

impl Choice {
    pub fn is_accept(&self) -> bool {
        matches!(self, Choice::Accept)
    }
}

impl From<bool> for Choice {
    fn from(accepted: bool) -> Self {
        if accepted {
            Choice::Accept
        } else {
            Choice::Decline
        }
    }
}

/// What a resolved dialog produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DialogResult {
    Acknowledged,
    Confirmed(bool),
}

impl DialogResult {
    pub(crate) fn for_kind(kind: DialogKind, choice: Choice) -> Self {
        match kind {
            DialogKind::Notice => DialogResult::Acknowledged,
            DialogKind::Confirmation => DialogResult::Confirmed(choice.is_accept()),
        }
    }

    /// `true` for an accepted confirmation or any acknowledged notice.
    pub fn accepted(&self) -> bool {
        match self {
            DialogResult::Acknowledged => true,
            DialogResult::Confirmed(accepted) => *accepted,
        }
    }
}

/// Identifies one issued dialog for the lifetime of a provider.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct DialogId(pub(crate) u64);

impl Display for DialogId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "dialog-{}", self.0)
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct ButtonLabels {
    pub confirm: String,
    pub cancel: String,
}

/// Caller supplied presentation hints. Every field is optional, and anything
/// malformed falls back to the configured defaults when the request is built.
#[derive(Debug, Clone, Default, PartialEq, Eq, Builder)]
#[builder(default, setter(into, strip_option))]
pub struct DialogOptions {
    pub title: Option<String>,
    pub accept_label: Option<String>,
    pub decline_label: Option<String>,
    pub style: Option<String>,
}

impl DialogOptions {
    pub fn titled(title: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            ..Default::default()
        }
    }
}

/// A fully resolved dialog, ready for a surface to draw. Immutable once issued.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DialogRequest {
    kind: DialogKind,
    message: String,
    title: Option<String>,
    labels: ButtonLabels,
    style: DialogStyle,
}

impl DialogRequest {
    pub(crate) fn new(
        kind: DialogKind,
        message: String,
        title: Option<String>,
        labels: ButtonLabels,
        style: DialogStyle,
    ) -> Self {
        Self {
            kind,
            message,
            title,
            labels,
            style,
        }
    }

    pub fn kind(&self) -> DialogKind {
        self.kind
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    pub fn labels(&self) -> &ButtonLabels {
        &self.labels
    }

    pub fn style(&self) -> DialogStyle {
        self.style
    }
}
