use crate::request::DialogKind;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DialogError {
    #[error("No surface is available to present dialogs.")]
    PresentationUnavailable,
    #[error("The platform does not allow the {kind} primitive to be intercepted.")]
    InterceptionUnsupported { kind: DialogKind },
    #[error("There is no active dialog to resolve.")]
    NoActiveDialog,
    #[error("The dialog was dropped before it was resolved.")]
    Abandoned,
    #[error("Unable to read dialog config at {path}. {error:?}")]
    ConfigIo {
        path: PathBuf,
        error: std::io::Error,
    },
    #[error("Unable to parse dialog config at {path}. {error}")]
    ConfigParse {
        path: PathBuf,
        error: serde_yaml::Error,
    },
}
