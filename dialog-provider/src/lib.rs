//! A dialog provider that can service notices and confirmations either with
//! the platform's blocking primitives or with a queued, non-blocking
//! presenter, switching per dialog kind at runtime without touching call
//! sites.

pub mod backend;
pub mod cli;
pub mod config;
pub mod error;
pub mod native;
pub mod provider;
pub mod queue;
pub mod request;
pub mod responder;
pub mod shared;
pub mod surface;

pub use backend::{DialogBackend, NativeBackend, Reply, Resolution};
pub use cli::{InquireDialogs, LineResponder, TerminalSurface};
pub use config::{DialogDefaults, ProviderConfig};
pub use error::DialogError;
pub use native::{AutoApprove, DenyAll, NativeDialogs};
pub use provider::{Callback, DialogProvider, Platform};
pub use queue::DialogQueue;
pub use request::{
    ButtonLabels, Choice, DialogId, DialogKind, DialogOptions, DialogOptionsBuilder,
    DialogRequest, DialogResult, DialogStyle, ProviderMode,
};
pub use responder::{Responder, ScriptedResponder, drive};
pub use shared::prelude::{ConfigOptions, LoggingOpts};
pub use surface::{DetachedSurface, DialogSurface};

pub mod prelude {
    pub use crate::shared::prelude::*;
    pub use crate::{
        AutoApprove, Callback, Choice, DenyAll, DialogError, DialogKind, DialogOptions,
        DialogOptionsBuilder, DialogProvider, DialogSurface, InquireDialogs, LineResponder,
        NativeDialogs, Platform, ProviderConfig, ProviderMode, Responder, ScriptedResponder,
        TerminalSurface, drive,
    };
}

/// Preferred way to output data to users. This macro will write the output to tracing for debugging
/// and to stdout using the global stdout writer. Because we use the stdout writer, the calls
/// will all be async.
#[macro_export]
macro_rules! report_stdout {
    ($($arg:tt)*) => {
        tracing::info!(target="stdout", $($arg)*);
        writeln!($crate::prelude::STDOUT_WRITER.write().await, $($arg)*).ok()
    };
}
