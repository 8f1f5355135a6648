//! The platform's blocking dialog primitives.
//!
//! A [`NativeDialogs`] implementation is what callers would get without any
//! interception: calls block until the user answers. The CLI provides an
//! interactive implementation backed by `inquire`; the ones here never ask.

use crate::request::DialogKind;
use mockall::automock;

/// Blocking notice and confirmation primitives.
#[automock]
pub trait NativeDialogs: Send + Sync {
    /// Show `message` and block until it is dismissed.
    fn alert(&self, message: &str);

    /// Ask `message` and block until the user answers.
    fn confirm(&self, message: &str) -> bool;

    /// Whether calls to the primitive for `kind` may be redirected elsewhere.
    fn overridable(&self, _kind: DialogKind) -> bool {
        true
    }
}

/// Approves every confirmation without asking.
///
/// Useful for automated environments where every prompt has been
/// pre-approved by whoever launched the run.
#[derive(Debug, Clone, Copy, Default)]
pub struct AutoApprove;

impl NativeDialogs for AutoApprove {
    fn alert(&self, _message: &str) {
        // Nothing to show
    }

    fn confirm(&self, _message: &str) -> bool {
        true
    }
}

/// Denies every confirmation without asking.
#[derive(Debug, Clone, Copy, Default)]
pub struct DenyAll;

impl NativeDialogs for DenyAll {
    fn alert(&self, _message: &str) {
        // Nothing to show
    }

    fn confirm(&self, _message: &str) -> bool {
        false
    }
}
