use crate::backend::{DialogBackend, NativeBackend, Reply, Resolution};
use crate::config::{Preset, ProviderConfig};
use crate::error::DialogError;
use crate::native::NativeDialogs;
use crate::queue::DialogQueue;
use crate::request::{
    Choice, DialogId, DialogKind, DialogOptions, DialogRequest, DialogResult, ProviderMode,
};
use crate::surface::DialogSurface;
use educe::Educe;
use std::collections::BTreeMap;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use tracing::{debug, instrument};

/// Runs once, after the user has interacted with a dialog.
pub type Callback = Box<dyn FnOnce() + Send + 'static>;

#[derive(Educe)]
#[educe(Debug)]
struct ProviderInner {
    config: ProviderConfig,
    queue: DialogQueue,
    native: NativeBackend,
    #[educe(Debug(ignore))]
    modes: Mutex<BTreeMap<DialogKind, ProviderMode>>,
}

impl ProviderInner {
    fn modes(&self) -> MutexGuard<'_, BTreeMap<DialogKind, ProviderMode>> {
        self.modes.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn mode(&self, kind: DialogKind) -> ProviderMode {
        self.modes().get(&kind).copied().unwrap_or_default()
    }

    fn backend(&self, kind: DialogKind) -> &dyn DialogBackend {
        match self.mode(kind) {
            ProviderMode::Native => &self.native,
            ProviderMode::Custom => &self.queue,
        }
    }
}

/// Presents notices and confirmations, and decides whether the platform's
/// blocking primitives are serviced natively or by the custom queue.
///
/// The provider is a cheap handle; clone it and hand it to whoever needs to
/// talk to the user.
///
/// ```rust
/// use dialog_provider::{AutoApprove, DialogKind, DialogProvider, ProviderMode, TerminalSurface};
/// use std::sync::Arc;
///
/// let provider = DialogProvider::new(Arc::new(TerminalSurface), Arc::new(AutoApprove));
/// provider.notify("Saved", None, Default::default()).unwrap();
/// provider.acknowledge().unwrap();
///
/// provider.set_native_interception(DialogKind::Confirmation, true).unwrap();
/// assert_eq!(ProviderMode::Custom, provider.mode(DialogKind::Confirmation));
/// ```
#[derive(Clone, Debug)]
pub struct DialogProvider {
    inner: Arc<ProviderInner>,
}

impl DialogProvider {
    pub fn new(surface: Arc<dyn DialogSurface>, native: Arc<dyn NativeDialogs>) -> Self {
        Self::with_config(ProviderConfig::default(), surface, native)
    }

    pub fn with_config(
        config: ProviderConfig,
        surface: Arc<dyn DialogSurface>,
        native: Arc<dyn NativeDialogs>,
    ) -> Self {
        Self {
            inner: Arc::new(ProviderInner {
                config,
                queue: DialogQueue::new(surface),
                native: NativeBackend::new(native),
                modes: Mutex::new(BTreeMap::new()),
            }),
        }
    }

    pub fn config(&self) -> &ProviderConfig {
        &self.inner.config
    }

    fn present(
        &self,
        preset: Preset,
        message: &str,
        options: DialogOptions,
        resolution: Resolution,
    ) -> Result<DialogId, DialogError> {
        let request = self.inner.config.build_request(preset, message, options);
        let id = self.inner.queue.enqueue(request, resolution)?;
        debug!("Issued {} ({:?})", id, preset);
        Ok(id)
    }

    /// Show a notice. `on_acknowledge` runs once the user dismisses it.
    pub fn notify(
        &self,
        message: &str,
        on_acknowledge: Option<Callback>,
        options: DialogOptions,
    ) -> Result<DialogId, DialogError> {
        self.present(Preset::Notice, message, options, acknowledged(on_acknowledge))
    }

    /// Ask for confirmation. Exactly one of `on_accept` or `on_decline` runs once
    /// the user answers. Declining without an `on_decline` does nothing.
    pub fn confirm(
        &self,
        message: &str,
        on_accept: Callback,
        on_decline: Option<Callback>,
        options: DialogOptions,
    ) -> Result<DialogId, DialogError> {
        let resolution: Resolution = Box::new(move |result: DialogResult| {
            if result.accepted() {
                on_accept();
            } else if let Some(on_decline) = on_decline {
                on_decline();
            }
        });
        self.present(Preset::Confirmation, message, options, resolution)
    }

    pub fn announce_success(
        &self,
        message: &str,
        on_acknowledge: Option<Callback>,
    ) -> Result<DialogId, DialogError> {
        self.present(
            Preset::Success,
            message,
            DialogOptions::default(),
            acknowledged(on_acknowledge),
        )
    }

    pub fn announce_failure(
        &self,
        message: &str,
        on_acknowledge: Option<Callback>,
    ) -> Result<DialogId, DialogError> {
        self.present(
            Preset::Failure,
            message,
            DialogOptions::default(),
            acknowledged(on_acknowledge),
        )
    }

    /// Route the platform primitive for `kind` through the custom queue (`true`)
    /// or back to the original primitive (`false`). Repeating a call changes nothing.
    #[instrument(skip(self))]
    pub fn set_native_interception(
        &self,
        kind: DialogKind,
        enabled: bool,
    ) -> Result<(), DialogError> {
        if !self.inner.native.supports_override(kind) {
            return Err(DialogError::InterceptionUnsupported { kind });
        }

        let mode = if enabled {
            ProviderMode::Custom
        } else {
            ProviderMode::Native
        };
        let previous = self.inner.modes().insert(kind, mode).unwrap_or_default();
        if previous != mode {
            debug!("{} primitive now serviced by {}", kind, mode);
        }
        Ok(())
    }

    pub fn mode(&self, kind: DialogKind) -> ProviderMode {
        self.inner.mode(kind)
    }

    /// The stand-in for the platform's blocking primitives.
    pub fn platform(&self) -> Platform {
        Platform {
            inner: self.inner.clone(),
        }
    }

    /// Resolve the dialog currently on the surface.
    pub fn resolve(&self, choice: Choice) -> Result<DialogId, DialogError> {
        self.inner.queue.resolve(choice)
    }

    pub fn accept(&self) -> Result<DialogId, DialogError> {
        self.resolve(Choice::Accept)
    }

    pub fn decline(&self) -> Result<DialogId, DialogError> {
        self.resolve(Choice::Decline)
    }

    pub fn acknowledge(&self) -> Result<DialogId, DialogError> {
        self.resolve(Choice::Accept)
    }

    pub fn active(&self) -> Option<(DialogId, DialogRequest)> {
        self.inner.queue.active()
    }

    /// Dialogs issued but not yet resolved.
    pub fn pending(&self) -> usize {
        self.inner.queue.len()
    }

    pub fn is_idle(&self) -> bool {
        self.inner.queue.is_empty()
    }
}

fn acknowledged(on_acknowledge: Option<Callback>) -> Resolution {
    Box::new(move |_| {
        if let Some(callback) = on_acknowledge {
            callback();
        }
    })
}

/// Callers use this where they would otherwise call the platform's blocking
/// `alert`/`confirm`. Which backend answers is decided per call by the
/// provider's interception state.
#[derive(Clone, Debug)]
pub struct Platform {
    inner: Arc<ProviderInner>,
}

impl Platform {
    fn call<T: Send + 'static>(
        &self,
        kind: DialogKind,
        message: &str,
        convert: fn(DialogResult) -> T,
    ) -> Result<Reply<T>, DialogError> {
        let request = self
            .inner
            .config
            .build_request(Preset::from(kind), message, DialogOptions::default());
        let (reply, resolution) = Reply::channel(convert);
        self.inner.backend(kind).present(request, resolution)?;
        Ok(reply)
    }

    pub fn alert(&self, message: &str) -> Result<Reply<()>, DialogError> {
        self.call(DialogKind::Notice, message, |_| ())
    }

    pub fn confirm(&self, message: &str) -> Result<Reply<bool>, DialogError> {
        self.call(DialogKind::Confirmation, message, |result| result.accepted())
    }
}
