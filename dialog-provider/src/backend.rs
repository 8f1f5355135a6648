use crate::error::DialogError;
use crate::native::NativeDialogs;
use crate::request::{DialogKind, DialogRequest, DialogResult};
use educe::Educe;
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;
use std::task::{Context, Poll};
use tokio::sync::oneshot;
use tokio::sync::oneshot::error::TryRecvError;

/// Invoked exactly once with the outcome of a presented dialog.
pub type Resolution = Box<dyn FnOnce(DialogResult) + Send + 'static>;

/// A way of presenting dialogs. Swapping backends changes how a request is
/// shown, never what the caller gets back.
pub trait DialogBackend: Send + Sync {
    /// Present `request`. `resolution` runs once the user has answered, which
    /// may be before this returns (blocking backends) or much later.
    fn present(&self, request: DialogRequest, resolution: Resolution) -> Result<(), DialogError>;
}

/// Services requests with the platform's blocking primitives, unmodified.
#[derive(Educe)]
#[educe(Debug)]
pub struct NativeBackend {
    #[educe(Debug(ignore))]
    native: Arc<dyn NativeDialogs>,
}

impl NativeBackend {
    pub fn new(native: Arc<dyn NativeDialogs>) -> Self {
        Self { native }
    }

    pub fn supports_override(&self, kind: DialogKind) -> bool {
        self.native.overridable(kind)
    }
}

impl DialogBackend for NativeBackend {
    fn present(&self, request: DialogRequest, resolution: Resolution) -> Result<(), DialogError> {
        let result = match request.kind() {
            DialogKind::Notice => {
                self.native.alert(request.message());
                DialogResult::Acknowledged
            }
            DialogKind::Confirmation => {
                DialogResult::Confirmed(self.native.confirm(request.message()))
            }
        };
        resolution(result);
        Ok(())
    }
}

/// The deferred answer to a platform dialog call.
///
/// Await it to get the value. When the platform primitive was not intercepted
/// the answer is already there.
#[derive(Debug)]
pub struct Reply<T> {
    receiver: oneshot::Receiver<T>,
}

impl<T: Send + 'static> Reply<T> {
    /// A reply plus the resolution that fills it in, converting the raw result with `convert`.
    pub(crate) fn channel(convert: fn(DialogResult) -> T) -> (Self, Resolution) {
        let (sender, receiver) = oneshot::channel();
        let resolution: Resolution = Box::new(move |result| {
            // The caller may have stopped waiting, that's fine.
            let _ = sender.send(convert(result));
        });
        (Self { receiver }, resolution)
    }
}

impl<T> Reply<T> {
    /// Check for the answer without waiting. `None` while the dialog is still open.
    pub fn try_result(&mut self) -> Option<Result<T, DialogError>> {
        match self.receiver.try_recv() {
            Ok(value) => Some(Ok(value)),
            Err(TryRecvError::Empty) => None,
            Err(TryRecvError::Closed) => Some(Err(DialogError::Abandoned)),
        }
    }
}

impl<T> Future for Reply<T> {
    type Output = Result<T, DialogError>;

    fn poll(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        Pin::new(&mut self.receiver)
            .poll(cx)
            .map(|result| result.map_err(|_| DialogError::Abandoned))
    }
}
