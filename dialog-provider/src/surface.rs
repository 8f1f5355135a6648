use crate::request::{DialogId, DialogRequest};
use mockall::automock;

/// Something that can draw a custom dialog and take it down again.
///
/// Surfaces only render. Resolution comes back through
/// [`DialogProvider::resolve`](crate::DialogProvider::resolve) when the user
/// interacts with what was drawn. `show` and `dismiss` are called while the
/// queue is locked, so they must not call back into the provider.
#[automock]
pub trait DialogSurface: Send + Sync {
    /// `false` when there is nothing to draw on, e.g. no terminal attached.
    fn is_available(&self) -> bool {
        true
    }

    fn show(&self, id: DialogId, request: &DialogRequest);

    fn dismiss(&self, id: DialogId);
}

/// A surface that is never available. Every custom presentation fails.
#[derive(Debug, Clone, Copy, Default)]
pub struct DetachedSurface;

impl DialogSurface for DetachedSurface {
    fn is_available(&self) -> bool {
        false
    }

    fn show(&self, _id: DialogId, _request: &DialogRequest) {}

    fn dismiss(&self, _id: DialogId) {}
}
