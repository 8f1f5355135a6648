use crate::backend::{DialogBackend, Resolution};
use crate::error::DialogError;
use crate::request::{Choice, DialogId, DialogRequest, DialogResult};
use crate::surface::DialogSurface;
use educe::Educe;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use tracing::{debug, trace};

struct Entry {
    id: DialogId,
    request: DialogRequest,
    resolution: Resolution,
}

#[derive(Default)]
struct QueueState {
    next_id: u64,
    active: Option<Entry>,
    waiting: VecDeque<Entry>,
}

/// Custom, non-blocking presentation.
///
/// At most one dialog is on the surface at a time; the rest wait in issue
/// order. Surface calls happen under the queue lock, so the surface sees
/// shows and dismissals in the same order as the queue state changes and
/// must not call back into the queue. Resolutions run after the lock is
/// released and are free to issue new dialogs.
#[derive(Educe)]
#[educe(Debug)]
pub struct DialogQueue {
    #[educe(Debug(ignore))]
    surface: Arc<dyn DialogSurface>,
    #[educe(Debug(ignore))]
    state: Mutex<QueueState>,
}

impl DialogQueue {
    pub fn new(surface: Arc<dyn DialogSurface>) -> Self {
        Self {
            surface,
            state: Mutex::new(QueueState::default()),
        }
    }

    fn lock(&self) -> MutexGuard<'_, QueueState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn enqueue(
        &self,
        request: DialogRequest,
        resolution: Resolution,
    ) -> Result<DialogId, DialogError> {
        if !self.surface.is_available() {
            return Err(DialogError::PresentationUnavailable);
        }

        let mut state = self.lock();
        let id = DialogId(state.next_id);
        state.next_id += 1;

        let entry = Entry {
            id,
            request,
            resolution,
        };
        if state.active.is_none() {
            self.surface.show(id, &entry.request);
            state.active = Some(entry);
        } else {
            state.waiting.push_back(entry);
            trace!("{} queued behind {} others", id, state.waiting.len());
        }

        Ok(id)
    }

    /// Resolve the active dialog with `choice` and bring up the next one.
    ///
    /// The finished dialog is dismissed first, then the next one is shown,
    /// then the finished dialog's resolution runs.
    pub fn resolve(&self, choice: Choice) -> Result<DialogId, DialogError> {
        let finished = {
            let mut state = self.lock();
            let finished = state.active.take().ok_or(DialogError::NoActiveDialog)?;
            debug!("Resolving {} with {}", finished.id, choice);
            self.surface.dismiss(finished.id);

            state.active = state.waiting.pop_front();
            if let Some(next) = &state.active {
                self.surface.show(next.id, &next.request);
            }
            finished
        };

        let result = DialogResult::for_kind(finished.request.kind(), choice);
        (finished.resolution)(result);

        Ok(finished.id)
    }

    pub fn active(&self) -> Option<(DialogId, DialogRequest)> {
        self.lock()
            .active
            .as_ref()
            .map(|entry| (entry.id, entry.request.clone()))
    }

    /// Dialogs not yet resolved, including the one on the surface.
    pub fn len(&self) -> usize {
        let state = self.lock();
        state.waiting.len() + usize::from(state.active.is_some())
    }

    pub fn is_empty(&self) -> bool {
        self.lock().active.is_none()
    }
}

impl DialogBackend for DialogQueue {
    fn present(&self, request: DialogRequest, resolution: Resolution) -> Result<(), DialogError> {
        self.enqueue(request, resolution).map(|_| ())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{Preset, ProviderConfig};
    use crate::request::DialogKind;
    use crate::surface::{DetachedSurface, MockDialogSurface};
    use mockall::Sequence;
    use mockall::predicate::eq;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::thread;
    use std::time::Duration;

    fn notice(message: &str) -> DialogRequest {
        ProviderConfig::default().build_request(Preset::Notice, message, Default::default())
    }

    fn noop() -> Resolution {
        Box::new(|_| {})
    }

    fn permissive_surface() -> MockDialogSurface {
        let mut surface = MockDialogSurface::new();
        surface.expect_is_available().return_const(true);
        surface.expect_show().return_const(());
        surface.expect_dismiss().return_const(());
        surface
    }

    #[test]
    fn test_second_dialog_shown_after_first_dismissed() {
        let mut seq = Sequence::new();
        let mut surface = MockDialogSurface::new();
        surface.expect_is_available().return_const(true);
        surface
            .expect_show()
            .withf(|id, request| id.0 == 0 && request.message() == "first")
            .times(1)
            .in_sequence(&mut seq)
            .return_const(());
        surface
            .expect_dismiss()
            .with(eq(DialogId(0)))
            .times(1)
            .in_sequence(&mut seq)
            .return_const(());
        surface
            .expect_show()
            .withf(|id, request| id.0 == 1 && request.message() == "second")
            .times(1)
            .in_sequence(&mut seq)
            .return_const(());

        let queue = DialogQueue::new(Arc::new(surface));
        queue.enqueue(notice("first"), noop()).unwrap();
        queue.enqueue(notice("second"), noop()).unwrap();

        assert_eq!(2, queue.len());
        assert_eq!("first", queue.active().unwrap().1.message());

        assert_eq!(DialogId(0), queue.resolve(Choice::Accept).unwrap());
        assert_eq!("second", queue.active().unwrap().1.message());
        assert_eq!(1, queue.len());
    }

    #[test]
    fn test_resolution_runs_once_with_kind_result() {
        let queue = DialogQueue::new(Arc::new(permissive_surface()));
        let calls = Arc::new(AtomicUsize::new(0));
        let seen = calls.clone();

        let request = ProviderConfig::default().build_request(
            Preset::from(DialogKind::Confirmation),
            "Sure?",
            Default::default(),
        );
        queue
            .enqueue(
                request,
                Box::new(move |result| {
                    assert_eq!(DialogResult::Confirmed(false), result);
                    seen.fetch_add(1, Ordering::SeqCst);
                }),
            )
            .unwrap();

        queue.resolve(Choice::Decline).unwrap();
        assert!(matches!(
            queue.resolve(Choice::Decline),
            Err(DialogError::NoActiveDialog)
        ));
        assert_eq!(1, calls.load(Ordering::SeqCst));
        assert!(queue.is_empty());
    }

    #[test]
    fn test_unavailable_surface_rejects_without_resolving() {
        let queue = DialogQueue::new(Arc::new(DetachedSurface));
        let result = queue.enqueue(
            notice("hello"),
            Box::new(|_| panic!("resolution must not run")),
        );

        assert!(matches!(result, Err(DialogError::PresentationUnavailable)));
        assert_eq!(0, queue.len());
    }

    #[test]
    fn test_resolution_may_enqueue() {
        let queue = Arc::new(DialogQueue::new(Arc::new(permissive_surface())));
        let inner = queue.clone();

        queue
            .enqueue(
                notice("first"),
                Box::new(move |_| {
                    inner.enqueue(notice("follow-up"), Box::new(|_| {})).unwrap();
                }),
            )
            .unwrap();
        queue.enqueue(notice("second"), noop()).unwrap();

        queue.resolve(Choice::Accept).unwrap();
        assert_eq!("second", queue.active().unwrap().1.message());
        queue.resolve(Choice::Accept).unwrap();
        assert_eq!("follow-up", queue.active().unwrap().1.message());
    }

    #[derive(Default)]
    struct SlowSurface {
        events: Mutex<Vec<String>>,
    }

    impl DialogSurface for SlowSurface {
        fn show(&self, id: DialogId, _request: &DialogRequest) {
            thread::sleep(Duration::from_millis(50));
            self.events.lock().unwrap().push(format!("show {}", id));
        }

        fn dismiss(&self, id: DialogId) {
            self.events.lock().unwrap().push(format!("dismiss {}", id));
        }
    }

    #[test]
    fn test_resolve_from_other_thread_waits_for_show() {
        let surface = Arc::new(SlowSurface::default());
        let queue = Arc::new(DialogQueue::new(surface.clone()));

        let issuer = queue.clone();
        let handle = thread::spawn(move || issuer.enqueue(notice("slow"), noop()).unwrap());

        let id = loop {
            if let Some((id, _)) = queue.active() {
                break id;
            }
            thread::yield_now();
        };
        assert_eq!(id, queue.resolve(Choice::Accept).unwrap());
        assert_eq!(id, handle.join().unwrap());

        assert_eq!(
            vec!["show dialog-0".to_string(), "dismiss dialog-0".to_string()],
            *surface.events.lock().unwrap()
        );
        assert!(queue.is_empty());
    }
}
