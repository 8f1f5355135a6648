//! Integration tests for the library API.
//!
//! These tests drive the provider the way an embedding application would,
//! with a recording surface instead of a terminal.

use dialog_provider::{
    AutoApprove, Choice, DenyAll, DetachedSurface, DialogError, DialogId, DialogKind,
    DialogOptionsBuilder, DialogProvider, DialogRequest, DialogStyle, DialogSurface, ProviderMode,
    ScriptedResponder, drive,
};
use std::sync::{Arc, Mutex};

#[derive(Default)]
struct RecordingSurface {
    events: Mutex<Vec<String>>,
}

impl RecordingSurface {
    fn events(&self) -> Vec<String> {
        self.events.lock().unwrap().clone()
    }
}

impl DialogSurface for RecordingSurface {
    fn show(&self, _id: DialogId, request: &DialogRequest) {
        self.events
            .lock()
            .unwrap()
            .push(format!("show {}", request.message()));
    }

    fn dismiss(&self, _id: DialogId) {
        self.events.lock().unwrap().push("dismiss".to_string());
    }
}

#[test]
fn test_back_to_back_notices_are_shown_one_at_a_time() {
    let surface = Arc::new(RecordingSurface::default());
    let provider = DialogProvider::new(surface.clone(), Arc::new(DenyAll));

    provider.notify("first", None, Default::default()).unwrap();
    provider.notify("second", None, Default::default()).unwrap();
    assert_eq!(vec!["show first"], surface.events());

    provider.acknowledge().unwrap();
    assert_eq!(vec!["show first", "dismiss", "show second"], surface.events());
    assert_eq!(1, provider.pending());
}

#[test]
fn test_acknowledge_callback_runs_after_dismiss() {
    let surface = Arc::new(RecordingSurface::default());
    let provider = DialogProvider::new(surface.clone(), Arc::new(DenyAll));
    let seen_at_callback = Arc::new(Mutex::new(Vec::new()));

    let observer = surface.clone();
    let record = seen_at_callback.clone();
    provider
        .notify(
            "hello",
            Some(Box::new(move || {
                *record.lock().unwrap() = observer.events();
            })),
            Default::default(),
        )
        .unwrap();
    provider.acknowledge().unwrap();

    assert_eq!(
        vec!["show hello", "dismiss"],
        *seen_at_callback.lock().unwrap()
    );
}

#[test]
fn test_confirmation_resolves_exactly_one_branch() {
    for choice in [Choice::Accept, Choice::Decline] {
        let surface = Arc::new(RecordingSurface::default());
        let provider = DialogProvider::new(surface, Arc::new(DenyAll));
        let outcomes = Arc::new(Mutex::new(Vec::new()));
        let accepted = outcomes.clone();
        let declined = outcomes.clone();

        provider
            .confirm(
                "Delete?",
                Box::new(move || accepted.lock().unwrap().push("accept")),
                Some(Box::new(move || declined.lock().unwrap().push("decline"))),
                DialogOptionsBuilder::default()
                    .style("danger")
                    .build()
                    .unwrap(),
            )
            .unwrap();
        assert_eq!(DialogStyle::Danger, provider.active().unwrap().1.style());

        provider.resolve(choice).unwrap();
        provider.resolve(choice).unwrap_err();

        let expected = if choice.is_accept() { "accept" } else { "decline" };
        assert_eq!(vec![expected], *outcomes.lock().unwrap());
    }
}

#[tokio::test]
async fn test_intercepted_platform_confirm_matches_choice() {
    let surface = Arc::new(RecordingSurface::default());
    let provider = DialogProvider::new(surface.clone(), Arc::new(AutoApprove));
    let platform = provider.platform();

    // Not intercepted: the native primitive answers straight away.
    assert!(platform.confirm("native?").unwrap().await.unwrap());
    assert!(surface.events().is_empty());

    provider
        .set_native_interception(DialogKind::Confirmation, true)
        .unwrap();
    let reply = platform.confirm("custom?").unwrap();
    assert_eq!(vec!["show custom?"], surface.events());

    let mut responder = ScriptedResponder::always(Choice::Decline);
    assert_eq!(1, drive(&provider, &mut responder).await.unwrap());
    assert!(!reply.await.unwrap());

    provider
        .set_native_interception(DialogKind::Confirmation, false)
        .unwrap();
    assert_eq!(ProviderMode::Native, provider.mode(DialogKind::Confirmation));
    assert!(platform.confirm("native again?").unwrap().await.unwrap());
}

#[test]
fn test_intercepted_alert_without_surface_fails() {
    let provider = DialogProvider::new(Arc::new(DetachedSurface), Arc::new(DenyAll));
    provider
        .set_native_interception(DialogKind::Notice, true)
        .unwrap();

    let result = provider.platform().alert("nowhere to show this");
    assert!(matches!(result, Err(DialogError::PresentationUnavailable)));
    assert!(provider.is_idle());
}

#[test]
fn test_empty_message_is_displayed() {
    let surface = Arc::new(RecordingSurface::default());
    let provider = DialogProvider::new(surface.clone(), Arc::new(DenyAll));

    provider.notify("", None, Default::default()).unwrap();
    assert_eq!(vec!["show "], surface.events());
}

#[test]
fn test_provider_is_send_sync() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<DialogProvider>();
    assert_send_sync::<dialog_provider::Platform>();
}
