//! Command routing for the demo binary. Every command issues its dialogs up
//! front, then answers them from stdin until the queue is empty.

use crate::{Command, CrawlStopArgs};
use anyhow::Result;
use dialog_provider::prelude::*;
use dialog_provider::report_stdout;
use dialog_provider::{DialogError, DialogId};
use std::io::Write;
use std::sync::Arc;
use tokio::io::BufReader;
use tracing::{info, instrument, warn};

/// Route a command to its appropriate handler.
pub async fn handle_command(
    config: ProviderConfig,
    options: &ConfigOptions,
    command: &Command,
) -> Result<i32> {
    let native: Arc<dyn NativeDialogs> = if options.non_interactive {
        Arc::new(DenyAll)
    } else {
        Arc::new(InquireDialogs)
    };
    let provider = DialogProvider::with_config(config, Arc::new(TerminalSurface), native);

    let mut answers = LineResponder::new(BufReader::new(tokio::io::stdin()));

    match command {
        Command::Tour => tour(&provider, &mut answers).await,
        Command::Intercept => intercept(&provider, &mut answers).await,
        Command::Restore => restore(&provider).await,
        Command::CrawlStop(args) => crawl_stop(&provider, &mut answers, args).await,
    }
}

fn shown(result: Result<DialogId, DialogError>) {
    if let Err(e) = result {
        warn!(target: "user", "Unable to show follow-up dialog. {}", e);
    }
}

fn say(message: &'static str) -> Callback {
    Box::new(move || info!(target: "user", "{}", message))
}

#[instrument("dialog-demo tour", skip_all)]
async fn tour(provider: &DialogProvider, answers: &mut dyn Responder) -> Result<i32> {
    provider.notify("This is a simple informational message", None, Default::default())?;

    provider.notify(
        "Message with a custom callback",
        Some(say("Notice callback ran")),
        DialogOptionsBuilder::default()
            .title("Custom notice")
            .accept_label("Got it")
            .build()?,
    )?;

    let on_accept = provider.clone();
    let on_decline = provider.clone();
    provider.confirm(
        "Do you want to continue the tour?",
        Box::new(move || {
            info!(target: "user", "User confirmed");
            shown(on_accept.announce_success("Great, carrying on", None));
        }),
        Some(Box::new(move || {
            info!(target: "user", "User cancelled");
            shown(on_decline.notify("Tour paused", None, DialogOptions::default()));
        })),
        DialogOptions::default(),
    )?;

    let on_accept = provider.clone();
    let on_decline = provider.clone();
    provider.confirm(
        "This action is IRREVERSIBLE. Are you completely sure?",
        Box::new(move || {
            shown(on_accept.announce_failure("Dangerous action executed!", None));
        }),
        Some(Box::new(move || {
            shown(on_decline.announce_success("Good call, action cancelled", None));
        })),
        DialogOptionsBuilder::default()
            .title("Dangerous action")
            .accept_label("Yes, run it")
            .decline_label("No, cancel")
            .style("danger")
            .build()?,
    )?;

    provider.announce_success(
        "Operation completed successfully!",
        Some(say("User closed the success message")),
    )?;
    provider.announce_failure(
        "Simulated error for the tour",
        Some(say("User closed the error message")),
    )?;

    let resolved = drive(provider, &mut *answers).await?;
    report_stdout!("Tour finished, {} dialogs resolved", resolved);
    Ok(0)
}

#[instrument("dialog-demo intercept", skip_all)]
async fn intercept(provider: &DialogProvider, answers: &mut dyn Responder) -> Result<i32> {
    info!(target: "user", "Intercepting native alert and confirm");
    provider.set_native_interception(DialogKind::Notice, true)?;
    provider.set_native_interception(DialogKind::Confirmation, true)?;

    let platform = provider.platform();
    let alerted = platform.alert("This alert was intercepted and shown as a custom dialog")?;
    let confirmed = platform.confirm("This confirm was intercepted too. Accept it?")?;

    let mut resolved = drive(provider, &mut *answers).await?;
    alerted.await?;
    let accepted = confirmed.await?;

    let outcome = if accepted {
        "User confirmed"
    } else {
        "User cancelled"
    };
    let reported = platform.alert(outcome)?;
    resolved += drive(provider, &mut *answers).await?;
    reported.await?;

    report_stdout!("Interception finished, {} dialogs resolved", resolved);
    Ok(0)
}

#[instrument("dialog-demo restore", skip_all)]
async fn restore(provider: &DialogProvider) -> Result<i32> {
    info!(target: "user", "Restoring native alert and confirm");
    provider.set_native_interception(DialogKind::Notice, false)?;
    provider.set_native_interception(DialogKind::Confirmation, false)?;

    provider
        .platform()
        .alert("This is the terminal's own alert")?
        .await?;

    report_stdout!("Native dialogs restored");
    Ok(0)
}

#[instrument("dialog-demo crawl-stop", skip_all)]
async fn crawl_stop(
    provider: &DialogProvider,
    answers: &mut dyn Responder,
    args: &CrawlStopArgs,
) -> Result<i32> {
    let on_accept = provider.clone();
    let domain = args.domain.clone();
    provider.confirm(
        &format!("Are you sure you want to stop crawling {}?", args.domain),
        Box::new(move || {
            info!(target: "user", "Stopping crawl of {}", domain);
            shown(on_accept.announce_success(
                "Crawling stopped successfully",
                Some(say("You can reload the page now")),
            ));
        }),
        Some(say("Cancelled by user")),
        DialogOptionsBuilder::default()
            .title("Stop crawling")
            .accept_label("Yes, stop")
            .decline_label("Cancel")
            .style("warning")
            .build()?,
    )?;

    let resolved = drive(provider, &mut *answers).await?;
    report_stdout!("Crawl stop finished, {} dialogs resolved", resolved);
    Ok(0)
}
