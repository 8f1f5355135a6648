//! Terminal implementations of the dialog traits.
//!
//! - [`InquireDialogs`] is the "native" blocking primitive, prompting with `inquire`.
//! - [`TerminalSurface`] draws custom dialogs through the `user` tracing target.
//! - [`LineResponder`] answers custom dialogs from lines of input.
//!
//! `InquireDialogs` detects when stdin is not a TTY (pipes, CI) and degrades
//! instead of failing: alerts are printed and confirmations are declined.

use crate::native::NativeDialogs;
use crate::request::{Choice, DialogId, DialogKind, DialogRequest, DialogStyle};
use crate::responder::Responder;
use crate::surface::DialogSurface;
use async_trait::async_trait;
use colored::{ColoredString, Colorize};
use inquire::InquireError;
use tokio::io::{AsyncBufRead, AsyncBufReadExt};
use tracing::{debug, info, warn};

/// Blocking terminal prompts using the `inquire` crate.
#[derive(Debug, Clone, Copy, Default)]
pub struct InquireDialogs;

impl NativeDialogs for InquireDialogs {
    fn alert(&self, message: &str) {
        match inquire::Select::new(message, vec!["OK"]).prompt() {
            Ok(_) => {}
            Err(InquireError::NotTTY) => {
                info!(target: "user", "{}", message);
            }
            Err(e) => debug!("Alert prompt closed: {:?}", e),
        }
    }

    fn confirm(&self, message: &str) -> bool {
        match inquire::Confirm::new(message).with_default(false).prompt() {
            Ok(result) => result,
            Err(InquireError::NotTTY) => {
                warn!(target: "user", "Prompting user, but input device is not a TTY. Declining.");
                false
            }
            Err(_) => false,
        }
    }
}

fn paint(text: &str, style: DialogStyle) -> ColoredString {
    match style {
        DialogStyle::Info => text.cyan(),
        DialogStyle::Primary => text.blue(),
        DialogStyle::Success => text.green(),
        DialogStyle::Warning => text.yellow(),
        DialogStyle::Danger | DialogStyle::Error => text.red(),
    }
}

/// Draws custom dialogs as framed blocks of terminal output.
#[derive(Debug, Clone, Copy, Default)]
pub struct TerminalSurface;

impl DialogSurface for TerminalSurface {
    fn show(&self, id: DialogId, request: &DialogRequest) {
        let title = request.title().unwrap_or_default();
        let buttons = match request.kind() {
            DialogKind::Notice => format!("[{}]", request.labels().confirm),
            DialogKind::Confirmation => format!(
                "[{}] / [{}]",
                request.labels().confirm,
                request.labels().cancel
            ),
        };

        debug!("Showing {}", id);
        info!(target: "user", "{}", paint(&format!("┌─ {} ", title), request.style()).bold());
        info!(target: "user", "{} {}", paint("│", request.style()), request.message());
        info!(target: "user", "{} {}", paint("└─", request.style()), buttons.white().bold());
    }

    fn dismiss(&self, id: DialogId) {
        debug!("Dismissed {}", id);
    }
}

/// Accepting answers are `y`, `yes`, `ok`, or an empty line. Everything else declines.
pub fn parse_answer(line: &str) -> Choice {
    match line.trim().to_lowercase().as_str() {
        "" | "y" | "yes" | "ok" => Choice::Accept,
        _ => Choice::Decline,
    }
}

/// Reads one line of input per dialog. End of input declines.
pub struct LineResponder<R> {
    reader: R,
}

impl<R> LineResponder<R>
where
    R: AsyncBufRead + Unpin + Send,
{
    pub fn new(reader: R) -> Self {
        Self { reader }
    }
}

#[async_trait]
impl<R> Responder for LineResponder<R>
where
    R: AsyncBufRead + Unpin + Send,
{
    async fn respond(&mut self, id: DialogId, _request: &DialogRequest) -> Choice {
        let mut line = String::new();
        match self.reader.read_line(&mut line).await {
            Ok(0) => {
                debug!("Input closed while {} was open", id);
                Choice::Decline
            }
            Ok(_) => parse_answer(&line),
            Err(e) => {
                warn!(target: "user", "Unable to read answer. {}", e);
                Choice::Decline
            }
        }
    }
}
