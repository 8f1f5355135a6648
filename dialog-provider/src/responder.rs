//! Sources of user interaction for the custom queue.
//!
//! The queue never decides anything by itself; something has to answer each
//! dialog it puts on the surface. A [`Responder`] is that something, and
//! [`drive`] feeds it dialogs until the queue runs dry.

use crate::error::DialogError;
use crate::provider::DialogProvider;
use crate::request::{Choice, DialogId, DialogRequest};
use async_trait::async_trait;
use std::collections::VecDeque;
use tracing::debug;

#[async_trait]
pub trait Responder: Send {
    /// Produce the user's choice for the dialog currently on the surface.
    async fn respond(&mut self, id: DialogId, request: &DialogRequest) -> Choice;
}

/// Answers from a fixed script, then `fallback` once the script runs out.
#[derive(Debug, Clone)]
pub struct ScriptedResponder {
    answers: VecDeque<Choice>,
    fallback: Choice,
}

impl ScriptedResponder {
    pub fn new(answers: impl IntoIterator<Item = Choice>, fallback: Choice) -> Self {
        Self {
            answers: answers.into_iter().collect(),
            fallback,
        }
    }

    pub fn always(choice: Choice) -> Self {
        Self::new([], choice)
    }
}

#[async_trait]
impl Responder for ScriptedResponder {
    async fn respond(&mut self, _id: DialogId, _request: &DialogRequest) -> Choice {
        self.answers.pop_front().unwrap_or(self.fallback)
    }
}

/// Answer dialogs with `responder` until none are left, including any issued
/// by callbacks along the way. Returns how many were resolved.
pub async fn drive<R>(provider: &DialogProvider, responder: &mut R) -> Result<usize, DialogError>
where
    R: Responder + ?Sized,
{
    let mut resolved = 0;
    while let Some((id, request)) = provider.active() {
        let choice = responder.respond(id, &request).await;
        provider.resolve(choice)?;
        resolved += 1;
    }
    debug!("Queue drained after {} dialogs", resolved);
    Ok(resolved)
}
