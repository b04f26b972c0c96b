//! Asking the user for a value without blocking the UI.
//!
//! A [`Prompt`] shows its question and hands back a [`PromptReply`] at once.
//! Whoever answers holds the matching [`PromptResponder`]: confirming sends
//! the value, cancelling (or dropping the responder) resolves the reply to
//! `None`.

use gpui::{App, SharedString};
use smol::channel::{Receiver, Sender};

/// Something that can ask the user for a text value.
pub trait Prompt: 'static {
    fn prompt_for_value(&self, message: SharedString, cx: &mut App) -> PromptReply;
}

/// Create a connected responder/reply pair.
pub fn prompt_channel() -> (PromptResponder, PromptReply) {
    let (sender, receiver) = smol::channel::bounded(1);
    (PromptResponder(sender), PromptReply(receiver))
}

/// The answering side of a prompt.
#[derive(Debug)]
pub struct PromptResponder(Sender<String>);

impl PromptResponder {
    pub fn confirm(self, value: impl Into<String>) {
        // The reply may already be gone if its task was dropped.
        self.0.try_send(value.into()).ok();
    }

    pub fn cancel(self) {
        self.0.close();
    }
}

/// The waiting side of a prompt.
#[derive(Debug)]
pub struct PromptReply(Receiver<String>);

impl PromptReply {
    /// Resolves to the confirmed value, or `None` if the prompt was cancelled.
    pub async fn value(self) -> Option<String> {
        self.0.recv().await.ok()
    }
}
