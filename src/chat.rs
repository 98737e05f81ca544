//! Quiz-generation chat widget
//!
//! The widget keeps an append-only transcript. Each accepted prompt adds the
//! user's message immediately and exactly one assistant message once the
//! [`ReplyGenerator`] answers, so after `n` prompts settle the transcript
//! holds `1 + 2n` messages (the greeting plus one pair per prompt).
//!
//! [`ScriptedReply`] is the stand-in generator: it waits a fixed delay and
//! returns a canned acknowledgment. A real backend integration implements
//! the same trait.

use crate::collection::ListState;
use crate::lifecycle::{Outcome, StateCell};
use crate::scope::ViewScope;
use crate::timer::Timer;
use crate::types::{Message, Result};
use async_trait::async_trait;
use std::time::Duration;

pub const GREETING: &str = "Hello! I am your AI Knowledge Architect. I can help you synthesize customized assessment modules. Specify difficulty levels (EASY, MEDIUM, HARD) or target specific intellectual domains.";

pub const ACKNOWLEDGMENT: &str =
    "SYNTHESIZING: Analyzing request and generating validated question units...";

pub const REPLY_FAILED: &str = "Generator unavailable: the request could not be processed";

/// Quick prompts offered under the transcript.
pub const SUGGESTIONS: [&str; 4] = [
    "5 EASY MCQS",
    "3 HARD UNITS ON CALC",
    "MIXED 10 (4E, 3M, 3H)",
    "5 DETAILED MCQS",
];

/// Produces the assistant's reply to a prompt.
#[async_trait(?Send)]
pub trait ReplyGenerator {
    async fn reply(&self, prompt: &str) -> Result<String>;
}

#[async_trait(?Send)]
impl<G: ReplyGenerator + ?Sized> ReplyGenerator for std::rc::Rc<G> {
    async fn reply(&self, prompt: &str) -> Result<String> {
        (**self).reply(prompt).await
    }
}

/// Simulated generator: a fixed delay followed by a fixed acknowledgment.
#[derive(Debug, Clone)]
pub struct ScriptedReply<T> {
    timer: T,
    delay: Duration,
    text: String,
}

impl<T: Timer> ScriptedReply<T> {
    pub fn new(timer: T, delay: Duration) -> Self {
        Self {
            timer,
            delay,
            text: ACKNOWLEDGMENT.to_string(),
        }
    }

    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = text.into();
        self
    }
}

#[async_trait(?Send)]
impl<T: Timer> ReplyGenerator for ScriptedReply<T> {
    async fn reply(&self, _prompt: &str) -> Result<String> {
        self.timer.sleep(self.delay).await;
        Ok(self.text.clone())
    }
}

/// Transcript plus the text currently in the composer.
#[derive(Debug, Clone, PartialEq)]
pub struct ChatState {
    messages: ListState<Message>,
    pub input: String,
}

impl Default for ChatState {
    fn default() -> Self {
        let mut messages = ListState::new();
        messages.append(Message::assistant(GREETING));
        Self {
            messages,
            input: String::new(),
        }
    }
}

impl ChatState {
    pub fn messages(&self) -> &ListState<Message> {
        &self.messages
    }

    pub fn set_input(&mut self, text: impl Into<String>) {
        self.input = text.into();
    }

    /// Replace the composer text with a quick prompt.
    pub fn apply_suggestion(&mut self, suggestion: &str) {
        self.input = suggestion.to_string();
    }

    pub fn can_submit(&self, is_generating: bool) -> bool {
        !is_generating && !self.input.trim().is_empty()
    }
}

/// Submit the composer text.
///
/// Ignored when the input is blank or a generation is already running.
/// Otherwise the user message is appended, the input cleared, the text
/// handed to `on_prompt`, and the generator's reply appended when it
/// arrives. A failed reply is still recorded as one assistant message.
pub async fn submit_prompt<C, G>(
    scope: &ViewScope,
    chat: &C,
    generator: &G,
    is_generating: bool,
    on_prompt: impl FnOnce(&str),
) -> Outcome<Message>
where
    C: StateCell<ChatState>,
    G: ReplyGenerator + ?Sized,
{
    let accepted = chat.update(|state| {
        if !state.can_submit(is_generating) {
            return None;
        }
        let prompt = std::mem::take(&mut state.input);
        state.messages.append(Message::user(prompt.clone()));
        Some(prompt)
    });

    let prompt = match accepted {
        None => return Outcome::Cancelled,
        Some(None) => return Outcome::Ignored,
        Some(Some(prompt)) => prompt,
    };

    on_prompt(&prompt);

    let reply = match scope.run(generator.reply(&prompt)).await {
        Some(Ok(text)) => Message::assistant(text),
        Some(Err(err)) => {
            tracing::warn!(error = %err, "reply generation failed");
            Message::assistant(err.user_message(REPLY_FAILED))
        }
        None => return Outcome::Cancelled,
    };

    match chat.update(|state| state.messages.append(reply.clone())) {
        Some(()) => Outcome::Completed(reply),
        None => Outcome::Cancelled,
    }
}
