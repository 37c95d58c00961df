//! Study-assistant chat service.
//!
//! # Responsibility
//! - Append user prompts and scripted assistant replies to the history.
//! - Simulate the assistant "thinking" pause before a reply shows up.
//! - Clear the whole history on request.
//!
//! # Invariants
//! - History is append-only apart from `clear`.
//! - Replies are delivered in prompt order, never before their due instant.
//! - Replies still pending when the service is dropped are discarded.

use super::{storage_failure, ServiceResult};
use crate::assistant::responses::{CLEARED_MESSAGE, WELCOME_MESSAGE};
use crate::assistant::{reply_delay, sample_reply, ResponseCategory};
use crate::context::AppContext;
use crate::model::chat::{ChatMessage, Sender};
use crate::model::id::new_record_id;
use crate::model::validation::ValidationError;
use crate::platform::clock::time_label;
use crate::store::{KeyValueStore, PersistedList, CHAT_KEY};
use log::{debug, info};
use std::collections::VecDeque;
use std::time::{Duration, Instant};

const MODULE: &str = "chat";

/// Assistant reply scheduled for later delivery.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingReply {
    pub prompt: String,
    pub due_at: Instant,
    pub delay: Duration,
}

pub struct ChatService<S: KeyValueStore> {
    history: PersistedList<ChatMessage, S>,
    pending: VecDeque<PendingReply>,
}

impl<S: KeyValueStore> ChatService<S> {
    /// Loads the chat slot; an empty history shows the welcome greeting.
    pub fn hydrate(ctx: &AppContext, store: S) -> Self {
        Self {
            history: PersistedList::hydrate_or(store, CHAT_KEY, || {
                vec![assistant_message(ctx, WELCOME_MESSAGE)]
            }),
            pending: VecDeque::new(),
        }
    }

    pub fn messages(&self) -> &[ChatMessage] {
        self.history.items()
    }

    /// Whether a reply is still being "typed".
    pub fn is_typing(&self) -> bool {
        !self.pending.is_empty()
    }

    /// Appends the user prompt and schedules the assistant reply.
    pub fn send(&mut self, ctx: &AppContext, text: &str, now: Instant) -> ServiceResult<PendingReply> {
        if text.trim().is_empty() {
            debug!("event=chat_send module={MODULE} status=rejected reason=empty");
            return Err(ValidationError::EmptyMessage.into());
        }

        let message = ChatMessage {
            id: new_record_id(),
            text: text.to_string(),
            sender: Sender::User,
            timestamp: time_label(ctx.now()),
        };
        self.history
            .mutate(|history| {
                history.push(message);
                Some(())
            })
            .map_err(|err| storage_failure(MODULE, "chat_send", err))?;

        let delay = ctx.with_random(reply_delay);
        let pending = PendingReply {
            prompt: text.to_string(),
            due_at: now + delay,
            delay,
        };
        self.pending.push_back(pending.clone());

        debug!(
            "event=chat_send module={MODULE} status=ok delay_ms={}",
            delay.as_millis()
        );
        ctx.announce("Processing your message");
        Ok(pending)
    }

    /// Delivers every reply whose due instant has passed, oldest first.
    ///
    /// On a failed write the undelivered reply stays queued; replies already
    /// appended before it remain in `messages()`.
    pub fn poll(&mut self, ctx: &AppContext, now: Instant) -> ServiceResult<Vec<ChatMessage>> {
        let mut delivered = Vec::new();
        while self
            .pending
            .front()
            .is_some_and(|pending| pending.due_at <= now)
        {
            let Some(pending) = self.pending.pop_front() else {
                break;
            };
            match self.reply_to(ctx, &pending.prompt) {
                Ok((_, reply)) => delivered.push(reply),
                Err(err) => {
                    self.pending.push_front(pending);
                    return Err(err);
                }
            }
        }
        Ok(delivered)
    }

    /// Classifies `prompt` and appends the sampled reply immediately.
    pub fn reply_to(
        &mut self,
        ctx: &AppContext,
        prompt: &str,
    ) -> ServiceResult<(ResponseCategory, ChatMessage)> {
        let (category, text) = ctx.with_random(|rng| sample_reply(prompt, rng));
        let reply = assistant_message(ctx, text);

        self.history
            .mutate(|history| {
                history.push(reply.clone());
                Some(())
            })
            .map_err(|err| storage_failure(MODULE, "chat_reply", err))?;

        info!("event=chat_reply module={MODULE} status=ok category={category:?}");
        ctx.announce(&reply.text);
        Ok((category, reply))
    }

    /// Drops the stored history and returns the "cleared" greeting shown in
    /// its place. The greeting itself is not stored.
    pub fn clear(&mut self, ctx: &AppContext) -> ServiceResult<ChatMessage> {
        let greeting = assistant_message(ctx, CLEARED_MESSAGE);
        self.history
            .reset(vec![greeting.clone()])
            .map_err(|err| storage_failure(MODULE, "chat_clear", err))?;

        info!("event=chat_clear module={MODULE} status=ok");
        ctx.announce("Chat cleared");
        Ok(greeting)
    }
}

fn assistant_message(ctx: &AppContext, text: &str) -> ChatMessage {
    ChatMessage {
        id: new_record_id(),
        text: text.to_string(),
        sender: Sender::Assistant,
        timestamp: time_label(ctx.now()),
    }
}
