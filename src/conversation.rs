//! Conversation engine
//!
//! Owns the append-only message log and serialized turn submission. Every
//! failure is converted into a visible assistant message; submit never
//! returns an error to the caller.

use crate::models::Message;
use crate::transport::{ChatTransport, HistoryTurn};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::{debug, info, warn};

const WELCOME_TEXT: &str =
    "Hello! I'm your financial assistant. Ask me anything about the companies above.";

/// Outcome of a `submit` call, reported so the presentation layer knows
/// whether to clear its input buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// The turn was accepted and two messages were appended (user, then
    /// assistant or error). The input buffer should be cleared.
    Accepted,
    /// Empty input or a request already in flight; nothing changed.
    Ignored,
}

pub struct ConversationEngine {
    transport: Arc<dyn ChatTransport>,
    history: RwLock<Vec<Message>>,
    pending: AtomicBool,
}

impl ConversationEngine {
    /// Create an engine seeded with the synthetic welcome turn.
    pub fn new(transport: Arc<dyn ChatTransport>) -> Self {
        Self {
            transport,
            history: RwLock::new(vec![Message::assistant(WELCOME_TEXT)]),
            pending: AtomicBool::new(false),
        }
    }

    /// Submit one user turn.
    ///
    /// No-op when the trimmed text is empty or a request is already in
    /// flight; otherwise appends the user message, calls the transport with
    /// the prior history, and appends exactly one assistant message on
    /// every path. `pending` is cleared unconditionally before returning.
    pub async fn submit(&self, text: &str) -> SubmitOutcome {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return SubmitOutcome::Ignored;
        }

        if self
            .pending
            .compare_exchange(false, true, Ordering::SeqCst, Ordering::SeqCst)
            .is_err()
        {
            debug!("Submission ignored, a request is already in flight");
            return SubmitOutcome::Ignored;
        }

        // Snapshot the prior turns for the payload, then append the user
        // message so it renders immediately. The synthetic welcome turn is
        // display-only and not part of the payload.
        let prior: Vec<HistoryTurn> = {
            let mut history = self.history.write().await;
            let prior = history
                .iter()
                .skip(1)
                .map(|m| HistoryTurn {
                    sender: m.sender,
                    message: m.text.clone(),
                })
                .collect();
            history.push(Message::user(trimmed));
            prior
        };

        let reply = match self.transport.send(trimmed, &prior).await {
            Ok(answer) => {
                info!("Assistant reply received");
                Message::assistant(answer)
            }
            Err(e) => {
                warn!("Chat request failed, surfacing as assistant message: {}", e);
                Message::assistant(format!(
                    "Sorry, I encountered an error: {}. Please try again.",
                    e
                ))
            }
        };

        self.history.write().await.push(reply);
        self.pending.store(false, Ordering::SeqCst);

        SubmitOutcome::Accepted
    }

    /// Snapshot of the full message log, welcome turn included.
    pub async fn history(&self) -> Vec<Message> {
        self.history.read().await.clone()
    }

    pub async fn message_count(&self) -> usize {
        self.history.read().await.len()
    }

    pub fn is_pending(&self) -> bool {
        self.pending.load(Ordering::SeqCst)
    }
}
