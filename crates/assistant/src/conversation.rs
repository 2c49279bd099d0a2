//! Conversation transcripts
//!
//! One `Conversation` per chat session. The transcript is append-only and
//! strictly ordered: a submission appends the user message, then the bot
//! reply after a cosmetic delay, and whole submissions are serialized so
//! two rapid sends can never interleave their message pairs.

use std::sync::Arc;

use parking_lot::Mutex as SyncMutex;
use tokio::sync::Mutex as AsyncMutex;
use tokio::time::Duration;

use vita_path_core::{ChatMessage, Language, MessageCategory};

use crate::classifier::IntentClassifier;
use crate::rules::GREETING;

/// An in-memory chat conversation. Nothing survives a reload.
pub struct Conversation {
    classifier: Arc<IntentClassifier>,
    /// Emulates processing latency; cosmetic, not a correctness knob
    reply_delay: Duration,
    transcript: SyncMutex<Vec<ChatMessage>>,
    /// Serializes whole submissions to keep the transcript alternating
    submission_lock: AsyncMutex<()>,
}

impl Conversation {
    /// Create a conversation seeded with the assistant greeting.
    pub fn new(classifier: Arc<IntentClassifier>, reply_delay: Duration) -> Self {
        let greeting =
            ChatMessage::bot(GREETING, MessageCategory::General, Language::English);
        Self {
            classifier,
            reply_delay,
            transcript: SyncMutex::new(vec![greeting]),
            submission_lock: AsyncMutex::new(()),
        }
    }

    /// Submit a user utterance and return the bot reply.
    ///
    /// The user message is appended first and the reply strictly after it.
    /// A send issued while another is pending waits its turn, so append
    /// order always alternates user/bot.
    pub async fn submit(&self, text: impl Into<String>) -> ChatMessage {
        let text = text.into();
        let _turn = self.submission_lock.lock().await;

        self.transcript.lock().push(ChatMessage::user(text.clone()));

        tokio::time::sleep(self.reply_delay).await;

        let reply = self.classifier.respond(&text);
        let message = ChatMessage::bot(reply.body, reply.category, reply.language);
        self.transcript.lock().push(message.clone());
        message
    }

    /// Snapshot of the transcript
    pub fn transcript(&self) -> Vec<ChatMessage> {
        self.transcript.lock().clone()
    }

    /// Number of messages, greeting included
    pub fn len(&self) -> usize {
        self.transcript.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.transcript.lock().is_empty()
    }
}
