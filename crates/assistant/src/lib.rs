//! Bilingual rule-based chat assistant
//!
//! Maps free-text utterances (English, Hindi, or mixed) to a category and
//! a canned bilingual reply using deterministic keyword matching, and
//! keeps an append-only, strictly ordered conversation transcript. No
//! statistical model anywhere: behavior is fully reproducible.

pub mod classifier;
pub mod conversation;
pub mod rules;

pub use classifier::{ClassifiedReply, IntentClassifier};
pub use conversation::Conversation;
pub use rules::{IntentRule, QuickAction, GREETING, QUICK_ACTIONS, RULES};
