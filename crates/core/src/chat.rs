//! Chat transcript types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::locale::Language;

/// Who authored a message
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MessageAuthor {
    User,
    Bot,
}

impl MessageAuthor {
    pub fn as_str(&self) -> &'static str {
        match self {
            MessageAuthor::User => "user",
            MessageAuthor::Bot => "bot",
        }
    }
}

impl std::fmt::Display for MessageAuthor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Topic bucket assigned to bot replies by the classifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageCategory {
    Health,
    Navigation,
    Food,
    Fitness,
    Safety,
    General,
    Ayurveda,
    Indian,
}

impl MessageCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Health => "health",
            Self::Navigation => "navigation",
            Self::Food => "food",
            Self::Fitness => "fitness",
            Self::Safety => "safety",
            Self::General => "general",
            Self::Ayurveda => "ayurveda",
            Self::Indian => "indian",
        }
    }

    /// Label shown on the category badge next to bot replies. Ayurveda is
    /// rendered in Devanagari, matching the dashboard's header badges.
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Health => "Health",
            Self::Navigation => "Navigation",
            Self::Food => "Food",
            Self::Fitness => "Fitness",
            Self::Safety => "Safety",
            Self::General => "General",
            Self::Ayurveda => "आयुर्वेद",
            Self::Indian => "Indian",
        }
    }
}

impl std::fmt::Display for MessageCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One entry of a conversation transcript. Append-only, scoped to a single
/// session; nothing survives a reload.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatMessage {
    pub id: Uuid,
    pub author: MessageAuthor,
    pub text: String,
    pub timestamp_utc: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<MessageCategory>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language: Option<Language>,
}

impl ChatMessage {
    /// Create a user message
    pub fn user(text: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            author: MessageAuthor::User,
            text: text.into(),
            timestamp_utc: Utc::now(),
            category: None,
            language: None,
        }
    }

    /// Create a bot message tagged with its category and response language
    pub fn bot(text: impl Into<String>, category: MessageCategory, language: Language) -> Self {
        Self {
            id: Uuid::new_v4(),
            author: MessageAuthor::Bot,
            text: text.into(),
            timestamp_utc: Utc::now(),
            category: Some(category),
            language: Some(language),
        }
    }
}
