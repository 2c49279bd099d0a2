//! Deterministic intent classification
//!
//! `classify` is a total function over all string inputs: the rule table
//! ends with an unconditional catch-all, so there is no "no match" error
//! path by construction.

use serde::Serialize;

use vita_path_core::{Language, MessageCategory, Script};

use crate::rules::{IntentRule, RULES};

/// The classifier's verdict for one utterance.
#[derive(Debug, Clone, Serialize)]
pub struct ClassifiedReply {
    pub category: MessageCategory,
    /// Language of the returned body, decided by script detection
    pub language: Language,
    pub body: &'static str,
}

/// Keyword-matching intent classifier. Stateless: every call is pure in
/// its input, so concurrent sessions need no synchronization here.
#[derive(Default)]
pub struct IntentClassifier;

impl IntentClassifier {
    pub fn new() -> Self {
        Self
    }

    /// Detect the response language: Hindi iff the text contains any
    /// Devanagari codepoint. This picks which half of the bilingual
    /// response is returned; rule matching itself checks keywords in both
    /// scripts regardless.
    pub fn detect_language(text: &str) -> Language {
        if Script::Devanagari.appears_in(text) {
            Language::Hindi
        } else {
            Language::English
        }
    }

    /// Find the first rule matching the input. Latin-script comparison is
    /// case-insensitive via lowercasing; Devanagari has no case.
    pub fn classify(&self, text: &str) -> &'static IntentRule {
        let lowered = text.to_lowercase();
        RULES
            .iter()
            .find(|rule| rule.matches(&lowered))
            .unwrap_or_else(|| &RULES[RULES.len() - 1])
    }

    /// Compose the reply for an utterance.
    pub fn respond(&self, text: &str) -> ClassifiedReply {
        let rule = self.classify(text);
        let language = Self::detect_language(text);
        let body = match language {
            Language::Hindi => rule.hindi_response,
            _ => rule.english_response,
        };

        tracing::debug!(
            category = %rule.category,
            language = %language.code(),
            "Classified utterance"
        );
        metrics::counter!("chat_turns_total", "category" => rule.category.as_str()).increment(1);

        ClassifiedReply {
            category: rule.category,
            language,
            body,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn classifier() -> IntentClassifier {
        IntentClassifier::new()
    }

    #[test]
    fn test_detect_language() {
        assert_eq!(IntentClassifier::detect_language("food"), Language::English);
        assert_eq!(IntentClassifier::detect_language(""), Language::English);
        assert_eq!(IntentClassifier::detect_language("खाना"), Language::Hindi);
        assert_eq!(
            IntentClassifier::detect_language("suggest खाना please"),
            Language::Hindi
        );
    }

    #[test]
    fn test_english_classifications() {
        let c = classifier();
        assert_eq!(c.classify("I want a healthy meal").category, MessageCategory::Food);
        assert_eq!(
            c.classify("best route avoiding traffic").category,
            MessageCategory::Navigation
        );
        assert_eq!(
            c.classify("women safety tips at night").category,
            MessageCategory::Safety
        );
        assert_eq!(
            c.classify("random unrelated gibberish xyz").category,
            MessageCategory::General
        );
    }

    #[test]
    fn test_hindi_classification_returns_hindi_body() {
        let c = classifier();
        let reply = c.respond("मुझे आयुर्वेदिक उपाय चाहिए");
        assert_eq!(reply.category, MessageCategory::Ayurveda);
        assert_eq!(reply.language, Language::Hindi);
        assert!(reply.body.starts_with("आयुर्वेदिक"));
    }

    #[test]
    fn test_priority_order_resolves_ambiguous_input() {
        let c = classifier();
        // Contains both an ayurveda keyword and a monsoon keyword; the
        // earlier rule must win.
        let reply = c.respond("ayurvedic remedy during monsoon");
        assert_eq!(reply.category, MessageCategory::Ayurveda);
        assert_eq!(reply.language, Language::English);
    }

    #[test]
    fn test_matching_is_case_insensitive() {
        let c = classifier();
        assert_eq!(c.classify("MEAL PLAN PLEASE").category, MessageCategory::Food);
        assert_eq!(c.classify("Women Safety").category, MessageCategory::Safety);
    }

    #[test]
    fn test_total_over_all_inputs() {
        let c = classifier();
        for input in ["", " ", "\n", "🙂", "ठीक"] {
            let reply = c.respond(input);
            assert_eq!(reply.category, MessageCategory::General);
            assert!(!reply.body.is_empty());
        }
    }

    #[test]
    fn test_script_detection_does_not_affect_matching() {
        let c = classifier();
        // Devanagari keyword in an otherwise Latin sentence still matches
        // the food rule, and the reply comes back in Hindi.
        let reply = c.respond("please suggest भोजन for tonight");
        assert_eq!(reply.category, MessageCategory::Food);
        assert_eq!(reply.language, Language::Hindi);
    }
}
