//! Locale definitions: display languages, scripts, and the country lookup
//!
//! Locale settings are derived deterministically from a country display
//! name. The lookup is an exact, case-sensitive match on the name as
//! returned by the geocoder; anything not in the table falls back to
//! `UTC` / `USD` / English.

use serde::{Deserialize, Serialize};

/// Display languages the dashboard can render in. Serializes as the ISO
/// 639-1 code, which is the tag consumers exchange on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Language {
    #[default]
    #[serde(rename = "en")]
    English,
    #[serde(rename = "hi")]
    Hindi,
    #[serde(rename = "de")]
    German,
    #[serde(rename = "fr")]
    French,
    #[serde(rename = "ja")]
    Japanese,
    #[serde(rename = "zh")]
    Chinese,
    #[serde(rename = "pt")]
    Portuguese,
}

impl Language {
    /// Get ISO 639-1 code
    pub fn code(&self) -> &'static str {
        match self {
            Self::English => "en",
            Self::Hindi => "hi",
            Self::German => "de",
            Self::French => "fr",
            Self::Japanese => "ja",
            Self::Chinese => "zh",
            Self::Portuguese => "pt",
        }
    }

    /// Get human-readable name
    pub fn name(&self) -> &'static str {
        match self {
            Self::English => "English",
            Self::Hindi => "Hindi",
            Self::German => "German",
            Self::French => "French",
            Self::Japanese => "Japanese",
            Self::Chinese => "Chinese",
            Self::Portuguese => "Portuguese",
        }
    }
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Script systems relevant to the assistant's bilingual handling
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Script {
    Latin,
    Devanagari,
}

impl Script {
    /// Get Unicode range for this script (first block only)
    pub fn unicode_range(&self) -> (u32, u32) {
        match self {
            Self::Latin => (0x0000, 0x007F),
            Self::Devanagari => (0x0900, 0x097F),
        }
    }

    /// Check if a character belongs to this script
    pub fn contains_char(&self, c: char) -> bool {
        let code = c as u32;
        let (start, end) = self.unicode_range();
        code >= start && code <= end
    }

    /// Check if any character of the text belongs to this script
    pub fn appears_in(&self, text: &str) -> bool {
        text.chars().any(|c| self.contains_char(c))
    }
}

/// The timezone/currency/language triple associated with a country
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocaleSettings {
    /// IANA timezone name
    pub timezone: String,
    /// ISO 4217 currency code
    pub currency: String,
    /// Display language
    pub language: Language,
}

impl LocaleSettings {
    fn new(timezone: &str, currency: &str, language: Language) -> Self {
        Self {
            timezone: timezone.to_string(),
            currency: currency.to_string(),
            language,
        }
    }

    /// Derive locale settings from a country display name.
    ///
    /// Exact-string match on the name as returned by the geocoder; no
    /// fuzzy matching. Unknown countries (including the empty string and
    /// the `Unknown Country` sentinel) get the UTC/USD/English fallback.
    pub fn for_country(country: &str) -> Self {
        use Language::*;
        match country {
            "India" => Self::new("Asia/Kolkata", "INR", Hindi),
            "United States" => Self::new("America/New_York", "USD", English),
            "United Kingdom" => Self::new("Europe/London", "GBP", English),
            "Canada" => Self::new("America/Toronto", "CAD", English),
            "Australia" => Self::new("Australia/Sydney", "AUD", English),
            "Germany" => Self::new("Europe/Berlin", "EUR", German),
            "France" => Self::new("Europe/Paris", "EUR", French),
            "Japan" => Self::new("Asia/Tokyo", "JPY", Japanese),
            "China" => Self::new("Asia/Shanghai", "CNY", Chinese),
            "Brazil" => Self::new("America/Sao_Paulo", "BRL", Portuguese),
            _ => Self::default(),
        }
    }

    /// Currency symbol used by the dashboard panels for price display
    pub fn currency_symbol(&self) -> &'static str {
        match self.currency.as_str() {
            "INR" => "₹",
            "USD" => "$",
            "GBP" => "£",
            "EUR" => "€",
            "JPY" | "CNY" => "¥",
            "CAD" => "C$",
            "AUD" => "A$",
            "BRL" => "R$",
            _ => "$",
        }
    }
}

impl Default for LocaleSettings {
    fn default() -> Self {
        Self::new("UTC", "USD", Language::English)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_language_code() {
        assert_eq!(Language::Hindi.code(), "hi");
        assert_eq!(Language::English.code(), "en");
        assert_eq!(Language::Portuguese.code(), "pt");
    }

    #[test]
    fn test_locale_table_entries() {
        let india = LocaleSettings::for_country("India");
        assert_eq!(india.timezone, "Asia/Kolkata");
        assert_eq!(india.currency, "INR");
        assert_eq!(india.language, Language::Hindi);

        let us = LocaleSettings::for_country("United States");
        assert_eq!(us.timezone, "America/New_York");
        assert_eq!(us.currency, "USD");
        assert_eq!(us.language, Language::English);

        let japan = LocaleSettings::for_country("Japan");
        assert_eq!(japan.timezone, "Asia/Tokyo");
        assert_eq!(japan.currency, "JPY");
        assert_eq!(japan.language, Language::Japanese);

        let brazil = LocaleSettings::for_country("Brazil");
        assert_eq!(brazil.timezone, "America/Sao_Paulo");
        assert_eq!(brazil.currency, "BRL");
        assert_eq!(brazil.language, Language::Portuguese);
    }

    #[test]
    fn test_unknown_country_falls_back() {
        for country in ["", "Atlantis", "india", "INDIA", "Unknown Country"] {
            let locale = LocaleSettings::for_country(country);
            assert_eq!(locale.timezone, "UTC");
            assert_eq!(locale.currency, "USD");
            assert_eq!(locale.language, Language::English);
        }
    }

    #[test]
    fn test_lookup_is_case_sensitive() {
        // The geocoder returns canonical display names; anything else is
        // treated as unknown rather than fuzzily matched.
        assert_eq!(
            LocaleSettings::for_country("united states"),
            LocaleSettings::default()
        );
    }

    #[test]
    fn test_devanagari_detection() {
        assert!(Script::Devanagari.appears_in("खाना"));
        assert!(Script::Devanagari.appears_in("mixed खाना text"));
        assert!(!Script::Devanagari.appears_in("food"));
        assert!(!Script::Devanagari.appears_in(""));
    }

    #[test]
    fn test_currency_symbols_cover_locale_table() {
        for country in [
            "India",
            "United States",
            "United Kingdom",
            "Canada",
            "Australia",
            "Germany",
            "France",
            "Japan",
            "China",
            "Brazil",
        ] {
            let locale = LocaleSettings::for_country(country);
            assert!(!locale.currency_symbol().is_empty());
        }
        assert_eq!(LocaleSettings::for_country("India").currency_symbol(), "₹");
        assert_eq!(LocaleSettings::for_country("France").currency_symbol(), "€");
    }
}
