//! The ordered intent rule table and canned bilingual responses
//!
//! Rules are evaluated top to bottom with short-circuit on first match.
//! The order is load-bearing: an input containing keywords of several
//! rules (e.g. an ayurvedic remedy question mentioning the monsoon) must
//! resolve to the earliest rule, so reordering entries changes observable
//! behavior. The final entry has no keywords and matches unconditionally,
//! which is what makes classification total.

use serde::Serialize;

use vita_path_core::MessageCategory;

/// One keyword rule with its bilingual response pair.
///
/// Keywords are matched as substrings of the lowercased input and cover
/// both scripts; which half of the response pair is returned is decided
/// separately by script detection.
pub struct IntentRule {
    pub category: MessageCategory,
    pub keywords: &'static [&'static str],
    pub english_response: &'static str,
    pub hindi_response: &'static str,
}

impl IntentRule {
    /// Check this rule against an already-lowercased input. A rule with
    /// no keywords matches everything.
    pub fn matches(&self, lowered_input: &str) -> bool {
        self.keywords.is_empty()
            || self
                .keywords
                .iter()
                .any(|keyword| lowered_input.contains(keyword))
    }
}

/// The greeting seeded into every new conversation transcript.
pub const GREETING: &str = "नमस्ते! I'm your AI health and lifestyle assistant. मैं आपकी मदद कर सकता हूं with meal suggestions, navigation, safety tips, Ayurvedic remedies, and more. आप हिंदी या English में बात कर सकते हैं। What would you like to know?";

const FOOD_EN: &str = "Based on your health profile and Indian preferences, I recommend:\n\n🥗 Dal-Rice with mixed vegetables and curd\n🍛 Quinoa upma with coconut chutney\n🥙 Roti with palak paneer\n🍲 Sambar with idli\n\nThese provide complete proteins, fiber, and essential vitamins. Would you like a specific recipe?";

const FOOD_HI: &str = "आपके स्वास्थ्य प्रोफाइल के अनुसार, मैं सुझाता हूं:\n\n🥗 दाल-चावल with सब्जी और दही\n🍛 क्विनोआ उपमा with नारियल चटनी\n🥙 रोटी with पालक पनीर\n🍲 सांभर with इडली\n\nये सभी प्रोटीन, फाइबर और विटामिन से भरपूर हैं। क्या आप किसी specific recipe के बारे में जानना चाहते हैं?";

const AYURVEDA_EN: &str = "Ayurvedic recommendations:\n\n🌿 For heat: Coconut water, amla juice, mint\n🍯 For digestion: Ajwain, hing, cumin water\n🧘 For stress: Ashwagandha, brahmi, yoga\n🌱 For immunity: Tulsi, giloy, turmeric\n\nPlease consult an Ayurvedic doctor before taking any herbs.";

const AYURVEDA_HI: &str = "आयुर्वेदिक सुझाव:\n\n🌿 गर्मी के लिए: नारियल पानी, आंवला जूस, पुदीना\n🍯 पाचन के लिए: अजवाइन, हींग, जीरा पानी\n🧘 तनाव के लिए: अश्वगंधा, ब्राह्मी, योग\n🌱 रोग प्रतिरोधक क्षमता: तुलसी, गिलोय, हल्दी\n\nकृपया किसी भी जड़ी-बूटी का सेवन करने से पहले आयुर्वेदिक डॉक्टर से सलाह लें।";

const NAVIGATION_EN: &str = "Mumbai traffic suggestions:\n\n🚇 Use Metro/Local trains (avoid 9-11 AM, 4-7 PM rush)\n🛣️ Take Link Road instead of SV Road\n⏰ Avoid rush hours (8-11 AM, 6-9 PM)\n📱 Check live traffic before leaving\n🏍️ Bike taxi for short distances\n\nWhich specific route do you need?";

const NAVIGATION_HI: &str = "मुंबई ट्रैफिक के लिए सुझाव:\n\n🚇 मेट्रो/लोकल ट्रेन का उपयोग करें (9-11 AM, 4-7 PM में भीड़ से बचें)\n🛣️ SV Road की बजाय Link Road का उपयोग करें\n⏰ Rush hours (8-11 AM, 6-9 PM) से बचें\n📱 निकलने से पहले live traffic देखें\n🏍️ छोटी दूरी के लिए bike taxi\n\nकौन सा specific route चाहिए?";

const SAFETY_EN: &str = "Women safety tips:\n\n🚨 Emergency numbers: 100 (Police), 1091 (Women Helpline)\n📱 Share live location with family\n🌃 Stick to well-lit areas at night\n👥 Prefer crowded places\n🚗 Use trusted cab services\n📞 Use fake call feature when needed\n\nKeep panic button always ready!";

const SAFETY_HI: &str = "महिला सुरक्षा सुझाव:\n\n🚨 Emergency numbers: 100 (Police), 1091 (Women Helpline)\n📱 Location sharing family के साथ करें\n🌃 रात में well-lit areas में चलें\n👥 Crowded places prefer करें\n🚗 Trusted cab services का उपयोग करें\n📞 Fake call feature का उपयोग करें\n\nPanic button हमेशा ready रखें!";

const MONSOON_EN: &str = "Monsoon health tips:\n\n☔ Avoid getting wet in rain\n🦠 Boost immunity with turmeric milk\n🏠 Do indoor exercises: yoga, stretching\n🍲 Eat warm food, avoid street food\n💧 Drink boiled water\n👕 Wear dry clothes\n\nAvoid waterlogged areas!";

const MONSOON_HI: &str = "मानसून स्वास्थ्य सुझाव:\n\n☔ बारिश में भीगने से बचें\n🦠 Immunity बढ़ाने के लिए हल्दी दूध पिएं\n🏠 Indoor exercises करें: yoga, stretching\n🍲 गर्म खाना खाएं, street food से बचें\n💧 Boiled water पिएं\n👕 सूखे कपड़े पहनें\n\nWaterlogging areas से बचें!";

const GENERAL_EN: &str = "I'm here to help you with:\n\n🍽️ Healthy Indian meal suggestions\n🏃 Exercise and fitness routines\n🗺️ Safe routes in Mumbai\n🌿 Ayurvedic remedies\n👩 Women safety tips\n🌧️ Monsoon health advice\n\nWhat specific area would you like assistance with?";

const GENERAL_HI: &str = "मैं आपकी मदद करने के लिए यहां हूं! आप मुझसे पूछ सकते हैं:\n\n🍽️ भारतीय स्वस्थ भोजन के बारे में\n🏃 व्यायाम और फिटनेस\n🗺️ मुंबई में सुरक्षित रास्ते\n🌿 आयुर्वेदिक उपचार\n👩 महिला सुरक्षा\n🌧️ मानसून स्वास्थ्य\n\nआप किस बारे में जानना चाहते हैं?";

/// The rule table, highest priority first. The trailing general rule is
/// the unconditional catch-all.
pub static RULES: [IntentRule; 6] = [
    IntentRule {
        category: MessageCategory::Food,
        keywords: &["meal", "food", "खाना", "भोजन"],
        english_response: FOOD_EN,
        hindi_response: FOOD_HI,
    },
    IntentRule {
        category: MessageCategory::Ayurveda,
        keywords: &["ayurved", "आयुर्वेद", "remedy", "उपाय"],
        english_response: AYURVEDA_EN,
        hindi_response: AYURVEDA_HI,
    },
    IntentRule {
        category: MessageCategory::Navigation,
        keywords: &["route", "traffic", "रास्ता", "ट्रैफिक"],
        english_response: NAVIGATION_EN,
        hindi_response: NAVIGATION_HI,
    },
    IntentRule {
        category: MessageCategory::Safety,
        keywords: &["safety", "women", "सुरक्षा", "महिला"],
        english_response: SAFETY_EN,
        hindi_response: SAFETY_HI,
    },
    IntentRule {
        category: MessageCategory::Health,
        keywords: &["monsoon", "rain", "मानसून", "बारिश"],
        english_response: MONSOON_EN,
        hindi_response: MONSOON_HI,
    },
    IntentRule {
        category: MessageCategory::General,
        keywords: &[],
        english_response: GENERAL_EN,
        hindi_response: GENERAL_HI,
    },
];

/// A canned prompt the client can offer as a one-tap shortcut.
#[derive(Debug, Clone, Serialize)]
pub struct QuickAction {
    pub label: &'static str,
    pub hindi_label: &'static str,
    pub category: MessageCategory,
}

/// Shortcut prompts shown above the chat input.
pub static QUICK_ACTIONS: [QuickAction; 5] = [
    QuickAction {
        label: "Suggest healthy Indian meal",
        hindi_label: "स्वस्थ भारतीय भोजन सुझाएं",
        category: MessageCategory::Food,
    },
    QuickAction {
        label: "Plan workout for monsoon",
        hindi_label: "मानसून के लिए व्यायाम योजना",
        category: MessageCategory::Fitness,
    },
    QuickAction {
        label: "Safe route in Mumbai traffic",
        hindi_label: "मुंबई ट्रैफिक में सुरक्षित रास्ता",
        category: MessageCategory::Navigation,
    },
    QuickAction {
        label: "Ayurvedic remedy for heat",
        hindi_label: "गर्मी के लिए आयुर्वेदिक उपाय",
        category: MessageCategory::Ayurveda,
    },
    QuickAction {
        label: "Women safety tips",
        hindi_label: "महिला सुरक्षा सुझाव",
        category: MessageCategory::Safety,
    },
];
