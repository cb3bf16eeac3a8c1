//! Intent matching: routes a chat message to one canned response category.
//!
//! Categories are tested in a fixed priority order and the first category with
//! any trigger word present wins. A message containing both a greeting and an
//! application trigger is a greeting. Trigger words match as substrings of the
//! normalized text, so "hi" also fires on "this" and "ai" on "said".

use serde::{Deserialize, Serialize};

use crate::intake::normalize::normalize;
use crate::intake::responses::{
    APPLICATION_RESPONSE, DEFAULT_RESPONSE, EXPERIENCE_INQUIRY_RESPONSE, GREETING_RESPONSE,
    HELP_RESPONSE, TECHNICAL_RESPONSE,
};

/// Response category a chat message is classified into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResponseCategory {
    Greeting,
    Application,
    ExperienceInquiry,
    Technical,
    Help,
    Default,
}

impl ResponseCategory {
    /// Evaluation order. `Default` is not listed: it is the fallback.
    pub const PRIORITY: [ResponseCategory; 5] = [
        ResponseCategory::Greeting,
        ResponseCategory::Application,
        ResponseCategory::ExperienceInquiry,
        ResponseCategory::Technical,
        ResponseCategory::Help,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ResponseCategory::Greeting => "greeting",
            ResponseCategory::Application => "application",
            ResponseCategory::ExperienceInquiry => "experience_inquiry",
            ResponseCategory::Technical => "technical",
            ResponseCategory::Help => "help",
            ResponseCategory::Default => "default",
        }
    }

    /// The canned reply sent for this category.
    pub fn template(&self) -> &'static str {
        match self {
            ResponseCategory::Greeting => GREETING_RESPONSE,
            ResponseCategory::Application => APPLICATION_RESPONSE,
            ResponseCategory::ExperienceInquiry => EXPERIENCE_INQUIRY_RESPONSE,
            ResponseCategory::Technical => TECHNICAL_RESPONSE,
            ResponseCategory::Help => HELP_RESPONSE,
            ResponseCategory::Default => DEFAULT_RESPONSE,
        }
    }
}

/// Trigger words per category. Any category omitted from a catalog file
/// keeps its built-in words.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TriggerSets {
    pub greeting: Vec<String>,
    pub application: Vec<String>,
    pub experience_inquiry: Vec<String>,
    pub technical: Vec<String>,
    pub help: Vec<String>,
}

impl Default for TriggerSets {
    fn default() -> Self {
        Self {
            greeting: words(&["hello", "hi", "hey", "start"]),
            application: words(&["apply", "application", "job", "position"]),
            experience_inquiry: words(&["experience", "skills", "background"]),
            technical: words(&["prompt", "engineering", "nlp", "ai"]),
            help: words(&["help", "support", "question"]),
        }
    }
}

impl TriggerSets {
    pub fn for_category(&self, category: ResponseCategory) -> &[String] {
        match category {
            ResponseCategory::Greeting => &self.greeting,
            ResponseCategory::Application => &self.application,
            ResponseCategory::ExperienceInquiry => &self.experience_inquiry,
            ResponseCategory::Technical => &self.technical,
            ResponseCategory::Help => &self.help,
            ResponseCategory::Default => &[],
        }
    }

    /// Iterates every (category, trigger word) pair, in priority order.
    pub fn iter(&self) -> impl Iterator<Item = (ResponseCategory, &str)> {
        ResponseCategory::PRIORITY.into_iter().flat_map(move |category| {
            self.for_category(category)
                .iter()
                .map(move |word| (category, word.as_str()))
        })
    }
}

fn words(list: &[&str]) -> Vec<String> {
    list.iter().map(|w| w.to_string()).collect()
}

/// A classified chat message and the reply to send back.
#[derive(Debug, Clone, PartialEq)]
pub struct Reply {
    pub category: ResponseCategory,
    pub text: &'static str,
}

#[derive(Debug, Clone, Default)]
pub struct IntentMatcher {
    triggers: TriggerSets,
}

impl IntentMatcher {
    pub fn new(triggers: TriggerSets) -> Self {
        Self { triggers }
    }

    /// Returns the first category in priority order whose trigger set has a
    /// word present in the normalized message, or `Default`.
    pub fn classify(&self, raw_text: &str) -> ResponseCategory {
        let text = normalize(raw_text);

        ResponseCategory::PRIORITY
            .into_iter()
            .find(|&category| {
                self.triggers
                    .for_category(category)
                    .iter()
                    .any(|word| text.contains(word.as_str()))
            })
            .unwrap_or(ResponseCategory::Default)
    }

    pub fn respond(&self, raw_text: &str) -> Reply {
        let category = self.classify(raw_text);
        Reply {
            category,
            text: category.template(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn matcher() -> IntentMatcher {
        IntentMatcher::default()
    }

    #[test]
    fn test_hello_there_is_greeting() {
        assert_eq!(matcher().classify("hello there"), ResponseCategory::Greeting);
    }

    #[test]
    fn test_greeting_wins_over_application() {
        assert_eq!(
            matcher().classify("hi, I want to apply"),
            ResponseCategory::Greeting
        );
    }

    #[test]
    fn test_job_requirements_is_application() {
        assert_eq!(
            matcher().classify("what are the job requirements"),
            ResponseCategory::Application
        );
    }

    #[test]
    fn test_background_is_experience_inquiry() {
        assert_eq!(
            matcher().classify("Can you look at my background?"),
            ResponseCategory::ExperienceInquiry
        );
    }

    #[test]
    fn test_nlp_is_technical() {
        assert_eq!(matcher().classify("NLP"), ResponseCategory::Technical);
    }

    #[test]
    fn test_support_is_help() {
        assert_eq!(matcher().classify("need support"), ResponseCategory::Help);
    }

    #[test]
    fn test_unmatched_text_is_default() {
        assert_eq!(matcher().classify("xyz"), ResponseCategory::Default);
        assert_eq!(matcher().classify(""), ResponseCategory::Default);
        assert_eq!(matcher().classify("!!! 123"), ResponseCategory::Default);
    }

    #[test]
    fn test_triggers_match_inside_longer_words() {
        // "this" carries "hi", so the greeting fires before "job".
        assert_eq!(
            matcher().classify("is this job remote"),
            ResponseCategory::Greeting
        );
        assert_eq!(
            matcher().classify("I am experienced"),
            ResponseCategory::ExperienceInquiry
        );
    }

    #[test]
    fn test_matching_uses_normalized_text() {
        assert_eq!(matcher().classify("H.E.L.L.O"), ResponseCategory::Greeting);
        assert_eq!(matcher().classify("JOB?!"), ResponseCategory::Application);
    }

    #[test]
    fn test_respond_returns_category_template() {
        let reply = matcher().respond("need support");
        assert_eq!(reply.category, ResponseCategory::Help);
        assert_eq!(reply.text, HELP_RESPONSE);
    }

    #[test]
    fn test_custom_triggers_replace_builtin_words() {
        let triggers = TriggerSets {
            greeting: vec!["bonjour".to_string()],
            ..TriggerSets::default()
        };
        let m = IntentMatcher::new(triggers);
        assert_eq!(m.classify("bonjour"), ResponseCategory::Greeting);
        assert_eq!(m.classify("hello"), ResponseCategory::Default);
    }

    #[test]
    fn test_priority_excludes_default() {
        assert!(!ResponseCategory::PRIORITY.contains(&ResponseCategory::Default));
        assert_eq!(ResponseCategory::PRIORITY[0], ResponseCategory::Greeting);
    }

    #[test]
    fn test_category_serializes_snake_case() {
        let json = serde_json::to_string(&ResponseCategory::ExperienceInquiry).unwrap();
        assert_eq!(json, r#""experience_inquiry""#);
    }

    #[test]
    fn test_partial_trigger_override_keeps_other_defaults() {
        let triggers: TriggerSets = serde_json::from_str(r#"{"help": ["assist"]}"#).unwrap();
        assert_eq!(triggers.help, vec!["assist".to_string()]);
        assert_eq!(triggers.greeting, TriggerSets::default().greeting);
    }
}
