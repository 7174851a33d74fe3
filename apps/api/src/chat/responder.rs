//! Keyword chat responder.
//!
//! Rules are checked in a fixed order against the lowercased input and the
//! first substring hit wins. `AppState` carries an `Arc<dyn ChatResponder>`
//! so the scripted backend can be swapped without touching handlers.

use crate::catalog::career_matches;

pub const FALLBACK_REPLY: &str =
    "Sorry, I didn't understand that. Try asking about career matches or skill gaps.";

/// What a chat message was recognised as asking for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChatIntent {
    CareerMatches,
    DataScientistRole,
    BecomePathway,
    MockInterview,
    Unknown,
}

/// Ordered keyword rules. Earlier entries take priority.
const RULES: &[(&str, ChatIntent)] = &[
    ("career", ChatIntent::CareerMatches),
    ("data scientist", ChatIntent::DataScientistRole),
    ("how do i become", ChatIntent::BecomePathway),
    ("mock interview", ChatIntent::MockInterview),
];

impl ChatIntent {
    pub fn classify(input: &str) -> Self {
        let lower = input.to_lowercase();
        RULES
            .iter()
            .find(|(keyword, _)| lower.contains(keyword))
            .map(|(_, intent)| *intent)
            .unwrap_or(ChatIntent::Unknown)
    }

    pub fn reply(&self) -> String {
        match self {
            ChatIntent::CareerMatches => {
                let titles: Vec<&str> = career_matches().iter().map(|c| c.title).collect();
                format!(
                    "Based on your profile, your top career matches are: {}. You can select one to see skill gaps.",
                    titles.join(", ")
                )
            }
            ChatIntent::DataScientistRole => "A Data Scientist analyzes data to extract insights. Key skills include Python, Machine Learning, and Statistics.".to_string(),
            ChatIntent::BecomePathway => "To become a UX Designer, focus on learning user research, prototyping, and visual design. I can generate a learning pathway for you.".to_string(),
            ChatIntent::MockInterview => {
                "Let's start a mock interview. Tell me why you want this role.".to_string()
            }
            ChatIntent::Unknown => FALLBACK_REPLY.to_string(),
        }
    }
}

pub trait ChatResponder: Send + Sync {
    fn respond(&self, input: &str) -> String;
}

/// Scripted responder driven by `RULES`. Pure and deterministic.
pub struct KeywordResponder;

impl ChatResponder for KeywordResponder {
    fn respond(&self, input: &str) -> String {
        ChatIntent::classify(input).reply()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_career_rule_ignores_case_and_surrounding_words() {
        let reply = KeywordResponder.respond("Tell me about CAREER options");
        assert_eq!(
            reply,
            "Based on your profile, your top career matches are: Data Scientist, Product Manager, UX Designer. You can select one to see skill gaps."
        );
        assert_eq!(
            ChatIntent::classify("Tell me about career options"),
            ChatIntent::CareerMatches
        );
    }

    #[test]
    fn test_unknown_input_falls_back() {
        assert_eq!(KeywordResponder.respond("xyz"), FALLBACK_REPLY);
        assert_eq!(KeywordResponder.respond(""), FALLBACK_REPLY);
    }

    #[test]
    fn test_first_rule_wins() {
        // mentions both "career" and "data scientist"
        assert_eq!(
            ChatIntent::classify("Is data scientist a good career?"),
            ChatIntent::CareerMatches
        );
        assert_eq!(
            ChatIntent::classify("What does a Data Scientist do?"),
            ChatIntent::DataScientistRole
        );
    }

    #[test]
    fn test_remaining_rules() {
        assert_eq!(
            ChatIntent::classify("How do I become a designer?"),
            ChatIntent::BecomePathway
        );
        assert_eq!(
            ChatIntent::classify("can we do a Mock Interview"),
            ChatIntent::MockInterview
        );
        assert!(KeywordResponder
            .respond("mock interview please")
            .starts_with("Let's start a mock interview"));
    }
}
