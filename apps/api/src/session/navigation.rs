//! Screen navigation.
//!
//! Transitions are user-triggered only. `Screen::next` is the single source of
//! truth for which trigger is valid from which screen; anything not listed
//! leaves the screen where it is.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub enum Screen {
    #[default]
    Onboarding,
    Dashboard,
    SkillGap,
    Chatbot,
    Portfolio,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Trigger {
    SubmitQuiz,
    SelectCareer,
    OpenChat,
    OpenPortfolio,
    BackToDashboard,
    RetakeQuiz,
}

impl Trigger {
    /// Triggers with no payload, fired directly by navigation buttons.
    pub fn is_plain_navigation(&self) -> bool {
        matches!(
            self,
            Trigger::OpenChat | Trigger::OpenPortfolio | Trigger::BackToDashboard | Trigger::RetakeQuiz
        )
    }
}

impl Screen {
    pub fn next(self, trigger: Trigger) -> Option<Screen> {
        use Screen::*;
        use Trigger::*;

        match (self, trigger) {
            (Onboarding, SubmitQuiz) => Some(Dashboard),
            (Dashboard, SelectCareer) => Some(SkillGap),
            (Dashboard, OpenChat) => Some(Chatbot),
            (Dashboard, OpenPortfolio) => Some(Portfolio),
            (Dashboard, RetakeQuiz) => Some(Onboarding),
            (SkillGap | Chatbot | Portfolio, BackToDashboard) => Some(Dashboard),
            _ => None,
        }
    }
}
