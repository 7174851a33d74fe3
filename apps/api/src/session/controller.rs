#![allow(dead_code)]

//! Session controller. Owns one user's application state.
//!
//! Every mutation goes through a method here. Each method either completes a
//! whole transition or leaves the session untouched; nothing is half-applied.
//! Rendering reads a `SessionSnapshot`, never the live struct.

use std::collections::BTreeMap;
use std::sync::Arc;
use std::time::Duration;

use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::catalog::default_user_skills;
use crate::chat::{ChatLog, ChatResponder, Speaker};
use crate::guidance::{selectors_for, skill_gap_for, LearningPathway, PortfolioProject, SkillGapReport};
use crate::profile::{compute_genome, AnswerUpdate, CareerGenome, Profile, Section};
use crate::session::navigation::{Screen, Trigger};
use crate::session::store::SharedSession;

#[derive(Debug, Clone)]
pub struct Session {
    id: Uuid,
    created_at: DateTime<Utc>,
    screen: Screen,
    profile: Profile,
    genome: Option<CareerGenome>,
    selected_career: Option<String>,
    user_skills: BTreeMap<String, u8>,
    learning_pathway: Option<LearningPathway>,
    portfolio_projects: Vec<PortfolioProject>,
    chat: ChatLog,
}

/// Read-only view handed to the rendering layer.
#[derive(Debug, Clone, Serialize)]
pub struct SessionSnapshot {
    pub session_id: Uuid,
    pub created_at: DateTime<Utc>,
    pub screen: Screen,
    pub profile: Profile,
    pub genome: Option<CareerGenome>,
    pub selected_career: Option<String>,
    pub user_skills: BTreeMap<String, u8>,
    pub learning_pathway: Option<LearningPathway>,
    pub portfolio_projects: Vec<PortfolioProject>,
    pub chat: ChatLog,
}

impl Session {
    pub fn new(id: Uuid) -> Self {
        Self {
            id,
            created_at: Utc::now(),
            screen: Screen::default(),
            profile: Profile::default(),
            genome: None,
            selected_career: None,
            user_skills: default_user_skills(),
            learning_pathway: None,
            portfolio_projects: Vec::new(),
            chat: ChatLog::new(),
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn screen(&self) -> Screen {
        self.screen
    }

    pub fn genome(&self) -> Option<&CareerGenome> {
        self.genome.as_ref()
    }

    pub fn selected_career(&self) -> Option<&str> {
        self.selected_career.as_deref()
    }

    pub fn profile(&self) -> &Profile {
        &self.profile
    }

    pub fn chat(&self) -> &ChatLog {
        &self.chat
    }

    /// Moves to the trigger's target screen, or logs and stays put.
    fn advance(&mut self, trigger: Trigger) -> Option<Screen> {
        match self.screen.next(trigger) {
            Some(to) => {
                info!(session = %self.id, from = ?self.screen, ?to, ?trigger, "screen transition");
                self.screen = to;
                Some(to)
            }
            None => {
                warn!(session = %self.id, screen = ?self.screen, ?trigger, "ignoring trigger not valid from current screen");
                None
            }
        }
    }

    /// Applies one answer edit. The rest of the profile is carried over unchanged.
    pub fn update_answer(&mut self, section: Section, question_id: &str, update: AnswerUpdate) {
        self.profile = self.profile.apply(section, question_id, update);
    }

    /// Computes the genome from the current answers and opens the dashboard.
    /// Returns `false` (and changes nothing) unless the quiz screen is active.
    pub fn submit_quiz(&mut self) -> bool {
        let genome = compute_genome(&self.profile);
        if self.advance(Trigger::SubmitQuiz).is_none() {
            return false;
        }
        for (axis, score) in genome.axes() {
            debug!(session = %self.id, ?axis, score, "career genome axis");
        }
        self.genome = Some(genome);
        true
    }

    /// Selects a career for the skill-gap view, replacing any previous choice
    /// along with its pathway and portfolio.
    pub fn select_career(&mut self, career: &str) -> bool {
        if self.advance(Trigger::SelectCareer).is_none() {
            return false;
        }
        let (pathway, projects) = selectors_for(career);
        self.selected_career = Some(career.to_string());
        self.learning_pathway = Some(pathway);
        self.portfolio_projects = projects;
        true
    }

    /// Fires a payload-free navigation trigger.
    pub fn navigate(&mut self, trigger: Trigger) -> bool {
        if !trigger.is_plain_navigation() {
            warn!(session = %self.id, ?trigger, "trigger requires a payload, use its dedicated operation");
            return false;
        }
        self.advance(trigger).is_some()
    }

    /// Appends a user message. Blank input is dropped and returns `false`.
    pub fn post_user_message(&mut self, text: &str) -> bool {
        if text.trim().is_empty() {
            return false;
        }
        self.chat.push(Speaker::User, text);
        true
    }

    pub fn post_bot_reply(&mut self, text: String) {
        self.chat.push(Speaker::Bot, text);
    }

    /// Skill gaps for the selected career, if one has been picked.
    pub fn skill_gap(&self) -> Option<SkillGapReport> {
        self.selected_career
            .as_deref()
            .map(|career| skill_gap_for(career, &self.user_skills))
    }

    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            session_id: self.id,
            created_at: self.created_at,
            screen: self.screen,
            profile: self.profile.clone(),
            genome: self.genome,
            selected_career: self.selected_career.clone(),
            user_skills: self.user_skills.clone(),
            learning_pathway: self.learning_pathway.clone(),
            portfolio_projects: self.portfolio_projects.clone(),
            chat: self.chat.clone(),
        }
    }
}

/// Posts a user chat message and schedules the bot's reply after `delay`.
///
/// The user message lands before this returns. The reply is an independent
/// task, so two messages sent within one delay window may have their replies
/// interleave; each reply still follows its own user message.
pub async fn send_chat_message(
    session: SharedSession,
    responder: Arc<dyn ChatResponder>,
    delay: Duration,
    text: String,
) -> bool {
    let accepted = session.write().await.post_user_message(&text);
    if !accepted {
        debug!("ignoring blank chat message");
        return false;
    }

    let reply = responder.respond(&text);
    debug!(delay_ms = delay.as_millis() as u64, "scheduling bot reply");

    tokio::spawn(async move {
        tokio::time::sleep(delay).await;
        session.write().await.post_bot_reply(reply);
    });

    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chat::KeywordResponder;
    use crate::profile::AnswerValue;
    use tokio::sync::RwLock;

    fn on_dashboard() -> Session {
        let mut session = Session::new(Uuid::new_v4());
        assert!(session.submit_quiz());
        session
    }

    #[test]
    fn test_new_session_state() {
        let session = Session::new(Uuid::new_v4());
        assert_eq!(session.screen(), Screen::Onboarding);
        assert!(session.genome().is_none());
        assert!(session.selected_career().is_none());
        assert_eq!(session.chat().len(), 1);
        let snap = session.snapshot();
        assert!(snap.learning_pathway.is_none());
        assert!(snap.portfolio_projects.is_empty());
        assert_eq!(snap.user_skills.len(), 14);
    }

    #[test]
    fn test_submit_computes_genome_and_opens_dashboard() {
        let mut session = Session::new(Uuid::new_v4());
        session.update_answer(
            Section::Skills,
            "python",
            AnswerUpdate::Set {
                value: AnswerValue::Number(5.0),
            },
        );
        assert!(session.submit_quiz());
        assert_eq!(session.screen(), Screen::Dashboard);
        let genome = session.genome().copied().unwrap();
        assert_eq!(genome, compute_genome(session.profile()));
    }

    #[test]
    fn test_submit_outside_onboarding_keeps_genome() {
        let mut session = on_dashboard();
        let before = session.genome().copied();
        session.update_answer(
            Section::Skills,
            "python",
            AnswerUpdate::Set {
                value: AnswerValue::Number(5.0),
            },
        );
        assert!(!session.submit_quiz());
        assert_eq!(session.genome().copied(), before);
        assert_eq!(session.screen(), Screen::Dashboard);
    }

    #[test]
    fn test_resubmission_overwrites_genome() {
        let mut session = on_dashboard();
        let first = session.genome().copied().unwrap();

        assert!(session.navigate(Trigger::RetakeQuiz));
        session.update_answer(
            Section::Skills,
            "problemSolving",
            AnswerUpdate::Set {
                value: AnswerValue::Number(4.0),
            },
        );
        assert!(session.submit_quiz());
        let second = session.genome().copied().unwrap();
        assert_ne!(first.analytical, second.analytical);
    }

    #[test]
    fn test_select_career_always_lands_on_skill_gap() {
        let mut session = on_dashboard();
        for career in ["Data Scientist", "UX Designer", "Astronaut", "Data Scientist"] {
            assert!(session.select_career(career));
            assert_eq!(session.screen(), Screen::SkillGap);
            assert_eq!(session.selected_career(), Some(career));
            assert!(session.navigate(Trigger::BackToDashboard));
        }
    }

    #[test]
    fn test_select_career_replaces_pathway_and_portfolio() {
        let mut session = on_dashboard();
        session.select_career("Data Scientist");
        let snap = session.snapshot();
        assert_eq!(snap.learning_pathway.as_ref().map(Vec::len), Some(2));
        assert_eq!(snap.portfolio_projects.len(), 2);

        session.navigate(Trigger::BackToDashboard);
        session.select_career("Product Manager");
        let snap = session.snapshot();
        assert_eq!(snap.learning_pathway.as_ref().map(Vec::len), Some(1));
        assert!(snap.portfolio_projects.is_empty());
    }

    #[test]
    fn test_select_career_from_onboarding_is_ignored() {
        let mut session = Session::new(Uuid::new_v4());
        assert!(!session.select_career("Data Scientist"));
        assert_eq!(session.screen(), Screen::Onboarding);
        assert!(session.selected_career().is_none());
        assert!(session.snapshot().learning_pathway.is_none());
    }

    #[test]
    fn test_navigate_rejects_payload_triggers() {
        let mut session = on_dashboard();
        assert!(!session.navigate(Trigger::SelectCareer));
        assert!(!session.navigate(Trigger::SubmitQuiz));
        assert_eq!(session.screen(), Screen::Dashboard);
    }

    #[test]
    fn test_navigate_invalid_trigger_keeps_screen() {
        let mut session = on_dashboard();
        assert!(session.navigate(Trigger::OpenChat));
        assert!(!session.navigate(Trigger::OpenPortfolio));
        assert_eq!(session.screen(), Screen::Chatbot);
    }

    #[test]
    fn test_skill_gap_follows_selection() {
        let mut session = on_dashboard();
        assert!(session.skill_gap().is_none());
        session.select_career("UX Designer");
        let report = session.skill_gap().unwrap();
        assert_eq!(report.career, "UX Designer");
        assert_eq!(report.skills.len(), 4);
    }

    #[tokio::test(start_paused = true)]
    async fn test_chat_reply_arrives_after_delay() {
        let session: SharedSession = Arc::new(RwLock::new(Session::new(Uuid::new_v4())));
        let delay = Duration::from_millis(1000);

        let accepted = send_chat_message(
            session.clone(),
            Arc::new(KeywordResponder),
            delay,
            "Tell me about career options".to_string(),
        )
        .await;
        assert!(accepted);

        {
            let guard = session.read().await;
            let messages = guard.chat().messages();
            assert_eq!(messages.len(), 2);
            assert_eq!(messages[1].speaker, Speaker::User);
        }

        tokio::time::sleep(delay + Duration::from_millis(10)).await;
        tokio::task::yield_now().await;

        let guard = session.read().await;
        let messages = guard.chat().messages();
        assert_eq!(messages.len(), 3);
        assert_eq!(messages[2].speaker, Speaker::Bot);
        assert!(messages[2].text.contains("Data Scientist"));
    }

    #[tokio::test(start_paused = true)]
    async fn test_blank_chat_message_is_dropped() {
        let session: SharedSession = Arc::new(RwLock::new(Session::new(Uuid::new_v4())));
        let accepted = send_chat_message(
            session.clone(),
            Arc::new(KeywordResponder),
            Duration::from_millis(1000),
            "   ".to_string(),
        )
        .await;
        assert!(!accepted);

        tokio::time::sleep(Duration::from_millis(2000)).await;
        assert_eq!(session.read().await.chat().len(), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_each_reply_follows_its_user_message() {
        let session: SharedSession = Arc::new(RwLock::new(Session::new(Uuid::new_v4())));
        let responder: Arc<dyn ChatResponder> = Arc::new(KeywordResponder);
        let delay = Duration::from_millis(1000);

        send_chat_message(session.clone(), responder.clone(), delay, "career?".into()).await;
        send_chat_message(session.clone(), responder.clone(), delay, "xyz".into()).await;

        tokio::time::sleep(delay * 2).await;
        tokio::task::yield_now().await;

        let guard = session.read().await;
        let speakers: Vec<Speaker> = guard.chat().messages().iter().map(|m| m.speaker).collect();
        // both user messages are posted before either reply
        assert_eq!(
            speakers,
            vec![Speaker::Bot, Speaker::User, Speaker::User, Speaker::Bot, Speaker::Bot]
        );
    }
}
