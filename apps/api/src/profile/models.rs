use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::catalog::find_question;

/// Value read for a skill rating that has not been answered.
pub const UNANSWERED_SKILL_RATING: f64 = 0.0;

/// Value read for an interest or personality rating that has not been answered.
/// Midpoint of the 1–5 scale; also the starting value of every rating-group slider.
pub const NEUTRAL_TRAIT_RATING: f64 = 3.0;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "snake_case")]
pub enum Section {
    Academic,
    Psychometric,
    Skills,
}

impl Section {
    pub fn as_str(&self) -> &'static str {
        match self {
            Section::Academic => "academic",
            Section::Psychometric => "psychometric",
            Section::Skills => "skills",
        }
    }
}

/// A single answer. The shape depends on the question kind but is never enforced:
/// whatever the rendering layer sends is stored and read back leniently.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum AnswerValue {
    Number(f64),
    Text(String),
    Ratings(Vec<f64>),
    Selections(Vec<String>),
    /// Any other JSON shape. Stored untouched; every reader treats it as unanswered.
    Other(serde_json::Value),
}

impl AnswerValue {
    /// Numeric reading. Numeric text (`"4"`) counts; anything else is `None`.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            AnswerValue::Number(n) => Some(*n),
            AnswerValue::Text(s) => s.trim().parse::<f64>().ok(),
            _ => None,
        }
    }

    pub fn rating_at(&self, index: usize) -> Option<f64> {
        match self {
            AnswerValue::Ratings(values) => values.get(index).copied(),
            _ => None,
        }
    }

    /// Selected options. An empty rating list is indistinguishable from an
    /// empty selection on the wire, so it reads as no selections.
    pub fn selections(&self) -> Vec<String> {
        match self {
            AnswerValue::Selections(options) => options.clone(),
            _ => Vec::new(),
        }
    }
}

/// A structural edit to one question's answer, as issued by the form controls.
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum AnswerUpdate {
    /// Replace the whole answer.
    Set { value: AnswerValue },
    /// Change one position of a rating group.
    Rating { index: usize, value: f64 },
    /// Flip one option of a multi-select.
    Toggle { option: String },
}

/// Answers keyed by section, then question id. Missing keys mean "unanswered".
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Profile {
    pub academic: BTreeMap<String, AnswerValue>,
    pub psychometric: BTreeMap<String, AnswerValue>,
    pub skills: BTreeMap<String, AnswerValue>,
}

impl Profile {
    pub fn section(&self, section: Section) -> &BTreeMap<String, AnswerValue> {
        match section {
            Section::Academic => &self.academic,
            Section::Psychometric => &self.psychometric,
            Section::Skills => &self.skills,
        }
    }

    fn section_mut(&mut self, section: Section) -> &mut BTreeMap<String, AnswerValue> {
        match section {
            Section::Academic => &mut self.academic,
            Section::Psychometric => &mut self.psychometric,
            Section::Skills => &mut self.skills,
        }
    }

    pub fn answer(&self, section: Section, question_id: &str) -> Option<&AnswerValue> {
        self.section(section).get(question_id)
    }

    /// Returns a new profile with only `section.question_id` replaced.
    pub fn with_answer(&self, section: Section, question_id: &str, value: AnswerValue) -> Profile {
        let mut next = self.clone();
        next.section_mut(section)
            .insert(question_id.to_string(), value);
        next
    }

    /// Returns a new profile with one position of a rating group changed.
    ///
    /// An unanswered group starts from all-neutral ratings sized by the catalog,
    /// and a short stored group is padded up to that size. Indices past the end
    /// of the group leave the profile unchanged.
    pub fn with_rating(&self, section: Section, question_id: &str, index: usize, value: f64) -> Profile {
        let catalog_len = find_question(section, question_id)
            .and_then(|q| q.kind.rating_len())
            .unwrap_or(0);
        let mut ratings = match self.answer(section, question_id) {
            Some(AnswerValue::Ratings(existing)) => existing.clone(),
            _ => Vec::new(),
        };
        let group_len = catalog_len.max(ratings.len());
        if index >= group_len {
            warn!(
                section = section.as_str(),
                question_id,
                index,
                group_len,
                "ignoring rating index outside the group"
            );
            return self.clone();
        }
        ratings.resize(group_len, NEUTRAL_TRAIT_RATING);
        ratings[index] = value;
        self.with_answer(section, question_id, AnswerValue::Ratings(ratings))
    }

    /// Returns a new profile with `option` added to, or removed from, a multi-select.
    pub fn with_toggled_option(&self, section: Section, question_id: &str, option: &str) -> Profile {
        let mut selected = self
            .answer(section, question_id)
            .map(AnswerValue::selections)
            .unwrap_or_default();
        if selected.iter().any(|o| o == option) {
            selected.retain(|o| o != option);
        } else {
            selected.push(option.to_string());
        }
        self.with_answer(section, question_id, AnswerValue::Selections(selected))
    }

    pub fn apply(&self, section: Section, question_id: &str, update: AnswerUpdate) -> Profile {
        match update {
            AnswerUpdate::Set { value } => self.with_answer(section, question_id, value),
            AnswerUpdate::Rating { index, value } => {
                self.with_rating(section, question_id, index, value)
            }
            AnswerUpdate::Toggle { option } => {
                self.with_toggled_option(section, question_id, &option)
            }
        }
    }

    /// Self-assessed skill rating, `UNANSWERED_SKILL_RATING` when missing or unreadable.
    pub fn skill_rating(&self, question_id: &str) -> f64 {
        self.answer(Section::Skills, question_id)
            .and_then(AnswerValue::as_number)
            .unwrap_or(UNANSWERED_SKILL_RATING)
    }

    /// One position of a psychometric rating group, `NEUTRAL_TRAIT_RATING` when missing.
    pub fn trait_rating(&self, question_id: &str, index: usize) -> f64 {
        self.answer(Section::Psychometric, question_id)
            .and_then(|v| v.rating_at(index))
            .unwrap_or(NEUTRAL_TRAIT_RATING)
    }
}
