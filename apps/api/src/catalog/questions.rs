//! Onboarding questionnaire catalog.
//!
//! The profile only ever holds answers for question ids declared here.

use serde::Serialize;

use crate::profile::models::Section;

pub const RIASEC_LABELS: [&str; 6] = [
    "Realistic",
    "Investigative",
    "Artistic",
    "Social",
    "Enterprising",
    "Conventional",
];

pub const BIG_FIVE_LABELS: [&str; 5] = [
    "Openness",
    "Conscientiousness",
    "Extraversion",
    "Agreeableness",
    "Neuroticism",
];

pub const VALUE_OPTIONS: [&str; 4] = [
    "Autonomy",
    "Work-life balance",
    "High income",
    "Social impact",
];

/// Input control a question is answered with.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum QuestionKind {
    Text,
    Number,
    /// Single 1–5 rating.
    Range,
    /// Fixed-length group of 1–5 ratings, one per label.
    RatingGroup { labels: &'static [&'static str] },
    Checkbox { options: &'static [&'static str] },
}

impl QuestionKind {
    /// Number of positions in a rating group, `None` for every other kind.
    pub fn rating_len(&self) -> Option<usize> {
        match self {
            QuestionKind::RatingGroup { labels } => Some(labels.len()),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct QuizQuestion {
    pub id: &'static str,
    pub text: &'static str,
    pub kind: QuestionKind,
}

#[derive(Debug, Clone, Serialize)]
pub struct QuizSection {
    pub id: Section,
    pub title: &'static str,
    pub questions: Vec<QuizQuestion>,
}

pub fn quiz_sections() -> Vec<QuizSection> {
    vec![
        QuizSection {
            id: Section::Academic,
            title: "Academic Background",
            questions: vec![
                QuizQuestion {
                    id: "field",
                    text: "What is your field of study?",
                    kind: QuestionKind::Text,
                },
                QuizQuestion {
                    id: "gpa",
                    text: "What is your GPA?",
                    kind: QuestionKind::Number,
                },
                QuizQuestion {
                    id: "courses",
                    text: "List relevant courses/projects",
                    kind: QuestionKind::Text,
                },
            ],
        },
        QuizSection {
            id: Section::Psychometric,
            title: "Psychometric Evaluation",
            questions: vec![
                QuizQuestion {
                    id: "interests",
                    text: "Rate your interest in these areas (1-5): Realistic, Investigative, Artistic, Social, Enterprising, Conventional",
                    kind: QuestionKind::RatingGroup {
                        labels: &RIASEC_LABELS,
                    },
                },
                QuizQuestion {
                    id: "personality",
                    text: "Rate your personality traits (1-5): Openness, Conscientiousness, Extraversion, Agreeableness, Neuroticism",
                    kind: QuestionKind::RatingGroup {
                        labels: &BIG_FIVE_LABELS,
                    },
                },
                QuizQuestion {
                    id: "values",
                    text: "What motivates you? (Select all that apply)",
                    kind: QuestionKind::Checkbox {
                        options: &VALUE_OPTIONS,
                    },
                },
            ],
        },
        QuizSection {
            id: Section::Skills,
            title: "Self-Assessed Skills",
            questions: vec![
                QuizQuestion {
                    id: "python",
                    text: "Python",
                    kind: QuestionKind::Range,
                },
                QuizQuestion {
                    id: "communication",
                    text: "Communication",
                    kind: QuestionKind::Range,
                },
                QuizQuestion {
                    id: "dataAnalysis",
                    text: "Data Analysis",
                    kind: QuestionKind::Range,
                },
                QuizQuestion {
                    id: "problemSolving",
                    text: "Problem Solving",
                    kind: QuestionKind::Range,
                },
            ],
        },
    ]
}

/// Looks up a declared question. `None` means the id is not part of `section`.
pub fn find_question(section: Section, question_id: &str) -> Option<QuizQuestion> {
    quiz_sections()
        .into_iter()
        .find(|s| s.id == section)
        .and_then(|s| s.questions.into_iter().find(|q| q.id == question_id))
}
