// Static catalog: quiz questions, mock career matches, role skill requirements.
// Everything here is compile-time data; nothing is loaded at runtime.

pub mod careers;
pub mod handlers;
pub mod questions;

pub use careers::{career_matches, default_user_skills, role_skills, CareerMatch, RequiredSkill};
pub use questions::{find_question, quiz_sections, QuestionKind, QuizQuestion, QuizSection};
