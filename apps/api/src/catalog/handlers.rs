use axum::Json;

use crate::catalog::{career_matches, quiz_sections, CareerMatch, QuizSection};

/// GET /api/v1/catalog/questions
pub async fn handle_get_questions() -> Json<Vec<QuizSection>> {
    Json(quiz_sections())
}

/// GET /api/v1/catalog/careers
pub async fn handle_get_careers() -> Json<Vec<CareerMatch>> {
    Json(career_matches().to_vec())
}
