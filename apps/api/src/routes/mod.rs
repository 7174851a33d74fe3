pub mod health;

use axum::{
    routing::{get, patch, post},
    Router,
};

use crate::catalog::handlers as catalog;
use crate::session::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Static catalog
        .route("/api/v1/catalog/questions", get(catalog::handle_get_questions))
        .route("/api/v1/catalog/careers", get(catalog::handle_get_careers))
        // Session API
        .route("/api/v1/sessions", post(handlers::handle_create_session))
        .route("/api/v1/sessions/:id", get(handlers::handle_get_session))
        .route(
            "/api/v1/sessions/:id/answers",
            patch(handlers::handle_update_answer),
        )
        .route(
            "/api/v1/sessions/:id/submit",
            post(handlers::handle_submit_quiz),
        )
        .route(
            "/api/v1/sessions/:id/careers/select",
            post(handlers::handle_select_career),
        )
        .route(
            "/api/v1/sessions/:id/navigate",
            post(handlers::handle_navigate),
        )
        .route(
            "/api/v1/sessions/:id/skill-gap",
            get(handlers::handle_skill_gap),
        )
        .route("/api/v1/sessions/:id/chat", post(handlers::handle_send_chat))
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::time::Duration;

    use axum::{
        body::{to_bytes, Body},
        http::{Method, Request, StatusCode},
    };
    use serde_json::{json, Value};
    use tower::ServiceExt;

    use crate::chat::KeywordResponder;
    use crate::config::Config;
    use crate::session::SessionStore;

    fn test_router() -> Router {
        let config = Config {
            chat_reply_delay: Duration::from_millis(50),
            ..Config::default()
        };
        build_router(AppState {
            sessions: SessionStore::new(),
            config,
            chat_responder: Arc::new(KeywordResponder),
        })
    }

    async fn call(router: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
        let builder = Request::builder().method(method).uri(uri);
        let request = match body {
            Some(json) => builder
                .header("content-type", "application/json")
                .body(Body::from(json.to_string()))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        };
        let response = router.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let value = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap()
        };
        (status, value)
    }

    async fn create_session(router: &Router) -> String {
        let (status, body) = call(router, Method::POST, "/api/v1/sessions", None).await;
        assert_eq!(status, StatusCode::CREATED);
        body["session_id"].as_str().unwrap().to_string()
    }

    #[tokio::test]
    async fn test_health() {
        let router = test_router();
        let (status, body) = call(&router, Method::GET, "/health", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "ok");
    }

    #[tokio::test]
    async fn test_catalog_endpoints() {
        let router = test_router();
        let (_, questions) = call(&router, Method::GET, "/api/v1/catalog/questions", None).await;
        assert_eq!(questions.as_array().unwrap().len(), 3);
        assert_eq!(questions[1]["questions"][0]["kind"]["type"], "rating_group");

        let (_, careers) = call(&router, Method::GET, "/api/v1/catalog/careers", None).await;
        assert_eq!(careers[0]["title"], "Data Scientist");
    }

    #[tokio::test]
    async fn test_new_session_snapshot() {
        let router = test_router();
        let (_, body) = call(&router, Method::POST, "/api/v1/sessions", None).await;
        assert_eq!(body["screen"], "onboarding");
        assert!(body["genome"].is_null());
        assert!(body["selected_career"].is_null());
        assert_eq!(body["chat"].as_array().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_unknown_session_is_404() {
        let router = test_router();
        let uri = format!("/api/v1/sessions/{}", uuid::Uuid::new_v4());
        let (status, body) = call(&router, Method::GET, &uri, None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["error"]["code"], "NOT_FOUND");
    }

    #[tokio::test]
    async fn test_full_flow_onboarding_to_skill_gap() {
        let router = test_router();
        let id = create_session(&router).await;

        let (status, body) = call(
            &router,
            Method::PATCH,
            &format!("/api/v1/sessions/{id}/answers"),
            Some(json!({
                "section": "skills",
                "question_id": "python",
                "update": {"op": "set", "value": 4}
            })),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["profile"]["skills"]["python"], 4.0);

        let (_, body) = call(&router, Method::POST, &format!("/api/v1/sessions/{id}/submit"), None).await;
        assert_eq!(body["applied"], true);
        assert_eq!(body["session"]["screen"], "dashboard");
        // (4*1.5 + 0 + 3*1.3) / 3 = 3.3
        let technical = body["session"]["genome"]["Technical"].as_f64().unwrap();
        assert!((technical - 3.3).abs() < 1e-9);

        let (_, body) = call(
            &router,
            Method::POST,
            &format!("/api/v1/sessions/{id}/careers/select"),
            Some(json!({"career": "Data Scientist"})),
        )
        .await;
        assert_eq!(body["applied"], true);
        assert_eq!(body["session"]["screen"], "skillGap");
        assert_eq!(body["session"]["selected_career"], "Data Scientist");
        assert_eq!(body["session"]["learning_pathway"].as_array().unwrap().len(), 2);
        assert_eq!(body["session"]["portfolio_projects"].as_array().unwrap().len(), 2);

        let (_, report) = call(&router, Method::GET, &format!("/api/v1/sessions/{id}/skill-gap"), None).await;
        assert_eq!(report["career"], "Data Scientist");
        assert_eq!(report["skills"].as_array().unwrap().len(), 5);
    }

    #[tokio::test]
    async fn test_any_answer_shape_is_stored_and_submit_still_works() {
        let router = test_router();
        let id = create_session(&router).await;

        for value in [json!(true), json!(null), json!([3, "x"]), json!({"a": 1})] {
            let (status, body) = call(
                &router,
                Method::PATCH,
                &format!("/api/v1/sessions/{id}/answers"),
                Some(json!({
                    "section": "skills",
                    "question_id": "python",
                    "update": {"op": "set", "value": value.clone()}
                })),
            )
            .await;
            assert_eq!(status, StatusCode::OK, "{value}");
            assert_eq!(body["profile"]["skills"]["python"], value);
        }

        let (status, body) = call(&router, Method::POST, &format!("/api/v1/sessions/{id}/submit"), None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["session"]["screen"], "dashboard");
        // python reads as unanswered: (0 + 0 + 3*1.3) / 3
        let technical = body["session"]["genome"]["Technical"].as_f64().unwrap();
        assert!((technical - 1.3).abs() < 1e-9);
    }

    #[tokio::test]
    async fn test_rating_index_past_group_is_ignored() {
        let router = test_router();
        let id = create_session(&router).await;

        for index in [json!(6), json!(10_000_000_000u64), json!(u64::MAX)] {
            let (status, body) = call(
                &router,
                Method::PATCH,
                &format!("/api/v1/sessions/{id}/answers"),
                Some(json!({
                    "section": "psychometric",
                    "question_id": "interests",
                    "update": {"op": "rating", "index": index.clone(), "value": 5}
                })),
            )
            .await;
            assert_eq!(status, StatusCode::OK, "{index}");
            assert!(body["profile"]["psychometric"]["interests"].is_null(), "{index}");
        }
    }

    #[tokio::test]
    async fn test_undeclared_question_rejected() {
        let router = test_router();
        let id = create_session(&router).await;
        let (status, body) = call(
            &router,
            Method::PATCH,
            &format!("/api/v1/sessions/{id}/answers"),
            Some(json!({
                "section": "academic",
                "question_id": "python",
                "update": {"op": "set", "value": 4}
            })),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
    }

    #[tokio::test]
    async fn test_invalid_navigation_is_reported_not_failed() {
        let router = test_router();
        let id = create_session(&router).await;
        let (status, body) = call(
            &router,
            Method::POST,
            &format!("/api/v1/sessions/{id}/navigate"),
            Some(json!({"trigger": "open_chat"})),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["applied"], false);
        assert_eq!(body["session"]["screen"], "onboarding");
    }

    #[tokio::test]
    async fn test_navigate_refuses_payload_triggers() {
        let router = test_router();
        let id = create_session(&router).await;
        let (status, _) = call(
            &router,
            Method::POST,
            &format!("/api/v1/sessions/{id}/navigate"),
            Some(json!({"trigger": "select_career"})),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_chat_reply_appears_after_delay() {
        let router = test_router();
        let id = create_session(&router).await;

        let (_, body) = call(
            &router,
            Method::POST,
            &format!("/api/v1/sessions/{id}/chat"),
            Some(json!({"text": "xyz"})),
        )
        .await;
        assert_eq!(body["accepted"], true);
        assert_eq!(body["session"]["chat"].as_array().unwrap().len(), 2);

        tokio::time::sleep(Duration::from_millis(200)).await;

        let (_, body) = call(&router, Method::GET, &format!("/api/v1/sessions/{id}"), None).await;
        let chat = body["chat"].as_array().unwrap();
        assert_eq!(chat.len(), 3);
        assert_eq!(chat[2]["speaker"], "bot");
        assert_eq!(
            chat[2]["text"],
            "Sorry, I didn't understand that. Try asking about career matches or skill gaps."
        );
    }
}
