pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::analysis::handlers as analysis;
use crate::assistant::handlers as assistant;
use crate::state::AppState;
use crate::usage::handlers as usage;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Analysis API
        .route("/api/v1/analysis", post(analysis::handle_analyze))
        .route("/api/v1/samples", get(analysis::handle_list_samples))
        .route(
            "/api/v1/samples/:index/analysis",
            get(analysis::handle_sample_analysis),
        )
        // Assistant API
        .route("/api/v1/chat", post(assistant::handle_chat))
        .route("/api/v1/cover-letter", post(assistant::handle_cover_letter))
        // Usage API
        .route("/api/v1/usage", get(usage::handle_usage_status))
        .route("/api/v1/usage/unlock", post(usage::handle_unlock))
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use async_trait::async_trait;
    use axum::{
        body::{to_bytes, Body},
        http::{Request, StatusCode},
    };
    use chrono::Duration;
    use serde_json::{json, Value};
    use tower::ServiceExt;

    use super::*;
    use crate::analysis::ResumeAnalyzer;
    use crate::assistant::ResumeAssistant;
    use crate::config::Config;
    use crate::errors::AppError;
    use crate::models::chat::{AssistantReply, FilePayload};
    use crate::models::resume::{ExperienceEntry, ResumeDocument};
    use crate::usage::{UsageGate, CLIENT_ID_HEADER};

    /// Adds one experience entry without an id and echoes the message.
    struct CannedAssistant;

    #[async_trait]
    impl ResumeAssistant for CannedAssistant {
        async fn update_resume(
            &self,
            current: &ResumeDocument,
            message: &str,
            _file: Option<&FilePayload>,
        ) -> Result<AssistantReply, AppError> {
            let mut updated = current.clone();
            updated.experience.push(ExperienceEntry {
                title: "Engineer".into(),
                description: vec!["Launched the mobile app to 20k users".into()],
                ..Default::default()
            });
            Ok(AssistantReply {
                chat_response: format!("Got it: {message}"),
                updated_resume: updated,
                suggestions: vec!["Add education".into()],
            })
        }

        async fn write_cover_letter(
            &self,
            job_title: &str,
            company_name: &str,
            _resume_file: &FilePayload,
        ) -> Result<String, AppError> {
            Ok(format!("Dear {company_name}, I want to be your {job_title}."))
        }
    }

    struct FailingAssistant;

    #[async_trait]
    impl ResumeAssistant for FailingAssistant {
        async fn update_resume(
            &self,
            _current: &ResumeDocument,
            _message: &str,
            _file: Option<&FilePayload>,
        ) -> Result<AssistantReply, AppError> {
            Err(AppError::Llm("service unavailable".into()))
        }

        async fn write_cover_letter(
            &self,
            _job_title: &str,
            _company_name: &str,
            _resume_file: &FilePayload,
        ) -> Result<String, AppError> {
            Err(AppError::Llm("service unavailable".into()))
        }
    }

    /// Succeeds like `CannedAssistant`, but only after a delay.
    struct SlowAssistant;

    #[async_trait]
    impl ResumeAssistant for SlowAssistant {
        async fn update_resume(
            &self,
            current: &ResumeDocument,
            message: &str,
            file: Option<&FilePayload>,
        ) -> Result<AssistantReply, AppError> {
            tokio::time::sleep(std::time::Duration::from_millis(200)).await;
            CannedAssistant.update_resume(current, message, file).await
        }

        async fn write_cover_letter(
            &self,
            job_title: &str,
            company_name: &str,
            resume_file: &FilePayload,
        ) -> Result<String, AppError> {
            CannedAssistant
                .write_cover_letter(job_title, company_name, resume_file)
                .await
        }
    }

    fn test_state(assistant: Arc<dyn ResumeAssistant>) -> AppState {
        AppState {
            config: Config {
                gemini_api_key: "test-key".into(),
                port: 0,
                rust_log: "info".into(),
                usage_cooldown_hours: 24,
                unlock_code: Some("letmein".into()),
                analyzer_tables_path: None,
            },
            analyzer: Arc::new(ResumeAnalyzer::default()),
            assistant,
            usage_gate: Arc::new(UsageGate::new(Duration::hours(24))),
        }
    }

    async fn send(router: Router, request: Request<Body>) -> (StatusCode, Value) {
        let response = router.oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap()
        };
        (status, body)
    }

    fn post_json(uri: &str, client: &str, body: Value) -> Request<Body> {
        Request::post(uri)
            .header("content-type", "application/json")
            .header(CLIENT_ID_HEADER, client)
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    fn get_request(uri: &str, client: &str) -> Request<Body> {
        Request::get(uri)
            .header(CLIENT_ID_HEADER, client)
            .body(Body::empty())
            .unwrap()
    }

    #[tokio::test]
    async fn test_health() {
        let router = build_router(test_state(Arc::new(CannedAssistant)));
        let (status, body) = send(router, get_request("/health", "a")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "ok");
    }

    #[tokio::test]
    async fn test_analyze_empty_document() {
        let router = build_router(test_state(Arc::new(CannedAssistant)));
        let (status, body) = send(router, post_json("/api/v1/analysis", "a", json!({}))).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["totalScore"], 20);
        assert_eq!(body["grade"], "F");
        assert_eq!(body["metrics"]["brevity"]["score"], 100);
        assert_eq!(body["metrics"]["ats"]["label"], "ATS Compatibility");
        assert_eq!(body["actionPlan"].as_array().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_samples_and_sample_analysis() {
        let state = test_state(Arc::new(CannedAssistant));
        let (status, body) = send(build_router(state.clone()), get_request("/api/v1/samples", "a")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body.as_array().unwrap().len(), 3);
        assert_eq!(body[0]["fullName"], "Alex Chen");

        let (status, body) = send(
            build_router(state.clone()),
            get_request("/api/v1/samples/0/analysis", "a"),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["metrics"]["ats"]["score"], 100);

        let (status, body) =
            send(build_router(state), get_request("/api/v1/samples/9/analysis", "a")).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["error"]["code"], "NOT_FOUND");
    }

    #[tokio::test]
    async fn test_chat_updates_resume_and_starts_cooldown() {
        let state = test_state(Arc::new(CannedAssistant));
        let request = json!({
            "resume": {"fullName": "Alex Chen"},
            "message": "I was an engineer at Acme"
        });

        let (status, body) =
            send(build_router(state.clone()), post_json("/api/v1/chat", "alice", request.clone()))
                .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["chatResponse"], "Got it: I was an engineer at Acme");
        let id = body["updatedResume"]["experience"][0]["id"].as_str().unwrap();
        assert!(!id.is_empty());
        assert_eq!(body["analysis"]["metrics"]["impact"]["score"], 100);

        let (status, body) =
            send(build_router(state.clone()), get_request("/api/v1/usage", "alice")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["locked"], true);

        let (status, body) =
            send(build_router(state.clone()), post_json("/api/v1/chat", "alice", request.clone()))
                .await;
        assert_eq!(status, StatusCode::TOO_MANY_REQUESTS);
        assert_eq!(body["error"]["code"], "COOLDOWN_ACTIVE");

        // Other clients are unaffected.
        let (status, _) =
            send(build_router(state), post_json("/api/v1/chat", "bob", request)).await;
        assert_eq!(status, StatusCode::OK);
    }

    #[tokio::test]
    async fn test_chat_failure_falls_back_without_cooldown() {
        let state = test_state(Arc::new(FailingAssistant));
        let request = json!({
            "resume": {"fullName": "Alex Chen", "skills": ["Rust"]},
            "message": "make it better"
        });
        let (status, body) =
            send(build_router(state.clone()), post_json("/api/v1/chat", "carol", request)).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["suggestions"], json!(["Try Again"]));
        assert_eq!(body["updatedResume"]["fullName"], "Alex Chen");

        let (_, body) = send(build_router(state), get_request("/api/v1/usage", "carol")).await;
        assert_eq!(body["locked"], false);
    }

    #[tokio::test]
    async fn test_concurrent_chats_from_one_client_get_one_turn() {
        let state = test_state(Arc::new(SlowAssistant));
        let request = json!({"message": "I led the data team at Initech"});
        let chat = || post_json("/api/v1/chat", "mallory", request.clone());

        let (a, b, c) = tokio::join!(
            send(build_router(state.clone()), chat()),
            send(build_router(state.clone()), chat()),
            send(build_router(state.clone()), chat()),
        );
        let statuses = [a.0, b.0, c.0];
        assert_eq!(statuses.iter().filter(|s| **s == StatusCode::OK).count(), 1);
        assert_eq!(
            statuses
                .iter()
                .filter(|s| **s == StatusCode::TOO_MANY_REQUESTS)
                .count(),
            2
        );

        let (_, body) = send(build_router(state), get_request("/api/v1/usage", "mallory")).await;
        assert_eq!(body["locked"], true);
    }

    #[tokio::test]
    async fn test_rejected_turn_leaves_client_unlocked() {
        let state = test_state(Arc::new(CannedAssistant));
        let (status, _) = send(
            build_router(state.clone()),
            post_json("/api/v1/chat", "frank", json!({"message": ""})),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);

        let (_, body) = send(build_router(state), get_request("/api/v1/usage", "frank")).await;
        assert_eq!(body["locked"], false);
    }

    #[tokio::test]
    async fn test_chat_rejects_empty_turn_and_bad_file() {
        let state = test_state(Arc::new(CannedAssistant));
        let (status, _) = send(
            build_router(state.clone()),
            post_json("/api/v1/chat", "dave", json!({"message": "   "})),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);

        let (status, body) = send(
            build_router(state),
            post_json(
                "/api/v1/chat",
                "dave",
                json!({"message": "", "file": {"data": "UEsDBA==", "mimeType": "application/zip"}}),
            ),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
    }

    #[tokio::test]
    async fn test_cover_letter_and_fallback() {
        let request = json!({
            "jobTitle": "Data Engineer",
            "companyName": "Globex",
            "resumeFile": {"data": "data:application/pdf;base64,JVBERi0x", "mimeType": "application/pdf"}
        });

        let router = build_router(test_state(Arc::new(CannedAssistant)));
        let (status, body) =
            send(router, post_json("/api/v1/cover-letter", "a", request.clone())).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["coverLetter"], "Dear Globex, I want to be your Data Engineer.");

        let router = build_router(test_state(Arc::new(FailingAssistant)));
        let (status, body) = send(router, post_json("/api/v1/cover-letter", "a", request)).await;
        assert_eq!(status, StatusCode::OK);
        assert!(body["coverLetter"]
            .as_str()
            .unwrap()
            .starts_with("Dear Hiring Manager"));
    }

    #[tokio::test]
    async fn test_unlock_requires_matching_code() {
        let state = test_state(Arc::new(CannedAssistant));
        state.usage_gate.record("erin", chrono::Utc::now()).await;

        let (status, _) = send(
            build_router(state.clone()),
            post_json("/api/v1/usage/unlock", "erin", json!({"code": "nope"})),
        )
        .await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);

        let (status, _) = send(
            build_router(state.clone()),
            post_json("/api/v1/usage/unlock", "erin", json!({"code": "letmein"})),
        )
        .await;
        assert_eq!(status, StatusCode::NO_CONTENT);

        let (_, body) = send(build_router(state), get_request("/api/v1/usage", "erin")).await;
        assert_eq!(body["locked"], false);
    }

    #[tokio::test]
    async fn test_unlock_disabled_without_code() {
        let mut state = test_state(Arc::new(CannedAssistant));
        state.config.unlock_code = None;
        let (status, _) = send(
            build_router(state),
            post_json("/api/v1/usage/unlock", "erin", json!({"code": "letmein"})),
        )
        .await;
        assert_eq!(status, StatusCode::FORBIDDEN);
    }
}
