use axum::{extract::State, routing::get, Json, Router};
use serde_json::{json, Value};
use tracing::{info, warn};

use crate::samples::random_sample;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_handler))
        .route("/api/resume", get(resume_handler))
        .with_state(state)
}

/// GET /health
/// Returns a simple status object with service version.
async fn health_handler() -> Json<Value> {
    Json(json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
        "service": "resume-server"
    }))
}

/// GET /api/resume
///
/// Serves a freshly generated fictional resume. With no API key configured,
/// or when generation ultimately fails, a built-in sample is served instead;
/// the endpoint never fails while samples exist. The generated document is
/// passed through unvalidated.
async fn resume_handler(State(state): State<AppState>) -> Json<Value> {
    let Some(generator) = &state.generator else {
        info!("No API key configured, serving sample resume");
        return Json(random_sample());
    };

    match generator.generate_resume().await {
        Ok(resume) => {
            info!("Serving generated resume");
            Json(resume)
        }
        Err(err) => {
            warn!("Generation failed ({err}), serving sample resume");
            Json(random_sample())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use tower::ServiceExt;

    async fn get_json(router: Router, uri: &str) -> (StatusCode, Value) {
        let response = router
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn test_health_reports_ok() {
        let router = build_router(AppState { generator: None });
        let (status, body) = get_json(router, "/health").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "ok");
        assert_eq!(body["service"], "resume-server");
    }

    #[tokio::test]
    async fn test_resume_without_api_key_serves_sample() {
        let router = build_router(AppState { generator: None });
        let (status, body) = get_json(router, "/api/resume").await;
        assert_eq!(status, StatusCode::OK);
        assert!(body["name"].as_str().is_some_and(|s| !s.is_empty()));
        assert!(body["contact"]["email"].is_string());
        assert!(!body["experience"].as_array().unwrap().is_empty());
        assert!(!body["skills"].as_array().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_resume_serves_generated_document_when_generation_succeeds() {
        use wiremock::matchers::method;
        use wiremock::{Mock, MockServer, ResponseTemplate};

        let server = MockServer::start().await;
        let resume_text = r#"{"name":"Generated Person","title":"T","summary":"S","contact":{"email":"e","phone":"p","location":"l"},"experience":[],"skills":["X"]}"#;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "candidates": [{ "content": { "parts": [{ "text": resume_text }] } }]
            })))
            .expect(1)
            .mount(&server)
            .await;

        let generator = crate::llm::GeminiClient::with_base_url("k".to_string(), server.uri());
        let router = build_router(AppState {
            generator: Some(generator),
        });

        let (status, body) = get_json(router, "/api/resume").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["name"], "Generated Person");
    }

    #[tokio::test]
    async fn test_resume_falls_back_to_sample_on_terminal_generation_failure() {
        use wiremock::matchers::method;
        use wiremock::{Mock, MockServer, ResponseTemplate};

        let server = MockServer::start().await;
        // Empty candidates is a terminal generation failure with no retries,
        // which keeps this test clear of the generation backoff delays.
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "candidates": [] })))
            .expect(1)
            .mount(&server)
            .await;

        let generator = crate::llm::GeminiClient::with_base_url("k".to_string(), server.uri());
        let router = build_router(AppState {
            generator: Some(generator),
        });

        let (status, body) = get_json(router, "/api/resume").await;
        assert_eq!(status, StatusCode::OK);
        assert_ne!(body["name"], "Generated Person");
        assert!(body["name"].as_str().is_some_and(|s| !s.is_empty()));
    }
}
