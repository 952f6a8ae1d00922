use crate::app::AppState;
use crate::error::{AppError, AppResult};
use crate::llm::mock_answer;
use crate::models::{HealthResponse, ProcessRequest, ProcessResponse};
use crate::normalize::{normalize_product_info, normalize_product_title, truncate_product_info};
use crate::prompt::{SYSTEM_PROMPT, build_user_prompt};
use axum::{
    Extension,
    extract::Json,
    extract::rejection::JsonRejection,
    response::Json as ResponseJson,
};
use tracing::{debug, info};

/// Health check handler
/// Returns the service status and health information
pub async fn health_check() -> AppResult<ResponseJson<HealthResponse>> {
    debug!("Health check endpoint called");
    Ok(ResponseJson(HealthResponse::ok()))
}

/// Process handler for product questions from the browser extension.
/// Validates and normalizes the payload, renders the prompt, asks the
/// chat-completion provider (or synthesizes a mock answer), and wraps the
/// generated text in the response envelope.
pub async fn process_handler(
    Extension(state): Extension<AppState>,
    payload: Result<Json<ProcessRequest>, JsonRejection>,
) -> AppResult<ResponseJson<ProcessResponse>> {
    // An undecodable body (or a missing JSON content-type) must still come
    // back in the uniform failure envelope, not axum's plain-text rejection.
    let Json(payload) = payload.map_err(|rejection| AppError::Validation(rejection.body_text()))?;

    info!("Process endpoint called with query: {}", payload.query);

    if !payload.is_valid() {
        return Err(AppError::Validation("Query is required".to_string()));
    }

    let product_title = normalize_product_title(&payload.product_title);
    let product_info = truncate_product_info(&normalize_product_info(&payload.product_info));

    let result = match state.chat_client() {
        Some(client) => {
            let user_prompt = build_user_prompt(
                &payload.platform,
                &product_title,
                &product_info,
                &payload.query,
                &payload.url,
            );
            debug!("Built user prompt ({} chars)", user_prompt.len());
            client.complete(SYSTEM_PROMPT, &user_prompt).await?
        }
        None => {
            debug!("Mock mode: skipping provider call");
            mock_answer(&product_title, &payload.platform, &payload.query)
        }
    };

    info!("Successfully processed query, returning response");
    Ok(ResponseJson(ProcessResponse::ok(result, payload.platform)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::llm::ChatCompletion;
    use async_trait::async_trait;
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct FakeClient {
        calls: Arc<AtomicUsize>,
        fail: bool,
    }

    #[async_trait]
    impl ChatCompletion for FakeClient {
        async fn complete(&self, _system: &str, user: &str) -> anyhow::Result<String> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            if self.fail {
                return Err(anyhow::anyhow!("provider unavailable"));
            }
            Ok(format!("<p>echo: {}</p>", user.len()))
        }
    }

    fn fake_state(fail: bool) -> (AppState, Arc<AtomicUsize>) {
        let calls = Arc::new(AtomicUsize::new(0));
        let state = AppState::live(Arc::new(FakeClient {
            calls: calls.clone(),
            fail,
        }));
        (state, calls)
    }

    fn request(query: &str) -> ProcessRequest {
        ProcessRequest {
            query: query.to_string(),
            product_title: "  Acme   Widget ".to_string(),
            product_info: "Line1\n\n\nLine2   here".to_string(),
            platform: "amazon".to_string(),
            url: String::new(),
        }
    }

    #[tokio::test]
    async fn test_health_check() {
        let result = health_check().await;
        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn test_process_valid_query() {
        let (state, calls) = fake_state(false);

        let result = process_handler(Extension(state), Ok(Json(request("what is the brand?")))).await;

        let response = result.unwrap().0;
        assert!(response.success);
        assert!(!response.result.unwrap().is_empty());
        assert_eq!(response.platform.as_deref(), Some("amazon"));
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_process_empty_query_is_rejected() {
        let (state, calls) = fake_state(false);

        let result = process_handler(Extension(state), Ok(Json(request("")))).await;

        assert!(matches!(result, Err(AppError::Validation(_))));
        assert_eq!(calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_process_whitespace_query_is_rejected() {
        let (state, _) = fake_state(false);

        let result = process_handler(Extension(state), Ok(Json(request("   ")))).await;

        assert!(matches!(result, Err(AppError::Validation(_))));
    }

    #[tokio::test]
    async fn test_process_provider_failure_becomes_provider_error() {
        let (state, _) = fake_state(true);

        let result = process_handler(Extension(state), Ok(Json(request("what is the brand?")))).await;

        assert!(matches!(result, Err(AppError::Provider(_))));
    }

    #[tokio::test]
    async fn test_process_mock_mode_skips_provider() {
        let state = AppState::mock();

        let result = process_handler(Extension(state), Ok(Json(request("what is the brand?")))).await;

        let response = result.unwrap().0;
        assert!(response.success);
        let answer = response.result.unwrap();
        assert!(answer.contains("Acme Widget"));
        assert!(answer.contains("amazon"));
        assert!(answer.contains("what is the brand?"));
    }
}
