use std::sync::Arc;

use axum::{Extension, Router};
use tower_http::cors::CorsLayer;

use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::Config;
use crate::llm::{ChatCompletion, OpenAiClient};
use crate::routes::create_routes;

/// Shared per-process state injected into handlers. Holds the chat client
/// when the service talks to a live provider; holds nothing in mock mode,
/// so no network object ever exists there.
#[derive(Clone)]
pub struct AppState {
    chat_client: Option<Arc<dyn ChatCompletion>>,
}

impl AppState {
    pub fn live(chat_client: Arc<dyn ChatCompletion>) -> Self {
        Self {
            chat_client: Some(chat_client),
        }
    }

    pub fn mock() -> Self {
        Self { chat_client: None }
    }

    pub fn chat_client(&self) -> Option<&Arc<dyn ChatCompletion>> {
        self.chat_client.as_ref()
    }
}

/// Initialize tracing and logging for the application
pub fn init_tracing() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                "shop_assist_svc=info,tower_http=debug,axum::rejection=info".into()
            }),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();
}

/// Create and configure the Axum application with all routes and middleware
pub fn create_app(config: &Config) -> Result<Router, anyhow::Error> {
    info!("Initializing application router");

    let state = if config.mock_mode {
        warn!("Mock mode enabled: provider calls are skipped");
        AppState::mock()
    } else {
        let client = OpenAiClient::new(config.api_key.clone(), config.api_base.clone())?;
        AppState::live(Arc::new(client))
    };

    Ok(build_app(state))
}

/// Assemble the router around an existing state. Split out so tests can
/// inject a fake chat client.
pub fn build_app(state: AppState) -> Router {
    Router::new()
        .merge(create_routes())
        .layer(Extension(state))
        // Browser extensions call from an extension origin
        .layer(CorsLayer::permissive())
}
