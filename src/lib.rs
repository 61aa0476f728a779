use crate::config::AppConfig;
use crate::errors::ApiError;
use crate::route::access;
use crate::service::access_log::{AccessLog, TracingAccessLog};
use crate::service::access_service::AccessService;
use axum::extract::Request;
use axum::response::{IntoResponse, Response};
use axum::Router;
use std::sync::Arc;
use tower::ServiceBuilder;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::trace::TraceLayer;
use tracing::debug_span;

pub mod config;
pub mod errors;
pub mod model;
pub mod route;
pub mod service;
pub mod util;

// Application state shared across handlers
// Cloning AppState is cheap because everything inside is behind an Arc.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub access: AccessService,
}

// Application router creation
// Note: The order of layers is important.
pub fn create_app(state: AppState) -> Router {
    let mut app = access::create_routes()
        .layer(ServiceBuilder::new().layer(CatchPanicLayer::custom(handle_panic)));

    // The access log already records the request target, so spans carry the method only.
    if state.config.log.log_requests {
        app = app.layer(
            TraceLayer::new_for_http()
                .make_span_with(|request: &Request| debug_span!("request", method = %request.method())),
        );
    }
    app.with_state(state)
}

impl AppState {
    pub fn new(config: AppConfig) -> Self {
        Self::with_logger(config, Arc::new(TracingAccessLog))
    }

    /// Builds the state around a caller-supplied access logger.
    pub fn with_logger(config: AppConfig, log: Arc<dyn AccessLog>) -> Self {
        AppState {
            config: Arc::new(config),
            access: AccessService::new(log),
        }
    }
}

// Custom panic handler, logs the panic and returns a 500 response
fn handle_panic(panic: Box<dyn std::any::Any + Send>) -> Response {
    let panic_message = if let Some(s) = panic.downcast_ref::<&str>() {
        *s
    } else if let Some(s) = panic.downcast_ref::<String>() {
        s.as_str()
    } else {
        "Unknown panic"
    };

    ApiError::Panicked(panic_message.to_string()).into_response()
}
