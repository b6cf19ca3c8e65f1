use axum::{
    extract::DefaultBodyLimit,
    http::{header, Method, StatusCode},
    routing::{get, post},
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

use crate::{
    config::Config,
    handlers::{
        chatbot_details::{create_chatbot_detail, list_chatbot_details},
        health::{livez, readyz},
        job_applications::{create_job_application, list_job_applications},
        service_requests::{create_service_request, list_service_requests},
    },
    state::AppState,
};

/// Create the application router with all routes and middleware.
pub fn create_app(state: AppState, config: &Config) -> Router {
    // CORS configuration for API endpoints
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([header::CONTENT_TYPE]);

    // API routes with CORS
    let api_routes = Router::new()
        .route("/service-request", post(create_service_request))
        .route("/service-requests", get(list_service_requests))
        .route(
            "/job-applications",
            get(list_job_applications)
                .post(create_job_application)
                .layer(DefaultBodyLimit::max(config.max_upload_bytes)),
        )
        .route(
            "/chatbot-details",
            get(list_chatbot_details).post(create_chatbot_detail),
        )
        .layer(cors);

    // Main application router
    Router::new()
        .route("/livez", get(livez))
        .route("/readyz", get(readyz))
        .nest("/api", api_routes)
        .layer(TraceLayer::new_for_http())
        .layer(TimeoutLayer::with_status_code(
            StatusCode::REQUEST_TIMEOUT,
            config.request_timeout(),
        ))
        .with_state(state)
}
