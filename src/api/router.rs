use axum::{
    Router,
    body::Body,
    extract::Request,
    routing::{get, post},
};
use std::sync::Arc;
use std::time::Duration;
use tower_http::{classify::ServerErrorsFailureClass, trace::TraceLayer};
use tracing::{Span, error, info, info_span};
use uuid::Uuid;

use crate::api::handlers::{event, health, job, reservation, user};
use crate::state::AppState;

pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/health", get(health::health_check))

        // Users (the dashboard's current user)
        .route("/api/users", post(user::create_user))
        .route("/api/users/me", get(user::current_user))

        // Academic events
        .route("/api/academic-events", get(event::list_events).post(event::create_event))
        .route("/api/academic-events/{id}", get(event::get_event).put(event::update_event))
        .route(
            "/api/academic-events/{id}/sessions/{session_id}/register",
            post(event::register_for_session),
        )

        // Reservations
        .route("/api/reservations", get(reservation::list_reservations))

        // Jobs
        .route("/api/jobs", get(job::list_jobs).post(job::create_job))
        .route("/api/jobs/{id}", get(job::get_job))

        .layer(
            TraceLayer::new_for_http()
                .make_span_with(|request: &Request<Body>| {
                    let request_id = Uuid::new_v4().to_string();
                    info_span!(
                        "http_request",
                        request_id = %request_id,
                        method = ?request.method(),
                        uri = ?request.uri(),
                        version = ?request.version(),
                        user_id = tracing::field::Empty,
                    )
                })
                .on_request(|request: &Request<Body>, _span: &Span| {
                    info!("started processing request: {} {}", request.method(), request.uri().path());
                })
                .on_response(|response: &axum::http::Response<Body>, latency: Duration, _span: &Span| {
                    info!(
                        status = response.status().as_u16(),
                        latency_ms = latency.as_millis(),
                        "finished processing request"
                    );
                })
                .on_failure(|error: ServerErrorsFailureClass, _latency: Duration, _span: &Span| {
                    error!("request failed: {:?}", error);
                })
        )
        .with_state(state)
}
