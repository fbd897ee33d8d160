use std::str::FromStr;
use std::sync::Arc;

use axum::{
    Router,
    body::Body,
    http::{Request, header},
};
use campus_backend::{
    api::router::create_router,
    config::Config,
    domain::services::defaults::seed_default_events,
    infra::repositories::{
        sqlite_event_repo::SqliteEventRepo, sqlite_job_repo::SqliteJobRepo,
        sqlite_reservation_repo::SqliteReservationRepo, sqlite_user_repo::SqliteUserRepo,
    },
    state::AppState,
};
use serde_json::{Value, json};
use sqlx::{
    Pool, Sqlite,
    sqlite::{SqliteConnectOptions, SqlitePoolOptions},
};
use tower::ServiceExt;
use uuid::Uuid;

#[allow(dead_code)]
pub struct TestApp {
    pub router: Router,
    pub pool: Pool<Sqlite>,
    pub db_filename: String,
    pub state: Arc<AppState>,
}

impl TestApp {
    pub async fn new() -> Self {
        let db_filename = format!("test_{}.db", Uuid::new_v4());
        let db_url = format!("sqlite://{}?mode=rwc", db_filename);

        let connection_options = SqliteConnectOptions::from_str(&db_url)
            .unwrap()
            .create_if_missing(true);

        let pool = SqlitePoolOptions::new()
            .connect_with(connection_options)
            .await
            .expect("Failed to connect to test db");

        sqlx::migrate!("./migrations/sqlite")
            .run(&pool)
            .await
            .expect("Failed to migrate test db");

        let config = Config {
            database_url: db_url.clone(),
            port: 0,
        };

        let state = Arc::new(AppState {
            config,
            event_repo: Arc::new(SqliteEventRepo::new(pool.clone())),
            reservation_repo: Arc::new(SqliteReservationRepo::new(pool.clone())),
            job_repo: Arc::new(SqliteJobRepo::new(pool.clone())),
            user_repo: Arc::new(SqliteUserRepo::new(pool.clone())),
        });

        seed_default_events(&*state.event_repo)
            .await
            .expect("Failed to seed default events");

        let router = create_router(state.clone());

        Self {
            router,
            pool,
            db_filename,
            state,
        }
    }

    /// Creates a user through the API and returns its id.
    #[allow(dead_code)]
    pub async fn create_user(&self, name: &str, email: &str) -> String {
        let response = self
            .router
            .clone()
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/api/users")
                    .header(header::CONTENT_TYPE, "application/json")
                    .body(Body::from(json!({"name": name, "email": email}).to_string()))
                    .unwrap(),
            )
            .await
            .unwrap();

        if !response.status().is_success() {
            panic!("create_user failed in test helper: status {}", response.status());
        }

        parse_body(response).await["id"].as_str().unwrap().to_string()
    }
}

impl Drop for TestApp {
    fn drop(&mut self) {
        let _ = std::fs::remove_file(&self.db_filename);
    }
}

#[allow(dead_code)]
pub async fn parse_body(response: axum::response::Response) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

/// A well-formed event form payload, adjustable per test.
#[allow(dead_code)]
pub fn event_form_payload() -> Value {
    json!({
        "title": "Graduate Research Fair",
        "description": "Poster sessions from graduate programs.",
        "eventType": "Workshop",
        "startDate": "2025-02-10",
        "endDate": "2025-02-12",
        "location": "Student Center",
        "isVirtual": false,
        "maxAttendees": 200,
        "registrationDeadline": "2025-02-01",
        "sessions": [
            {
                "title": "Poster Walkthrough",
                "description": "Guided tour of the poster hall.",
                "startTime": "2025-02-10T10:00:00",
                "endTime": "2025-02-10T12:00:00",
                "location": "Student Center",
                "maxAttendees": 200
            }
        ]
    })
}
