use std::str::FromStr;
use std::sync::Arc;
use std::time::Duration;

use sqlx::ConnectOptions;
use sqlx::SqlitePool;
use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions};
use tracing::info;
use tracing::log::LevelFilter;

use crate::config::Config;
use crate::domain::services::defaults::seed_default_events;
use crate::infra::repositories::{
    local_event_repo::LocalEventRepo, local_job_repo::LocalJobRepo,
    local_reservation_repo::LocalReservationRepo, local_user_repo::LocalUserRepo,
    sqlite_event_repo::SqliteEventRepo, sqlite_job_repo::SqliteJobRepo,
    sqlite_reservation_repo::SqliteReservationRepo, sqlite_user_repo::SqliteUserRepo,
};
use crate::infra::storage::LocalStore;
use crate::state::AppState;

pub async fn bootstrap_state(config: &Config) -> AppState {
    let state = if config.database_url.starts_with("sqlite:") {
        info!("Initializing SQLite connection with WAL Mode...");

        let opts = SqliteConnectOptions::from_str(&config.database_url)
            .expect("Invalid SQLite connection string")
            .create_if_missing(true)
            .journal_mode(SqliteJournalMode::Wal)
            .busy_timeout(Duration::from_secs(5))
            .log_statements(LevelFilter::Debug)
            .log_slow_statements(LevelFilter::Warn, Duration::from_millis(500));

        let pool = SqlitePoolOptions::new()
            .max_connections(5)
            .connect_with(opts)
            .await
            .expect("Failed to connect to SQLite");

        run_sqlite_migrations(&pool).await;

        AppState {
            config: config.clone(),
            event_repo: Arc::new(SqliteEventRepo::new(pool.clone())),
            reservation_repo: Arc::new(SqliteReservationRepo::new(pool.clone())),
            job_repo: Arc::new(SqliteJobRepo::new(pool.clone())),
            user_repo: Arc::new(SqliteUserRepo::new(pool.clone())),
        }
    } else {
        let dir = config
            .database_url
            .strip_prefix("local://")
            .unwrap_or(&config.database_url);
        info!("Initializing local JSON collection store at {}...", dir);

        let store = Arc::new(LocalStore::open(dir).expect("Failed to open local store"));

        AppState {
            config: config.clone(),
            event_repo: Arc::new(LocalEventRepo::new(store.clone())),
            reservation_repo: Arc::new(LocalReservationRepo::new(store.clone())),
            job_repo: Arc::new(LocalJobRepo::new(store.clone())),
            user_repo: Arc::new(LocalUserRepo::new(store)),
        }
    };

    seed_default_events(&*state.event_repo)
        .await
        .expect("Failed to seed default events");

    state
}

async fn run_sqlite_migrations(pool: &SqlitePool) {
    sqlx::migrate!("./migrations/sqlite")
        .run(pool)
        .await
        .expect("Failed to run SQLite migrations");
}
