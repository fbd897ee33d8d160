use std::env;

#[derive(Clone)]
pub struct Config {
    /// `sqlite://...` for the embedded database, or `local://<dir>` for the
    /// JSON collection store.
    pub database_url: String,
    pub port: u16,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            database_url: env::var("DATABASE_URL")
                .unwrap_or_else(|_| "sqlite://campus.db?mode=rwc".to_string()),
            port: env::var("PORT")
                .unwrap_or_else(|_| "3000".to_string())
                .parse()
                .expect("PORT must be a number"),
        }
    }
}
