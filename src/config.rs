//! Environment-driven settings.

use std::env;

#[derive(Debug, Clone)]
pub struct Settings {
    pub database_url: String,
    /// Allowed CORS origin for the API. Unset means permissive (development).
    pub frontend_url: Option<String>,
    pub port: u16,
}

impl Settings {
    /// Read settings from the environment, loading `.env` first when present.
    pub fn from_env() -> Self {
        let _ = dotenvy::dotenv();
        Settings {
            database_url: env::var("DATABASE_URL")
                .unwrap_or_else(|_| "postgres://localhost/products".into()),
            frontend_url: env::var("FRONTEND_URL").ok(),
            port: env::var("PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(4000),
        }
    }
}
