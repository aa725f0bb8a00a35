use std::path::PathBuf;

/// Server configuration loaded from environment variables.
///
/// All fields have sensible defaults suitable for local development.
/// In production, override via environment variables.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `3000`).
    pub port: u16,
    /// Allowed CORS origins, parsed from comma-separated `CORS_ORIGINS`.
    /// Empty means any origin is allowed.
    pub cors_origins: Vec<String>,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
    /// Directory where uploaded images are written (default: `uploads`).
    pub upload_dir: PathBuf,
    /// Relational store connection settings.
    pub database: DatabaseConfig,
}

/// Database connection settings.
///
/// Loaded from the individual `DB_*` variables; a full `DATABASE_URL`, when
/// set, takes precedence over all of them.
#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    pub host: String,
    pub port: u16,
    pub user: String,
    pub password: String,
    pub name: String,
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                | Default     |
    /// |------------------------|-------------|
    /// | `HOST`                 | `0.0.0.0`   |
    /// | `PORT`                 | `3000`      |
    /// | `CORS_ORIGINS`         | (any)       |
    /// | `REQUEST_TIMEOUT_SECS` | `30`        |
    /// | `UPLOAD_DIR`           | `uploads`   |
    pub fn from_env() -> Self {
        let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".into());

        let port: u16 = std::env::var("PORT")
            .unwrap_or_else(|_| "3000".into())
            .parse()
            .expect("PORT must be a valid u16");

        let cors_origins: Vec<String> = std::env::var("CORS_ORIGINS")
            .unwrap_or_default()
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        let request_timeout_secs: u64 = std::env::var("REQUEST_TIMEOUT_SECS")
            .unwrap_or_else(|_| "30".into())
            .parse()
            .expect("REQUEST_TIMEOUT_SECS must be a valid u64");

        let upload_dir = PathBuf::from(std::env::var("UPLOAD_DIR").unwrap_or_else(|_| "uploads".into()));

        Self {
            host,
            port,
            cors_origins,
            request_timeout_secs,
            upload_dir,
            database: DatabaseConfig::from_env(),
        }
    }
}

impl DatabaseConfig {
    /// Load connection settings from `DB_*` environment variables.
    ///
    /// | Env Var   | Default     |
    /// |-----------|-------------|
    /// | `DB_HOST` | `localhost` |
    /// | `DB_PORT` | `5432`      |
    /// | `DB_USER` | `postgres`  |
    /// | `DB_PASS` | (empty)     |
    /// | `DB_NAME` | `eventos`   |
    pub fn from_env() -> Self {
        let host = std::env::var("DB_HOST").unwrap_or_else(|_| "localhost".into());
        let port: u16 = std::env::var("DB_PORT")
            .unwrap_or_else(|_| "5432".into())
            .parse()
            .expect("DB_PORT must be a valid u16");
        let user = std::env::var("DB_USER").unwrap_or_else(|_| "postgres".into());
        let password = std::env::var("DB_PASS").unwrap_or_default();
        let name = std::env::var("DB_NAME").unwrap_or_else(|_| "eventos".into());

        Self {
            host,
            port,
            user,
            password,
            name,
        }
    }

    /// Connection URL for the pool. `DATABASE_URL`, when set, wins.
    pub fn url(&self) -> String {
        if let Ok(url) = std::env::var("DATABASE_URL") {
            return url;
        }
        format!(
            "postgres://{}:{}@{}:{}/{}",
            self.user, self.password, self.host, self.port, self.name
        )
    }
}
