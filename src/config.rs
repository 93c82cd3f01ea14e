use anyhow::{Context, Result};
use http::HeaderValue;
use sqlx::mysql::MySqlConnectOptions;

const DEFAULT_DB_HOST: &str = "localhost";
const DEFAULT_DB_PORT: u16 = 3306;
const DEFAULT_DB_USER: &str = "root";
const DEFAULT_DB_PASS: &str = "root";
const DEFAULT_DB_NAME: &str = "todo_db";
const DEFAULT_MAX_CONNECTIONS: u32 = 10;
const DEFAULT_PORT: u16 = 5000;
const DEFAULT_CORS_ORIGIN: &str = "http://localhost:5173";

#[derive(Clone)]
pub struct TodoConfig {
    pub db_host: String,
    pub db_port: u16,
    pub db_user: String,
    pub db_pass: String,
    pub db_name: String,
    pub max_connections: u32,
    pub port: u16,
    pub cors_origin: HeaderValue,
}

impl TodoConfig {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from any key lookup. Every key is optional; numeric
    /// values that fail to parse fall back to their default.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let string_or = |key: &str, default: &str| lookup(key).unwrap_or_else(|| default.to_string());

        let db_port = lookup("DB_PORT")
            .and_then(|val| val.parse::<u16>().ok())
            .unwrap_or(DEFAULT_DB_PORT);

        let max_connections = lookup("DB_MAX_CONNECTIONS")
            .and_then(|val| val.parse::<u32>().ok())
            .filter(|val| *val > 0)
            .unwrap_or(DEFAULT_MAX_CONNECTIONS);

        let port = lookup("PORT")
            .and_then(|val| val.parse::<u16>().ok())
            .unwrap_or(DEFAULT_PORT);

        let cors_origin = string_or("CORS_ORIGIN", DEFAULT_CORS_ORIGIN);
        let cors_origin = HeaderValue::from_str(&cors_origin)
            .with_context(|| format!("CORS_ORIGIN {:?} is not a valid header value", cors_origin))?;

        Ok(Self {
            db_host: string_or("DB_HOST", DEFAULT_DB_HOST),
            db_port,
            db_user: string_or("DB_USER", DEFAULT_DB_USER),
            db_pass: string_or("DB_PASS", DEFAULT_DB_PASS),
            db_name: string_or("DB_NAME", DEFAULT_DB_NAME),
            max_connections,
            port,
            cors_origin,
        })
    }

    pub fn connect_options(&self) -> MySqlConnectOptions {
        MySqlConnectOptions::new()
            .host(&self.db_host)
            .port(self.db_port)
            .username(&self.db_user)
            .password(&self.db_pass)
            .database(&self.db_name)
    }

    pub fn listen_address(&self) -> String {
        format!("0.0.0.0:{}", self.port)
    }
}
