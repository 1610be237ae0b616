// Server configuration loaded from environment variables.
// Decision: BELLAVUE_ prefix for all config, with local-dev defaults so the
// server starts with no environment at all.

use crate::services::Credentials;

#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// HTTP listen port.
    pub port: u16,
    /// Allowed CORS origin for the browser UI; permissive when unset.
    pub cors_origin: Option<String>,
    pub admin: Credentials,
    pub staff: Credentials,
}

impl ServerConfig {
    pub fn from_env() -> Self {
        let port = std::env::var("BELLAVUE_PORT")
            .ok()
            .and_then(|value| value.parse().ok())
            .unwrap_or(8080);

        let env_or = |key: &str, default: &str| {
            std::env::var(key).unwrap_or_else(|_| default.to_string())
        };

        ServerConfig {
            port,
            cors_origin: std::env::var("BELLAVUE_CORS_ORIGIN").ok(),
            admin: Credentials {
                username: env_or("BELLAVUE_ADMIN_USER", "admin"),
                password: env_or("BELLAVUE_ADMIN_PASSWORD", "admin"),
            },
            staff: Credentials {
                username: env_or("BELLAVUE_STAFF_USER", "team"),
                password: env_or("BELLAVUE_STAFF_PASSWORD", "bellavue"),
            },
        }
    }
}
