// src/config/env.rs
// DOCUMENTATION: Environment variable management
// PURPOSE: Load and validate configuration from .env files

use dotenv::dotenv;
use std::env;
use std::time::Duration;

/// Application configuration loaded from environment variables
/// DOCUMENTATION: Centralizes all configuration in one struct
/// Load with Config::from_env() at application startup
#[derive(Debug, Clone)]
pub struct Config {
    /// Hosted database project URL (e.g., "https://xyz.supabase.co")
    pub supabase_url: String,

    /// Public key used by the API server
    pub supabase_anon_key: String,

    /// Privileged key, preferred by the seed binary when present
    pub supabase_service_role_key: Option<String>,

    /// Server bind address (e.g., "0.0.0.0")
    pub server_address: String,

    /// Server listen port (default 3001)
    pub server_port: u16,

    /// Origins allowed to call the API; "*" allows any
    pub allowed_origins: Vec<String>,

    /// Environment: development, staging, production
    pub environment: String,

    /// Log level: debug, info, warn, error
    pub log_level: String,

    /// Requests allowed per client IP in one window
    pub rate_limit_max: u32,

    /// Rate limit window in seconds (default 15 minutes)
    pub rate_limit_window_secs: u64,

    /// Timeout for a single store call in seconds
    pub store_timeout_secs: u64,
}

impl Config {
    /// Load configuration from environment variables
    /// DOCUMENTATION: Reads from .env or process environment
    /// Called once at application startup
    pub fn from_env() -> Self {
        dotenv().ok();

        Config {
            supabase_url: env::var("SUPABASE_URL").unwrap_or_default(),

            supabase_anon_key: env::var("SUPABASE_ANON_KEY").unwrap_or_default(),

            supabase_service_role_key: env::var("SUPABASE_SERVICE_ROLE_KEY")
                .ok()
                .filter(|key| !key.trim().is_empty()),

            server_address: env::var("SERVER_ADDRESS").unwrap_or_else(|_| "0.0.0.0".to_string()),

            server_port: env::var("PORT")
                .unwrap_or_else(|_| "3001".to_string())
                .parse()
                .unwrap_or(3001),

            allowed_origins: parse_origins(
                &env::var("FRONTEND_URL").unwrap_or_else(|_| "http://localhost:3000".to_string()),
            ),

            environment: env::var("ENVIRONMENT").unwrap_or_else(|_| "development".to_string()),

            log_level: env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string()),

            rate_limit_max: env::var("RATE_LIMIT_MAX")
                .unwrap_or_else(|_| "100".to_string())
                .parse()
                .unwrap_or(100),

            rate_limit_window_secs: env::var("RATE_LIMIT_WINDOW_SECS")
                .unwrap_or_else(|_| "900".to_string())
                .parse()
                .unwrap_or(900),

            store_timeout_secs: env::var("STORE_TIMEOUT_SECS")
                .unwrap_or_else(|_| "30".to_string())
                .parse()
                .unwrap_or(30),
        }
    }

    pub fn is_production(&self) -> bool {
        self.environment.eq_ignore_ascii_case("production")
    }

    pub fn has_store_credentials(&self) -> bool {
        !self.supabase_url.trim().is_empty() && !self.supabase_anon_key.trim().is_empty()
    }

    /// Key for administrative jobs: service role key, falling back to the anon key
    pub fn seed_key(&self) -> &str {
        self.supabase_service_role_key
            .as_deref()
            .unwrap_or(&self.supabase_anon_key)
    }

    pub fn rate_limit_window(&self) -> Duration {
        Duration::from_secs(self.rate_limit_window_secs)
    }

    pub fn store_timeout(&self) -> Duration {
        Duration::from_secs(self.store_timeout_secs)
    }

    /// Validate critical configuration
    /// DOCUMENTATION: Missing store credentials only warn; the server then runs
    /// degraded and every store-backed endpoint answers 500
    pub fn validate(&self) -> Result<(), String> {
        if self.rate_limit_max == 0 {
            return Err("RATE_LIMIT_MAX must be greater than zero".to_string());
        }

        if self.rate_limit_window_secs == 0 {
            return Err("RATE_LIMIT_WINDOW_SECS must be greater than zero".to_string());
        }

        if !self.has_store_credentials() {
            log::warn!("SUPABASE_URL or SUPABASE_ANON_KEY not configured - store calls will fail");
        }

        Ok(())
    }
}

/// Split a comma-separated origin list, trimming whitespace and trailing slashes
fn parse_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|origin| origin.trim().trim_end_matches('/'))
        .filter(|origin| !origin.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> Config {
        Config {
            supabase_url: "https://abc.supabase.co".into(),
            supabase_anon_key: "anon".into(),
            supabase_service_role_key: None,
            server_address: "127.0.0.1".into(),
            server_port: 3001,
            allowed_origins: vec!["http://localhost:3000".into()],
            environment: "development".into(),
            log_level: "info".into(),
            rate_limit_max: 100,
            rate_limit_window_secs: 900,
            store_timeout_secs: 30,
        }
    }

    #[test]
    fn test_parse_origins() {
        assert_eq!(
            parse_origins(" https://studio.example.com/ , http://localhost:3000,,"),
            vec!["https://studio.example.com", "http://localhost:3000"]
        );
        assert_eq!(parse_origins("*"), vec!["*"]);
    }

    #[test]
    fn test_seed_key_prefers_service_role() {
        let mut cfg = config();
        assert_eq!(cfg.seed_key(), "anon");

        cfg.supabase_service_role_key = Some("service".into());
        assert_eq!(cfg.seed_key(), "service");
    }

    #[test]
    fn test_validate() {
        let mut cfg = config();
        assert!(cfg.validate().is_ok());

        cfg.supabase_anon_key = String::new();
        assert!(!cfg.has_store_credentials());
        assert!(cfg.validate().is_ok());

        cfg.rate_limit_max = 0;
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn test_is_production() {
        let mut cfg = config();
        assert!(!cfg.is_production());
        cfg.environment = "Production".into();
        assert!(cfg.is_production());
    }
}
