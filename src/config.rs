//! Application configuration loaded from environment variables.
//!
//! Configuration is loaded once at startup and validated before the server starts.
//!
//! ## Variables
//!
//! - `LISTEN` - Bind address (default: `0.0.0.0:3000`)
//! - `RUST_LOG` - Log level (default: `info`)
//! - `LOG_FORMAT` - Log format: `text` or `json` (default: `text`)
//! - `APP_ENV` - `development` or `production` (default: `production`).
//!   Development mode serves the Swagger UI and the `/boom` fault route.
//! - `JWT_KEY` - HMAC-SHA256 signing secret, at least 32 bytes
//! - `JWT_ISSUER` - Token issuer (default: `UserManagementAPI`)
//! - `JWT_AUDIENCE` - Token audience (default: `UserManagementAPIClients`)
//! - `SEED_USERS` - Seed demo users into an empty store (default: `true`)
//!
//! ```bash
//! export APP_ENV=development
//! export JWT_KEY="change-me-to-a-long-random-secret-value"
//! cargo run
//! ```

use anyhow::{Context, Result};
use std::env;
use std::fmt;
use std::str::FromStr;

pub const DEFAULT_JWT_KEY: &str = "dev-super-secret-key-min-32-chars-1234567890!!";
pub const DEFAULT_JWT_ISSUER: &str = "UserManagementAPI";
pub const DEFAULT_JWT_AUDIENCE: &str = "UserManagementAPIClients";

/// Minimum HMAC key length in bytes for HS256.
const MIN_JWT_KEY_LEN: usize = 32;

/// Hosting environment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Environment {
    Development,
    Production,
}

impl Environment {
    pub fn is_development(self) -> bool {
        self == Environment::Development
    }
}

impl FromStr for Environment {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "development" | "dev" => Ok(Environment::Development),
            "production" | "prod" => Ok(Environment::Production),
            other => anyhow::bail!("APP_ENV must be 'development' or 'production', got '{other}'"),
        }
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Environment::Development => write!(f, "development"),
            Environment::Production => write!(f, "production"),
        }
    }
}

/// Token signing and validation settings.
#[derive(Clone)]
pub struct JwtSettings {
    pub key: String,
    pub issuer: String,
    pub audience: String,
}

impl fmt::Debug for JwtSettings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("JwtSettings")
            .field("key", &"***")
            .field("issuer", &self.issuer)
            .field("audience", &self.audience)
            .finish()
    }
}

impl Default for JwtSettings {
    fn default() -> Self {
        Self {
            key: DEFAULT_JWT_KEY.to_string(),
            issuer: DEFAULT_JWT_ISSUER.to_string(),
            audience: DEFAULT_JWT_AUDIENCE.to_string(),
        }
    }
}

/// Service configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    pub listen_addr: String,
    pub log_level: String,
    pub log_format: String,
    pub environment: Environment,
    pub jwt: JwtSettings,
    /// Seed demo users into an empty store at startup.
    pub seed_users: bool,
}

impl Config {
    /// Loads configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if `APP_ENV` holds an unknown value.
    pub fn from_env() -> Result<Self> {
        let listen_addr = env::var("LISTEN").unwrap_or_else(|_| "0.0.0.0:3000".to_string());
        let log_level = env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
        let log_format = env::var("LOG_FORMAT").unwrap_or_else(|_| "text".to_string());

        let environment = env::var("APP_ENV")
            .ok()
            .map(|v| v.parse::<Environment>())
            .transpose()
            .context("Failed to parse APP_ENV")?
            .unwrap_or(Environment::Production);

        let jwt = JwtSettings {
            key: env::var("JWT_KEY").unwrap_or_else(|_| DEFAULT_JWT_KEY.to_string()),
            issuer: env::var("JWT_ISSUER").unwrap_or_else(|_| DEFAULT_JWT_ISSUER.to_string()),
            audience: env::var("JWT_AUDIENCE")
                .unwrap_or_else(|_| DEFAULT_JWT_AUDIENCE.to_string()),
        };

        let seed_users = env::var("SEED_USERS")
            .map(|v| v.eq_ignore_ascii_case("true") || v == "1")
            .unwrap_or(true);

        Ok(Self {
            listen_addr,
            log_level,
            log_format,
            environment,
            jwt,
            seed_users,
        })
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `log_format` is not `text` or `json`
    /// - `listen_addr` is not `host:port`
    /// - the JWT key is shorter than 32 bytes
    /// - the JWT issuer or audience is empty
    pub fn validate(&self) -> Result<()> {
        if self.log_format != "text" && self.log_format != "json" {
            anyhow::bail!(
                "LOG_FORMAT must be 'text' or 'json', got '{}'",
                self.log_format
            );
        }

        if !self.listen_addr.contains(':') {
            anyhow::bail!(
                "LISTEN must be in format 'host:port', got '{}'",
                self.listen_addr
            );
        }

        if self.jwt.key.len() < MIN_JWT_KEY_LEN {
            anyhow::bail!(
                "JWT_KEY must be at least {} bytes, got {}",
                MIN_JWT_KEY_LEN,
                self.jwt.key.len()
            );
        }

        if self.jwt.issuer.trim().is_empty() {
            anyhow::bail!("JWT_ISSUER must not be empty");
        }

        if self.jwt.audience.trim().is_empty() {
            anyhow::bail!("JWT_AUDIENCE must not be empty");
        }

        Ok(())
    }

    /// Prints configuration summary (without the signing key).
    pub fn print_summary(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Listen address: {}", self.listen_addr);
        tracing::info!("  Environment: {}", self.environment);
        tracing::info!("  Log level: {}", self.log_level);
        tracing::info!("  Log format: {}", self.log_format);
        tracing::info!("  JWT issuer: {}", self.jwt.issuer);
        tracing::info!("  JWT audience: {}", self.jwt.audience);
        tracing::info!("  Seed demo users: {}", self.seed_users);

        if self.jwt.key == DEFAULT_JWT_KEY {
            tracing::warn!("JWT_KEY is not set; using the built-in development key");
        }
    }
}

/// Loads and validates configuration from environment variables.
///
/// # Errors
///
/// Returns an error if a variable cannot be parsed or validation fails.
///
/// # Note
///
/// This function expects environment variables to be already loaded
/// (e.g., via `dotenvy::dotenv()` in `main.rs`).
pub fn load_from_env() -> Result<Config> {
    let config = Config::from_env()?;
    config.validate()?;
    Ok(config)
}
