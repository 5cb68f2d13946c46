//! Application configuration module
//! Handles environment variable loading, configuration validation, and
//! application settings.

use crate::gateway::environment::EnvironmentBundle;
use std::env;

const DEFAULT_BASE_URL: &str = "https://api.paystack.co";

/// Main application configuration
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub logging: LoggingConfig,
    pub paystack: PaystackConfig,
}

/// Server configuration
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

/// Logging configuration
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    pub level: String,
    pub format: LogFormat,
}

/// Log format options
#[derive(Debug, Clone)]
pub enum LogFormat {
    Json,
    Plain,
}

/// Paystack integration configuration: one credential bundle per
/// environment, the active-environment selector, and the operator-owned
/// webhook secret and collection callback URL.
#[derive(Debug, Clone)]
pub struct PaystackConfig {
    pub sandbox: EnvironmentBundle,
    pub live: EnvironmentBundle,
    pub active_env: String,
    pub webhook_secret: String,
    pub callback_url: String,
}

impl AppConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if it exists
        let _ = dotenv::dotenv().ok();

        Ok(AppConfig {
            server: ServerConfig::from_env()?,
            logging: LoggingConfig::from_env()?,
            paystack: PaystackConfig::from_env()?,
        })
    }

    /// Validate the entire configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.server.validate()?;
        self.logging.validate()?;
        self.paystack.validate()?;

        Ok(())
    }
}

impl ServerConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(ServerConfig {
            host: env::var("SERVER_HOST").unwrap_or_else(|_| "127.0.0.1".to_string()),
            port: env::var("SERVER_PORT")
                .unwrap_or_else(|_| "8000".to_string())
                .parse()
                .map_err(|_| ConfigError::InvalidValue("SERVER_PORT".to_string()))?,
        })
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.port == 0 {
            return Err(ConfigError::InvalidValue(
                "SERVER_PORT cannot be 0".to_string(),
            ));
        }

        if self.host.is_empty() {
            return Err(ConfigError::InvalidValue(
                "SERVER_HOST cannot be empty".to_string(),
            ));
        }

        Ok(())
    }
}

impl LoggingConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(LoggingConfig {
            level: env::var("LOG_LEVEL").unwrap_or_else(|_| "INFO".to_string()),
            format: match env::var("LOG_FORMAT")
                .unwrap_or_else(|_| "plain".to_string())
                .as_str()
            {
                "json" => LogFormat::Json,
                _ => LogFormat::Plain,
            },
        })
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let valid_levels = ["TRACE", "DEBUG", "INFO", "WARN", "ERROR"];
        if !valid_levels.contains(&self.level.to_uppercase().as_str()) {
            return Err(ConfigError::InvalidValue("LOG_LEVEL".to_string()));
        }

        Ok(())
    }
}

impl PaystackConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(PaystackConfig {
            sandbox: EnvironmentBundle {
                secret_key: env::var("PAYSTACK_SANDBOX_SECRET_KEY").unwrap_or_default(),
                public_key: env::var("PAYSTACK_SANDBOX_PUBLIC_KEY").unwrap_or_default(),
                base_url: env::var("PAYSTACK_SANDBOX_BASE_URL")
                    .unwrap_or_else(|_| DEFAULT_BASE_URL.to_string()),
            },
            live: EnvironmentBundle {
                secret_key: env::var("PAYSTACK_LIVE_SECRET_KEY").unwrap_or_default(),
                public_key: env::var("PAYSTACK_LIVE_PUBLIC_KEY").unwrap_or_default(),
                base_url: env::var("PAYSTACK_LIVE_BASE_URL")
                    .unwrap_or_else(|_| DEFAULT_BASE_URL.to_string()),
            },
            active_env: env::var("PAYSTACK_ENV").unwrap_or_else(|_| "sandbox".to_string()),
            webhook_secret: env::var("PAYSTACK_WEBHOOK_SECRET")
                .map_err(|_| ConfigError::MissingVariable("PAYSTACK_WEBHOOK_SECRET".to_string()))?,
            callback_url: env::var("PAYSTACK_CALLBACK_URL")
                .map_err(|_| ConfigError::MissingVariable("PAYSTACK_CALLBACK_URL".to_string()))?,
        })
    }

    /// Whether the selector picks the live environment.
    pub fn is_live(&self) -> bool {
        self.active_env.trim().eq_ignore_ascii_case("production")
    }

    fn active_bundle(&self) -> &EnvironmentBundle {
        if self.is_live() {
            &self.live
        } else {
            &self.sandbox
        }
    }

    /// The active bundle must be complete at startup; resolution at call
    /// time is infallible by contract.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let active = self.active_bundle();
        let env_name = if self.is_live() { "LIVE" } else { "SANDBOX" };

        if active.secret_key.trim().is_empty() {
            return Err(ConfigError::InvalidValue(format!(
                "PAYSTACK_{}_SECRET_KEY cannot be empty for the active environment",
                env_name
            )));
        }

        if !active.base_url.starts_with("http://") && !active.base_url.starts_with("https://") {
            return Err(ConfigError::InvalidValue(format!(
                "PAYSTACK_{}_BASE_URL must be a valid URL",
                env_name
            )));
        }

        if self.webhook_secret.trim().is_empty() {
            return Err(ConfigError::InvalidValue(
                "PAYSTACK_WEBHOOK_SECRET cannot be empty".to_string(),
            ));
        }

        if !self.callback_url.starts_with("http://") && !self.callback_url.starts_with("https://") {
            return Err(ConfigError::InvalidValue(
                "PAYSTACK_CALLBACK_URL must be a valid URL".to_string(),
            ));
        }

        Ok(())
    }
}

/// Configuration error types
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing environment variable: {0}")]
    MissingVariable(String),

    #[error("Invalid value for configuration: {0}")]
    InvalidValue(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    fn paystack_config() -> PaystackConfig {
        PaystackConfig {
            sandbox: EnvironmentBundle {
                secret_key: "sk_test_abc".to_string(),
                public_key: "pk_test_abc".to_string(),
                base_url: DEFAULT_BASE_URL.to_string(),
            },
            live: EnvironmentBundle {
                secret_key: "sk_live_abc".to_string(),
                public_key: "pk_live_abc".to_string(),
                base_url: DEFAULT_BASE_URL.to_string(),
            },
            active_env: "sandbox".to_string(),
            webhook_secret: "whsec_test".to_string(),
            callback_url: "https://merchant.example.com/paystack/callback".to_string(),
        }
    }

    #[test]
    fn test_server_config_validation() {
        let config = ServerConfig {
            host: "127.0.0.1".to_string(),
            port: 8000,
        };

        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_invalid_port_validation() {
        let config = ServerConfig {
            host: "127.0.0.1".to_string(),
            port: 0, // Invalid port
        };

        assert!(config.validate().is_err());
    }

    #[test]
    fn paystack_config_accepts_complete_active_bundle() {
        assert!(paystack_config().validate().is_ok());
    }

    #[test]
    fn missing_active_secret_key_is_rejected_at_startup() {
        let mut config = paystack_config();
        config.active_env = "production".to_string();
        config.live.secret_key = String::new();

        assert!(config.validate().is_err());
    }

    #[test]
    fn missing_inactive_bundle_is_tolerated() {
        let mut config = paystack_config();
        config.live.secret_key = String::new();
        config.live.public_key = String::new();

        // Sandbox is active; the live bundle may stay unset.
        assert!(config.validate().is_ok());
    }

    #[test]
    fn non_url_callback_is_rejected() {
        let mut config = paystack_config();
        config.callback_url = "merchant.example.com".to_string();

        assert!(config.validate().is_err());
    }
}
