//! Configuration management for the intake server.
//!
//! Every setting has a built-in default, so the server runs with no
//! environment at all. Values can be overridden from the environment or a
//! `.env` file.

use crate::error::{ConfigError, ConfigResult};
use crate::message::deep_link::{DeepLinkTarget, DEFAULT_HOST, DEFAULT_RECIPIENT};
use std::env;
use std::time::Duration;

/// Configuration for the intake server.
#[derive(Debug, Clone)]
pub struct Config {
    /// Messaging service host (default: "wa.me")
    pub messaging_host: String,

    /// Recipient the messages are addressed to (default: the site's number)
    pub recipient_id: String,

    /// Delay between the success notice and the redirect, in milliseconds (default: 2000)
    pub redirect_delay_ms: u64,

    /// How long banners stay up, in milliseconds (default: 5000)
    pub notice_ttl_ms: u64,

    /// Launch the platform URL opener when a redirect fires (default: false)
    pub open_links: bool,

    /// Log level (default: "error")
    pub log_level: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Optional environment variables:
    /// - `INTAKE_MESSAGING_HOST`: Messaging service host (default: wa.me)
    /// - `INTAKE_RECIPIENT_ID`: Recipient identifier, digits only
    /// - `INTAKE_REDIRECT_DELAY_MS`: Redirect delay in milliseconds (default: 2000)
    /// - `INTAKE_NOTICE_TTL_MS`: Banner lifetime in milliseconds (default: 5000)
    /// - `INTAKE_OPEN_LINKS`: `true` to launch the system browser (default: false)
    /// - `LOG_LEVEL`: Logging level (default: "error")
    pub fn from_env() -> ConfigResult<Self> {
        // dotenvy::dotenv() doesn't print to stdout, which carries the MCP stream
        let _ = dotenvy::dotenv();

        let defaults = Config::default();

        let messaging_host =
            env::var("INTAKE_MESSAGING_HOST").unwrap_or(defaults.messaging_host);
        if messaging_host.trim().is_empty() || messaging_host.contains('/') {
            return Err(ConfigError::InvalidValue {
                var: "INTAKE_MESSAGING_HOST".to_string(),
                reason: "Must be a bare host name".to_string(),
            });
        }

        let recipient_id = env::var("INTAKE_RECIPIENT_ID").unwrap_or(defaults.recipient_id);
        if recipient_id.is_empty() || !recipient_id.chars().all(|c| c.is_ascii_digit()) {
            return Err(ConfigError::InvalidValue {
                var: "INTAKE_RECIPIENT_ID".to_string(),
                reason: "Must be digits only".to_string(),
            });
        }

        let redirect_delay_ms =
            Self::parse_env_u64("INTAKE_REDIRECT_DELAY_MS", defaults.redirect_delay_ms)?;
        let notice_ttl_ms = Self::parse_env_u64("INTAKE_NOTICE_TTL_MS", defaults.notice_ttl_ms)?;
        let open_links = Self::parse_env_bool("INTAKE_OPEN_LINKS", defaults.open_links)?;

        let log_level = env::var("LOG_LEVEL").unwrap_or(defaults.log_level);

        Ok(Config {
            messaging_host,
            recipient_id,
            redirect_delay_ms,
            notice_ttl_ms,
            open_links,
            log_level,
        })
    }

    /// Deep-link target built from the host and recipient.
    pub fn deep_link_target(&self) -> DeepLinkTarget {
        DeepLinkTarget::new(self.messaging_host.clone(), self.recipient_id.clone())
    }

    pub fn redirect_delay(&self) -> Duration {
        Duration::from_millis(self.redirect_delay_ms)
    }

    pub fn notice_ttl(&self) -> Duration {
        Duration::from_millis(self.notice_ttl_ms)
    }

    /// Parse an environment variable as u64 with a default value.
    fn parse_env_u64(var_name: &str, default: u64) -> ConfigResult<u64> {
        match env::var(var_name) {
            Ok(val) => val.parse::<u64>().map_err(|_| ConfigError::InvalidValue {
                var: var_name.to_string(),
                reason: format!("Must be a positive number, got: {}", val),
            }),
            Err(_) => Ok(default),
        }
    }

    /// Parse an environment variable as a boolean flag with a default value.
    fn parse_env_bool(var_name: &str, default: bool) -> ConfigResult<bool> {
        match env::var(var_name) {
            Ok(val) => match val.trim().to_ascii_lowercase().as_str() {
                "1" | "true" | "yes" | "on" => Ok(true),
                "0" | "false" | "no" | "off" => Ok(false),
                _ => Err(ConfigError::InvalidValue {
                    var: var_name.to_string(),
                    reason: format!("Must be true or false, got: {}", val),
                }),
            },
            Err(_) => Ok(default),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            messaging_host: DEFAULT_HOST.to_string(),
            recipient_id: DEFAULT_RECIPIENT.to_string(),
            redirect_delay_ms: 2000,
            notice_ttl_ms: 5000,
            open_links: false,
            log_level: "error".to_string(),
        }
    }
}
