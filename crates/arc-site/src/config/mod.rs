use std::env;
use std::fmt;
use std::net::{IpAddr, SocketAddr};
use std::path::PathBuf;
use std::time::Duration;

use url::Url;

use crate::enquiry::{EnquirySettings, FormVariant};
use crate::relay::RelayContract;

/// Distinguishes runtime behavior for different stages of the site.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEnvironment {
    Development,
    Test,
    Production,
}

impl AppEnvironment {
    fn from_str(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "prod" | "production" => Self::Production,
            "test" | "ci" => Self::Test,
            _ => Self::Development,
        }
    }
}

/// Top-level configuration for the site.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub environment: AppEnvironment,
    pub server: ServerConfig,
    pub telemetry: TelemetryConfig,
    pub relay: RelayConfig,
    pub site: SiteConfig,
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let environment = AppEnvironment::from_str(
            &env::var("APP_ENV").unwrap_or_else(|_| "development".to_string()),
        );

        let host = env::var("APP_HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
        let port = env::var("APP_PORT")
            .unwrap_or_else(|_| "3000".to_string())
            .parse::<u16>()
            .map_err(|_| ConfigError::InvalidPort)?;

        let log_level = env::var("APP_LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        Ok(Self {
            environment,
            server: ServerConfig { host, port },
            telemetry: TelemetryConfig { log_level },
            relay: RelayConfig::from_env()?,
            site: SiteConfig::from_env()?,
        })
    }
}

/// Settings controlling the HTTP server binding.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl ServerConfig {
    pub fn socket_addr(&self) -> Result<SocketAddr, ConfigError> {
        if self.host.eq_ignore_ascii_case("localhost") {
            return Ok(SocketAddr::new(IpAddr::from([127, 0, 0, 1]), self.port));
        }

        let ip: IpAddr = self
            .host
            .parse()
            .map_err(|source| ConfigError::InvalidHost { source })?;

        Ok(SocketAddr::new(ip, self.port))
    }
}

/// Tracing controls.
#[derive(Debug, Clone)]
pub struct TelemetryConfig {
    pub log_level: String,
}

/// Where and how enquiries are relayed.
#[derive(Debug, Clone)]
pub struct RelayConfig {
    /// Relay endpoint; `None` keeps enquiries in the local log.
    pub endpoint: Option<Url>,
    pub contract: RelayContract,
    /// Request timeout. Unset means the call waits for the relay.
    pub timeout: Option<Duration>,
}

impl RelayConfig {
    fn from_env() -> Result<Self, ConfigError> {
        let endpoint = match non_empty_var("ARC_RELAY_URL") {
            Some(raw) => Some(
                Url::parse(&raw).map_err(|source| ConfigError::InvalidRelayUrl {
                    value: raw.clone(),
                    source,
                })?,
            ),
            None => None,
        };

        let contract = match non_empty_var("ARC_RELAY_CONTRACT") {
            Some(raw) => raw
                .parse::<RelayContract>()
                .map_err(ConfigError::UnknownRelayContract)?,
            None => RelayContract::default(),
        };

        let timeout = match non_empty_var("ARC_RELAY_TIMEOUT_MS") {
            Some(raw) => Some(Duration::from_millis(raw.parse::<u64>().map_err(|_| {
                ConfigError::InvalidNumber {
                    variable: "ARC_RELAY_TIMEOUT_MS",
                }
            })?)),
            None => None,
        };

        Ok(Self {
            endpoint,
            contract,
            timeout,
        })
    }
}

/// Page content and enquiry form settings.
#[derive(Debug, Clone)]
pub struct SiteConfig {
    pub asset_dir: PathBuf,
    pub contact_email: String,
    pub modal_close_delay: Duration,
    pub page_close_delay: Duration,
}

impl SiteConfig {
    /// Close delays must stay within the range a visitor can read the confirmation in.
    pub const CLOSE_DELAY_RANGE_MS: std::ops::RangeInclusive<u64> = 1_500..=3_000;

    fn from_env() -> Result<Self, ConfigError> {
        let defaults = EnquirySettings::default();
        let asset_dir = non_empty_var("ARC_ASSET_DIR").unwrap_or_else(|| "public".to_string());
        let contact_email = non_empty_var("ARC_CONTACT_EMAIL").unwrap_or(defaults.contact_email);

        Ok(Self {
            asset_dir: PathBuf::from(asset_dir),
            contact_email,
            modal_close_delay: close_delay_var("ARC_MODAL_CLOSE_MS", FormVariant::Modal)?,
            page_close_delay: close_delay_var("ARC_PAGE_CLOSE_MS", FormVariant::Page)?,
        })
    }

    pub fn enquiry_settings(&self) -> EnquirySettings {
        EnquirySettings {
            contact_email: self.contact_email.clone(),
            modal_close_delay: self.modal_close_delay,
            page_close_delay: self.page_close_delay,
        }
    }
}

fn non_empty_var(name: &str) -> Option<String> {
    env::var(name)
        .ok()
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}

fn close_delay_var(variable: &'static str, variant: FormVariant) -> Result<Duration, ConfigError> {
    let Some(raw) = non_empty_var(variable) else {
        return Ok(variant.default_close_delay());
    };
    let millis = raw
        .parse::<u64>()
        .map_err(|_| ConfigError::InvalidNumber { variable })?;
    if !SiteConfig::CLOSE_DELAY_RANGE_MS.contains(&millis) {
        return Err(ConfigError::CloseDelayOutOfRange { variable, millis });
    }
    Ok(Duration::from_millis(millis))
}

#[derive(Debug)]
pub enum ConfigError {
    InvalidPort,
    InvalidHost {
        source: std::net::AddrParseError,
    },
    InvalidRelayUrl {
        value: String,
        source: url::ParseError,
    },
    UnknownRelayContract(String),
    InvalidNumber {
        variable: &'static str,
    },
    CloseDelayOutOfRange {
        variable: &'static str,
        millis: u64,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidPort => write!(f, "APP_PORT must be a valid u16"),
            ConfigError::InvalidHost { .. } => {
                write!(f, "APP_HOST must parse to an IPv4 or IPv6 address")
            }
            ConfigError::InvalidRelayUrl { value, .. } => {
                write!(f, "ARC_RELAY_URL '{value}' is not an absolute URL")
            }
            ConfigError::UnknownRelayContract(value) => write!(
                f,
                "ARC_RELAY_CONTRACT '{value}' is not supported (expected query or json)"
            ),
            ConfigError::InvalidNumber { variable } => {
                write!(f, "{variable} must be a whole number of milliseconds")
            }
            ConfigError::CloseDelayOutOfRange { variable, millis } => write!(
                f,
                "{variable}={millis} is outside the allowed {}..={} ms",
                SiteConfig::CLOSE_DELAY_RANGE_MS.start(),
                SiteConfig::CLOSE_DELAY_RANGE_MS.end()
            ),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::InvalidHost { source } => Some(source),
            ConfigError::InvalidRelayUrl { source, .. } => Some(source),
            ConfigError::InvalidPort
            | ConfigError::UnknownRelayContract(_)
            | ConfigError::InvalidNumber { .. }
            | ConfigError::CloseDelayOutOfRange { .. } => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use std::sync::{Mutex, OnceLock};

    fn env_guard() -> &'static Mutex<()> {
        static GUARD: OnceLock<Mutex<()>> = OnceLock::new();
        GUARD.get_or_init(|| Mutex::new(()))
    }

    fn reset_env() {
        for name in [
            "APP_ENV",
            "APP_HOST",
            "APP_PORT",
            "APP_LOG_LEVEL",
            "ARC_RELAY_URL",
            "ARC_RELAY_CONTRACT",
            "ARC_RELAY_TIMEOUT_MS",
            "ARC_ASSET_DIR",
            "ARC_CONTACT_EMAIL",
            "ARC_MODAL_CLOSE_MS",
            "ARC_PAGE_CLOSE_MS",
        ] {
            env::remove_var(name);
        }
    }

    #[test]
    fn load_uses_defaults_when_env_missing() {
        let _lock = env_guard().lock().expect("env mutex poisoned");
        reset_env();
        let config = AppConfig::load().expect("config loads with defaults");
        assert_eq!(config.environment, AppEnvironment::Development);
        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.server.port, 3000);
        assert_eq!(config.telemetry.log_level, "info");
        assert!(config.relay.endpoint.is_none());
        assert_eq!(config.relay.contract, RelayContract::Query);
        assert!(config.relay.timeout.is_none());
        assert_eq!(config.site.asset_dir, PathBuf::from("public"));
        assert_eq!(config.site.modal_close_delay, Duration::from_millis(2_000));
        assert_eq!(config.site.page_close_delay, Duration::from_millis(3_000));
    }

    #[test]
    fn accepts_localhost_host() {
        let _lock = env_guard().lock().expect("env mutex poisoned");
        reset_env();
        env::set_var("APP_HOST", "localhost");
        let config = AppConfig::load().expect("config loads");
        let addr = config.server.socket_addr().expect("localhost resolves");
        assert_eq!(addr, SocketAddr::new(IpAddr::from([127, 0, 0, 1]), 3000));
        reset_env();
    }

    #[test]
    fn relay_settings_are_read_from_env() {
        let _lock = env_guard().lock().expect("env mutex poisoned");
        reset_env();
        env::set_var("ARC_RELAY_URL", "https://script.example/macros/s/abc/exec");
        env::set_var("ARC_RELAY_CONTRACT", "json");
        env::set_var("ARC_RELAY_TIMEOUT_MS", "8000");
        env::set_var("ARC_CONTACT_EMAIL", "sales@arc.example");
        env::set_var("ARC_MODAL_CLOSE_MS", "1500");

        let config = AppConfig::load().expect("config loads");
        assert_eq!(
            config.relay.endpoint.as_ref().map(Url::as_str),
            Some("https://script.example/macros/s/abc/exec")
        );
        assert_eq!(config.relay.contract, RelayContract::Json);
        assert_eq!(config.relay.timeout, Some(Duration::from_secs(8)));

        let settings = config.site.enquiry_settings();
        assert_eq!(settings.contact_email, "sales@arc.example");
        assert_eq!(settings.close_delay(FormVariant::Modal), Duration::from_millis(1_500));
        reset_env();
    }

    #[test]
    fn rejects_bad_relay_values() {
        let _lock = env_guard().lock().expect("env mutex poisoned");
        reset_env();
        env::set_var("ARC_RELAY_URL", "not a url");
        assert!(matches!(
            AppConfig::load(),
            Err(ConfigError::InvalidRelayUrl { .. })
        ));

        reset_env();
        env::set_var("ARC_RELAY_CONTRACT", "carrier-pigeon");
        assert!(matches!(
            AppConfig::load(),
            Err(ConfigError::UnknownRelayContract(_))
        ));

        reset_env();
        env::set_var("ARC_PAGE_CLOSE_MS", "10000");
        assert!(matches!(
            AppConfig::load(),
            Err(ConfigError::CloseDelayOutOfRange {
                variable: "ARC_PAGE_CLOSE_MS",
                millis: 10_000
            })
        ));
        reset_env();
    }
}
