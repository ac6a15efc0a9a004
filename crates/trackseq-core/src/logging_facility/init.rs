//! Logging initialization module
//!
//! Provides a single initialization point for the logging facility.

use std::str::FromStr;
use std::sync::Once;
use tracing_subscriber::{util::SubscriberInitExt, EnvFilter};

/// Environment variable naming the logging profile
pub const PROFILE_ENV_VAR: &str = "TRACKSEQ_LOG_PROFILE";

/// Logging profile configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Profile {
    /// Human-readable output for development
    #[default]
    Development,
    /// JSON structured output for production
    Production,
    /// Test capture mode for deterministic testing
    Test,
}

impl Profile {
    /// Read the profile from `TRACKSEQ_LOG_PROFILE`
    ///
    /// Unset or unrecognised values fall back to `Development`.
    pub fn from_env() -> Self {
        std::env::var(PROFILE_ENV_VAR)
            .ok()
            .and_then(|raw| raw.parse().ok())
            .unwrap_or_default()
    }

    fn default_directive(&self) -> &'static str {
        match self {
            Profile::Development => "trackseq=debug",
            Profile::Production => "trackseq=info",
            Profile::Test => "trackseq=trace",
        }
    }
}

impl FromStr for Profile {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "development" | "dev" => Ok(Profile::Development),
            "production" | "prod" => Ok(Profile::Production),
            "test" => Ok(Profile::Test),
            other => Err(format!("unknown logging profile: {}", other)),
        }
    }
}

static INIT_ONCE: Once = Once::new();

/// Initialize the logging facility
///
/// This function should be called once at application startup. Later calls
/// are ignored. `RUST_LOG` overrides the profile's default filter.
///
/// # Profiles
///
/// - **Development**: Human-readable logs with debug level
/// - **Production**: JSON structured logs with info level
/// - **Test**: Bare registry; use `init_test_capture()` to collect events
pub fn init(profile: Profile) {
    INIT_ONCE.call_once(|| {
        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(profile.default_directive()));
        match profile {
            Profile::Development => {
                tracing_subscriber::fmt().with_env_filter(filter).init();
            }
            Profile::Production => {
                tracing_subscriber::fmt()
                    .json()
                    .with_env_filter(filter)
                    .init();
            }
            Profile::Test => {
                tracing_subscriber::registry().init();
            }
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_idempotent() {
        init(Profile::Test);
        init(Profile::Test);
    }

    #[test]
    fn test_profile_parsing() {
        assert_eq!("prod".parse::<Profile>(), Ok(Profile::Production));
        assert_eq!(" Development ".parse::<Profile>(), Ok(Profile::Development));
        assert_eq!("test".parse::<Profile>(), Ok(Profile::Test));
        assert!("verbose".parse::<Profile>().is_err());
    }

    #[test]
    fn test_default_profile_is_development() {
        assert_eq!(Profile::default(), Profile::Development);
        assert_ne!(Profile::Development, Profile::Production);
    }
}
