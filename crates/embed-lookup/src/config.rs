//! Backend preference configuration

use serde::{Deserialize, Serialize};
use sparse_embed_core::{Error, Result};
use std::env;
use std::str::FromStr;
use std::sync::OnceLock;
use tracing::{debug, warn};

pub const SPARSE_EMBED_BACKEND_ENV: &str = "SPARSE_EMBED_BACKEND";

/// Which lookup strategies the dispatch facade may choose from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BackendPreference {
    /// Fastest applicable strategy, reference engine as fallback
    #[default]
    Auto,
    /// Always the reference engine
    Reference,
}

impl BackendPreference {
    pub fn allows_accelerated(self) -> bool {
        matches!(self, Self::Auto)
    }
}

impl FromStr for BackendPreference {
    type Err = Error;

    fn from_str(raw: &str) -> Result<Self> {
        match raw.trim().to_lowercase().as_str() {
            "auto" | "" | "default" => Ok(Self::Auto),
            "reference" | "scalar" | "base" => Ok(Self::Reference),
            other => Err(Error::InvalidParameter(format!(
                "Unknown backend preference '{other}', expected 'auto' or 'reference'"
            ))),
        }
    }
}

static BACKEND_PREFERENCE: OnceLock<BackendPreference> = OnceLock::new();

/// Process-wide preference, read once from `SPARSE_EMBED_BACKEND`
pub fn backend_preference() -> BackendPreference {
    *BACKEND_PREFERENCE.get_or_init(|| {
        let raw = env::var(SPARSE_EMBED_BACKEND_ENV).unwrap_or_default();
        match raw.parse::<BackendPreference>() {
            Ok(preference) => {
                debug!(?preference, "Resolved embedding lookup backend preference");
                preference
            }
            Err(_) => {
                warn!("Unknown {SPARSE_EMBED_BACKEND_ENV} value '{raw}', falling back to auto");
                BackendPreference::Auto
            }
        }
    })
}

/// Configuration of a [`Dispatcher`](crate::Dispatcher)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct LookupConfig {
    #[serde(default)]
    pub preference: BackendPreference,
}

impl LookupConfig {
    /// Configuration following the process-wide preference
    pub fn from_env() -> Self {
        Self {
            preference: backend_preference(),
        }
    }

    /// Configuration that never leaves the reference engine
    pub fn reference_only() -> Self {
        Self {
            preference: BackendPreference::Reference,
        }
    }

    pub fn with_preference(mut self, preference: BackendPreference) -> Self {
        self.preference = preference;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_preference() {
        assert_eq!("auto".parse::<BackendPreference>().unwrap(), BackendPreference::Auto);
        assert_eq!("".parse::<BackendPreference>().unwrap(), BackendPreference::Auto);
        assert_eq!(" Default ".parse::<BackendPreference>().unwrap(), BackendPreference::Auto);
        assert_eq!("scalar".parse::<BackendPreference>().unwrap(), BackendPreference::Reference);
        assert_eq!("REFERENCE".parse::<BackendPreference>().unwrap(), BackendPreference::Reference);
        assert_eq!("base".parse::<BackendPreference>().unwrap(), BackendPreference::Reference);
        assert!(matches!(
            "avx512".parse::<BackendPreference>(),
            Err(Error::InvalidParameter(_))
        ));
    }

    #[test]
    fn test_process_preference_is_stable() {
        assert_eq!(backend_preference(), backend_preference());
        assert_eq!(LookupConfig::from_env().preference, backend_preference());
    }

    #[test]
    fn test_config_builders() {
        assert_eq!(LookupConfig::default().preference, BackendPreference::Auto);
        assert!(!LookupConfig::reference_only().preference.allows_accelerated());
        let config = LookupConfig::reference_only().with_preference(BackendPreference::Auto);
        assert!(config.preference.allows_accelerated());
    }

    #[test]
    fn test_serde_round_trip() {
        let config = LookupConfig::reference_only();
        let json = serde_json::to_string(&config).unwrap();
        assert_eq!(json, r#"{"preference":"reference"}"#);
        let parsed: LookupConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, config);

        let parsed: LookupConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(parsed.preference, BackendPreference::Auto);
    }
}
