use anyhow::{Context, Result};

use crate::constants::SEED_ENV_VAR;

/// Startup settings read from the environment.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Config {
    /// Seed for the shared forecast generator; OS entropy when `None`
    pub forecast_seed: Option<u64>,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let forecast_seed = match lookup(SEED_ENV_VAR) {
            Some(raw) if !raw.trim().is_empty() => Some(
                raw.trim()
                    .parse::<u64>()
                    .with_context(|| format!("{} must be an unsigned integer, got {:?}", SEED_ENV_VAR, raw))?,
            ),
            _ => None,
        };

        Ok(Self { forecast_seed })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lookup_with(value: Option<&'static str>) -> impl Fn(&str) -> Option<String> {
        move |key: &str| {
            assert_eq!(key, SEED_ENV_VAR);
            value.map(String::from)
        }
    }

    #[test]
    fn test_unset_seed_uses_entropy() {
        let config = Config::from_lookup(lookup_with(None)).unwrap();
        assert_eq!(config.forecast_seed, None);
    }

    #[test]
    fn test_blank_seed_is_treated_as_unset() {
        let config = Config::from_lookup(lookup_with(Some("  "))).unwrap();
        assert_eq!(config.forecast_seed, None);
    }

    #[test]
    fn test_numeric_seed_is_parsed() {
        let config = Config::from_lookup(lookup_with(Some(" 1234 "))).unwrap();
        assert_eq!(config.forecast_seed, Some(1234));
    }

    #[test]
    fn test_invalid_seed_is_rejected() {
        let err = Config::from_lookup(lookup_with(Some("-5"))).unwrap_err();
        assert!(err.to_string().contains(SEED_ENV_VAR), "unexpected error: {}", err);
    }
}
