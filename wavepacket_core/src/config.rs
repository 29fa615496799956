//! Session configuration management via TOML files.
//!
//! The demo binaries read their packet, dispersion and sampling parameters
//! from TOML instead of interactive prompts. Every key has a default, so a
//! missing file or key never blocks a run.

use std::fmt;
use std::fs;
use std::io;
use std::path::Path;
use std::str::FromStr;

use serde::Serialize;
use toml::Value;

use crate::dispersion::Dispersion;

/// Session configuration loaded from a TOML file.
///
/// ```toml
/// [packet]
/// components = 50
/// seed = 42
/// frequency_span = 3.0
///
/// [dispersion]
/// relation = "linear"
/// c = 1.0
/// b = 1.0
///
/// [sampling]
/// position_span = 50.0
/// position_samples = 2000
/// time_span = 20.0
/// time_samples = 4096
/// ```
#[derive(Debug, Clone, Serialize)]
pub struct SessionConfig {
    /// Number of (frequency, amplitude) pairs to generate
    pub components: usize,
    /// Random seed for deterministic spectrum generation
    pub seed: u64,
    /// Upper bound of the generated frequency band (Hz)
    pub frequency_span: f64,
    /// Dispersion relation name: "linear", "quadratic", "cubic" or "gapped"
    pub relation: String,
    /// Dispersion parameter c
    pub dispersion_c: f64,
    /// Dispersion gap parameter b (gapped relation only)
    pub dispersion_b: f64,
    /// Position sweep covers [-position_span, position_span] (m)
    pub position_span: f64,
    /// Number of position samples
    pub position_samples: usize,
    /// Time sweep covers [0, time_span] (s)
    pub time_span: f64,
    /// Number of time samples
    pub time_samples: usize,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            components: 50,
            seed: 42,
            frequency_span: 3.0,
            relation: "linear".to_string(),
            dispersion_c: 1.0,
            dispersion_b: 1.0,
            position_span: 50.0,
            position_samples: 2000,
            time_span: 20.0,
            time_samples: 4096,
        }
    }
}

impl SessionConfig {
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let contents = fs::read_to_string(&path)?;
        Self::from_str(&contents)
    }

    /// Dispersion relation described by this configuration.
    pub fn dispersion(&self) -> Result<Dispersion, ConfigError> {
        match self.relation.as_str() {
            "linear" => Ok(Dispersion::Linear {
                c: self.dispersion_c,
            }),
            "quadratic" => Ok(Dispersion::Quadratic {
                c: self.dispersion_c,
            }),
            "cubic" => Ok(Dispersion::Cubic {
                c: self.dispersion_c,
            }),
            "gapped" => Ok(Dispersion::Gapped {
                b: self.dispersion_b,
                c: self.dispersion_c,
            }),
            other => Err(ConfigError::Parse(format!(
                "unknown dispersion relation '{}'",
                other
            ))),
        }
    }
}

impl FromStr for SessionConfig {
    type Err = ConfigError;

    fn from_str(toml_str: &str) -> Result<Self, ConfigError> {
        let root: Value = toml_str
            .parse()
            .map_err(|err: toml::de::Error| ConfigError::Parse(err.to_string()))?;
        let defaults = SessionConfig::default();

        Ok(SessionConfig {
            components: integer(&root, "packet", "components", defaults.components)?,
            seed: integer(&root, "packet", "seed", defaults.seed)?,
            frequency_span: float(&root, "packet", "frequency_span", defaults.frequency_span)?,
            relation: string(&root, "dispersion", "relation", defaults.relation)?,
            dispersion_c: float(&root, "dispersion", "c", defaults.dispersion_c)?,
            dispersion_b: float(&root, "dispersion", "b", defaults.dispersion_b)?,
            position_span: float(&root, "sampling", "position_span", defaults.position_span)?,
            position_samples: integer(
                &root,
                "sampling",
                "position_samples",
                defaults.position_samples,
            )?,
            time_span: float(&root, "sampling", "time_span", defaults.time_span)?,
            time_samples: integer(&root, "sampling", "time_samples", defaults.time_samples)?,
        })
    }
}

fn lookup<'a>(root: &'a Value, section: &str, key: &str) -> Option<&'a Value> {
    root.get(section).and_then(|table| table.get(key))
}

fn integer<T: TryFrom<i64>>(
    root: &Value,
    section: &str,
    key: &str,
    default: T,
) -> Result<T, ConfigError> {
    match lookup(root, section, key) {
        None => Ok(default),
        Some(value) => value
            .as_integer()
            .and_then(|raw| T::try_from(raw).ok())
            .ok_or_else(|| {
                ConfigError::Parse(format!("{}.{} must be a nonnegative integer", section, key))
            }),
    }
}

fn float(root: &Value, section: &str, key: &str, default: f64) -> Result<f64, ConfigError> {
    match lookup(root, section, key) {
        None => Ok(default),
        Some(value) => value
            .as_float()
            .or_else(|| value.as_integer().map(|raw| raw as f64))
            .ok_or_else(|| ConfigError::Parse(format!("{}.{} must be a number", section, key))),
    }
}

fn string(
    root: &Value,
    section: &str,
    key: &str,
    default: String,
) -> Result<String, ConfigError> {
    match lookup(root, section, key) {
        None => Ok(default),
        Some(value) => value
            .as_str()
            .map(str::to_string)
            .ok_or_else(|| ConfigError::Parse(format!("{}.{} must be a string", section, key))),
    }
}

#[derive(Debug)]
pub enum ConfigError {
    Io(io::Error),
    Parse(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io(err) => write!(f, "config I/O error: {}", err),
            ConfigError::Parse(msg) => write!(f, "config parse error: {}", msg),
        }
    }
}

impl std::error::Error for ConfigError {}

impl From<io::Error> for ConfigError {
    fn from(err: io::Error) -> Self {
        ConfigError::Io(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_when_empty() {
        let config = SessionConfig::from_str("").unwrap();
        assert_eq!(config.components, 50);
        assert_eq!(config.seed, 42);
        assert_eq!(config.relation, "linear");
    }

    #[test]
    fn test_full_parse() {
        let config = SessionConfig::from_str(
            r#"
            [packet]
            components = 120
            seed = 7
            frequency_span = 2.5

            [dispersion]
            relation = "gapped"
            c = 2.0
            b = 4

            [sampling]
            position_samples = 500
            "#,
        )
        .unwrap();
        assert_eq!(config.components, 120);
        assert_eq!(config.seed, 7);
        assert_eq!(config.frequency_span, 2.5);
        assert_eq!(config.relation, "gapped");
        assert_eq!(config.dispersion_c, 2.0);
        // Integers coerce to floats where a float is expected
        assert_eq!(config.dispersion_b, 4.0);
        assert_eq!(config.position_samples, 500);
        // Unset keys fall back
        assert_eq!(config.time_samples, 4096);
    }

    #[test]
    fn test_dispersion_mapping() {
        let mut config = SessionConfig::default();
        config.relation = "cubic".to_string();
        assert!(matches!(
            config.dispersion().unwrap(),
            Dispersion::Cubic { .. }
        ));

        config.relation = "nope".to_string();
        assert!(config.dispersion().is_err());
    }

    #[test]
    fn test_wrong_type_reports_key() {
        let err = SessionConfig::from_str("[packet]\ncomponents = \"many\"").unwrap_err();
        assert!(err.to_string().contains("packet.components"));
    }

    #[test]
    fn test_invalid_toml_rejected() {
        assert!(SessionConfig::from_str("[packet\ncomponents = 3").is_err());
    }
}
