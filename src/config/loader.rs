//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading payroll
//! configuration from YAML files.

use serde::Deserialize;
use std::fs;
use std::path::Path;

use crate::error::{EngineError, EngineResult};

use super::types::{OvertimeConfig, PayrollConfig, SuperannuationConfig, TaxTable};

/// File structure of `payroll.yaml`.
#[derive(Debug, Clone, Deserialize)]
struct SettingsFile {
    overtime: OvertimeConfig,
    superannuation: SuperannuationConfig,
}

/// Loads and provides access to payroll configuration.
///
/// The `ConfigLoader` reads YAML configuration files from a directory
/// and validates the tax bracket table before use.
///
/// # Directory Structure
///
/// The configuration directory should have the following structure:
/// ```text
/// config/payroll/
/// ├── payroll.yaml       # Overtime threshold/multiplier, super defaults
/// └── tax_brackets.yaml  # Progressive tax bracket table
/// ```
///
/// # Example
///
/// ```no_run
/// use payroll_engine::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/payroll").unwrap();
/// let threshold = loader.config().overtime().threshold_hours;
/// println!("Overtime above {} hours", threshold);
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    config: PayrollConfig,
}

impl ConfigLoader {
    /// Loads configuration from the specified directory.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the configuration directory (e.g., "./config/payroll")
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` instance on success, or an error if:
    /// - Any required file is missing
    /// - Any file contains invalid YAML
    /// - The tax bracket table fails validation
    ///
    /// # Example
    ///
    /// ```no_run
    /// use payroll_engine::config::ConfigLoader;
    ///
    /// let loader = ConfigLoader::load("./config/payroll")?;
    /// # Ok::<(), payroll_engine::error::EngineError>(())
    /// ```
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();

        // Load payroll.yaml
        let settings_path = path.join("payroll.yaml");
        let settings = Self::load_yaml::<SettingsFile>(&settings_path)?;

        // Load tax_brackets.yaml
        let tax_path = path.join("tax_brackets.yaml");
        let tax = Self::load_yaml::<TaxTable>(&tax_path)?;
        tax.validate()?;

        let config = PayrollConfig::new(settings.overtime, settings.superannuation, tax);

        Ok(Self { config })
    }

    /// Creates a loader around the built-in default configuration.
    ///
    /// Useful in tests and benchmarks where no filesystem access is
    /// wanted.
    pub fn with_defaults() -> Self {
        Self {
            config: PayrollConfig::default(),
        }
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> EngineResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    /// Returns the underlying payroll configuration.
    pub fn config(&self) -> &PayrollConfig {
        &self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn config_path() -> &'static str {
        "./config/payroll"
    }

    #[test]
    fn test_load_from_shipped_config_directory() {
        let loader = ConfigLoader::load(config_path()).unwrap();
        let config = loader.config();
        assert_eq!(config.overtime().threshold_hours, dec("38"));
        assert_eq!(config.overtime().multiplier, dec("1.5"));
        assert_eq!(config.superannuation().default_rate, dec("0.115"));
        assert_eq!(config.tax().brackets.len(), 6);
    }

    #[test]
    fn test_loaded_tax_table_matches_default() {
        let loader = ConfigLoader::load(config_path()).unwrap();
        assert_eq!(*loader.config().tax(), TaxTable::default());
    }

    #[test]
    fn test_load_missing_directory_returns_not_found() {
        let result = ConfigLoader::load("./config/does_not_exist");
        assert!(matches!(
            result,
            Err(EngineError::ConfigNotFound { .. })
        ));
    }

    #[test]
    fn test_load_invalid_yaml_returns_parse_error() {
        let dir = std::env::temp_dir().join(format!("payroll_cfg_{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        std::fs::write(dir.join("payroll.yaml"), "overtime: [not a map").unwrap();

        let result = ConfigLoader::load(&dir);
        assert!(matches!(
            result,
            Err(EngineError::ConfigParseError { .. })
        ));

        std::fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_with_defaults_matches_default_config() {
        let loader = ConfigLoader::with_defaults();
        assert_eq!(loader.config().overtime().threshold_hours, dec("38"));
        assert_eq!(*loader.config().tax(), TaxTable::default());
    }
}
