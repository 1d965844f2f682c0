//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading ATO tax
//! tables from YAML files.

use std::fs;
use std::path::Path;

use crate::error::{EngineError, EngineResult};
use crate::models::FinancialYear;

use super::types::{AtoTables, TaxYearTables};

/// Loads and provides access to the versioned ATO tax tables.
///
/// The `ConfigLoader` reads YAML table files from a directory, one file
/// per financial year, and provides lookup by year.
///
/// # Directory Structure
///
/// The configuration directory should have the following structure:
/// ```text
/// config/ato/
/// ├── 2024-25.yaml    # Tables for the 2024-25 financial year
/// └── 2025-26.yaml    # Added when the new year's figures are published
/// ```
///
/// # Example
///
/// ```no_run
/// use payg_engine::config::ConfigLoader;
/// use payg_engine::models::FinancialYear;
///
/// let loader = ConfigLoader::load("./config/ato").unwrap();
///
/// // Get the tables for a specific financial year
/// let tables = loader.for_year(FinancialYear::starting(2024)).unwrap();
/// println!("Super guarantee rate: {}", tables.superannuation.guarantee_rate);
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    tables: AtoTables,
}

impl ConfigLoader {
    /// Loads every tax table file from the specified directory.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the configuration directory (e.g., "./config/ato")
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` instance on success, or an error if:
    /// - The directory is missing or contains no `.yaml` files
    /// - Any file contains invalid YAML
    /// - Any table fails bracket validation
    ///
    /// # Example
    ///
    /// ```no_run
    /// use payg_engine::config::ConfigLoader;
    ///
    /// let loader = ConfigLoader::load("./config/ato")?;
    /// # Ok::<(), payg_engine::error::EngineError>(())
    /// ```
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let dir = path.as_ref();
        let dir_str = dir.display().to_string();

        if !dir.exists() {
            return Err(EngineError::ConfigNotFound { path: dir_str });
        }

        let entries = fs::read_dir(dir).map_err(|_| EngineError::ConfigNotFound {
            path: dir_str.clone(),
        })?;

        let mut year_tables = Vec::new();

        for entry in entries {
            let entry = entry.map_err(|_| EngineError::ConfigNotFound {
                path: dir_str.clone(),
            })?;

            let path = entry.path();
            if path.extension().is_some_and(|ext| ext == "yaml") {
                let tables = Self::load_yaml::<TaxYearTables>(&path)?;
                tables.validate()?;
                year_tables.push(tables);
            }
        }

        if year_tables.is_empty() {
            return Err(EngineError::ConfigNotFound {
                path: format!("{} (no tax table files found)", dir_str),
            });
        }

        Ok(Self {
            tables: AtoTables::new(year_tables),
        })
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

    /// Returns the underlying table set.
    pub fn tables(&self) -> &AtoTables {
        &self.tables
    }

    /// Returns the tables for a specific financial year.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use payg_engine::config::ConfigLoader;
    /// use payg_engine::models::FinancialYear;
    ///
    /// let loader = ConfigLoader::load("./config/ato")?;
    /// let tables = loader.for_year(FinancialYear::starting(2024))?;
    /// println!("Brackets: {}", tables.brackets.len());
    /// # Ok::<(), payg_engine::error::EngineError>(())
    /// ```
    pub fn for_year(&self, financial_year: FinancialYear) -> EngineResult<&TaxYearTables> {
        self.tables.for_year(financial_year)
    }

    /// Returns the tables for the most recent financial year on hand.
    pub fn latest(&self) -> EngineResult<&TaxYearTables> {
        self.tables.latest()
    }

    /// Resolves an optional financial year to its tables, defaulting to
    /// the most recent year.
    pub fn resolve(&self, financial_year: Option<FinancialYear>) -> EngineResult<&TaxYearTables> {
        self.tables.resolve(financial_year)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;
    use std::str::FromStr;

    fn config_path() -> &'static str {
        "./config/ato"
    }

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_load_valid_configuration() {
        let result = ConfigLoader::load(config_path());
        assert!(result.is_ok(), "Failed to load config: {:?}", result.err());

        let loader = result.unwrap();
        let latest = loader.latest().unwrap();
        assert_eq!(latest.financial_year, FinancialYear::starting(2024));
    }

    #[test]
    fn test_bracket_table_loaded_correctly() {
        let loader = ConfigLoader::load(config_path()).unwrap();
        let tables = loader.for_year(FinancialYear::starting(2024)).unwrap();

        assert_eq!(tables.brackets.len(), 5);

        let first = &tables.brackets[0];
        assert_eq!(first.min, Decimal::ZERO);
        assert_eq!(first.max, Some(dec("18200")));
        assert_eq!(first.rate, Decimal::ZERO);

        let top = &tables.brackets[4];
        assert_eq!(top.min, dec("180001"));
        assert_eq!(top.max, None);
        assert_eq!(top.rate, dec("0.45"));
        assert_eq!(top.base, dec("51667"));
    }

    #[test]
    fn test_medicare_parameters_loaded_correctly() {
        let loader = ConfigLoader::load(config_path()).unwrap();
        let tables = loader.latest().unwrap();

        assert_eq!(tables.medicare.levy_rate, dec("0.02"));
        assert_eq!(tables.medicare.surcharge_rate, dec("0.01"));
        assert_eq!(tables.medicare.surcharge_thresholds.single, dec("90000"));
        assert_eq!(tables.medicare.surcharge_thresholds.family, dec("180000"));
    }

    #[test]
    fn test_lito_parameters_loaded_correctly() {
        let loader = ConfigLoader::load(config_path()).unwrap();
        let tables = loader.latest().unwrap();

        assert_eq!(tables.lito.max_offset, dec("700"));
        assert_eq!(tables.lito.taper_start, dec("37500"));
        assert_eq!(tables.lito.taper_end, dec("45000"));
        assert_eq!(tables.lito.taper_rate, dec("0.05"));
    }

    #[test]
    fn test_superannuation_rate_loaded_correctly() {
        let loader = ConfigLoader::load(config_path()).unwrap();
        let tables = loader.latest().unwrap();

        assert_eq!(tables.superannuation.guarantee_rate, dec("0.115"));
    }

    #[test]
    fn test_for_year_unknown_returns_error() {
        let loader = ConfigLoader::load(config_path()).unwrap();

        let result = loader.for_year(FinancialYear::starting(2019));
        assert!(result.is_err());

        match result {
            Err(EngineError::TableNotFound { financial_year }) => {
                assert_eq!(financial_year, FinancialYear::starting(2019));
            }
            _ => panic!("Expected TableNotFound error"),
        }
    }

    #[test]
    fn test_load_missing_directory_returns_error() {
        let result = ConfigLoader::load("/nonexistent/path");
        assert!(result.is_err());

        match result {
            Err(EngineError::ConfigNotFound { path }) => {
                assert!(path.contains("/nonexistent/path"));
            }
            _ => panic!("Expected ConfigNotFound error"),
        }
    }
}
