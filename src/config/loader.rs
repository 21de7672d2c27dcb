//! Configuration loading functionality.

use std::fs;
use std::path::Path;

use crate::error::{AuditError, AuditResult};

use super::types::AuditConfig;

impl AuditConfig {
    /// Loads configuration from a YAML file.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the configuration file (e.g., "./audit.yaml")
    ///
    /// # Returns
    ///
    /// Returns the parsed configuration, or an error if the file is missing
    /// or contains invalid YAML. Fields absent from the file keep their
    /// defaults.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use payroll_audit::config::AuditConfig;
    ///
    /// let config = AuditConfig::load("./audit.yaml")?;
    /// # Ok::<(), payroll_audit::error::AuditError>(())
    /// ```
    pub fn load<P: AsRef<Path>>(path: P) -> AuditResult<Self> {
        let path = path.as_ref();
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| AuditError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| AuditError::ConfigParse {
            path: path_str,
            message: e.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;
    use std::io::Write;
    use std::str::FromStr;

    #[test]
    fn test_load_missing_file_returns_not_found() {
        let result = AuditConfig::load("/nonexistent/audit.yaml");

        match result {
            Err(AuditError::ConfigNotFound { path }) => {
                assert!(path.contains("audit.yaml"));
            }
            other => panic!("Expected ConfigNotFound error, got {:?}", other),
        }
    }

    #[test]
    fn test_load_invalid_yaml_returns_parse_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "tolerance: [not, a, number]").unwrap();

        let result = AuditConfig::load(file.path());
        assert!(matches!(result, Err(AuditError::ConfigParse { .. })));
    }

    #[test]
    fn test_load_valid_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "tolerance: \"0.1\"").unwrap();
        writeln!(file, "top_mismatch_count: 20").unwrap();

        let config = AuditConfig::load(file.path()).unwrap();
        assert_eq!(config.tolerance, Decimal::from_str("0.1").unwrap());
        assert_eq!(config.top_mismatch_count, 20);
        assert_eq!(config.top_employee_count, 10);
    }
}
