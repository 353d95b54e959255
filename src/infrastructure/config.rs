use super::errors::InfraResult;
use crate::domain::SwipeConfig;
use std::fs;
use std::io::ErrorKind;
use std::path::Path;
use tracing::info;

/// Default config file, looked up in the working directory.
pub const CONFIG_FILE: &str = "snackswipe.json";

pub struct ConfigRepository;

impl ConfigRepository {
    /// Reads and validates the config at `path`.
    ///
    /// A missing file is not an error and yields the defaults.
    pub fn load_or_default(path: &Path) -> InfraResult<SwipeConfig> {
        let content = match fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                info!(path = %path.display(), "no config file, using defaults");
                return Ok(SwipeConfig::default());
            }
            Err(e) => return Err(e.into()),
        };

        let config: SwipeConfig = serde_json::from_str(&content)?;
        config.validate()?;
        info!(path = %path.display(), "config loaded");
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::InfraError;
    use tempfile::tempdir;

    #[test]
    fn test_missing_file_gives_defaults() {
        let dir = tempdir().unwrap();
        let config = ConfigRepository::load_or_default(&dir.path().join(CONFIG_FILE)).unwrap();
        assert_eq!(config, SwipeConfig::default());
    }

    #[test]
    fn test_overrides_are_applied() {
        let dir = tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE);
        fs::write(&path, r#"{"starting_energy": 3, "vertical_threshold": 60.5}"#).unwrap();

        let config = ConfigRepository::load_or_default(&path).unwrap();
        assert_eq!(config.starting_energy, 3);
        assert_eq!(config.vertical_threshold, 60.5);
        assert_eq!(config.horizontal_threshold, 120.0);
    }

    #[test]
    fn test_malformed_file_is_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE);
        fs::write(&path, "{ not json").unwrap();
        assert!(matches!(ConfigRepository::load_or_default(&path), Err(InfraError::Json(_))));
    }

    #[test]
    fn test_invalid_values_are_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE);
        fs::write(&path, r#"{"horizontal_threshold": -5.0}"#).unwrap();
        assert!(matches!(ConfigRepository::load_or_default(&path), Err(InfraError::Config(_))));
    }
}
