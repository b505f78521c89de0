use std::path::Path;

use tracing_subscriber::EnvFilter;

pub const LOG_FILTER_VAR: &str = "RUST_LOG";
const DEFAULT_LOG_FILTER: &str = "info";

/// Load `.env` and then build the tracing filter from `var`
///
/// `.env` is read first so a filter defined there takes effect. Variables
/// already set in the process environment win over the file.
/// - env_file: explicit `.env` path, or `None` to search from the working directory
pub fn load_env_filter(env_file: Option<&Path>, var: &str) -> EnvFilter {
    match env_file {
        Some(path) => {
            dotenvy::from_path(path).ok();
        }
        None => {
            dotenvy::dotenv().ok();
        }
    }

    EnvFilter::try_from_env(var).unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn should_read_filter_defined_in_env_file() {
        // Arrange
        let path = std::env::temp_dir().join(format!("pull-date-{}.env", std::process::id()));
        fs::write(&path, "PULL_DATE_TEST_LOG_FILTER=debug\n").unwrap();

        // Act
        let filter = load_env_filter(Some(&path), "PULL_DATE_TEST_LOG_FILTER");
        fs::remove_file(&path).ok();

        // Assert
        assert_eq!(filter.to_string(), "debug");
    }

    #[test]
    fn should_fall_back_to_info_when_filter_unset() {
        // Arrange
        let path = std::env::temp_dir().join("pull-date-missing.env");

        // Act
        let filter = load_env_filter(Some(&path), "PULL_DATE_UNSET_LOG_FILTER");

        // Assert
        assert_eq!(filter.to_string(), "info");
    }
}
