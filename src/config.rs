use anyhow::{Context, Result};

#[derive(Debug, Clone)]
pub struct Config {
    // Translation resources
    pub translations_base_url: String,
    pub fetch_timeout_secs: u64,

    // Persisted preference
    pub preference_file: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            // Translation resources
            translations_base_url: std::env::var("TRANSLATIONS_BASE_URL")
                .context("TRANSLATIONS_BASE_URL not set")?,
            fetch_timeout_secs: std::env::var("FETCH_TIMEOUT_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(10),

            // Persisted preference
            preference_file: std::env::var("PREFERENCE_FILE")
                .unwrap_or_else(|_| "data/language_preference".to_string()),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    fn clear_env() {
        std::env::remove_var("TRANSLATIONS_BASE_URL");
        std::env::remove_var("FETCH_TIMEOUT_SECS");
        std::env::remove_var("PREFERENCE_FILE");
    }

    #[test]
    #[serial]
    fn test_from_env_requires_base_url() {
        clear_env();
        let result = Config::from_env();
        assert!(result.is_err());
        assert!(result
            .unwrap_err()
            .to_string()
            .contains("TRANSLATIONS_BASE_URL"));
    }

    #[test]
    #[serial]
    fn test_from_env_defaults() {
        clear_env();
        std::env::set_var("TRANSLATIONS_BASE_URL", "http://localhost:8080/languages");

        let config = Config::from_env().expect("Should succeed");
        assert_eq!(
            config.translations_base_url,
            "http://localhost:8080/languages"
        );
        assert_eq!(config.fetch_timeout_secs, 10);
        assert_eq!(config.preference_file, "data/language_preference");

        clear_env();
    }

    #[test]
    #[serial]
    fn test_from_env_overrides() {
        clear_env();
        std::env::set_var("TRANSLATIONS_BASE_URL", "http://cdn.example.test/i18n");
        std::env::set_var("FETCH_TIMEOUT_SECS", "3");
        std::env::set_var("PREFERENCE_FILE", "/tmp/pref");

        let config = Config::from_env().expect("Should succeed");
        assert_eq!(config.fetch_timeout_secs, 3);
        assert_eq!(config.preference_file, "/tmp/pref");

        clear_env();
    }

    #[test]
    #[serial]
    fn test_from_env_ignores_unparseable_timeout() {
        clear_env();
        std::env::set_var("TRANSLATIONS_BASE_URL", "http://localhost/languages");
        std::env::set_var("FETCH_TIMEOUT_SECS", "not-a-number");

        let config = Config::from_env().expect("Should succeed");
        assert_eq!(config.fetch_timeout_secs, 10);

        clear_env();
    }
}
