use serde::{Deserialize, Serialize};

pub const DATABASE_FILE: &str = "db.json";
pub const CATALOG_URL: &str = "http://openlibrary.org/search.json";
pub const CATALOG_TIMEOUT_SECS: u64 = 10;

// Configuration abstracts config options for library system
#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub struct Configuration {
    pub branch_id: String,
    pub database_file: String,
    pub catalog_url: String,
    pub catalog_timeout_secs: u64,
}

impl Configuration {
    pub fn new(branch_id: &str) -> Self {
        Configuration {
            branch_id: branch_id.to_string(),
            database_file: DATABASE_FILE.to_string(),
            catalog_url: CATALOG_URL.to_string(),
            catalog_timeout_secs: CATALOG_TIMEOUT_SECS,
        }
    }

    // builds default configuration and applies LMS_* environment overrides
    pub fn from_env(branch_id: &str) -> Self {
        let mut config = Configuration::new(branch_id);
        if let Ok(file) = std::env::var("LMS_DATABASE_FILE") {
            config.database_file = file;
        }
        if let Ok(url) = std::env::var("LMS_CATALOG_URL") {
            config.catalog_url = url;
        }
        if let Some(secs) = std::env::var("LMS_CATALOG_TIMEOUT_SECS").ok()
            .and_then(|s| s.parse::<u64>().ok()) {
            config.catalog_timeout_secs = secs;
        }
        config
    }

    pub fn with_database_file(mut self, database_file: &str) -> Self {
        self.database_file = database_file.to_string();
        self
    }

    pub fn with_catalog_url(mut self, catalog_url: &str) -> Self {
        self.catalog_url = catalog_url.to_string();
        self
    }
}

#[cfg(test)]
mod tests {
    use crate::core::domain::Configuration;

    #[tokio::test]
    async fn test_should_build_config() {
        let config = Configuration::new("test");
        assert_eq!("test", config.branch_id.as_str());
        assert_eq!("db.json", config.database_file.as_str());
        assert_eq!("http://openlibrary.org/search.json", config.catalog_url.as_str());
        assert_eq!(10, config.catalog_timeout_secs);
    }

    #[tokio::test]
    async fn test_should_override_config() {
        let config = Configuration::new("test")
            .with_database_file("other.json")
            .with_catalog_url("http://localhost/search.json");
        assert_eq!("other.json", config.database_file.as_str());
        assert_eq!("http://localhost/search.json", config.catalog_url.as_str());
    }

    #[tokio::test]
    async fn test_should_build_config_from_env() {
        std::env::set_var("LMS_CATALOG_TIMEOUT_SECS", "3");
        std::env::set_var("LMS_CATALOG_URL", "http://127.0.0.1:1/search.json");
        let config = Configuration::from_env("env");
        std::env::remove_var("LMS_CATALOG_TIMEOUT_SECS");
        std::env::remove_var("LMS_CATALOG_URL");
        assert_eq!("env", config.branch_id.as_str());
        assert_eq!(3, config.catalog_timeout_secs);
        assert_eq!("http://127.0.0.1:1/search.json", config.catalog_url.as_str());
    }
}
