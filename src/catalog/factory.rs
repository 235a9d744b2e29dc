use std::time::Duration;
use reqwest::Client;
use crate::catalog::client::OpenLibraryClient;
use crate::catalog::domain::CatalogClient;
use crate::core::domain::Configuration;
use crate::core::library::LibraryResult;

pub fn create_catalog_client(config: &Configuration) -> LibraryResult<Box<dyn CatalogClient>> {
    let client = Client::builder()
        .timeout(Duration::from_secs(config.catalog_timeout_secs))
        .build()?;
    Ok(Box::new(OpenLibraryClient::new(client, config.catalog_url.as_str())))
}
