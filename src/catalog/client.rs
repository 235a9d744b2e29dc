use async_trait::async_trait;
use reqwest::Client;
use tracing::{debug, warn};
use crate::catalog::domain::CatalogClient;
use crate::catalog::dto::{BookInfo, EbookSummary, SearchResponse};
use crate::core::library::{LibraryError, LibraryResult};

// OpenLibraryClient queries the Open Library search endpoint, e.g. http://openlibrary.org/search.json
pub struct OpenLibraryClient {
    client: Client,
    search_url: String,
}

impl OpenLibraryClient {
    pub fn new(client: Client, search_url: &str) -> Self {
        Self {
            client,
            search_url: search_url.to_string(),
        }
    }

    // A non-success status is treated as an empty search.
    async fn search(&self, param: &str, value: &str) -> LibraryResult<Option<SearchResponse>> {
        debug!("catalog search {}={}", param, value);
        let response = self.client
            .get(self.search_url.as_str())
            .query(&[(param, value)])
            .send()
            .await?;
        let status = response.status();
        if !status.is_success() {
            warn!("catalog search {}={} failed with status {}", param, value, status);
            return Ok(None);
        }
        let body = response.text().await?;
        Ok(Some(serde_json::from_str(body.as_str())?))
    }
}

#[async_trait]
impl CatalogClient for OpenLibraryClient {
    async fn is_book_available(&self, title: &str) -> LibraryResult<bool> {
        Ok(self.search("q", title).await?
            .map(|res| !res.docs.is_empty())
            .unwrap_or(false))
    }

    async fn books_by_author(&self, author: &str) -> LibraryResult<Vec<String>> {
        Ok(self.search("author", author).await?
            .map(|res| res.docs.iter().map(|d| d.suggested_title()).collect())
            .unwrap_or_default())
    }

    async fn get_book_info(&self, title: &str) -> LibraryResult<Vec<BookInfo>> {
        Ok(self.search("q", title).await?
            .map(|res| res.docs.iter().map(BookInfo::from).collect())
            .unwrap_or_default())
    }

    async fn get_ebooks(&self, title: &str) -> LibraryResult<Vec<EbookSummary>> {
        Ok(self.search("q", title).await?
            .map(|res| res.docs.iter().filter_map(|d| d.to_ebook()).collect())
            .unwrap_or_default())
    }
}

impl From<reqwest::Error> for LibraryError {
    fn from(err: reqwest::Error) -> Self {
        let (retryable, reason) = retryable_http_error(&err);
        LibraryError::unavailable(format!("catalog request failed {:?}", err).as_str(), reason, retryable)
    }
}

fn retryable_http_error(err: &reqwest::Error) -> (bool, Option<String>) {
    if err.is_timeout() {
        (true, Some("TimeoutError".to_string()))
    } else if err.is_connect() {
        (true, Some("ConnectError".to_string()))
    } else if err.is_decode() {
        (false, Some("DecodeError".to_string()))
    } else if err.is_builder() {
        (false, Some("BuilderError".to_string()))
    } else if let Some(status) = err.status() {
        (status.is_server_error(), Some(status.to_string()))
    } else {
        (true, Some("Unknown".to_string()))
    }
}
