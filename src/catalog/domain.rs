use async_trait::async_trait;
use crate::catalog::dto::{BookInfo, EbookSummary};
use crate::core::library::LibraryResult;

// CatalogClient abstracts the external book catalog queried by the library.
#[async_trait]
pub trait CatalogClient: Sync + Send {
    // true when the catalog knows at least one book matching title
    async fn is_book_available(&self, title: &str) -> LibraryResult<bool>;

    async fn books_by_author(&self, author: &str) -> LibraryResult<Vec<String>>;

    async fn get_book_info(&self, title: &str) -> LibraryResult<Vec<BookInfo>>;

    // books matching title that have at least one ebook edition
    async fn get_ebooks(&self, title: &str) -> LibraryResult<Vec<EbookSummary>>;
}
