pub mod service;

use std::collections::BTreeSet;
use async_trait::async_trait;
use crate::core::library::{FieldValue, LibraryResult};
use crate::patrons::domain::Patron;

// LibraryService composes patron persistence with catalog lookups.
#[async_trait]
pub trait LibraryService: Sync + Send {
    // builds and stores a new patron, returns the store id or None if the member exists
    async fn register_patron(&self, first_name: &str, last_name: &str,
                             age: FieldValue, member_id: FieldValue) -> LibraryResult<Option<usize>>;
    async fn is_patron_registered(&self, patron: &Patron) -> LibraryResult<bool>;
    async fn borrow_book(&self, title: &str, patron: &mut Patron) -> LibraryResult<()>;
    async fn return_borrowed_book(&self, title: &str, patron: &mut Patron) -> LibraryResult<()>;
    fn is_book_borrowed(&self, title: &str, patron: &Patron) -> bool;
    async fn is_ebook(&self, title: &str) -> LibraryResult<bool>;
    async fn get_ebooks_count(&self, title: &str) -> LibraryResult<i64>;
    async fn is_book_by_author(&self, author: &str, title: &str) -> LibraryResult<bool>;
    async fn get_languages_for_book(&self, title: &str) -> LibraryResult<BTreeSet<String>>;
    async fn is_book_available(&self, title: &str) -> LibraryResult<bool>;
    async fn close(&self) -> LibraryResult<()>;
}
