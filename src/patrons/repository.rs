pub(crate) mod doc_patron_repository;

use async_trait::async_trait;
use crate::core::library::{FieldValue, LibraryResult};
use crate::patrons::domain::Patron;

// PatronRepository persists patrons keyed by member id. Absent patrons, duplicate inserts,
// updates of unknown members and lookups of unknown members all return Ok(None).
#[async_trait]
pub trait PatronRepository: Sync + Send {
    // inserts patron unless a record with the same member id exists, returns the doc id
    async fn insert_patron(&self, patron: Option<&Patron>) -> LibraryResult<Option<usize>>;

    // overwrites an existing record, returns number of updated records
    async fn update_patron(&self, patron: Option<&Patron>) -> LibraryResult<Option<usize>>;

    async fn retrieve_patron(&self, member_id: &FieldValue) -> LibraryResult<Option<Patron>>;

    async fn get_patron_count(&self) -> LibraryResult<usize>;

    async fn get_all_patrons(&self) -> LibraryResult<Vec<Patron>>;

    async fn purge_all(&self) -> LibraryResult<usize>;

    async fn close(&self) -> LibraryResult<()>;
}

pub use doc_patron_repository::DocumentPatronRepository;
