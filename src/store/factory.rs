use crate::core::domain::Configuration;
use crate::core::library::LibraryResult;
use crate::core::repository::{DocumentStore, RepositoryStore};
use crate::store::json_file_store::JsonFileDocumentStore;
use crate::store::memory_store::MemoryDocumentStore;

pub(crate) async fn create_document_store(config: &Configuration, store: RepositoryStore,
                                          key_field: &str) -> LibraryResult<Box<dyn DocumentStore>> {
    match store {
        RepositoryStore::JsonFile => {
            let file_store = JsonFileDocumentStore::open(config.database_file.as_str(), key_field).await?;
            Ok(Box::new(file_store))
        }
        RepositoryStore::InMemory => {
            Ok(Box::new(MemoryDocumentStore::new()))
        }
    }
}
