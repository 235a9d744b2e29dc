use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use crate::core::library::LibraryResult;

// DocumentStore abstracts key -> json document storage behind the repositories.
// Documents keep the order in which they were first inserted.
#[async_trait]
pub trait DocumentStore: Sync + Send {
    // inserts a document and returns the store-assigned doc id
    async fn insert(&self, key: &str, document: Value) -> LibraryResult<usize>;

    // replaces every document stored under key, returns number of replaced documents
    async fn update(&self, key: &str, document: Value) -> LibraryResult<usize>;

    // first document stored under key
    async fn get(&self, key: &str) -> LibraryResult<Option<Value>>;

    async fn all(&self) -> LibraryResult<Vec<Value>>;

    async fn count(&self) -> LibraryResult<usize>;

    // removes every document, returns number of removed documents
    async fn purge(&self) -> LibraryResult<usize>;

    async fn close(&self) -> LibraryResult<()>;
}

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone, Copy)]
pub enum RepositoryStore {
    JsonFile,
    InMemory,
}

// Builds the lookup key for a document field. The json encoding is used so that
// number and string values never collide.
pub fn document_key(value: &Value) -> String {
    value.to_string()
}

#[cfg(test)]
mod tests {
    use serde_json::json;
    use crate::core::repository::document_key;

    #[tokio::test]
    async fn test_should_build_document_key() {
        assert_eq!("123", document_key(&json!(123)));
        assert_eq!("\"123\"", document_key(&json!("123")));
        assert_ne!(document_key(&json!(123)), document_key(&json!("123")));
    }
}
