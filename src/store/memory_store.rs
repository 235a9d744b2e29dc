use async_trait::async_trait;
use serde_json::Value;
use tokio::sync::RwLock;
use tracing::debug;
use crate::core::library::{LibraryError, LibraryResult};
use crate::core::repository::DocumentStore;
use crate::store::Documents;

#[derive(Debug, Default)]
struct MemoryState {
    documents: Documents,
    closed: bool,
}

// MemoryDocumentStore keeps documents in process memory, mostly for tests and dev mode.
#[derive(Debug, Default)]
pub struct MemoryDocumentStore {
    state: RwLock<MemoryState>,
}

impl MemoryDocumentStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn is_closed(&self) -> bool {
        self.state.read().await.closed
    }
}

fn closed_error() -> LibraryError {
    LibraryError::runtime("memory document store is closed", None)
}

#[async_trait]
impl DocumentStore for MemoryDocumentStore {
    async fn insert(&self, key: &str, document: Value) -> LibraryResult<usize> {
        let mut state = self.state.write().await;
        if state.closed {
            return Err(closed_error());
        }
        Ok(state.documents.insert(key, document))
    }

    async fn update(&self, key: &str, document: Value) -> LibraryResult<usize> {
        let mut state = self.state.write().await;
        if state.closed {
            return Err(closed_error());
        }
        Ok(state.documents.update(key, document))
    }

    async fn get(&self, key: &str) -> LibraryResult<Option<Value>> {
        let state = self.state.read().await;
        if state.closed {
            return Err(closed_error());
        }
        Ok(state.documents.get(key))
    }

    async fn all(&self) -> LibraryResult<Vec<Value>> {
        let state = self.state.read().await;
        if state.closed {
            return Err(closed_error());
        }
        Ok(state.documents.all())
    }

    async fn count(&self) -> LibraryResult<usize> {
        let state = self.state.read().await;
        if state.closed {
            return Err(closed_error());
        }
        Ok(state.documents.len())
    }

    async fn purge(&self) -> LibraryResult<usize> {
        let mut state = self.state.write().await;
        if state.closed {
            return Err(closed_error());
        }
        let removed = state.documents.purge();
        debug!("purged {} documents from memory store", removed);
        Ok(removed)
    }

    async fn close(&self) -> LibraryResult<()> {
        self.state.write().await.closed = true;
        Ok(())
    }
}
