use std::path::{Path, PathBuf};
use async_trait::async_trait;
use serde_json::{Map, Value};
use tokio::sync::Mutex;
use tracing::{debug, info};
use crate::core::library::{LibraryError, LibraryResult};
use crate::core::repository::{document_key, DocumentStore};
use crate::store::{Documents, StoredDocument};

pub const DEFAULT_TABLE: &str = "_default";

#[derive(Debug)]
struct FileState {
    documents: Documents,
    closed: bool,
}

// JsonFileDocumentStore persists documents into a single json file laid out as
// {"_default": {"<doc_id>": {...}}}. The whole file is rewritten after every mutation.
#[derive(Debug)]
pub struct JsonFileDocumentStore {
    path: PathBuf,
    key_field: String,
    state: Mutex<FileState>,
}

impl JsonFileDocumentStore {
    // opens the store at path, documents are keyed by the value of key_field
    pub async fn open(path: impl AsRef<Path>, key_field: &str) -> LibraryResult<Self> {
        let path = path.as_ref().to_path_buf();
        let documents = match tokio::fs::read(&path).await {
            Ok(bytes) => parse_documents(&bytes, key_field)?,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Documents::default(),
            Err(err) => return Err(LibraryError::from(err)),
        };
        info!("opened document store {:?} with {} documents", path, documents.len());
        Ok(Self {
            path,
            key_field: key_field.to_string(),
            state: Mutex::new(FileState { documents, closed: false }),
        })
    }

    pub fn key_field(&self) -> &str {
        &self.key_field
    }

    async fn flush(&self, documents: &Documents) -> LibraryResult<()> {
        let mut table = Map::new();
        for record in documents.records() {
            table.insert(record.doc_id.to_string(), record.document.clone());
        }
        let mut root = Map::new();
        root.insert(DEFAULT_TABLE.to_string(), Value::Object(table));
        let bytes = serde_json::to_vec(&Value::Object(root))?;
        // a crash while writing must never leave a truncated db file behind
        let staging = staging_path(&self.path);
        tokio::fs::write(&staging, bytes).await?;
        tokio::fs::rename(&staging, &self.path).await?;
        Ok(())
    }

    fn closed_error(&self) -> LibraryError {
        LibraryError::runtime(format!("document store {:?} is closed", self.path).as_str(), None)
    }
}

fn staging_path(path: &Path) -> PathBuf {
    let mut name = path.file_name().map(|n| n.to_os_string()).unwrap_or_default();
    name.push(".tmp");
    path.with_file_name(name)
}

fn parse_documents(bytes: &[u8], key_field: &str) -> LibraryResult<Documents> {
    if bytes.iter().all(u8::is_ascii_whitespace) {
        return Ok(Documents::default());
    }
    let root: Value = serde_json::from_slice(bytes)?;
    let table = match root.get(DEFAULT_TABLE) {
        None => return Ok(Documents::default()),
        Some(Value::Object(table)) => table,
        Some(other) => {
            return Err(LibraryError::database(
                format!("table {} is not an object {:?}", DEFAULT_TABLE, other).as_str(), None, false));
        }
    };
    let mut records = Vec::with_capacity(table.len());
    for (id, document) in table {
        let doc_id = id.parse::<usize>().map_err(|_| LibraryError::database(
            format!("invalid document id {}", id).as_str(), None, false))?;
        let key = document_key(document.get(key_field).unwrap_or(&Value::Null));
        records.push(StoredDocument::new(doc_id, key.as_str(), document.clone()));
    }
    // object keys come back sorted as strings, restore insertion order
    records.sort_by_key(|r| r.doc_id);
    Ok(Documents::from_records(records))
}

#[async_trait]
impl DocumentStore for JsonFileDocumentStore {
    async fn insert(&self, key: &str, document: Value) -> LibraryResult<usize> {
        let mut state = self.state.lock().await;
        if state.closed {
            return Err(self.closed_error());
        }
        let mut documents = state.documents.clone();
        let doc_id = documents.insert(key, document);
        self.flush(&documents).await?;
        state.documents = documents;
        Ok(doc_id)
    }

    async fn update(&self, key: &str, document: Value) -> LibraryResult<usize> {
        let mut state = self.state.lock().await;
        if state.closed {
            return Err(self.closed_error());
        }
        let mut documents = state.documents.clone();
        let updated = documents.update(key, document);
        if updated > 0 {
            self.flush(&documents).await?;
            state.documents = documents;
        }
        Ok(updated)
    }

    async fn get(&self, key: &str) -> LibraryResult<Option<Value>> {
        let state = self.state.lock().await;
        if state.closed {
            return Err(self.closed_error());
        }
        Ok(state.documents.get(key))
    }

    async fn all(&self) -> LibraryResult<Vec<Value>> {
        let state = self.state.lock().await;
        if state.closed {
            return Err(self.closed_error());
        }
        Ok(state.documents.all())
    }

    async fn count(&self) -> LibraryResult<usize> {
        let state = self.state.lock().await;
        if state.closed {
            return Err(self.closed_error());
        }
        Ok(state.documents.len())
    }

    async fn purge(&self) -> LibraryResult<usize> {
        let mut state = self.state.lock().await;
        if state.closed {
            return Err(self.closed_error());
        }
        let mut documents = state.documents.clone();
        let removed = documents.purge();
        self.flush(&documents).await?;
        state.documents = documents;
        debug!("purged {} documents from {:?}", removed, self.path);
        Ok(removed)
    }

    async fn close(&self) -> LibraryResult<()> {
        let mut state = self.state.lock().await;
        if !state.closed {
            state.closed = true;
            info!("closed document store {:?}", self.path);
        }
        Ok(())
    }
}
