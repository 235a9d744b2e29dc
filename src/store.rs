use serde_json::Value;

pub mod factory;
pub mod json_file_store;
pub mod memory_store;

// StoredDocument is a document together with its lookup key and store-assigned id
#[derive(Debug, PartialEq, Clone)]
pub(crate) struct StoredDocument {
    pub doc_id: usize,
    pub key: String,
    pub document: Value,
}

impl StoredDocument {
    pub(crate) fn new(doc_id: usize, key: &str, document: Value) -> Self {
        Self {
            doc_id,
            key: key.to_string(),
            document,
        }
    }
}

// Documents holds an ordered table of documents shared by the store adapters.
#[derive(Debug, Default, Clone)]
pub(crate) struct Documents {
    records: Vec<StoredDocument>,
    last_id: usize,
}

impl Documents {
    pub(crate) fn from_records(records: Vec<StoredDocument>) -> Self {
        let last_id = records.iter().map(|r| r.doc_id).max().unwrap_or(0);
        Self { records, last_id }
    }

    pub(crate) fn records(&self) -> &[StoredDocument] {
        &self.records
    }

    pub(crate) fn insert(&mut self, key: &str, document: Value) -> usize {
        self.last_id += 1;
        self.records.push(StoredDocument::new(self.last_id, key, document));
        self.last_id
    }

    pub(crate) fn update(&mut self, key: &str, document: Value) -> usize {
        let mut updated = 0;
        for record in self.records.iter_mut().filter(|r| r.key == key) {
            record.document = document.clone();
            updated += 1;
        }
        updated
    }

    pub(crate) fn get(&self, key: &str) -> Option<Value> {
        self.records.iter().find(|r| r.key == key).map(|r| r.document.clone())
    }

    pub(crate) fn all(&self) -> Vec<Value> {
        self.records.iter().map(|r| r.document.clone()).collect()
    }

    pub(crate) fn len(&self) -> usize {
        self.records.len()
    }

    // doc ids are not reused after a purge
    pub(crate) fn purge(&mut self) -> usize {
        let removed = self.records.len();
        self.records.clear();
        removed
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;
    use crate::store::{Documents, StoredDocument};

    #[tokio::test]
    async fn test_should_insert_get_documents() {
        let mut docs = Documents::default();
        assert_eq!(1, docs.insert("a", json!({"v": 1})));
        assert_eq!(2, docs.insert("b", json!({"v": 2})));
        assert_eq!(3, docs.insert("a", json!({"v": 3})));
        assert_eq!(Some(json!({"v": 1})), docs.get("a"));
        assert_eq!(None, docs.get("c"));
        assert_eq!(3, docs.len());
    }

    #[tokio::test]
    async fn test_should_update_all_matching_documents() {
        let mut docs = Documents::default();
        docs.insert("a", json!({"v": 1}));
        docs.insert("a", json!({"v": 2}));
        assert_eq!(2, docs.update("a", json!({"v": 9})));
        assert_eq!(0, docs.update("missing", json!({"v": 9})));
        assert_eq!(vec![json!({"v": 9}), json!({"v": 9})], docs.all());
    }

    #[tokio::test]
    async fn test_should_purge_without_reusing_ids() {
        let mut docs = Documents::from_records(vec![StoredDocument::new(7, "a", json!({}))]);
        assert_eq!(1, docs.purge());
        assert_eq!(0, docs.len());
        assert_eq!(8, docs.insert("b", json!({})));
    }
}
