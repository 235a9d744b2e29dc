use async_trait::async_trait;
use serde_json::Value;
use tracing::debug;

use crate::core::library::{FieldValue, LibraryResult};
use crate::core::repository::{document_key, DocumentStore};
use crate::patrons::domain::Patron;
use crate::patrons::dto::PatronRecord;
use crate::patrons::repository::PatronRepository;

pub struct DocumentPatronRepository {
    store: Box<dyn DocumentStore>,
}

impl DocumentPatronRepository {
    pub fn new(store: Box<dyn DocumentStore>) -> Self {
        Self {
            store,
        }
    }

    fn member_key(member_id: &FieldValue) -> LibraryResult<String> {
        Ok(document_key(&serde_json::to_value(member_id)?))
    }
}

fn to_patron(document: Value) -> LibraryResult<Patron> {
    let record: PatronRecord = serde_json::from_value(document)?;
    Patron::try_from(&record)
}

#[async_trait]
impl PatronRepository for DocumentPatronRepository {
    async fn insert_patron(&self, patron: Option<&Patron>) -> LibraryResult<Option<usize>> {
        let Some(patron) = patron else {
            return Ok(None);
        };
        if self.retrieve_patron(patron.member_id()).await?.is_some() {
            debug!("patron {} already exists, skipping insert", patron.member_id());
            return Ok(None);
        }
        let key = Self::member_key(patron.member_id())?;
        let document = serde_json::to_value(PatronRecord::from(patron))?;
        self.store.insert(key.as_str(), document).await.map(Some)
    }

    async fn update_patron(&self, patron: Option<&Patron>) -> LibraryResult<Option<usize>> {
        let Some(patron) = patron else {
            return Ok(None);
        };
        if self.retrieve_patron(patron.member_id()).await?.is_none() {
            debug!("patron {} not found, skipping update", patron.member_id());
            return Ok(None);
        }
        let key = Self::member_key(patron.member_id())?;
        let document = serde_json::to_value(PatronRecord::from(patron))?;
        self.store.update(key.as_str(), document).await.map(Some)
    }

    async fn retrieve_patron(&self, member_id: &FieldValue) -> LibraryResult<Option<Patron>> {
        let key = Self::member_key(member_id)?;
        match self.store.get(key.as_str()).await? {
            Some(document) => to_patron(document).map(Some),
            None => Ok(None),
        }
    }

    async fn get_patron_count(&self) -> LibraryResult<usize> {
        self.store.count().await
    }

    async fn get_all_patrons(&self) -> LibraryResult<Vec<Patron>> {
        self.store.all().await?.into_iter().map(to_patron).collect()
    }

    async fn purge_all(&self) -> LibraryResult<usize> {
        self.store.purge().await
    }

    async fn close(&self) -> LibraryResult<()> {
        self.store.close().await
    }
}
