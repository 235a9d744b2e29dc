use crate::core::domain::Configuration;
use crate::core::library::LibraryResult;
use crate::core::repository::RepositoryStore;
use crate::patrons::dto::MEMBER_ID_FIELD;
use crate::patrons::repository::{DocumentPatronRepository, PatronRepository};
use crate::store::factory::create_document_store;

pub async fn create_patron_repository(config: &Configuration, store: RepositoryStore) -> LibraryResult<Box<dyn PatronRepository>> {
    let doc_store = create_document_store(config, store, MEMBER_ID_FIELD).await?;
    Ok(Box::new(DocumentPatronRepository::new(doc_store)))
}

#[cfg(test)]
mod tests {
    use crate::core::domain::Configuration;
    use crate::core::repository::RepositoryStore;
    use crate::patrons::domain::Patron;
    use crate::patrons::factory;

    #[tokio::test]
    async fn test_should_create_patron_repository() {
        let repo = factory::create_patron_repository(&Configuration::new("test"), RepositoryStore::InMemory)
            .await.expect("should create repository");
        let patron = Patron::new("Big", "Bob", 20, 5).expect("should build patron");
        assert!(repo.insert_patron(Some(&patron)).await.expect("should insert patron").is_some());
        assert_eq!(1, repo.get_patron_count().await.expect("should count"));
    }
}
