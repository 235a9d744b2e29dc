use crate::catalog::factory::create_catalog_client;
use crate::core::domain::Configuration;
use crate::core::library::LibraryResult;
use crate::core::repository::RepositoryStore;
use crate::library::domain::LibraryService;
use crate::library::domain::service::LibraryServiceImpl;
use crate::patrons::factory::create_patron_repository;

pub async fn create_library_service(config: &Configuration, store: RepositoryStore) -> LibraryResult<Box<dyn LibraryService>> {
    let patron_repo = create_patron_repository(config, store).await?;
    let catalog = create_catalog_client(config)?;
    Ok(Box::new(LibraryServiceImpl::new(config, patron_repo, catalog)))
}
