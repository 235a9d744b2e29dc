use std::collections::BTreeSet;
use async_trait::async_trait;
use tracing::info;
use crate::catalog::domain::CatalogClient;
use crate::core::domain::Configuration;
use crate::core::library::{FieldValue, LibraryResult};
use crate::library::domain::LibraryService;
use crate::patrons::domain::Patron;
use crate::patrons::repository::PatronRepository;

pub struct LibraryServiceImpl {
    branch_id: String,
    patron_repository: Box<dyn PatronRepository>,
    catalog: Box<dyn CatalogClient>,
}

impl LibraryServiceImpl {
    pub fn new(config: &Configuration, patron_repository: Box<dyn PatronRepository>,
               catalog: Box<dyn CatalogClient>) -> Self {
        Self {
            branch_id: config.branch_id.to_string(),
            patron_repository,
            catalog,
        }
    }

    pub fn patron_repository(&self) -> &dyn PatronRepository {
        self.patron_repository.as_ref()
    }
}

#[async_trait]
impl LibraryService for LibraryServiceImpl {
    async fn register_patron(&self, first_name: &str, last_name: &str,
                             age: FieldValue, member_id: FieldValue) -> LibraryResult<Option<usize>> {
        let patron = Patron::new(first_name, last_name, age, member_id)?;
        let res = self.patron_repository.insert_patron(Some(&patron)).await?;
        if res.is_some() {
            info!("registered patron {} at branch {}", patron.member_id(), self.branch_id);
        }
        Ok(res)
    }

    async fn is_patron_registered(&self, patron: &Patron) -> LibraryResult<bool> {
        Ok(self.patron_repository.retrieve_patron(patron.member_id()).await?.is_some())
    }

    async fn borrow_book(&self, title: &str, patron: &mut Patron) -> LibraryResult<()> {
        patron.add_borrowed_book(title);
        self.patron_repository.update_patron(Some(&*patron)).await.map(|_| ())
    }

    async fn return_borrowed_book(&self, title: &str, patron: &mut Patron) -> LibraryResult<()> {
        patron.return_borrowed_book(title);
        self.patron_repository.update_patron(Some(&*patron)).await.map(|_| ())
    }

    fn is_book_borrowed(&self, title: &str, patron: &Patron) -> bool {
        patron.has_borrowed_book(title)
    }

    async fn is_ebook(&self, title: &str) -> LibraryResult<bool> {
        let ebooks = self.catalog.get_ebooks(title).await?;
        let title = title.to_lowercase();
        Ok(ebooks.iter().any(|e| e.title.to_lowercase() == title))
    }

    async fn get_ebooks_count(&self, title: &str) -> LibraryResult<i64> {
        let ebooks = self.catalog.get_ebooks(title).await?;
        Ok(ebooks.iter().map(|e| e.ebook_count).sum())
    }

    async fn is_book_by_author(&self, author: &str, title: &str) -> LibraryResult<bool> {
        let title = title.to_lowercase();
        let books = self.catalog.books_by_author(author).await?;
        Ok(books.iter().any(|b| b.to_lowercase() == title))
    }

    async fn get_languages_for_book(&self, title: &str) -> LibraryResult<BTreeSet<String>> {
        let books = self.catalog.get_book_info(title).await?;
        Ok(books.into_iter().flat_map(|b| b.language).collect())
    }

    async fn is_book_available(&self, title: &str) -> LibraryResult<bool> {
        self.catalog.is_book_available(title).await
    }

    async fn close(&self) -> LibraryResult<()> {
        self.patron_repository.close().await
    }
}
