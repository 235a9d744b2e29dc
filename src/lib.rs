pub mod catalog;
pub mod core;
pub mod library;
pub mod patrons;
pub mod store;
pub mod utils;

pub use crate::core::domain::Configuration;
pub use crate::core::library::{FieldValue, LibraryError, LibraryResult};
pub use crate::core::repository::RepositoryStore;
