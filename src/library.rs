pub mod domain;
pub mod factory;

pub use domain::LibraryService;
