pub mod domain;
pub mod dto;
pub mod factory;
pub mod repository;

pub use domain::Patron;
pub use repository::PatronRepository;
