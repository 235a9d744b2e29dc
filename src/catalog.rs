pub mod client;
pub mod domain;
pub mod dto;
pub mod factory;

pub use domain::CatalogClient;
