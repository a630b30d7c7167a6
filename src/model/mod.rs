pub mod error;
pub mod repository;
pub mod response;
pub mod schema;
