pub mod errors;
pub mod main;
pub mod products;

pub use errors::{ServiceError, ServiceResult};
