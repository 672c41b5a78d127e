mod errors;

pub use errors::{ServiceError, ServiceResult};

pub mod dashboard;
pub mod menu;
pub mod orders;
