//! 产品录入

pub mod error;
pub mod handler;
pub mod model;
pub mod service;

pub use error::ProductError;
pub use model::{AddProductParams, Product};
pub use service::{ProductService, ACK_BODY};
