//! # Blog Core
//!
//! The domain layer of the blog API.
//! Posts, their validation rules and the repository ports live here, with no
//! infrastructure dependencies.

pub mod domain;
pub mod error;
pub mod ports;
pub mod validation;

pub use error::{DomainError, RepoError};
pub use validation::{ValidationLimits, validate_post};
