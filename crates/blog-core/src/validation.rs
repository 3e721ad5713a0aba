//! Post payload validation.
//!
//! Three independent predicates; a payload is accepted only when all of them
//! hold.

use crate::domain::PostParams;
use crate::error::DomainError;

/// Default maximum title length, in bytes.
pub const MAX_TITLE_LENGTH: usize = 255;

/// Default maximum content length, in bytes.
pub const MAX_CONTENT_LENGTH: usize = 10_000;

/// Length bounds applied to incoming posts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValidationLimits {
    pub max_title_length: usize,
    pub max_content_length: usize,
}

impl Default for ValidationLimits {
    fn default() -> Self {
        Self {
            max_title_length: MAX_TITLE_LENGTH,
            max_content_length: MAX_CONTENT_LENGTH,
        }
    }
}

/// True iff title, content and category are non-empty and at least one tag is present.
pub fn is_structurally_valid(params: &PostParams) -> bool {
    !params.title.is_empty()
        && !params.content.is_empty()
        && !params.category.is_empty()
        && !params.tags.is_empty()
}

/// Lengths are UTF-8 byte counts.
pub fn is_title_length_valid(params: &PostParams, limits: &ValidationLimits) -> bool {
    params.title.len() <= limits.max_title_length
}

pub fn is_content_length_valid(params: &PostParams, limits: &ValidationLimits) -> bool {
    params.content.len() <= limits.max_content_length
}

/// Reject the payload if any check fails.
pub fn validate_post(params: &PostParams, limits: &ValidationLimits) -> Result<(), DomainError> {
    if !is_structurally_valid(params) {
        return Err(DomainError::Validation(
            "title, content, category and at least one tag are required".to_string(),
        ));
    }
    if !is_title_length_valid(params, limits) {
        return Err(DomainError::Validation(format!(
            "title must be at most {} bytes",
            limits.max_title_length
        )));
    }
    if !is_content_length_valid(params, limits) {
        return Err(DomainError::Validation(format!(
            "content must be at most {} bytes",
            limits.max_content_length
        )));
    }
    Ok(())
}
