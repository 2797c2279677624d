use thiserror::Error;

use crate::domain::slug::SlugError;

/// Failures originating in domain types rather than in any adapter. The
/// public lookup path never produces these (an invalid slug is simply "not
/// found" there); they surface from authoring-side operations that take
/// free-form input, like deriving a public slug from a display name.
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("invalid slug: {0}")]
    Slug(#[from] SlugError),
}
