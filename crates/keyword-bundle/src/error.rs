/// Errors that can occur while building keywords or mutating a bundle.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BundleError {
    /// The keyword definition is unusable (e.g. empty name).
    #[error("invalid keyword: {0}")]
    InvalidArgument(String),

    /// A keyword by that name is already registered.
    #[error("keyword {0:?} is already registered")]
    DuplicateKeyword(String),
}

pub type Result<T> = std::result::Result<T, BundleError>;
