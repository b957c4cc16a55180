use thiserror::Error;

/// Stable classification callers branch on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QueryErrorKind {
    /// A single value is outside its allowed set.
    Validation,
    /// Related multi-value parameters disagree in cardinality.
    MalformedCombination,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum QueryError {
    #[error("invalid sort key: {0}")]
    InvalidSortKey(String),
    #[error("invalid sort direction: {0}")]
    InvalidSortDirection(String),
    #[error("invalid title class: {0}")]
    InvalidTitleClass(String),
    #[error("limit {limit} exceeds maximum {max}")]
    LimitTooLarge { limit: u64, max: u32 },
    #[error("sort keys ({keys}) and sort orders ({orders}) must have the same length")]
    SortOrderMismatch { keys: usize, orders: usize },
}

impl QueryError {
    pub fn kind(&self) -> QueryErrorKind {
        match self {
            QueryError::SortOrderMismatch { .. } => QueryErrorKind::MalformedCombination,
            QueryError::InvalidSortKey(_)
            | QueryError::InvalidSortDirection(_)
            | QueryError::InvalidTitleClass(_)
            | QueryError::LimitTooLarge { .. } => QueryErrorKind::Validation,
        }
    }
}
