//! Turning raw list parameters into a validated query and its SQL.

mod builder;
mod error;
mod params;

pub use builder::{ListStatement, TITLE_DETAIL_SQL};
pub use error::{QueryError, QueryErrorKind};
pub use params::{
    resolve, ListParams, QueryLimits, SortDirection, SortKey, SortSpec, TitleQuery,
    DEFAULT_LIMIT, DEFAULT_PAGE, DEFAULT_PAGE_UNIT,
};
