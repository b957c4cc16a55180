use std::str::FromStr;

use super::QueryError;
use crate::storage::TitleClass;

pub const DEFAULT_LIMIT: u64 = 50;
pub const DEFAULT_PAGE: u64 = 0;
pub const DEFAULT_PAGE_UNIT: u32 = 50;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SortKey {
    Id,
    TitleNumber,
}

impl SortKey {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortKey::Id => "id",
            SortKey::TitleNumber => "title_number",
        }
    }

    /// Column each key orders by. The only source of column names in list SQL.
    pub fn column(&self) -> &'static str {
        match self {
            SortKey::Id => "id",
            SortKey::TitleNumber => "title_number",
        }
    }
}

impl FromStr for SortKey {
    type Err = QueryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "id" => Ok(SortKey::Id),
            "title_number" => Ok(SortKey::TitleNumber),
            other => Err(QueryError::InvalidSortKey(other.to_string())),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SortDirection {
    Asc,
    Desc,
}

impl SortDirection {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortDirection::Asc => "asc",
            SortDirection::Desc => "desc",
        }
    }

    pub fn sql(&self) -> &'static str {
        match self {
            SortDirection::Asc => "ASC",
            SortDirection::Desc => "DESC",
        }
    }
}

impl FromStr for SortDirection {
    type Err = QueryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "asc" => Ok(SortDirection::Asc),
            "desc" => Ok(SortDirection::Desc),
            other => Err(QueryError::InvalidSortDirection(other.to_string())),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SortSpec {
    pub key: SortKey,
    pub direction: SortDirection,
}

/// Raw list parameters as they arrive from a request.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ListParams {
    pub title_class: Option<String>,
    pub sort: Option<String>,
    pub order: Option<String>,
    pub limit: Option<u64>,
    pub page: Option<u64>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct QueryLimits {
    pub page_unit: u32,
    pub max_limit: Option<u32>,
}

impl Default for QueryLimits {
    fn default() -> Self {
        Self {
            page_unit: DEFAULT_PAGE_UNIT,
            max_limit: None,
        }
    }
}

/// A validated list request. Only [`resolve`] builds one.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TitleQuery {
    title_class: Option<TitleClass>,
    sort: Vec<SortSpec>,
    page: u64,
    limit: u64,
    page_unit: u32,
}

impl TitleQuery {
    pub fn title_class(&self) -> Option<TitleClass> {
        self.title_class
    }

    pub fn sort(&self) -> &[SortSpec] {
        &self.sort
    }

    pub fn page(&self) -> u64 {
        self.page
    }

    pub fn limit(&self) -> u64 {
        self.limit
    }

    /// Row offset of the requested page. Independent of `limit`; saturates
    /// instead of overflowing.
    pub fn offset(&self) -> u64 {
        self.page.saturating_mul(u64::from(self.page_unit))
    }
}

fn split_list(raw: Option<&str>, default: &str) -> Vec<String> {
    raw.unwrap_or(default)
        .split(',')
        .map(str::to_string)
        .collect()
}

/// Validates raw list parameters into a [`TitleQuery`].
///
/// Cardinality of `sort` against `order` is checked before element
/// membership, so mismatched lengths always report
/// [`QueryError::SortOrderMismatch`].
pub fn resolve(params: &ListParams, limits: &QueryLimits) -> Result<TitleQuery, QueryError> {
    let keys = split_list(params.sort.as_deref(), SortKey::Id.as_str());
    let orders = split_list(params.order.as_deref(), SortDirection::Asc.as_str());

    if keys.len() != orders.len() {
        return Err(QueryError::SortOrderMismatch {
            keys: keys.len(),
            orders: orders.len(),
        });
    }

    let keys = keys
        .iter()
        .map(|k| k.parse::<SortKey>())
        .collect::<Result<Vec<_>, _>>()?;
    let directions = orders
        .iter()
        .map(|o| o.parse::<SortDirection>())
        .collect::<Result<Vec<_>, _>>()?;

    let title_class = params
        .title_class
        .as_deref()
        .map(|raw| {
            raw.parse::<TitleClass>()
                .map_err(|_| QueryError::InvalidTitleClass(raw.to_string()))
        })
        .transpose()?;

    let limit = params.limit.unwrap_or(DEFAULT_LIMIT);
    if let Some(max) = limits.max_limit {
        if limit > u64::from(max) {
            return Err(QueryError::LimitTooLarge { limit, max });
        }
    }

    let sort = keys
        .into_iter()
        .zip(directions)
        .map(|(key, direction)| SortSpec { key, direction })
        .collect();

    Ok(TitleQuery {
        title_class,
        sort,
        page: params.page.unwrap_or(DEFAULT_PAGE),
        limit,
        page_unit: limits.page_unit,
    })
}
