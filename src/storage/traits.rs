use std::sync::Arc;

use super::title::{Title, TitleSummary};
use crate::query::TitleQuery;

/// Read access to the title relation. Each call runs exactly one query.
pub trait Storage {
    fn load_title(&self, id: i64) -> anyhow::Result<Option<Title>>;
    fn list_titles(&self, query: &TitleQuery) -> anyhow::Result<Vec<TitleSummary>>;
}

impl<T: Storage + ?Sized> Storage for Arc<T> {
    fn load_title(&self, id: i64) -> anyhow::Result<Option<Title>> {
        (**self).load_title(id)
    }

    fn list_titles(&self, query: &TitleQuery) -> anyhow::Result<Vec<TitleSummary>> {
        (**self).list_titles(query)
    }
}
