//! Request-level entry point over title storage.
//!
//! Validation always happens before storage is touched, so a rejected list
//! request never reaches the database.

use thiserror::Error;

use crate::{
    query::{resolve, ListParams, QueryError, QueryLimits},
    storage::{Storage, Title, TitleSummary},
};

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error(transparent)]
    Query(#[from] QueryError),
    #[error("title {0} not found")]
    NotFound(i64),
    #[error("storage error: {0:#}")]
    Storage(anyhow::Error),
}

#[derive(Clone)]
pub struct Catalog<S: Storage> {
    storage: S,
    limits: QueryLimits,
}

impl<S: Storage> Catalog<S> {
    pub fn new(storage: S, limits: QueryLimits) -> Self {
        Self { storage, limits }
    }

    pub fn get_title(&self, id: i64) -> Result<Title, CatalogError> {
        match self.storage.load_title(id) {
            Ok(Some(title)) => Ok(title),
            Ok(None) => Err(CatalogError::NotFound(id)),
            Err(err) => Err(CatalogError::Storage(err)),
        }
    }

    /// An empty result is a successful, empty page.
    pub fn list_titles(&self, params: &ListParams) -> Result<Vec<TitleSummary>, CatalogError> {
        let query = resolve(params, &self.limits)?;
        self.storage
            .list_titles(&query)
            .map_err(CatalogError::Storage)
    }
}
