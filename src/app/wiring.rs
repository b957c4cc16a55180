use std::sync::Arc;

use crate::{context, storage};
use anyhow::{Context, Result};

pub fn init_data_dir(ctx: &context::Context) -> Result<()> {
    if let Some(parent) = ctx
        .config
        .db_path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
    {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("creating {}", parent.display()))?;
    }
    Ok(())
}

pub fn init_storage(ctx: &context::Context) -> Result<Arc<storage::SqliteStorage>> {
    let sqlite = storage::SqliteStorage::new(&ctx.config.db_path);
    if ctx.config.reset {
        sqlite.reset_all().context("resetting storage")?;
    }
    sqlite.init().context("initializing storage")?;
    Ok(Arc::new(sqlite))
}
