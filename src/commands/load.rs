use anyhow::{Context as _, Result};
use std::path::Path;

use super::CommandRunner;
use crate::context;
use crate::storage::{SqliteStorage, Title};

pub struct LoadTitles<'a> {
    pub file: &'a Path,
}

impl CommandRunner for LoadTitles<'_> {
    fn run(&self, ctx: &context::Context) -> Result<()> {
        let titles = read_titles(self.file)?;
        let storage = SqliteStorage::new(&ctx.config.db_path);
        let count = storage
            .import_titles(&titles)
            .context("importing titles")?;
        log::info!(
            "📥 Loaded {} titles from {} into {}",
            count,
            self.file.display(),
            ctx.config.db_path.display()
        );
        Ok(())
    }
}

pub fn read_titles(path: &Path) -> Result<Vec<Title>> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("reading {}", path.display()))?;
    let titles: Vec<Title> =
        serde_json::from_str(&raw).with_context(|| format!("parsing {}", path.display()))?;
    Ok(titles)
}
