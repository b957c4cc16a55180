use anyhow::Result;
use rusqlite::{params, params_from_iter, types::Type, Connection, OptionalExtension};
use std::path::Path;

use super::{
    title::{Title, TitleClass, TitleSummary},
    traits::Storage,
};
use crate::query::{ListStatement, TitleQuery, TITLE_DETAIL_SQL};

const DB_SCHEMA_VERSION: i64 = 1;

#[derive(Clone)]
pub struct SqliteStorage {
    pub path: String,
}

fn map_title_class(row: &rusqlite::Row<'_>, idx: usize) -> rusqlite::Result<TitleClass> {
    let raw: String = row.get(idx)?;
    raw.parse::<TitleClass>()
        .map_err(|err| rusqlite::Error::FromSqlConversionFailure(idx, Type::Text, Box::new(err)))
}

fn map_title_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<Title> {
    Ok(Title {
        id: row.get(0)?,
        title_number: row.get(1)?,
        title_class: map_title_class(row, 2)?,
        content: row.get(3)?,
    })
}

fn map_summary_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<TitleSummary> {
    Ok(TitleSummary {
        id: row.get(0)?,
        title_number: row.get(1)?,
        title_class: map_title_class(row, 2)?,
    })
}

fn db_load_title(conn: &Connection, id: i64) -> rusqlite::Result<Option<Title>> {
    conn.query_row(TITLE_DETAIL_SQL, params![id], map_title_row)
        .optional()
}

fn db_list_titles(conn: &Connection, query: &TitleQuery) -> rusqlite::Result<Vec<TitleSummary>> {
    let statement = ListStatement::build(query);
    log::debug!("list titles: {} {:?}", statement.sql, statement.params);

    let mut stmt = conn.prepare(&statement.sql)?;
    let rows = stmt
        .query_map(params_from_iter(statement.params.iter()), map_summary_row)?
        .collect::<rusqlite::Result<Vec<_>>>()?;
    Ok(rows)
}

fn db_replace_titles(conn: &Connection, titles: &[Title]) -> rusqlite::Result<usize> {
    let tx = conn.unchecked_transaction()?;
    tx.execute("DELETE FROM titles", [])?;
    {
        let mut stmt = tx.prepare(
            "INSERT INTO titles (id, title_number, title_class, content) VALUES (?1, ?2, ?3, ?4)",
        )?;
        for title in titles {
            stmt.execute(params![
                title.id,
                title.title_number,
                title.title_class.as_str(),
                title.content
            ])?;
        }
    }
    tx.commit()?;
    Ok(titles.len())
}

impl SqliteStorage {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_string_lossy().to_string(),
        }
    }

    pub fn reset_all(&self) -> Result<()> {
        if !std::path::Path::new(&self.path).exists() {
            return Ok(());
        }
        std::fs::remove_file(&self.path)?;
        Ok(())
    }

    pub fn init(&self) -> Result<()> {
        self.with_conn(|_conn| Ok(()))?;
        Ok(())
    }

    /// Replaces every stored title with `titles` in one transaction.
    pub fn import_titles(&self, titles: &[Title]) -> Result<usize> {
        let count = self.with_conn(|conn| db_replace_titles(conn, titles))?;
        Ok(count)
    }

    /// Opens a connection for a single call; it is dropped when `f` returns.
    fn with_conn<F, T>(&self, f: F) -> rusqlite::Result<T>
    where
        F: FnOnce(&Connection) -> rusqlite::Result<T>,
    {
        let conn = Connection::open(&self.path)?;
        conn.pragma_update(None, "journal_mode", "WAL")?;
        conn.pragma_update(None, "synchronous", "NORMAL")?;
        conn.busy_timeout(std::time::Duration::from_millis(500))?;

        Self::migrate(&conn)?;
        f(&conn)
    }

    fn migrate(conn: &Connection) -> rusqlite::Result<()> {
        let version: i64 = conn.query_row("PRAGMA user_version", [], |row| row.get(0))?;

        if version == DB_SCHEMA_VERSION {
            return Ok(());
        }

        log::info!(
            "SQLite schema migration: {} -> {}",
            version,
            DB_SCHEMA_VERSION
        );

        if version == 0 {
            conn.execute_batch(
                r#"
            CREATE TABLE IF NOT EXISTS titles (
                id INTEGER PRIMARY KEY,
                title_number TEXT NOT NULL,
                title_class TEXT NOT NULL,
                content TEXT NOT NULL
            );
            CREATE INDEX IF NOT EXISTS titles_class_idx
                ON titles(title_class COLLATE NOCASE);
            "#,
            )?;
            conn.pragma_update(None, "user_version", DB_SCHEMA_VERSION)?;
            return Ok(());
        }

        Err(rusqlite::Error::SqliteFailure(
            rusqlite::ffi::Error::new(rusqlite::ffi::ErrorCode::SchemaChanged as i32),
            Some("database schema version mismatch; please run with --reset option".to_string()),
        ))
    }
}

impl Storage for SqliteStorage {
    fn load_title(&self, id: i64) -> Result<Option<Title>> {
        let row = self.with_conn(|conn| db_load_title(conn, id))?;
        Ok(row)
    }

    fn list_titles(&self, query: &TitleQuery) -> Result<Vec<TitleSummary>> {
        let rows = self.with_conn(|conn| db_list_titles(conn, query))?;
        Ok(rows)
    }
}
