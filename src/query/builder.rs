use rusqlite::types::Value;

use super::TitleQuery;

pub const TITLE_DETAIL_SQL: &str =
    "SELECT id, title_number, title_class, content FROM titles WHERE id = ?1";

const TITLE_SUMMARY_SELECT_SQL: &str = "SELECT id, title_number, title_class FROM titles";

/// One bounded list statement with its positional parameters.
#[derive(Debug, Clone, PartialEq)]
pub struct ListStatement {
    pub sql: String,
    pub params: Vec<Value>,
}

impl ListStatement {
    pub fn build(query: &TitleQuery) -> Self {
        let mut sql = String::from(TITLE_SUMMARY_SELECT_SQL);
        let mut params: Vec<Value> = Vec::with_capacity(3);

        if let Some(class) = query.title_class() {
            sql.push_str(" WHERE title_class = ? COLLATE NOCASE");
            params.push(Value::from(class.as_str().to_string()));
        }

        // Keys compose positionally; no implicit tiebreaker is appended.
        if !query.sort().is_empty() {
            let clauses = query
                .sort()
                .iter()
                .map(|spec| format!("{} {}", spec.key.column(), spec.direction.sql()))
                .collect::<Vec<_>>()
                .join(", ");
            sql.push_str(" ORDER BY ");
            sql.push_str(&clauses);
        }

        // SQLite binds signed 64-bit integers; larger windows clamp.
        sql.push_str(" LIMIT ? OFFSET ?");
        params.push(Value::from(clamp_to_i64(query.limit())));
        params.push(Value::from(clamp_to_i64(query.offset())));

        Self { sql, params }
    }
}

fn clamp_to_i64(value: u64) -> i64 {
    i64::try_from(value).unwrap_or(i64::MAX)
}
