#![allow(dead_code)]

use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use http_body_util::BodyExt;
use tempfile::TempDir;
use title_catalog::{
    query::QueryLimits,
    rest,
    storage::{SqliteStorage, Title, TitleClass},
};
use tower::ServiceExt;

pub struct Fixture {
    _dir: TempDir,
    pub storage: SqliteStorage,
}

impl Fixture {
    pub fn new() -> Self {
        let dir = tempfile::tempdir().expect("temp dir");
        let storage = SqliteStorage::new(dir.path().join("titles.sqlite"));
        storage.init().expect("init storage");
        Self { _dir: dir, storage }
    }

    pub fn with_titles(titles: &[Title]) -> Self {
        let fixture = Self::new();
        fixture.storage.import_titles(titles).expect("seed titles");
        fixture
    }

    pub fn router(&self, limits: QueryLimits) -> Router {
        rest::router(self.storage.clone(), limits)
    }
}

pub fn title(id: i64, title_number: &str, title_class: TitleClass) -> Title {
    Title {
        id,
        title_number: title_number.to_string(),
        title_class,
        content: format!("content of {title_number}"),
    }
}

pub async fn get(router: Router, uri: &str) -> (StatusCode, serde_json::Value) {
    let response = router
        .oneshot(
            Request::builder()
                .uri(uri)
                .method("GET")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let body = serde_json::from_slice(&bytes).unwrap_or(serde_json::Value::Null);
    (status, body)
}

pub fn ids(body: &serde_json::Value) -> Vec<i64> {
    body.as_array()
        .expect("array body")
        .iter()
        .map(|row| row["id"].as_i64().expect("integer id"))
        .collect()
}
