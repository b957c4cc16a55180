mod common;

use axum::http::StatusCode;
use common::{get, title, Fixture};
use title_catalog::{query::QueryLimits, storage::TitleClass};

#[tokio::test]
async fn get_title_returns_requested_record() {
    let fixture = Fixture::with_titles(&[
        title(1, "MYBKZ10625", TitleClass::Freehold),
        title(2, "LQWTY30010", TitleClass::Leasehold),
    ]);

    for id in [1, 2] {
        let (status, body) = get(
            fixture.router(QueryLimits::default()),
            &format!("/api/titles/{id}"),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["id"], id);
        assert!(body["content"].is_string());
    }
}

#[tokio::test]
async fn get_title_includes_content() {
    let fixture = Fixture::with_titles(&[title(1, "MYBKZ10625", TitleClass::Freehold)]);

    let (status, body) = get(fixture.router(QueryLimits::default()), "/api/titles/1").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        serde_json::json!({
            "id": 1,
            "title_number": "MYBKZ10625",
            "title_class": "Freehold",
            "content": "content of MYBKZ10625",
        })
    );
}

#[tokio::test]
async fn get_title_missing_id_is_not_found() {
    let fixture = Fixture::with_titles(&[title(1, "MYBKZ10625", TitleClass::Freehold)]);

    let (status, body) = get(fixture.router(QueryLimits::default()), "/api/titles/42").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], "title 42 not found");
}

#[tokio::test]
async fn get_title_rejects_non_integer_id() {
    let fixture = Fixture::new();

    let (status, _) = get(fixture.router(QueryLimits::default()), "/api/titles/one").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}
