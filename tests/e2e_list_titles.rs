mod common;

use axum::http::StatusCode;
use common::{get, ids, title, Fixture};
use title_catalog::{query::QueryLimits, storage::TitleClass};

fn seeded() -> Fixture {
    Fixture::with_titles(&[
        title(1, "AAA100", TitleClass::Freehold),
        title(2, "BBB200", TitleClass::Leasehold),
        title(3, "AAA100", TitleClass::Leasehold),
        title(4, "CCC300", TitleClass::Freehold),
        title(5, "BBB200", TitleClass::Freehold),
    ])
}

#[tokio::test]
async fn list_defaults_to_id_ascending() {
    let fixture = seeded();

    let (status, body) = get(fixture.router(QueryLimits::default()), "/api/titles/").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(ids(&body), vec![1, 2, 3, 4, 5]);
    assert!(body[0].get("content").is_none());
}

#[tokio::test]
async fn list_filters_class_case_insensitively() {
    let fixture = seeded();

    let (status, body) = get(
        fixture.router(QueryLimits::default()),
        "/api/titles?title_class=freehold",
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(ids(&body), vec![1, 4, 5]);
    assert!(body
        .as_array()
        .unwrap()
        .iter()
        .all(|row| row["title_class"] == "Freehold"));
}

#[tokio::test]
async fn list_sorts_by_id_then_title_number_descending() {
    let fixture = seeded();

    let (status, body) = get(
        fixture.router(QueryLimits::default()),
        "/api/titles?_sort=id,title_number&_order=desc,desc&_page=0",
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(ids(&body), vec![5, 4, 3, 2, 1]);
}

#[tokio::test]
async fn second_sort_key_breaks_ties() {
    let fixture = seeded();

    let (status, body) = get(
        fixture.router(QueryLimits::default()),
        "/api/titles?_sort=title_number,id&_order=asc,desc",
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(ids(&body), vec![3, 1, 5, 2, 4]);

    let (_, body) = get(
        fixture.router(QueryLimits::default()),
        "/api/titles?_sort=title_number,id&_order=asc,asc",
    )
    .await;
    assert_eq!(ids(&body), vec![1, 3, 2, 5, 4]);
}

#[tokio::test]
async fn page_offset_uses_page_unit_independent_of_limit() {
    let fixture = seeded();
    let limits = QueryLimits {
        page_unit: 2,
        max_limit: None,
    };

    let (status, body) = get(fixture.router(limits), "/api/titles?_page=1&_limit=3").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(ids(&body), vec![3, 4, 5]);

    let (_, body) = get(fixture.router(limits), "/api/titles?_page=2&_limit=1").await;
    assert_eq!(ids(&body), vec![5]);
}

#[tokio::test]
async fn page_past_the_end_is_empty_success() {
    let fixture = seeded();

    let (status, body) = get(fixture.router(QueryLimits::default()), "/api/titles?_page=3").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, serde_json::json!([]));
}

#[tokio::test]
async fn unmatched_filter_is_empty_success() {
    let fixture = Fixture::with_titles(&[title(1, "AAA100", TitleClass::Freehold)]);

    let (status, body) = get(
        fixture.router(QueryLimits::default()),
        "/api/titles?title_class=Leasehold",
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, serde_json::json!([]));
}

#[tokio::test]
async fn unknown_direction_is_unprocessable() {
    let fixture = seeded();

    let (status, body) = get(
        fixture.router(QueryLimits::default()),
        "/api/titles?_sort=id&_order=UP",
    )
    .await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["message"], "invalid sort direction: UP");
}

#[tokio::test]
async fn unknown_sort_key_is_unprocessable() {
    let fixture = seeded();

    let (status, _) = get(
        fixture.router(QueryLimits::default()),
        "/api/titles?_sort=content&_order=asc",
    )
    .await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn sort_order_length_mismatch_is_bad_request() {
    let fixture = seeded();

    for uri in [
        "/api/titles?_sort=id&_order=asc,desc",
        "/api/titles?_sort=id,title_number",
        "/api/titles?_sort=bogus&_order=UP,DOWN",
    ] {
        let (status, _) = get(fixture.router(QueryLimits::default()), uri).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "{uri}");
    }
}

#[tokio::test]
async fn oversized_window_is_served_not_rejected() {
    let fixture = seeded();

    let (status, body) = get(
        fixture.router(QueryLimits::default()),
        "/api/titles?_limit=4294967296",
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(ids(&body), vec![1, 2, 3, 4, 5]);

    let (status, body) = get(
        fixture.router(QueryLimits::default()),
        "/api/titles?_page=18446744073709551615",
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert!(ids(&body).is_empty());
}

#[tokio::test]
async fn malformed_window_numbers_are_unprocessable_json() {
    let fixture = seeded();

    for uri in [
        "/api/titles?_limit=-1",
        "/api/titles?_limit=ten",
        "/api/titles?_page=18446744073709551616",
    ] {
        let (status, body) = get(fixture.router(QueryLimits::default()), uri).await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY, "{uri}");
        assert!(body["message"].is_string(), "{uri}");
    }
}

#[tokio::test]
async fn configured_max_limit_is_enforced() {
    let fixture = seeded();
    let limits = QueryLimits {
        page_unit: 50,
        max_limit: Some(3),
    };

    let (status, body) = get(fixture.router(limits), "/api/titles?_limit=3").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(ids(&body), vec![1, 2, 3]);

    let (status, _) = get(fixture.router(limits), "/api/titles?_limit=4").await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
}
