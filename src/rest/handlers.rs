use axum::{
    extract::{rejection::QueryRejection, Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::{
    catalog::CatalogError,
    query::{ListParams, QueryErrorKind},
    storage::Storage,
};

use super::{
    models::{
        ErrorResponse, HealthResponse, ListTitlesRequest, TitleResponse, TitleSummaryResponse,
    },
    AppState,
};

pub async fn health<S: Storage + Clone + Send + Sync + 'static>(
    State(state): State<AppState<S>>,
) -> impl IntoResponse {
    let uptime_secs = state.started_at.elapsed().map(|d| d.as_secs()).unwrap_or(0);
    (
        StatusCode::OK,
        Json(HealthResponse {
            status: "ok".to_string(),
            uptime_secs,
        }),
    )
}

pub async fn get_title<S: Storage + Clone + Send + Sync + 'static>(
    State(state): State<AppState<S>>,
    Path(title_id): Path<i64>,
) -> Response {
    let catalog = state.catalog.clone();
    match tokio::task::spawn_blocking(move || catalog.get_title(title_id)).await {
        Ok(Ok(title)) => Json(TitleResponse::from(title)).into_response(),
        Ok(Err(err)) => error_response(err),
        Err(err) => {
            log::error!("Title lookup task failed for {}: {}", title_id, err);
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}

pub async fn list_titles<S: Storage + Clone + Send + Sync + 'static>(
    State(state): State<AppState<S>>,
    request: Result<Query<ListTitlesRequest>, QueryRejection>,
) -> Response {
    // Unparseable numbers are single-value validation failures.
    let Query(request) = match request {
        Ok(query) => query,
        Err(rejection) => {
            let message = rejection.body_text();
            log::warn!("Rejected list request: {}", message);
            return (StatusCode::UNPROCESSABLE_ENTITY, Json(ErrorResponse { message }))
                .into_response();
        }
    };
    let params = ListParams::from(request);
    let catalog = state.catalog.clone();
    match tokio::task::spawn_blocking(move || catalog.list_titles(&params)).await {
        Ok(Ok(titles)) => {
            let body = titles
                .into_iter()
                .map(TitleSummaryResponse::from)
                .collect::<Vec<_>>();
            Json(body).into_response()
        }
        Ok(Err(err)) => error_response(err),
        Err(err) => {
            log::error!("Title listing task failed: {}", err);
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}

pub async fn not_found() -> impl IntoResponse {
    (
        StatusCode::NOT_FOUND,
        Json(ErrorResponse {
            message: "endpoint not found".to_string(),
        }),
    )
}

fn error_response(err: CatalogError) -> Response {
    let status = match &err {
        CatalogError::Query(query_err) => {
            log::warn!("Rejected list request: {}", query_err);
            match query_err.kind() {
                QueryErrorKind::Validation => StatusCode::UNPROCESSABLE_ENTITY,
                QueryErrorKind::MalformedCombination => StatusCode::BAD_REQUEST,
            }
        }
        CatalogError::NotFound(_) => StatusCode::NOT_FOUND,
        CatalogError::Storage(storage_err) => {
            log::error!("Storage failure: {:?}", storage_err);
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    message: "internal error".to_string(),
                }),
            )
                .into_response();
        }
    };
    (
        status,
        Json(ErrorResponse {
            message: err.to_string(),
        }),
    )
        .into_response()
}
