use serde::{Deserialize, Serialize};

use crate::{
    query::ListParams,
    storage::{Title, TitleClass, TitleSummary},
};

#[derive(Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub uptime_secs: u64,
}

#[derive(Serialize, Deserialize)]
pub struct ErrorResponse {
    pub message: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct TitleResponse {
    pub id: i64,
    pub title_number: String,
    pub title_class: TitleClass,
    pub content: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct TitleSummaryResponse {
    pub id: i64,
    pub title_number: String,
    pub title_class: TitleClass,
}

#[derive(Debug, Default, Deserialize)]
pub struct ListTitlesRequest {
    pub title_class: Option<String>,
    #[serde(rename = "_sort")]
    pub sort: Option<String>,
    #[serde(rename = "_order")]
    pub order: Option<String>,
    #[serde(rename = "_limit")]
    pub limit: Option<u64>,
    #[serde(rename = "_page")]
    pub page: Option<u64>,
}

impl From<ListTitlesRequest> for ListParams {
    fn from(req: ListTitlesRequest) -> Self {
        ListParams {
            title_class: req.title_class,
            sort: req.sort,
            order: req.order,
            limit: req.limit,
            page: req.page,
        }
    }
}

impl From<Title> for TitleResponse {
    fn from(title: Title) -> Self {
        Self {
            id: title.id,
            title_number: title.title_number,
            title_class: title.title_class,
            content: title.content,
        }
    }
}

impl From<TitleSummary> for TitleSummaryResponse {
    fn from(summary: TitleSummary) -> Self {
        Self {
            id: summary.id,
            title_number: summary.title_number,
            title_class: summary.title_class,
        }
    }
}
