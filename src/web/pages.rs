use axum::extract::{Query, State};
use axum::response::Json;
use serde::Deserialize;

use crate::error::AppError;
use crate::pagination::{PageView, PageWindowBuilder, PaginationRequest};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct PagesParams {
    pub base_url: String,
    pub current_page: u32,
    pub total_pages: u32,
    pub max_page_buttons: Option<u32>,
    pub page_url_key: Option<String>,
}

impl PagesParams {
    /// Check the request and fill unset fields from the configured defaults.
    fn into_request(self, state: &AppState) -> Result<PaginationRequest, AppError> {
        if self.total_pages == 0 {
            return Err(AppError::BadRequest(
                "total_pages must be at least 1".to_string(),
            ));
        }
        if !(1..=self.total_pages).contains(&self.current_page) {
            return Err(AppError::BadRequest(format!(
                "current_page must be between 1 and {}",
                self.total_pages
            )));
        }
        let defaults = &state.config.pagination;
        let max_page_buttons = match self.max_page_buttons {
            Some(0) => {
                return Err(AppError::BadRequest(
                    "max_page_buttons must be at least 1".to_string(),
                ));
            }
            Some(n) if n > defaults.max_page_buttons_limit => {
                return Err(AppError::BadRequest(format!(
                    "max_page_buttons must not exceed {}",
                    defaults.max_page_buttons_limit
                )));
            }
            Some(n) => n,
            None => defaults.max_page_buttons,
        };
        let page_url_key = match self.page_url_key {
            Some(key) if key.is_empty() => {
                return Err(AppError::BadRequest(
                    "page_url_key must not be empty".to_string(),
                ));
            }
            Some(key) => key,
            None => defaults.page_url_key.clone(),
        };

        Ok(PaginationRequest {
            base_url: self.base_url,
            current_page: self.current_page,
            total_pages: self.total_pages,
            max_page_buttons,
            page_url_key,
        })
    }
}

/// `GET /api/pages`: page window and navigation for the given position.
pub async fn page_window(
    State(state): State<AppState>,
    Query(params): Query<PagesParams>,
) -> Result<Json<PageView>, AppError> {
    let request = params.into_request(&state)?;
    tracing::debug!(
        "Page window for {} ({}/{})",
        request.base_url,
        request.current_page,
        request.total_pages
    );
    Ok(Json(PageWindowBuilder::new(&request, &state.urls).view()))
}
