use axum::Json;
use axum::extract::Path;
use axum::routing::{delete, patch, post, put};
use axum::{Router, extract::State, http::StatusCode, routing::get};
use serde::Serialize;
use tracing::info;

use crate::catalog::{CatalogView, CreditOption, DetailView};
use crate::error::AppError;
use crate::loader;
use crate::models::{CourseId, CreditFilter, CriteriaUpdate};
use crate::state::AppState;

#[derive(Debug, Serialize)]
struct FavoriteStatus {
    id: CourseId,
    is_favorite: bool,
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/catalog", get(get_catalog))
        .route("/catalog/criteria", patch(update_criteria))
        .route("/catalog/search", delete(clear_search))
        .route("/catalog/page/next", post(next_page))
        .route("/catalog/page/previous", post(previous_page))
        .route("/catalog/page/{page}", put(go_to_page))
        .route("/catalog/credit-options", get(credit_options))
        .route("/catalog/reload", post(reload))
        .route("/favorites", get(list_favorites))
        .route("/favorites/{id}/toggle", post(toggle_favorite))
        .route("/detail", get(get_detail).delete(close_detail))
        .route("/detail/{id}", put(open_detail))
        .with_state(state)
}

async fn health() -> StatusCode {
    StatusCode::OK
}

async fn get_catalog(State(state): State<AppState>) -> Result<Json<CatalogView>, AppError> {
    let view = state.with_catalog(|catalog| catalog.view())?;
    Ok(Json(view))
}

async fn update_criteria(
    State(state): State<AppState>,
    Json(req): Json<CriteriaUpdate>
) -> Result<Json<CatalogView>, AppError> {
    let view = state.with_catalog(|catalog| {
        if let Some(CreditFilter::Exactly(credits)) = req.credits {
            if !catalog.credit_options().contains(&credits) {
                return Err(AppError::BadRequest(format!(
                    "no course carries {} credits",
                    credits
                )));
            }
        }
        catalog.update_criteria(req);
        Ok(catalog.view())
    })??;
    Ok(Json(view))
}

async fn clear_search(State(state): State<AppState>) -> Result<Json<CatalogView>, AppError> {
    let view = state.with_catalog(|catalog| {
        catalog.clear_search();
        catalog.view()
    })?;
    Ok(Json(view))
}

async fn next_page(State(state): State<AppState>) -> Result<Json<CatalogView>, AppError> {
    let view = state.with_catalog(|catalog| {
        catalog.go_to_next_page();
        catalog.view()
    })?;
    Ok(Json(view))
}

async fn previous_page(State(state): State<AppState>) -> Result<Json<CatalogView>, AppError> {
    let view = state.with_catalog(|catalog| {
        catalog.go_to_previous_page();
        catalog.view()
    })?;
    Ok(Json(view))
}

async fn go_to_page(
    State(state): State<AppState>,
    Path(page): Path<usize>
) -> Result<Json<CatalogView>, AppError> {
    let view = state.with_catalog(|catalog| {
        catalog.go_to_page(page);
        catalog.view()
    })?;
    Ok(Json(view))
}

async fn credit_options(
    State(state): State<AppState>
) -> Result<Json<Vec<CreditOption>>, AppError> {
    let options: Vec<CreditOption> = state.with_catalog(|catalog| {
        catalog
            .credit_options()
            .iter()
            .copied()
            .map(CreditOption::new)
            .collect()
    })?;
    Ok(Json(options))
}

async fn reload(State(state): State<AppState>) -> Result<Json<CatalogView>, AppError> {
    let raw = tokio::fs::read_to_string(&state.config.data_path).await?;
    let courses = loader::parse_courses(&raw)?;
    info!("reloading catalog from {}", state.config.data_path.display());

    let view = state.with_catalog(|catalog| {
        catalog.replace_courses(courses);
        catalog.view()
    })?;
    Ok(Json(view))
}

async fn list_favorites(State(state): State<AppState>) -> Result<Json<Vec<CourseId>>, AppError> {
    let ids: Vec<CourseId> = state.with_catalog(|catalog| catalog.favorites().iter().collect())?;
    Ok(Json(ids))
}

async fn toggle_favorite(
    State(state): State<AppState>,
    Path(id): Path<CourseId>
) -> Result<Json<FavoriteStatus>, AppError> {
    let is_favorite = state
        .with_catalog(|catalog| catalog.toggle_favorite(id))?
        .ok_or(AppError::NotFound)?;
    Ok(Json(FavoriteStatus { id, is_favorite }))
}

async fn open_detail(
    State(state): State<AppState>,
    Path(id): Path<CourseId>
) -> Result<Json<DetailView>, AppError> {
    let detail = state
        .with_catalog(|catalog| {
            catalog.open_detail(id)?;
            catalog.detail_view()
        })?
        .ok_or(AppError::NotFound)?;
    Ok(Json(detail))
}

async fn get_detail(State(state): State<AppState>) -> Result<Json<DetailView>, AppError> {
    let detail = state
        .with_catalog(|catalog| catalog.detail_view())?
        .ok_or(AppError::NotFound)?;
    Ok(Json(detail))
}

async fn close_detail(State(state): State<AppState>) -> Result<StatusCode, AppError> {
    state.with_catalog(|catalog| catalog.close_detail())?;
    Ok(StatusCode::NO_CONTENT)
}
