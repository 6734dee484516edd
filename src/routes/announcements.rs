use axum::{
    extract::{rejection::JsonRejection, Path, State},
    Json,
};
use chrono::Utc;
use serde_json::{json, Value};

use crate::{
    error::AppError,
    models::announcement::{CreateAnnouncementRequest, UpdateAnnouncementRequest},
    services::metrics,
    AppState,
};

fn now_ms() -> i64 {
    Utc::now().timestamp_millis()
}

fn body<T>(payload: Result<Json<T>, JsonRejection>) -> Result<T, AppError> {
    payload
        .map(|Json(body)| body)
        .map_err(|e| AppError::Validation(e.body_text()))
}

/// GET /api/announcements: public endpoint, active announcements by priority.
pub async fn list_active(State(state): State<AppState>) -> Json<Value> {
    let announcements = state.announcements.read().await.list_active(now_ms());
    Json(json!({
        "success": true,
        "total": announcements.len(),
        "announcements": announcements,
    }))
}

/// GET /api/admin/announcements: everything, expired and scheduled included.
pub async fn list_all(State(state): State<AppState>) -> Json<Value> {
    let announcements = state.announcements.read().await.list_all();
    Json(json!({
        "success": true,
        "total": announcements.len(),
        "announcements": announcements,
    }))
}

pub async fn create_announcement(
    State(state): State<AppState>,
    payload: Result<Json<CreateAnnouncementRequest>, JsonRejection>,
) -> Result<Json<Value>, AppError> {
    let req = body(payload)?;
    let mut store = state.announcements.write().await;
    let announcement = store.create(req, now_ms())?;
    metrics::record_announcement_change("create", store.len());
    tracing::info!(id = %announcement.id, title = %announcement.title, "Announcement created");
    Ok(Json(json!({ "success": true, "announcement": announcement })))
}

pub async fn update_announcement(
    State(state): State<AppState>,
    Path(id): Path<String>,
    payload: Result<Json<UpdateAnnouncementRequest>, JsonRejection>,
) -> Result<Json<Value>, AppError> {
    let req = body(payload)?;
    let mut store = state.announcements.write().await;
    let announcement = store.update(&id, req, now_ms())?;
    metrics::record_announcement_change("update", store.len());
    tracing::info!(id = %announcement.id, "Announcement updated");
    Ok(Json(json!({ "success": true, "announcement": announcement })))
}

pub async fn delete_announcement(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Value>, AppError> {
    let mut store = state.announcements.write().await;
    store.delete(&id)?;
    metrics::record_announcement_change("delete", store.len());
    tracing::info!(id = %id, "Announcement deleted");
    Ok(Json(json!({ "success": true, "message": "Announcement deleted" })))
}
