use axum::{extract::State, Json};
use chrono::Utc;
use serde_json::{json, Value};

use crate::AppState;

pub async fn health_check(State(state): State<AppState>) -> Json<Value> {
    Json(json!({
        "status": "ok",
        "timestamp": Utc::now().to_rfc3339(),
        "uptime": state.started_at.elapsed().as_secs_f64(),
        "message": "Game API is running",
    }))
}

/// GET /: service descriptor with the endpoint map.
pub async fn service_info() -> Json<Value> {
    Json(json!({
        "name": env!("CARGO_PKG_NAME"),
        "version": env!("CARGO_PKG_VERSION"),
        "description": "WeChat login and announcement service for the game client",
        "endpoints": {
            "health": "GET /health",
            "metrics": "GET /metrics",
            "login": "POST /api/wechat/login",
            "announcements": "GET /api/announcements",
            "admin": {
                "list": "GET /api/admin/announcements",
                "create": "POST /api/admin/announcements",
                "update": "PUT /api/admin/announcements/:id",
                "delete": "DELETE /api/admin/announcements/:id",
            },
        },
    }))
}
