use axum::{
    extract::{rejection::JsonRejection, State},
    Json,
};

use crate::{
    error::AppError,
    models::wechat::{LoginRequest, LoginResponse},
    services::metrics,
    AppState,
};

/// POST /api/wechat/login: exchange a `wx.login` code for the player's openid.
pub async fn login(
    State(state): State<AppState>,
    payload: Result<Json<LoginRequest>, JsonRejection>,
) -> Result<Json<LoginResponse>, AppError> {
    let code = payload
        .ok()
        .and_then(|Json(body)| body.code)
        .filter(|c| !c.is_empty())
        .ok_or_else(|| {
            metrics::record_login("invalid");
            AppError::Validation("Missing code".into())
        })?;

    match state.wechat.code_to_session(&code).await {
        Ok(identity) => {
            metrics::record_login("ok");
            tracing::info!(openid = %identity.openid, "WeChat login succeeded");
            Ok(Json(LoginResponse {
                success: true,
                openid: identity.openid,
                unionid: identity.unionid,
            }))
        }
        Err(e) => {
            metrics::record_login("error");
            Err(e)
        }
    }
}
