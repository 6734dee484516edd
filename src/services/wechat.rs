use std::time::Duration;

use reqwest::Client;

use crate::{
    config::Config,
    error::AppError,
    models::wechat::{Code2SessionResponse, WechatIdentity},
};

/// Client for the WeChat `jscode2session` exchange.
pub struct WechatService {
    client: Client,
    api_base: String,
    app_id: Option<String>,
    app_secret: Option<String>,
}

impl WechatService {
    pub fn new(config: &Config) -> anyhow::Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.wechat_timeout_seconds))
            .build()?;
        Ok(Self {
            client,
            api_base: config.wechat_api_base.trim_end_matches('/').to_string(),
            app_id: config.wechat_app_id.clone(),
            app_secret: config.wechat_app_secret.clone(),
        })
    }

    pub fn is_configured(&self) -> bool {
        self.app_id.is_some() && self.app_secret.is_some()
    }

    /// Trade a client login code for the player's openid / unionid.
    pub async fn code_to_session(&self, code: &str) -> Result<WechatIdentity, AppError> {
        let (app_id, app_secret) = match (&self.app_id, &self.app_secret) {
            (Some(id), Some(secret)) => (id, secret),
            _ => {
                return Err(AppError::Configuration(
                    "WeChat credentials are not configured on the server".into(),
                ))
            }
        };

        let response = self
            .client
            .get(format!("{}/sns/jscode2session", self.api_base))
            .query(&[
                ("appid", app_id.as_str()),
                ("secret", app_secret.as_str()),
                ("js_code", code),
                ("grant_type", "authorization_code"),
            ])
            .send()
            .await
            .map_err(request_failed)?;

        // WeChat answers with text/plain, so parse the body ourselves.
        let text = response.text().await.map_err(request_failed)?;
        let reply: Code2SessionResponse = serde_json::from_str(&text).map_err(|e| {
            tracing::error!("Unreadable jscode2session reply: {}", e);
            AppError::UpstreamUnavailable("Invalid response from WeChat".into())
        })?;

        if let Some(errcode) = reply.errcode.filter(|c| *c != 0) {
            let errmsg = reply.errmsg.unwrap_or_default();
            tracing::warn!(errcode, errmsg = %errmsg, "jscode2session rejected login code");
            return Err(AppError::Upstream { errcode, errmsg });
        }

        let openid = reply.openid.filter(|s| !s.is_empty()).ok_or_else(|| {
            AppError::UpstreamUnavailable("WeChat response did not include an openid".into())
        })?;

        Ok(WechatIdentity {
            openid,
            unionid: reply.unionid,
        })
    }
}

fn request_failed(e: reqwest::Error) -> AppError {
    if e.is_timeout() {
        tracing::error!("jscode2session timed out");
        AppError::UpstreamUnavailable("WeChat login request timed out".into())
    } else {
        tracing::error!("jscode2session request failed: {}", e);
        AppError::UpstreamUnavailable("WeChat login request failed".into())
    }
}
