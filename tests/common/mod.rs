#![allow(dead_code)]

use std::collections::HashMap;
use std::time::Duration;

use axum::body::{Body, Bytes};
use axum::extract::Query;
use axum::http::{header, Method, Request, StatusCode};
use axum::response::IntoResponse;
use axum::routing::get;
use axum::Router;
use http_body_util::BodyExt;
use serde_json::Value;
use tower::ServiceExt;

use game_api::config::Config;
use game_api::routes;
use game_api::services::announcements::AnnouncementStore;
use game_api::AppState;

pub struct TestApp {
    router: Router,
    pub state: AppState,
}

pub struct TestResponse {
    pub status: StatusCode,
    pub content_type: Option<String>,
    body_bytes: Bytes,
}

impl TestResponse {
    pub fn json(&self) -> Value {
        serde_json::from_slice(&self.body_bytes).unwrap_or(Value::Null)
    }

    pub fn text(&self) -> String {
        String::from_utf8_lossy(&self.body_bytes).to_string()
    }

    pub fn error_message(&self) -> String {
        self.json()["error"].as_str().unwrap_or("").to_string()
    }
}

impl TestApp {
    /// Fresh app per test so store mutations never leak between tests.
    pub fn with_store(config: Config, store: AnnouncementStore) -> Self {
        let state = AppState::new(config, store).expect("state");
        Self {
            router: routes::router(state.clone()),
            state,
        }
    }

    pub fn seeded() -> Self {
        let now = chrono::Utc::now().timestamp_millis();
        Self::with_store(Config::default(), AnnouncementStore::seeded(now))
    }

    pub fn empty() -> Self {
        Self::with_store(Config::default(), AnnouncementStore::empty())
    }

    pub async fn request(&self, method: Method, uri: &str, body: Option<Value>) -> TestResponse {
        let mut builder = Request::builder().method(method).uri(uri);
        let body = match body {
            Some(value) => {
                builder = builder.header(header::CONTENT_TYPE, "application/json");
                Body::from(serde_json::to_vec(&value).unwrap())
            }
            None => Body::empty(),
        };
        self.send(builder.body(body).unwrap()).await
    }

    pub async fn send(&self, request: Request<Body>) -> TestResponse {
        let response = self.router.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let content_type = response
            .headers()
            .get(header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string);
        let body_bytes = response.into_body().collect().await.unwrap().to_bytes();
        TestResponse {
            status,
            content_type,
            body_bytes,
        }
    }

    pub async fn get(&self, uri: &str) -> TestResponse {
        self.request(Method::GET, uri, None).await
    }

    pub async fn post(&self, uri: &str, body: Value) -> TestResponse {
        self.request(Method::POST, uri, Some(body)).await
    }

    pub async fn put(&self, uri: &str, body: Value) -> TestResponse {
        self.request(Method::PUT, uri, Some(body)).await
    }

    pub async fn delete(&self, uri: &str) -> TestResponse {
        self.request(Method::DELETE, uri, None).await
    }
}

// ---------------------------------------------------------------------------
// Fake jscode2session endpoint
// ---------------------------------------------------------------------------

pub const GOOD_CODE: &str = "good-code";
pub const NO_UNIONID_CODE: &str = "no-unionid";
pub const USED_CODE: &str = "used-code";
pub const SLOW_CODE: &str = "slow-code";
pub const GARBAGE_CODE: &str = "garbage-code";

async fn jscode2session(Query(params): Query<HashMap<String, String>>) -> impl IntoResponse {
    let plain = [(header::CONTENT_TYPE, "text/plain")];
    if params.get("appid").map(String::as_str) != Some("wx-test-app")
        || params.get("secret").map(String::as_str) != Some("wx-test-secret")
        || params.get("grant_type").map(String::as_str) != Some("authorization_code")
    {
        return (plain, r#"{"errcode":40013,"errmsg":"invalid appid"}"#.to_string());
    }

    let body = match params.get("js_code").map(String::as_str) {
        Some(GOOD_CODE) => {
            r#"{"openid":"o-player-1","session_key":"sk-secret","unionid":"u-player-1"}"#
        }
        Some(NO_UNIONID_CODE) => r#"{"openid":"o-player-2","session_key":"sk-secret"}"#,
        Some(USED_CODE) => r#"{"errcode":40163,"errmsg":"code been used"}"#,
        Some(SLOW_CODE) => {
            tokio::time::sleep(Duration::from_secs(3)).await;
            r#"{"openid":"o-late","session_key":"sk-secret"}"#
        }
        Some(GARBAGE_CODE) => "<html>bad gateway</html>",
        _ => r#"{"errcode":40029,"errmsg":"invalid code"}"#,
    };
    (plain, body.to_string())
}

/// Spawn the fake identity service on an ephemeral port and return its base URL.
pub async fn spawn_fake_wechat() -> String {
    let app = Router::new().route("/sns/jscode2session", get(jscode2session));
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{addr}")
}

pub fn wechat_config(api_base: String) -> Config {
    Config {
        wechat_app_id: Some("wx-test-app".into()),
        wechat_app_secret: Some("wx-test-secret".into()),
        wechat_api_base: api_base,
        wechat_timeout_seconds: 1,
        ..Config::default()
    }
}
