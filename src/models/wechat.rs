use serde::{Deserialize, Serialize};

#[derive(Debug, Default, Deserialize)]
pub struct LoginRequest {
    pub code: Option<String>,
}

/// Raw `jscode2session` reply. Either the session fields or the error pair
/// is populated; `errcode` may also be present as `0` on success.
#[derive(Debug, Deserialize)]
pub struct Code2SessionResponse {
    pub openid: Option<String>,
    pub session_key: Option<String>,
    pub unionid: Option<String>,
    pub errcode: Option<i64>,
    pub errmsg: Option<String>,
}

/// Identity resolved for a player. The session key stays server-side.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WechatIdentity {
    pub openid: String,
    pub unionid: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub success: bool,
    pub openid: String,
    pub unionid: Option<String>,
}
