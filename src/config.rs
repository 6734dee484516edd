use std::env;

#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    // WeChat mini-game credentials (optional; login is disabled without them)
    pub wechat_app_id: Option<String>,
    pub wechat_app_secret: Option<String>,
    pub wechat_api_base: String,
    pub wechat_timeout_seconds: u64,
    pub seed_announcements: bool,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        Ok(Self {
            host: env::var("HOST").unwrap_or_else(|_| "0.0.0.0".into()),
            port: env::var("PORT")
                .unwrap_or_else(|_| "3000".into())
                .parse()?,
            wechat_app_id: env::var("WECHAT_APPID").ok().filter(|s| !s.is_empty()),
            wechat_app_secret: env::var("WECHAT_SECRET").ok().filter(|s| !s.is_empty()),
            wechat_api_base: env::var("WECHAT_API_BASE")
                .unwrap_or_else(|_| "https://api.weixin.qq.com".into()),
            wechat_timeout_seconds: env::var("WECHAT_TIMEOUT_SECONDS")
                .unwrap_or_else(|_| "5".into())
                .parse()?,
            seed_announcements: env::var("SEED_ANNOUNCEMENTS")
                .unwrap_or_else(|_| "true".into())
                .parse()?,
        })
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".into(),
            port: 3000,
            wechat_app_id: None,
            wechat_app_secret: None,
            wechat_api_base: "https://api.weixin.qq.com".into(),
            wechat_timeout_seconds: 5,
            seed_announcements: true,
        }
    }
}
