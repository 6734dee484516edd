pub mod config;
pub mod error;
pub mod models;
pub mod routes;
pub mod services;

use std::{sync::Arc, time::Instant};

use chrono::Utc;
use tokio::sync::RwLock;

use config::Config;
use services::{announcements::AnnouncementStore, wechat::WechatService};

/// Application state shared across all handlers.
#[derive(Clone)]
pub struct AppState {
    pub announcements: Arc<RwLock<AnnouncementStore>>,
    pub wechat: Arc<WechatService>,
    pub started_at: Instant,
}

impl AppState {
    pub fn new(config: Config, store: AnnouncementStore) -> anyhow::Result<Self> {
        let wechat = WechatService::new(&config)?;
        services::metrics::ANNOUNCEMENTS_GAUGE.set(store.len() as f64);
        Ok(Self {
            announcements: Arc::new(RwLock::new(store)),
            wechat: Arc::new(wechat),
            started_at: Instant::now(),
        })
    }

    /// State as the server starts it: seeded store unless disabled.
    pub fn from_config(config: Config) -> anyhow::Result<Self> {
        let store = if config.seed_announcements {
            AnnouncementStore::seeded(Utc::now().timestamp_millis())
        } else {
            AnnouncementStore::empty()
        };
        Self::new(config, store)
    }
}
