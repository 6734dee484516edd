use serde::{Deserialize, Serialize};

pub const DAY_MS: i64 = 86_400_000;
pub const DEFAULT_PRIORITY: i64 = 50;
pub const DEFAULT_DURATION_DAYS: i64 = 30;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnnouncementButton {
    pub text: String,
    pub action: String,
}

impl AnnouncementButton {
    pub fn acknowledge() -> Self {
        Self {
            text: "acknowledge".into(),
            action: "close".into(),
        }
    }
}

/// A timed, prioritized message shown to game clients.
/// Timestamps are milliseconds since the Unix epoch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Announcement {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub title: String,
    pub content: String,
    pub image: String,
    pub link: String,
    pub link_text: String,
    pub show_once: bool,
    pub priority: i64,
    pub start_time: i64,
    pub end_time: i64,
    pub buttons: Vec<AnnouncementButton>,
    pub created_at: i64,
    pub updated_at: i64,
}

impl Announcement {
    /// Visible to clients at `now` (both window bounds inclusive).
    pub fn is_active_at(&self, now: i64) -> bool {
        self.start_time <= now && now <= self.end_time
    }
}

/// Body of `POST /api/admin/announcements`. Required fields are `Option` so
/// that absence is reported as a validation error, not a JSON rejection.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateAnnouncementRequest {
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub title: Option<String>,
    pub content: Option<String>,
    pub image: Option<String>,
    pub link: Option<String>,
    pub link_text: Option<String>,
    pub show_once: Option<bool>,
    pub priority: Option<i64>,
    /// Visibility window length in days.
    pub duration: Option<i64>,
    pub buttons: Option<Vec<AnnouncementButton>>,
}

/// Body of `PUT /api/admin/announcements/{id}`. `id`, `createdAt` and
/// `updatedAt` have no slot here, so a client cannot overwrite them.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateAnnouncementRequest {
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub title: Option<String>,
    pub content: Option<String>,
    pub image: Option<String>,
    pub link: Option<String>,
    pub link_text: Option<String>,
    pub show_once: Option<bool>,
    pub priority: Option<i64>,
    pub start_time: Option<i64>,
    pub end_time: Option<i64>,
    pub buttons: Option<Vec<AnnouncementButton>>,
}
