use uuid::Uuid;

use crate::{
    error::AppError,
    models::announcement::{
        Announcement, AnnouncementButton, CreateAnnouncementRequest, UpdateAnnouncementRequest,
        DAY_MS, DEFAULT_DURATION_DAYS, DEFAULT_PRIORITY,
    },
};

/// In-memory announcement collection, kept in insertion order.
///
/// All operations take the current time explicitly so callers (and tests)
/// control the clock. Sharing across requests is the caller's business; the
/// HTTP layer wraps the store in a `RwLock`.
#[derive(Debug, Default)]
pub struct AnnouncementStore {
    items: Vec<Announcement>,
}

impl AnnouncementStore {
    pub fn empty() -> Self {
        Self::default()
    }

    /// Starting set used at process start: two announcements visible for the
    /// next 30 days.
    pub fn seeded(now: i64) -> Self {
        let end = now + DEFAULT_DURATION_DAYS * DAY_MS;
        let items = vec![
            Announcement {
                id: new_id(),
                kind: "important".into(),
                title: "Welcome".into(),
                content: "Thanks for playing! Check back here for news and updates.".into(),
                image: String::new(),
                link: String::new(),
                link_text: String::new(),
                show_once: false,
                priority: 100,
                start_time: now,
                end_time: end,
                buttons: vec![AnnouncementButton::acknowledge()],
                created_at: now,
                updated_at: now,
            },
            Announcement {
                id: new_id(),
                kind: "event".into(),
                title: "Launch event".into(),
                content: "Log in every day during the launch event to collect bonus rewards.".into(),
                image: String::new(),
                link: String::new(),
                link_text: String::new(),
                show_once: true,
                priority: 90,
                start_time: now,
                end_time: end,
                buttons: vec![AnnouncementButton::acknowledge()],
                created_at: now,
                updated_at: now,
            },
        ];
        Self { items }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&Announcement> {
        self.items.iter().find(|a| a.id == id)
    }

    /// Announcements visible at `now`, highest priority first. Equal
    /// priorities keep insertion order.
    pub fn list_active(&self, now: i64) -> Vec<Announcement> {
        let mut active: Vec<Announcement> = self
            .items
            .iter()
            .filter(|a| a.is_active_at(now))
            .cloned()
            .collect();
        active.sort_by(|a, b| b.priority.cmp(&a.priority));
        active
    }

    /// Every stored announcement, expired and future-dated included.
    pub fn list_all(&self) -> Vec<Announcement> {
        self.items.clone()
    }

    pub fn create(
        &mut self,
        req: CreateAnnouncementRequest,
        now: i64,
    ) -> Result<Announcement, AppError> {
        let (kind, title, content) = match (
            non_empty(req.kind),
            non_empty(req.title),
            non_empty(req.content),
        ) {
            (Some(kind), Some(title), Some(content)) => (kind, title, content),
            _ => {
                return Err(AppError::Validation(
                    "Missing required fields: type, title, content".into(),
                ))
            }
        };

        let duration = req.duration.unwrap_or(DEFAULT_DURATION_DAYS);
        if duration < 0 {
            return Err(AppError::Validation("duration must not be negative".into()));
        }
        let announcement = Announcement {
            id: self.unique_id(),
            kind,
            title,
            content,
            image: req.image.unwrap_or_default(),
            link: req.link.unwrap_or_default(),
            link_text: req.link_text.unwrap_or_default(),
            show_once: req.show_once.unwrap_or(false),
            priority: req.priority.unwrap_or(DEFAULT_PRIORITY),
            start_time: now,
            end_time: now.saturating_add(duration.saturating_mul(DAY_MS)),
            buttons: req
                .buttons
                .unwrap_or_else(|| vec![AnnouncementButton::acknowledge()]),
            created_at: now,
            updated_at: now,
        };

        self.items.push(announcement.clone());
        Ok(announcement)
    }

    pub fn update(
        &mut self,
        id: &str,
        req: UpdateAnnouncementRequest,
        now: i64,
    ) -> Result<Announcement, AppError> {
        let existing = self
            .items
            .iter_mut()
            .find(|a| a.id == id)
            .ok_or_else(|| not_found(id))?;

        if let Some(kind) = req.kind {
            existing.kind = kind;
        }
        if let Some(title) = req.title {
            existing.title = title;
        }
        if let Some(content) = req.content {
            existing.content = content;
        }
        if let Some(image) = req.image {
            existing.image = image;
        }
        if let Some(link) = req.link {
            existing.link = link;
        }
        if let Some(link_text) = req.link_text {
            existing.link_text = link_text;
        }
        if let Some(show_once) = req.show_once {
            existing.show_once = show_once;
        }
        if let Some(priority) = req.priority {
            existing.priority = priority;
        }
        if let Some(start_time) = req.start_time {
            existing.start_time = start_time;
        }
        if let Some(end_time) = req.end_time {
            existing.end_time = end_time;
        }
        if let Some(buttons) = req.buttons {
            existing.buttons = buttons;
        }
        // Must move forward even when two updates land in the same millisecond.
        existing.updated_at = now.max(existing.updated_at + 1);

        Ok(existing.clone())
    }

    pub fn delete(&mut self, id: &str) -> Result<(), AppError> {
        let idx = self
            .items
            .iter()
            .position(|a| a.id == id)
            .ok_or_else(|| not_found(id))?;
        self.items.remove(idx);
        Ok(())
    }

    fn unique_id(&self) -> String {
        loop {
            let id = new_id();
            if self.get(&id).is_none() {
                return id;
            }
        }
    }
}

fn new_id() -> String {
    Uuid::new_v4().to_string()
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|s| !s.is_empty())
}

fn not_found(id: &str) -> AppError {
    AppError::NotFound(format!("Announcement {id} not found"))
}
