use kb_core::Announcement;

use serde::Serialize;

/// Announcement DTO for JSON serialization
#[derive(Debug, Serialize)]
pub struct AnnouncementDto {
    pub title: String,
    pub message: String,
    pub updated_at: i64,
}

impl From<Announcement> for AnnouncementDto {
    fn from(announcement: Announcement) -> Self {
        Self {
            title: announcement.title,
            message: announcement.message,
            updated_at: announcement.updated_at.timestamp(),
        }
    }
}
