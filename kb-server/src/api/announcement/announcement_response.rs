use crate::AnnouncementDto;
use serde::Serialize;

/// Current announcement, null when nothing has been published
#[derive(Debug, Serialize)]
pub struct AnnouncementResponse {
    pub success: bool,
    pub announcement: Option<AnnouncementDto>,
}
