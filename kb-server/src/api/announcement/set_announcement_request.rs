use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct SetAnnouncementRequest {
    #[serde(default)]
    pub title: String,

    #[serde(default)]
    pub message: String,
}
