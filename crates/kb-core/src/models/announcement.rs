use crate::{CoreError, Result};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// The single site-wide announcement banner. Absence of a stored record
/// means no announcement; `set` replaces the record wholesale.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Announcement {
    pub title: String,
    pub message: String,

    pub updated_at: DateTime<Utc>,
}

impl Announcement {
    pub fn new(title: String, message: String) -> Self {
        Self {
            title,
            message,
            updated_at: Utc::now(),
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.title.trim().is_empty() {
            return Err(CoreError::validation("Title cannot be empty"));
        }
        if self.message.trim().is_empty() {
            return Err(CoreError::validation("Message cannot be empty"));
        }
        Ok(())
    }
}
