//! Announcement service - thin pass-through to the singleton row.

use kb_core::{Announcement, CoreError};
use kb_db::{AnnouncementRepository, DbError};

use thiserror::Error;

#[derive(Error, Debug)]
pub enum AnnouncementError {
    #[error(transparent)]
    Validation(#[from] CoreError),

    #[error(transparent)]
    Db(#[from] DbError),
}

#[derive(Clone)]
pub struct AnnouncementService {
    repo: AnnouncementRepository,
}

impl AnnouncementService {
    pub fn new(repo: AnnouncementRepository) -> Self {
        Self { repo }
    }

    pub async fn current(&self) -> Result<Option<Announcement>, DbError> {
        self.repo.current().await
    }

    /// Replace the announcement wholesale. Last write wins, no versioning.
    pub async fn set(
        &self,
        title: String,
        message: String,
    ) -> Result<Announcement, AnnouncementError> {
        let announcement = Announcement::new(title, message);
        announcement.validate()?;

        self.repo.set(&announcement).await?;

        Ok(announcement)
    }
}
