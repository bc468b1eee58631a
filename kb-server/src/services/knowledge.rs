//! Knowledge service - domain operations over the knowledge corpus.
//!
//! Validation happens here; the repository below only moves rows. Every
//! read is a store round trip - there is no cache, so reads always reflect
//! the latest write.

use kb_core::{CoreError, KnowledgeEntry, KnowledgeStats, KnowledgeUpdate, NewKnowledgeEntry};
use kb_db::{DbError, KnowledgeRepository};

use thiserror::Error;
use uuid::Uuid;

#[derive(Error, Debug)]
pub enum KnowledgeError {
    #[error(transparent)]
    Validation(#[from] CoreError),

    #[error("Knowledge entry {id} not found")]
    NotFound { id: Uuid },

    #[error(transparent)]
    Db(#[from] DbError),
}

#[derive(Clone)]
pub struct KnowledgeService {
    repo: KnowledgeRepository,
}

impl KnowledgeService {
    pub fn new(repo: KnowledgeRepository) -> Self {
        Self { repo }
    }

    /// Every entry, store order (newest first). No pagination.
    pub async fn list_all(&self) -> Result<Vec<KnowledgeEntry>, DbError> {
        self.repo.list_all().await
    }

    pub async fn get(&self, id: Uuid) -> Result<Option<KnowledgeEntry>, DbError> {
        self.repo.find_by_id(id).await
    }

    /// Aggregate counts, computed in the store on every call.
    pub async fn stats(&self) -> Result<KnowledgeStats, DbError> {
        self.repo.stats().await
    }

    /// Validate, assign id and timestamps, write through synchronously.
    pub async fn create(&self, input: NewKnowledgeEntry) -> Result<KnowledgeEntry, KnowledgeError> {
        input.validate()?;

        let entry = KnowledgeEntry::new(input.category, input.title, input.content);
        self.repo.create(&entry).await?;

        Ok(entry)
    }

    /// Partial update. Present fields are validated; absent fields keep
    /// their current values. Bumps `updated_at`.
    pub async fn update(
        &self,
        id: Uuid,
        update: KnowledgeUpdate,
    ) -> Result<KnowledgeEntry, KnowledgeError> {
        update.validate()?;

        let mut entry = self
            .repo
            .find_by_id(id)
            .await?
            .ok_or(KnowledgeError::NotFound { id })?;

        entry.apply(update);

        if !self.repo.update(&entry).await? {
            // Deleted between the read and the write.
            return Err(KnowledgeError::NotFound { id });
        }

        Ok(entry)
    }

    pub async fn delete(&self, id: Uuid) -> Result<(), KnowledgeError> {
        if !self.repo.delete(id).await? {
            return Err(KnowledgeError::NotFound { id });
        }

        Ok(())
    }
}
