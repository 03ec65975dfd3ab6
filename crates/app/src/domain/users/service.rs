//! Users service.

use async_trait::async_trait;
use mockall::automock;
use tracing::debug;

use crate::domain::{records::Record, store::RecordStore};

#[derive(Debug, Default)]
pub struct InMemoryUsersService {
    store: RecordStore,
}

impl InMemoryUsersService {
    #[must_use]
    pub fn new(store: RecordStore) -> Self {
        Self { store }
    }
}

#[async_trait]
impl UsersService for InMemoryUsersService {
    async fn create_user(&self, user: Record) -> Record {
        let (created, count) = self.store.append_with_len(user).await;

        debug!(count, "user stored");

        created
    }

    async fn list_users(&self) -> Vec<Record> {
        self.store.list_all().await
    }
}

/// User storage operations.
#[automock]
#[async_trait]
pub trait UsersService: Send + Sync {
    /// Stores a user and returns it unchanged.
    async fn create_user(&self, user: Record) -> Record;

    /// Retrieves all users in the order they were created.
    async fn list_users(&self) -> Vec<Record>;
}
