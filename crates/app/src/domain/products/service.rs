//! Products service.

use async_trait::async_trait;
use mockall::automock;
use tracing::debug;

use crate::domain::{records::Record, store::RecordStore};

#[derive(Debug, Default)]
pub struct InMemoryProductsService {
    store: RecordStore,
}

impl InMemoryProductsService {
    #[must_use]
    pub fn new(store: RecordStore) -> Self {
        Self { store }
    }
}

#[async_trait]
impl ProductsService for InMemoryProductsService {
    async fn create_product(&self, product: Record) -> Record {
        let (created, count) = self.store.append_with_len(product).await;

        debug!(count, "product stored");

        created
    }

    async fn list_products(&self) -> Vec<Record> {
        self.store.list_all().await
    }
}

/// Product storage operations.
#[automock]
#[async_trait]
pub trait ProductsService: Send + Sync {
    /// Stores a product and returns it unchanged.
    async fn create_product(&self, product: Record) -> Record;

    /// Retrieves all products in the order they were created.
    async fn list_products(&self) -> Vec<Record>;
}
