//! App Context

use std::sync::Arc;

use crate::domain::{
    products::{InMemoryProductsService, ProductsService},
    store::RecordStore,
    users::{InMemoryUsersService, UsersService},
};

#[derive(Clone)]
pub struct AppContext {
    pub products: Arc<dyn ProductsService>,
    pub users: Arc<dyn UsersService>,
}

impl AppContext {
    /// Build an application context backed by process memory.
    ///
    /// Each resource gets its own empty store; nothing is shared between
    /// them and everything is lost when the process exits.
    #[must_use]
    pub fn in_memory() -> Self {
        Self {
            products: Arc::new(InMemoryProductsService::new(RecordStore::new())),
            users: Arc::new(InMemoryUsersService::new(RecordStore::new())),
        }
    }
}
