//! App Router

use std::sync::Arc;

use salvo::{affix_state::inject, prelude::*, trailing_slash::remove_slash};

use crate::{observability, products, state::State, users};

/// The service the server runs: resource routes wrapped in panic catching,
/// request logging, trailing slash removal and state injection.
pub(crate) fn service(state: Arc<State>) -> Service {
    Service::new(root(state))
}

pub(crate) fn root(state: Arc<State>) -> Router {
    Router::new()
        .hoop(CatchPanic::new())
        .hoop(observability::request_logging)
        .hoop(remove_slash())
        .hoop(inject(state))
        .push(app_router())
}

pub(crate) fn app_router() -> Router {
    Router::new()
        .push(
            Router::with_path("products")
                .get(products::index::handler)
                .post(products::create::handler),
        )
        .push(
            Router::with_path("users")
                .get(users::index::handler)
                .post(users::create::handler),
        )
}
