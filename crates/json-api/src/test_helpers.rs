//! Test helpers.

use std::sync::Arc;

use salvo::{affix_state::inject, prelude::*};

use tally_app::{
    context::AppContext,
    domain::{products::MockProductsService, users::MockUsersService},
};

use crate::state::State;

fn strict_products_mock() -> MockProductsService {
    let mut products = MockProductsService::new();

    products.expect_create_product().never();
    products.expect_list_products().never();

    products
}

fn strict_users_mock() -> MockUsersService {
    let mut users = MockUsersService::new();

    users.expect_create_user().never();
    users.expect_list_users().never();

    users
}

pub(crate) fn state_with_products(products: MockProductsService) -> Arc<State> {
    State::from_app_context(AppContext {
        products: Arc::new(products),
        users: Arc::new(strict_users_mock()),
    })
}

pub(crate) fn state_with_users(users: MockUsersService) -> Arc<State> {
    State::from_app_context(AppContext {
        products: Arc::new(strict_products_mock()),
        users: Arc::new(users),
    })
}

pub(crate) fn products_service(products: MockProductsService, route: Router) -> Service {
    Service::new(
        Router::new()
            .hoop(inject(state_with_products(products)))
            .push(route),
    )
}

pub(crate) fn users_service(users: MockUsersService, route: Router) -> Service {
    Service::new(
        Router::new()
            .hoop(inject(state_with_users(users)))
            .push(route),
    )
}
