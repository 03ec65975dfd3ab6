//! Product Index Handler

use std::sync::Arc;

use salvo::prelude::*;

use tally_app::domain::records::Record;

use crate::{extensions::*, state::State};

/// Product Index Handler
///
/// Returns every product created so far, oldest first.
#[handler]
pub(crate) async fn handler(depot: &mut Depot) -> Result<Json<Vec<Record>>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let products = state.app.products.list_products().await;

    Ok(Json(products))
}
