//! User Index Handler

use std::sync::Arc;

use salvo::prelude::*;

use tally_app::domain::records::Record;

use crate::{extensions::*, state::State};

/// User Index Handler
///
/// Returns a list of users in creation order.
#[handler]
pub(crate) async fn handler(depot: &mut Depot) -> Result<Json<Vec<Record>>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    Ok(Json(state.app.users.list_users().await))
}
