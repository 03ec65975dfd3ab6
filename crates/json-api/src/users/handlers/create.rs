//! Create User Handler

use std::sync::Arc;

use salvo::prelude::*;

use tally_app::domain::records::Record;

use crate::{extensions::*, state::State};

/// Create User Handler
///
/// Stores the JSON request body as a user and echoes it back. A top-level
/// scalar or `null` body is rejected with `400`.
#[handler]
pub(crate) async fn handler(
    req: &mut Request,
    depot: &mut Depot,
    res: &mut Response,
) -> Result<Json<Record>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let user = req
        .parse_json::<Record>()
        .await
        .or_400("Invalid user payload")?;

    let created = state.app.users.create_user(user).await;

    res.status_code(StatusCode::CREATED);

    Ok(Json(created))
}
