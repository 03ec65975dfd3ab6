//! Create Product Handler

use std::sync::Arc;

use salvo::prelude::*;

use tally_app::domain::records::Record;

use crate::{extensions::*, state::State};

/// Create Product Handler
///
/// Stores the JSON request body as a product and echoes it back with
/// `201 Created`. The body must be a JSON object or array; scalars and
/// `null` are rejected with `400`.
#[handler]
pub(crate) async fn handler(
    req: &mut Request,
    depot: &mut Depot,
    res: &mut Response,
) -> Result<Json<Record>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let product = req
        .parse_json::<Record>()
        .await
        .or_400("Invalid product payload")?;

    let created = state.app.products.create_product(product).await;

    res.status_code(StatusCode::CREATED);

    Ok(Json(created))
}
