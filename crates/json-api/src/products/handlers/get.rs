//! Get Product Handler

use std::sync::Arc;

use salvo::{oapi::extract::PathParam, prelude::*};

use crate::{
    errors::ApiError,
    extensions::*,
    products::{errors::into_api_error, handlers::parse_product_id, models::ProductResponse},
    state::State,
};

/// Get Product Handler
///
/// Returns a product.
#[endpoint(tags("products"), summary = "Get Product")]
pub(crate) async fn handler(
    id: PathParam<String>,
    depot: &mut Depot,
) -> Result<Json<ProductResponse>, ApiError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let product_id = parse_product_id(&id.into_inner())?;

    let product = state
        .products
        .get_product(product_id)
        .await
        .map_err(into_api_error)?;

    let body = ProductResponse::try_from(product).or_500("failed to render product")?;

    Ok(Json(body))
}
