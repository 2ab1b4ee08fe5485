//! Update Product Handler

use std::sync::Arc;

use salvo::{
    oapi::extract::{JsonBody, PathParam},
    prelude::*,
};

use crate::{
    errors::ApiError,
    extensions::*,
    products::{
        errors::into_api_error,
        handlers::parse_product_id,
        models::{ProductPayload, ProductResponse},
    },
    state::State,
};

/// Update Product Handler
///
/// Replaces every field of an existing product.
#[endpoint(tags("products"), summary = "Update Product")]
pub(crate) async fn handler(
    id: PathParam<String>,
    json: JsonBody<ProductPayload>,
    depot: &mut Depot,
) -> Result<Json<ProductResponse>, ApiError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let product_id = parse_product_id(&id.into_inner())?;

    let updated = state
        .products
        .update_product(product_id, json.into_inner().into())
        .await
        .map_err(into_api_error)?;

    let body = ProductResponse::try_from(updated).or_500("failed to render product")?;

    Ok(Json(body))
}
