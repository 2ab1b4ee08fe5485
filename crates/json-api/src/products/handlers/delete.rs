//! Delete Product Handler

use std::sync::Arc;

use salvo::{oapi::extract::PathParam, prelude::*};

use crate::{
    errors::ApiError,
    extensions::*,
    products::{errors::into_api_error, handlers::parse_product_id, models::ProductDeletedResponse},
    state::State,
};

/// Delete Product Handler
#[endpoint(tags("products"), summary = "Delete Product")]
pub(crate) async fn handler(
    id: PathParam<String>,
    depot: &mut Depot,
) -> Result<Json<ProductDeletedResponse>, ApiError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let product_id = parse_product_id(&id.into_inner())?;

    state
        .products
        .delete_product(product_id)
        .await
        .map_err(into_api_error)?;

    Ok(Json(ProductDeletedResponse {
        message: "Product deleted successfully".to_string(),
    }))
}
