//! Product Index Handler

use std::sync::Arc;

use salvo::prelude::*;

use catalog_app::domain::products::query::ListParams;

use crate::{
    errors::ApiError,
    extensions::*,
    products::{errors::into_api_error, models::ProductListResponse},
    state::State,
};

/// Product Index Handler
///
/// Returns one page of products matching the filter, sort, and
/// pagination parameters.
#[endpoint(tags("products"), summary = "List Products")]
pub(crate) async fn handler(
    req: &mut Request,
    depot: &mut Depot,
) -> Result<Json<ProductListResponse>, ApiError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let params: ListParams = req
        .parse_queries()
        .or_500("failed to parse query parameters")?;

    let page = state
        .products
        .list_products(params)
        .await
        .map_err(into_api_error)?;

    let body = ProductListResponse::try_from(page).or_500("failed to render product page")?;

    Ok(Json(body))
}
