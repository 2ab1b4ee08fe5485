//! Product Errors

use tracing::error;

use catalog_app::domain::products::ProductsServiceError;

use crate::errors::ApiError;

pub(crate) fn into_api_error(error: ProductsServiceError) -> ApiError {
    match error {
        ProductsServiceError::Validation(errors) => ApiError::validation(errors),
        ProductsServiceError::Query(source) => ApiError::bad_request(source.to_string()),
        ProductsServiceError::NotFound => ApiError::not_found("Product not found"),
        ProductsServiceError::Sql(source) => {
            error!("products store failure: {source}");

            ApiError::internal(source.to_string())
        }
    }
}
