//! Product Handlers

pub(crate) mod create;
pub(crate) mod delete;
pub(crate) mod get;
pub(crate) mod index;
pub(crate) mod update;

use catalog_app::domain::products::models::ProductUuid;
use uuid::Uuid;

use crate::errors::ApiError;

/// A path id that is not a UUID surfaces as a server error body rather
/// than a 404.
fn parse_product_id(raw: &str) -> Result<ProductUuid, ApiError> {
    raw.parse::<Uuid>()
        .map(ProductUuid::from_uuid)
        .map_err(|error| ApiError::internal(error.to_string()))
}
