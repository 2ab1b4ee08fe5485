//! API-facing product models.

use rust_decimal::{
    Decimal,
    prelude::{FromPrimitive, ToPrimitive},
};
use salvo::oapi::ToSchema;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

use catalog_app::domain::products::{ProductPage, data::ProductDraft, models::Product};

/// A stored price with no faithful JSON-number representation.
#[derive(Debug, Error)]
#[error("price {0} cannot be represented as a JSON number")]
pub(crate) struct PriceOutOfRange(Decimal);

/// A single product as returned to clients.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub(crate) struct ProductResponse {
    /// The unique identifier of the product
    pub id: Uuid,

    /// Display name
    pub product_name: String,

    /// Category label
    pub category: String,

    /// Price in major currency units
    pub price: f64,

    /// Calendar date the product becomes available
    pub availability_date: String,
}

impl TryFrom<Product> for ProductResponse {
    type Error = PriceOutOfRange;

    fn try_from(product: Product) -> Result<Self, Self::Error> {
        let price = product
            .price
            .to_f64()
            .ok_or(PriceOutOfRange(product.price))?;

        Ok(Self {
            id: product.id.into_uuid(),
            product_name: product.product_name,
            category: product.category,
            price,
            availability_date: product.availability_date.to_string(),
        })
    }
}

/// One page of listing results.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct ProductListResponse {
    /// Number of products matching the filters across all pages
    pub total: u64,

    /// Current page number
    pub page: u32,

    /// Page size
    pub limit: u32,

    /// The products on this page
    pub products: Vec<ProductResponse>,
}

impl TryFrom<ProductPage> for ProductListResponse {
    type Error = PriceOutOfRange;

    fn try_from(page: ProductPage) -> Result<Self, Self::Error> {
        let products = page
            .products
            .into_iter()
            .map(ProductResponse::try_from)
            .collect::<Result<_, _>>()?;

        Ok(Self {
            total: page.total,
            page: page.page,
            limit: page.limit,
            products,
        })
    }
}

/// Product fields accepted on create and update.
///
/// Everything is optional here; missing or invalid fields come back as
/// validation messages rather than deserialization failures.
#[derive(Debug, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase", default)]
pub(crate) struct ProductPayload {
    /// Display name
    pub product_name: Option<String>,

    /// Category label
    pub category: Option<String>,

    /// Price in major currency units
    pub price: Option<f64>,

    /// Calendar date the product becomes available
    pub availability_date: Option<String>,
}

impl From<ProductPayload> for ProductDraft {
    fn from(payload: ProductPayload) -> Self {
        Self {
            product_name: payload.product_name,
            category: payload.category,
            price: payload.price.and_then(Decimal::from_f64),
            availability_date: payload.availability_date,
        }
    }
}

/// Confirmation body for a successful delete.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct ProductDeletedResponse {
    /// Human-readable confirmation
    pub message: String,
}

#[cfg(test)]
mod tests {
    use jiff::civil::date;
    use testresult::TestResult;

    use catalog_app::domain::products::models::ProductUuid;

    use super::*;

    fn product(price: Decimal) -> Product {
        Product {
            id: ProductUuid::new(),
            product_name: "Laptop".to_string(),
            category: "Electronics".to_string(),
            price,
            availability_date: date(2026, 10, 1),
        }
    }

    #[test]
    fn response_carries_the_price_as_a_number() -> TestResult {
        let response = ProductResponse::try_from(product(Decimal::new(99999, 2)))?;

        assert!(
            (response.price - 999.99).abs() < f64::EPSILON,
            "expected 999.99, got {}",
            response.price
        );
        assert_eq!(response.availability_date, "2026-10-01");

        Ok(())
    }

    #[test]
    fn page_conversion_maps_every_product() -> TestResult {
        let page = ProductPage {
            total: 2,
            page: 1,
            limit: 10,
            products: vec![product(Decimal::new(1999, 2)), product(Decimal::new(50, 0))],
        };

        let response = ProductListResponse::try_from(page)?;

        let prices: Vec<f64> = response.products.iter().map(|p| p.price).collect();

        assert_eq!(response.total, 2);
        assert_eq!(prices, vec![19.99, 50.0]);

        Ok(())
    }
}
