//! Product Models

use jiff::civil::Date;
use rust_decimal::Decimal;

use crate::uuids::TypedUuid;

/// Product UUID
pub type ProductUuid = TypedUuid<Product>;

/// A persisted catalog product.
#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    pub id: ProductUuid,
    pub product_name: String,
    pub category: String,
    pub price: Decimal,
    pub availability_date: Date,
}
