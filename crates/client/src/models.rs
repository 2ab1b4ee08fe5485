//! Wire models.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A product as returned by the server.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: Uuid,
    pub product_name: String,
    pub category: String,
    pub price: f64,
    pub availability_date: String,
}

/// One page of listing results.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductList {
    pub total: u64,
    pub page: u32,
    pub limit: u32,
    pub products: Vec<Product>,
}

/// Product fields sent on create and update.
///
/// Fields left as `None` are omitted from the request body; the server
/// reports them back as validation messages.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProductFields {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub product_name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub availability_date: Option<String>,
}
