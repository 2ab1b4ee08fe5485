//! HTTP client for the catalog JSON API.
//!
//! [`CatalogClient`] wraps one server; [`ListQuery`] builds the
//! filter, sort, and pagination parameters the listing endpoint
//! understands.

mod client;
mod errors;
mod models;
mod query;

pub use client::CatalogClient;
pub use errors::ClientError;
pub use models::{Product, ProductFields, ProductList};
pub use query::{ListQuery, Sort};
