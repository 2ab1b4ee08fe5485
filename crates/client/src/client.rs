//! Catalog API client.

use reqwest::{Client, Response};
use serde::de::DeserializeOwned;
use uuid::Uuid;

use crate::{
    errors::ClientError,
    models::{Product, ProductFields, ProductList},
    query::ListQuery,
};

/// Client for one catalog server.
#[derive(Debug, Clone)]
pub struct CatalogClient {
    base_url: String,
    http: Client,
}

impl CatalogClient {
    /// Create a client for the server at `base_url`, with or without a
    /// trailing slash.
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();

        Self {
            base_url,
            http: Client::new(),
        }
    }

    /// Fetch one page of products.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::BadRequest`] when the server rejects the
    /// listing parameters, or a transport error when the request fails.
    pub async fn list_products(&self, query: &ListQuery) -> Result<ProductList, ClientError> {
        let url = format!("{}/product?{}", self.base_url, query.to_query_string());

        decode(self.http.get(url).send().await?).await
    }

    /// Fetch a single product by id.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::NotFound`] when no such product exists.
    pub async fn get_product(&self, id: Uuid) -> Result<Product, ClientError> {
        let url = format!("{}/product/{id}", self.base_url);

        decode(self.http.get(url).send().await?).await
    }

    /// Create a product.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Validation`] with one message per failed
    /// field when the server rejects the payload.
    pub async fn create_product(&self, fields: &ProductFields) -> Result<Product, ClientError> {
        let url = format!("{}/product", self.base_url);

        decode(self.http.post(url).json(fields).send().await?).await
    }

    /// Replace every field of an existing product.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::NotFound`] when no such product exists,
    /// or [`ClientError::Validation`] when the payload is rejected.
    pub async fn update_product(
        &self,
        id: Uuid,
        fields: &ProductFields,
    ) -> Result<Product, ClientError> {
        let url = format!("{}/product/{id}", self.base_url);

        decode(self.http.put(url).json(fields).send().await?).await
    }

    /// Delete a product.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::NotFound`] when no such product exists.
    pub async fn delete_product(&self, id: Uuid) -> Result<(), ClientError> {
        let url = format!("{}/product/{id}", self.base_url);

        let response = self.http.delete(url).send().await?;

        if response.status().is_success() {
            return Ok(());
        }

        let status = response.status();
        let body = response.bytes().await?;

        Err(ClientError::from_response(status, &body))
    }
}

async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, ClientError> {
    let status = response.status();

    if status.is_success() {
        return Ok(response.json().await?);
    }

    let body = response.bytes().await?;

    Err(ClientError::from_response(status, &body))
}
