//! Products service.

use async_trait::async_trait;
use jiff::Zoned;
use mockall::automock;
use sqlx::PgPool;

use crate::domain::products::{
    data::ProductDraft,
    errors::ProductsServiceError,
    models::{Product, ProductUuid},
    query::{ListParams, ProductQuery},
    repository::PgProductsRepository,
    validation::ValidationRules,
};

/// One page of listing results.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductPage {
    pub total: u64,
    pub page: u32,
    pub limit: u32,
    pub products: Vec<Product>,
}

#[derive(Debug, Clone)]
pub struct PgProductsService {
    pool: PgPool,
    repository: PgProductsRepository,
    rules: ValidationRules,
}

impl PgProductsService {
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self {
            pool,
            repository: PgProductsRepository::new(),
            rules: ValidationRules::default(),
        }
    }

    #[must_use]
    pub fn with_rules(mut self, rules: ValidationRules) -> Self {
        self.rules = rules;
        self
    }
}

#[async_trait]
impl ProductsService for PgProductsService {
    #[tracing::instrument(name = "products.service.list_products", skip(self, params), err)]
    async fn list_products(&self, params: ListParams) -> Result<ProductPage, ProductsServiceError> {
        let query = ProductQuery::from_params(&params)?;

        let total = self.repository.count_products(&self.pool, &query).await?;
        let products = self.repository.list_products(&self.pool, &query).await?;

        Ok(ProductPage {
            total,
            page: query.page,
            limit: query.limit,
            products,
        })
    }

    #[tracing::instrument(name = "products.service.get_product", skip(self), fields(product_uuid = %product), err)]
    async fn get_product(&self, product: ProductUuid) -> Result<Product, ProductsServiceError> {
        self.repository
            .get_product(&self.pool, product)
            .await?
            .ok_or(ProductsServiceError::NotFound)
    }

    #[tracing::instrument(name = "products.service.create_product", skip(self, draft), err)]
    async fn create_product(&self, draft: ProductDraft) -> Result<Product, ProductsServiceError> {
        let new = self
            .rules
            .validate(&draft, Zoned::now().date())
            .map_err(ProductsServiceError::Validation)?;

        let created = self.repository.create_product(&self.pool, new).await?;

        Ok(created)
    }

    #[tracing::instrument(name = "products.service.update_product", skip(self, draft), fields(product_uuid = %product), err)]
    async fn update_product(
        &self,
        product: ProductUuid,
        draft: ProductDraft,
    ) -> Result<Product, ProductsServiceError> {
        let update = self
            .rules
            .validate(&draft, Zoned::now().date())
            .map_err(ProductsServiceError::Validation)?;

        self.repository
            .update_product(&self.pool, product, update)
            .await?
            .ok_or(ProductsServiceError::NotFound)
    }

    #[tracing::instrument(name = "products.service.delete_product", skip(self), fields(product_uuid = %product), err)]
    async fn delete_product(&self, product: ProductUuid) -> Result<(), ProductsServiceError> {
        let rows_affected = self.repository.delete_product(&self.pool, product).await?;

        if rows_affected == 0 {
            return Err(ProductsServiceError::NotFound);
        }

        Ok(())
    }
}

#[automock]
#[async_trait]
pub trait ProductsService: Send + Sync {
    /// Retrieves one page of products matching the listing parameters.
    async fn list_products(&self, params: ListParams) -> Result<ProductPage, ProductsServiceError>;

    /// Retrieve a single product.
    async fn get_product(&self, product: ProductUuid) -> Result<Product, ProductsServiceError>;

    /// Validates and stores a new product.
    async fn create_product(&self, draft: ProductDraft) -> Result<Product, ProductsServiceError>;

    /// Validates a replacement draft and applies it to an existing product.
    async fn update_product(
        &self,
        product: ProductUuid,
        draft: ProductDraft,
    ) -> Result<Product, ProductsServiceError>;

    /// Deletes a product with the given UUID.
    async fn delete_product(&self, product: ProductUuid) -> Result<(), ProductsServiceError>;
}
