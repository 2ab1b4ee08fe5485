//! App Context

use std::sync::Arc;

use thiserror::Error;

use crate::{
    database,
    domain::products::{PgProductsService, ProductsService},
};

/// Failure while wiring up the application at startup.
#[derive(Debug, Error)]
pub enum AppInitError {
    #[error("failed to connect to database")]
    Database(#[source] sqlx::Error),
}

/// Service handles shared by everything that runs against the store.
///
/// Constructed once at process start and dropped at shutdown; the
/// connection pool lives inside the services.
#[derive(Clone)]
pub struct AppContext {
    pub products: Arc<dyn ProductsService>,
}

impl AppContext {
    /// Build application context from a database URL.
    ///
    /// # Errors
    ///
    /// Returns an error when establishing a database connection fails.
    pub async fn from_database_url(url: &str) -> Result<Self, AppInitError> {
        let pool = database::connect(url)
            .await
            .map_err(AppInitError::Database)?;

        Ok(Self {
            products: Arc::new(PgProductsService::new(pool)),
        })
    }
}
