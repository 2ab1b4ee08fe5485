//! Products Errors

use thiserror::Error;

use crate::domain::products::query::QueryError;

/// Products Service Error
#[derive(Debug, Error)]
pub enum ProductsServiceError {
    /// One or more product fields failed validation.
    #[error("invalid product: {}", .0.join(", "))]
    Validation(Vec<String>),

    /// The listing parameters could not be translated.
    #[error(transparent)]
    Query(#[from] QueryError),

    /// No product exists with the requested id.
    #[error("product not found")]
    NotFound,

    /// The store rejected or failed the operation.
    #[error("database error")]
    Sql(#[source] sqlx::Error),
}

impl From<sqlx::Error> for ProductsServiceError {
    fn from(error: sqlx::Error) -> Self {
        match error {
            sqlx::Error::RowNotFound => Self::NotFound,
            other => Self::Sql(other),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn row_not_found_becomes_not_found() {
        let error = ProductsServiceError::from(sqlx::Error::RowNotFound);

        assert!(matches!(error, ProductsServiceError::NotFound));
    }

    #[test]
    fn other_sqlx_errors_stay_sql() {
        let error = ProductsServiceError::from(sqlx::Error::PoolClosed);

        assert!(matches!(error, ProductsServiceError::Sql(_)));
    }

    #[test]
    fn validation_error_joins_messages() {
        let error = ProductsServiceError::Validation(vec![
            "Product name is required".to_string(),
            "Category is required".to_string(),
        ]);

        assert_eq!(
            error.to_string(),
            "invalid product: Product name is required, Category is required"
        );
    }
}
