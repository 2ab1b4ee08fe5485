//! Products Repository

use jiff_sqlx::Date as SqlxDate;
use rust_decimal::Decimal;
use sqlx::{FromRow, PgPool, Postgres, QueryBuilder, Row, postgres::PgRow, query, query_as};

use crate::domain::products::{
    data::NewProduct,
    models::{Product, ProductUuid},
    query::ProductQuery,
};

const GET_PRODUCT_SQL: &str = include_str!("sql/get_product.sql");
const CREATE_PRODUCT_SQL: &str = include_str!("sql/create_product.sql");
const UPDATE_PRODUCT_SQL: &str = include_str!("sql/update_product.sql");
const DELETE_PRODUCT_SQL: &str = include_str!("sql/delete_product.sql");

const SELECT_PRODUCTS: &str =
    "SELECT id, product_name, category, price, availability_date FROM products WHERE TRUE";
const COUNT_PRODUCTS: &str = "SELECT COUNT(*) FROM products WHERE TRUE";

#[derive(Debug, Clone, Default)]
pub(crate) struct PgProductsRepository;

impl PgProductsRepository {
    #[must_use]
    pub(crate) fn new() -> Self {
        Self
    }

    pub(crate) async fn list_products(
        &self,
        pool: &PgPool,
        query: &ProductQuery,
    ) -> Result<Vec<Product>, sqlx::Error> {
        let mut builder = select_builder(query);

        builder.build_query_as::<Product>().fetch_all(pool).await
    }

    pub(crate) async fn count_products(
        &self,
        pool: &PgPool,
        query: &ProductQuery,
    ) -> Result<u64, sqlx::Error> {
        let mut builder = count_builder(query);

        let total: i64 = builder.build_query_scalar().fetch_one(pool).await?;

        u64::try_from(total).map_err(|e| sqlx::Error::ColumnDecode {
            index: "count".to_string(),
            source: Box::new(e),
        })
    }

    pub(crate) async fn get_product(
        &self,
        pool: &PgPool,
        product: ProductUuid,
    ) -> Result<Option<Product>, sqlx::Error> {
        query_as::<Postgres, Product>(GET_PRODUCT_SQL)
            .bind(product.into_uuid())
            .fetch_optional(pool)
            .await
    }

    pub(crate) async fn create_product(
        &self,
        pool: &PgPool,
        new: NewProduct,
    ) -> Result<Product, sqlx::Error> {
        let id = ProductUuid::new();

        query_as::<Postgres, Product>(CREATE_PRODUCT_SQL)
            .bind(id.into_uuid())
            .bind(new.product_name)
            .bind(new.category)
            .bind(new.price)
            .bind(SqlxDate::from(new.availability_date))
            .fetch_one(pool)
            .await
    }

    pub(crate) async fn update_product(
        &self,
        pool: &PgPool,
        product: ProductUuid,
        update: NewProduct,
    ) -> Result<Option<Product>, sqlx::Error> {
        query_as::<Postgres, Product>(UPDATE_PRODUCT_SQL)
            .bind(product.into_uuid())
            .bind(update.product_name)
            .bind(update.category)
            .bind(update.price)
            .bind(SqlxDate::from(update.availability_date))
            .fetch_optional(pool)
            .await
    }

    pub(crate) async fn delete_product(
        &self,
        pool: &PgPool,
        product: ProductUuid,
    ) -> Result<u64, sqlx::Error> {
        let rows_affected = query(DELETE_PRODUCT_SQL)
            .bind(product.into_uuid())
            .execute(pool)
            .await?
            .rows_affected();

        Ok(rows_affected)
    }
}

/// Builds the filtered, ordered, paginated listing statement.
fn select_builder(query: &ProductQuery) -> QueryBuilder<'static, Postgres> {
    let mut builder = QueryBuilder::new(SELECT_PRODUCTS);

    push_filters(&mut builder, query);

    builder.push(" ORDER BY ");
    builder.push(query.sort.column());
    builder.push(" ASC LIMIT ");
    builder.push_bind(i64::from(query.limit));
    builder.push(" OFFSET ");
    builder.push_bind(i64::try_from(query.offset()).unwrap_or(i64::MAX));

    builder
}

/// Builds the matching-record count statement for the same filters.
fn count_builder(query: &ProductQuery) -> QueryBuilder<'static, Postgres> {
    let mut builder = QueryBuilder::new(COUNT_PRODUCTS);

    push_filters(&mut builder, query);

    builder
}

fn push_filters(builder: &mut QueryBuilder<'static, Postgres>, query: &ProductQuery) {
    if let Some(name) = &query.product_name {
        builder.push(" AND product_name ILIKE ");
        builder.push_bind(format!("%{name}%"));
    }

    if let Some(category) = &query.category {
        builder.push(" AND category ILIKE ");
        builder.push_bind(format!("%{category}%"));
    }

    if let Some(range) = query.price_range {
        builder.push(" AND price >= ");
        builder.push_bind(range.min);
        builder.push(" AND price <= ");
        builder.push_bind(range.max);
    }

    if let Some(range) = query.date_range {
        builder.push(" AND availability_date >= ");
        builder.push_bind(SqlxDate::from(range.start));
        builder.push(" AND availability_date <= ");
        builder.push_bind(SqlxDate::from(range.end));
    }
}

impl<'r> FromRow<'r, PgRow> for Product {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        Ok(Self {
            id: ProductUuid::from_uuid(row.try_get("id")?),
            product_name: row.try_get("product_name")?,
            category: row.try_get("category")?,
            price: row.try_get::<Decimal, _>("price")?,
            availability_date: row.try_get::<SqlxDate, _>("availability_date")?.to_jiff(),
        })
    }
}
