use catalog_app::database;
use clap::Args;
use jiff::civil::{Date, date};
use rust_decimal::Decimal;
use sqlx::query;
use uuid::Uuid;

const INSERT_PRODUCT_SQL: &str =
    "INSERT INTO products (id, product_name, category, price, availability_date) \
     VALUES ($1, $2, $3, $4, $5)";

/// The starter catalog, all availability dates in the future.
const SEED_PRODUCTS: [(&str, &str, &str, Date); 15] = [
    ("Laptop", "Electronics", "999.99", date(2026, 10, 1)),
    ("Smartphone", "Electronics", "699.99", date(2026, 10, 10)),
    ("Coffee Maker", "Appliances", "89.99", date(2026, 10, 15)),
    ("Desk Chair", "Furniture", "149.99", date(2026, 10, 20)),
    ("Headphones", "Electronics", "199.99", date(2026, 11, 1)),
    ("Blender", "Appliances", "49.99", date(2026, 11, 5)),
    ("Table Lamp", "Furniture", "39.99", date(2026, 11, 10)),
    ("4K TV", "Electronics", "1299.99", date(2026, 12, 1)),
    ("Washing Machine", "Appliances", "499.99", date(2026, 12, 10)),
    ("Sofa", "Furniture", "799.99", date(2026, 12, 15)),
    ("Air Purifier", "Appliances", "119.99", date(2026, 12, 1)),
    ("Gaming Console", "Electronics", "299.99", date(2026, 12, 10)),
    ("Refrigerator", "Appliances", "799.99", date(2026, 12, 15)),
    ("Bookshelf", "Furniture", "89.99", date(2026, 12, 20)),
    ("Smartwatch", "Electronics", "199.99", date(2026, 12, 25)),
];

#[derive(Debug, Args)]
pub(crate) struct SeedArgs {
    /// PostgreSQL connection string
    #[arg(long, env = "DATABASE_URL", hide_env_values = true)]
    database_url: String,
}

/// Replaces the catalog contents with the starter products.
pub(crate) async fn run(args: SeedArgs) -> Result<(), String> {
    let pool = database::connect(&args.database_url)
        .await
        .map_err(|error| format!("failed to connect to database: {error}"))?;

    let mut tx = pool
        .begin()
        .await
        .map_err(|error| format!("failed to start transaction: {error}"))?;

    query("DELETE FROM products")
        .execute(&mut *tx)
        .await
        .map_err(|error| format!("failed to clear products: {error}"))?;

    for (product_name, category, price, availability_date) in SEED_PRODUCTS {
        let price: Decimal = price
            .parse()
            .map_err(|error| format!("bad seed price for {product_name}: {error}"))?;

        query(INSERT_PRODUCT_SQL)
            .bind(Uuid::now_v7())
            .bind(product_name)
            .bind(category)
            .bind(price)
            .bind(jiff_sqlx::Date::from(availability_date))
            .execute(&mut *tx)
            .await
            .map_err(|error| format!("failed to insert {product_name}: {error}"))?;
    }

    tx.commit()
        .await
        .map_err(|error| format!("failed to commit seed: {error}"))?;

    #[expect(clippy::print_stdout, reason = "the CLI reports results on stdout")]
    {
        println!("seeded {} products", SEED_PRODUCTS.len());
    }

    Ok(())
}
