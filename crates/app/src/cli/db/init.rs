use catalog_app::database;
use clap::Args;
use sqlx::query;

const CREATE_PRODUCTS_TABLE_SQL: &str = include_str!("sql/create_products_table.sql");

#[derive(Debug, Args)]
pub(crate) struct InitArgs {
    /// PostgreSQL connection string
    #[arg(long, env = "DATABASE_URL", hide_env_values = true)]
    database_url: String,
}

pub(crate) async fn run(args: InitArgs) -> Result<(), String> {
    let pool = database::connect(&args.database_url)
        .await
        .map_err(|error| format!("failed to connect to database: {error}"))?;

    query(CREATE_PRODUCTS_TABLE_SQL)
        .execute(&pool)
        .await
        .map_err(|error| format!("failed to create products table: {error}"))?;

    #[expect(clippy::print_stdout, reason = "the CLI reports results on stdout")]
    {
        println!("products table ready");
    }

    Ok(())
}
