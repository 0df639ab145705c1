//! Schema CLI for the users database, e.g. `cargo run -p migration -- up`.
//! Connects through `DATABASE_URL`.

use migration::Migrator;
use sea_orm_migration::cli;

#[tokio::main]
async fn main() {
    cli::run_cli(Migrator).await;
}
