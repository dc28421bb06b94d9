mod cli;
mod infra;
mod routes;
mod server;

use marketplace_intent::error::AppError;

pub async fn run() -> Result<(), AppError> {
    cli::run().await
}
