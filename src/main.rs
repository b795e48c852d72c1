use anyhow::Result;
use bookd::cli;

#[tokio::main]
async fn main() -> Result<()> {
    cli::run().await
}
