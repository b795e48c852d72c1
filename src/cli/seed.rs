use crate::core::AppConfig;
use crate::core::db::async_db;
use crate::seed::seed_demo_data;
use anyhow::Result;

pub async fn run(config: &AppConfig) -> Result<()> {
    let db = async_db(&config.db_path)
        .await
        .expect("Failed to connect to db");
    seed_demo_data(&db).await?;

    Ok(())
}
