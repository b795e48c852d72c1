use crate::core::AppConfig;
use crate::core::db::async_db;
use crate::identity::create_user;
use anyhow::Result;

pub async fn run(config: &AppConfig, username: &str, password: &str) -> Result<()> {
    let db = async_db(&config.db_path)
        .await
        .expect("Failed to connect to db");
    let user = create_user(&db, username, password).await?;
    println!("Created user {} ({})", user.username, user.id);

    Ok(())
}
