use std::env;

#[derive(Clone, Debug)]
pub struct AppConfig {
    pub storage_path: String,
    pub db_path: String,
    pub session_ttl_hours: i64,
}

impl Default for AppConfig {
    fn default() -> Self {
        let storage_path = env::var("BOOKD_STORAGE_PATH").unwrap_or("./".to_string());
        let db_path = format!("{}/db", storage_path);
        // Sessions last 90 days unless configured otherwise
        let session_ttl_hours = env::var("BOOKD_SESSION_TTL_HOURS")
            .ok()
            .and_then(|hours| hours.parse().ok())
            .unwrap_or(2160);

        Self {
            storage_path,
            db_path,
            session_ttl_hours,
        }
    }
}
