use crate::settings::Config;

/// Config for route tests. The pool is handed to `AppState` directly, so
/// `database_url` is never dialed from here.
pub fn test_config() -> Config {
    Config {
        env: "test".to_string(),
        host: "127.0.0.1".to_string(),
        port: 8000,
        prefix: Some("/api".to_string()),
        database_url: String::new(),
        ui_url: None,
    }
}
