use anyhow::{Context, Result};
use database::{SqliteTaskRepository, TaskRepository};
use http_api::HttpServer;
use std::path::Path;
use std::sync::Arc;
use tracing::{error, info};

use crate::config::Config;

/// Create the task repository from the configuration
///
/// Startup connection problems are logged and do not abort the process:
/// the repository stays constructed and every subsequent data operation
/// reports the failure individually.
pub async fn create_repository(config: &Config) -> Arc<SqliteTaskRepository> {
    info!("Creating task repository");

    let database_url = config.database_url();
    info!("Using database URL: {}", database_url);

    let repo = SqliteTaskRepository::connect_lazy(&database_url, config.database.max_connections);

    if let Err(e) = repo.migrate().await {
        error!(error = %e, "Database migration failed, data operations will be degraded");
    }

    match repo.health_check().await {
        Ok(()) => info!("Successfully connected to database"),
        Err(e) => error!(error = %e, "Database connection failed"),
    }

    Arc::new(repo)
}

/// Create and configure the HTTP server
pub fn create_server(repository: Arc<SqliteTaskRepository>) -> HttpServer<SqliteTaskRepository> {
    info!("Creating HTTP server");
    HttpServer::new(repository)
}

/// Initialize the complete application
pub async fn initialize_app(config: &Config) -> Result<HttpServer<SqliteTaskRepository>> {
    info!("Initializing application");

    // Ensure the database directory exists before the pool touches the file
    ensure_database_directory(&config.database_url())
        .context("Failed to create database directory")?;

    let repository = create_repository(config).await;
    let server = create_server(repository);

    info!("Application initialized successfully");
    Ok(server)
}

/// Ensure the parent directory of a file-backed database exists
pub fn ensure_database_directory(database_url: &str) -> Result<()> {
    if let Some(db_path) = database_url.strip_prefix("sqlite://") {
        if db_path.starts_with(":memory:") {
            return Ok(());
        }

        let db_path = Path::new(db_path);
        if let Some(parent) = db_path.parent() {
            if !parent.exists() {
                info!("Creating database directory: {}", parent.display());
                std::fs::create_dir_all(parent).context("Failed to create database directory")?;
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{DatabaseConfig, LogFormat, LoggingConfig, ServerConfig};
    use tempfile::TempDir;

    fn test_config(database_url: String) -> Config {
        Config {
            database: DatabaseConfig {
                url: Some(database_url),
                max_connections: 5,
            },
            server: ServerConfig {
                listen_addr: "127.0.0.1".to_string(),
                port: 3000,
            },
            logging: LoggingConfig {
                level: "info".to_string(),
                format: LogFormat::Pretty,
            },
        }
    }

    #[tokio::test]
    async fn test_create_repository_with_file_url() {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let db_path = temp_dir.path().join("test.db");
        let config = test_config(format!("sqlite://{}", db_path.display()));

        let repo = create_repository(&config).await;
        assert!(repo.health_check().await.is_ok());
    }

    #[tokio::test]
    async fn test_create_repository_degrades_on_unreachable_database() {
        // No abort on an unusable connection; the handle exists and each
        // operation fails on its own.
        let config = test_config("sqlite:///no/such/dir/tasks.db".to_string());

        let repo = create_repository(&config).await;
        assert!(repo.health_check().await.is_err());
    }

    #[test]
    fn test_ensure_database_directory() {
        let temp_dir = TempDir::new().unwrap();
        let db_path = temp_dir.path().join("subdir").join("test.db");
        let database_url = format!("sqlite://{}", db_path.display());

        let result = ensure_database_directory(&database_url);
        assert!(result.is_ok());
        assert!(db_path.parent().unwrap().exists());
    }

    #[test]
    fn test_ensure_database_directory_skips_memory_urls() {
        assert!(ensure_database_directory("sqlite://:memory:").is_ok());
        assert!(ensure_database_directory(":memory:").is_ok());
    }

    #[tokio::test]
    async fn test_create_server() {
        let temp_dir = TempDir::new().unwrap();
        let db_path = temp_dir.path().join("server_test.db");
        let config = test_config(format!("sqlite://{}", db_path.display()));

        let repo = create_repository(&config).await;
        let _server = create_server(repo);
    }
}
