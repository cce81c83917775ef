//! inn-transfer gateway entry point

use std::sync::Arc;

use inn_transfer::config::AppConfig;
use inn_transfer::db::Database;
use inn_transfer::{gateway, logging};

fn get_env() -> String {
    let args: Vec<String> = std::env::args().collect();
    for i in 0..args.len() {
        if (args[i] == "--env" || args[i] == "-e") && i + 1 < args.len() {
            return args[i + 1].clone();
        }
    }
    "dev".to_string()
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let env = get_env();
    let config = AppConfig::load(&env);
    let _guard = logging::init_logging(&config);

    tracing::info!(env = %env, "Starting inn-transfer gateway");

    let db = Arc::new(Database::connect(&config.postgres_url, config.postgres_pool_size).await?);
    db.health_check().await?;

    gateway::run_server(&config, db).await
}
