use serde::{Deserialize, Serialize};
use std::fs;

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct AppConfig {
    pub log_level: String,
    pub log_dir: String,
    pub log_file: String,
    pub use_json: bool,
    pub rotation: String,
    pub gateway: GatewayConfig,
    /// PostgreSQL connection URL for the account store
    pub postgres_url: String,
    /// Connection pool size; bounds concurrent in-flight transfers
    #[serde(default = "default_pool_size")]
    pub postgres_pool_size: u32,
    /// HS256 secret for JWT issuing/verification
    pub jwt_secret: String,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct GatewayConfig {
    pub host: String,
    pub port: u16,
}

fn default_pool_size() -> u32 {
    10
}

impl AppConfig {
    pub fn load(env: &str) -> Self {
        let config_path = format!("config/{}.yaml", env);
        let content = fs::read_to_string(&config_path)
            .unwrap_or_else(|_| panic!("Failed to read config file: {}", config_path));
        serde_yaml::from_str(&content).expect("Failed to parse config yaml")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_config_yaml() {
        let yaml = r#"
log_level: "debug"
log_dir: "./logs"
log_file: "inn-transfer.log"
use_json: true
rotation: "hourly"
gateway:
  host: "127.0.0.1"
  port: 9090
postgres_url: "postgresql://u:p@localhost:5432/transfer"
jwt_secret: "test-secret"
"#;
        let config: AppConfig = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(config.log_level, "debug");
        assert_eq!(config.gateway.port, 9090);
        assert!(config.use_json);
        assert_eq!(config.jwt_secret, "test-secret");
        // Not set in the yaml above; the default applies
        assert_eq!(config.postgres_pool_size, 10);
    }

    #[test]
    fn test_pool_size_override() {
        let yaml = r#"
log_level: "info"
log_dir: "./logs"
log_file: "inn-transfer.log"
use_json: false
rotation: "daily"
gateway:
  host: "0.0.0.0"
  port: 8080
postgres_url: "postgresql://u:p@localhost:5432/transfer"
postgres_pool_size: 32
jwt_secret: "test-secret"
"#;
        let config: AppConfig = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(config.postgres_pool_size, 32);
    }
}
