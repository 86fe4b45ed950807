use serde::Deserialize;

#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    #[serde(default = "default_backend_base_url")]
    pub backend_base_url: String,
    #[serde(default = "default_redis")]
    pub redis_url: String,
    #[serde(default = "default_storage_dir")]
    pub storage_dir: String,
    #[serde(default = "default_rotation_secs")]
    pub rotation_interval_secs: u64,
    #[serde(default = "default_key_prefix")]
    pub notification_key_prefix: String,
}

fn default_backend_base_url() -> String { "http://localhost:8000/api".into() }
fn default_redis() -> String { "redis://localhost:6379".into() }
fn default_storage_dir() -> String { ".brightpath/storage".into() }
fn default_rotation_secs() -> u64 { 7 }
fn default_key_prefix() -> String { "brightpath_notifications_".into() }

impl AppConfig {
    pub fn load() -> anyhow::Result<Self> {
        let config = config::Config::builder()
            .add_source(config::Environment::with_prefix("BRIGHTPATH").separator("__"))
            .build()?;
        Ok(config.try_deserialize().unwrap_or_else(|_| Self {
            backend_base_url: default_backend_base_url(),
            redis_url: default_redis(),
            storage_dir: default_storage_dir(),
            rotation_interval_secs: default_rotation_secs(),
            notification_key_prefix: default_key_prefix(),
        }))
    }
}
