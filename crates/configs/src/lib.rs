use anyhow::Result;
use serde::Deserialize;
use anyhow::anyhow;

pub const DEFAULT_LIBRARY_PATH: &str = "data/library.json";
pub const DEFAULT_USER_DATA_PATH: &str = "userdata/user_performance.json";

#[derive(Debug, Clone, Deserialize, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub storage: StorageConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    #[serde(default)]
    pub worker_threads: Option<usize>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self { host: "127.0.0.1".into(), port: 5000, worker_threads: Some(4) }
    }
}

#[derive(Debug, Clone, Deserialize, Default)]
pub struct StorageConfig {
    #[serde(default)]
    pub library_path: String,
    #[serde(default)]
    pub user_data_path: String,
}

pub fn load_default() -> Result<AppConfig> {
    let path = std::env::var("CONFIG_PATH").unwrap_or_else(|_| "config.toml".to_string());
    load_from_file(&path)
}

pub fn load_from_file(path: &str) -> Result<AppConfig> {
    let content = std::fs::read_to_string(path)?;
    let cfg: AppConfig = toml::from_str(&content)?;
    Ok(cfg)
}

impl AppConfig {
    pub fn load_and_validate() -> Result<Self> {
        let mut cfg = load_default()?;
        cfg.normalize_and_validate()?;
        Ok(cfg)
    }

    /// Build a configuration from environment variables and built-in defaults,
    /// for deployments that ship no config.toml.
    pub fn from_env() -> Self {
        let mut cfg = AppConfig::default();
        if let Ok(host) = std::env::var("SERVER_HOST") {
            cfg.server.host = host;
        }
        if let Some(port) = std::env::var("SERVER_PORT").ok().and_then(|p| p.parse::<u16>().ok()) {
            cfg.server.port = port;
        }
        cfg.storage.normalize_from_env();
        cfg
    }

    pub fn normalize_and_validate(&mut self) -> Result<()> {
        self.server.normalize()?;
        // Storage paths may come from env when the TOML leaves them out
        self.storage.normalize_from_env();
        self.storage.validate()?;
        Ok(())
    }
}

impl ServerConfig {
    fn normalize(&mut self) -> Result<()> {
        if self.host.trim().is_empty() {
            self.host = "127.0.0.1".to_string();
        }
        if self.port == 0 {
            return Err(anyhow!("server.port must be in 1..=65535"));
        }
        if let Some(w) = self.worker_threads {
            if w == 0 { self.worker_threads = Some(4); }
        } else {
            self.worker_threads = Some(4);
        }
        Ok(())
    }
}

impl StorageConfig {
    /// Fill paths left empty in the TOML from `LIBRARY_PATH` / `USER_DATA_PATH`
    /// env vars, then from the built-in install-relative defaults.
    pub fn normalize_from_env(&mut self) {
        if self.library_path.trim().is_empty() {
            self.library_path = std::env::var("LIBRARY_PATH")
                .unwrap_or_else(|_| DEFAULT_LIBRARY_PATH.to_string());
        }
        if self.user_data_path.trim().is_empty() {
            self.user_data_path = std::env::var("USER_DATA_PATH")
                .unwrap_or_else(|_| DEFAULT_USER_DATA_PATH.to_string());
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.library_path.trim().is_empty() {
            return Err(anyhow!("storage.library_path is empty"));
        }
        if self.user_data_path.trim().is_empty() {
            return Err(anyhow!("storage.user_data_path is empty"));
        }
        Ok(())
    }
}
