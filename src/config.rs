use crate::error::{OrdersError, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// 既定の注文データ（ダッシュボードの公開ディレクトリ）
pub const DEFAULT_ORDERS_PATH: &str = "web-wasm/public/orders.json";

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub orders_path: PathBuf,
    pub log_level: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            orders_path: PathBuf::from(DEFAULT_ORDERS_PATH),
            log_level: "info".into(),
        }
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    pub fn load_from(config_path: &Path) -> Result<Self> {
        if config_path.exists() {
            let content = std::fs::read_to_string(config_path)?;
            let config: Config = serde_json::from_str(&content)?;
            Ok(config)
        } else {
            Ok(Self::default())
        }
    }

    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path()?)
    }

    pub fn save_to(&self, config_path: &Path) -> Result<()> {
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(config_path, content)?;
        Ok(())
    }

    pub fn config_path() -> Result<PathBuf> {
        let home = dirs::home_dir()
            .ok_or_else(|| OrdersError::Config("ホームディレクトリが見つかりません".into()))?;
        Ok(home.join(".config").join("bubbletea-orders").join("config.json"))
    }

    /// 引数指定があればそれを、無ければ設定の注文データパスを使う
    pub fn resolve_orders_path(&self, arg: Option<PathBuf>) -> PathBuf {
        arg.unwrap_or_else(|| self.orders_path.clone())
    }

    pub fn set_orders_path(&mut self, path: PathBuf) -> Result<()> {
        self.orders_path = path;
        self.save()
    }

    /// 読み込みに失敗した設定は警告して既定値で続行する
    pub fn or_default(loaded: Result<Self>) -> Self {
        loaded.unwrap_or_else(|e| {
            tracing::warn!(error = %e, "設定を読み込めないため既定値を使用します");
            Self::default()
        })
    }
}
