//! 注文データストア
//!
//! 起動時に一度だけ `orders.json` を読み込む。成功時に一括で置き換え、
//! 失敗時はログに残して以前の状態（初期は空）のまま続行する。

use crate::error::{Error, Result};
use crate::types::Order;

/// 読み込み先の固定パス
pub const ORDERS_RESOURCE_PATH: &str = "/orders.json";

/// 読み込み状態
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoadStatus {
    #[default]
    NotLoaded,
    Loaded,
}

/// 読み込み結果（ログ・UI表示用）
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadOutcome {
    Loaded { count: usize },
    Failed { reason: String },
    AlreadyLoaded,
}

/// 一度だけ書き込まれる注文リスト
#[derive(Debug, Clone, Default)]
pub struct RecordStore {
    orders: Vec<Order>,
    status: LoadStatus,
}

impl RecordStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn orders(&self) -> &[Order] {
        &self.orders
    }

    pub fn status(&self) -> LoadStatus {
        self.status
    }

    pub fn is_loaded(&self) -> bool {
        self.status == LoadStatus::Loaded
    }

    /// 取得結果を反映する
    ///
    /// 失敗はここで握りつぶし、呼び出し元へは伝播しない。
    pub fn apply(&mut self, fetched: Result<Vec<Order>>) -> LoadOutcome {
        if self.is_loaded() {
            tracing::warn!("orders already loaded, ignoring second load");
            return LoadOutcome::AlreadyLoaded;
        }

        match fetched {
            Ok(orders) => {
                let count = orders.len();
                self.orders = orders;
                self.status = LoadStatus::Loaded;
                tracing::info!(count, "orders loaded");
                LoadOutcome::Loaded { count }
            }
            Err(err) => {
                tracing::error!(error = %err, "failed to load orders");
                LoadOutcome::Failed {
                    reason: err.to_string(),
                }
            }
        }
    }

    /// JSON文字列を反映する
    pub fn apply_json(&mut self, json: &str) -> LoadOutcome {
        self.apply(parse_orders(json))
    }
}

/// `orders.json` の中身（注文の配列）をパース
pub fn parse_orders(json: &str) -> Result<Vec<Order>> {
    serde_json::from_str(json.trim()).map_err(Error::from)
}

/// 注文を `orders.json` 形式で書き出す
pub fn orders_to_json(orders: &[Order]) -> Result<String> {
    serde_json::to_string_pretty(orders).map_err(Error::from)
}
