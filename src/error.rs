use thiserror::Error;

#[derive(Error, Debug)]
pub enum OrdersError {
    #[error("設定エラー: {0}")]
    Config(String),

    #[error("ファイルが見つかりません: {0}")]
    FileNotFound(String),

    #[error("CSVに必要な列がありません: {0}")]
    MissingColumn(String),

    #[error("{row}行目の日時を解釈できません: {value}")]
    InvalidTimestamp { row: usize, value: String },

    #[error("CSV読み込みエラー: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON解析エラー: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("IOエラー: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Common(#[from] bubbletea_orders_common::Error),
}

pub type Result<T> = std::result::Result<T, OrdersError>;
