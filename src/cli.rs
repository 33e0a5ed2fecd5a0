use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "bubbletea-orders")]
#[command(about = "バブルティー注文データの前処理・フィルタリングツール", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// 詳細ログを出力
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// 生CSVをダッシュボード用の orders.json に変換
    Prepare {
        /// 入力CSVファイル
        #[arg(required = true)]
        input: PathBuf,

        /// 出力JSONファイル（デフォルト: 設定の orders_path）
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// 顧客・期間で注文を絞り込んで表示
    Filter {
        /// 注文JSONファイル（デフォルト: 設定の orders_path）
        input: Option<PathBuf>,

        /// 顧客ID（all で全顧客）
        #[arg(short, long, default_value = "all")]
        customer: String,

        /// 開始日時（例: 2024-01-02T00:00）
        #[arg(short, long, default_value = "")]
        start: String,

        /// 終了日時（例: 2024-01-02T23:59）
        #[arg(short, long, default_value = "")]
        end: String,

        /// JSONで出力
        #[arg(long)]
        json: bool,
    },

    /// 顧客IDの一覧を表示
    Customers {
        /// 注文JSONファイル（デフォルト: 設定の orders_path）
        input: Option<PathBuf>,
    },

    /// 設定を表示/編集
    Config {
        /// 既定の注文JSONパスを設定
        #[arg(long)]
        set_orders_path: Option<PathBuf>,

        /// 設定を表示
        #[arg(long)]
        show: bool,
    },
}
