use bubbletea_orders::{cli, config, error, orders, prepare};
use bubbletea_orders_common::{orders_to_json, LoadStatus};
use clap::Parser;
use cli::{Cli, Commands};
use config::Config;
use error::Result;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let cli = Cli::parse();
    let loaded = Config::load();

    let log_level = match &loaded {
        Ok(config) => config.log_level.clone(),
        Err(_) => Config::default().log_level,
    };
    init_tracing(cli.verbose, &log_level);

    // 設定コマンド以外は壊れた設定でも既定値で続行
    let config = if matches!(cli.command, Commands::Config { .. }) {
        loaded?
    } else {
        Config::or_default(loaded)
    };

    match cli.command {
        Commands::Prepare { input, output } => {
            println!("🧋 bubbletea-orders - 注文データ変換\n");

            // 1. CSV読み込み
            println!("[1/2] CSVを読み込み中...");
            let prepared = prepare::prepare_file(&input)?;
            println!("✔ {}件の注文を読み込み\n", prepared.report.rows);

            // 2. JSON書き出し
            let output = config.resolve_orders_path(output);
            println!("[2/2] JSONを書き出し中...");
            prepare::write_orders(&output, &prepared.orders)?;
            println!("✔ 保存: {}\n", output.display());

            let report = &prepared.report;
            println!("集計:");
            println!("  注文数: {}", report.rows);
            println!("  顧客数: {}", report.unique_customers);
            println!("  緯度なし: {}", report.missing_lat);
            println!("  経度なし: {}", report.missing_lon);
            if report.duplicate_timestamps.is_empty() {
                println!("  重複日時: なし");
            } else {
                println!("  重複日時: {}件", report.duplicate_timestamps.len());
                for ts in &report.duplicate_timestamps {
                    println!("    - {}", ts);
                }
            }

            println!("\n✅ 変換完了");
        }

        Commands::Filter { input, customer, start, end, json } => {
            let path = config.resolve_orders_path(input);
            let dashboard = orders::filtered_dashboard(&path, &customer, &start, &end);
            let view = dashboard.view();

            if view.status == LoadStatus::NotLoaded {
                eprintln!("⚠ 注文データを読み込めませんでした: {}", path.display());
            }

            if json {
                println!("{}", orders_to_json(&view.filtered.orders)?);
            } else {
                for order in &view.filtered.orders {
                    println!("{}", orders::format_row(order));
                }
                println!("\n{}", view.filtered.summary());
            }
        }

        Commands::Customers { input } => {
            let path = config.resolve_orders_path(input);
            let dashboard = orders::load_dashboard(&path);
            let view = dashboard.view();

            for id in &view.customers {
                println!("{}", id);
            }
            println!("\n{}人の顧客", view.customers.len());
        }

        Commands::Config { set_orders_path, show } => {
            let mut config = config;

            if let Some(path) = set_orders_path {
                config.set_orders_path(path)?;
                println!("✔ 注文データのパスを設定しました");
            }

            if show {
                println!("設定:");
                println!("  注文データ: {}", config.orders_path.display());
                println!("  ログレベル: {}", config.log_level);
                println!("  設定ファイル: {}", Config::config_path()?.display());
            }
        }
    }

    Ok(())
}

/// ログ出力の初期化（`-v` > RUST_LOG > 設定の log_level）
fn init_tracing(verbose: bool, log_level: &str) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
