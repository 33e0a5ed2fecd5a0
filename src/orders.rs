//! 注文JSONの読み込みと絞り込み（CLI用）
//!
//! ダッシュボードと同じ `Dashboard` を使い、読み込み失敗は
//! ログに残して空の注文リストで続行する。

use bubbletea_orders_common::map::format_coordinate;
use bubbletea_orders_common::{parse_orders, Dashboard, Error, Order};
use std::path::Path;

/// 注文JSONファイルを読み込んだダッシュボードを作る
pub fn load_dashboard(path: &Path) -> Dashboard {
    let fetched = std::fs::read_to_string(path)
        .map_err(Error::from)
        .and_then(|content| parse_orders(&content));

    let mut dashboard = Dashboard::new();
    dashboard.load(fetched);
    dashboard
}

/// 絞り込み条件を適用したダッシュボードを作る
pub fn filtered_dashboard(path: &Path, customer: &str, start: &str, end: &str) -> Dashboard {
    let mut dashboard = load_dashboard(path);
    dashboard.select_customer(customer);
    dashboard.set_start_time(start);
    dashboard.set_end_time(end);
    dashboard
}

/// 1注文を表形式の1行に整形
pub fn format_row(order: &Order) -> String {
    let coordinate = |value: Option<f64>| value.map(format_coordinate).unwrap_or_else(|| "-".into());
    format!(
        "{:<10} {:<20} {:>11} {:>11}",
        order.customer_id.to_string(),
        order.timestamp.as_deref().unwrap_or("-"),
        coordinate(order.lat),
        coordinate(order.lon),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use bubbletea_orders_common::{CustomerId, LoadStatus};
    use tempfile::tempdir;

    const SAMPLE: &str = r#"[
        {"customerId": 1, "timestamp": "2024-01-01T10:00", "lat": 52.5, "lon": 13.4},
        {"customerId": 2, "timestamp": "2024-01-02T10:00", "lat": 52.6, "lon": 13.5}
    ]"#;

    #[test]
    fn test_load_dashboard_missing_file_is_empty() {
        let dir = tempdir().unwrap();
        let dashboard = load_dashboard(&dir.path().join("orders.json"));
        assert!(dashboard.orders().is_empty());
        assert_eq!(dashboard.view().status, LoadStatus::NotLoaded);
    }

    #[test]
    fn test_filtered_dashboard() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("orders.json");
        std::fs::write(&path, SAMPLE).unwrap();

        let dashboard = filtered_dashboard(&path, "all", "2024-01-02T00:00", "");
        let view = dashboard.view();
        assert_eq!(view.visible_count(), 1);
        assert_eq!(view.filtered.orders[0].customer_id, CustomerId::Numeric(2));
        assert_eq!(view.customers.len(), 2);
    }

    #[test]
    fn test_format_row() {
        let order = Order {
            customer_id: CustomerId::Numeric(12),
            timestamp: None,
            lat: Some(52.5),
            lon: None,
        };
        let row = format_row(&order);
        assert!(row.starts_with("12 "));
        assert!(row.contains("52.500000"));
        assert!(row.trim_end().ends_with('-'));
    }
}
