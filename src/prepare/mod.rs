//! 生CSV → `orders.json` 変換
//!
//! 各行から顧客ID・座標（`point` 列）・日時を取り出し、日時順に並べて
//! ダッシュボードが読み込むJSONを作る。

mod point;
mod timestamp;

pub use point::parse_point;
pub use timestamp::{parse_raw_timestamp, to_iso};

use crate::error::{OrdersError, Result};
use bubbletea_orders_common::{orders_to_json, unique_customers, CustomerId, Order};
use chrono::NaiveDateTime;
use std::collections::HashMap;
use std::io::Read;
use std::path::Path;

/// 列名の別名（左: CSV上の名前、右: 正規名）
const COLUMN_ALIASES: &[(&str, &str)] = &[
    ("time", "timestamp"),
    ("timestamp", "timestamp"),
    ("customer_id", "customerId"),
    ("customerId", "customerId"),
    ("point", "point"),
];

/// 変換結果の集計
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PrepareReport {
    pub rows: usize,
    pub unique_customers: usize,
    pub missing_lat: usize,
    pub missing_lon: usize,
    pub duplicate_timestamps: Vec<String>,
}

/// 変換結果
#[derive(Debug, Clone)]
pub struct Prepared {
    pub orders: Vec<Order>,
    pub report: PrepareReport,
}

struct Columns {
    customer: usize,
    timestamp: usize,
    point: usize,
}

impl Columns {
    fn from_headers(headers: &csv::StringRecord) -> Result<Self> {
        let mut found: HashMap<&str, usize> = HashMap::new();
        for (index, header) in headers.iter().enumerate() {
            if let Some((_, canonical)) = COLUMN_ALIASES.iter().find(|(alias, _)| *alias == header) {
                found.entry(*canonical).or_insert(index);
            }
        }

        let column = |name: &str| {
            found
                .get(name)
                .copied()
                .ok_or_else(|| OrdersError::MissingColumn(name.to_string()))
        };

        Ok(Self {
            customer: column("customerId")?,
            timestamp: column("timestamp")?,
            point: column("point")?,
        })
    }
}

/// CSVを読み込んで注文に変換（日時順・同時刻は元の順）
pub fn prepare_from_reader<R: Read>(reader: R) -> Result<Prepared> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);

    let columns = Columns::from_headers(csv_reader.headers()?)?;

    let mut rows: Vec<(NaiveDateTime, Order)> = Vec::new();
    for (index, record) in csv_reader.records().enumerate() {
        let record = record?;
        // ヘッダー行が1行目
        let row = index + 2;

        let raw_ts = record.get(columns.timestamp).unwrap_or("");
        let dt = parse_raw_timestamp(raw_ts).ok_or_else(|| OrdersError::InvalidTimestamp {
            row,
            value: raw_ts.to_string(),
        })?;

        let point = parse_point(record.get(columns.point).unwrap_or(""));
        if point.is_none() {
            tracing::debug!(row, "point column could not be parsed");
        }

        let order = Order {
            customer_id: CustomerId::parse(record.get(columns.customer).unwrap_or("")),
            timestamp: Some(to_iso(&dt)),
            lat: point.map(|(lat, _)| lat),
            lon: point.map(|(_, lon)| lon),
        };
        rows.push((dt, order));
    }

    rows.sort_by_key(|(dt, _)| *dt);
    let orders: Vec<Order> = rows.into_iter().map(|(_, order)| order).collect();
    let report = build_report(&orders);

    Ok(Prepared { orders, report })
}

/// CSVファイルを変換
pub fn prepare_file(path: &Path) -> Result<Prepared> {
    if !path.exists() {
        return Err(OrdersError::FileNotFound(path.display().to_string()));
    }
    let file = std::fs::File::open(path)?;
    prepare_from_reader(std::io::BufReader::new(file))
}

/// 変換結果を `orders.json` として書き出す
pub fn write_orders(path: &Path, orders: &[Order]) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    let json = orders_to_json(orders)?;
    std::fs::write(path, json)?;
    Ok(())
}

fn build_report(orders: &[Order]) -> PrepareReport {
    let mut seen: HashMap<&str, usize> = HashMap::new();
    let mut duplicate_timestamps = Vec::new();
    for ts in orders.iter().filter_map(|o| o.timestamp.as_deref()) {
        let count = seen.entry(ts).or_insert(0);
        *count += 1;
        if *count == 2 {
            duplicate_timestamps.push(ts.to_string());
        }
    }

    PrepareReport {
        rows: orders.len(),
        unique_customers: unique_customers(orders).len(),
        missing_lat: orders.iter().filter(|o| o.lat.is_none()).count(),
        missing_lon: orders.iter().filter(|o| o.lon.is_none()).count(),
        duplicate_timestamps,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CSV: &str = "\
customer_id,point,time
3,\"[52.52, 13.40]\",2024-01-02 09:00:00
1,\"[52.51, 13.33]\",2024-01-01 24:30:00
2,broken,2024-01-01 08:00:00
1,\"(52.50, 13.30)\",2024-01-02 09:00:00
";

    #[test]
    fn test_prepare_sorts_by_time() {
        let prepared = prepare_from_reader(CSV.as_bytes()).unwrap();
        let timestamps: Vec<&str> = prepared
            .orders
            .iter()
            .map(|o| o.timestamp.as_deref().unwrap())
            .collect();
        assert_eq!(
            timestamps,
            vec![
                "2024-01-01T08:00:00",
                "2024-01-02T00:30:00",
                "2024-01-02T09:00:00",
                "2024-01-02T09:00:00",
            ]
        );
        // 同時刻は元の順
        assert_eq!(prepared.orders[2].customer_id, CustomerId::Numeric(3));
        assert_eq!(prepared.orders[3].customer_id, CustomerId::Numeric(1));
    }

    #[test]
    fn test_prepare_report() {
        let prepared = prepare_from_reader(CSV.as_bytes()).unwrap();
        let report = &prepared.report;
        assert_eq!(report.rows, 4);
        assert_eq!(report.unique_customers, 3);
        assert_eq!(report.missing_lat, 1);
        assert_eq!(report.missing_lon, 1);
        assert_eq!(report.duplicate_timestamps, vec!["2024-01-02T09:00:00".to_string()]);
    }

    #[test]
    fn test_prepare_coordinates() {
        let prepared = prepare_from_reader(CSV.as_bytes()).unwrap();
        let first_customer_one = prepared
            .orders
            .iter()
            .find(|o| o.customer_id == CustomerId::Numeric(1))
            .unwrap();
        assert_eq!(first_customer_one.lat, Some(52.51));
        assert_eq!(first_customer_one.lon, Some(13.33));
        assert_eq!(prepared.orders[0].lat, None);
    }

    #[test]
    fn test_prepare_accepts_canonical_headers() {
        let csv = "customerId,point,timestamp\nA7,\"[1.0, 2.0]\",2024-01-01 00:00:00\n";
        let prepared = prepare_from_reader(csv.as_bytes()).unwrap();
        assert_eq!(prepared.orders[0].customer_id, CustomerId::Text("A7".into()));
    }

    #[test]
    fn test_prepare_missing_column() {
        let csv = "customer_id,time\n1,2024-01-01 00:00:00\n";
        let err = prepare_from_reader(csv.as_bytes()).unwrap_err();
        assert!(matches!(err, OrdersError::MissingColumn(ref c) if c == "point"));
    }

    #[test]
    fn test_prepare_invalid_timestamp_names_row() {
        let csv = "customer_id,point,time\n1,\"[1, 2]\",2024-01-01 00:00:00\n2,\"[1, 2]\",soon\n";
        let err = prepare_from_reader(csv.as_bytes()).unwrap_err();
        match err {
            OrdersError::InvalidTimestamp { row, value } => {
                assert_eq!(row, 3);
                assert_eq!(value, "soon");
            }
            other => panic!("unexpected error: {other}"),
        }
    }
}
