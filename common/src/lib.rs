//! Bubble Tea Orders Common Library
//!
//! CLIとWeb(WASM)で共有される型とフィルタロジック

pub mod types;
pub mod time;
pub mod error;
pub mod filter;
pub mod store;
pub mod dashboard;
pub mod map;

pub use types::{CustomerId, Order};
pub use time::{parse_instant, TimeBound};
pub use error::{Error, Result};
pub use filter::{
    filter_orders, unique_customers, CustomerFilter, FilterState, FilteredOrders,
    ALL_CUSTOMERS_VALUE,
};
pub use store::{orders_to_json, parse_orders, LoadOutcome, LoadStatus, RecordStore, ORDERS_RESOURCE_PATH};
pub use dashboard::{Dashboard, DashboardView, SubscriptionId};
pub use map::{markers_for, MapMarker};
