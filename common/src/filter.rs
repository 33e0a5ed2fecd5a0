//! フィルタエンジン
//!
//! 状態を持たない純粋関数のみ。入力が変わるたびに呼び出し側で再計算する。
//! - unique_customers: 顧客IDの重複なし昇順リスト
//! - filter_orders: 顧客・開始・終了の3条件すべてを満たす注文（入力順を保持）

use std::collections::HashSet;

use crate::time::TimeBound;
use crate::types::{CustomerId, Order};

/// 顧客セレクトボックスの「すべて」の値
pub const ALL_CUSTOMERS_VALUE: &str = "all";

/// 顧客フィルタ
///
/// 顧客はセレクトボックスの値（顧客IDの正規化文字列）のまま保持する。
/// 再パースすると `"01"` が `1` になるなど別の顧客を指してしまう。
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum CustomerFilter {
    #[default]
    All,
    Customer(String),
}

impl CustomerFilter {
    /// セレクトボックスの値から作る（`"all"` は全顧客）
    pub fn from_select_value(value: &str) -> Self {
        if value.is_empty() || value == ALL_CUSTOMERS_VALUE {
            CustomerFilter::All
        } else {
            CustomerFilter::Customer(value.to_string())
        }
    }

    /// 顧客IDから作る
    pub fn for_customer(id: &CustomerId) -> Self {
        CustomerFilter::Customer(id.canonical())
    }

    /// セレクトボックスに渡す値
    pub fn select_value(&self) -> String {
        match self {
            CustomerFilter::All => ALL_CUSTOMERS_VALUE.to_string(),
            CustomerFilter::Customer(value) => value.clone(),
        }
    }

    pub fn matches(&self, id: &CustomerId) -> bool {
        match self {
            CustomerFilter::All => true,
            CustomerFilter::Customer(value) => id.canonical() == *value,
        }
    }
}

/// ユーザーが選択したフィルタ条件
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FilterState {
    pub customer: CustomerFilter,
    pub start: TimeBound,
    pub end: TimeBound,
}

impl FilterState {
    /// 入力欄の文字列から作る
    pub fn from_inputs(customer: &str, start: &str, end: &str) -> Self {
        Self {
            customer: CustomerFilter::from_select_value(customer),
            start: TimeBound::from_input(start),
            end: TimeBound::from_input(end),
        }
    }

    /// 既定値（全顧客・期間指定なし）か
    pub fn is_default(&self) -> bool {
        *self == Self::default()
    }

    /// 1件の注文が条件を満たすか
    ///
    /// 日時が欠損・解釈不能な注文は、開始/終了のどちらかが設定されていれば除外、
    /// どちらも未設定なら含める。
    pub fn matches(&self, order: &Order) -> bool {
        if !self.customer.matches(&order.customer_id) {
            return false;
        }
        if !self.start.is_active() && !self.end.is_active() {
            return true;
        }
        let instant = order.instant();
        self.start.admits_after(instant) && self.end.admits_before(instant)
    }
}

/// 絞り込み結果と件数
#[derive(Debug, Clone, PartialEq, Default)]
pub struct FilteredOrders {
    pub orders: Vec<Order>,
}

impl FilteredOrders {
    pub fn count(&self) -> usize {
        self.orders.len()
    }

    /// 「N orders shown」表示
    pub fn summary(&self) -> String {
        format!("{} orders shown", self.count())
    }
}

/// 条件に一致する注文を入力順のまま返す
pub fn filter_orders(orders: &[Order], state: &FilterState) -> FilteredOrders {
    FilteredOrders {
        orders: orders
            .iter()
            .filter(|order| state.matches(order))
            .cloned()
            .collect(),
    }
}

/// 顧客IDの重複を除いて昇順に並べる
///
/// 重複判定は正規化文字列（`1` と `"1"` は同一顧客）。先に現れた表記を残す。
pub fn unique_customers(orders: &[Order]) -> Vec<CustomerId> {
    let mut seen = HashSet::new();
    let mut ids: Vec<CustomerId> = orders
        .iter()
        .filter(|order| seen.insert(order.customer_id.canonical()))
        .map(|order| order.customer_id.clone())
        .collect();
    ids.sort();
    ids
}
