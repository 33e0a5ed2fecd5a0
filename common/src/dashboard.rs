//! ダッシュボード状態
//!
//! 注文ストアとフィルタ条件を保持し、更新のたびに
//! 絞り込み結果・顧客リストを同期的に再計算して購読者へ通知する。

use crate::error::Result;
use crate::filter::{filter_orders, unique_customers, CustomerFilter, FilterState, FilteredOrders};
use crate::store::{LoadOutcome, LoadStatus, RecordStore};
use crate::time::TimeBound;
use crate::types::{CustomerId, Order};

/// 購読者へ渡すスナップショット
#[derive(Debug, Clone, PartialEq, Default)]
pub struct DashboardView {
    pub filtered: FilteredOrders,
    pub customers: Vec<CustomerId>,
    pub filter: FilterState,
    pub status: LoadStatus,
}

impl DashboardView {
    pub fn visible_count(&self) -> usize {
        self.filtered.count()
    }
}

/// 購読ID（解除用）
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubscriptionId(u64);

type Subscriber = Box<dyn FnMut(&DashboardView)>;

/// 注文ストア + フィルタ状態 + 購読者
#[derive(Default)]
pub struct Dashboard {
    store: RecordStore,
    view: DashboardView,
    subscribers: Vec<(SubscriptionId, Subscriber)>,
    next_id: u64,
}

impl Dashboard {
    pub fn new() -> Self {
        Self::default()
    }

    /// 購読を登録し、現在の状態をすぐに一度通知する
    pub fn subscribe<F>(&mut self, mut subscriber: F) -> SubscriptionId
    where
        F: FnMut(&DashboardView) + 'static,
    {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        subscriber(&self.view);
        self.subscribers.push((id, Box::new(subscriber)));
        id
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.subscribers.len();
        self.subscribers.retain(|(sid, _)| *sid != id);
        self.subscribers.len() != before
    }

    pub fn view(&self) -> &DashboardView {
        &self.view
    }

    pub fn filter(&self) -> &FilterState {
        &self.view.filter
    }

    pub fn orders(&self) -> &[Order] {
        self.store.orders()
    }

    /// 取得結果を反映（失敗してもパニック・エラー伝播しない）
    pub fn load(&mut self, fetched: Result<Vec<Order>>) -> LoadOutcome {
        let outcome = self.store.apply(fetched);
        if let LoadOutcome::Loaded { .. } = outcome {
            self.view.customers = unique_customers(self.store.orders());
            self.view.status = self.store.status();
            self.refresh();
        }
        outcome
    }

    pub fn set_customer_filter(&mut self, customer: CustomerFilter) {
        self.view.filter.customer = customer;
        self.refresh();
    }

    /// セレクトボックスの値（`"all"` または顧客ID）で顧客を切り替える
    pub fn select_customer(&mut self, value: &str) {
        self.set_customer_filter(CustomerFilter::from_select_value(value));
    }

    pub fn set_start_time(&mut self, input: &str) {
        self.view.filter.start = TimeBound::from_input(input);
        self.refresh();
    }

    pub fn set_end_time(&mut self, input: &str) {
        self.view.filter.end = TimeBound::from_input(input);
        self.refresh();
    }

    /// 3条件をまとめて既定値に戻す（通知は1回）
    pub fn reset(&mut self) {
        self.view.filter = FilterState::default();
        self.refresh();
    }

    fn refresh(&mut self) {
        self.view.filtered = filter_orders(self.store.orders(), &self.view.filter);
        for (_, subscriber) in self.subscribers.iter_mut() {
            subscriber(&self.view);
        }
    }
}
