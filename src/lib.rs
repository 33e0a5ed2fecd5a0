//! bubbletea-orders CLI library
//!
//! 生CSVの前処理と、`orders.json` のオフライン絞り込み

pub mod cli;
pub mod config;
pub mod error;
pub mod orders;
pub mod prepare;
