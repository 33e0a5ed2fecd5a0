pub mod date_time_range_picker;
pub mod filter_bar;
pub mod orders_map;
