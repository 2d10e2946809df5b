pub mod catalog;
pub mod features;
pub mod units;
pub mod widget;
