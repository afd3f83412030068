pub mod browse;
pub mod calendar;
pub mod catalog;
pub mod config;
pub mod export;
pub mod page;
