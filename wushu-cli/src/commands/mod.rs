pub mod add;
pub mod browse;
pub mod config;
pub mod day;
pub mod month;
pub mod remove;
