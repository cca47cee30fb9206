//! Application service layer - config and record export

pub mod app;
pub mod config;
