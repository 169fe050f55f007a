//! This crate contains the HTTP clients and shared data types of the dashboard.

pub mod config;
pub mod currency;
pub mod error;
pub mod keywords;
pub mod rate_map;
pub mod rate_providers;
pub mod tables;

pub use error::ApiError;
