//! Read-only fraud analytics over a static, optionally partitioned, transaction dataset.

pub mod config;
pub mod engine;
pub mod formatting;
pub mod models;
pub mod search;
pub mod storage;
pub mod types;
