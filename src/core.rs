//! # Core Module / 核心模块
//!
//! This module contains the core functionality of Duration Bench,
//! including configuration, data models, report parsing, statistics
//! and the benchmark loop itself.
//!
//! 此模块包含 Duration Bench 的核心功能，
//! 包括配置、数据模型、报告解析、统计以及基准测试循环本身。

pub mod config;
pub mod error;
pub mod execution;
pub mod models;
pub mod report;
pub mod stats;

// Re-exports
pub use config::BenchConfig;
pub use error::{BenchError, ReportError};
pub use execution::run_benchmark;
pub use models::BenchResults;
