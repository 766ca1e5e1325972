//! # Reporting Module / 报告模块
//!
//! This module handles the presentation of benchmark results.
//! It prints colorful, formatted summaries to the console with
//! internationalization support, and renders a JSON document for tooling.
//!
//! 此模块处理基准测试结果的展示。
//! 它在控制台打印彩色格式化摘要（支持国际化），并为工具生成 JSON 文档。

pub mod console;
pub mod json;

// Re-export common reporting functions
pub use console::{print_comparisons, print_summary};
pub use json::render_json_report;
