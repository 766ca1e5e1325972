//! # Duration Bench Library / Duration Bench 库
//!
//! This library provides the core functionality for the Duration Bench tool,
//! a configuration-driven harness that runs a test command repeatedly and
//! collects the per-test durations reported in its output.
//!
//! 此库为 Duration Bench 工具提供核心功能，
//! 这是一个配置驱动的基准测试工具，会重复运行测试命令并收集其输出中报告的每个测试的耗时。
//!
//! ## Modules / 模块
//!
//! - `core` - Configuration, report parsing, statistics and the benchmark loop
//! - `infra` - Infrastructure services like command execution and file system operations
//! - `reporting` - Console and JSON presentation of results
//! - `cli` - Command-line interface and commands
//!
//! - `core` - 配置、报告解析、统计以及基准测试循环
//! - `infra` - 基础设施服务，如命令执行和文件系统操作
//! - `reporting` - 结果的控制台与 JSON 展示
//! - `cli` - 命令行接口和命令

pub mod cli;
pub mod core;
pub mod infra;
pub mod reporting;

// Re-export commonly used items
pub use crate::core::config;
pub use crate::core::execution;
pub use crate::core::models;

/// Maps a requested locale onto one that has translations available.
/// It attempts to match the full locale (e.g., "zh-CN"), then just the
/// language code (e.g., "en"), and finally falls back to "en".
///
/// 将请求的语言区域映射到一个可用的翻译语言。
pub fn resolve_locale(requested: &str) -> &str {
    let available_locales = rust_i18n::available_locales!();

    if available_locales.contains(&requested) {
        requested
    } else {
        requested
            .split('-')
            .next()
            .filter(|lang_code| available_locales.contains(lang_code))
            .unwrap_or("en")
    }
}

// Initialize i18n
rust_i18n::i18n!("locales", fallback = "en");
