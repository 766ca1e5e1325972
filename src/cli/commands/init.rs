//! # Init Command Module / 初始化命令模块
//!
//! This module implements the `init` command for the Duration Bench CLI,
//! which creates a new benchmark configuration file.
//!
//! 此模块实现了 Duration Bench CLI 的 `init` 命令，
//! 用于创建新的基准测试配置文件。

use anyhow::Result;
use colored::*;
use std::path::PathBuf;

use crate::infra::{fs::write_with_parents, t};

pub const DEFAULT_CONFIG: &str = r#"# Benchmark Configuration / 基准测试配置

# Language for console messages / 控制台消息的语言
language = "en"

# How many times the command is run / 命令运行的次数
trials = 10

# Directory the command is run in / 命令运行所在的目录
working_dir = "."

# Substituted for {spec} in the command / 替换命令中的 {spec}
spec = "playwright-tests/16-tiers-page.spec.ts"

# Command template, split with shell-word rules (no shell, no pipes)
# 命令模板，按 shell 词法规则拆分（不经过 shell，不支持管道）
command = "npx playwright test {spec} --reporter=json --workers=1"

# auto | json | marker
format = "auto"

# Text preceding each duration in marker mode / marker 模式下每个耗时前的文本
marker = '"duration": '

# Duration samples taken from each trial / 每次试验提取的耗时样本数
measurements = 2

# Optional per-trial timeout in seconds / 可选的单次试验超时（秒）
# timeout_secs = 120

# Fail the run when the command exits non-zero / 命令以非零状态退出时使运行失败
check_exit_status = true

# Previously recorded timings to compare against / 用于对比的历史耗时
# [[baselines]]
# name = "cypress"
# sequences = [
#     [2486, 2116, 2156, 2017, 2018, 2106, 2060, 1899, 2108, 2283],
#     [2018, 2120, 2037, 2031, 2135, 2074, 2292, 2225, 2141, 2031],
# ]
"#;

/// Executes the init command with the provided arguments.
///
/// # Arguments
/// * `output` - Path for the new configuration file
/// * `force` - Whether to overwrite an existing file
/// * `locale` - Language for console messages
///
/// # Returns
/// A Result indicating success or failure of the command execution
pub fn execute(output: PathBuf, force: bool, locale: &str) -> Result<()> {
    if output.exists() && !force {
        println!(
            "{}",
            t!("init.file_exists", locale = locale, path = output.display()).red()
        );
        println!("{}", t!("init.use_force", locale = locale).yellow());
        return Ok(());
    }

    write_with_parents(&output, DEFAULT_CONFIG)?;

    println!(
        "{}",
        t!("init.success", locale = locale, path = output.display()).green()
    );
    println!("{}", t!("init.next_steps", locale = locale));

    Ok(())
}
