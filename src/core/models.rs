//! # Data Models Module / 数据模型模块
//!
//! This module defines the data structures produced by a benchmark run:
//! the captured output of each trial, the duration samples extracted from it,
//! and the result sequences that accumulate those samples across trials.
//!
//! 此模块定义了基准测试运行产生的数据结构：
//! 每次试验捕获的输出、从中提取的耗时样本，以及跨试验累积这些样本的结果序列。

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::process::ExitStatus;
use std::time::Duration;

/// One duration sample extracted from a report, with the label it was found under.
/// 从报告中提取的一个耗时样本及其标签。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Measurement {
    /// The test title for JSON reports, or `#<position>` for marker scans.
    /// JSON 报告中为测试标题，标记扫描时为 `#<位置>`。
    pub label: String,
    /// The reported duration in milliseconds.
    /// 报告的耗时（毫秒）。
    pub duration_ms: u64,
}

/// The captured result of a single invocation of the benchmarked command.
/// 被测命令单次调用的捕获结果。
#[derive(Debug, Clone)]
pub struct TrialOutput {
    /// Zero-based ordinal of the trial / 试验序号（从零开始）
    pub index: usize,
    /// Exit status; only non-zero when exit status checking is off.
    /// 退出状态；仅在关闭退出状态检查时可能非零。
    pub status: ExitStatus,
    pub stdout: String,
    pub stderr: String,
    /// Wall-clock time of the child process / 子进程的实际耗时
    pub elapsed: Duration,
}

/// The ordered samples collected for one measurement position across all trials.
/// `samples[i]` always comes from trial `i`.
///
/// 某个测量位置在所有试验中收集到的有序样本。`samples[i]` 总是来自第 `i` 次试验。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResultSequence {
    pub label: String,
    pub samples: Vec<u64>,
}

impl ResultSequence {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            samples: vec![],
        }
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }
}

/// Everything a benchmark run produces.
/// 一次基准测试运行的全部产出。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BenchResults {
    pub started_at: DateTime<Utc>,
    pub finished_at: DateTime<Utc>,
    /// The command line after placeholder substitution and env expansion.
    /// 占位符替换与环境变量展开后的命令行。
    pub command: String,
    pub working_dir: PathBuf,
    pub trials: usize,
    /// One sequence per measurement position, in report order.
    /// 每个测量位置一个序列，按报告顺序排列。
    pub sequences: Vec<ResultSequence>,
}

/// Default label for the measurement at `position` (zero-based).
/// 位置 `position`（从零开始）处测量的默认标签。
pub fn positional_label(position: usize) -> String {
    format!("#{}", position + 1)
}
