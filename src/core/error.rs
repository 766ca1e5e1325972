//! # Error Types / 错误类型
//!
//! Every way a benchmark run can fail has its own variant, so a caller can
//! tell a broken command apart from a report it could not understand.
//!
//! 基准测试运行的每种失败方式都有独立的变体，
//! 以便调用方区分命令本身的失败与无法理解的报告。

use std::path::PathBuf;
use thiserror::Error;

/// Failure to extract duration samples from one trial's output.
/// 从单次试验输出中提取耗时样本失败。
#[derive(Debug, Error)]
pub enum ReportError {
    /// Fewer samples than required were present.
    #[error("expected {expected} duration samples, found {found}")]
    Malformed { expected: usize, found: usize },

    /// Text where a duration was expected is not a non-negative integer.
    #[error("invalid duration value '{value}'")]
    InvalidDuration { value: String },

    /// The output was required to be a JSON report but is not one.
    #[error("output is not a valid JSON report: {0}")]
    InvalidJson(#[from] serde_json::Error),

    /// A later trial reported a different test at a position than the first trial did.
    /// 后续试验在某个位置报告的测试与第一次试验不同。
    #[error("measurement #{} is '{found}', but the first trial reported '{expected}'", position + 1)]
    LabelMismatch {
        position: usize,
        expected: String,
        found: String,
    },
}

/// Failure of a benchmark run. Trial-level variants carry the zero-based
/// index of the trial that aborted the run.
///
/// 基准测试运行失败。试验级别的变体携带导致运行中止的试验的索引（从零开始）。
#[derive(Debug, Error)]
pub enum BenchError {
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("invalid command '{command}': {reason}")]
    InvalidCommand { command: String, reason: String },

    #[error("working directory '{}' is not accessible", path.display())]
    WorkingDirectory {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("trial {trial}: failed to launch '{program}'")]
    Launch {
        trial: usize,
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error("trial {trial}: process exited with {status}\n{stderr}")]
    ProcessFailed {
        trial: usize,
        status: String,
        stderr: String,
    },

    #[error("trial {trial}: timed out after {secs}s")]
    Timeout { trial: usize, secs: u64 },

    #[error("trial {trial}: malformed report")]
    Report {
        trial: usize,
        #[source]
        source: ReportError,
    },
}

impl BenchError {
    /// The trial that failed, if the error happened while running one.
    /// 失败的试验索引（如果错误发生在试验运行期间）。
    pub fn trial(&self) -> Option<usize> {
        match self {
            BenchError::Launch { trial, .. }
            | BenchError::ProcessFailed { trial, .. }
            | BenchError::Timeout { trial, .. }
            | BenchError::Report { trial, .. } => Some(*trial),
            _ => None,
        }
    }
}
