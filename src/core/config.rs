//! # Configuration Module / 配置模块
//!
//! Loads the benchmark configuration from a TOML file and merges command-line
//! overrides on top of it. Every field has a default so an empty file, or no
//! file at all, describes the stock Playwright benchmark.
//!
//! 从 TOML 文件加载基准测试配置，并在其上合并命令行覆盖项。
//! 每个字段都有默认值，因此空文件或没有文件时描述的是默认的 Playwright 基准测试。

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

/// Placeholder in the command template that is replaced by [`BenchConfig::spec`].
pub const SPEC_PLACEHOLDER: &str = "{spec}";

/// The default config file name looked up in the current directory.
pub const DEFAULT_CONFIG_FILE: &str = "Bench.toml";

/// How a trial's standard output is turned into duration samples.
/// 如何将一次试验的标准输出转换为耗时样本。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportFormat {
    /// Use `Json` if the output is a Playwright JSON report, otherwise `Marker`.
    /// 如果输出是 Playwright JSON 报告则使用 `Json`，否则使用 `Marker`。
    #[default]
    Auto,
    /// Parse the Playwright JSON reporter document.
    /// 解析 Playwright JSON 报告文档。
    Json,
    /// Scan the raw text for a literal marker followed by a number.
    /// 在原始文本中扫描字面标记及其后的数字。
    Marker,
}

impl FromStr for ReportFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "auto" => Ok(ReportFormat::Auto),
            "json" => Ok(ReportFormat::Json),
            "marker" => Ok(ReportFormat::Marker),
            other => Err(format!(
                "unknown report format '{other}' (expected auto, json or marker)"
            )),
        }
    }
}

impl fmt::Display for ReportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ReportFormat::Auto => "auto",
            ReportFormat::Json => "json",
            ReportFormat::Marker => "marker",
        };
        f.write_str(name)
    }
}

/// Timings recorded earlier (possibly from a different tool) to compare against.
/// 之前记录的耗时（可能来自其他工具），用于对比。
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Baseline {
    /// Display name, e.g. "cypress".
    pub name: String,
    /// One sequence per measurement position, in the same order as the run's sequences.
    /// 每个测量位置一个序列，顺序与本次运行的序列相同。
    pub sequences: Vec<Vec<u64>>,
}

/// The complete benchmark configuration.
/// 完整的基准测试配置。
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct BenchConfig {
    /// The language for console messages (e.g., "en", "zh-CN").
    /// 控制台消息的语言（例如 "en", "zh-CN"）。
    pub language: String,
    /// How many times the command is run.
    /// 命令运行的次数。
    pub trials: usize,
    /// Directory the command is run in. Relative paths are resolved against
    /// the process's current directory.
    /// 命令运行所在的目录。相对路径基于进程当前目录解析。
    pub working_dir: PathBuf,
    /// The test spec substituted for `{spec}` in the command template.
    /// 替换命令模板中 `{spec}` 的测试规格文件。
    pub spec: String,
    /// The command template. `{spec}` is substituted, environment variables are
    /// expanded, and the result is split with shell-word rules.
    /// 命令模板。会替换 `{spec}`、展开环境变量，并按 shell 词法规则拆分。
    pub command: String,
    /// How durations are read from the command's stdout.
    /// 从命令标准输出中读取耗时的方式。
    pub format: ReportFormat,
    /// Literal text that precedes each duration in `marker` mode.
    /// `marker` 模式下每个耗时值之前的字面文本。
    pub marker: String,
    /// Number of duration samples taken from each trial.
    /// 每次试验提取的耗时样本数量。
    pub measurements: usize,
    /// Optional per-trial timeout in seconds.
    /// 可选的单次试验超时时间（秒）。
    pub timeout_secs: Option<u64>,
    /// Treat a non-zero exit status as a failed trial.
    /// 将非零退出状态视为试验失败。
    pub check_exit_status: bool,
    /// Recorded sequences the results are compared against.
    /// 与本次结果进行对比的已记录序列。
    pub baselines: Vec<Baseline>,
}

impl Default for BenchConfig {
    fn default() -> Self {
        Self {
            language: default_language(),
            trials: 10,
            working_dir: PathBuf::from("."),
            spec: "playwright-tests/16-tiers-page.spec.ts".to_string(),
            command: format!("npx playwright test {SPEC_PLACEHOLDER} --reporter=json --workers=1"),
            format: ReportFormat::Auto,
            marker: "\"duration\": ".to_string(),
            measurements: 2,
            timeout_secs: None,
            check_exit_status: true,
            baselines: vec![],
        }
    }
}

fn default_language() -> String {
    "en".to_string()
}

/// Command-line values that take precedence over the config file.
/// 优先于配置文件的命令行取值。
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub language: Option<String>,
    pub trials: Option<usize>,
    pub working_dir: Option<PathBuf>,
    pub spec: Option<String>,
    pub command: Option<String>,
    pub format: Option<ReportFormat>,
    pub measurements: Option<usize>,
    pub timeout_secs: Option<u64>,
}

impl BenchConfig {
    /// Applies every override that is set, leaving the rest untouched.
    pub fn apply(&mut self, overrides: Overrides) {
        if let Some(language) = overrides.language {
            self.language = language;
        }
        if let Some(trials) = overrides.trials {
            self.trials = trials;
        }
        if let Some(working_dir) = overrides.working_dir {
            self.working_dir = working_dir;
        }
        if let Some(spec) = overrides.spec {
            self.spec = spec;
        }
        if let Some(command) = overrides.command {
            self.command = command;
        }
        if let Some(format) = overrides.format {
            self.format = format;
        }
        if let Some(measurements) = overrides.measurements {
            self.measurements = measurements;
        }
        if overrides.timeout_secs.is_some() {
            self.timeout_secs = overrides.timeout_secs;
        }
    }

    /// The command template with `{spec}` substituted, before env expansion.
    /// 替换 `{spec}` 之后、环境变量展开之前的命令模板。
    pub fn command_line(&self) -> String {
        self.command.replace(SPEC_PLACEHOLDER, &self.spec)
    }
}

/// Parses a configuration from TOML text.
pub fn parse_config(content: &str) -> Result<BenchConfig> {
    toml::from_str(content).context("Failed to parse benchmark configuration")
}

/// Reads and parses a configuration file.
///
/// # Arguments
/// * `path` - Path to the TOML file
///
/// # Returns
/// The parsed `BenchConfig`, or an error naming the file on failure.
pub fn load_config(path: &Path) -> Result<BenchConfig> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {}", path.display()))?;
    toml::from_str(&content)
        .with_context(|| format!("Failed to parse config file: {}", path.display()))
}

/// Loads the config at `path` if given, otherwise the default file if it exists,
/// otherwise the built-in defaults.
///
/// 若给定 `path` 则加载该配置；否则若默认文件存在则加载默认文件；否则使用内置默认值。
pub fn resolve_config(path: Option<&Path>) -> Result<(BenchConfig, Option<PathBuf>)> {
    match path {
        Some(path) => Ok((load_config(path)?, Some(path.to_path_buf()))),
        None => {
            let default_path = PathBuf::from(DEFAULT_CONFIG_FILE);
            if default_path.is_file() {
                Ok((load_config(&default_path)?, Some(default_path)))
            } else {
                Ok((BenchConfig::default(), None))
            }
        }
    }
}
