//! # Benchmark Execution Module / 基准测试执行模块
//!
//! Runs the configured command a fixed number of times, strictly one after
//! another, and collects the duration samples each trial reports. The first
//! failing trial aborts the whole run; no partial results are returned.
//!
//! 按固定次数依次运行配置的命令，并收集每次试验报告的耗时样本。
//! 第一个失败的试验会中止整个运行，不返回部分结果。

use chrono::Utc;
use std::path::PathBuf;
use std::time::{Duration, Instant};

use crate::{
    core::{
        config::BenchConfig,
        error::{BenchError, ReportError},
        models::{positional_label, BenchResults, Measurement, ResultSequence, TrialOutput},
        report::parse_report,
    },
    infra::{
        command::{spawn_and_capture, CommandSpec},
        fs::resolve_dir,
    },
};

/// Progress notifications emitted while a benchmark runs.
/// 基准测试运行期间发出的进度通知。
#[derive(Debug)]
pub enum TrialEvent<'a> {
    /// The resolved command is about to be run `trials` times.
    Prepared { plan: &'a TrialPlan, trials: usize },
    /// Trial `index` (zero-based) is about to start.
    Started { index: usize, total: usize },
    /// Trial finished and its samples were extracted.
    Finished {
        output: &'a TrialOutput,
        measurements: &'a [Measurement],
    },
}

/// A validated, ready-to-run description of one trial.
/// 经过校验、可直接运行的单次试验描述。
#[derive(Debug, Clone)]
pub struct TrialPlan {
    pub command: CommandSpec,
    pub working_dir: PathBuf,
    pub timeout: Option<Duration>,
    pub check_exit_status: bool,
}

impl TrialPlan {
    /// Validates the configuration and resolves the command and directory.
    /// Nothing is launched here.
    pub fn from_config(config: &BenchConfig) -> Result<Self, BenchError> {
        if config.measurements == 0 {
            return Err(BenchError::InvalidConfig(
                "measurements must be at least 1".to_string(),
            ));
        }
        if config.timeout_secs == Some(0) {
            return Err(BenchError::InvalidConfig(
                "timeout_secs must be greater than 0".to_string(),
            ));
        }

        let command_line = config.command_line();
        let command = CommandSpec::parse(&command_line).map_err(|reason| {
            BenchError::InvalidCommand {
                command: command_line.clone(),
                reason,
            }
        })?;

        let working_dir =
            resolve_dir(&config.working_dir).map_err(|source| BenchError::WorkingDirectory {
                path: config.working_dir.clone(),
                source,
            })?;

        Ok(Self {
            command,
            working_dir,
            timeout: config.timeout_secs.map(Duration::from_secs),
            check_exit_status: config.check_exit_status,
        })
    }
}

/// Runs the benchmark described by `config` without progress reporting.
///
/// # Returns
/// `config.measurements` result sequences, each holding exactly
/// `config.trials` samples, or the error of the first trial that failed.
pub async fn run_benchmark(config: &BenchConfig) -> Result<BenchResults, BenchError> {
    run_benchmark_with(config, |_| {}).await
}

/// Runs the benchmark described by `config`, reporting progress to `on_event`.
///
/// Trials run sequentially; trial `i + 1` is not started until trial `i`
/// has exited and its output has been parsed. Sequence labels are taken from
/// the first trial's report.
///
/// 运行 `config` 描述的基准测试，并将进度报告给 `on_event`。
/// 试验按顺序运行；第 `i` 次试验退出并解析完输出后才会开始第 `i + 1` 次。
/// 序列标签取自第一次试验的报告。
pub async fn run_benchmark_with<F>(
    config: &BenchConfig,
    mut on_event: F,
) -> Result<BenchResults, BenchError>
where
    F: FnMut(TrialEvent<'_>),
{
    let plan = TrialPlan::from_config(config)?;
    on_event(TrialEvent::Prepared {
        plan: &plan,
        trials: config.trials,
    });

    let started_at = Utc::now();
    let mut sequences: Vec<ResultSequence> = (0..config.measurements)
        .map(|position| ResultSequence::new(positional_label(position)))
        .collect();

    for index in 0..config.trials {
        on_event(TrialEvent::Started {
            index,
            total: config.trials,
        });

        let output = run_trial(index, &plan).await?;
        let measurements = parse_report(
            &output.stdout,
            config.format,
            &config.marker,
            config.measurements,
        )
        .map_err(|source| BenchError::Report {
            trial: index,
            source,
        })?;

        if index > 0 {
            check_labels(&sequences, &measurements).map_err(|source| BenchError::Report {
                trial: index,
                source,
            })?;
        }

        for (sequence, measurement) in sequences.iter_mut().zip(&measurements) {
            if index == 0 {
                sequence.label = measurement.label.clone();
            }
            sequence.samples.push(measurement.duration_ms);
        }

        on_event(TrialEvent::Finished {
            output: &output,
            measurements: &measurements,
        });
    }

    Ok(BenchResults {
        started_at,
        finished_at: Utc::now(),
        command: plan.command.display_line(),
        working_dir: plan.working_dir,
        trials: config.trials,
        sequences,
    })
}

/// Launches one trial and waits for it to exit.
///
/// # Arguments
/// * `index` - Zero-based trial index, recorded in the output and in errors
/// * `plan` - The resolved command, directory and limits
///
/// # Returns
/// The captured output, or a launch, timeout or process failure.
pub async fn run_trial(index: usize, plan: &TrialPlan) -> Result<TrialOutput, BenchError> {
    let start = Instant::now();
    let execution = spawn_and_capture(plan.command.to_command(&plan.working_dir));

    let captured = match plan.timeout {
        Some(limit) => tokio::time::timeout(limit, execution)
            .await
            .map_err(|_| BenchError::Timeout {
                trial: index,
                secs: limit.as_secs(),
            })?,
        None => execution.await,
    }
    .map_err(|source| BenchError::Launch {
        trial: index,
        program: plan.command.program.clone(),
        source,
    })?;

    if plan.check_exit_status && !captured.status.success() {
        return Err(BenchError::ProcessFailed {
            trial: index,
            status: captured.status.to_string(),
            stderr: tail_lines(&captured.stderr, 50),
        });
    }

    Ok(TrialOutput {
        index,
        status: captured.status,
        stdout: captured.stdout,
        stderr: captured.stderr,
        elapsed: start.elapsed(),
    })
}

/// Every measurement must sit at the same position as in the first trial.
fn check_labels(
    sequences: &[ResultSequence],
    measurements: &[Measurement],
) -> Result<(), ReportError> {
    match sequences
        .iter()
        .zip(measurements)
        .position(|(sequence, measurement)| sequence.label != measurement.label)
    {
        Some(position) => Err(ReportError::LabelMismatch {
            position,
            expected: sequences[position].label.clone(),
            found: measurements[position].label.clone(),
        }),
        None => Ok(()),
    }
}

/// The last `count` lines of `text`, for error messages.
fn tail_lines(text: &str, count: usize) -> String {
    let lines: Vec<&str> = text.trim_end().lines().collect();
    lines[lines.len().saturating_sub(count)..].join("\n")
}
