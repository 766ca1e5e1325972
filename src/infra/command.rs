//! # Command Execution Module / 命令执行模块
//!
//! Turns a command template into a program and argument list, and runs child
//! processes while capturing their output.
//!
//! 将命令模板转换为程序和参数列表，并在捕获输出的同时运行子进程。

use std::path::Path;
use std::process::{ExitStatus, Stdio};
use tokio::io::AsyncReadExt;

/// A command line split into its program and arguments.
/// 拆分为程序和参数的命令行。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandSpec {
    pub program: String,
    pub args: Vec<String>,
}

impl CommandSpec {
    /// Expands environment variables and `~`, then splits with shell-word rules.
    /// No shell is involved, so pipes and redirections are passed through as
    /// literal arguments.
    ///
    /// 展开环境变量和 `~`，然后按 shell 词法规则拆分。
    /// 不会经过 shell，因此管道和重定向会作为字面参数传递。
    pub fn parse(command_line: &str) -> Result<Self, String> {
        let expanded = shellexpand::full(command_line)
            .map_err(|e| format!("failed to expand: {e}"))?
            .to_string();

        let mut parts = shlex::split(&expanded)
            .ok_or_else(|| "unbalanced quotes or trailing escape".to_string())?
            .into_iter();

        let program = parts.next().ok_or_else(|| "command is empty".to_string())?;

        Ok(Self {
            program,
            args: parts.collect(),
        })
    }

    /// The command rendered back into a single quoted line for display.
    pub fn display_line(&self) -> String {
        std::iter::once(&self.program)
            .chain(&self.args)
            .map(|part| shlex::try_quote(part).map(|q| q.into_owned()).unwrap_or_else(|_| part.clone()))
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Builds a `tokio` command running in `working_dir`.
    /// On unix the child leads its own process group, so everything it starts
    /// can be killed together.
    pub fn to_command(&self, working_dir: &Path) -> tokio::process::Command {
        let mut cmd = tokio::process::Command::new(&self.program);
        cmd.args(&self.args)
            .current_dir(working_dir)
            .stdin(Stdio::null())
            .kill_on_drop(true);
        #[cfg(unix)]
        cmd.process_group(0);
        cmd
    }
}

/// Kills a child's process group when dropped, unless disarmed.
/// Dropping a capture that is still running (e.g. on timeout) must not leave
/// grandchildren behind.
///
/// 在被丢弃时杀死子进程所在的进程组（除非已解除）。
struct ProcessGroupGuard {
    #[cfg(unix)]
    pgid: Option<nix::unistd::Pid>,
}

#[cfg(unix)]
impl ProcessGroupGuard {
    fn new(child_id: Option<u32>) -> Self {
        Self {
            pgid: child_id
                .and_then(|id| i32::try_from(id).ok())
                .map(nix::unistd::Pid::from_raw),
        }
    }

    fn disarm(&mut self) {
        self.pgid = None;
    }
}

#[cfg(unix)]
impl Drop for ProcessGroupGuard {
    fn drop(&mut self) {
        if let Some(pgid) = self.pgid.take() {
            // ESRCH just means the group is already gone.
            let _ = nix::sys::signal::killpg(pgid, nix::sys::signal::Signal::SIGKILL);
        }
    }
}

#[cfg(not(unix))]
impl ProcessGroupGuard {
    fn new(_child_id: Option<u32>) -> Self {
        Self {}
    }

    fn disarm(&mut self) {}
}

/// Output of a finished child process, with stdout and stderr kept apart.
/// 已结束子进程的输出，stdout 与 stderr 分开保存。
#[derive(Debug, Clone)]
pub struct CapturedOutput {
    pub status: ExitStatus,
    pub stdout: String,
    pub stderr: String,
}

/// Spawns a command and captures its stdout and stderr.
/// Both streams are drained concurrently so a chatty child cannot block on a
/// full pipe while we wait for it to exit. If the returned future is dropped
/// before completion, the child's whole process group is killed.
///
/// # Arguments
/// * `cmd` - The `tokio::process::Command` to execute.
///
/// # Returns
/// The exit status and both output streams (lossily decoded as UTF-8), or the
/// I/O error raised while spawning or waiting.
///
/// 派生一个命令，捕获其 stdout 和 stderr。
/// 两个输出流被并发读取，以免子进程在我们等待其退出时因管道写满而阻塞。
pub async fn spawn_and_capture(
    mut cmd: tokio::process::Command,
) -> std::io::Result<CapturedOutput> {
    let mut child = cmd
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()?;
    let mut group = ProcessGroupGuard::new(child.id());

    let mut stdout = child
        .stdout
        .take()
        .ok_or_else(|| std::io::Error::other("failed to capture stdout"))?;
    let mut stderr = child
        .stderr
        .take()
        .ok_or_else(|| std::io::Error::other("failed to capture stderr"))?;

    let stdout_handle = tokio::spawn(async move {
        let mut buf = Vec::new();
        stdout.read_to_end(&mut buf).await.map(|_| buf)
    });
    let stderr_handle = tokio::spawn(async move {
        let mut buf = Vec::new();
        stderr.read_to_end(&mut buf).await.map(|_| buf)
    });

    let status = child.wait().await?;

    let stdout = stdout_handle.await.map_err(std::io::Error::other)??;
    let stderr = stderr_handle.await.map_err(std::io::Error::other)??;
    group.disarm();

    Ok(CapturedOutput {
        status,
        stdout: String::from_utf8_lossy(&stdout).into_owned(),
        stderr: String::from_utf8_lossy(&stderr).into_owned(),
    })
}
