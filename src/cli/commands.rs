//! # Commands Module / 命令模块
//!
//! One submodule per CLI subcommand.
//!
//! 每个 CLI 子命令对应一个子模块。

pub mod init;
pub mod run;
