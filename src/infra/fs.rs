//! # File System Operations Module / 文件系统操作模块
//!
//! This module provides utilities for file system operations,
//! such as resolving the benchmark's working directory and writing config files.
//!
//! 此模块提供文件系统操作的实用功能，
//! 如解析基准测试的工作目录以及写入配置文件。

use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// Checks if a path exists and is a directory.
///
/// # Arguments
/// * `path` - Path to check
///
/// # Returns
/// `true` if the path exists and is a directory, `false` otherwise
pub fn is_directory(path: &Path) -> bool {
    path.exists() && path.is_dir()
}

/// Resolves a directory to its canonical absolute path.
///
/// # Returns
/// The canonical path, or the I/O error if it does not exist or is not a directory
pub fn resolve_dir(path: &Path) -> std::io::Result<PathBuf> {
    let resolved = fs::canonicalize(path)?;
    if !resolved.is_dir() {
        return Err(std::io::Error::new(
            std::io::ErrorKind::NotADirectory,
            format!("{} is not a directory", resolved.display()),
        ));
    }
    Ok(resolved)
}

/// Writes `content` to `path`, creating missing parent directories first.
pub fn write_with_parents(path: &Path, content: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !is_directory(parent) {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create parent directory: {}", parent.display())
            })?;
        }
    }
    fs::write(path, content).with_context(|| format!("Failed to write file: {}", path.display()))
}
