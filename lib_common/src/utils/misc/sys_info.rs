use std::env;
use std::result::Result;

use serde::{Deserialize, Serialize};

use hostname::get;

use local_ip_address::local_ip;

use thiserror::Error;

#[derive(Debug, Error)]
/// # Process Info Error
///
/// Defines custom error types that can occur during the retrieval of process
/// and system information.
pub enum ProcessInfoError {
    /// An I/O error occurred, typically when resolving the executable path or hostname.
    #[error("I/O error occurred: {0}")]
    IoError(#[from] std::io::Error),

    /// The executable path had no usable file name component.
    #[error("Executable path has no file name component")]
    MissingBasename,

    /// An error occurred while accessing environment variables.
    #[error("Environment variable error: {0}")]
    VarError(#[from] env::VarError),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
/// # Process Information
///
/// Holds various pieces of information about the current running process and its environment.
pub struct ProcessInfo {
    /// The full path to the current executable.
    pub process_current_exe: String,
    /// The base name of the executable (filename without extension).
    pub process_basename: String,
    /// The directory where the executable is located.
    pub process_location: String,
    /// The process ID (PID) of the current process.
    pub process_pid: i64,
    /// The hostname of the machine running the process.
    pub process_host: String,
    /// The local IP address of the machine, falling back to loopback when
    /// no routable interface is available.
    pub process_host_ip: String,
}

/// Collects information about the current process and its host.
///
/// Resolves the executable path, derives its base name and location, and
/// queries the hostname and local IP address of the machine.
///
/// # Errors
/// Returns a `ProcessInfoError` if the executable path or hostname
/// cannot be resolved.
pub fn get_process_info() -> Result<ProcessInfo, ProcessInfoError> {
    let current_exe = env::current_exe()?;

    let basename = current_exe
        .file_stem()
        .and_then(|s| s.to_str())
        .map(str::to_string)
        .ok_or(ProcessInfoError::MissingBasename)?;

    let location = current_exe
        .parent()
        .map(|p| p.display().to_string())
        .unwrap_or_else(|| ".".to_string());

    let host = get()?.to_string_lossy().into_owned();

    // Containers and air-gapped hosts may expose only a loopback interface.
    let host_ip = local_ip()
        .map(|ip| ip.to_string())
        .unwrap_or_else(|_| "127.0.0.1".to_string());

    Ok(ProcessInfo {
        process_current_exe: current_exe.display().to_string(),
        process_basename: basename,
        process_location: location,
        process_pid: std::process::id() as i64,
        process_host: host,
        process_host_ip: host_ip,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn process_info_resolves_for_current_process() {
        let info = get_process_info().expect("process info should resolve");
        assert!(!info.process_basename.is_empty());
        assert!(info.process_pid > 0);
        assert_eq!(info.process_pid, std::process::id() as i64);
    }
}
