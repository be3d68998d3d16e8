use chrono::{DateTime, Utc};
use serde_derive::Deserialize;
use serde_derive::Serialize;
use serde_json::Value;
use static_init::dynamic;

use crate::utils::misc::sys_info::{get_process_info, ProcessInfo, ProcessInfoError};
use crate::utils::misc::utils::current_datetime_rfc9557;

#[dynamic]
/// Statically initialized `ProcessInfo` instance, providing details about the current process.
pub static PROCESSINFO: Result<ProcessInfo, ProcessInfoError> = get_process_info();

/// # Logrecord
///
/// Represents a structured log entry, capturing the message, its severity,
/// and details about the emitting process and host.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Logrecord {
    /// Timestamp (UTC) when the log record was created, if assigned.
    pub ts: Option<DateTime<Utc>>,
    /// The severity level of the log (0 Silly through 6 Fatal).
    pub loglevel: i64,
    /// Details about the message content.
    pub message: Message,
    /// Information about the application generating the log.
    pub app: App,
    /// Information about the host where the log originated.
    pub host: Host,
    /// Flexible JSON value for arbitrary tags or additional metadata.
    pub tags: Value,
    /// RFC 9557 formatted timestamp string.
    pub rfc9557: String,
}

impl Default for Logrecord {
    /// Creates a default `Logrecord` instance with predefined or empty values.
    ///
    /// Initializes `rfc9557` with the current UTC datetime in RFC 9557 format.
    fn default() -> Self {
        let rfc9557: String = current_datetime_rfc9557();

        Self {
            ts: None,
            loglevel: 0,
            message: Message::default(),
            app: App::default(),
            host: Host::default(),
            tags: serde_json::json!([]),
            rfc9557,
        }
    }
}

/// # Message
///
/// Represents the textual content of a log entry, including its language.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Message {
    /// The language of the message (e.g., "en" for English).
    pub lang: String,
    /// The actual text content of the message.
    pub text: String,
}

impl Default for Message {
    /// Creates a default `Message` instance with an empty text and "en" as language.
    fn default() -> Self {
        Self {
            text: "".to_string(),
            lang: "en".to_string(),
        }
    }
}

/// # App
///
/// Contains information about the application that generated the log entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct App {
    /// The process ID (PID) of the application.
    pub pid: i64,
    /// The name of the application.
    pub name: String,
}

impl Default for App {
    /// Creates a default `App` instance, populating `name` and `pid` from global process information.
    fn default() -> Self {
        let name = PROCESSINFO
            .as_ref()
            .map(|info| info.process_basename.clone())
            .unwrap_or_else(|_| "unknown".to_string());

        Self {
            pid: std::process::id() as i64,
            name,
        }
    }
}

/// # Host
///
/// Contains information about the host machine where the log originated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Host {
    /// The hostname of the machine.
    pub name: String,
    /// The IP address of the host.
    pub ip: String,
}

impl Default for Host {
    /// Creates a default `Host` instance from global process information.
    fn default() -> Self {
        match PROCESSINFO.as_ref() {
            Ok(info) => Self {
                name: info.process_host.clone(),
                ip: info.process_host_ip.clone(),
            },
            Err(_) => Self {
                name: "unknown".to_string(),
                ip: "0.0.0.0".to_string(),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_record_carries_process_identity() {
        let record = Logrecord::default();
        assert_eq!(record.loglevel, 0);
        assert_eq!(record.app.pid, std::process::id() as i64);
        assert_eq!(record.tags, serde_json::json!([]));
        assert!(!record.rfc9557.is_empty());
    }
}
