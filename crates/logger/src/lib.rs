use chrono::Local;
use serde::Serialize;
use serde_json::Value;

/// Severity of a log record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Level {
    Info,
    Warn,
    Error,
}

#[derive(Debug, Serialize)]
struct LogRecord<'a> {
    timestamp: String,
    level: Level,
    message: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    context: Option<&'a Value>,
}

/// Emits one JSON object per line on stderr.
///
/// Logging must never interrupt the data path: a record that fails to
/// serialize is dropped.
pub fn log(level: Level, message: &str, context: Option<&Value>) {
    let record = LogRecord {
        timestamp: Local::now().to_rfc3339(),
        level,
        message,
        context,
    };
    if let Ok(line) = serde_json::to_string(&record) {
        eprintln!("{line}");
    }
}

pub fn info(message: &str, context: Option<&Value>) {
    log(Level::Info, message, context);
}

pub fn warn(message: &str, context: Option<&Value>) {
    log(Level::Warn, message, context);
}

pub fn error(message: &str, context: Option<&Value>) {
    log(Level::Error, message, context);
}
