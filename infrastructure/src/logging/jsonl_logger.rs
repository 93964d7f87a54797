//! Append-only JSONL sink for debate events.
//!
//! One line per [`DebateEvent`]: the payload object with `type` and
//! `timestamp` added. The file is opened in append mode so records from
//! successive runs accumulate.

use janus_application::ports::debate_logger::{DebateEvent, DebateLogger};
use serde_json::{Map, Value};
use std::fs::{File, OpenOptions};
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing::warn;

/// Debate logger writing JSON lines to a file
pub struct JsonlDebateLogger {
    writer: Mutex<BufWriter<File>>,
    path: PathBuf,
}

impl JsonlDebateLogger {
    /// Open (or create) the log file, creating parent directories as needed.
    pub fn open(path: impl AsRef<Path>) -> io::Result<Self> {
        let path = path.as_ref();
        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            std::fs::create_dir_all(parent)?;
        }
        let file = OpenOptions::new().create(true).append(true).open(path)?;
        Ok(Self {
            writer: Mutex::new(BufWriter::new(file)),
            path: path.to_path_buf(),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn record(event: DebateEvent) -> Value {
        let timestamp = chrono::Utc::now().to_rfc3339_opts(chrono::SecondsFormat::Millis, true);
        let mut map = match event.payload {
            Value::Object(map) => map,
            Value::Null => Map::new(),
            other => {
                let mut map = Map::new();
                map.insert("data".to_string(), other);
                map
            }
        };
        map.insert("type".to_string(), Value::from(event.event_type));
        map.insert("timestamp".to_string(), Value::from(timestamp));
        Value::Object(map)
    }
}

impl DebateLogger for JsonlDebateLogger {
    fn log(&self, event: DebateEvent) {
        let Ok(line) = serde_json::to_string(&Self::record(event)) else {
            return;
        };
        let Ok(mut writer) = self.writer.lock() else {
            return;
        };
        // Flushed per record so a crash loses at most the line in flight.
        if let Err(e) = writeln!(writer, "{}", line).and_then(|_| writer.flush()) {
            warn!("Could not write debate log {}: {}", self.path.display(), e);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn read_lines(path: &Path) -> Vec<Value> {
        std::fs::read_to_string(path)
            .unwrap()
            .lines()
            .map(|l| serde_json::from_str(l).unwrap())
            .collect()
    }

    #[test]
    fn test_writes_one_object_per_event() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("logs").join("debates.jsonl");
        let logger = JsonlDebateLogger::open(&path).unwrap();

        logger.log(DebateEvent::new(
            "debate_submitted",
            json!({ "topic": "AI ethics", "platforms": ["chatgpt", "claude"] }),
        ));
        logger.log(DebateEvent::new("debate_degraded", json!({ "reason": "unreachable" })));

        let lines = read_lines(&path);
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0]["type"], "debate_submitted");
        assert_eq!(lines[0]["topic"], "AI ethics");
        assert!(lines[0]["timestamp"].is_string());
        assert_eq!(lines[1]["reason"], "unreachable");
    }

    #[test]
    fn test_appends_across_instances() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("debates.jsonl");

        JsonlDebateLogger::open(&path)
            .unwrap()
            .log(DebateEvent::new("debate_completed", json!({ "live": 3 })));
        JsonlDebateLogger::open(&path)
            .unwrap()
            .log(DebateEvent::new("debate_failed", json!("boom")));

        let lines = read_lines(&path);
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[1]["type"], "debate_failed");
        assert_eq!(lines[1]["data"], "boom");
    }

    #[test]
    fn test_open_fails_when_parent_is_a_file() {
        let dir = tempfile::tempdir().unwrap();
        let blocker = dir.path().join("blocker");
        std::fs::write(&blocker, "x").unwrap();

        assert!(JsonlDebateLogger::open(blocker.join("debates.jsonl")).is_err());
    }
}
