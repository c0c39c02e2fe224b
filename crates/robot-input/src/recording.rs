//! Recording backend and observer
//!
//! Test doubles that remember every call in order, so callers can assert on
//! the exact sequence of backend operations a script produced.

use crate::backend::InputBackend;
use crate::observer::ExecutionObserver;
use robot_core::MouseButton;
use serde::Serialize;
use std::collections::HashSet;
use std::io;

/// A single recorded backend call
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "call", rename_all = "snake_case")]
pub enum BackendCall {
    CursorPosition,
    MoveCursorTo { x: i32, y: i32 },
    Click { button: MouseButton },
    TapKey { key: String, mods: Vec<String> },
    ReleaseKey { key: String, mods: Vec<String> },
    InjectText { text: String },
    SpawnProcess { program: String, args: Vec<String> },
}

/// Backend that records calls and simulates a cursor
#[derive(Debug, Clone, Default)]
pub struct RecordingBackend {
    cursor: (i32, i32),
    calls: Vec<BackendCall>,
    failing_programs: HashSet<String>,
    next_pid: u32,
}

impl RecordingBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start with the cursor at the given position
    pub fn with_cursor(x: i32, y: i32) -> Self {
        Self {
            cursor: (x, y),
            ..Self::default()
        }
    }

    /// Make spawning `program` fail with `NotFound`
    pub fn fail_spawn(mut self, program: impl Into<String>) -> Self {
        self.failing_programs.insert(program.into());
        self
    }

    /// Calls recorded so far, in order
    pub fn calls(&self) -> &[BackendCall] {
        &self.calls
    }

    /// Recorded calls, excluding cursor position queries
    pub fn effects(&self) -> Vec<&BackendCall> {
        self.calls
            .iter()
            .filter(|call| !matches!(call, BackendCall::CursorPosition))
            .collect()
    }

    /// Current simulated cursor position
    pub fn cursor(&self) -> (i32, i32) {
        self.cursor
    }
}

impl InputBackend for RecordingBackend {
    fn cursor_position(&mut self) -> (i32, i32) {
        self.calls.push(BackendCall::CursorPosition);
        self.cursor
    }

    fn move_cursor_to(&mut self, x: i32, y: i32) {
        self.calls.push(BackendCall::MoveCursorTo { x, y });
        self.cursor = (x, y);
    }

    fn click(&mut self, button: MouseButton) {
        self.calls.push(BackendCall::Click { button });
    }

    fn tap_key(&mut self, key: &str, mods: &[String]) {
        self.calls.push(BackendCall::TapKey {
            key: key.to_string(),
            mods: mods.to_vec(),
        });
    }

    fn release_key(&mut self, key: &str, mods: &[String]) {
        self.calls.push(BackendCall::ReleaseKey {
            key: key.to_string(),
            mods: mods.to_vec(),
        });
    }

    fn inject_text(&mut self, text: &str) {
        self.calls.push(BackendCall::InjectText {
            text: text.to_string(),
        });
    }

    fn spawn_process(&mut self, program: &str, args: &[String]) -> io::Result<u32> {
        self.calls.push(BackendCall::SpawnProcess {
            program: program.to_string(),
            args: args.to_vec(),
        });
        if self.failing_programs.contains(program) {
            return Err(io::Error::new(
                io::ErrorKind::NotFound,
                format!("{}: not found", program),
            ));
        }
        self.next_pid += 1;
        Ok(self.next_pid)
    }
}

/// A recorded observer report
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Report {
    Executed { index: usize, description: String },
    Failed { index: usize, message: String },
}

/// Observer that keeps every report
#[derive(Debug, Clone, Default)]
pub struct RecordingObserver {
    pub reports: Vec<Report>,
}

impl RecordingObserver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Descriptions of successful commands, in order
    pub fn descriptions(&self) -> Vec<&str> {
        self.reports
            .iter()
            .filter_map(|report| match report {
                Report::Executed { description, .. } => Some(description.as_str()),
                Report::Failed { .. } => None,
            })
            .collect()
    }

    /// Failure messages, in order
    pub fn failures(&self) -> Vec<(usize, &str)> {
        self.reports
            .iter()
            .filter_map(|report| match report {
                Report::Failed { index, message } => Some((*index, message.as_str())),
                Report::Executed { .. } => None,
            })
            .collect()
    }
}

impl ExecutionObserver for RecordingObserver {
    fn executed(&mut self, index: usize, description: &str) {
        self.reports.push(Report::Executed {
            index,
            description: description.to_string(),
        });
    }

    fn failed(&mut self, index: usize, message: &str) {
        self.reports.push(Report::Failed {
            index,
            message: message.to_string(),
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_records_in_order() {
        let mut backend = RecordingBackend::with_cursor(5, 5);
        assert_eq!(backend.cursor_position(), (5, 5));
        backend.move_cursor_to(10, 20);
        backend.click(MouseButton::Right);
        backend.inject_text("hi\n");

        assert_eq!(backend.cursor(), (10, 20));
        assert_eq!(backend.calls().len(), 4);
        assert_eq!(
            backend.effects(),
            vec![
                &BackendCall::MoveCursorTo { x: 10, y: 20 },
                &BackendCall::Click {
                    button: MouseButton::Right
                },
                &BackendCall::InjectText {
                    text: "hi\n".to_string()
                },
            ]
        );
    }

    #[test]
    fn test_spawn_failure() {
        let mut backend = RecordingBackend::new().fail_spawn("missing");
        assert_eq!(backend.spawn_process("ls", &[]).unwrap(), 1);
        let err = backend.spawn_process("missing", &[]).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::NotFound);
        assert_eq!(backend.spawn_process("ls", &[]).unwrap(), 2);
    }

    #[test]
    fn test_call_serialization() {
        let call = BackendCall::TapKey {
            key: "enter".to_string(),
            mods: vec!["shift".to_string()],
        };
        let json = serde_json::to_value(&call).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"call": "tap_key", "key": "enter", "mods": ["shift"]})
        );
    }

    #[test]
    fn test_observer() {
        let mut observer = RecordingObserver::new();
        observer.executed(0, "Clicked left mouse button");
        observer.failed(1, "boom");
        assert_eq!(observer.descriptions(), vec!["Clicked left mouse button"]);
        assert_eq!(observer.failures(), vec![(1, "boom")]);
    }
}
