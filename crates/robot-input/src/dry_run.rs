//! Dry-run backend
//!
//! Logs every input operation instead of performing it and keeps a virtual
//! cursor so relative moves resolve consistently. Processes are started for
//! real.

use crate::backend::{spawn_detached, InputBackend};
use robot_core::MouseButton;
use std::io;
use tracing::debug;

/// Backend that logs input operations and really spawns processes
#[derive(Debug, Clone, Default)]
pub struct DryRunBackend {
    cursor: (i32, i32),
}

impl DryRunBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start with the virtual cursor at the given position
    pub fn with_cursor(x: i32, y: i32) -> Self {
        Self { cursor: (x, y) }
    }
}

impl InputBackend for DryRunBackend {
    fn cursor_position(&mut self) -> (i32, i32) {
        self.cursor
    }

    fn move_cursor_to(&mut self, x: i32, y: i32) {
        debug!(x, y, "dry-run: move cursor");
        self.cursor = (x, y);
    }

    fn click(&mut self, button: MouseButton) {
        debug!(%button, "dry-run: click");
    }

    fn tap_key(&mut self, key: &str, mods: &[String]) {
        debug!(key, ?mods, "dry-run: tap key");
    }

    fn release_key(&mut self, key: &str, mods: &[String]) {
        debug!(key, ?mods, "dry-run: release key");
    }

    fn inject_text(&mut self, text: &str) {
        debug!(len = text.len(), "dry-run: inject text");
    }

    fn spawn_process(&mut self, program: &str, args: &[String]) -> io::Result<u32> {
        let pid = spawn_detached(program, args)?;
        debug!(program, pid, "spawned process");
        Ok(pid)
    }
}
