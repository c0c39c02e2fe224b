//! Input backend interface

use robot_core::MouseButton;
use std::io;
use std::process::{Command, Stdio};

/// Platform automation primitives driven by script commands.
///
/// Cursor, click, key and text operations are assumed always available and
/// cannot fail. Only process spawning reports errors.
pub trait InputBackend {
    /// Current cursor position
    fn cursor_position(&mut self) -> (i32, i32);

    /// Move the cursor to an absolute position
    fn move_cursor_to(&mut self, x: i32, y: i32);

    /// Click a mouse button
    fn click(&mut self, button: MouseButton);

    /// Tap a key, holding the given modifiers
    fn tap_key(&mut self, key: &str, mods: &[String]);

    /// Release a key and its modifiers if they are still held
    fn release_key(&mut self, key: &str, mods: &[String]);

    /// Type literal text
    fn inject_text(&mut self, text: &str);

    /// Start a child process without waiting for it. Returns its pid.
    fn spawn_process(&mut self, program: &str, args: &[String]) -> io::Result<u32>;
}

impl<B: InputBackend + ?Sized> InputBackend for &mut B {
    fn cursor_position(&mut self) -> (i32, i32) {
        (**self).cursor_position()
    }

    fn move_cursor_to(&mut self, x: i32, y: i32) {
        (**self).move_cursor_to(x, y)
    }

    fn click(&mut self, button: MouseButton) {
        (**self).click(button)
    }

    fn tap_key(&mut self, key: &str, mods: &[String]) {
        (**self).tap_key(key, mods)
    }

    fn release_key(&mut self, key: &str, mods: &[String]) {
        (**self).release_key(key, mods)
    }

    fn inject_text(&mut self, text: &str) {
        (**self).inject_text(text)
    }

    fn spawn_process(&mut self, program: &str, args: &[String]) -> io::Result<u32> {
        (**self).spawn_process(program, args)
    }
}

impl<B: InputBackend + ?Sized> InputBackend for Box<B> {
    fn cursor_position(&mut self) -> (i32, i32) {
        (**self).cursor_position()
    }

    fn move_cursor_to(&mut self, x: i32, y: i32) {
        (**self).move_cursor_to(x, y)
    }

    fn click(&mut self, button: MouseButton) {
        (**self).click(button)
    }

    fn tap_key(&mut self, key: &str, mods: &[String]) {
        (**self).tap_key(key, mods)
    }

    fn release_key(&mut self, key: &str, mods: &[String]) {
        (**self).release_key(key, mods)
    }

    fn inject_text(&mut self, text: &str) {
        (**self).inject_text(text)
    }

    fn spawn_process(&mut self, program: &str, args: &[String]) -> io::Result<u32> {
        (**self).spawn_process(program, args)
    }
}

/// Start `program` as a detached child with null stdio.
///
/// The child is not waited on; its lifetime is independent of the caller.
pub fn spawn_detached(program: &str, args: &[String]) -> io::Result<u32> {
    let child = Command::new(program)
        .args(args)
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()?;
    Ok(child.id())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spawn_missing_program_fails() {
        let result = spawn_detached("robotscript-no-such-program-xyz", &[]);
        assert_eq!(result.unwrap_err().kind(), io::ErrorKind::NotFound);
    }

    #[cfg(unix)]
    #[test]
    fn test_spawn_does_not_wait() {
        let started = std::time::Instant::now();
        let pid = spawn_detached("sleep", &["2".to_string()]).unwrap();
        assert!(pid > 0);
        assert!(started.elapsed() < std::time::Duration::from_secs(2));
    }
}
