//! Command registry and variants
//!
//! Commands are the building blocks of scripts. Each [`CommandKind`] owns its
//! option schema and its decode step; each [`Command`] owns its execution
//! behavior against an [`InputBackend`].

use crate::error::ExecuteError;
use crate::executor::CoordinatePolicy;
use crate::options::{FieldShape, FieldSpec, OptionDecoder};
use robot_core::{canonicalize, DecodeError, DecodeResult, Mapping, MouseButton};
use robot_input::InputBackend;
use serde::Serialize;
use std::fmt;
use std::thread;
use std::time::Duration;
use tracing::debug;

const MOUSE_SCHEMA: &[FieldSpec] = &[
    FieldSpec::required("x", FieldShape::Scalar),
    FieldSpec::required("y", FieldShape::Scalar),
    FieldSpec::optional("relative", FieldShape::Scalar),
];

const CLICK_SCHEMA: &[FieldSpec] = &[FieldSpec::required("button", FieldShape::Scalar)];

const KEYPRESS_SCHEMA: &[FieldSpec] = &[
    FieldSpec::required("key", FieldShape::Scalar),
    FieldSpec::optional("mods", FieldShape::List),
];

const TYPE_SCHEMA: &[FieldSpec] = &[FieldSpec::required("text", FieldShape::Scalar)];

const SLEEP_SCHEMA: &[FieldSpec] = &[FieldSpec::required("seconds", FieldShape::Scalar)];

const EXEC_SCHEMA: &[FieldSpec] = &[
    FieldSpec::required("program", FieldShape::Scalar),
    FieldSpec::optional("args", FieldShape::ScalarOrList),
];

/// The fixed set of command kinds a script may name
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CommandKind {
    Mouse,
    Click,
    KeyPress,
    Type,
    Sleep,
    Exec,
}

impl CommandKind {
    pub const ALL: [CommandKind; 6] = [
        CommandKind::Mouse,
        CommandKind::Click,
        CommandKind::KeyPress,
        CommandKind::Type,
        CommandKind::Sleep,
        CommandKind::Exec,
    ];

    /// Canonical name used in documents
    pub fn name(&self) -> &'static str {
        match self {
            CommandKind::Mouse => "mouse",
            CommandKind::Click => "click",
            CommandKind::KeyPress => "keypress",
            CommandKind::Type => "type",
            CommandKind::Sleep => "sleep",
            CommandKind::Exec => "exec",
        }
    }

    /// Look up a kind by name, ignoring case and outer whitespace
    pub fn lookup(name: &str) -> Option<Self> {
        let name = canonicalize(name);
        Self::ALL.into_iter().find(|kind| kind.name() == name)
    }

    /// Option schema for this kind
    pub fn schema(&self) -> &'static [FieldSpec] {
        match self {
            CommandKind::Mouse => MOUSE_SCHEMA,
            CommandKind::Click => CLICK_SCHEMA,
            CommandKind::KeyPress => KEYPRESS_SCHEMA,
            CommandKind::Type => TYPE_SCHEMA,
            CommandKind::Sleep => SLEEP_SCHEMA,
            CommandKind::Exec => EXEC_SCHEMA,
        }
    }

    /// Decode raw options into a command of this kind
    pub fn decode(&self, options: &Mapping) -> DecodeResult<Command> {
        let opts = OptionDecoder::new(self.name(), self.schema(), options)?;
        let command = match self {
            CommandKind::Mouse => Command::MouseMove(MouseMove::decode(&opts)?),
            CommandKind::Click => Command::MouseClick(MouseClick::decode(&opts)?),
            CommandKind::KeyPress => Command::KeyPress(KeyPress::decode(&opts)?),
            CommandKind::Type => Command::TypeText(TypeText::decode(&opts)?),
            CommandKind::Sleep => Command::Sleep(Sleep::decode(&opts)?),
            CommandKind::Exec => Command::RunProcess(RunProcess::decode(&opts)?),
        };
        debug!(command = self.name(), "Decoded command");
        Ok(command)
    }
}

impl fmt::Display for CommandKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A decoded, schema-valid script command
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "command")]
pub enum Command {
    #[serde(rename = "mouse")]
    MouseMove(MouseMove),
    #[serde(rename = "click")]
    MouseClick(MouseClick),
    #[serde(rename = "keypress")]
    KeyPress(KeyPress),
    #[serde(rename = "type")]
    TypeText(TypeText),
    #[serde(rename = "sleep")]
    Sleep(Sleep),
    #[serde(rename = "exec")]
    RunProcess(RunProcess),
}

impl Command {
    /// Construct a command from its document name and raw options
    pub fn construct(name: &str, options: &Mapping) -> DecodeResult<Self> {
        let kind = CommandKind::lookup(name)
            .ok_or_else(|| DecodeError::unrecognized_command(canonicalize(name)))?;
        kind.decode(options)
    }

    /// The command's kind
    pub fn kind(&self) -> CommandKind {
        match self {
            Command::MouseMove(_) => CommandKind::Mouse,
            Command::MouseClick(_) => CommandKind::Click,
            Command::KeyPress(_) => CommandKind::KeyPress,
            Command::TypeText(_) => CommandKind::Type,
            Command::Sleep(_) => CommandKind::Sleep,
            Command::RunProcess(_) => CommandKind::Exec,
        }
    }

    /// Canonical document name of the command
    pub fn name(&self) -> &'static str {
        self.kind().name()
    }

    /// Run the command once against the backend.
    ///
    /// Returns a description of what happened. Only a process that fails to
    /// start produces an error, and that error is not fatal to the script.
    pub fn execute<B>(&self, backend: &mut B, policy: CoordinatePolicy) -> Result<String, ExecuteError>
    where
        B: InputBackend + ?Sized,
    {
        match self {
            Command::MouseMove(c) => Ok(c.execute(backend, policy)),
            Command::MouseClick(c) => Ok(c.execute(backend)),
            Command::KeyPress(c) => Ok(c.execute(backend)),
            Command::TypeText(c) => Ok(c.execute(backend)),
            Command::Sleep(c) => Ok(c.execute()),
            Command::RunProcess(c) => c.execute(backend),
        }
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Command::MouseMove(c) => {
                let mode = if c.relative { "by" } else { "to" };
                write!(f, "mouse {} ({}, {})", mode, c.x, c.y)
            }
            Command::MouseClick(c) => write!(f, "click {}", c.button),
            Command::KeyPress(c) => write!(f, "keypress {}", c.chord()),
            Command::TypeText(c) => write!(f, "type {:?}", c.text),
            Command::Sleep(c) => write!(f, "sleep {}s", c.seconds),
            Command::RunProcess(c) => write!(f, "exec {}", c.command_line()),
        }
    }
}

// Mouse commands

/// Moves the mouse cursor
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MouseMove {
    /// Pixels
    pub x: i32,
    pub y: i32,
    /// Offset from the current position instead of an absolute target
    pub relative: bool,
}

impl MouseMove {
    fn decode(opts: &OptionDecoder<'_>) -> DecodeResult<Self> {
        Ok(Self {
            x: opts.required("x", opts.integer("x")?)?,
            y: opts.required("y", opts.integer("y")?)?,
            relative: opts.boolean("relative")?.unwrap_or(false),
        })
    }

    /// Resolve the absolute target given the current cursor position
    pub fn target(&self, current: (i32, i32), policy: CoordinatePolicy) -> (i32, i32) {
        let (x, y) = if self.relative {
            (current.0.saturating_add(self.x), current.1.saturating_add(self.y))
        } else {
            (self.x, self.y)
        };
        policy.apply(x, y)
    }

    fn execute<B: InputBackend + ?Sized>(&self, backend: &mut B, policy: CoordinatePolicy) -> String {
        let current = if self.relative {
            backend.cursor_position()
        } else {
            (0, 0)
        };
        let (x, y) = self.target(current, policy);
        backend.move_cursor_to(x, y);
        format!("Moved mouse to ({}, {})", x, y)
    }
}

/// Clicks a mouse button
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MouseClick {
    pub button: MouseButton,
}

impl MouseClick {
    fn decode(opts: &OptionDecoder<'_>) -> DecodeResult<Self> {
        Ok(Self {
            button: opts.required("button", opts.one_of("button", MouseButton::resolve)?)?,
        })
    }

    fn execute<B: InputBackend + ?Sized>(&self, backend: &mut B) -> String {
        backend.click(self.button);
        format!("Clicked {} mouse button", self.button)
    }
}

// Keyboard commands

/// Taps a key, optionally with modifiers held
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct KeyPress {
    pub key: String,
    pub mods: Vec<String>,
}

impl KeyPress {
    fn decode(opts: &OptionDecoder<'_>) -> DecodeResult<Self> {
        Ok(Self {
            key: opts.required("key", opts.canonical("key")?)?,
            mods: opts.canonical_list("mods")?.unwrap_or_default(),
        })
    }

    /// Modifiers and key joined with `+`
    pub fn chord(&self) -> String {
        self.mods
            .iter()
            .map(String::as_str)
            .chain(std::iter::once(self.key.as_str()))
            .collect::<Vec<_>>()
            .join("+")
    }

    fn execute<B: InputBackend + ?Sized>(&self, backend: &mut B) -> String {
        backend.tap_key(&self.key, &self.mods);
        // Some backends leave the key logically held after a tap.
        backend.release_key(&self.key, &self.mods);
        format!("Pressed key {}", self.chord())
    }
}

/// Types literal text
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TypeText {
    pub text: String,
}

impl TypeText {
    fn decode(opts: &OptionDecoder<'_>) -> DecodeResult<Self> {
        Ok(Self {
            text: opts.required("text", opts.text("text")?)?.to_string(),
        })
    }

    fn execute<B: InputBackend + ?Sized>(&self, backend: &mut B) -> String {
        backend.inject_text(&self.text);
        format!("Typed {:?}", self.text)
    }
}

// Misc commands

/// Does nothing for a whole number of seconds
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Sleep {
    pub seconds: u64,
}

impl Sleep {
    fn decode(opts: &OptionDecoder<'_>) -> DecodeResult<Self> {
        Ok(Self {
            seconds: opts.required("seconds", opts.integer("seconds")?)?,
        })
    }

    /// Duration of the pause
    pub fn duration(&self) -> Duration {
        Duration::from_secs(self.seconds)
    }

    fn execute(&self) -> String {
        thread::sleep(self.duration());
        format!("Slept for {} seconds", self.seconds)
    }
}

/// Starts a child process without waiting for it
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RunProcess {
    pub program: String,
    pub args: Vec<String>,
}

impl RunProcess {
    fn decode(opts: &OptionDecoder<'_>) -> DecodeResult<Self> {
        Ok(Self {
            program: opts.required("program", opts.text("program")?)?.to_string(),
            args: opts.words("args")?.unwrap_or_default(),
        })
    }

    /// Program and arguments joined with spaces
    pub fn command_line(&self) -> String {
        std::iter::once(self.program.as_str())
            .chain(self.args.iter().map(String::as_str))
            .collect::<Vec<_>>()
            .join(" ")
    }

    fn execute<B: InputBackend + ?Sized>(&self, backend: &mut B) -> Result<String, ExecuteError> {
        match backend.spawn_process(&self.program, &self.args) {
            Ok(pid) => Ok(format!("Executed command: {} (pid {})", self.command_line(), pid)),
            Err(source) => Err(ExecuteError::Spawn {
                program: self.command_line(),
                source,
            }),
        }
    }
}
