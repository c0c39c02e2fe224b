//! Script Engine
//!
//! This crate turns a classified document into a sequence of strongly-typed
//! commands and runs them against an input backend.
//!
//! # Command Types
//!
//! - `mouse` - move the cursor, absolute or relative
//! - `click` - click a mouse button
//! - `keypress` - tap a key with optional modifiers
//! - `type` - type literal text
//! - `sleep` - pause for whole seconds
//! - `exec` - start a process without waiting for it
//!
//! # Key Types
//!
//! - [`Command`] - A single decoded command
//! - [`Script`] - An ordered list of commands
//! - [`ScriptExecutor`] - Executes scripts

pub mod command;
pub mod error;
pub mod executor;
pub mod options;
pub mod script;

pub use command::{Command, CommandKind, KeyPress, MouseClick, MouseMove, RunProcess, Sleep, TypeText};
pub use error::{ExecuteError, ScriptError, ScriptResult};
pub use executor::{CommandFailure, CoordinatePolicy, ExecutionReport, ExecutorConfig, ScriptExecutor};
pub use options::{FieldShape, FieldSpec, OptionDecoder};
pub use script::Script;
