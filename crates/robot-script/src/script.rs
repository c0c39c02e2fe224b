//! Script definition
//!
//! A Script is the ordered list of commands found in a document's `commands`
//! section. Parsing is fail-fast: the first bad entry aborts the whole script.

use crate::command::Command;
use crate::error::{ScriptError, ScriptResult};
use crate::executor::{ExecutionReport, ScriptExecutor};
use robot_core::{
    canonicalize, DecodeError, DecodeResult, Node, NodeKind, COMMANDS_SECTION, SCRIPT_CONTEXT,
};
use robot_input::{ExecutionObserver, InputBackend};
use serde::Serialize;
use std::path::Path;
use std::str::FromStr;
use tracing::debug;

/// A sequence of commands to execute
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Script {
    commands: Vec<Command>,
}

impl Script {
    /// Build a script from a classified document
    pub fn parse(document: &Node) -> DecodeResult<Self> {
        let root = document
            .as_map()
            .ok_or_else(|| DecodeError::missing_section(COMMANDS_SECTION))?;

        let section = root
            .iter()
            .find(|(key, _)| canonicalize(key) == COMMANDS_SECTION)
            .map(|(_, value)| value)
            .ok_or_else(|| DecodeError::missing_section(COMMANDS_SECTION))?;

        let entries = section.as_list().ok_or_else(|| {
            DecodeError::wrong_option_type(SCRIPT_CONTEXT, NodeKind::List, COMMANDS_SECTION, section)
        })?;

        let commands = entries
            .iter()
            .enumerate()
            .map(|(index, entry)| parse_entry(index, entry))
            .collect::<DecodeResult<Vec<_>>>()?;

        debug!(commands = commands.len(), "Parsed script");
        Ok(Self { commands })
    }

    /// Load and parse a script file
    pub fn from_file(path: impl AsRef<Path>) -> ScriptResult<Self> {
        let document = robot_config::load_document(path)?;
        Ok(Self::parse(&document)?)
    }

    /// Commands in execution order
    pub fn commands(&self) -> &[Command] {
        &self.commands
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Command> {
        self.commands.iter()
    }

    /// Execute every command with the default executor settings
    pub fn execute<B, O>(&self, backend: &mut B, observer: &mut O) -> ExecutionReport
    where
        B: InputBackend + ?Sized,
        O: ExecutionObserver + ?Sized,
    {
        ScriptExecutor::default().run(self, backend, observer)
    }
}

impl FromStr for Script {
    type Err = ScriptError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let document = robot_config::parse_document(s)?;
        Ok(Self::parse(&document)?)
    }
}

impl<'a> IntoIterator for &'a Script {
    type Item = &'a Command;
    type IntoIter = std::slice::Iter<'a, Command>;

    fn into_iter(self) -> Self::IntoIter {
        self.commands.iter()
    }
}

/// Decode one `commands` entry: a single-key map from command name to options
fn parse_entry(index: usize, entry: &Node) -> DecodeResult<Command> {
    let map = entry.as_map().ok_or_else(|| {
        DecodeError::wrong_list_entry_type(SCRIPT_CONTEXT, NodeKind::Map, COMMANDS_SECTION, entry)
    })?;

    let mut keys = map.iter();
    let (name, options) = match (keys.next(), keys.next()) {
        (None, _) => return Err(DecodeError::empty_map(index)),
        (Some(only), None) => only,
        (Some(_), Some(_)) => return Err(DecodeError::multiple_keys(index, entry)),
    };

    let options = options.as_map().ok_or_else(|| {
        DecodeError::wrong_option_type(SCRIPT_CONTEXT, NodeKind::Map, name.trim(), options)
    })?;

    debug!(step = index, command = %name, "Parsing command");
    Command::construct(name, options)
}
