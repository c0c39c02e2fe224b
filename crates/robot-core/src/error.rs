//! Decode error taxonomy
//!
//! Every failure raised while turning a document into commands is a
//! [`DecodeError`]. Messages name the command (or `script` for document-level
//! problems), the offending option, and the observed value.

use crate::node::{Node, NodeKind};
use crate::{COMMANDS_SECTION, SCRIPT_CONTEXT};
use std::num::ParseIntError;
use thiserror::Error;

/// Result type for decode operations
pub type DecodeResult<T> = Result<T, DecodeError>;

/// Errors raised while decoding a document into commands
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum DecodeError {
    /// The document names a command outside the registry
    #[error("unrecognized command '{name}'")]
    UnrecognizedCommand { name: String },

    /// A required option is absent
    #[error("{command}: missing required option '{option}'")]
    MissingOption { command: String, option: String },

    /// An option is not part of the command's schema
    #[error("{command}: unrecognized option '{option}'")]
    UnrecognizedOption { command: String, option: String },

    /// Two option names canonicalize to the same name
    #[error("{command}: option '{option}' given more than once")]
    DuplicateOption { command: String, option: String },

    /// An option's value has the wrong kind
    #[error("{command}: expected {expected} value to '{option}' option (value = {observed})")]
    WrongOptionType {
        command: String,
        expected: NodeKind,
        option: String,
        observed: String,
    },

    /// A list option has an entry of the wrong kind
    #[error("{command}: expected {expected} entries in '{option}' option (value = {observed})")]
    WrongListEntryType {
        command: String,
        expected: NodeKind,
        option: String,
        observed: String,
    },

    /// An enumerated option has a value outside its allowed set
    #[error("{command}: invalid value for option '{option}' (value = {observed})")]
    InvalidOptionValue {
        command: String,
        option: String,
        observed: String,
    },

    /// An integer option could not be parsed
    #[error("{command}: expected integer value to '{option}' option (value = {observed}): {source}")]
    InvalidInteger {
        command: String,
        option: String,
        observed: String,
        #[source]
        source: ParseIntError,
    },

    /// A boolean option is neither `true` nor `false`
    #[error("{command}: expected boolean value to '{option}' option (value = {observed})")]
    InvalidBoolean {
        command: String,
        option: String,
        observed: String,
    },

    /// A required top-level section is absent
    #[error("{section} section not found")]
    MissingSection { section: String },

    /// A command list entry names more than one command
    #[error("script: map has multiple keys in {section}[{index}] (value = {observed})")]
    MultipleKeys {
        section: String,
        index: usize,
        observed: String,
    },

    /// A command list entry names no command
    #[error("script: map is empty in {section}[{index}]")]
    EmptyMap { section: String, index: usize },

    /// A parsed value is neither scalar, list, nor map
    #[error("value at '{path}' is not a scalar, list, or map (value = {observed})")]
    NotClassifiable { path: String, observed: String },
}

/// Coarse grouping of [`DecodeError`] variants
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DecodeErrorKind {
    UnrecognizedCommand,
    MissingOption,
    UnrecognizedOption,
    DuplicateOption,
    WrongOptionType,
    WrongListEntryType,
    InvalidOptionValue,
    Coercion,
    MalformedDocument,
    NotClassifiable,
}

impl DecodeError {
    pub fn unrecognized_command(name: impl Into<String>) -> Self {
        Self::UnrecognizedCommand { name: name.into() }
    }

    pub fn missing_option(command: impl Into<String>, option: impl Into<String>) -> Self {
        Self::MissingOption {
            command: command.into(),
            option: option.into(),
        }
    }

    pub fn unrecognized_option(command: impl Into<String>, option: impl Into<String>) -> Self {
        Self::UnrecognizedOption {
            command: command.into(),
            option: option.into(),
        }
    }

    pub fn duplicate_option(command: impl Into<String>, option: impl Into<String>) -> Self {
        Self::DuplicateOption {
            command: command.into(),
            option: option.into(),
        }
    }

    pub fn wrong_option_type(
        command: impl Into<String>,
        expected: NodeKind,
        option: impl Into<String>,
        observed: &Node,
    ) -> Self {
        Self::WrongOptionType {
            command: command.into(),
            expected,
            option: option.into(),
            observed: observed.to_string(),
        }
    }

    pub fn wrong_list_entry_type(
        command: impl Into<String>,
        expected: NodeKind,
        option: impl Into<String>,
        observed: &Node,
    ) -> Self {
        Self::WrongListEntryType {
            command: command.into(),
            expected,
            option: option.into(),
            observed: observed.to_string(),
        }
    }

    pub fn invalid_option_value(
        command: impl Into<String>,
        option: impl Into<String>,
        observed: impl Into<String>,
    ) -> Self {
        Self::InvalidOptionValue {
            command: command.into(),
            option: option.into(),
            observed: observed.into(),
        }
    }

    pub fn invalid_integer(
        command: impl Into<String>,
        option: impl Into<String>,
        observed: impl Into<String>,
        source: ParseIntError,
    ) -> Self {
        Self::InvalidInteger {
            command: command.into(),
            option: option.into(),
            observed: observed.into(),
            source,
        }
    }

    pub fn invalid_boolean(
        command: impl Into<String>,
        option: impl Into<String>,
        observed: impl Into<String>,
    ) -> Self {
        Self::InvalidBoolean {
            command: command.into(),
            option: option.into(),
            observed: observed.into(),
        }
    }

    pub fn missing_section(section: impl Into<String>) -> Self {
        Self::MissingSection {
            section: section.into(),
        }
    }

    pub fn multiple_keys(index: usize, observed: &Node) -> Self {
        Self::MultipleKeys {
            section: COMMANDS_SECTION.to_string(),
            index,
            observed: observed.to_string(),
        }
    }

    pub fn empty_map(index: usize) -> Self {
        Self::EmptyMap {
            section: COMMANDS_SECTION.to_string(),
            index,
        }
    }

    pub fn not_classifiable(path: impl Into<String>, observed: impl Into<String>) -> Self {
        Self::NotClassifiable {
            path: path.into(),
            observed: observed.into(),
        }
    }

    /// Group this error into its kind.
    ///
    /// Type mismatches raised in the `script` context (the commands section
    /// or one of its entries has the wrong shape) are document problems and
    /// report [`DecodeErrorKind::MalformedDocument`].
    pub fn kind(&self) -> DecodeErrorKind {
        match self {
            Self::UnrecognizedCommand { .. } => DecodeErrorKind::UnrecognizedCommand,
            Self::MissingOption { .. } => DecodeErrorKind::MissingOption,
            Self::UnrecognizedOption { .. } => DecodeErrorKind::UnrecognizedOption,
            Self::DuplicateOption { .. } => DecodeErrorKind::DuplicateOption,
            Self::WrongOptionType { command, .. } | Self::WrongListEntryType { command, .. }
                if command == SCRIPT_CONTEXT =>
            {
                DecodeErrorKind::MalformedDocument
            }
            Self::WrongOptionType { .. } => DecodeErrorKind::WrongOptionType,
            Self::WrongListEntryType { .. } => DecodeErrorKind::WrongListEntryType,
            Self::InvalidOptionValue { .. } => DecodeErrorKind::InvalidOptionValue,
            Self::InvalidInteger { .. } | Self::InvalidBoolean { .. } => DecodeErrorKind::Coercion,
            Self::MissingSection { .. } | Self::MultipleKeys { .. } | Self::EmptyMap { .. } => {
                DecodeErrorKind::MalformedDocument
            }
            Self::NotClassifiable { .. } => DecodeErrorKind::NotClassifiable,
        }
    }

    /// Whether the document itself has the wrong shape
    pub fn is_malformed_document(&self) -> bool {
        self.kind() == DecodeErrorKind::MalformedDocument
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wrong_option_type_message() {
        let err = DecodeError::wrong_option_type("a", NodeKind::List, "c", &Node::from("d"));
        assert_eq!(err.to_string(), "a: expected list value to 'c' option (value = d)");
        assert_eq!(err.kind(), DecodeErrorKind::WrongOptionType);
    }

    #[test]
    fn test_wrong_list_entry_type_message() {
        let err = DecodeError::wrong_list_entry_type("a", NodeKind::Scalar, "c", &Node::list([]));
        assert_eq!(err.to_string(), "a: expected scalar entries in 'c' option (value = [])");
        assert_eq!(err.kind(), DecodeErrorKind::WrongListEntryType);
    }

    #[test]
    fn test_option_messages() {
        assert_eq!(
            DecodeError::unrecognized_option("a", "b").to_string(),
            "a: unrecognized option 'b'"
        );
        assert_eq!(
            DecodeError::missing_option("a", "b").to_string(),
            "a: missing required option 'b'"
        );
        assert_eq!(
            DecodeError::invalid_option_value("a", "b", "c").to_string(),
            "a: invalid value for option 'b' (value = c)"
        );
        assert_eq!(
            DecodeError::unrecognized_command("a").to_string(),
            "unrecognized command 'a'"
        );
    }

    #[test]
    fn test_invalid_integer_keeps_source() {
        let source = "ten".parse::<i32>().unwrap_err();
        let err = DecodeError::invalid_integer("mouse", "x", "ten", source);
        assert!(err
            .to_string()
            .starts_with("mouse: expected integer value to 'x' option (value = ten)"));
        assert!(std::error::Error::source(&err).is_some());
        assert_eq!(err.kind(), DecodeErrorKind::Coercion);
    }

    #[test]
    fn test_script_context_is_malformed_document() {
        let err = DecodeError::wrong_option_type(
            SCRIPT_CONTEXT,
            NodeKind::List,
            COMMANDS_SECTION,
            &Node::from("foo"),
        );
        assert!(err.is_malformed_document());
        assert!(DecodeError::missing_section(COMMANDS_SECTION).is_malformed_document());
        assert!(DecodeError::empty_map(0).is_malformed_document());
        assert!(!DecodeError::missing_option("click", "button").is_malformed_document());
    }

    #[test]
    fn test_multiple_keys_message() {
        let entry = Node::map([("mouse", Node::map::<&str>([])), ("click", Node::map::<&str>([]))]);
        let err = DecodeError::multiple_keys(2, &entry);
        assert_eq!(
            err.to_string(),
            "script: map has multiple keys in commands[2] (value = {mouse: {}, click: {}})"
        );
    }
}
