//! Core types for robotscript
//!
//! This crate provides the fundamental types shared by every robotscript crate:
//! the classified document [`Node`], the [`canonicalize`] normalizer, the
//! [`MouseButton`] enumeration, and the [`DecodeError`] taxonomy.

mod button;
mod error;
mod node;
mod normalize;

pub use button::MouseButton;
pub use error::{DecodeError, DecodeErrorKind, DecodeResult};
pub use node::{Mapping, Node, NodeKind};
pub use normalize::canonicalize;

/// Context name used for errors raised while assembling a script
/// (as opposed to decoding a single command's options).
pub const SCRIPT_CONTEXT: &str = "script";

/// Name of the top-level section holding the command list
pub const COMMANDS_SECTION: &str = "commands";
