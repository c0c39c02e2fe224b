//! Script document parsing for robotscript
//!
//! This crate is the document parser boundary. It reads YAML and classifies
//! the result into [`robot_core::Node`] trees whose scalars carry the text
//! exactly as written in the document, so `1.50` stays `1.50` and `007`
//! stays `007`.
//!
//! # Example
//!
//! ```ignore
//! use robot_config::load_document;
//!
//! let root = load_document("scripts/login.yaml")?;
//! ```

mod classify;
mod document;
mod error;
mod source_text;

pub use classify::classify;
pub use document::{load_document, parse_document};
pub use error::{ConfigError, ConfigResult};
