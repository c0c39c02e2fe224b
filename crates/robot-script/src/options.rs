//! Option decoding
//!
//! Each command kind declares a schema: the options it accepts, which are
//! required, and the shape each value must have. [`OptionDecoder::new`]
//! validates a raw option mapping against the schema as a whole; the typed
//! accessors then coerce individual values.
//!
//! Validation order is fixed: unknown or duplicate option names first, then
//! missing required options, then value shapes in schema order, then
//! coercion as the command reads its fields.

use indexmap::IndexMap;
use robot_core::{canonicalize, DecodeError, DecodeResult, Mapping, Node, NodeKind};
use std::num::ParseIntError;
use std::str::FromStr;
use tracing::trace;

/// Expected shape of an option value
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldShape {
    /// A single scalar
    Scalar,
    /// A list whose entries are all scalars
    List,
    /// Either of the above
    ScalarOrList,
}

/// Schema entry for one option
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSpec {
    pub name: &'static str,
    pub required: bool,
    pub shape: FieldShape,
}

impl FieldSpec {
    pub const fn required(name: &'static str, shape: FieldShape) -> Self {
        Self {
            name,
            required: true,
            shape,
        }
    }

    pub const fn optional(name: &'static str, shape: FieldShape) -> Self {
        Self {
            name,
            required: false,
            shape,
        }
    }
}

/// Validated options for one command, with typed accessors
#[derive(Debug)]
pub struct OptionDecoder<'a> {
    command: &'static str,
    values: IndexMap<&'static str, &'a Node>,
}

impl<'a> OptionDecoder<'a> {
    /// Validate `options` against `schema` for the named command
    pub fn new(
        command: &'static str,
        schema: &'static [FieldSpec],
        options: &'a Mapping,
    ) -> DecodeResult<Self> {
        let mut values = IndexMap::with_capacity(options.len());

        for (raw_name, value) in options {
            let name = canonicalize(raw_name);
            let spec = schema
                .iter()
                .find(|spec| spec.name == name)
                .ok_or_else(|| DecodeError::unrecognized_option(command, name.as_str()))?;
            trace!(command, option = spec.name, "decoding option");
            if values.insert(spec.name, value).is_some() {
                return Err(DecodeError::duplicate_option(command, spec.name));
            }
        }

        for spec in schema.iter().filter(|spec| spec.required) {
            if !values.contains_key(spec.name) {
                return Err(DecodeError::missing_option(command, spec.name));
            }
        }

        for spec in schema {
            if let Some(value) = values.get(spec.name) {
                check_shape(command, spec, value)?;
            }
        }

        Ok(Self { command, values })
    }

    /// Name of the command being decoded
    pub fn command(&self) -> &'static str {
        self.command
    }

    /// Whether the option was given
    pub fn contains(&self, name: &'static str) -> bool {
        self.values.contains_key(name)
    }

    /// Raw scalar value, preserved byte-for-byte
    pub fn text(&self, name: &'static str) -> DecodeResult<Option<&'a str>> {
        match self.values.get(name).copied() {
            None => Ok(None),
            Some(node) => node.as_scalar().map(Some).ok_or_else(|| {
                DecodeError::wrong_option_type(self.command, NodeKind::Scalar, name, node)
            }),
        }
    }

    /// Canonicalized scalar value
    pub fn canonical(&self, name: &'static str) -> DecodeResult<Option<String>> {
        Ok(self.text(name)?.map(canonicalize))
    }

    /// Base-10 integer value
    pub fn integer<T>(&self, name: &'static str) -> DecodeResult<Option<T>>
    where
        T: FromStr<Err = ParseIntError>,
    {
        let Some(raw) = self.text(name)? else {
            return Ok(None);
        };
        canonicalize(raw)
            .parse()
            .map(Some)
            .map_err(|e| DecodeError::invalid_integer(self.command, name, raw, e))
    }

    /// Boolean value, `true` or `false` in any case
    pub fn boolean(&self, name: &'static str) -> DecodeResult<Option<bool>> {
        let Some(raw) = self.text(name)? else {
            return Ok(None);
        };
        match canonicalize(raw).as_str() {
            "true" => Ok(Some(true)),
            "false" => Ok(Some(false)),
            _ => Err(DecodeError::invalid_boolean(self.command, name, raw)),
        }
    }

    /// Enumerated value, resolved from its canonical form
    pub fn one_of<T>(
        &self,
        name: &'static str,
        resolve: impl FnOnce(&str) -> Option<T>,
    ) -> DecodeResult<Option<T>> {
        let Some(raw) = self.text(name)? else {
            return Ok(None);
        };
        resolve(&canonicalize(raw))
            .map(Some)
            .ok_or_else(|| DecodeError::invalid_option_value(self.command, name, raw))
    }

    /// List of canonicalized scalar entries
    pub fn canonical_list(&self, name: &'static str) -> DecodeResult<Option<Vec<String>>> {
        match self.values.get(name).copied() {
            None => Ok(None),
            Some(node) => {
                let items = self.list_entries(name, node)?;
                Ok(Some(items.into_iter().map(canonicalize).collect()))
            }
        }
    }

    /// Words from a scalar split on whitespace, or list entries kept verbatim
    pub fn words(&self, name: &'static str) -> DecodeResult<Option<Vec<String>>> {
        match self.values.get(name).copied() {
            None => Ok(None),
            Some(Node::Scalar(s)) => Ok(Some(s.split_whitespace().map(str::to_string).collect())),
            Some(node) => {
                let items = self.list_entries(name, node)?;
                Ok(Some(items.into_iter().map(str::to_string).collect()))
            }
        }
    }

    /// Fetch a value that the schema marks as required
    pub fn required<T>(&self, name: &'static str, value: Option<T>) -> DecodeResult<T> {
        value.ok_or_else(|| DecodeError::missing_option(self.command, name))
    }

    fn list_entries(&self, name: &'static str, node: &'a Node) -> DecodeResult<Vec<&'a str>> {
        let items = node.as_list().ok_or_else(|| {
            DecodeError::wrong_option_type(self.command, NodeKind::List, name, node)
        })?;
        items
            .iter()
            .map(|item| {
                item.as_scalar().ok_or_else(|| {
                    DecodeError::wrong_list_entry_type(self.command, NodeKind::Scalar, name, node)
                })
            })
            .collect()
    }
}

fn check_shape(command: &'static str, spec: &FieldSpec, value: &Node) -> DecodeResult<()> {
    match (spec.shape, value) {
        (FieldShape::Scalar, Node::Scalar(_)) => Ok(()),
        (FieldShape::Scalar, _) => Err(DecodeError::wrong_option_type(
            command,
            NodeKind::Scalar,
            spec.name,
            value,
        )),
        (FieldShape::List | FieldShape::ScalarOrList, Node::List(items)) => {
            if items.iter().all(|item| item.kind() == NodeKind::Scalar) {
                Ok(())
            } else {
                Err(DecodeError::wrong_list_entry_type(
                    command,
                    NodeKind::Scalar,
                    spec.name,
                    value,
                ))
            }
        }
        (FieldShape::ScalarOrList, Node::Scalar(_)) => Ok(()),
        (FieldShape::List | FieldShape::ScalarOrList, _) => Err(DecodeError::wrong_option_type(
            command,
            NodeKind::List,
            spec.name,
            value,
        )),
    }
}
