//! Scalar source text recovery
//!
//! `serde_yaml::Value` resolves plain scalars into numbers and booleans, which
//! loses how they were written (`1.50` becomes `1.5`, `0x1F` becomes `31`).
//! Once a document has been classified, its shape is known, so a second pass
//! over the same text can ask the deserializer for every scalar as a string.
//! That yields the scalar's text as written, with quoting and escapes resolved.

use robot_core::{Mapping, Node};
use serde::de::{self, DeserializeSeed, Deserializer, MapAccess, SeqAccess, Visitor};
use std::fmt;

/// Re-read `content`, replacing each scalar of `shape` with its source text
pub(crate) fn with_source_text(content: &str, shape: &Node) -> Result<Node, serde_yaml::Error> {
    Shaped(shape).deserialize(serde_yaml::Deserializer::from_str(content))
}

/// Seed that deserializes a value known to have the given shape
struct Shaped<'a>(&'a Node);

impl<'de> DeserializeSeed<'de> for Shaped<'_> {
    type Value = Node;

    fn deserialize<D>(self, deserializer: D) -> Result<Node, D::Error>
    where
        D: Deserializer<'de>,
    {
        match self.0 {
            Node::Scalar(_) => deserializer.deserialize_str(ScalarText),
            Node::List(items) => deserializer.deserialize_seq(ListShape(items)),
            Node::Map(map) => deserializer.deserialize_map(MapShape(map)),
        }
    }
}

struct ScalarText;

impl<'de> Visitor<'de> for ScalarText {
    type Value = Node;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a scalar")
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<Node, E> {
        Ok(Node::Scalar(v.to_string()))
    }

    fn visit_string<E: de::Error>(self, v: String) -> Result<Node, E> {
        Ok(Node::Scalar(v))
    }
}

struct ListShape<'a>(&'a [Node]);

impl<'de> Visitor<'de> for ListShape<'_> {
    type Value = Node;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "a list of {} entries", self.0.len())
    }

    fn visit_seq<A>(self, mut seq: A) -> Result<Node, A::Error>
    where
        A: SeqAccess<'de>,
    {
        let mut items = Vec::with_capacity(self.0.len());
        for shape in self.0 {
            let item = seq
                .next_element_seed(Shaped(shape))?
                .ok_or_else(|| de::Error::invalid_length(items.len(), &self))?;
            items.push(item);
        }
        Ok(Node::List(items))
    }
}

struct MapShape<'a>(&'a Mapping);

impl<'de> Visitor<'de> for MapShape<'_> {
    type Value = Node;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "a map of {} entries", self.0.len())
    }

    fn visit_map<A>(self, mut access: A) -> Result<Node, A::Error>
    where
        A: MapAccess<'de>,
    {
        let mut map = Mapping::with_capacity(self.0.len());
        for shape in self.0.values() {
            let key: String = access
                .next_key()?
                .ok_or_else(|| de::Error::invalid_length(map.len(), &self))?;
            let value = access.next_value_seed(Shaped(shape))?;
            map.insert(key, value);
        }
        Ok(Node::Map(map))
    }
}
