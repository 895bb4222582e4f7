//! Shared wire model for the `POST /api/marks` endpoint.
//!
//! This crate owns the JSON representation used by both the canvas crate
//! (which builds and submits payloads) and the server (which stores them).
//! Area labels keep their insertion order on the wire, so `Area1` is always
//! serialized before `Area2` regardless of how many shapes are submitted.

#[cfg(test)]
#[path = "lib_test.rs"]
mod lib_test;

use std::fmt;

use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Route of the single submission endpoint.
pub const MARKS_PATH: &str = "/api/marks";

/// Message returned with a successful insert.
pub const SAVED_MESSAGE: &str = "Coordinates saved successfully";

/// Message returned when the insert fails.
pub const SAVE_FAILED_MESSAGE: &str = "Error saving coordinates";

/// Coordinate encoding of one marked area.
///
/// Serialized untagged: the array shape alone tells the kinds apart.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AreaEncoding {
    /// `[[x, y], [x2, y2]]`: top-left and bottom-right corners.
    Rect([[f64; 2]; 2]),
    /// `[[x, y], radius]`: center point, then radius.
    Circle([f64; 2], f64),
}

/// Label-to-encoding mapping that preserves insertion order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Coordinates {
    areas: Vec<(String, AreaEncoding)>,
}

impl Coordinates {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an area. A label that already exists is replaced in place.
    pub fn insert(&mut self, label: impl Into<String>, encoding: AreaEncoding) {
        let label = label.into();
        if let Some(slot) = self.areas.iter_mut().find(|(l, _)| *l == label) {
            slot.1 = encoding;
        } else {
            self.areas.push((label, encoding));
        }
    }

    #[must_use]
    pub fn get(&self, label: &str) -> Option<&AreaEncoding> {
        self.areas.iter().find(|(l, _)| l == label).map(|(_, e)| e)
    }

    /// Iterate areas in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &AreaEncoding)> {
        self.areas.iter().map(|(l, e)| (l.as_str(), e))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.areas.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.areas.is_empty()
    }
}

impl Serialize for Coordinates {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.areas.len()))?;
        for (label, encoding) in &self.areas {
            map.serialize_entry(label, encoding)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for Coordinates {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_map(CoordinatesVisitor)
    }
}

struct CoordinatesVisitor;

impl<'de> Visitor<'de> for CoordinatesVisitor {
    type Value = Coordinates;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a map of area labels to coordinate encodings")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
        let mut coords = Coordinates::new();
        while let Some((label, encoding)) = access.next_entry::<String, AreaEncoding>()? {
            if coords.get(&label).is_some() {
                return Err(serde::de::Error::custom(format!("duplicate area label `{label}`")));
            }
            coords.areas.push((label, encoding));
        }
        Ok(coords)
    }
}

/// Body of `POST /api/marks`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MarksRequest {
    pub coordinates: Coordinates,
}

/// A persisted marks row as returned to the client.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MarkRecord {
    pub id: i64,
    /// Identifier of the annotated image.
    pub name: String,
    /// The submitted coordinates, JSON-serialized.
    pub coordinates: String,
}

/// Success body of `POST /api/marks`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MarksResponse {
    pub message: String,
    pub data: MarkRecord,
}

/// Failure body of `POST /api/marks`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub message: String,
    /// Free-form error detail object.
    pub error: serde_json::Value,
}
