// src/models/data_model.rs
// the JSON-based layout data model
//
// Everything is defaulted: a record with missing fields becomes zeros and
// empty strings rather than being rejected.

use serde::{Deserialize, Deserializer};
use std::fs;
use std::path::Path;

use crate::error::{FilError, Result};

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Layout {
    #[serde(deserialize_with = "null_as_default")]
    pub frame: Frame,
    #[serde(deserialize_with = "null_as_default")]
    pub segments: Vec<SegmentRecord>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Frame {
    #[serde(deserialize_with = "null_as_default")]
    pub cols: u32,
    #[serde(deserialize_with = "null_as_default")]
    pub rows: u32,
}

/// One segment as written in the layout file, in grid units.
#[derive(Debug, Default, Clone, Deserialize)]
#[serde(default)]
pub struct SegmentRecord {
    #[serde(deserialize_with = "null_as_default")]
    pub id: String,
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub x: f32,
    #[serde(deserialize_with = "null_as_default")]
    pub y: f32,
    #[serde(deserialize_with = "null_as_default")]
    pub w: f32,
    #[serde(deserialize_with = "null_as_default")]
    pub h: f32,
    #[serde(deserialize_with = "null_as_default")]
    pub color: String,
}

// An explicit null reads the same as a missing field.
fn null_as_default<'de, D, T>(deserializer: D) -> std::result::Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

impl Layout {
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| FilError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&content, path)
    }

    /// `path` is only used for error reporting.
    pub fn parse(content: &str, path: &Path) -> Result<Self> {
        if content.trim().is_empty() {
            return Err(FilError::EmptyLayout(path.to_path_buf()));
        }

        let value: serde_json::Value =
            serde_json::from_str(content).map_err(|source| FilError::Json {
                path: path.to_path_buf(),
                source,
            })?;

        let is_empty = match &value {
            serde_json::Value::Null => true,
            serde_json::Value::Object(map) => map.is_empty(),
            serde_json::Value::Array(items) => items.is_empty(),
            _ => false,
        };
        if is_empty {
            return Err(FilError::EmptyLayout(path.to_path_buf()));
        }

        serde_json::from_value(value).map_err(|source| FilError::Json {
            path: path.to_path_buf(),
            source,
        })
    }
}
