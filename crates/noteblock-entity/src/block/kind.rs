//! Block type enumeration.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;
use std::str::FromStr;

/// The kind of content a block carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[sqlx(rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum BlockType {
    /// Rich text, `{"text": ...}`.
    Text,
    /// Drawing data, `{"data": ...}`.
    Canvas,
    /// Image reference, `{"path": ..., "data": ...}`.
    Image,
}

impl BlockType {
    /// String fields the content object of this kind must carry.
    pub fn required_fields(&self) -> &'static [&'static str] {
        match self {
            Self::Text => &["text"],
            Self::Canvas => &["data"],
            Self::Image => &["path"],
        }
    }

    /// Check that `content` is an object holding every required string field.
    pub fn check_content(&self, content: &Value) -> Result<(), String> {
        let Some(object) = content.as_object() else {
            return Err(format!("Content for {self} block must be an object"));
        };

        for field in self.required_fields() {
            match object.get(*field) {
                Some(Value::String(_)) => {}
                _ => {
                    return Err(format!(
                        "Content for {self} block requires a string '{field}' field"
                    ));
                }
            }
        }
        Ok(())
    }

    /// Return the type as a lowercase string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Canvas => "canvas",
            Self::Image => "image",
        }
    }
}

impl fmt::Display for BlockType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BlockType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" => Ok(Self::Text),
            "canvas" => Ok(Self::Canvas),
            "image" => Ok(Self::Image),
            _ => Err(format!("Unknown block type: {s}")),
        }
    }
}
