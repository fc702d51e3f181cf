//! Image reference and upload payload types.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Root-relative reference to a stored image file, e.g. `/uploads/1700_aloe.png`.
///
/// Always starts with `/`. Older records stored the reference without the
/// leading slash; every constructor (including deserialization) prepends it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub struct ImageRef(String);

impl ImageRef {
    /// Build a reference from raw text, normalizing it to be root-relative.
    pub fn new(raw: impl Into<String>) -> Self {
        let raw = raw.into();
        if raw.starts_with('/') {
            Self(raw)
        } else {
            Self(format!("/{raw}"))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<String> for ImageRef {
    fn from(value: String) -> Self {
        Self::new(value)
    }
}

impl From<ImageRef> for String {
    fn from(value: ImageRef) -> Self {
        value.0
    }
}

impl fmt::Display for ImageRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// An image file received with a create or update request.
#[derive(Clone, PartialEq, Eq)]
pub struct UploadedImage {
    /// Filename as supplied by the client (unsanitized).
    pub original_name: String,
    /// Declared content type, if any.
    pub content_type: Option<String>,
    /// File contents.
    pub bytes: Vec<u8>,
}

impl UploadedImage {
    pub fn new(original_name: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            original_name: original_name.into(),
            content_type: None,
            bytes,
        }
    }
}

impl fmt::Debug for UploadedImage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UploadedImage")
            .field("original_name", &self.original_name)
            .field("content_type", &self.content_type)
            .field("len", &self.bytes.len())
            .finish()
    }
}
