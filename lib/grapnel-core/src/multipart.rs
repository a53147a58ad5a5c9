//! Multipart form-data request bodies.
//!
//! [`MultipartBody`] carries a set of plain form fields plus at most one
//! file attachment read from the filesystem at encode time.
//!
//! # Example
//!
//! ```ignore
//! let body = MultipartBody::new()
//!     .field("description", "profile picture")
//!     .file("avatar", "/tmp/photo.png");
//! ```

use std::path::{Path, PathBuf};

use bytes::{BufMut, Bytes, BytesMut};

use crate::{Error, RequestBody, Result};

/// Multipart form-data body: form fields plus an optional file part.
///
/// Field values are stringified via their `Display` formatting when added.
/// Adding a second file replaces the first (at most one attachment).
#[derive(Debug, Clone)]
pub struct MultipartBody {
    fields: Vec<(String, String)>,
    file: Option<FilePart>,
    boundary: String,
}

#[derive(Debug, Clone)]
struct FilePart {
    name: String,
    path: PathBuf,
}

impl Default for MultipartBody {
    fn default() -> Self {
        Self::new()
    }
}

impl MultipartBody {
    /// Create an empty multipart body with a generated boundary.
    #[must_use]
    pub fn new() -> Self {
        Self {
            fields: Vec::new(),
            file: None,
            boundary: generate_boundary(),
        }
    }

    /// Create an empty multipart body with a custom boundary.
    ///
    /// The boundary must not appear in any field or file content.
    #[must_use]
    pub fn with_boundary(boundary: impl Into<String>) -> Self {
        Self {
            fields: Vec::new(),
            file: None,
            boundary: boundary.into(),
        }
    }

    /// Append a form field, stringifying the value (chainable).
    #[must_use]
    pub fn field(mut self, key: impl Into<String>, value: impl ToString) -> Self {
        self.fields.push((key.into(), value.to_string()));
        self
    }

    /// Append many form fields from key-value pairs (chainable).
    #[must_use]
    pub fn fields<K, V>(mut self, pairs: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: ToString,
    {
        for (key, value) in pairs {
            self.fields.push((key.into(), value.to_string()));
        }
        self
    }

    /// Attach a file part, replacing any previous attachment (chainable).
    ///
    /// The file is read at encode time; its base name becomes the part
    /// filename.
    #[must_use]
    pub fn file(mut self, field_name: impl Into<String>, path: impl Into<PathBuf>) -> Self {
        self.file = Some(FilePart {
            name: field_name.into(),
            path: path.into(),
        });
        self
    }

    /// The boundary string.
    #[must_use]
    pub fn boundary(&self) -> &str {
        &self.boundary
    }

    fn write_part_header(&self, buf: &mut BytesMut, name: &str, filename: Option<&str>) {
        buf.put_slice(b"--");
        buf.put_slice(self.boundary.as_bytes());
        buf.put_slice(b"\r\n");
        buf.put_slice(b"Content-Disposition: form-data; name=\"");
        buf.put_slice(name.as_bytes());
        buf.put_slice(b"\"");
        if let Some(filename) = filename {
            buf.put_slice(b"; filename=\"");
            buf.put_slice(filename.as_bytes());
            buf.put_slice(b"\"");
        }
        buf.put_slice(b"\r\n\r\n");
    }
}

impl RequestBody for MultipartBody {
    fn content_type(&self) -> String {
        format!("multipart/form-data; boundary={}", self.boundary)
    }

    fn encode(&self) -> Result<Bytes> {
        let mut buf = BytesMut::new();

        for (key, value) in &self.fields {
            self.write_part_header(&mut buf, key, None);
            buf.put_slice(value.as_bytes());
            buf.put_slice(b"\r\n");
        }

        if let Some(file) = &self.file {
            let filename = base_name(&file.path)?;
            let contents = std::fs::read(&file.path)
                .map_err(|e| Error::encoding(format!("{}: {e}", file.path.display())))?;

            self.write_part_header(&mut buf, &file.name, Some(&filename));
            buf.put_slice(&contents);
            buf.put_slice(b"\r\n");
        }

        buf.put_slice(b"--");
        buf.put_slice(self.boundary.as_bytes());
        buf.put_slice(b"--\r\n");

        Ok(buf.freeze())
    }
}

fn base_name(path: &Path) -> Result<String> {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .ok_or_else(|| Error::encoding(format!("no file name in path: {}", path.display())))
}

/// Generate a unique boundary string.
fn generate_boundary() -> String {
    use std::time::{SystemTime, UNIX_EPOCH};

    let timestamp = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos())
        .unwrap_or(0);

    format!("----GrapnelBoundary{timestamp:x}")
}
