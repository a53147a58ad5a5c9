//! Request body codecs.
//!
//! A request body argument carries both its wire encoding and its
//! content type. Three mutually exclusive encodings are provided:
//! [`JsonBody`], [`crate::MultipartBody`], and [`FormBody`].
//!
//! # Example
//!
//! ```
//! use grapnel_core::{JsonBody, RequestBody};
//! use serde::Serialize;
//!
//! #[derive(Serialize)]
//! struct NewUser { name: String }
//!
//! let body = JsonBody::new(NewUser { name: "Alice".to_string() });
//! assert_eq!(body.content_type(), "application/json");
//! assert_eq!(body.encode().expect("encode").as_ref(), br#"{"name":"Alice"}"#);
//! ```

use bytes::Bytes;

use crate::Result;

/// A typed request body: produces bytes plus a content type.
///
/// Encoding happens at classification time, once per invocation; an
/// encoding failure aborts the whole invocation.
pub trait RequestBody: Send + Sync {
    /// The `Content-Type` header value for this body.
    fn content_type(&self) -> String;

    /// Encode the body into bytes.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::Encoding`] if serialization fails.
    fn encode(&self) -> Result<Bytes>;
}

/// JSON request body wrapping one arbitrary serializable value.
#[derive(Debug, Clone)]
pub struct JsonBody<T> {
    data: T,
}

impl<T> JsonBody<T> {
    /// Wrap a value to be JSON-encoded as the request body.
    #[must_use]
    pub const fn new(data: T) -> Self {
        Self { data }
    }

    /// The wrapped value.
    #[must_use]
    pub const fn data(&self) -> &T {
        &self.data
    }
}

impl<T: serde::Serialize + Send + Sync> RequestBody for JsonBody<T> {
    fn content_type(&self) -> String {
        "application/json".to_string()
    }

    fn encode(&self) -> Result<Bytes> {
        to_json(&self.data)
    }
}

/// URL-encoded form body: an ordered key-value list.
///
/// Field order is preserved in the encoded output. Encoding never fails
/// for plain string pairs.
#[derive(Debug, Clone, Default)]
pub struct FormBody {
    fields: Vec<(String, String)>,
}

impl FormBody {
    /// Create an empty form body.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a field (chainable).
    #[must_use]
    pub fn field(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.fields.push((key.into(), value.into()));
        self
    }

    /// Append many fields from key-value pairs (chainable).
    #[must_use]
    pub fn fields<K, V>(mut self, pairs: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        for (key, value) in pairs {
            self.fields.push((key.into(), value.into()));
        }
        self
    }
}

impl RequestBody for FormBody {
    fn content_type(&self) -> String {
        "application/x-www-form-urlencoded".to_string()
    }

    fn encode(&self) -> Result<Bytes> {
        let encoded = serde_urlencoded::to_string(&self.fields)?;
        Ok(Bytes::from(encoded.into_bytes()))
    }
}

/// Serialize a value to JSON bytes.
///
/// # Errors
///
/// Returns [`crate::Error::Encoding`] if JSON serialization fails.
pub fn to_json<T: serde::Serialize>(value: &T) -> Result<Bytes> {
    serde_json::to_vec(value)
        .map(Bytes::from)
        .map_err(Into::into)
}

/// Deserialize JSON bytes to a value with path-aware error messages.
///
/// Uses `serde_path_to_error` so a failure reports the exact path to the
/// field that could not be deserialized (e.g., "user.address.city").
///
/// # Errors
///
/// Returns [`crate::Error::Decoding`] if deserialization fails.
pub fn from_json<T: serde::de::DeserializeOwned>(bytes: &[u8]) -> Result<T> {
    let mut deserializer = serde_json::Deserializer::from_slice(bytes);
    serde_path_to_error::deserialize(&mut deserializer)
        .map_err(|e| crate::Error::decoding(e.path().to_string(), e.inner().to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn json_body_encode() {
        #[derive(serde::Serialize)]
        struct User {
            name: String,
            age: u32,
        }

        let body = JsonBody::new(User {
            name: "Alice".to_string(),
            age: 30,
        });

        assert_eq!(body.content_type(), "application/json");
        let bytes = body.encode().expect("encode");
        assert_eq!(bytes.as_ref(), br#"{"name":"Alice","age":30}"#);
    }

    #[test]
    fn json_body_encode_failure() {
        // JSON object keys must be strings
        let map = std::collections::BTreeMap::from([((1, 2), "x")]);
        let body = JsonBody::new(map);

        let err = body.encode().expect_err("should fail");
        assert!(err.is_encoding());
    }

    #[test]
    fn form_body_encode_preserves_order() {
        let body = FormBody::new()
            .field("b", "2")
            .field("a", "1")
            .field("b", "3");

        assert_eq!(body.content_type(), "application/x-www-form-urlencoded");
        let bytes = body.encode().expect("encode");
        assert_eq!(bytes.as_ref(), b"b=2&a=1&b=3");
    }

    #[test]
    fn form_body_percent_escapes() {
        let body = FormBody::new().field("q", "a b&c");
        let bytes = body.encode().expect("encode");
        assert_eq!(bytes.as_ref(), b"q=a+b%26c");
    }

    #[test]
    fn form_body_bulk_fields() {
        let body = FormBody::new().fields([("x", "1"), ("y", "2")]);
        let bytes = body.encode().expect("encode");
        assert_eq!(bytes.as_ref(), b"x=1&y=2");
    }

    #[test]
    fn json_round_trip() {
        #[derive(Debug, PartialEq, serde::Serialize, serde::Deserialize)]
        struct Item {
            id: u64,
            name: String,
        }

        let item = Item {
            id: 7,
            name: "foo".to_string(),
        };
        let bytes = to_json(&item).expect("encode");
        let back: Item = from_json(&bytes).expect("decode");
        assert_eq!(back, item);
    }

    #[test]
    fn from_json_error_includes_path() {
        #[derive(Debug, serde::Deserialize)]
        struct Address {
            #[allow(dead_code)]
            city: String,
        }

        #[derive(Debug, serde::Deserialize)]
        struct User {
            #[allow(dead_code)]
            address: Address,
        }

        let result: Result<User> = from_json(br#"{"address":{}}"#);
        let err = result.expect_err("should fail");
        assert!(err.is_decoding());
        let msg = err.to_string();
        assert!(msg.contains("address"), "expected path in error: {msg}");
        assert!(msg.contains("city"), "expected field in error: {msg}");
    }
}
