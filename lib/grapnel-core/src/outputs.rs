//! Output demultiplexing.
//!
//! One invocation outcome is redistributed across an arbitrary combination
//! of typed outputs, bound by type identity rather than position. The
//! closed set of output kinds is: [`Status`], [`Headers`] (response header
//! mapping), [`RawResponse`] (the full envelope), [`Json<T>`] (typed body),
//! `()`, and tuples of those up to arity four. The error-capable output is
//! the `Err` arm of [`crate::Result`]: on any failure no other output is
//! produced.
//!
//! # Example
//!
//! ```
//! use std::collections::HashMap;
//! use bytes::Bytes;
//! use grapnel_core::{FromRawResponse, Json, RawResponse, Status};
//!
//! #[derive(Debug, PartialEq, serde::Deserialize)]
//! struct Item { id: u64 }
//!
//! let response = RawResponse::new(200, HashMap::new(), Bytes::from(r#"{"id":5}"#));
//! let (status, Json(item)) = <(Status, Json<Item>)>::from_raw(&response).expect("demux");
//! assert_eq!(status, Status(200));
//! assert_eq!(item, Item { id: 5 });
//! ```

use derive_more::Display;

use crate::{Headers, RawResponse, Result};

/// HTTP status code output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub struct Status(pub u16);

impl Status {
    /// The numeric status code.
    #[must_use]
    pub const fn code(&self) -> u16 {
        self.0
    }

    /// Status is 2xx.
    #[must_use]
    pub const fn is_success(&self) -> bool {
        self.0 >= 200 && self.0 < 300
    }
}

impl From<Status> for u16 {
    fn from(status: Status) -> Self {
        status.0
    }
}

/// Typed body output: the response payload JSON-decoded into `T`.
///
/// A decode failure surfaces through the error channel as
/// [`crate::Error::Decoding`]; it is never reported elsewhere.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Json<T>(pub T);

impl<T> Json<T> {
    /// Consume into the decoded value.
    pub fn into_inner(self) -> T {
        self.0
    }
}

/// A declared output type that can be populated from a raw response.
///
/// Binding is by type identity: each implementor extracts its own slice of
/// the response independently, so a tuple of outputs is filled in one pass
/// without positional convention.
pub trait FromRawResponse: Sized {
    /// Extract this output from the raw response.
    ///
    /// # Errors
    ///
    /// Returns an error if extraction fails (only the typed-body decode
    /// can fail).
    fn from_raw(response: &RawResponse) -> Result<Self>;
}

impl FromRawResponse for () {
    fn from_raw(_response: &RawResponse) -> Result<Self> {
        Ok(())
    }
}

impl FromRawResponse for Status {
    fn from_raw(response: &RawResponse) -> Result<Self> {
        Ok(Self(response.status()))
    }
}

impl FromRawResponse for Headers {
    fn from_raw(response: &RawResponse) -> Result<Self> {
        Ok(Self::from_map(response.headers().clone()))
    }
}

impl FromRawResponse for RawResponse {
    fn from_raw(response: &RawResponse) -> Result<Self> {
        Ok(response.clone())
    }
}

impl<T: serde::de::DeserializeOwned> FromRawResponse for Json<T> {
    fn from_raw(response: &RawResponse) -> Result<Self> {
        crate::from_json(response.body()).map(Json)
    }
}

macro_rules! impl_from_raw_for_tuple {
    ($($name:ident),+) => {
        impl<$($name: FromRawResponse),+> FromRawResponse for ($($name,)+) {
            fn from_raw(response: &RawResponse) -> Result<Self> {
                Ok(($($name::from_raw(response)?,)+))
            }
        }
    };
}

impl_from_raw_for_tuple!(A);
impl_from_raw_for_tuple!(A, B);
impl_from_raw_for_tuple!(A, B, C);
impl_from_raw_for_tuple!(A, B, C, D);

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use assert2::let_assert;
    use bytes::Bytes;

    use super::*;

    #[derive(Debug, PartialEq, serde::Serialize, serde::Deserialize)]
    struct Item {
        id: u64,
        name: String,
    }

    fn response_with(status: u16, body: &'static str) -> RawResponse {
        let mut headers = HashMap::new();
        headers.insert(
            "Content-Type".to_string(),
            vec!["application/json".to_string()],
        );
        RawResponse::new(status, headers, Bytes::from(body))
    }

    #[test]
    fn status_output() {
        let status = Status::from_raw(&response_with(201, "")).expect("status");
        assert_eq!(status, Status(201));
        assert!(status.is_success());
        assert_eq!(u16::from(status), 201);
    }

    #[test]
    fn headers_output() {
        let headers = Headers::from_raw(&response_with(200, "")).expect("headers");
        assert_eq!(headers.get("Content-Type"), Some("application/json"));
    }

    #[test]
    fn envelope_output() {
        let response = response_with(200, r#"{"id":5,"name":"foo"}"#);
        let envelope = RawResponse::from_raw(&response).expect("envelope");
        assert_eq!(envelope, response);
    }

    #[test]
    fn json_output() {
        let response = response_with(200, r#"{"id":5,"name":"foo"}"#);
        let Json(item) = Json::<Item>::from_raw(&response).expect("decode");
        assert_eq!(
            item,
            Item {
                id: 5,
                name: "foo".to_string()
            }
        );
    }

    #[test]
    fn json_decode_failure_surfaces_as_decoding_error() {
        let response = response_with(200, "not json");
        let result = Json::<Item>::from_raw(&response);
        let_assert!(Err(err) = result);
        assert!(err.is_decoding());
    }

    #[test]
    fn tuple_outputs() {
        let response = response_with(200, r#"{"id":5,"name":"foo"}"#);
        let (status, headers, Json(item)) =
            <(Status, Headers, Json<Item>)>::from_raw(&response).expect("demux");

        assert_eq!(status, Status(200));
        assert_eq!(headers.get("Content-Type"), Some("application/json"));
        assert_eq!(item.id, 5);
    }

    #[test]
    fn status_and_headers_without_body_slot_never_decode() {
        // 204 with an empty (undecodable-as-struct) body: no Json slot, no decode
        let response = RawResponse::new(204, HashMap::new(), Bytes::new());
        let (status, headers) = <(Status, Headers)>::from_raw(&response).expect("demux");
        assert_eq!(status, Status(204));
        assert!(headers.is_empty());
    }

    #[test]
    fn tuple_fails_when_any_slot_fails() {
        let response = response_with(200, "{}");
        let result = <(Status, Json<Item>)>::from_raw(&response);
        let_assert!(Err(err) = result);
        assert!(err.is_decoding());
    }
}
