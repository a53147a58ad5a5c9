//! The assembled transport request.
//!
//! A [`Request`] is produced once per invocation by
//! [`crate::RequestAssembly::finish`] and handed to the transport
//! executor. It is immutable from that point on.

use std::collections::HashMap;
use std::time::Duration;

use bytes::Bytes;

use crate::Method;

/// A fully assembled HTTP request: method, URL, headers, body, deadline.
#[derive(Debug, Clone)]
pub struct Request {
    method: Method,
    url: url::Url,
    headers: HashMap<String, Vec<String>>,
    body: Bytes,
    deadline: Option<Duration>,
}

impl Request {
    /// Create a request from its parts.
    #[must_use]
    pub const fn new(
        method: Method,
        url: url::Url,
        headers: HashMap<String, Vec<String>>,
        body: Bytes,
        deadline: Option<Duration>,
    ) -> Self {
        Self {
            method,
            url,
            headers,
            body,
            deadline,
        }
    }

    /// HTTP method.
    #[must_use]
    pub const fn method(&self) -> Method {
        self.method
    }

    /// Request URL.
    #[must_use]
    pub const fn url(&self) -> &url::Url {
        &self.url
    }

    /// Request headers.
    #[must_use]
    pub const fn headers(&self) -> &HashMap<String, Vec<String>> {
        &self.headers
    }

    /// First value of a header by name.
    #[must_use]
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .get(name)
            .and_then(|values| values.first())
            .map(String::as_str)
    }

    /// Request body bytes (empty when no body argument was supplied).
    #[must_use]
    pub const fn body(&self) -> &Bytes {
        &self.body
    }

    /// Call deadline, if a context argument supplied one.
    #[must_use]
    pub const fn deadline(&self) -> Option<Duration> {
        self.deadline
    }

    /// Consume into (method, url, headers, body, deadline).
    #[must_use]
    pub fn into_parts(
        self,
    ) -> (
        Method,
        url::Url,
        HashMap<String, Vec<String>>,
        Bytes,
        Option<Duration>,
    ) {
        (self.method, self.url, self.headers, self.body, self.deadline)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_accessors() {
        let url = url::Url::parse("https://api.example.com/users?page=1").expect("valid URL");
        let mut headers = HashMap::new();
        headers.insert("Accept".to_string(), vec!["application/json".to_string()]);

        let request = Request::new(
            Method::Get,
            url.clone(),
            headers,
            Bytes::new(),
            Some(Duration::from_secs(3)),
        );

        assert_eq!(request.method(), Method::Get);
        assert_eq!(request.url(), &url);
        assert_eq!(request.header("Accept"), Some("application/json"));
        assert_eq!(request.header("Missing"), None);
        assert!(request.body().is_empty());
        assert_eq!(request.deadline(), Some(Duration::from_secs(3)));
    }
}
