//! Argument classification and request assembly.
//!
//! Each invocation argument is one of a closed set of kinds ([`Arg`]);
//! the in-progress [`RequestAssembly`] applies them left to right and
//! produces the immutable [`Request`] handed to the transport.
//!
//! Effect semantics per kind:
//!
//! - context: records the call deadline;
//! - body: sets `Content-Type` and encodes immediately, aborting the
//!   invocation on failure;
//! - headers: replaces the assembled header set;
//! - query: overwrites any previously applied query string (last wins);
//!   a query embedded in the path template survives only when no query
//!   argument is applied;
//! - path variables: textual `{name}` substitution over the path portion
//!   only, unresolved placeholders stay verbatim.

use std::collections::HashMap;
use std::time::Duration;

use bytes::Bytes;

use crate::{CallContext, Error, Headers, Method, PathVars, Query, Request, RequestBody, Result};

/// A classified invocation argument.
///
/// The closed set of input kinds; each concrete modifier or body type
/// converts into its variant via `From`.
pub enum Arg {
    /// Cancellation/deadline context.
    Context(CallContext),
    /// Request body (JSON, multipart, or URL-encoded form).
    Body(Box<dyn RequestBody>),
    /// Header modifier.
    Headers(Headers),
    /// Query parameter modifier.
    Query(Query),
    /// Path variable modifier.
    PathVars(PathVars),
}

impl std::fmt::Debug for Arg {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Context(ctx) => f.debug_tuple("Context").field(ctx).finish(),
            Self::Body(_) => f.debug_tuple("Body").finish_non_exhaustive(),
            Self::Headers(headers) => f.debug_tuple("Headers").field(headers).finish(),
            Self::Query(query) => f.debug_tuple("Query").field(query).finish(),
            Self::PathVars(vars) => f.debug_tuple("PathVars").field(vars).finish(),
        }
    }
}

impl Arg {
    /// Wrap any request body as an argument.
    #[must_use]
    pub fn body(body: impl RequestBody + 'static) -> Self {
        Self::Body(Box::new(body))
    }
}

impl From<CallContext> for Arg {
    fn from(ctx: CallContext) -> Self {
        Self::Context(ctx)
    }
}

impl From<Headers> for Arg {
    fn from(headers: Headers) -> Self {
        Self::Headers(headers)
    }
}

impl From<Query> for Arg {
    fn from(query: Query) -> Self {
        Self::Query(query)
    }
}

impl From<PathVars> for Arg {
    fn from(vars: PathVars) -> Self {
        Self::PathVars(vars)
    }
}

impl<T: serde::Serialize + Send + Sync + 'static> From<crate::JsonBody<T>> for Arg {
    fn from(body: crate::JsonBody<T>) -> Self {
        Self::body(body)
    }
}

impl From<crate::FormBody> for Arg {
    fn from(body: crate::FormBody) -> Self {
        Self::body(body)
    }
}

impl From<crate::MultipartBody> for Arg {
    fn from(body: crate::MultipartBody) -> Self {
        Self::body(body)
    }
}

/// Transient per-invocation request state.
///
/// Seeded once with the resolved base URL and path template (placeholders
/// still present), then fed arguments left to right. No state is shared
/// between concurrent invocations.
#[derive(Debug)]
pub struct RequestAssembly {
    domain: String,
    path: String,
    query: Option<String>,
    headers: HashMap<String, Vec<String>>,
    body: Bytes,
    deadline: Option<Duration>,
}

impl RequestAssembly {
    /// Seed the assembly with the base domain and path template.
    ///
    /// The concatenation must already parse as a URL (placeholders are
    /// tolerated); scheme validation is deferred to [`Self::finish`] so
    /// path variables can still rewrite the path. The domain is held apart
    /// from the path so substitution can never reach into it.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidUrl`] on unparseable input.
    pub fn new(domain: &str, path: &str) -> Result<Self> {
        url::Url::parse(&format!("{domain}{path}"))?;
        Ok(Self {
            domain: domain.to_string(),
            path: path.to_string(),
            query: None,
            headers: HashMap::new(),
            body: Bytes::new(),
            deadline: None,
        })
    }

    /// Apply one classified argument.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Encoding`] if a body argument fails to encode; the
    /// invocation must then abort without calling the transport.
    pub fn apply(&mut self, arg: Arg) -> Result<()> {
        match arg {
            Arg::Context(ctx) => {
                self.deadline = ctx.deadline();
            }
            Arg::Body(body) => {
                self.headers
                    .insert("Content-Type".to_string(), vec![body.content_type()]);
                self.body = body.encode()?;
            }
            Arg::Headers(headers) => {
                self.headers = headers.into_map();
            }
            Arg::Query(query) => {
                self.query = Some(query.encode());
            }
            Arg::PathVars(vars) => {
                // substitute the path only; a template query keeps its placeholders
                self.path = match self.path.split_once('?') {
                    Some((path, query)) => format!("{}?{query}", vars.apply(path)),
                    None => vars.apply(&self.path),
                };
            }
        }
        Ok(())
    }

    /// The working URL, placeholders possibly remaining.
    #[must_use]
    pub fn url(&self) -> String {
        format!("{}{}", self.domain, self.path)
    }

    /// The pending query string, if a query argument was applied.
    #[must_use]
    pub fn query(&self) -> Option<&str> {
        self.query.as_deref()
    }

    /// The assembled header set so far.
    #[must_use]
    pub const fn headers(&self) -> &HashMap<String, Vec<String>> {
        &self.headers
    }

    /// Finalize into an immutable [`Request`].
    ///
    /// A query argument's rendering replaces whatever query the template
    /// carried; without one, the template's own query goes out as is.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidUrl`] if the final URL does not parse or
    /// its scheme is not `http`/`https`.
    pub fn finish(self, method: Method) -> Result<Request> {
        let mut url = url::Url::parse(&format!("{}{}", self.domain, self.path))?;
        if self.query.is_some() {
            url.set_query(self.query.as_deref());
        }

        match url.scheme() {
            "http" | "https" => {}
            scheme => {
                return Err(Error::invalid_url(format!(
                    "unsupported scheme '{scheme}' in {url}"
                )));
            }
        }

        Ok(Request::new(
            method,
            url,
            self.headers,
            self.body,
            self.deadline,
        ))
    }
}
