//! Core types for the grapnel declarative HTTP client.
//!
//! This crate provides the foundational pieces used by grapnel:
//! - [`Method`] - HTTP method enum with case-insensitive tag parsing
//! - [`RequestBody`] and its codecs [`JsonBody`], [`MultipartBody`], [`FormBody`]
//! - [`Headers`], [`Query`], [`PathVars`] - request modifier types
//! - [`Arg`] and [`RequestAssembly`] - argument classification into a request
//! - [`Request`] and [`RawResponse`] - the transport's input and output
//! - [`FromRawResponse`] with [`Status`], [`Json`] - output demultiplexing
//! - [`Transport`] - executor trait for the HTTP round trip
//! - [`Error`] and [`Result`] - error handling

mod assembly;
mod body;
mod context;
mod error;
mod method;
mod modifiers;
mod multipart;
mod outputs;
pub mod prelude;
mod request;
mod response;
mod transport;

pub use assembly::{Arg, RequestAssembly};
pub use body::{FormBody, JsonBody, RequestBody, from_json, to_json};
pub use context::CallContext;
pub use error::{Error, Result};
pub use method::Method;
pub use modifiers::{Headers, PathVars, Query};
pub use multipart::MultipartBody;
pub use outputs::{FromRawResponse, Json, Status};
pub use request::Request;
pub use response::RawResponse;
pub use transport::Transport;
