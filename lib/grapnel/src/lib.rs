//! Declarative HTTP client for Rust.
//!
//! Declare client descriptors whose endpoint slots carry an HTTP method
//! and a path template; wire them once at startup into bound callables
//! that classify heterogeneous call arguments into a request and
//! demultiplex the response across typed outputs.
//!
//! # Example
//!
//! ```ignore
//! use std::sync::Arc;
//! use grapnel::prelude::*;
//!
//! #[derive(Debug, Deserialize)]
//! struct Item {
//!     id: u64,
//!     name: String,
//! }
//!
//! let mut registry = Registry::new();
//! registry.register(Arc::new(
//!     ClientDescriptor::new("items", "https://api.example.com")
//!         .endpoint("get", "GET", "/items/{id}")
//!         .endpoint("create", "POST", "/items"),
//! ));
//!
//! let dispatcher = Dispatcher::wire(registry, HyperClient::new())?;
//!
//! let endpoint = dispatcher.endpoint("items", "get").expect("wired");
//! let Json(item): Json<Item> = endpoint
//!     .invoke([PathVars::new().set("id", "5").into()])
//!     .await?;
//! ```

mod client;
mod config;
mod connector;
mod descriptor;
mod dispatch;
pub mod prelude;
mod registry;

pub use client::{HyperClient, HyperClientBuilder};
pub use config::{ClientConfig, ClientConfigBuilder};
pub use descriptor::{ClientDescriptor, EndpointSlot};
pub use dispatch::{BoundEndpoint, Dispatcher};
pub use registry::Registry;

// Re-export core types
pub use grapnel_core::{
    Arg, CallContext, Error, FormBody, FromRawResponse, Headers, Json, JsonBody, Method,
    MultipartBody, PathVars, Query, RawResponse, Request, RequestAssembly, RequestBody, Result,
    Status, Transport, from_json, to_json,
};

// Re-export crates consumers need at the seams
pub use url;
