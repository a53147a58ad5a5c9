//! Prelude module for convenient imports.
//!
//! ```ignore
//! use grapnel::prelude::*;
//! ```

pub use crate::{
    Arg, CallContext, ClientConfig, ClientDescriptor, Dispatcher, Error, FormBody,
    FromRawResponse, Headers, HyperClient, Json, JsonBody, Method, MultipartBody, PathVars, Query,
    RawResponse, Registry, Request, Result, Status, Transport, from_json, to_json,
};
pub use serde::{Deserialize, Serialize};
