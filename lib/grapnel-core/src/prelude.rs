//! Prelude module for convenient imports.
//!
//! ```ignore
//! use grapnel_core::prelude::*;
//! ```

pub use crate::{
    Arg, CallContext, Error, FormBody, FromRawResponse, Headers, Json, JsonBody, Method,
    MultipartBody, PathVars, Query, RawResponse, Request, RequestAssembly, RequestBody, Result,
    Status, Transport, from_json, to_json,
};
