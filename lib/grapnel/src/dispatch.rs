//! Dispatch engine: wiring and bound endpoint invocation.
//!
//! [`Dispatcher::wire`] runs once over a registry snapshot and builds a
//! bound callable for every endpoint slot carrying both a method and a
//! path tag. Per invocation, a bound endpoint assembles the request from
//! the classified arguments, executes it through the transport, and
//! demultiplexes the outcome across the declared output types.
//!
//! # Example
//!
//! ```ignore
//! let mut registry = Registry::new();
//! registry.register(Arc::new(
//!     ClientDescriptor::new("items", "https://api.example.com")
//!         .endpoint("get", "GET", "/items/{id}"),
//! ));
//!
//! let dispatcher = Dispatcher::wire(registry, HyperClient::new())?;
//! let Json(item): Json<Item> = dispatcher
//!     .endpoint("items", "get")
//!     .expect("wired")
//!     .invoke([PathVars::new().set("id", "5").into()])
//!     .await?;
//! ```

use std::collections::HashMap;

use grapnel_core::{Arg, FromRawResponse, Method, RequestAssembly};

use crate::{Registry, Result, Transport};

/// The wired mapping from endpoint identifiers to generated callables.
///
/// Wiring happens once, at startup, over the registry snapshot; the
/// dispatcher is read-only afterwards and safe for concurrent use.
#[derive(Debug)]
pub struct Dispatcher<T> {
    transport: T,
    clients: HashMap<String, HashMap<String, BoundCall>>,
}

/// The per-slot state captured at wiring time.
#[derive(Debug, Clone)]
struct BoundCall {
    method: Method,
    domain: String,
    path: String,
}

impl<T: Transport> Dispatcher<T> {
    /// Wire every registered descriptor's fully tagged slots.
    ///
    /// Slots missing a method or path tag are skipped: looking them up
    /// later yields `None`, which is the caller's error to handle. The
    /// registry is consumed, so later registrations are never picked up.
    ///
    /// # Errors
    ///
    /// Returns [`grapnel_core::Error::InvalidRequest`] if a slot carries
    /// an unrecognized method tag.
    pub fn wire(registry: Registry, transport: T) -> Result<Self> {
        let mut clients = HashMap::new();

        for descriptor in registry.into_descriptors() {
            let mut slots = HashMap::new();

            for slot in descriptor.slots() {
                if !slot.is_tagged() {
                    tracing::debug!(
                        client = descriptor.name(),
                        slot = slot.name(),
                        "slot missing method or path tag, left unwired"
                    );
                    continue;
                }

                let method: Method = slot.method().parse()?;
                tracing::debug!(
                    client = descriptor.name(),
                    slot = slot.name(),
                    %method,
                    path = slot.path(),
                    "wired endpoint"
                );

                slots.insert(
                    slot.name().to_string(),
                    BoundCall {
                        method,
                        domain: descriptor.domain().to_string(),
                        path: slot.path().to_string(),
                    },
                );
            }

            clients.insert(descriptor.name().to_string(), slots);
        }

        Ok(Self { transport, clients })
    }

    /// Look up the bound callable for a client's endpoint slot.
    ///
    /// Returns `None` for unknown clients and for slots that were never
    /// wired (missing tags).
    #[must_use]
    pub fn endpoint(&self, client: &str, slot: &str) -> Option<BoundEndpoint<'_, T>> {
        let call = self.clients.get(client)?.get(slot)?;
        Some(BoundEndpoint {
            transport: &self.transport,
            call,
        })
    }

    /// The shared transport executor.
    #[must_use]
    pub const fn transport(&self) -> &T {
        &self.transport
    }
}

/// A generated callable bound to one endpoint slot.
///
/// All per-invocation state is local to [`Self::invoke`]; a bound
/// endpoint may be invoked concurrently from multiple tasks.
#[derive(Debug, Clone, Copy)]
pub struct BoundEndpoint<'a, T> {
    transport: &'a T,
    call: &'a BoundCall,
}

impl<T: Transport> BoundEndpoint<'_, T> {
    /// The wired HTTP method.
    #[must_use]
    pub const fn method(&self) -> Method {
        self.call.method
    }

    /// The wired path template, placeholders intact.
    #[must_use]
    pub fn path(&self) -> &str {
        &self.call.path
    }

    /// Invoke the endpoint: classify `args`, execute, demultiplex into `O`.
    ///
    /// Arguments are applied left to right; any assembly failure aborts
    /// the invocation before the transport is touched. On success the raw
    /// response is redistributed across `O` by type identity.
    ///
    /// # Errors
    ///
    /// Returns the first assembly, transport, or decoding error; no
    /// partial outputs accompany an error.
    pub async fn invoke<O: FromRawResponse>(
        &self,
        args: impl IntoIterator<Item = Arg>,
    ) -> Result<O> {
        let mut assembly = RequestAssembly::new(&self.call.domain, &self.call.path)?;
        for arg in args {
            assembly.apply(arg)?;
        }
        let request = assembly.finish(self.call.method)?;

        let response = self.transport.execute(request).await.inspect_err(|err| {
            tracing::debug!(path = self.call.path, %err, "transport failure");
        })?;

        O::from_raw(&response)
    }
}
