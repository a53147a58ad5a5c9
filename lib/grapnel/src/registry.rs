//! Client registry.
//!
//! An explicit registration object with a strict lifecycle: descriptors
//! are registered before wiring, then [`crate::Dispatcher::wire`] consumes
//! the registry, so registrations made afterwards can never be picked up.

use std::sync::Arc;

use crate::ClientDescriptor;

/// Append-only list of declared client descriptors.
///
/// Descriptors are held as shared handles ([`Arc`]); the registry never
/// copies or mutates them.
#[derive(Debug, Default)]
pub struct Registry {
    clients: Vec<Arc<ClientDescriptor>>,
}

impl Registry {
    /// Create an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a client descriptor.
    pub fn register(&mut self, descriptor: Arc<ClientDescriptor>) {
        self.clients.push(descriptor);
    }

    /// Number of registered descriptors.
    #[must_use]
    pub fn len(&self) -> usize {
        self.clients.len()
    }

    /// Whether the registry is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.clients.is_empty()
    }

    /// All registered descriptors, in registration order.
    #[must_use]
    pub fn descriptors(&self) -> &[Arc<ClientDescriptor>] {
        &self.clients
    }

    pub(crate) fn into_descriptors(self) -> Vec<Arc<ClientDescriptor>> {
        self.clients
    }
}
