//! Client descriptors and endpoint slots.

/// One declared endpoint slot: a name plus method and path tags.
///
/// Tags are plain strings so a descriptor can be built from external
/// configuration; a slot missing either tag is declared but never wired.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EndpointSlot {
    name: String,
    method: String,
    path: String,
}

impl EndpointSlot {
    /// Declare a slot.
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        method: impl Into<String>,
        path: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            method: method.into(),
            path: path.into(),
        }
    }

    /// Slot name, unique within its descriptor.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// HTTP method tag (case-insensitive; may be empty).
    #[must_use]
    pub fn method(&self) -> &str {
        &self.method
    }

    /// URL path template, `{name}` placeholders allowed (may be empty).
    #[must_use]
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Whether both tags are present, making the slot eligible for wiring.
    #[must_use]
    pub fn is_tagged(&self) -> bool {
        !self.method.is_empty() && !self.path.is_empty()
    }
}

/// A declared client: base domain plus its endpoint slots.
///
/// Immutable once registered; wiring fills a callable for every fully
/// tagged slot exactly once.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientDescriptor {
    name: String,
    domain: String,
    slots: Vec<EndpointSlot>,
}

impl ClientDescriptor {
    /// Declare a client with its base domain (scheme + authority).
    #[must_use]
    pub fn new(name: impl Into<String>, domain: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            domain: domain.into(),
            slots: Vec::new(),
        }
    }

    /// Declare an endpoint slot (chainable).
    #[must_use]
    pub fn endpoint(
        mut self,
        name: impl Into<String>,
        method: impl Into<String>,
        path: impl Into<String>,
    ) -> Self {
        self.slots.push(EndpointSlot::new(name, method, path));
        self
    }

    /// Client name, unique within a registry.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Base URL for every slot of this client.
    #[must_use]
    pub fn domain(&self) -> &str {
        &self.domain
    }

    /// Declared slots, in declaration order.
    #[must_use]
    pub fn slots(&self) -> &[EndpointSlot] {
        &self.slots
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn descriptor_builder() {
        let descriptor = ClientDescriptor::new("items", "https://api.example.com")
            .endpoint("get", "GET", "/items/{id}")
            .endpoint("create", "POST", "/items");

        assert_eq!(descriptor.name(), "items");
        assert_eq!(descriptor.domain(), "https://api.example.com");
        assert_eq!(descriptor.slots().len(), 2);
        let first = descriptor.slots().first().expect("slot");
        assert_eq!(first.name(), "get");
        assert_eq!(first.path(), "/items/{id}");
    }

    #[test]
    fn slot_tag_presence() {
        assert!(EndpointSlot::new("a", "GET", "/a").is_tagged());
        assert!(!EndpointSlot::new("b", "", "/b").is_tagged());
        assert!(!EndpointSlot::new("c", "GET", "").is_tagged());
    }
}
