// gatelink-memory: in-memory policy store for gatelink.
//
// Keeps email-address records and social-account bindings in process
// memory. Ideal for testing, prototyping, and development.

pub mod store;

pub use store::MemoryStore;
