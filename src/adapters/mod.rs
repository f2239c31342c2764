// Adapters layer: concrete implementations for external systems (http transport, in-memory document).

pub mod dom;
pub mod http;
