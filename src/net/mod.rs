//! Network layer: request/response model, transport, and endpoint wrappers.
//!
//! DESIGN
//! ======
//! Requests are plain values (`ApiRequest`) handed to a `Transport`. The
//! session manager owns the pipeline that attaches credentials and applies
//! the refresh-retry policy; tests drive it with a scripted transport.

pub mod api;
pub mod transport;
pub mod types;

#[cfg(test)]
pub mod testing;
