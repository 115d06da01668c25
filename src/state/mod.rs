//! Shared client-side state managers.
//!
//! DESIGN
//! ======
//! The session manager owns the auth state machine and the access token; the
//! profile manager depends on it and caches the user's profile. Both are
//! plain Rust handles with injected collaborators, bridged into reactive
//! signals at the composition root.

pub mod profile;
pub mod session;
