//! Reusable UI components.

pub mod navbar;
pub mod protected;
