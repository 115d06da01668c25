//! Small browser-facing helpers.

pub mod google;
pub mod timezone;
