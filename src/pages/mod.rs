//! Route-level page components.

pub mod dashboard;
pub mod home;
pub mod login;
pub mod signup;
