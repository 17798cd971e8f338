//! HTTP middleware for request processing and protection.
//!
//! Provides authentication, access logging and panic translation.

pub mod access_log;
pub mod auth;
pub mod panic;
