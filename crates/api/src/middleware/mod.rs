//! Request extractors that gate access.
//!
//! - [`admin::RequireAdmin`] -- Requires the configured admin bearer token,
//!   or nothing when no token is configured.

pub mod admin;
