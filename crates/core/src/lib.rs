//! Domain types and rules for the portfolio project catalog.
//!
//! Everything here is pure: no filesystem or network access. Persistence
//! lives in `folio-store`, the HTTP surface in `folio-api`.

pub mod catalog;
pub mod contact;
pub mod error;
pub mod project;
pub mod seed;
pub mod session;
pub mod types;
pub mod upload;
