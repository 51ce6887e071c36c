//! Networking modules for the publishing REST API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` holds the REST client and its trait seams, `types` defines the wire
//! schema, and `error` the failure type every call returns.

pub mod api;
pub mod error;
pub mod types;

#[cfg(test)]
pub(crate) mod fake;
