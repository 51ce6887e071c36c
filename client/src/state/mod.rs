//! Shared state modules for the dashboard pages.
//!
//! DESIGN
//! ======
//! State types are plain data with pure constructors; components hold them in
//! `RwSignal`s. Keeping the mapping from API records to display values here
//! lets it be tested without a browser.

pub mod manuscripts;
pub mod notice;
pub mod packages;
pub mod payments;
