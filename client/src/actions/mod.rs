//! Async page workflows, written against the API traits.
//!
//! ARCHITECTURE
//! ============
//! Pages spawn these and write the returned values into their signals. The
//! workflows themselves touch no reactive state, so tests drive them with an
//! in-memory fake and `futures::executor::block_on`.

pub mod manuscripts;
pub mod payments;
