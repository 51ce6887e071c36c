//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components lay out view models built in `state`; they hold no fetched data
//! of their own and report user intent to their page through callbacks.

pub mod first_use;
pub mod manuscript_detail;
pub mod manuscript_table;
pub mod notice_toast;
pub mod payment_detail_modal;
pub mod payment_row;
pub mod proof_preview;
pub mod revision_upload;
pub mod status_badge;
