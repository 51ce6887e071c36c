//! Admin transactions page state and row view models.
//!
//! DESIGN
//! ======
//! API records are mapped to display-ready rows here so the component layer
//! only lays out strings. Every fallback (unknown package, missing email,
//! unparseable date) is decided in this module and covered by tests.

#[cfg(test)]
#[path = "payments_test.rs"]
mod payments_test;

use crate::net::error::ApiError;
use crate::net::types::{Payment, PaymentStatus, UserRef};
use crate::state::packages::PackageCache;
use crate::util::format::{MISSING, format_date, format_rupiah, text_or_missing};
use crate::util::proof::ProofSource;

pub const LOADING_MESSAGE: &str = "Loading transactions...";
pub const NO_TRANSACTIONS_MESSAGE: &str = "No transactions.";
pub const LOAD_FAILED_MESSAGE: &str = "Failed to load transactions.";

/// Options offered by the per-row status selector.
pub const STATUS_OPTIONS: &[(PaymentStatus, &str)] =
    &[(PaymentStatus::Pending, "Not confirmed"), (PaymentStatus::Approved, "Confirmed")];

/// CSS modifier for the status selector.
pub fn status_class(status: PaymentStatus) -> &'static str {
    match status {
        PaymentStatus::Approved => "status-confirmed",
        PaymentStatus::Pending => "status-pending",
    }
}

/// One rendered payment row.
#[derive(Clone, Debug, PartialEq)]
pub struct PaymentRow {
    pub id: String,
    pub proof: ProofSource,
    pub email: String,
    pub package_title: String,
    pub price_label: String,
    pub date_label: String,
    pub status: PaymentStatus,
}

impl PaymentRow {
    pub fn from_payment(payment: &Payment, cache: &PackageCache) -> Self {
        let package = cache.resolve(payment.package.as_ref());
        Self {
            id: payment.id.clone(),
            proof: ProofSource::from_url(payment.payment_proof_url.as_deref()),
            email: text_or_missing(payment.user.as_ref().and_then(UserRef::email)),
            package_title: package.title,
            price_label: format_rupiah(package.price),
            date_label: format_date(payment.created_at.as_deref()),
            status: payment.status,
        }
    }
}

/// What the payments container shows.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum PaymentListView {
    #[default]
    Loading,
    Empty,
    Failed,
    Rows(Vec<PaymentRow>),
}

impl PaymentListView {
    /// Map a list fetch outcome to its view. Failures collapse to the fixed
    /// error message; the cause is only logged.
    pub fn build(result: Result<Vec<Payment>, ApiError>, cache: &PackageCache) -> Self {
        match result {
            Ok(payments) if payments.is_empty() => Self::Empty,
            Ok(payments) => Self::Rows(payments.iter().map(|p| PaymentRow::from_payment(p, cache)).collect()),
            Err(err) => {
                log::error!("load payments failed: {err}");
                Self::Failed
            }
        }
    }

    /// Literal message shown in place of rows, if any.
    pub fn message(&self) -> Option<&'static str> {
        match self {
            Self::Loading => Some(LOADING_MESSAGE),
            Self::Empty => Some(NO_TRANSACTIONS_MESSAGE),
            Self::Failed => Some(LOAD_FAILED_MESSAGE),
            Self::Rows(_) => None,
        }
    }

    pub fn rows(&self) -> &[PaymentRow] {
        match self {
            Self::Rows(rows) => rows,
            _ => &[],
        }
    }
}

/// Contents of the transaction detail modal.
#[derive(Clone, Debug, PartialEq)]
pub struct PaymentDetail {
    pub author_name: String,
    pub package_title: String,
    pub amount_label: String,
    pub date_label: String,
    pub bank_name: String,
    pub proof: ProofSource,
}

impl PaymentDetail {
    pub fn from_payment(payment: &Payment, cache: &PackageCache) -> Self {
        let package = cache.resolve(payment.package.as_ref());
        Self {
            author_name: payment
                .user
                .as_ref()
                .and_then(UserRef::fullname)
                .map_or_else(|| MISSING.to_owned(), str::to_owned),
            package_title: package.title,
            amount_label: format_rupiah(package.price),
            date_label: format_date(payment.created_at.as_deref()),
            bank_name: text_or_missing(payment.bank_name.as_deref()),
            proof: ProofSource::from_url(payment.payment_proof_url.as_deref()),
        }
    }
}

/// Page-scoped state for the admin transactions page.
#[derive(Clone, Debug, Default)]
pub struct PaymentsState {
    pub cache: PackageCache,
    pub list: PaymentListView,
    pub detail: Option<PaymentDetail>,
}
