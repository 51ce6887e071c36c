//! In-memory API double that records every call it receives.

use std::cell::RefCell;

use super::api::{ManuscriptsApi, PaymentsApi};
use super::error::ApiError;
use super::types::{Manuscript, Package, Payment};

#[derive(Default)]
pub(crate) struct RecordingApi {
    packages: Vec<Package>,
    payments: Vec<Payment>,
    manuscripts: Vec<Manuscript>,
    failures: Vec<(&'static str, ApiError)>,
    calls: RefCell<Vec<String>>,
}

impl RecordingApi {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn with_packages(mut self, packages: Vec<Package>) -> Self {
        self.packages = packages;
        self
    }

    pub(crate) fn with_payments(mut self, payments: Vec<Payment>) -> Self {
        self.payments = payments;
        self
    }

    pub(crate) fn with_manuscripts(mut self, manuscripts: Vec<Manuscript>) -> Self {
        self.manuscripts = manuscripts;
        self
    }

    /// Make every call to `method` fail with `error`.
    pub(crate) fn failing(mut self, method: &'static str, error: ApiError) -> Self {
        self.failures.push((method, error));
        self
    }

    pub(crate) fn calls(&self) -> Vec<String> {
        self.calls.borrow().clone()
    }

    pub(crate) fn count(&self, method: &str) -> usize {
        self.calls
            .borrow()
            .iter()
            .filter(|call| call.split(':').next() == Some(method))
            .count()
    }

    fn record(&self, method: &'static str, arg: Option<&str>) -> Result<(), ApiError> {
        let entry = match arg {
            Some(arg) => format!("{method}:{arg}"),
            None => method.to_owned(),
        };
        self.calls.borrow_mut().push(entry);
        match self.failures.iter().find(|(name, _)| *name == method) {
            Some((_, err)) => Err(err.clone()),
            None => Ok(()),
        }
    }
}

impl PaymentsApi for RecordingApi {
    async fn list_packages(&self) -> Result<Vec<Package>, ApiError> {
        self.record("list_packages", None)?;
        Ok(self.packages.clone())
    }

    async fn list_payments(&self) -> Result<Vec<Payment>, ApiError> {
        self.record("list_payments", None)?;
        Ok(self.payments.clone())
    }

    async fn fetch_payment(&self, payment_id: &str) -> Result<Payment, ApiError> {
        self.record("fetch_payment", Some(payment_id))?;
        self.payments
            .iter()
            .find(|p| p.id == payment_id)
            .cloned()
            .ok_or(ApiError::Status { status: 404, message: Some("Payment not found".to_owned()) })
    }

    async fn verify_payment(&self, payment_id: &str) -> Result<(), ApiError> {
        self.record("verify_payment", Some(payment_id))
    }

    async fn reject_payment(&self, payment_id: &str) -> Result<(), ApiError> {
        self.record("reject_payment", Some(payment_id))
    }
}

impl ManuscriptsApi for RecordingApi {
    /// File name stands in for the browser file handle.
    type File = String;

    async fn list_my_manuscripts(&self) -> Result<Vec<Manuscript>, ApiError> {
        self.record("list_my_manuscripts", None)?;
        Ok(self.manuscripts.clone())
    }

    async fn fetch_manuscript(&self, manuscript_id: &str) -> Result<Manuscript, ApiError> {
        self.record("fetch_manuscript", Some(manuscript_id))?;
        self.manuscripts
            .iter()
            .find(|m| m.id == manuscript_id)
            .cloned()
            .ok_or(ApiError::Status { status: 404, message: None })
    }

    async fn reupload_manuscript(&self, manuscript_id: &str, file: Self::File) -> Result<(), ApiError> {
        let _ = file;
        self.record("reupload_manuscript", Some(manuscript_id))
    }
}
