//! Admin transactions workflows: package cache, list, detail, status update.

#[cfg(test)]
#[path = "payments_test.rs"]
mod payments_test;

use crate::net::api::PaymentsApi;
use crate::net::types::PaymentStatus;
use crate::state::notice::{Notice, SUCCESS_DISMISS_MS};
use crate::state::packages::PackageCache;
use crate::state::payments::{PaymentDetail, PaymentListView};

pub const STATUS_UPDATED_TITLE: &str = "Status updated";
pub const STATUS_UPDATE_FAILED_MESSAGE: &str = "Failed to update status";
pub const DETAIL_FAILED_MESSAGE: &str = "Failed to load transaction detail";

/// Fetch the package catalog. A failed fetch leaves the cache unloaded and
/// every id-only reference resolves to the unknown package.
pub async fn load_package_cache<A: PaymentsApi>(api: &A) -> PackageCache {
    match api.list_packages().await {
        Ok(packages) => {
            let cache = PackageCache::from_packages(packages);
            log::debug!("package cache loaded: {} entries", cache.len());
            cache
        }
        Err(err) => {
            log::warn!("load packages failed: {err}");
            PackageCache::NotLoaded
        }
    }
}

pub async fn load_payment_view<A: PaymentsApi>(api: &A, cache: &PackageCache) -> PaymentListView {
    PaymentListView::build(api.list_payments().await, cache)
}

/// Result of a status change: the notice to show and the re-fetched list.
#[derive(Clone, Debug, PartialEq)]
pub struct StatusUpdate {
    pub notice: Notice,
    pub view: PaymentListView,
}

/// Send the verify or reject call for `target`, then re-fetch the list once
/// whatever the outcome.
pub async fn update_payment_status<A: PaymentsApi>(
    api: &A,
    cache: &PackageCache,
    payment_id: &str,
    target: PaymentStatus,
) -> StatusUpdate {
    let result = match target {
        PaymentStatus::Approved => api.verify_payment(payment_id).await,
        PaymentStatus::Pending => api.reject_payment(payment_id).await,
    };
    let notice = match result {
        Ok(()) => {
            log::info!("payment {payment_id} set to {}", target.as_str());
            Notice::success(STATUS_UPDATED_TITLE).with_auto_dismiss(SUCCESS_DISMISS_MS)
        }
        Err(err) => {
            log::error!("update payment {payment_id} failed: {err}");
            Notice::error(err.user_message(STATUS_UPDATE_FAILED_MESSAGE))
        }
    };
    let view = load_payment_view(api, cache).await;
    StatusUpdate { notice, view }
}

/// Fetch one payment for the detail modal.
pub async fn load_payment_detail<A: PaymentsApi>(
    api: &A,
    cache: &PackageCache,
    payment_id: &str,
) -> Result<PaymentDetail, Notice> {
    match api.fetch_payment(payment_id).await {
        Ok(payment) => Ok(PaymentDetail::from_payment(&payment, cache)),
        Err(err) => {
            log::error!("load payment {payment_id} failed: {err}");
            Err(Notice::error(err.user_message(DETAIL_FAILED_MESSAGE)))
        }
    }
}
