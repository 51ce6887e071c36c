use super::*;

#[test]
fn api_config_trims_trailing_slash() {
    let config = ApiConfig::new("https://api.example.test/");
    assert_eq!(config.base_url(), "https://api.example.test");
    assert_eq!(config.url(PAYMENTS_PATH), "https://api.example.test/api/admin/payments");
}

#[test]
fn api_config_blank_falls_back_to_default_host() {
    assert_eq!(ApiConfig::new("   "), ApiConfig::default());
    assert_eq!(ApiConfig::default().base_url(), DEFAULT_API_BASE_URL);
}

#[test]
fn approve_targets_verify_endpoint() {
    assert_eq!(status_update_path("pay1", PaymentStatus::Approved), "/api/admin/payments/pay1/verify");
}

#[test]
fn pending_targets_reject_endpoint() {
    assert_eq!(status_update_path("pay1", PaymentStatus::Pending), "/api/admin/payments/pay1/reject");
}

#[test]
fn payment_detail_uses_singular_collection() {
    assert_eq!(payment_detail_path("pay1"), "/api/admin/payment/pay1");
}

#[test]
fn manuscript_paths_format_ids() {
    assert_eq!(manuscript_detail_path("m1"), "/api/author/manuscripts/m1");
    assert_eq!(reupload_path("m1"), "/api/author/manuscripts/m1/reupload");
    assert_eq!(MY_MANUSCRIPTS_PATH, "/api/author/manuscripts/my");
}

#[test]
fn authorization_header_uses_bearer_scheme() {
    let api = HttpApi::new(ApiConfig::default(), "tok-123");
    assert_eq!(api.authorization(), "Bearer tok-123");
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn calls_outside_browser_are_unavailable() {
    let api = HttpApi::new(ApiConfig::default(), "tok");
    let result = futures::executor::block_on(api.list_payments());
    assert_eq!(result, Err(ApiError::Unavailable));
}

#[test]
fn list_paths_match_api_routes() {
    assert_eq!(PACKAGES_PATH, "/api/packages");
    assert_eq!(PAYMENTS_PATH, "/api/admin/payments");
    assert_eq!(MY_MANUSCRIPTS_PATH, "/api/author/manuscripts/my");
}
