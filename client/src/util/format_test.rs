use super::*;

// =============================================================
// Dates
// =============================================================

#[test]
fn format_date_handles_rfc3339_with_millis() {
    assert_eq!(format_date(Some("2025-03-05T10:15:00.000Z")), "05 Mar 2025");
}

#[test]
fn format_date_handles_offsetless_and_bare_dates() {
    assert_eq!(format_date(Some("2024-12-31T23:59:59")), "31 Dec 2024");
    assert_eq!(format_date(Some("2024-01-09")), "09 Jan 2024");
}

#[test]
fn format_date_missing_or_garbage_is_dash() {
    assert_eq!(format_date(None), "-");
    assert_eq!(format_date(Some("")), "-");
    assert_eq!(format_date(Some("yesterday")), "-");
}

// =============================================================
// Money
// =============================================================

#[test]
fn format_rupiah_groups_thousands_with_dots() {
    assert_eq!(format_rupiah(150_000.0), "Rp 150.000");
    assert_eq!(format_rupiah(1_250_000.0), "Rp 1.250.000");
    assert_eq!(format_rupiah(999.0), "Rp 999");
}

#[test]
fn format_rupiah_rounds_fractions() {
    assert_eq!(format_rupiah(99_999.6), "Rp 100.000");
}

#[test]
fn format_rupiah_clamps_invalid_amounts_to_zero() {
    assert_eq!(format_rupiah(0.0), "Rp 0");
    assert_eq!(format_rupiah(-5_000.0), "Rp 0");
    assert_eq!(format_rupiah(f64::NAN), "Rp 0");
}

// =============================================================
// Misc
// =============================================================

#[test]
fn format_flag_maps_booleans() {
    assert_eq!(format_flag(true), "Yes");
    assert_eq!(format_flag(false), "No");
}

#[test]
fn text_or_missing_trims_and_defaults() {
    assert_eq!(text_or_missing(Some("  Seri Nusantara ")), "Seri Nusantara");
    assert_eq!(text_or_missing(Some("  ")), "-");
    assert_eq!(text_or_missing(None), "-");
}
