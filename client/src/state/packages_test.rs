use super::*;
use crate::net::types::PackageStub;

fn catalog() -> PackageCache {
    PackageCache::from_packages(vec![
        Package { id: "p1".to_owned(), title: Some("Basic".to_owned()), price: Some(150_000.0) },
        Package { id: "p2".to_owned(), title: Some("Premium".to_owned()), price: None },
    ])
}

fn stub(id: Option<&str>, title: Option<&str>, price: Option<f64>) -> PackageRef {
    PackageRef::Object(PackageStub {
        id: id.map(str::to_owned),
        title: title.map(str::to_owned),
        price,
    })
}

// =============================================================
// Shapes
// =============================================================

#[test]
fn populated_object_returns_its_own_fields() {
    let resolved = PackageCache::NotLoaded.resolve(Some(&stub(Some("p9"), Some("Gold"), Some(500_000.0))));
    assert_eq!(resolved, ResolvedPackage { title: "Gold".to_owned(), price: 500_000.0 });
}

#[test]
fn populated_object_without_price_defaults_to_zero() {
    let resolved = catalog().resolve(Some(&stub(None, Some("Gold"), None)));
    assert_eq!(resolved.price, 0.0);
}

#[test]
fn populated_object_wins_over_cached_entry_with_same_id() {
    let resolved = catalog().resolve(Some(&stub(Some("p1"), Some("Basic (promo)"), Some(99_000.0))));
    assert_eq!(resolved, ResolvedPackage { title: "Basic (promo)".to_owned(), price: 99_000.0 });
}

#[test]
fn id_only_object_uses_cache() {
    let resolved = catalog().resolve(Some(&stub(Some("p1"), None, None)));
    assert_eq!(resolved, ResolvedPackage { title: "Basic".to_owned(), price: 150_000.0 });
}

#[test]
fn empty_title_object_is_treated_as_id_only() {
    let resolved = catalog().resolve(Some(&stub(Some("p2"), Some(""), Some(1.0))));
    assert_eq!(resolved, ResolvedPackage { title: "Premium".to_owned(), price: 0.0 });
}

#[test]
fn bare_id_uses_cache() {
    let resolved = catalog().resolve(Some(&PackageRef::Id("p2".to_owned())));
    assert_eq!(resolved.title, "Premium");
}

// =============================================================
// Fallback
// =============================================================

#[test]
fn unknown_id_yields_exact_fallback() {
    let resolved = catalog().resolve(Some(&PackageRef::Id("deleted".to_owned())));
    assert_eq!(resolved, ResolvedPackage { title: "Unknown Package".to_owned(), price: 0.0 });
}

#[test]
fn cache_not_loaded_yields_fallback() {
    let resolved = PackageCache::NotLoaded.resolve(Some(&PackageRef::Id("p1".to_owned())));
    assert_eq!(resolved, ResolvedPackage::unknown());
}

#[test]
fn null_reference_and_empty_object_yield_fallback() {
    assert_eq!(catalog().resolve(None), ResolvedPackage::unknown());
    assert_eq!(catalog().resolve(Some(&stub(None, None, None))), ResolvedPackage::unknown());
}

#[test]
fn every_shape_yields_string_title_and_non_negative_price() {
    let cache = catalog();
    let shapes = [
        Some(stub(Some("p1"), Some("Gold"), Some(-10.0))),
        Some(stub(Some("p1"), Some("NaN"), Some(f64::NAN))),
        Some(stub(Some("p1"), None, None)),
        Some(PackageRef::Id("p1".to_owned())),
        Some(PackageRef::Id(String::new())),
        None,
    ];
    for shape in &shapes {
        let resolved = cache.resolve(shape.as_ref());
        assert!(!resolved.title.is_empty());
        assert!(resolved.price >= 0.0 && resolved.price.is_finite());
    }
}

// =============================================================
// Cache states
// =============================================================

#[test]
fn not_loaded_is_distinct_from_loaded_empty() {
    let empty = PackageCache::from_packages(Vec::new());
    assert!(empty.is_loaded());
    assert!(empty.is_empty());
    assert!(!PackageCache::NotLoaded.is_loaded());
    assert_ne!(empty, PackageCache::NotLoaded);
}

#[test]
fn catalog_entries_without_title_are_skipped() {
    let cache = PackageCache::from_packages(vec![Package { id: "p3".to_owned(), title: None, price: Some(1.0) }]);
    assert_eq!(cache.len(), 0);
    assert_eq!(cache.resolve(Some(&PackageRef::Id("p3".to_owned()))), ResolvedPackage::unknown());
}

#[test]
fn unrecognized_reference_shape_is_unknown() {
    let odd: PackageRef = serde_json::from_value(serde_json::json!(7)).unwrap();
    assert_eq!(catalog().resolve(Some(&odd)), ResolvedPackage::unknown());
}
