//! Package lookup cache and package-reference resolution.
//!
//! DESIGN
//! ======
//! Payments reference their package in three shapes (populated object,
//! id-only object, bare id). Resolution folds all of them into a
//! [`ResolvedPackage`] and never fails: anything unresolvable becomes
//! [`ResolvedPackage::unknown`]. The cache is filled once per page load and
//! keeps "not yet loaded" distinct from "loaded but empty".

#[cfg(test)]
#[path = "packages_test.rs"]
mod packages_test;

use std::collections::HashMap;

use crate::net::types::{Package, PackageRef};

/// Title shown when a package reference cannot be resolved.
pub const UNKNOWN_PACKAGE_TITLE: &str = "Unknown Package";

/// Uniform `{title, price}` view of a package reference.
#[derive(Clone, Debug, PartialEq)]
pub struct ResolvedPackage {
    pub title: String,
    /// Always finite and `>= 0`.
    pub price: f64,
}

impl ResolvedPackage {
    pub fn new(title: impl Into<String>, price: Option<f64>) -> Self {
        Self { title: title.into(), price: sanitize_price(price) }
    }

    pub fn unknown() -> Self {
        Self { title: UNKNOWN_PACKAGE_TITLE.to_owned(), price: 0.0 }
    }
}

fn sanitize_price(price: Option<f64>) -> f64 {
    match price {
        Some(p) if p.is_finite() && p > 0.0 => p,
        _ => 0.0,
    }
}

/// Client-side package table keyed by package id.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum PackageCache {
    /// The catalog has not been fetched (or the fetch failed).
    #[default]
    NotLoaded,
    Loaded(HashMap<String, ResolvedPackage>),
}

impl PackageCache {
    /// Build a loaded cache from the catalog. Entries without a title are
    /// skipped so lookups fall back instead of showing a blank title.
    pub fn from_packages(packages: Vec<Package>) -> Self {
        let table = packages
            .into_iter()
            .filter_map(|pkg| {
                let title = pkg.title.filter(|t| !t.trim().is_empty())?;
                Some((pkg.id, ResolvedPackage::new(title, pkg.price)))
            })
            .collect();
        Self::Loaded(table)
    }

    pub fn is_loaded(&self) -> bool {
        matches!(self, Self::Loaded(_))
    }

    pub fn len(&self) -> usize {
        match self {
            Self::NotLoaded => 0,
            Self::Loaded(table) => table.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn get(&self, package_id: &str) -> Option<&ResolvedPackage> {
        match self {
            Self::NotLoaded => None,
            Self::Loaded(table) => table.get(package_id),
        }
    }

    /// Resolve a payment's package reference.
    ///
    /// A populated object (non-empty title) wins over any cached entry with
    /// the same id. Id-only objects and bare ids go through the cache.
    pub fn resolve(&self, reference: Option<&PackageRef>) -> ResolvedPackage {
        let id = match reference {
            Some(PackageRef::Object(stub)) => {
                if let Some(title) = stub.title.as_deref().filter(|t| !t.is_empty()) {
                    return ResolvedPackage::new(title, stub.price);
                }
                stub.id.as_deref()
            }
            Some(PackageRef::Id(id)) => Some(id.as_str()),
            Some(PackageRef::Other(_)) | None => None,
        };
        id.and_then(|id| self.get(id))
            .cloned()
            .unwrap_or_else(ResolvedPackage::unknown)
    }
}
