//! Ordered set algebra over package map keys.
//!
//! Every helper returns names in the iteration order of its first argument,
//! which is what makes report ordering deterministic.

use crate::sections::PackageMap;

/// Names in `a` that are not in `b`, in `a`'s order.
pub fn only_in<'a>(a: &'a PackageMap, b: &PackageMap) -> Vec<&'a str> {
    a.names().filter(|name| !b.contains(name)).collect()
}

/// Names in both `a` and `b`, in `a`'s order.
pub fn common<'a>(a: &'a PackageMap, b: &PackageMap) -> Vec<&'a str> {
    a.names().filter(|name| b.contains(name)).collect()
}
