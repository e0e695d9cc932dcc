//! Tool cache identity and the boundary to the host's cache store.
//!
//! The cache key namespaces installations by vendor, JVM implementation and
//! package type only. Versions are distinguished by the caller-supplied tag
//! when the key is used for an actual lookup or store.

use crate::error::Result;
use crate::models::request::{Implementation, PackageType};
use std::path::{Path, PathBuf};

const TOOLCACHE_NAMESPACE: &str = "Java";
const VENDOR: &str = "Adoptium";

/// Derives the stable cache folder name, e.g. `Java_Adoptium-Hotspot_jdk`.
/// Pure: identical inputs always yield the identical key.
pub fn toolcache_folder_name(implementation: Implementation, package_type: PackageType) -> String {
    format!(
        "{TOOLCACHE_NAMESPACE}_{VENDOR}-{}_{package_type}",
        implementation.folder_component()
    )
}

/// The host's installation cache. Mokka only derives the key/version pair;
/// the store itself lives outside this crate.
pub trait ToolCache {
    /// Returns the installation directory if the pair is already cached.
    fn find(&self, key: &str, version: &str) -> Option<PathBuf>;

    /// Installs an extracted tree under the namespaced key and version and
    /// returns the final location, retrievable later by the same pair.
    fn store(&self, key: &str, version: &str, extracted: &Path) -> Result<PathBuf>;
}
