//! Installation orchestration over the tool cache and download pipeline.
//!
//! The resolver produces a `ResolvedPackage`; everything after that — the
//! transfer, archive extraction and cache placement — happens behind the
//! `DownloadPipeline` and `ToolCache` seams.

use crate::api::client::ManifestClient;
use crate::error::Result;
use crate::models::request::{Implementation, InstallRequest};
use crate::models::version::Version;
use crate::resolver::{self, ResolvedPackage};
use crate::toolcache::{self, ToolCache};
use log::{debug, info};
use std::path::{Path, PathBuf};

/// External transfer/extract collaborator. Given the selected binary's
/// download descriptor, it produces the extracted installation tree.
pub trait DownloadPipeline {
    fn fetch_and_extract(&self, package: &ResolvedPackage, dest: &Path) -> Result<PathBuf>;
}

/// Outcome of an installation, including whether the cache already had it.
#[derive(Debug, Clone)]
pub struct InstalledJdk {
    pub version: Version,
    pub path: PathBuf,
    pub from_cache: bool,
}

pub struct Installer<'a, C: ToolCache, D: DownloadPipeline> {
    client: &'a ManifestClient,
    cache: &'a C,
    pipeline: &'a D,
    implementation: Implementation,
    work_dir: PathBuf,
}

impl<'a, C: ToolCache, D: DownloadPipeline> Installer<'a, C, D> {
    pub fn new(
        client: &'a ManifestClient,
        cache: &'a C,
        pipeline: &'a D,
        implementation: Implementation,
        work_dir: PathBuf,
    ) -> Self {
        Self {
            client,
            cache,
            pipeline,
            implementation,
            work_dir,
        }
    }

    /// Installs the requested build, consulting the cache first unless
    /// `check_latest` forces a fresh resolution against the remote catalog.
    pub fn ensure_installed(&self, request: &InstallRequest) -> Result<InstalledJdk> {
        let key = toolcache::toolcache_folder_name(self.implementation, request.package_type);

        if !request.check_latest
            && let Some(path) = self.cache.find(&key, &request.version)
        {
            debug!("Cache hit for {key} {}", request.version);
            return Ok(InstalledJdk {
                version: request.version.parse()?,
                path,
                from_cache: true,
            });
        }

        let resolved = resolver::resolve(self.client, request, self.implementation)?;
        let version_tag = resolved.version.to_string();

        // The remote resolution may land on a build that is already cached.
        if let Some(path) = self.cache.find(&key, &version_tag) {
            debug!("Cache hit for {key} {version_tag} after resolution");
            return Ok(InstalledJdk {
                version: resolved.version,
                path,
                from_cache: true,
            });
        }

        info!(
            "Installing {} from {}",
            resolved.release_name, resolved.binary.package.link
        );
        let extracted = self.pipeline.fetch_and_extract(&resolved, &self.work_dir)?;
        let path = self.cache.store(&key, &version_tag, &extracted)?;

        Ok(InstalledJdk {
            version: resolved.version,
            path,
            from_cache: false,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::MokkaError;
    use crate::models::request::PackageType;
    use std::cell::RefCell;
    use std::collections::HashMap;

    struct FakeCache {
        entries: RefCell<HashMap<(String, String), PathBuf>>,
        stores: RefCell<u32>,
    }

    impl FakeCache {
        fn new() -> Self {
            Self {
                entries: RefCell::new(HashMap::new()),
                stores: RefCell::new(0),
            }
        }

        fn seed(&self, key: &str, version: &str) {
            self.entries.borrow_mut().insert(
                (key.to_string(), version.to_string()),
                PathBuf::from(format!("/cache/{key}/{version}")),
            );
        }
    }

    impl ToolCache for FakeCache {
        fn find(&self, key: &str, version: &str) -> Option<PathBuf> {
            self.entries
                .borrow()
                .get(&(key.to_string(), version.to_string()))
                .cloned()
        }

        fn store(&self, key: &str, version: &str, _extracted: &Path) -> Result<PathBuf> {
            *self.stores.borrow_mut() += 1;
            let path = PathBuf::from(format!("/cache/{key}/{version}"));
            self.entries
                .borrow_mut()
                .insert((key.to_string(), version.to_string()), path.clone());
            Ok(path)
        }
    }

    struct FakePipeline {
        downloads: RefCell<u32>,
    }

    impl DownloadPipeline for FakePipeline {
        fn fetch_and_extract(&self, _package: &ResolvedPackage, dest: &Path) -> Result<PathBuf> {
            *self.downloads.borrow_mut() += 1;
            Ok(dest.join("extracted"))
        }
    }

    fn catalog_json() -> String {
        r#"[
          {
            "release_name": "jdk-16.0.2+7",
            "version_data": { "semver": "16.0.2+7" },
            "binaries": [
              {
                "os": "mac",
                "architecture": "x64",
                "image_type": "jdk",
                "package": {
                  "name": "OpenJDK16U-jdk_x64_mac_hotspot_16.0.2_7.tar.gz",
                  "link": "https://example.com/16.tar.gz"
                }
              }
            ]
          }
        ]"#
        .to_string()
    }

    fn mock_catalog(server: &mut mockito::ServerGuard) -> Vec<mockito::Mock> {
        let page0 = server
            .mock("GET", mockito::Matcher::Regex("assets/version".to_string()))
            .match_query(mockito::Matcher::UrlEncoded("page".into(), "0".into()))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(catalog_json())
            .create();
        let page1 = server
            .mock("GET", mockito::Matcher::Regex("assets/version".to_string()))
            .match_query(mockito::Matcher::UrlEncoded("page".into(), "1".into()))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body("[]")
            .create();
        vec![page0, page1]
    }

    #[test]
    fn test_cache_hit_skips_resolution_entirely() {
        // No HTTP server at all: a cache hit must not touch the network.
        let client = ManifestClient::new().with_base_url("http://127.0.0.1:1".to_string());
        let cache = FakeCache::new();
        let key = toolcache::toolcache_folder_name(Implementation::Hotspot, PackageType::Jdk);
        cache.seed(&key, "16.0.2+7");
        let pipeline = FakePipeline {
            downloads: RefCell::new(0),
        };
        let installer = Installer::new(
            &client,
            &cache,
            &pipeline,
            Implementation::Hotspot,
            PathBuf::from("/tmp/work"),
        );

        let request = InstallRequest::new("16.0.2+7", "x64");
        let installed = installer.ensure_installed(&request).unwrap();

        assert!(installed.from_cache);
        assert_eq!(*pipeline.downloads.borrow(), 0);
        assert_eq!(installed.version.to_string(), "16.0.2+7");
    }

    #[test]
    fn test_cache_miss_downloads_and_stores() {
        let mut server = mockito::Server::new();
        let _mocks = mock_catalog(&mut server);

        let client = ManifestClient::new()
            .with_base_url(server.url())
            .with_os("mac".to_string());
        let cache = FakeCache::new();
        let pipeline = FakePipeline {
            downloads: RefCell::new(0),
        };
        let installer = Installer::new(
            &client,
            &cache,
            &pipeline,
            Implementation::Hotspot,
            PathBuf::from("/tmp/work"),
        );

        let request = InstallRequest::new("16", "x64");
        let installed = installer.ensure_installed(&request).unwrap();

        assert!(!installed.from_cache);
        assert_eq!(installed.version.to_string(), "16.0.2+7");
        assert_eq!(*pipeline.downloads.borrow(), 1);
        assert_eq!(*cache.stores.borrow(), 1);
        assert_eq!(
            installed.path,
            PathBuf::from("/cache/Java_Adoptium-Hotspot_jdk/16.0.2+7")
        );
    }

    #[test]
    fn test_check_latest_forces_resolution() {
        let mut server = mockito::Server::new();
        let _mocks = mock_catalog(&mut server);

        let client = ManifestClient::new()
            .with_base_url(server.url())
            .with_os("mac".to_string());
        let cache = FakeCache::new();
        let key = toolcache::toolcache_folder_name(Implementation::Hotspot, PackageType::Jdk);
        // Stale spec-keyed entry that must be ignored under check_latest
        cache.seed(&key, "16");
        cache.seed(&key, "16.0.2+7");
        let pipeline = FakePipeline {
            downloads: RefCell::new(0),
        };
        let installer = Installer::new(
            &client,
            &cache,
            &pipeline,
            Implementation::Hotspot,
            PathBuf::from("/tmp/work"),
        );

        let request = InstallRequest::new("16", "x64").with_check_latest(true);
        let installed = installer.ensure_installed(&request).unwrap();

        // Resolution ran, then hit the cache under the resolved tag
        assert!(installed.from_cache);
        assert_eq!(installed.version.to_string(), "16.0.2+7");
        assert_eq!(*pipeline.downloads.borrow(), 0);
    }

    #[test]
    fn test_unresolvable_request_propagates_error() {
        let mut server = mockito::Server::new();
        let _mocks = mock_catalog(&mut server);

        let client = ManifestClient::new()
            .with_base_url(server.url())
            .with_os("mac".to_string());
        let cache = FakeCache::new();
        let pipeline = FakePipeline {
            downloads: RefCell::new(0),
        };
        let installer = Installer::new(
            &client,
            &cache,
            &pipeline,
            Implementation::Hotspot,
            PathBuf::from("/tmp/work"),
        );

        let request = InstallRequest::new("7.x", "x64");
        let result = installer.ensure_installed(&request);
        assert!(matches!(
            result,
            Err(MokkaError::NoSatisfiedVersion { .. })
        ));
        assert_eq!(*pipeline.downloads.borrow(), 0);
    }
}
