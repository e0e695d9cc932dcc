// Copyright 2025 dentsusoken
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Selection of the best-matching release out of a fetched catalog.
//!
//! The catalog arrives newest-first, so the first entry whose version
//! satisfies the requested range is the winner. If that entry carries no
//! binary for the requested architecture/package type, resolution fails
//! outright instead of falling back to an older release: the newest nominal
//! match wins or the whole session fails.

use crate::api::client::ManifestClient;
use crate::api::models::{Binary, ReleaseEntry};
use crate::error::{MokkaError, Result};
use crate::models::request::{Implementation, InstallRequest, PackageType};
use crate::models::version::Version;
use crate::version::VersionSpec;
use log::{debug, warn};
use std::str::FromStr;

/// The chosen release together with the binary to download.
#[derive(Debug, Clone)]
pub struct ResolvedPackage {
    pub version: Version,
    pub release_name: String,
    pub binary: Binary,
}

/// Picks the first catalog entry satisfying the range that ships a binary
/// for the requested architecture and package type. Pure over its inputs.
pub fn select_best_match(
    catalog: &[ReleaseEntry],
    spec: &VersionSpec,
    architecture: &str,
    package_type: PackageType,
) -> Result<ResolvedPackage> {
    let image_type = package_type.to_string();
    let no_satisfied_version = || MokkaError::NoSatisfiedVersion {
        spec: spec.raw().to_string(),
        available: catalog
            .iter()
            .map(|e| e.version_data.semver.clone())
            .collect(),
    };

    for entry in catalog {
        let version = match Version::from_str(&entry.version_data.semver) {
            Ok(version) => version,
            Err(_) => {
                warn!(
                    "Skipping release '{}' with unparseable version '{}'",
                    entry.release_name, entry.version_data.semver
                );
                continue;
            }
        };

        if !spec.satisfies(&version) {
            continue;
        }

        debug!("Best range match: {} ({})", entry.release_name, version);

        let binary = entry
            .binaries
            .iter()
            .find(|b| b.architecture == architecture && b.image_type == image_type);

        // First satisfying match wins or the whole resolution fails; an
        // older satisfying entry is never considered.
        return match binary {
            Some(binary) => Ok(ResolvedPackage {
                version,
                release_name: entry.release_name.clone(),
                binary: binary.clone(),
            }),
            None => Err(no_satisfied_version()),
        };
    }

    Err(no_satisfied_version())
}

/// Full resolution session: normalize the requested spec, fetch the catalog
/// and select the best match.
pub fn resolve(
    client: &ManifestClient,
    request: &InstallRequest,
    implementation: Implementation,
) -> Result<ResolvedPackage> {
    let spec = VersionSpec::parse(&request.version)?;
    let catalog = client.fetch_catalog(request, implementation, spec.channel())?;
    debug!(
        "Fetched {} releases for spec '{}'",
        catalog.len(),
        spec.raw()
    );
    select_best_match(&catalog, &spec, &request.architecture, request.package_type)
}
