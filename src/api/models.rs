use serde::{Deserialize, Serialize};

/// One release as returned by the Adoptium `assets/version` endpoint.
///
/// The endpoint returns these newest-first (the query requests a DESC sort);
/// that order is preserved verbatim because selection scans best-first.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReleaseEntry {
    pub release_name: String,
    pub version_data: VersionData,
    #[serde(default)]
    pub binaries: Vec<Binary>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VersionData {
    pub semver: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub major: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub minor: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub security: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub build: Option<u32>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Binary {
    pub os: String,
    pub architecture: String,
    pub image_type: String,
    pub package: ArtifactPackage,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub jvm_impl: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub heap_size: Option<String>,
}

/// Download descriptor handed to the download/extract pipeline.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArtifactPackage {
    pub name: String,
    pub link: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub checksum: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub checksum_link: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<u64>,
}
