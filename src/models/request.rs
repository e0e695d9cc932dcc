use crate::error::{MokkaError, Result};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Immutable input to one resolution session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstallRequest {
    pub version: String,
    pub architecture: String,
    pub package_type: PackageType,
    pub check_latest: bool,
}

impl InstallRequest {
    pub fn new(version: impl Into<String>, architecture: impl Into<String>) -> Self {
        Self {
            version: version.into(),
            architecture: architecture.into(),
            package_type: PackageType::Jdk,
            check_latest: false,
        }
    }

    pub fn with_package_type(mut self, package_type: PackageType) -> Self {
        self.package_type = package_type;
        self
    }

    pub fn with_check_latest(mut self, check_latest: bool) -> Self {
        self.check_latest = check_latest;
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PackageType {
    Jdk,
    Jre,
}

impl FromStr for PackageType {
    type Err = MokkaError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "jdk" => Ok(PackageType::Jdk),
            "jre" => Ok(PackageType::Jre),
            _ => Err(MokkaError::UnknownPackageType(s.to_string())),
        }
    }
}

impl std::fmt::Display for PackageType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let pkg = match self {
            PackageType::Jdk => "jdk",
            PackageType::Jre => "jre",
        };
        write!(f, "{pkg}")
    }
}

/// JVM flavor published by the vendor. Adoptium only ships Hotspot builds,
/// but the API keeps the dimension explicit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Implementation {
    Hotspot,
}

impl Implementation {
    /// Lowercase form used as the `jvm_impl` query parameter.
    pub fn api_parameter(&self) -> &'static str {
        match self {
            Implementation::Hotspot => "hotspot",
        }
    }

    /// Capitalized form used in the tool cache folder name.
    pub fn folder_component(&self) -> &'static str {
        match self {
            Implementation::Hotspot => "Hotspot",
        }
    }
}

impl std::fmt::Display for Implementation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.api_parameter())
    }
}

/// Release track, derived from the requested version token. `16-ea` selects
/// the early-access channel; everything else is general availability.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReleaseChannel {
    GeneralAvailability,
    EarlyAccess,
}

impl ReleaseChannel {
    /// Value of the `release_type` query parameter.
    pub fn api_parameter(&self) -> &'static str {
        match self {
            ReleaseChannel::GeneralAvailability => "ga",
            ReleaseChannel::EarlyAccess => "ea",
        }
    }
}
