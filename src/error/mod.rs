mod exit_codes;

pub use exit_codes::get_exit_code;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum MokkaError {
    #[error("Invalid version specification: {0}")]
    InvalidVersionSpec(String),

    #[error("Unknown package type: {0}")]
    UnknownPackageType(String),

    #[error("Could not find satisfied version for SemVer '{spec}'{}", format_available(.available))]
    NoSatisfiedVersion {
        spec: String,
        available: Vec<String>,
    },

    #[error("Failed to fetch release manifest (page {page}): {reason}")]
    ManifestFetch { page: u32, reason: String },

    #[error("Failed to download JDK: {0}")]
    Download(String),

    #[error("Failed to store package in tool cache: {0}")]
    ToolCacheStore(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Http(#[from] attohttpc::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, MokkaError>;

fn format_available(available: &[String]) -> String {
    if available.is_empty() {
        String::new()
    } else {
        format!(". Available versions: {}", available.join(", "))
    }
}
