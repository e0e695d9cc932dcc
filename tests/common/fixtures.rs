//! Manifest fixtures shared by the integration tests.
//!
//! The catalog mirrors the shape of real `assets/version` responses:
//! newest-first, with one release (9.0.8+10) that ships no binaries at all.

use serde_json::json;

pub fn release(semver: &str, binaries: Vec<serde_json::Value>) -> serde_json::Value {
    json!({
        "release_name": format!("jdk-{semver}"),
        "version_data": { "semver": semver },
        "binaries": binaries,
    })
}

pub fn binary(os: &str, architecture: &str, image_type: &str, semver: &str) -> serde_json::Value {
    json!({
        "os": os,
        "architecture": architecture,
        "image_type": image_type,
        "jvm_impl": "hotspot",
        "heap_size": "normal",
        "package": {
            "name": format!("OpenJDK-{image_type}_{architecture}_{os}_hotspot_{semver}.tar.gz"),
            "link": format!("https://example.com/{semver}/{image_type}_{architecture}.tar.gz"),
            "checksum": "974d3acef0b7193f541acb61b76e81670890551366625d4f6ca01b91ac152ce0",
            "size": 192714635u64,
        }
    })
}

/// The standard test catalog, newest-first like the remote DESC sort.
pub fn manifest_page(os: &str) -> serde_json::Value {
    json!([
        release(
            "16.0.2+7",
            vec![
                binary(os, "x64", "jdk", "16.0.2+7"),
                binary(os, "x64", "jre", "16.0.2+7"),
            ]
        ),
        release("16.0.1+9", vec![binary(os, "x64", "jdk", "16.0.1+9")]),
        release("11.0.12+7", vec![binary(os, "x64", "jdk", "11.0.12+7")]),
        release("9.0.8+10", vec![]),
        release("8.0.302+8", vec![binary(os, "x64", "jdk", "8.0.302+8")]),
    ])
}

pub fn manifest_page_body(os: &str) -> String {
    manifest_page(os).to_string()
}

/// Number of releases in the standard catalog page.
pub fn manifest_page_len() -> usize {
    manifest_page("mac").as_array().unwrap().len()
}
