pub mod client;
pub mod models;
pub mod query;

pub use client::ManifestClient;
pub use models::{ArtifactPackage, Binary, ReleaseEntry, VersionData};
pub use query::AssetQuery;
