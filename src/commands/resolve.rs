use crate::api::client::ManifestClient;
use crate::error::Result;
use crate::models::request::{Implementation, InstallRequest, PackageType};
use crate::platform;
use crate::resolver;
use crate::toolcache;
use log::info;

/// Resolves a version specification against the remote catalog and prints
/// the chosen build without installing anything.
pub struct ResolveCommand {
    client: ManifestClient,
    implementation: Implementation,
}

impl ResolveCommand {
    pub fn new(os: Option<String>) -> Self {
        let mut client = ManifestClient::new();
        if let Some(os) = os {
            client = client.with_os(os);
        }
        Self {
            client,
            implementation: Implementation::Hotspot,
        }
    }

    pub fn execute(
        &self,
        version: &str,
        architecture: Option<&str>,
        package_type: PackageType,
        json: bool,
    ) -> Result<()> {
        let architecture =
            architecture.map_or_else(platform::get_current_architecture, str::to_string);
        info!("Resolving '{version}' for {architecture} {package_type}");

        let request =
            InstallRequest::new(version, architecture).with_package_type(package_type);
        let resolved = resolver::resolve(&self.client, &request, self.implementation)?;
        let cache_key = toolcache::toolcache_folder_name(self.implementation, package_type);

        if json {
            let output = serde_json::json!({
                "version": resolved.version.to_string(),
                "release_name": resolved.release_name,
                "architecture": resolved.binary.architecture,
                "package_type": resolved.binary.image_type,
                "download_url": resolved.binary.package.link,
                "checksum": resolved.binary.package.checksum,
                "toolcache_key": cache_key,
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        } else {
            println!("Resolved {} -> {}", request.version, resolved.version);
            println!("  Release:      {}", resolved.release_name);
            println!("  Download:     {}", resolved.binary.package.link);
            if let Some(checksum) = &resolved.binary.package.checksum {
                println!("  Checksum:     {checksum}");
            }
            println!("  Cache folder: {cache_key}");
        }

        Ok(())
    }
}
