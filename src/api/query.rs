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

use crate::models::request::{Implementation, PackageType, ReleaseChannel};

/// Query for one page of the `assets/version` endpoint.
///
/// Parameter names, fixed values and their order are a compatibility
/// surface of the Adoptium API; `params` keeps them in one place.
#[derive(Debug, Clone)]
pub struct AssetQuery {
    pub os: String,
    pub architecture: String,
    pub image_type: PackageType,
    pub release_type: ReleaseChannel,
    pub jvm_impl: Implementation,
    pub page_size: u32,
    pub page: u32,
}

impl AssetQuery {
    /// The ordered parameter list, fixed values first.
    pub fn params(&self) -> Vec<(&'static str, String)> {
        vec![
            ("project", "jdk".to_string()),
            ("vendor", "adoptium".to_string()),
            ("heap_size", "normal".to_string()),
            ("sort_method", "DEFAULT".to_string()),
            ("sort_order", "DESC".to_string()),
            ("os", self.os.clone()),
            ("architecture", self.architecture.clone()),
            ("image_type", self.image_type.to_string()),
            ("release_type", self.release_type.api_parameter().to_string()),
            ("jvm_impl", self.jvm_impl.api_parameter().to_string()),
            ("page_size", self.page_size.to_string()),
            ("page", self.page.to_string()),
        ]
    }

    /// Renders the query string exactly as it appears on the wire. All
    /// parameter values are plain tokens, so no escaping is involved.
    pub fn to_query_string(&self) -> String {
        self.params()
            .iter()
            .map(|(name, value)| format!("{name}={value}"))
            .collect::<Vec<_>>()
            .join("&")
    }

    /// The query for the page after this one.
    pub fn next_page(&self) -> Self {
        let mut next = self.clone();
        next.page += 1;
        next
    }
}
