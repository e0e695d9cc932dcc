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

//! Normalization of loose, user-supplied version tokens.
//!
//! A token like `"16"`, `"16.0"`, `"x"` or `"8.x"` becomes an exact matching
//! range over catalog versions. A trailing `-ea` marker selects the
//! early-access release channel and is stripped before range construction.

use crate::error::{MokkaError, Result};
use crate::models::request::ReleaseChannel;
use crate::models::version::Version;

const EARLY_ACCESS_SUFFIX: &str = "-ea";
const WILDCARD: &str = "x";

/// A normalized version specification: the original token, the release
/// channel it implies, and the matching range derived from it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VersionSpec {
    raw: String,
    channel: ReleaseChannel,
    major: Option<u32>,
    minor: Option<u32>,
    patch: Option<u32>,
}

impl VersionSpec {
    pub fn parse(input: &str) -> Result<Self> {
        let raw = input.to_string();
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return Err(MokkaError::InvalidVersionSpec(
                "Version string cannot be empty".to_string(),
            ));
        }

        let (channel, remaining) = match trimmed.strip_suffix(EARLY_ACCESS_SUFFIX) {
            Some(stripped) => (ReleaseChannel::EarlyAccess, stripped),
            None => (ReleaseChannel::GeneralAvailability, trimmed),
        };

        // "x" alone means "latest": an unbounded range.
        if remaining == WILDCARD {
            return Ok(Self {
                raw,
                channel,
                major: None,
                minor: None,
                patch: None,
            });
        }

        // A trailing ".x" is equivalent to stopping at the prefix: "8.x" == "8".
        let mut prefix = remaining;
        while let Some(stripped) = prefix.strip_suffix(".x") {
            prefix = stripped;
        }
        if prefix.is_empty() {
            return Err(MokkaError::InvalidVersionSpec(raw));
        }

        let components: Vec<&str> = prefix.split('.').collect();
        if components.len() > 3 {
            return Err(MokkaError::InvalidVersionSpec(raw));
        }

        let mut parsed = [None; 3];
        for (i, component) in components.iter().enumerate() {
            let value = component
                .parse::<u32>()
                .map_err(|_| MokkaError::InvalidVersionSpec(raw.clone()))?;
            parsed[i] = Some(value);
        }

        Ok(Self {
            raw,
            channel,
            major: parsed[0],
            minor: parsed[1],
            patch: parsed[2],
        })
    }

    /// The original token as supplied by the caller, kept for diagnostics.
    pub fn raw(&self) -> &str {
        &self.raw
    }

    pub fn channel(&self) -> ReleaseChannel {
        self.channel
    }

    /// Whether a catalog version falls inside this range. Build metadata and
    /// pre-release tags never participate in range matching.
    pub fn satisfies(&self, version: &Version) -> bool {
        if let Some(major) = self.major
            && major != version.major
        {
            return false;
        }
        if let Some(minor) = self.minor
            && minor != version.minor
        {
            return false;
        }
        if let Some(patch) = self.patch
            && patch != version.patch
        {
            return false;
        }
        true
    }
}
