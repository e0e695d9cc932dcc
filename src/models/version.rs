use crate::error::{MokkaError, Result};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::str::FromStr;

/// An exact release version as published in the catalog, e.g. `16.0.2+7`.
///
/// Ordering follows semantic-version precedence: the core triple first, then
/// the pre-release tag (a release sorts above any pre-release of the same
/// triple), then the build metadata compared numerically.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Version {
    pub major: u32,
    pub minor: u32,
    pub patch: u32,
    pub pre_release: Option<String>,
    pub build: Option<Vec<u32>>,
}

impl Version {
    pub fn new(major: u32, minor: u32, patch: u32) -> Self {
        Self {
            major,
            minor,
            patch,
            pre_release: None,
            build: None,
        }
    }

    pub fn with_build(mut self, build: Vec<u32>) -> Self {
        self.build = Some(build);
        self
    }

    pub fn with_pre_release(mut self, pre_release: String) -> Self {
        self.pre_release = Some(pre_release);
        self
    }
}

impl Ord for Version {
    fn cmp(&self, other: &Self) -> Ordering {
        let triple = (self.major, self.minor, self.patch);
        let other_triple = (other.major, other.minor, other.patch);
        triple
            .cmp(&other_triple)
            .then_with(|| match (&self.pre_release, &other.pre_release) {
                (None, None) => Ordering::Equal,
                (None, Some(_)) => Ordering::Greater,
                (Some(_), None) => Ordering::Less,
                (Some(a), Some(b)) => a.cmp(b),
            })
            .then_with(|| {
                let empty = Vec::new();
                let a = self.build.as_ref().unwrap_or(&empty);
                let b = other.build.as_ref().unwrap_or(&empty);
                a.cmp(b)
            })
    }
}

impl PartialOrd for Version {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl FromStr for Version {
    type Err = MokkaError;

    fn from_str(s: &str) -> Result<Self> {
        let (version_part, build_part) = match s.split_once('+') {
            Some((v, b)) => (v, Some(b)),
            None => (s, None),
        };

        let (core_part, pre_part) = match version_part.split_once('-') {
            Some((c, p)) => (c, Some(p)),
            None => (version_part, None),
        };

        let components: Vec<&str> = core_part.split('.').collect();
        if components.is_empty() || components.len() > 3 || components[0].is_empty() {
            return Err(MokkaError::InvalidVersionSpec(s.to_string()));
        }

        let mut numbers = [0u32; 3];
        for (i, component) in components.iter().enumerate() {
            numbers[i] = component
                .parse::<u32>()
                .map_err(|_| MokkaError::InvalidVersionSpec(s.to_string()))?;
        }

        let build = match build_part {
            Some(b) => {
                let parts: std::result::Result<Vec<u32>, _> =
                    b.split('.').map(|p| p.parse::<u32>()).collect();
                Some(parts.map_err(|_| MokkaError::InvalidVersionSpec(s.to_string()))?)
            }
            None => None,
        };

        Ok(Self {
            major: numbers[0],
            minor: numbers[1],
            patch: numbers[2],
            pre_release: pre_part.map(|p| p.to_string()),
            build,
        })
    }
}

impl std::fmt::Display for Version {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)?;

        if let Some(pre) = &self.pre_release {
            write!(f, "-{pre}")?;
        }

        if let Some(build) = &self.build {
            let parts: Vec<String> = build.iter().map(|b| b.to_string()).collect();
            write!(f, "+{}", parts.join("."))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_full_version_with_build() {
        let v = Version::from_str("16.0.2+7").unwrap();
        assert_eq!(v.major, 16);
        assert_eq!(v.minor, 0);
        assert_eq!(v.patch, 2);
        assert_eq!(v.build, Some(vec![7]));
        assert_eq!(v.pre_release, None);
    }

    #[test]
    fn test_parse_pre_release() {
        let v = Version::from_str("17.0.0-beta+33").unwrap();
        assert_eq!(v.pre_release, Some("beta".to_string()));
        assert_eq!(v.build, Some(vec![33]));
    }

    #[test]
    fn test_parse_partial_components_default_to_zero() {
        let v = Version::from_str("16+36").unwrap();
        assert_eq!((v.major, v.minor, v.patch), (16, 0, 0));
        assert_eq!(v.build, Some(vec![36]));
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!(Version::from_str("abc").is_err());
        assert!(Version::from_str("1.2.3.4").is_err());
        assert!(Version::from_str("").is_err());
        assert!(Version::from_str("16.0.2+seven").is_err());
    }

    #[test]
    fn test_ordering_core_triple_first() {
        let older = Version::from_str("8.0.302+8").unwrap();
        let newer = Version::from_str("16.0.2+7").unwrap();
        assert!(newer > older);
    }

    #[test]
    fn test_ordering_build_is_numeric_tiebreak() {
        let b9 = Version::from_str("16.0.2+9").unwrap();
        let b10 = Version::from_str("16.0.2+10").unwrap();
        assert!(b10 > b9);
    }

    #[test]
    fn test_ordering_release_beats_pre_release() {
        let ga = Version::from_str("17.0.0").unwrap();
        let ea = Version::from_str("17.0.0-beta+33").unwrap();
        assert!(ga > ea);
    }

    #[test]
    fn test_display_round_trip() {
        let v = Version::from_str("16.0.2+7").unwrap();
        assert_eq!(v.to_string(), "16.0.2+7");
    }
}
