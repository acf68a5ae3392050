//! Squarespace Commerce API version definitions.

use crate::error::ConfigError;
use std::fmt;
use std::str::FromStr;

/// Squarespace Commerce API version.
///
/// Every Commerce endpoint is currently served under `1.0`. The `Custom`
/// variant allows targeting a newer version, or an arbitrary segment when
/// pointing the client at a test double.
///
/// # Example
///
/// ```rust
/// use squarespace_commerce::ApiVersion;
///
/// let version: ApiVersion = "1.0".parse().unwrap();
/// assert_eq!(version, ApiVersion::V1_0);
/// assert_eq!(ApiVersion::latest().to_string(), "1.0");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum ApiVersion {
    /// API version 1.0.
    V1_0,
    /// Custom version string, used as-is in the request path.
    Custom(String),
}

impl ApiVersion {
    /// Returns the latest stable API version.
    #[must_use]
    pub const fn latest() -> Self {
        Self::V1_0
    }

    /// Returns the version segment as it appears in request URLs.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::V1_0 => "1.0",
            Self::Custom(version) => version,
        }
    }

    fn is_valid_custom(version: &str) -> bool {
        let mut parts = version.split('.');
        let (Some(major), Some(minor), None) = (parts.next(), parts.next(), parts.next()) else {
            return false;
        };
        [major, minor]
            .iter()
            .all(|part| !part.is_empty() && part.chars().all(|c| c.is_ascii_digit()))
    }
}

impl Default for ApiVersion {
    fn default() -> Self {
        Self::latest()
    }
}

impl fmt::Display for ApiVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ApiVersion {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        match s {
            "1.0" => Ok(Self::V1_0),
            _ if Self::is_valid_custom(s) => Ok(Self::Custom(s.to_string())),
            _ => Err(ConfigError::InvalidApiVersion {
                version: s.to_string(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_known_version() {
        assert_eq!("1.0".parse::<ApiVersion>().unwrap(), ApiVersion::V1_0);
    }

    #[test]
    fn test_parse_custom_version() {
        assert_eq!(
            "2.1".parse::<ApiVersion>().unwrap(),
            ApiVersion::Custom("2.1".to_string())
        );
    }

    #[test]
    fn test_parse_rejects_malformed_versions() {
        for bad in ["", "1", "1.", "v1.0", "1.0.0", "one.two"] {
            assert!(
                matches!(
                    bad.parse::<ApiVersion>(),
                    Err(ConfigError::InvalidApiVersion { .. })
                ),
                "expected {bad:?} to be rejected"
            );
        }
    }

    #[test]
    fn test_display_matches_path_segment() {
        assert_eq!(ApiVersion::V1_0.to_string(), "1.0");
        assert_eq!(ApiVersion::Custom(String::new()).as_str(), "");
    }

    #[test]
    fn test_default_is_latest() {
        assert_eq!(ApiVersion::default(), ApiVersion::latest());
    }
}
