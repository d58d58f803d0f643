//! Storefront API version definitions.
//!
//! This module provides the [`ApiVersion`] enum for specifying which version
//! of the Storefront API to use.

use crate::error::ConfigError;
use std::fmt;
use std::str::FromStr;

/// Storefront API version.
///
/// Shopify releases new API versions quarterly (January, April, July, October).
/// This enum provides variants for the versions this client's fragments were
/// written against, plus an `Unstable` variant for development and a `Custom`
/// variant for any other calendar version.
///
/// The default is `2021-04`, the version whose schema still exposes
/// `priceV2` and `productByHandle`.
///
/// # Example
///
/// ```rust
/// use shopify_storefront::ApiVersion;
///
/// assert_eq!(ApiVersion::default(), ApiVersion::V2021_04);
///
/// let version: ApiVersion = "2021-07".parse().unwrap();
/// assert_eq!(version, ApiVersion::V2021_07);
///
/// assert_eq!(format!("{}", ApiVersion::V2021_04), "2021-04");
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum ApiVersion {
    /// API version 2021-01 (January 2021)
    V2021_01,
    /// API version 2021-04 (April 2021)
    #[default]
    V2021_04,
    /// API version 2021-07 (July 2021)
    V2021_07,
    /// API version 2021-10 (October 2021)
    V2021_10,
    /// API version 2022-01 (January 2022)
    V2022_01,
    /// API version 2022-04 (April 2022)
    V2022_04,
    /// Unstable API version for development and testing.
    Unstable,
    /// Custom version string for other calendar versions.
    Custom(String),
}

impl ApiVersion {
    /// Returns `true` if this is one of the named stable versions.
    ///
    /// Returns `false` for `Unstable` and `Custom` variants.
    #[must_use]
    pub const fn is_stable(&self) -> bool {
        !matches!(self, Self::Unstable | Self::Custom(_))
    }

    fn is_valid_version_format(s: &str) -> bool {
        let Some((year, month)) = s.split_once('-') else {
            return false;
        };

        if year.len() != 4 || !year.chars().all(|c| c.is_ascii_digit()) {
            return false;
        }

        // Shopify only releases in these months
        matches!(month, "01" | "04" | "07" | "10")
    }
}

impl PartialOrd for ApiVersion {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for ApiVersion {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        // Calendar order by rendered `YYYY-MM`, `unstable` last
        let key = |version: &Self| {
            (
                matches!(version, Self::Unstable),
                version.to_string(),
                matches!(version, Self::Custom(_)),
            )
        };
        key(self).cmp(&key(other))
    }
}

impl fmt::Display for ApiVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let version_str = match self {
            Self::V2021_01 => "2021-01",
            Self::V2021_04 => "2021-04",
            Self::V2021_07 => "2021-07",
            Self::V2021_10 => "2021-10",
            Self::V2022_01 => "2022-01",
            Self::V2022_04 => "2022-04",
            Self::Unstable => "unstable",
            Self::Custom(s) => s,
        };
        f.write_str(version_str)
    }
}

impl FromStr for ApiVersion {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim().to_lowercase();

        match s.as_str() {
            "2021-01" => Ok(Self::V2021_01),
            "2021-04" => Ok(Self::V2021_04),
            "2021-07" => Ok(Self::V2021_07),
            "2021-10" => Ok(Self::V2021_10),
            "2022-01" => Ok(Self::V2022_01),
            "2022-04" => Ok(Self::V2022_04),
            "unstable" => Ok(Self::Unstable),
            _ if Self::is_valid_version_format(&s) => Ok(Self::Custom(s)),
            _ => Err(ConfigError::InvalidApiVersion { version: s }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_version_is_2021_04() {
        assert_eq!(ApiVersion::default(), ApiVersion::V2021_04);
        assert_eq!(ApiVersion::default().to_string(), "2021-04");
    }

    #[test]
    fn test_api_version_parses_known_versions() {
        assert_eq!(
            "2021-01".parse::<ApiVersion>().unwrap(),
            ApiVersion::V2021_01
        );
        assert_eq!(
            " 2021-04 ".parse::<ApiVersion>().unwrap(),
            ApiVersion::V2021_04
        );
        assert_eq!(
            "UNSTABLE".parse::<ApiVersion>().unwrap(),
            ApiVersion::Unstable
        );
    }

    #[test]
    fn test_api_version_parses_other_calendar_versions_as_custom() {
        let version: ApiVersion = "2024-10".parse().unwrap();
        assert_eq!(version, ApiVersion::Custom("2024-10".to_string()));
        assert_eq!(version.to_string(), "2024-10");
        assert!(!version.is_stable());
    }

    #[test]
    fn test_api_version_rejects_invalid() {
        assert!("invalid".parse::<ApiVersion>().is_err());
        assert!("2021".parse::<ApiVersion>().is_err());
        assert!("2021-4".parse::<ApiVersion>().is_err());
        assert!("2021-02".parse::<ApiVersion>().is_err());
        assert!("21-04".parse::<ApiVersion>().is_err());
        assert!("2021-04-01".parse::<ApiVersion>().is_err());
    }

    #[test]
    fn test_version_ordering() {
        assert!(ApiVersion::V2021_01 < ApiVersion::V2021_04);
        assert!(ApiVersion::V2021_10 < ApiVersion::V2022_01);
        assert!(ApiVersion::V2022_04 < ApiVersion::Unstable);
        assert!(ApiVersion::Custom("2024-01".to_string()) < ApiVersion::Unstable);
        assert!(
            ApiVersion::Custom("2024-01".to_string()) < ApiVersion::Custom("2024-04".to_string())
        );
    }

    #[test]
    fn test_past_custom_versions_sort_before_named_versions() {
        let old: ApiVersion = "2019-10".parse().unwrap();
        assert!(old < ApiVersion::V2021_01);
        assert!(old < ApiVersion::V2022_04);

        let newer: ApiVersion = "2023-01".parse().unwrap();
        assert!(ApiVersion::V2022_04 < newer);
        assert!(newer < ApiVersion::Unstable);
    }

    #[test]
    fn test_ordering_agrees_with_equality() {
        let named = ApiVersion::V2021_04;
        let custom = ApiVersion::Custom("2021-04".to_string());
        assert_ne!(named, custom);
        assert_ne!(named.cmp(&custom), std::cmp::Ordering::Equal);
    }
}
