//! Operating-system identification.
//!
//! The index branches its name-derivation strategy on the host operating
//! system, resolved once and injected rather than queried per file.

use crate::error::{IndexError, Result};

/// Normalized operating-system family.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OperatingSystem {
    Windows,
    MacOs,
    Linux,
}

impl OperatingSystem {
    /// Maps a raw platform identifier string to a normalized value.
    ///
    /// Accepts the identifiers reported by `std::env::consts::OS`; anything
    /// else is an error rather than a silent fallback.
    pub fn from_platform(platform: &str) -> Result<Self> {
        match platform {
            "windows" => Ok(Self::Windows),
            "macos" => Ok(Self::MacOs),
            "linux" => Ok(Self::Linux),
            other => Err(IndexError::UnsupportedPlatform(other.to_string())),
        }
    }

    /// The operating system this process is running on.
    pub fn current() -> Result<Self> {
        Self::from_platform(std::env::consts::OS)
    }
}

/// Opaque operating-system version descriptor.
///
/// Version detection is an external collaborator; the index only hands the
/// value through to the discovery routine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OperatingSystemVersion(String);

impl OperatingSystemVersion {
    pub fn new(version: impl Into<String>) -> Self {
        Self(version.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_platform_strings_map_to_families() {
        assert_eq!(
            OperatingSystem::from_platform("windows").unwrap(),
            OperatingSystem::Windows
        );
        assert_eq!(
            OperatingSystem::from_platform("macos").unwrap(),
            OperatingSystem::MacOs
        );
        assert_eq!(
            OperatingSystem::from_platform("linux").unwrap(),
            OperatingSystem::Linux
        );
    }

    #[test]
    fn unknown_platform_string_is_an_error() {
        let error = OperatingSystem::from_platform("freebsd").expect_err("unsupported");
        match error {
            IndexError::UnsupportedPlatform(platform) => assert_eq!(platform, "freebsd"),
            other => panic!("expected unsupported platform, got: {other:?}"),
        }
    }

    #[test]
    fn version_descriptor_is_passed_through_verbatim() {
        let version = OperatingSystemVersion::new("10.0.22631");
        assert_eq!(version.as_str(), "10.0.22631");
    }
}
