//! Platform tags and the platform compatibility filter.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize};

use super::Item;

/// Token accepted in place of a platform tag to disable filtering.
pub const ALL_PLATFORMS: &str = "all";

/// A watch hardware platform an app can be built for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    Aplite,
    Basalt,
    Chalk,
    Diorite,
}

impl Platform {
    pub const ALL: [Platform; 4] = [
        Platform::Aplite,
        Platform::Basalt,
        Platform::Chalk,
        Platform::Diorite,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Platform::Aplite => "aplite",
            Platform::Basalt => "basalt",
            Platform::Chalk => "chalk",
            Platform::Diorite => "diorite",
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Deserialize a platform tag list, dropping tags outside the known set so
/// one app built for newer hardware does not invalidate a whole catalog.
pub(crate) fn known_platforms<'de, D>(deserializer: D) -> Result<Vec<Platform>, D::Error>
where
    D: Deserializer<'de>,
{
    let tags = Vec::<String>::deserialize(deserializer)?;
    Ok(tags.iter().filter_map(|tag| tag.parse().ok()).collect())
}

/// Error returned when a token is not a recognized platform.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownPlatform(pub String);

impl fmt::Display for UnknownPlatform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown platform: {}", self.0)
    }
}

impl std::error::Error for UnknownPlatform {}

impl FromStr for Platform {
    type Err = UnknownPlatform;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Platform::ALL
            .into_iter()
            .find(|p| p.as_str() == s)
            .ok_or_else(|| UnknownPlatform(s.to_string()))
    }
}

/// Which items a listing should include, by platform support.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum PlatformFilter {
    /// The `"all"` wildcard: every item passes.
    #[default]
    All,
    Only(Platform),
}

impl PlatformFilter {
    /// True iff the filter is the wildcard or the item supports the platform.
    pub fn accepts(&self, item: &Item) -> bool {
        match self {
            PlatformFilter::All => true,
            PlatformFilter::Only(platform) => item.supports(*platform),
        }
    }
}

impl FromStr for PlatformFilter {
    type Err = UnknownPlatform;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == ALL_PLATFORMS {
            return Ok(PlatformFilter::All);
        }
        s.parse().map(PlatformFilter::Only)
    }
}

impl fmt::Display for PlatformFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlatformFilter::All => f.write_str(ALL_PLATFORMS),
            PlatformFilter::Only(platform) => fmt::Display::fmt(platform, f),
        }
    }
}
