use crate::DomainError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Geographic scope of a public resolver catalog.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Region {
    #[default]
    HongKong,
    Usa,
    Germany,
}

impl Region {
    /// Fixed dispatch order when several regions are selected.
    pub const ALL: [Region; 3] = [Region::HongKong, Region::Usa, Region::Germany];

    /// Catalog key, also the file stem of the region's catalog document.
    pub fn key(&self) -> &'static str {
        match self {
            Self::HongKong => "hk",
            Self::Usa => "us",
            Self::Germany => "de",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Self::HongKong => "Hong Kong",
            Self::Usa => "USA",
            Self::Germany => "Germany",
        }
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

impl FromStr for Region {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim();
        Self::ALL
            .into_iter()
            .find(|r| r.key().eq_ignore_ascii_case(key))
            .ok_or_else(|| DomainError::UnknownRegion(s.to_string()))
    }
}

impl TryFrom<String> for Region {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Region> for String {
    fn from(region: Region) -> Self {
        region.key().to_string()
    }
}

/// Regions chosen for one invocation, derived once from the CLI flags.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegionSelection {
    regions: Vec<Region>,
}

impl RegionSelection {
    /// Selected regions in dispatch order. With no flag set the selection is
    /// exactly `[default]`.
    pub fn from_flags(hong_kong: bool, usa: bool, germany: bool, default: Region) -> Self {
        let flags = [hong_kong, usa, germany];
        let regions: Vec<Region> = Region::ALL
            .into_iter()
            .zip(flags)
            .filter_map(|(region, set)| set.then_some(region))
            .collect();

        if regions.is_empty() {
            return Self {
                regions: vec![default],
            };
        }

        Self { regions }
    }

    pub fn regions(&self) -> &[Region] {
        &self.regions
    }
}
