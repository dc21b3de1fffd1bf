//! Odoo release series and editions
//!
//! Both are closed enumerations. Their string forms are the suffixes used in
//! the packaged data file names (`addons-16.0-ce.txt`), so a new series is one
//! enum case plus its two data files.

use crate::errors::AddonsError;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Addon manifest versions carry the series as their first two components,
/// followed by the addon's own three-part version: `16.0.1.2.3`.
static ADDON_VERSION_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(\d+\.\d+)\.\d+\.\d+\.\d+$").expect("valid addon version regex"));

/// Odoo release line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum OdooSeries {
    #[serde(rename = "8.0")]
    V8_0,
    #[serde(rename = "9.0")]
    V9_0,
    #[serde(rename = "10.0")]
    V10_0,
    #[serde(rename = "11.0")]
    V11_0,
    #[serde(rename = "12.0")]
    V12_0,
    #[serde(rename = "13.0")]
    V13_0,
    #[serde(rename = "14.0")]
    V14_0,
    #[serde(rename = "15.0")]
    V15_0,
    #[serde(rename = "16.0")]
    V16_0,
    #[serde(rename = "17.0")]
    V17_0,
    #[serde(rename = "18.0")]
    V18_0,
}

impl OdooSeries {
    /// Every supported series, oldest first
    pub const ALL: [OdooSeries; 11] = [
        OdooSeries::V8_0,
        OdooSeries::V9_0,
        OdooSeries::V10_0,
        OdooSeries::V11_0,
        OdooSeries::V12_0,
        OdooSeries::V13_0,
        OdooSeries::V14_0,
        OdooSeries::V15_0,
        OdooSeries::V16_0,
        OdooSeries::V17_0,
        OdooSeries::V18_0,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            OdooSeries::V8_0 => "8.0",
            OdooSeries::V9_0 => "9.0",
            OdooSeries::V10_0 => "10.0",
            OdooSeries::V11_0 => "11.0",
            OdooSeries::V12_0 => "12.0",
            OdooSeries::V13_0 => "13.0",
            OdooSeries::V14_0 => "14.0",
            OdooSeries::V15_0 => "15.0",
            OdooSeries::V16_0 => "16.0",
            OdooSeries::V17_0 => "17.0",
            OdooSeries::V18_0 => "18.0",
        }
    }

    /// Oldest supported series (the last one licensed AGPL-3 in Community)
    pub fn oldest() -> Self {
        OdooSeries::ALL[0]
    }

    pub fn latest() -> Self {
        OdooSeries::ALL[OdooSeries::ALL.len() - 1]
    }

    /// Detect the series from an addon manifest version.
    ///
    /// `"16.0.1.0.0"` gives `Some(V16_0)`. Versions without the series prefix
    /// (`"1.0.0"`) or naming an unsupported series give `None`.
    pub fn from_addon_version(version: &str) -> Option<Self> {
        let caps = ADDON_VERSION_RE.captures(version.trim())?;
        caps.get(1)?.as_str().parse().ok()
    }
}

impl fmt::Display for OdooSeries {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OdooSeries {
    type Err = AddonsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        OdooSeries::ALL
            .iter()
            .copied()
            .find(|series| series.as_str() == s)
            .ok_or_else(|| AddonsError::InvalidSeries(s.to_string()))
    }
}

/// Odoo distribution variant
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum OdooEdition {
    #[serde(rename = "ce")]
    Community,
    #[serde(rename = "ee")]
    Enterprise,
}

impl OdooEdition {
    /// Community first: license resolution checks editions in this order
    pub const ALL: [OdooEdition; 2] = [OdooEdition::Community, OdooEdition::Enterprise];

    pub fn as_str(&self) -> &'static str {
        match self {
            OdooEdition::Community => "ce",
            OdooEdition::Enterprise => "ee",
        }
    }
}

impl fmt::Display for OdooEdition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OdooEdition {
    type Err = AddonsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "ce" | "community" => Ok(OdooEdition::Community),
            "ee" | "enterprise" => Ok(OdooEdition::Enterprise),
            other => Err(AddonsError::InvalidEdition(other.to_string())),
        }
    }
}
