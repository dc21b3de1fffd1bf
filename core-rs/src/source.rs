//! Data sources for core addon lists
//!
//! Each (series, edition) pair has one plain text resource named
//! `addons-<series>-<edition>.txt`. Sources only fetch the raw text; parsing
//! and caching belong to the registry.

use crate::errors::{AddonsError, Result};
use crate::series::{OdooEdition, OdooSeries};
use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;
use tracing::warn;

/// Conventional resource name for a series/edition pair
pub fn resource_name(series: OdooSeries, edition: OdooEdition) -> String {
    format!("addons-{}-{}.txt", series, edition)
}

/// Backend providing the raw addon list text
pub trait AddonSource: Send + Sync {
    /// Read the full resource for `series`/`edition`.
    ///
    /// Fails with `ResourceNotFound` when the resource does not exist.
    fn read(&self, series: OdooSeries, edition: OdooEdition) -> Result<String>;

    /// Human readable location, used in logs
    fn describe(&self) -> String;
}

/// Addon lists compiled into the binary from `core-rs/data/`
#[derive(Debug, Clone, Copy, Default)]
pub struct EmbeddedSource;

macro_rules! embedded {
    ($file:literal) => {
        include_str!(concat!("../data/", $file))
    };
}

impl EmbeddedSource {
    /// Packaged text for a pair. Exhaustive, so every enum case has a file.
    pub fn text(series: OdooSeries, edition: OdooEdition) -> &'static str {
        use OdooEdition::{Community as Ce, Enterprise as Ee};
        use OdooSeries::*;

        match (series, edition) {
            (V8_0, Ce) => embedded!("addons-8.0-ce.txt"),
            (V8_0, Ee) => embedded!("addons-8.0-ee.txt"),
            (V9_0, Ce) => embedded!("addons-9.0-ce.txt"),
            (V9_0, Ee) => embedded!("addons-9.0-ee.txt"),
            (V10_0, Ce) => embedded!("addons-10.0-ce.txt"),
            (V10_0, Ee) => embedded!("addons-10.0-ee.txt"),
            (V11_0, Ce) => embedded!("addons-11.0-ce.txt"),
            (V11_0, Ee) => embedded!("addons-11.0-ee.txt"),
            (V12_0, Ce) => embedded!("addons-12.0-ce.txt"),
            (V12_0, Ee) => embedded!("addons-12.0-ee.txt"),
            (V13_0, Ce) => embedded!("addons-13.0-ce.txt"),
            (V13_0, Ee) => embedded!("addons-13.0-ee.txt"),
            (V14_0, Ce) => embedded!("addons-14.0-ce.txt"),
            (V14_0, Ee) => embedded!("addons-14.0-ee.txt"),
            (V15_0, Ce) => embedded!("addons-15.0-ce.txt"),
            (V15_0, Ee) => embedded!("addons-15.0-ee.txt"),
            (V16_0, Ce) => embedded!("addons-16.0-ce.txt"),
            (V16_0, Ee) => embedded!("addons-16.0-ee.txt"),
            (V17_0, Ce) => embedded!("addons-17.0-ce.txt"),
            (V17_0, Ee) => embedded!("addons-17.0-ee.txt"),
            (V18_0, Ce) => embedded!("addons-18.0-ce.txt"),
            (V18_0, Ee) => embedded!("addons-18.0-ee.txt"),
        }
    }
}

impl AddonSource for EmbeddedSource {
    fn read(&self, series: OdooSeries, edition: OdooEdition) -> Result<String> {
        Ok(Self::text(series, edition).to_string())
    }

    fn describe(&self) -> String {
        "embedded".to_string()
    }
}

/// Addon lists read from a directory at runtime
#[derive(Debug, Clone)]
pub struct DirectorySource {
    data_dir: PathBuf,
}

impl DirectorySource {
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        let data_dir = data_dir.into();
        if !data_dir.is_dir() {
            warn!("DirectorySource: data dir {:?} does not exist", data_dir);
        }
        DirectorySource { data_dir }
    }

    pub fn resource_path(&self, series: OdooSeries, edition: OdooEdition) -> PathBuf {
        self.data_dir.join(resource_name(series, edition))
    }
}

impl AddonSource for DirectorySource {
    fn read(&self, series: OdooSeries, edition: OdooEdition) -> Result<String> {
        let path = self.resource_path(series, edition);
        fs::read_to_string(&path).map_err(|e| match e.kind() {
            ErrorKind::NotFound => AddonsError::ResourceNotFound {
                resource: resource_name(series, edition),
                location: self.data_dir.display().to_string(),
            },
            _ => AddonsError::Io(e),
        })
    }

    fn describe(&self) -> String {
        self.data_dir.display().to_string()
    }
}
