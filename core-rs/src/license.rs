//! License identifiers assigned to core addons
//!
//! These override whatever license an addon manifest declares: Odoo licenses a
//! whole series/edition uniformly and upstream manifests are not reliable on it.

use crate::series::{OdooEdition, OdooSeries};
use serde::{Serialize, Serializer};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CoreLicense {
    Agpl3,
    Lgpl3,
    Oeel1,
}

impl CoreLicense {
    pub fn as_str(&self) -> &'static str {
        match self {
            CoreLicense::Agpl3 => "AGPL-3",
            CoreLicense::Lgpl3 => "LGPL-3",
            CoreLicense::Oeel1 => "OEEL-1",
        }
    }

    /// License of every addon of `edition` in `series`
    ///
    /// Community is AGPL-3 only for the oldest series (8.0) and LGPL-3 after.
    /// Enterprise is OEEL-1 regardless of series.
    pub fn for_edition(series: OdooSeries, edition: OdooEdition) -> Self {
        match edition {
            OdooEdition::Community if series == OdooSeries::oldest() => CoreLicense::Agpl3,
            OdooEdition::Community => CoreLicense::Lgpl3,
            OdooEdition::Enterprise => CoreLicense::Oeel1,
        }
    }
}

impl fmt::Display for CoreLicense {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for CoreLicense {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}
