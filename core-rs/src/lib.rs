//! # Odoo Core Addons
//!
//! Membership and license lookups for the addons shipped with Odoo itself
//! (as opposed to third-party addons), per release series and edition.
//!
//! ## Data
//!
//! One plain text list per (series, edition) pair, named
//! `addons-<series>-<edition>.txt` (e.g. `addons-16.0-ee.txt`). Lines starting
//! with `#` are comments. The lists under `core-rs/data/` are compiled into
//! the crate; a directory of lists can be used instead through
//! [`RegistryConfig`].
//!
//! ## Licensing
//!
//! ```text
//!  series   Community   Enterprise
//!  8.0      AGPL-3      OEEL-1
//!  9.0+     LGPL-3      OEEL-1
//! ```
//!
//! The free functions at the crate root query the process-wide registry over
//! the packaged data:
//!
//! ```
//! use odoo_core_addons::{core_addon_license, is_core_addon, OdooSeries};
//!
//! assert!(is_core_addon("sale", OdooSeries::V16_0).unwrap());
//! assert_eq!(core_addon_license("sale", OdooSeries::V16_0).unwrap().as_str(), "LGPL-3");
//! ```

pub mod addon_set;
pub mod config;
pub mod errors;
pub mod license;
pub mod registry;
pub mod series;
pub mod source;

use std::sync::Arc;

pub use addon_set::AddonSet;
pub use config::RegistryConfig;
pub use errors::{AddonsError, Result};
pub use license::CoreLicense;
pub use registry::CoreAddonRegistry;
pub use series::{OdooEdition, OdooSeries};
pub use source::{AddonSource, DirectorySource, EmbeddedSource};

/// All core addons (Community and Enterprise) of a series
pub fn core_addons(series: OdooSeries) -> Result<Arc<AddonSet>> {
    CoreAddonRegistry::global().core_addons(series)
}

/// Is `addon` part of Odoo `series`, in either edition
pub fn is_core_addon(addon: &str, series: OdooSeries) -> Result<bool> {
    CoreAddonRegistry::global().is_core_addon(addon, series)
}

/// Is `addon` part of the Community Edition of `series`
pub fn is_core_ce_addon(addon: &str, series: OdooSeries) -> Result<bool> {
    CoreAddonRegistry::global().is_core_ce_addon(addon, series)
}

/// Is `addon` part of the Enterprise Edition of `series`
pub fn is_core_ee_addon(addon: &str, series: OdooSeries) -> Result<bool> {
    CoreAddonRegistry::global().is_core_ee_addon(addon, series)
}

/// License of a core addon. See [`CoreAddonRegistry::core_addon_license`].
pub fn core_addon_license(addon: &str, series: OdooSeries) -> Result<CoreLicense> {
    CoreAddonRegistry::global().core_addon_license(addon, series)
}
