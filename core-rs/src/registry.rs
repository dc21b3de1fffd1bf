//! Core addon registry
//!
//! Answers "is this addon part of Odoo itself" and "which license does it
//! carry" for a series. Addon lists are loaded lazily from an [`AddonSource`]
//! and memoized for the lifetime of the registry:
//!
//! - one cell per (series, edition), filled on first query for that pair
//! - one cell per series for the CE ∪ EE union
//!
//! The key space is closed, so every cell exists from construction and is
//! write-once. Concurrent first queries for a key block on the same cell and
//! the source is read at most once per key. A failed read leaves the cell
//! empty.

use crate::addon_set::AddonSet;
use crate::errors::{AddonsError, Result};
use crate::license::CoreLicense;
use crate::series::{OdooEdition, OdooSeries};
use crate::source::{AddonSource, EmbeddedSource};
use once_cell::sync::OnceCell;
use std::collections::HashMap;
use std::sync::Arc;
use tracing::debug;

static GLOBAL_REGISTRY: OnceCell<CoreAddonRegistry> = OnceCell::new();

pub struct CoreAddonRegistry {
    source: Box<dyn AddonSource>,
    edition_sets: HashMap<(OdooSeries, OdooEdition), OnceCell<Arc<AddonSet>>>,
    series_sets: HashMap<OdooSeries, OnceCell<Arc<AddonSet>>>,
}

impl CoreAddonRegistry {
    pub fn new(source: impl AddonSource + 'static) -> Self {
        Self::from_boxed(Box::new(source))
    }

    pub fn from_boxed(source: Box<dyn AddonSource>) -> Self {
        let edition_sets = OdooSeries::ALL
            .into_iter()
            .flat_map(|s| OdooEdition::ALL.into_iter().map(move |e| ((s, e), OnceCell::new())))
            .collect();
        let series_sets = OdooSeries::ALL
            .into_iter()
            .map(|s| (s, OnceCell::new()))
            .collect();

        CoreAddonRegistry {
            source,
            edition_sets,
            series_sets,
        }
    }

    /// Registry over the addon lists packaged with this crate
    pub fn embedded() -> Self {
        Self::new(EmbeddedSource)
    }

    /// Process-wide registry over the packaged addon lists
    ///
    /// # Returns
    ///
    /// Reference to the singleton registry, built on first use
    pub fn global() -> &'static Self {
        GLOBAL_REGISTRY.get_or_init(Self::embedded)
    }

    pub fn source(&self) -> &dyn AddonSource {
        self.source.as_ref()
    }

    /// Addon names of one edition of a series.
    ///
    /// Reads and parses the resource on first call for the pair; later calls
    /// return the same shared set.
    pub fn addon_set(&self, series: OdooSeries, edition: OdooEdition) -> Result<Arc<AddonSet>> {
        let cell = self
            .edition_sets
            .get(&(series, edition))
            .ok_or_else(|| AddonsError::InvalidSeries(series.to_string()))?;

        cell.get_or_try_init(|| {
            let text = self.source.read(series, edition)?;
            let set = AddonSet::parse(&text);
            debug!(
                "Loaded {} {} addons for Odoo {} from {}",
                set.len(),
                edition,
                series,
                self.source.describe()
            );
            Ok::<_, AddonsError>(Arc::new(set))
        })
        .cloned()
    }

    /// All core addons of a series (Community ∪ Enterprise)
    pub fn core_addons(&self, series: OdooSeries) -> Result<Arc<AddonSet>> {
        let cell = self
            .series_sets
            .get(&series)
            .ok_or_else(|| AddonsError::InvalidSeries(series.to_string()))?;

        cell.get_or_try_init(|| {
            let ce = self.addon_set(series, OdooEdition::Community)?;
            let ee = self.addon_set(series, OdooEdition::Enterprise)?;
            Ok::<_, AddonsError>(Arc::new(ce.union(&ee)))
        })
        .cloned()
    }

    pub fn is_core_ce_addon(&self, addon: &str, series: OdooSeries) -> Result<bool> {
        Ok(self.addon_set(series, OdooEdition::Community)?.contains(addon))
    }

    pub fn is_core_ee_addon(&self, addon: &str, series: OdooSeries) -> Result<bool> {
        Ok(self.addon_set(series, OdooEdition::Enterprise)?.contains(addon))
    }

    pub fn is_core_addon(&self, addon: &str, series: OdooSeries) -> Result<bool> {
        Ok(self.core_addons(series)?.contains(addon))
    }

    /// Edition an addon belongs to, Community taking precedence when an addon
    /// is listed in both.
    pub fn core_addon_edition(&self, addon: &str, series: OdooSeries) -> Result<Option<OdooEdition>> {
        for edition in OdooEdition::ALL {
            if self.addon_set(series, edition)?.contains(addon) {
                return Ok(Some(edition));
            }
        }
        Ok(None)
    }

    /// License of a core addon, overriding the one declared in its manifest.
    ///
    /// The addon must be core for `series`. Asking for any other addon is a
    /// caller contract violation and yields `NotCoreAddon`.
    pub fn core_addon_license(&self, addon: &str, series: OdooSeries) -> Result<CoreLicense> {
        match self.core_addon_edition(addon, series)? {
            Some(edition) => Ok(CoreLicense::for_edition(series, edition)),
            None => Err(AddonsError::NotCoreAddon {
                addon: addon.to_string(),
                series: series.to_string(),
            }),
        }
    }
}

impl std::fmt::Debug for CoreAddonRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let loaded = self.edition_sets.values().filter(|c| c.get().is_some()).count();
        f.debug_struct("CoreAddonRegistry")
            .field("source", &self.source.describe())
            .field("loaded_sets", &loaded)
            .finish()
    }
}
