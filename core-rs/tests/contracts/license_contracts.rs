// License Resolution Contract Tests
//
// Odoo licenses whole editions, not individual addons. The registry is the
// single source of truth for core addon licenses and must not drift.

use odoo_core_addons::{AddonsError, CoreAddonRegistry, CoreLicense, OdooEdition, OdooSeries};

/// Odoo 8.0 Community was AGPL-3
#[test]
fn community_8_0_is_agpl() {
    assert_eq!(
        odoo_core_addons::core_addon_license("account", OdooSeries::V8_0).unwrap().as_str(),
        "AGPL-3"
    );
}

/// Every Community series after 8.0 is LGPL-3
#[test]
fn community_after_8_0_is_lgpl() {
    assert_eq!(
        odoo_core_addons::core_addon_license("account", OdooSeries::V16_0).unwrap().as_str(),
        "LGPL-3"
    );

    let registry = CoreAddonRegistry::global();
    for series in &OdooSeries::ALL[1..] {
        assert_eq!(
            registry.core_addon_license("base", *series).unwrap(),
            CoreLicense::Lgpl3,
            "series {}",
            series
        );
    }
}

/// Enterprise-only addons are OEEL-1 in every series
#[test]
fn enterprise_is_oeel_in_every_series() {
    assert_eq!(
        odoo_core_addons::core_addon_license("helpdesk", OdooSeries::V16_0).unwrap().as_str(),
        "OEEL-1"
    );

    let registry = CoreAddonRegistry::global();
    for series in OdooSeries::ALL {
        let ee = registry.addon_set(series, OdooEdition::Enterprise).unwrap();
        for name in ee.iter() {
            if registry.is_core_ce_addon(name, series).unwrap() {
                continue;
            }
            assert_eq!(
                registry.core_addon_license(name, series).unwrap(),
                CoreLicense::Oeel1,
                "{} {}",
                name,
                series
            );
        }
    }
}

/// Asking for the license of a non-core addon is an error, never a default
#[test]
fn non_core_addon_has_no_license() {
    match odoo_core_addons::core_addon_license("not_an_odoo_addon", OdooSeries::V16_0) {
        Err(AddonsError::NotCoreAddon { .. }) => {}
        other => panic!("Expected NotCoreAddon, got {:?}", other),
    }
}

/// Every core addon has a license
#[test]
fn every_core_addon_is_licensed() {
    let registry = CoreAddonRegistry::global();
    for series in OdooSeries::ALL {
        for name in registry.core_addons(series).unwrap().iter() {
            assert!(
                registry.core_addon_license(name, series).is_ok(),
                "{} {}",
                name,
                series
            );
        }
    }
}
