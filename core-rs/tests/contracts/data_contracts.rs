// Packaged Data Contract Tests
//
// Every supported series ships both lists, and the lists are consistent with
// the editions Odoo actually released.

use odoo_core_addons::{CoreAddonRegistry, OdooEdition, OdooSeries};

/// Every (series, edition) pair has a packaged list that loads
#[test]
fn every_pair_is_packaged() {
    let registry = CoreAddonRegistry::embedded();
    for series in OdooSeries::ALL {
        for edition in OdooEdition::ALL {
            assert!(
                registry.addon_set(series, edition).is_ok(),
                "missing list for {} {}",
                series,
                edition
            );
        }
    }
}

/// base and web are Community core addons in every series
#[test]
fn base_and_web_are_always_community() {
    let registry = CoreAddonRegistry::embedded();
    for series in OdooSeries::ALL {
        assert!(registry.is_core_ce_addon("base", series).unwrap(), "{}", series);
        assert!(registry.is_core_ce_addon("web", series).unwrap(), "{}", series);
    }
}

/// Odoo 8.0 had no Enterprise edition
#[test]
fn no_enterprise_addons_in_8_0() {
    let registry = CoreAddonRegistry::embedded();
    let ee = registry.addon_set(OdooSeries::V8_0, OdooEdition::Enterprise).unwrap();
    assert!(ee.is_empty());
}

/// From 9.0 on the Enterprise web client is shipped
#[test]
fn web_enterprise_from_9_0() {
    let registry = CoreAddonRegistry::embedded();
    for series in &OdooSeries::ALL[1..] {
        assert!(registry.is_core_ee_addon("web_enterprise", *series).unwrap(), "{}", series);
    }
}

/// Packaged lists never list an addon in both editions of the same series
#[test]
fn editions_are_disjoint() {
    let registry = CoreAddonRegistry::embedded();
    for series in OdooSeries::ALL {
        let ce = registry.addon_set(series, OdooEdition::Community).unwrap();
        let ee = registry.addon_set(series, OdooEdition::Enterprise).unwrap();
        for name in ee.iter() {
            assert!(!ce.contains(name), "{} listed in both editions of {}", name, series);
        }
    }
}

/// Names are Odoo technical names: no comments, padding or blanks leak in
#[test]
fn names_are_technical_names() {
    let registry = CoreAddonRegistry::embedded();
    for series in OdooSeries::ALL {
        for name in registry.core_addons(series).unwrap().iter() {
            assert!(!name.is_empty());
            assert!(
                name.chars().all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '_'),
                "unexpected name {:?} in {}",
                name,
                series
            );
        }
    }
}

/// Well-known Community addons are core from the series that introduced them
#[test]
fn well_known_community_addons_are_pinned() {
    use OdooSeries::*;

    let pinned: &[(&str, OdooSeries)] = &[
        ("portal", V8_0),
        ("sale_crm", V8_0),
        ("google_account", V8_0),
        ("l10n_de", V8_0),
        ("website_sale_stock", V9_0),
        ("mail_bot", V11_0),
        ("http_routing", V11_0),
        ("hr_org_chart", V11_0),
        ("stock_picking_batch", V11_0),
        ("uom", V12_0),
        ("spreadsheet_dashboard", V15_0),
    ];

    let registry = CoreAddonRegistry::embedded();
    for &(addon, since) in pinned {
        for series in OdooSeries::ALL {
            let expected = series >= since;
            assert_eq!(
                registry.is_core_ce_addon(addon, series).unwrap(),
                expected,
                "{} in {} Community",
                addon,
                series
            );
        }
    }
}

/// Enterprise lists carry the flagship Enterprise apps
#[test]
fn well_known_enterprise_addons_are_pinned() {
    use OdooSeries::*;

    let pinned: &[(&str, OdooSeries)] = &[
        ("account_accountant", V9_0),
        ("stock_barcode", V9_0),
        ("helpdesk", V10_0),
        ("web_studio", V10_0),
        ("hr_payroll", V11_0),
        ("documents", V12_0),
        ("planning", V13_0),
        ("knowledge", V16_0),
    ];

    let registry = CoreAddonRegistry::embedded();
    for &(addon, since) in pinned {
        for series in OdooSeries::ALL.into_iter().filter(|s| *s >= since) {
            assert!(
                registry.is_core_ee_addon(addon, series).unwrap(),
                "{} missing from {} Enterprise",
                addon,
                series
            );
        }
    }
}

/// The lists cover whole releases, not a sample of them
#[test]
fn lists_cover_full_releases() {
    let registry = CoreAddonRegistry::embedded();
    for series in OdooSeries::ALL {
        let ce = registry.addon_set(series, OdooEdition::Community).unwrap();
        assert!(ce.len() >= 200, "{} Community lists only {} addons", series, ce.len());
    }
    for series in &OdooSeries::ALL[2..] {
        let ee = registry.addon_set(*series, OdooEdition::Enterprise).unwrap();
        assert!(ee.len() >= 30, "{} Enterprise lists only {} addons", series, ee.len());
    }
}
