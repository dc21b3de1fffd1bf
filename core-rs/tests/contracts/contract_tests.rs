//! Contract Tests - licensing and packaged data invariants
//!
//! These hold for every release of the crate regardless of how the registry
//! is implemented. Changing one of them changes what callers are told about
//! Odoo itself.

mod contracts {
    // License resolution contracts
    mod license {
        include!("license_contracts.rs");
    }

    // Packaged data contracts
    mod data {
        include!("data_contracts.rs");
    }
}
