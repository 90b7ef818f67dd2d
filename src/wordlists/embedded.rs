//! Embedded word catalog
//!
//! Catalog compiled into the binary at build time.

use crate::core::Tier;

// Include generated catalog from build script
include!(concat!(env!("OUT_DIR"), "/catalog.rs"));
