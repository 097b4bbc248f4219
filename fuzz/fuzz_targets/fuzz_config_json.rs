//! Fuzz target for Boolog configuration loading.

#![no_main]

use bl_core::BoologConfig;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &str| {
    // Invalid documents are errors, not panics.
    if let Ok(config) = BoologConfig::from_json(data) {
        let _ = config.to_json();
    }
});
