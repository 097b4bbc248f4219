//! Fuzz target for value rendering.
//!
//! Any JSON document that parses must render into a Boolog without panicking,
//! however deep or wide it is.

#![no_main]

use bl_core::{Boolog, BoologOptions};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let Ok(value) = serde_json::from_slice::<serde_json::Value>(data) else {
        return;
    };
    let mut log = Boolog::new(BoologOptions::new("fuzz").with_timestamps(false));
    let _ = log.show(&value, "input");
    let _ = log.conclude();
});
