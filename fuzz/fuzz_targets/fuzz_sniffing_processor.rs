//! Fuzz target for the Base64/JSON sniffing field processor.
//!
//! Arbitrary header or payload text must come back as a string, never a panic.

#![no_main]

use bl_text::{process_string, sniffing_processor, treat_as_code};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &str| {
    let processor = sniffing_processor();
    let processed = process_string("X-Fuzz", data, Some(&processor));
    let _ = treat_as_code(&processed);
});
