//! Fuzz target for HTTP request rendering.
//!
//! The URL is split by hand, so arbitrary method/URL/header text is a good
//! way to find slicing bugs.

#![no_main]

use arbitrary::Arbitrary;
use bl_core::{Boolog, BoologOptions};
use bl_http::{HttpRequestRecord, ShowHttp};
use libfuzzer_sys::fuzz_target;

#[derive(Arbitrary, Debug)]
struct Input {
    method: String,
    url: String,
    headers: Vec<(String, String)>,
    body: Option<String>,
}

fuzz_target!(|input: Input| {
    let mut request = HttpRequestRecord::new(input.method, input.url);
    for (name, value) in &input.headers {
        request = request.with_header(name, value);
    }
    if let Some(body) = input.body {
        request = request.with_body(body);
    }
    let mut log = Boolog::new(BoologOptions::new("fuzz"));
    let _ = log.show_http_request(&request, None);
});
