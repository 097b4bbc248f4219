//! HTTP rendering against real Boolog nodes and an in-process transport.

use bl_core::{Boolog, BoologOptions, MemorySink};
use bl_http::{
    HttpError, HttpRequestRecord, HttpResponseRecord, ShowHttp, TransportError, HTTP_MESSAGE_BODY,
};
use bl_text::sniffing_processor;
use proptest::prelude::*;
use std::fs::File;

fn quiet(title: &str) -> Boolog {
    Boolog::new(BoologOptions::new(title).with_timestamps(false))
}

#[test]
fn request_shows_method_path_host_and_queries() {
    let mut log = quiet("Request");
    let request = HttpRequestRecord::get("https://api.example.com/v1/items?page=2&verbose")
        .with_header("Accept", "application/json");

    let html = log.show_http_request(&request, None).unwrap();

    assert!(html.starts_with("<div class=\"outgoing implied_caution\">"));
    assert!(html.contains("<h2>GET /v1/items</h2>"));
    assert!(html.contains("<i>api.example.com</i>"));
    assert!(html.contains("(show complete URL)"));
    assert!(html.contains("<b>Queries</b>"));
    assert!(html.contains("<tr><td>page</td><td>2</td></tr>"));
    assert!(html.contains("<tr><td>verbose</td><td>(unset)</td></tr>"));
    assert!(html.contains("<tr><td>Accept</td><td>application/json</td></tr>"));
    assert!(html.contains("(no payload)"));
    assert!(log.content().contains(&html));
}

#[test]
fn query_values_reach_the_processor_decoded() {
    let mut log = quiet("Search");
    let seen = std::sync::Arc::new(std::sync::Mutex::new(Vec::new()));
    let seen_in_processor = std::sync::Arc::clone(&seen);
    let record = move |name: &str, value: &str| {
        seen_in_processor.lock().unwrap().push(format!("{}={}", name, value));
        value.to_string()
    };
    let request = HttpRequestRecord::get("https://h/search?q=hello%20world&sort%5Bby%5D=a%26b");

    let html = log.show_http_request(&request, Some(&record)).unwrap();

    assert!(html.contains("<tr><td>q</td><td>hello world</td></tr>"));
    assert!(html.contains("<tr><td>sort[by]</td><td>a&amp;b</td></tr>"));
    assert!(seen.lock().unwrap().contains(&"q=hello world".to_string()));
    assert!(html.contains("q=hello%20world"));
}

#[test]
fn request_without_query_or_headers() {
    let mut log = quiet("Bare");
    let html = log
        .show_http_request(&HttpRequestRecord::new("DELETE", "http://localhost/items/9"), None)
        .unwrap();
    assert!(html.contains("(no query)"));
    assert!(html.contains("(no headers)"));
    assert!(html.contains("<h2>DELETE /items/9</h2>"));
}

#[test]
fn unparseable_url_still_renders() {
    let mut log = quiet("Odd");
    let html = log
        .show_http_request(&HttpRequestRecord::get("relative/path"), None)
        .unwrap();
    assert!(html.contains("<h2>GET relative/path</h2>"));
    assert!(html.contains("(unknown host)"));
}

#[test]
fn response_style_follows_status() {
    let mut log = quiet("Responses");
    let ok = log
        .show_http_response(&HttpResponseRecord::new(200).with_body("fine"), None)
        .unwrap();
    assert!(ok.starts_with("<div class=\"incoming implied_good\">"));
    assert!(ok.contains("<h2>200 OK</h2>"));
    assert!(ok.contains("<pre><code>fine</code></pre>"));

    let missing = log.show_http_response(&HttpResponseRecord::new(404), None).unwrap();
    assert!(missing.starts_with("<div class=\"incoming implied_bad\">"));
    assert!(missing.contains("<h2>404 Not Found</h2>"));

    let odd = log.show_http_response(&HttpResponseRecord::new(299), None).unwrap();
    assert!(odd.contains("<h2>299</h2>"));
}

#[test]
fn repeated_header_values_get_a_nested_table() {
    let mut log = quiet("Cookies");
    let response = HttpResponseRecord::new(200)
        .with_header("Set-Cookie", "a=1")
        .with_header("set-cookie", "b=2");
    let html = log.show_http_response(&response, None).unwrap();
    assert!(html.contains("<table class=\"gridlines neutral\">"));
    assert!(html.contains("<tr><td>a=1</td></tr>"));
    assert!(html.contains("<tr><td>b=2</td></tr>"));
}

#[test]
fn many_headers_collapse() {
    let mut log = quiet("Headers");
    let mut response = HttpResponseRecord::new(200);
    for n in 0..11 {
        response = response.with_header(&format!("X-Header-{n}"), "v");
    }
    let html = log.show_http_response(&response, None).unwrap();
    assert!(html.contains("(show 11 headers)"));

    let few = log
        .show_http_response(&HttpResponseRecord::new(200).with_header("X-One", "v"), None)
        .unwrap();
    assert!(!few.contains("headers)"));
}

#[test]
fn large_payload_collapses() {
    let mut log = quiet("Payload");
    let small = log
        .show_http_response(&HttpResponseRecord::new(200).with_body("x".repeat(500)), None)
        .unwrap();
    assert!(!small.contains("(show large payload)"));

    let large = log
        .show_http_response(&HttpResponseRecord::new(200).with_body("x".repeat(501)), None)
        .unwrap();
    assert!(large.contains("(show large payload)"));
}

#[test]
fn payload_markup_is_escaped() {
    let mut log = quiet("Escape");
    let html = log
        .show_http_response(
            &HttpResponseRecord::new(500).with_body("<script>alert(1)</script>"),
            None,
        )
        .unwrap();
    assert!(!html.contains("<script>"));
    assert!(html.contains("&lt;script&gt;"));
}

#[test]
fn processor_sees_header_names_and_body_field() {
    let mut log = quiet("Redact");
    let redact = |name: &str, value: &str| {
        if name == "Authorization" {
            "(redacted)".to_string()
        } else if name == HTTP_MESSAGE_BODY {
            value.to_uppercase()
        } else {
            value.to_string()
        }
    };
    let request = HttpRequestRecord::post("https://h/login")
        .with_header("Authorization", "Bearer secret")
        .with_body("user=ann");
    let html = log.show_http_request(&request, Some(&redact)).unwrap();
    assert!(!html.contains("secret"));
    assert!(html.contains("(redacted)"));
    assert!(html.contains("USER=ANN"));
}

#[test]
fn sniffing_processor_decodes_base64_json_payload() {
    let mut log = quiet("Sniff");
    let processor = sniffing_processor();
    // {"id":7}
    let response = HttpResponseRecord::new(200).with_body("eyJpZCI6N30=");
    let html = log.show_http_response(&response, Some(&processor)).unwrap();
    assert!(html.contains("&quot;id&quot;: 7"), "got {html}");
}

#[test]
fn transaction_logs_both_sides() {
    let text = MemorySink::new();
    let mut log = Boolog::new(BoologOptions::new("Tx").with_plain_text(text.clone()));
    let mut transport = |request: &HttpRequestRecord| -> Result<HttpResponseRecord, TransportError> {
        Ok(HttpResponseRecord::new(201).with_body(format!("created {}", request.url)))
    };

    let response = log
        .show_http_transaction(&mut transport, &HttpRequestRecord::post("http://h/things"), None)
        .unwrap();

    assert_eq!(response.status, 201);
    assert!(log.content().contains("outgoing implied_caution"));
    assert!(log.content().contains("incoming implied_good"));
    let console = text.contents();
    let sent = console.find("POST /things").unwrap();
    let received = console.find("201 Created").unwrap();
    assert!(sent < received);
}

#[test]
fn transport_failure_is_logged_and_returned() {
    let mut log = quiet("Down");
    let mut transport = |_: &HttpRequestRecord| -> Result<HttpResponseRecord, TransportError> {
        Err(std::io::Error::new(std::io::ErrorKind::ConnectionRefused, "connection refused").into())
    };

    let err = log
        .show_http_transaction(&mut transport, &HttpRequestRecord::get("http://h/"), None)
        .unwrap_err();

    match err {
        HttpError::Transport { url, reason } => {
            assert_eq!(url, "http://h/");
            assert!(reason.contains("connection refused"));
        }
        other => panic!("unexpected error: {other}"),
    }
    assert!(log.content().contains("connection refused"));
}

#[test]
fn concluded_node_rejects_http_rows() {
    let mut log = quiet("Closed");
    log.conclude().unwrap();
    let err = log
        .show_http_response(&HttpResponseRecord::new(200), None)
        .unwrap_err();
    assert!(matches!(err, HttpError::Log(ref inner) if inner.is_concluded()));
}

#[test]
fn transaction_report_lands_in_html_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("http.html");
    let mut log = Boolog::new(BoologOptions::new("HTTP").with_html(File::create(&path).unwrap()));
    let mut transport =
        |_: &HttpRequestRecord| -> Result<HttpResponseRecord, TransportError> { Ok(HttpResponseRecord::new(204)) };
    log.show_http_transaction(&mut transport, &HttpRequestRecord::get("http://h/ping"), None)
        .unwrap();
    log.conclude().unwrap();

    let written = std::fs::read_to_string(&path).unwrap();
    assert!(written.contains("<h2>GET /ping</h2>"));
    assert!(written.contains("<h2>204 No Content</h2>"));
}

proptest! {
    #[test]
    fn query_values_never_inject_markup(value in "[<>\"a-z]{1,20}") {
        let mut log = quiet("Prop");
        let request = HttpRequestRecord::get(format!("http://h/p?k={value}"));
        let html = log.show_http_request(&request, None).unwrap();
        let expected = format!("<tr><td>k</td><td>{}</td></tr>", bl_text::html_escape(&value));
        prop_assert!(html.contains(&expected));
    }
}
