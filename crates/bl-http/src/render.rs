//! HTTP messages as Boolog rows.
//!
//! Requests render as an outgoing `implied_caution` block, responses as an
//! incoming block colored by status. Header values and payloads pass through
//! an optional [`FieldProcessor`] first; the field name is the header name,
//! or [`HTTP_MESSAGE_BODY`] for the payload.

use bl_core::constants::{EMOJI_INCOMING, EMOJI_OUTGOING};
use bl_core::html::expander;
use bl_core::{Boolog, SectionStyle, ShowLimits};
use bl_text::{html_escape, process_string, treat_as_code, FieldProcessor};
use chrono::Local;
use tracing::{debug, warn};

use crate::error::{HttpError, Result};
use crate::records::{HeaderEntry, HttpRequestRecord, HttpResponseRecord, ParsedUrl};
use crate::status::{is_successful_status, status_description};

/// Field name handed to processors for a request or response payload.
pub const HTTP_MESSAGE_BODY: &str = "HTTP Req/Resp Body/Payload";

/// Error type a [`Transport`] may fail with.
pub type TransportError = Box<dyn std::error::Error + Send + Sync>;

/// Capability: deliver a request and return the response.
pub trait Transport {
    fn send(&mut self, request: &HttpRequestRecord) -> std::result::Result<HttpResponseRecord, TransportError>;
}

impl<F> Transport for F
where
    F: FnMut(&HttpRequestRecord) -> std::result::Result<HttpResponseRecord, TransportError>,
{
    fn send(&mut self, request: &HttpRequestRecord) -> std::result::Result<HttpResponseRecord, TransportError> {
        self(request)
    }
}

/// Rendering of HTTP messages into a [`Boolog`].
pub trait ShowHttp {
    /// Log an outgoing request. Returns the HTML block.
    fn show_http_request(
        &mut self,
        request: &HttpRequestRecord,
        processor: Option<&FieldProcessor>,
    ) -> Result<String>;

    /// Log an incoming response. Returns the HTML block.
    fn show_http_response(
        &mut self,
        response: &HttpResponseRecord,
        processor: Option<&FieldProcessor>,
    ) -> Result<String>;

    /// Log `request`, send it through `transport`, log and return the response.
    ///
    /// A transport failure is logged as an error before it is returned.
    fn show_http_transaction<T: Transport + ?Sized>(
        &mut self,
        transport: &mut T,
        request: &HttpRequestRecord,
        processor: Option<&FieldProcessor>,
    ) -> Result<HttpResponseRecord>;
}

impl ShowHttp for Boolog {
    fn show_http_request(
        &mut self,
        request: &HttpRequestRecord,
        processor: Option<&FieldProcessor>,
    ) -> Result<String> {
        let (host, path, queries) = match ParsedUrl::parse(&request.url) {
            Ok(url) => {
                let queries = url.query_pairs();
                (url.host, url.path, queries)
            }
            Err(e) => {
                warn!(error = %e, "rendering request with an unparseable URL");
                ("(unknown host)".to_string(), request.url.clone(), Vec::new())
            }
        };

        let text_rendition = format!("{} {}", request.method, path);
        let mut result = String::from("<div class=\"outgoing implied_caution\">\r\n");
        result.push_str(&format!(
            "<center><h2>{}</h2><small><b><i>{}</i></b></small>",
            html_escape(&text_rendition),
            html_escape(&host)
        ));

        let full_url = format!("<br>\r\n{}\r\n", html_escape(&request.url));
        result.push_str("<br><br>");
        result.push_str(&expander("<small><i>(show complete URL)</i></small>", &full_url));

        result.push_str(&render_queries(&queries, processor));
        result.push_str("<br>");
        result.push_str(&render_headers_and_body(
            &request.headers,
            request.body.as_deref(),
            processor,
            self.limits(),
        ));
        result.push_str("\r\n</div>");

        write_both(self, &result, &text_rendition, EMOJI_OUTGOING)?;
        Ok(result)
    }

    fn show_http_response(
        &mut self,
        response: &HttpResponseRecord,
        processor: Option<&FieldProcessor>,
    ) -> Result<String> {
        let style = if is_successful_status(response.status) {
            SectionStyle::ImpliedGood
        } else {
            SectionStyle::ImpliedBad
        };

        let text_rendition = format!("{} {}", response.status, status_description(response.status))
            .trim_end()
            .to_string();
        let mut result = format!("<div class=\"incoming {}\">\r\n", style.css_class());
        result.push_str(&format!("<center><h2>{}</h2>", html_escape(&text_rendition)));
        result.push_str(&render_headers_and_body(
            &response.headers,
            response.body.as_deref(),
            processor,
            self.limits(),
        ));
        result.push_str("\r\n</div>");

        write_both(self, &result, &text_rendition, EMOJI_INCOMING)?;
        Ok(result)
    }

    fn show_http_transaction<T: Transport + ?Sized>(
        &mut self,
        transport: &mut T,
        request: &HttpRequestRecord,
        processor: Option<&FieldProcessor>,
    ) -> Result<HttpResponseRecord> {
        self.show_http_request(request, processor)?;
        match transport.send(request) {
            Ok(response) => {
                debug!(method = %request.method, url = %request.url, status = response.status, "http transaction");
                self.show_http_response(&response, processor)?;
                Ok(response)
            }
            Err(e) => {
                self.show_error(e.as_ref())?;
                Err(HttpError::Transport {
                    url: request.url.clone(),
                    reason: e.to_string(),
                })
            }
        }
    }
}

/// HTML block plus a short plain-text line, sharing one timestamp.
fn write_both(boolog: &mut Boolog, html: &str, text: &str, emoji: &str) -> bl_core::Result<()> {
    let timestamp = Local::now();
    boolog.write_to_html(html, emoji, Some(timestamp))?;
    boolog.echo_plain_text(text, emoji, Some(timestamp))
}

fn render_queries(queries: &[(String, Option<String>)], processor: Option<&FieldProcessor>) -> String {
    if queries.is_empty() {
        return "<br><br><small><i>(no query)</i></small>".to_string();
    }

    let mut table = String::from("<br><br><b>Queries</b><br><table class=\"gridlines\">\r\n");
    for (name, value) in queries {
        table.push_str("<tr><td>");
        table.push_str(&html_escape(name));
        table.push_str("</td><td>");
        match value {
            Some(value) => table.push_str(&html_escape(&process_string(name, value, processor))),
            None => table.push_str("(unset)"),
        }
        table.push_str("</td></tr>");
    }
    table.push_str("\r\n</table>");
    table
}

fn render_headers_and_body(
    headers: &[HeaderEntry],
    body: Option<&str>,
    processor: Option<&FieldProcessor>,
    limits: &ShowLimits,
) -> String {
    let mut result = String::new();

    if headers.is_empty() {
        result.push_str("<br><br><small><i>(no headers)</i></small><br>\r\n");
    } else {
        result.push_str("<br><b>Headers</b><br>");
        let mut table = String::from("<table class=\"gridlines\">\r\n");
        for header in headers {
            table.push_str("<tr><td>");
            table.push_str(&html_escape(&header.name));
            table.push_str("</td><td>");
            match header.values.as_slice() {
                [] => table.push_str("<small><i>(empty)</i></small>"),
                [single] => table.push_str(&html_escape(&process_string(&header.name, single, processor))),
                many => {
                    table.push_str("<table class=\"gridlines neutral\">\r\n");
                    for value in many {
                        table.push_str("<tr><td>");
                        table.push_str(&html_escape(&process_string(&header.name, value, processor)));
                        table.push_str("</td></tr>");
                    }
                    table.push_str("\r\n</table>");
                }
            }
            table.push_str("</td></tr>");
        }
        table.push_str("\r\n</table><br>");

        if headers.len() > limits.max_headers {
            result.push_str(&expander(&format!("(show {} headers)", headers.len()), &table));
        } else {
            result.push_str(&table);
        }
    }

    match body.filter(|payload| !payload.is_empty()) {
        None => result.push_str("<br><br><small><i>(no payload)</i></small></center>"),
        Some(payload) => {
            result.push_str("<br><b>Payload</b><br></center>\r\n");
            let rendered = treat_as_code(&process_string(HTTP_MESSAGE_BODY, payload, processor));
            if payload.chars().count() > limits.max_body_length {
                result.push_str(&expander("(show large payload)", &rendered));
            } else {
                result.push_str(&rendered);
            }
        }
    }

    result
}
