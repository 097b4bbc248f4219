//! HTTP request and response rendering for Boolog.
//!
//! Messages are described by plain records so any client can be logged.
//! [`ShowHttp`] adds the rendering methods to [`bl_core::Boolog`]:
//!
//! ```
//! use bl_core::{Boolog, BoologOptions};
//! use bl_http::{HttpRequestRecord, HttpResponseRecord, ShowHttp};
//!
//! let mut log = Boolog::new(BoologOptions::new("Client"));
//! let request = HttpRequestRecord::get("https://api.example.com/items?page=2");
//! let html = log.show_http_request(&request, None).unwrap();
//! assert!(html.contains("<h2>GET /items</h2>"));
//!
//! let response = HttpResponseRecord::new(404);
//! let html = log.show_http_response(&response, None).unwrap();
//! assert!(html.contains("implied_bad"));
//! ```

pub mod error;
pub mod records;
pub mod render;
pub mod status;

pub use error::{HttpError, Result};
pub use records::{HeaderEntry, HttpRequestRecord, HttpResponseRecord, ParsedUrl};
pub use render::{ShowHttp, Transport, TransportError, HTTP_MESSAGE_BODY};
pub use status::{is_error_status, is_successful_status, is_valid_status, status_description};
