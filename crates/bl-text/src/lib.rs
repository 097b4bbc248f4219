//! Field and string handling for Boolog.
//!
//! Nearly every message or string field that Boolog renders passes through
//! this crate before it lands in the HTML stream. Because it is hard to tell
//! which fields really hold Base64 or JSON, the decision is left to the
//! caller through a [`FieldProcessor`] callback.
//!
//! # Key Features
//!
//! - **Base64 sniffing**: [`is_base64`] / [`from_base64`] with UTF-8 validation.
//! - **JSON pretty-printing**: [`pretty_json`] re-indents anything that parses.
//! - **Field processors**: [`process_string`] applies a caller-supplied
//!   `(field_name, field_value) -> field_value` rewrite; [`sniffing_processor`]
//!   is a ready-made one.
//! - **Markup helpers**: [`treat_as_code`] and [`html_escape`].
//!
//! # Example
//!
//! ```
//! use bl_text::{process_string, sniffing_processor};
//!
//! let processor = sniffing_processor();
//! let shown = process_string("X-Payload", "eyJhIjoxfQ==", Some(&processor));
//! assert!(shown.contains("\"a\": 1"));
//! ```

pub mod error;
pub mod field;
pub mod markup;
pub mod sniff;

pub use error::{Result, TextError};
pub use field::{process_string, sniffing_processor, FieldProcessor};
pub use markup::{html_escape, treat_as_code};
pub use sniff::{from_base64, is_base64, pretty_json};
