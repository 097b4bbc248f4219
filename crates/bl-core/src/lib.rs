//! Hierarchical, click-to-expand logs.
//!
//! A [`Boolog`] has a title, a plain-text stream that is written line by
//! line, and an HTML body that is buffered and written out once, when the
//! node concludes. Nodes embed into other nodes as collapsible, styled
//! subsections, so a whole test suite or request trace reads as one
//! document you can drill into.
//!
//! # Features
//!
//! - **Dual streams**: plain text for the console, HTML for the record
//! - **Embedding**: [`Boolog::show_boolog`] concludes a child and nests it
//! - **Value rendering**: anything `Serialize`, maps, and error chains
//! - **Test status**: [`TestBoolog`] colors its subsection by outcome
//! - **Themes**: light, dark, or no stylesheet at all
//!
//! # Example
//!
//! ```
//! use bl_core::{Boolog, BoologOptions, MemorySink, SectionStyle};
//!
//! let html = MemorySink::new();
//! let mut suite = Boolog::new(BoologOptions::new("Suite").with_html(html.clone()));
//!
//! let mut test = suite.subsection("Test1");
//! test.info("step one").unwrap();
//! suite
//!     .show_boolog_with(&mut test, "✅", SectionStyle::PassingTestResult)
//!     .unwrap();
//!
//! suite.conclude().unwrap();
//! assert!(html.contents().contains("<h2>Test1</h2>"));
//! assert!(html.is_closed());
//! ```

pub mod config;
pub mod constants;
pub mod error;
pub mod html;
pub mod logging;
pub mod node;
pub mod show;
pub mod sink;
pub mod status;
pub mod theme;

pub use config::{BoologConfig, BoologOptions, HeaderRenderer, ShowLimits, CONFIG_SCHEMA_VERSION};
pub use error::{BoologError, Result};
pub use html::{default_header, highlight, InlineImage};
pub use logging::{init_logging, LogConfig, LogFormat, LogLevel};
pub use node::Boolog;
pub use show::depict_failure;
pub use sink::{MemorySink, Sink};
pub use status::{TestBoolog, TestStatus};
pub use theme::{SectionStyle, Theme};
