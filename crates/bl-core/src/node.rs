//! The Boolog report node.
//!
//! A node accumulates an HTML body in memory and streams plain text as it
//! goes. Concluding a node closes its body, writes the full document to the
//! HTML sink (if it has one) and makes the node read-only. Embedding one node
//! into another concludes the embedded node.
//!
//! Mutation takes `&mut self`; sharing a node between threads needs a lock
//! around it.

use chrono::{DateTime, Local};
use std::any::Any;
use std::fmt;
use std::panic::{self, AssertUnwindSafe};
use tracing::{debug, warn};

use crate::config::{BoologOptions, HeaderRenderer, ShowLimits};
use crate::constants::{
    EMOJI_BOOLOG, EMOJI_DEBUG, EMOJI_ERROR, EMOJI_TEXT_BLANK_LINE, EMOJI_TEXT_BOOLOG_CONCLUDE,
};
use crate::error::{BoologError, Result};
use crate::html::{
    default_header, document_prelude, highlight, highlight_with, timestamp_cells,
    wrap_as_subordinate, CLOSING_CONTENT, DOCUMENT_END, STARTING_CONTENT,
};
use crate::sink::Sink;
use crate::theme::{SectionStyle, Theme};

/// Placeholder for the timestamp column when a line has no timestamp.
const NO_TIMESTAMP: &str = "                        ";

/// A titled log unit with a plain-text stream and an HTML body.
pub struct Boolog {
    title: String,
    plain_text: Option<Box<dyn Sink>>,
    html: Option<Box<dyn Sink>>,
    show_timestamps: bool,
    show_emojis: bool,
    theme: Theme,
    limits: ShowLimits,
    header: Option<Box<HeaderRenderer>>,
    content: String,
    used: bool,
    concluded: bool,
    first_echo: bool,
}

impl Boolog {
    /// Build a node from options.
    pub fn new(options: BoologOptions) -> Self {
        let BoologOptions {
            title,
            plain_text,
            html,
            show_timestamps,
            show_emojis,
            theme,
            limits,
            header,
        } = options;

        Self {
            title,
            plain_text,
            html,
            show_timestamps,
            show_emojis,
            theme,
            limits,
            header,
            content: STARTING_CONTENT.to_string(),
            used: false,
            concluded: false,
            first_echo: true,
        }
    }

    /// A sinkless node meant to be embedded into this one.
    ///
    /// It inherits the display toggles and limits of `self`.
    pub fn subsection(&self, title: impl Into<String>) -> Boolog {
        Boolog::new(
            BoologOptions::new(title)
                .with_timestamps(self.show_timestamps)
                .with_emojis(self.show_emojis)
                .with_theme(Theme::None)
                .with_limits(self.limits),
        )
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn show_timestamps(&self) -> bool {
        self.show_timestamps
    }

    pub fn show_emojis(&self) -> bool {
        self.show_emojis
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    pub fn limits(&self) -> &ShowLimits {
        &self.limits
    }

    /// False until something has been written to the HTML body.
    ///
    /// Use it to skip embedding sections that never got any content.
    pub fn was_used(&self) -> bool {
        self.used
    }

    pub fn is_concluded(&self) -> bool {
        self.concluded
    }

    /// The HTML body so far, without any header.
    pub fn content(&self) -> &str {
        &self.content
    }

    pub(crate) fn ensure_open(&self, operation: &'static str) -> Result<()> {
        if self.concluded {
            return Err(BoologError::Concluded {
                operation,
                title: self.title.clone(),
            });
        }
        Ok(())
    }

    /// Send one line to the plain-text stream only.
    ///
    /// `message` is written verbatim. A missing timestamp leaves the
    /// timestamp column blank.
    pub fn echo_plain_text(
        &mut self,
        message: &str,
        emoji: &str,
        timestamp: Option<DateTime<Local>>,
    ) -> Result<()> {
        self.ensure_open("echo_plain_text")?;
        self.echo(message, emoji, timestamp)
    }

    fn echo(&mut self, message: &str, emoji: &str, timestamp: Option<DateTime<Local>>) -> Result<()> {
        if self.plain_text.is_none() {
            return Ok(());
        }

        if self.first_echo {
            self.first_echo = false;
            let title = self.title.clone();
            self.write_plain_line("", EMOJI_TEXT_BLANK_LINE, timestamp)?;
            self.write_plain_line(&title, EMOJI_BOOLOG, timestamp)?;
        }

        self.write_plain_line(message, emoji, timestamp)
    }

    fn write_plain_line(
        &mut self,
        message: &str,
        emoji: &str,
        timestamp: Option<DateTime<Local>>,
    ) -> Result<()> {
        let mut line = String::new();
        if self.show_timestamps {
            match timestamp {
                Some(ts) => line.push_str(&ts.format("%Y-%m-%d\t%H:%M:%S%.3f").to_string()),
                None => line.push_str(NO_TIMESTAMP),
            }
            line.push('\t');
        }
        if self.show_emojis {
            line.push_str(emoji);
            line.push('\t');
        }
        line.push_str(message);
        line.push('\n');

        if let Some(sink) = self.plain_text.as_mut() {
            sink.write_all(line.as_bytes())?;
            sink.flush()?;
        }
        Ok(())
    }

    /// Append one row to the HTML body only.
    ///
    /// `message` is trusted markup and is not escaped.
    pub fn write_to_html(
        &mut self,
        message: &str,
        emoji: &str,
        timestamp: Option<DateTime<Local>>,
    ) -> Result<()> {
        self.ensure_open("write_to_html")?;

        self.content.push_str("<tr>");
        if self.show_timestamps {
            if let Some(ts) = timestamp {
                self.content.push_str(&timestamp_cells(&ts));
            }
        }
        if self.show_emojis {
            self.content.push_str("<td><h2>");
            self.content.push_str(emoji);
            self.content.push_str("</h2></td>");
        }
        self.content.push_str("<td>");
        self.content.push_str(message);
        self.content.push_str("</td></tr>\r\n");
        self.used = true;
        Ok(())
    }

    /// Log a line to both streams.
    pub fn info(&mut self, message: &str) -> Result<()> {
        self.info_with(message, EMOJI_TEXT_BLANK_LINE)
    }

    /// Log a line to both streams with an emoji.
    pub fn info_with(&mut self, message: &str, emoji: &str) -> Result<()> {
        self.info_at(message, emoji, Local::now())
    }

    /// Log a line to both streams with an explicit timestamp.
    pub fn info_at(&mut self, message: &str, emoji: &str, timestamp: DateTime<Local>) -> Result<()> {
        self.write_to_html(message, emoji, Some(timestamp))?;
        self.echo_plain_text(message, emoji, Some(timestamp))
    }

    /// Log a highlighted line with the debug emoji. The plain text is not highlighted.
    pub fn debug(&mut self, message: &str) -> Result<()> {
        let timestamp = Local::now();
        self.write_to_html(&highlight(message), EMOJI_DEBUG, Some(timestamp))?;
        self.echo_plain_text(message, EMOJI_DEBUG, Some(timestamp))
    }

    /// Like [`debug`](Self::debug) with the error emoji and the `implied_bad` style.
    pub fn error(&mut self, message: &str) -> Result<()> {
        let timestamp = Local::now();
        self.write_to_html(
            &highlight_with(message, SectionStyle::ImpliedBad.css_class()),
            EMOJI_ERROR,
            Some(timestamp),
        )?;
        self.echo_plain_text(message, EMOJI_ERROR, Some(timestamp))
    }

    /// An empty, still timestamped, line in both streams.
    pub fn skip_line(&mut self) -> Result<()> {
        self.info_with("", EMOJI_TEXT_BLANK_LINE)
    }

    /// Conclude `subordinate` and embed it as a neutral subsection.
    pub fn show_boolog(&mut self, subordinate: &mut Boolog) -> Result<String> {
        self.show_boolog_with(subordinate, EMOJI_BOOLOG, SectionStyle::Neutral)
    }

    /// Conclude `subordinate` and embed it with the given emoji and style.
    ///
    /// Returns the embedded fragment. Fails without touching `subordinate`
    /// when this node is already concluded.
    pub fn show_boolog_with(
        &mut self,
        subordinate: &mut Boolog,
        emoji: &str,
        style: SectionStyle,
    ) -> Result<String> {
        self.ensure_open("show_boolog")?;
        let timestamp = Local::now();
        let fragment = Boolog::render_subsection(subordinate, style);
        self.write_to_html(&fragment, emoji, Some(timestamp))?;
        debug!(parent = %self.title, child = %subordinate.title, style = %style, "embedded boolog");
        Ok(fragment)
    }

    /// Conclude `subordinate` and return it wrapped as a subsection without
    /// placing it anywhere.
    ///
    /// A failure to write the subordinate's own HTML file is logged; the
    /// body is still returned.
    pub fn render_subsection(subordinate: &mut Boolog, style: SectionStyle) -> String {
        let body = match subordinate.conclude() {
            Ok(body) => body,
            Err(e) => {
                warn!(title = %subordinate.title, error = %e, "subordinate boolog failed to conclude cleanly");
                subordinate.content.clone()
            }
        };
        wrap_as_subordinate(&subordinate.title, &body, style)
    }

    /// Finish the node and return its HTML body.
    ///
    /// The first call echoes the closing line, writes the document to the
    /// HTML sink and closes it. Later calls return the same body and do
    /// nothing else. The node is concluded even when a sink write fails;
    /// that error is returned once.
    pub fn conclude(&mut self) -> Result<String> {
        if self.concluded {
            return Ok(self.content.clone());
        }

        let timestamp = Local::now();
        let mut outcome = self
            .echo("", EMOJI_TEXT_BOOLOG_CONCLUDE, Some(timestamp))
            .and_then(|_| self.echo("", EMOJI_TEXT_BLANK_LINE, Some(timestamp)));

        self.concluded = true;
        self.content.push_str(CLOSING_CONTENT);

        if let Some(mut sink) = self.html.take() {
            let document = self.render_document();
            let written = sink
                .write_all(document.as_bytes())
                .and_then(|_| sink.flush());
            let closed = sink.close();
            if outcome.is_ok() {
                outcome = written.and(closed).map_err(BoologError::from);
            }
        }

        debug!(title = %self.title, bytes = self.content.len(), "boolog concluded");
        outcome.map(|_| self.content.clone())
    }

    fn render_document(&self) -> String {
        let mut document = document_prelude(&self.title, self.theme);
        document.push_str(&self.render_header());
        document.push_str(&self.content);
        document.push_str(DOCUMENT_END);
        document
    }

    fn render_header(&self) -> String {
        let Some(renderer) = self.header.as_ref() else {
            return default_header(&self.title);
        };
        match panic::catch_unwind(AssertUnwindSafe(|| renderer(&self.title))) {
            Ok(header) => header,
            Err(cause) => {
                warn!(
                    title = %self.title,
                    reason = %panic_reason(cause.as_ref()),
                    "header renderer panicked; using the default header"
                );
                default_header(&self.title)
            }
        }
    }
}

fn panic_reason(cause: &(dyn Any + Send)) -> String {
    if let Some(s) = cause.downcast_ref::<&str>() {
        s.to_string()
    } else if let Some(s) = cause.downcast_ref::<String>() {
        s.clone()
    } else {
        "unknown panic payload".to_string()
    }
}

impl Drop for Boolog {
    fn drop(&mut self) {
        // An unconcluded root would otherwise leave an empty HTML file behind.
        if !self.concluded && self.html.is_some() {
            warn!(title = %self.title, "boolog dropped before conclude(); concluding now");
            if let Err(e) = self.conclude() {
                warn!(title = %self.title, error = %e, "drop-time conclusion failed");
            }
        }
    }
}

impl fmt::Debug for Boolog {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Boolog")
            .field("title", &self.title)
            .field("plain_text", &self.plain_text.is_some())
            .field("html", &self.html.is_some())
            .field("show_timestamps", &self.show_timestamps)
            .field("show_emojis", &self.show_emojis)
            .field("theme", &self.theme)
            .field("used", &self.used)
            .field("concluded", &self.concluded)
            .finish()
    }
}
