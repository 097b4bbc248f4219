//! Rendering `std::error::Error` values and their source chains.

use bl_text::html_escape;
use chrono::{DateTime, Local};
use std::error::Error;
use tracing::debug;
use uuid::Uuid;

use crate::config::BoologOptions;
use crate::constants::{
    EMOJI_CAUSED_BY, EMOJI_ERROR, EMOJI_TEXT_BLANK_LINE, EMOJI_TEXT_BOOLOG_CONCLUDE,
};
use crate::error::Result;
use crate::html::{encapsulation_tag, too_deep};
use crate::node::Boolog;
use crate::sink::MemorySink;

const CAUSE_INDENT: &str = "   ";

impl Boolog {
    /// Render an error and its `source()` chain.
    ///
    /// The HTML block shows the message and hides the causes behind a
    /// toggle. Plain text lists the error and then each cause, indented.
    pub fn show_error(&mut self, err: &(dyn Error + '_)) -> Result<String> {
        self.ensure_open("show_error")?;
        let timestamp = Local::now();
        let name = debug_name(err);
        let rendition = self.render_error(err, &name, Some(timestamp), "", 0)?;
        self.write_to_html(&rendition, EMOJI_ERROR, Some(timestamp))?;
        Ok(rendition)
    }

    fn render_error(
        &mut self,
        err: &(dyn Error + '_),
        name: &str,
        timestamp: Option<DateTime<Local>>,
        indent: &str,
        depth: usize,
    ) -> Result<String> {
        if depth > self.limits().max_recursion {
            return Ok(too_deep(self.show_emojis()));
        }

        let emoji = if indent.is_empty() { EMOJI_ERROR } else { EMOJI_CAUSED_BY };
        let message = err.to_string();
        self.echo_plain_text("", EMOJI_TEXT_BLANK_LINE, timestamp)?;
        self.echo_plain_text(&format!("{}{}", indent, name), emoji, timestamp)?;
        self.echo_plain_text(&format!("{}{}", indent, message), EMOJI_TEXT_BLANK_LINE, timestamp)?;

        let mut result = String::from("<div class=\"object exception\">\r\n");
        match err.source() {
            Some(cause) => {
                let cause_name = debug_name(cause);
                let cause_indent = format!("{}{}", indent, CAUSE_INDENT);
                let cause_html =
                    self.render_error(cause, &cause_name, timestamp, &cause_indent, depth + 1)?;
                let identifier = Uuid::new_v4();
                let arrow = if self.show_emojis() { EMOJI_CAUSED_BY } else { "" };
                result.push_str(&format!(
                    "<label for=\"{id}\">\r\n<h2>{name}</h2>\r\n<small><i>{message}</i></small><br><br><input id=\"{id}\" type=\"checkbox\"><small><i>(show cause)</i></small>\r\n<div class=\"{tag}\">\r\n<br>\r\n<table><tr><td>&nbsp;</td><td><small><b>Cause</b></small>&nbsp;{arrow}</td><td>&nbsp;</td><td>{cause}</td></tr></table></div>\r\n</label>",
                    id = identifier,
                    name = html_escape(name),
                    message = html_escape(&message),
                    tag = encapsulation_tag(),
                    arrow = arrow,
                    cause = cause_html,
                ));
            }
            None => {
                result.push_str(&format!(
                    "<h2>{}</h2>\r\n{}\r\n<br><br><small><i>(no known cause)</i></small>",
                    html_escape(name),
                    html_escape(&message)
                ));
            }
        }
        result.push_str("</div>");

        let closing = if self.show_emojis() { EMOJI_TEXT_BOOLOG_CONCLUDE } else { "" };
        self.echo_plain_text(&format!("{}{}", indent, closing), EMOJI_TEXT_BLANK_LINE, timestamp)?;
        self.echo_plain_text("", EMOJI_TEXT_BLANK_LINE, timestamp)?;
        Ok(result)
    }
}

/// The leading identifier of an error's `Debug` output, e.g. `ParseIntError`.
///
/// For enums this is the variant name.
fn debug_name(err: &(dyn Error + '_)) -> String {
    let rendered = format!("{:?}", err);
    let name: String = rendered
        .chars()
        .take_while(|c| c.is_alphanumeric() || *c == '_')
        .collect();
    if name.is_empty() {
        "Error".to_string()
    } else {
        name
    }
}

/// Plain-text description of an error chain, without timestamps or emojis.
pub fn depict_failure(err: &(dyn Error + '_)) -> String {
    let text = MemorySink::new();
    let mut scratch = Boolog::new(
        BoologOptions::new("")
            .with_plain_text(text.clone())
            .with_timestamps(false)
            .with_emojis(false),
    );
    let rendered = scratch.show_error(err).and_then(|_| scratch.conclude());
    if let Err(e) = rendered {
        debug!(error = %e, "depicting a failure hit a sink error");
    }
    text.contents().trim().to_string()
}
