//! HTML fragments shared by every renderer.
//!
//! Nothing in here escapes its arguments. Messages handed to a Boolog are
//! trusted markup; callers that log untrusted text run it through
//! [`bl_text::html_escape`] first.

use base64::{engine::general_purpose::STANDARD, Engine};
use chrono::{DateTime, Local};
use uuid::Uuid;

use crate::constants::EMOJI_INCONCLUSIVE_TEST;
use crate::theme::{SectionStyle, Theme};

/// Every node body opens with this table.
pub(crate) const STARTING_CONTENT: &str = "<table class=\"left_justified\">\r\n";
pub(crate) const CLOSING_CONTENT: &str = "\r\n</table>";
pub(crate) const DOCUMENT_END: &str = "\r\n</body>\r\n</html>";

const HIGHLIGHTED: &str = "highlighted";

const LOGO_SVG: &str = concat!(
    r##"<svg xmlns="http://www.w3.org/2000/svg" width="65" height="65" viewBox="0 0 65 65">"##,
    r##"<rect x="8" y="4" width="49" height="57" rx="6" fill="#f1faff" stroke="#000" stroke-width="3"/>"##,
    r##"<path d="M17 18h31M17 28h31M17 38h22" stroke="#6495ed" stroke-width="4" stroke-linecap="round"/>"##,
    r##"<circle cx="46" cy="47" r="7" fill="#c6ffad" stroke="#000" stroke-width="2"/>"##,
    r##"</svg>"##
);

/// A fresh class name for a collapsible block.
///
/// The themes hide anything whose class starts with `lvl-` until the
/// checkbox in front of it is ticked.
pub fn encapsulation_tag() -> String {
    format!("lvl-{}", Uuid::new_v4())
}

/// Wrap `message` in the yellow outlined box used by `debug()`.
pub fn highlight(message: &str) -> String {
    highlight_with(message, HIGHLIGHTED)
}

/// Wrap `message` in an outlined box carrying `class`.
pub fn highlight_with(message: &str, class: &str) -> String {
    format!("<p class=\"{} outlined\">&nbsp;{}&nbsp;</p>", class, message)
}

/// Click-to-expand block whose checkbox is hidden; clicking `label_html` toggles it.
pub fn collapsible(label_html: &str, content: &str) -> String {
    let identifier = Uuid::new_v4();
    format!(
        "<label for=\"{id}\">\r\n<input id=\"{id}\" class=\"gone\" type=\"checkbox\">\r\n{label}\r\n<div class=\"{tag}\">\r\n{content}\r\n</div></label>",
        id = identifier,
        label = label_html,
        tag = encapsulation_tag(),
        content = content,
    )
}

/// Click-to-expand block with a visible checkbox and a caption such as `(show 12 items)`.
pub fn expander(caption: &str, content: &str) -> String {
    let identifier = Uuid::new_v4();
    format!(
        "<label for=\"{id}\">\r\n<input id=\"{id}\" type=\"checkbox\">\r\n{caption}\r\n<div class=\"{tag}\">\r\n{content}</div></label>",
        id = identifier,
        caption = caption,
        tag = encapsulation_tag(),
        content = content,
    )
}

/// The styled, collapsible block a subordinate node is embedded as.
pub fn wrap_as_subordinate(title: &str, content: &str, style: SectionStyle) -> String {
    format!(
        "\r\n\r\n<div class=\"boolog {}\">\r\n{}</div>",
        style.css_class(),
        collapsible(&format!("<h2>{}</h2>", title), content)
    )
}

/// Marker rendered in place of values nested deeper than the recursion limit.
///
/// The stop-sign markers are left out when `show_emojis` is false.
pub fn too_deep(show_emojis: bool) -> String {
    if show_emojis {
        format!(
            "<div class=\"outlined\">{0} Too Many Levels In {0}</div>",
            EMOJI_INCONCLUSIVE_TEST
        )
    } else {
        "<div class=\"outlined\">Too Many Levels In</div>".to_string()
    }
}

/// Header written above the body of a root-level document.
pub fn default_header(title: &str) -> String {
    let logo = InlineImage::svg(LOGO_SVG);
    format!(
        "<h1>{}&nbsp;{}</h1>\r\n<hr>\r\n<small><i>Powered by Boolog...</i></small>\r\n\r\n",
        logo.img_tag("Boolog Logo"),
        title
    )
}

/// Everything in front of the header: doctype-less html root, title and theme.
pub(crate) fn document_prelude(title: &str, theme: Theme) -> String {
    format!(
        "<html>\r\n<meta charset=\"UTF-8\">\r\n<head>\r\n<title>{}</title>\r\n{}</head>\r\n<body>\r\n",
        title,
        theme.css()
    )
}

/// Date and time cells of a table row.
pub(crate) fn timestamp_cells(timestamp: &DateTime<Local>) -> String {
    format!(
        "<td class=\"min\"><small>{}</small></td><td>&nbsp;</td><td class=\"min\"><small>{}</small></td><td>&nbsp;</td>",
        timestamp.format("%Y-%m-%d"),
        timestamp.format("%H:%M:%S%.3f")
    )
}

/// An image carried inside the document as a `data:` URI.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InlineImage {
    mime_type: String,
    data: Vec<u8>,
}

impl InlineImage {
    pub fn new(mime_type: impl Into<String>, data: impl Into<Vec<u8>>) -> Self {
        Self {
            mime_type: mime_type.into(),
            data: data.into(),
        }
    }

    pub fn png(data: impl Into<Vec<u8>>) -> Self {
        Self::new("image/png", data)
    }

    pub fn svg(markup: &str) -> Self {
        Self::new("image/svg+xml", markup.as_bytes())
    }

    pub fn mime_type(&self) -> &str {
        &self.mime_type
    }

    /// `data:<mime>;base64,<payload>`
    pub fn data_uri(&self) -> String {
        format!("data:{};base64,{}", self.mime_type, STANDARD.encode(&self.data))
    }

    pub fn img_tag(&self, alt: &str) -> String {
        format!("<img src=\"{}\" alt=\"{}\" />", self.data_uri(), alt)
    }
}
