//! Rendering arbitrary values into a Boolog.
//!
//! Values are reflected through `serde_json::Value`: whatever a type
//! serializes is what gets shown. Objects become field/value tables, arrays
//! become index/value tables, and nesting becomes click-to-expand boxes.

mod error;

pub use error::depict_failure;

use bl_text::{html_escape, process_string, treat_as_code};
use chrono::Local;
use serde::Serialize;
use serde_json::Value;
use std::fmt::{Debug, Display};
use tracing::warn;
use uuid::Uuid;

use crate::config::ShowLimits;
use crate::constants::{EMOJI_OBJECT, EMOJI_TEXT_BLANK_LINE, NAMELESS};
use crate::error::Result;
use crate::html::{encapsulation_tag, expander, highlight, too_deep};
use crate::node::Boolog;
use crate::theme::SectionStyle;

impl Boolog {
    /// Render any serializable value as an HTML box and note it in plain text.
    ///
    /// Values that fail to serialize are shown as a note naming the type and
    /// the reason; that is never an error.
    pub fn show<T: Serialize + ?Sized>(&mut self, target: &T, name: &str) -> Result<String> {
        self.ensure_open("show")?;
        let type_name = short_type_name::<T>();
        let rendition = match serde_json::to_value(target) {
            Ok(value) => ValueRenderer::new(self.limits(), self.show_emojis()).render(&value, &type_name, name, 0),
            Err(e) => {
                warn!(type_name = %type_name, error = %e, "value could not be serialized for display");
                unrenderable(&type_name, name, &e.to_string())
            }
        };
        self.place(&rendition, &type_name, name)?;
        Ok(rendition)
    }

    /// Render a value through its `Debug` output, for types without `Serialize`.
    pub fn show_debug<T: Debug + ?Sized>(&mut self, target: &T, name: &str) -> Result<String> {
        self.ensure_open("show_debug")?;
        let type_name = short_type_name::<T>();
        let rendition = object_box(
            SectionStyle::Plate,
            &html_escape(&type_name),
            name,
            0,
            &treat_as_code(&format!("{:#?}", target)),
        );
        self.place(&rendition, &type_name, name)?;
        Ok(rendition)
    }

    /// Render key/value pairs as a map, keys by their `Display` form.
    pub fn show_map<K, V, I>(&mut self, entries: I, name: &str) -> Result<String>
    where
        K: Display,
        V: Serialize,
        I: IntoIterator<Item = (K, V)>,
    {
        self.ensure_open("show_map")?;
        let renderer = ValueRenderer::new(self.limits(), self.show_emojis());
        let rows: Vec<(String, String)> = entries
            .into_iter()
            .map(|(key, value)| {
                let cell = match serde_json::to_value(&value) {
                    Ok(v) => renderer.render(&v, "", NAMELESS, 1),
                    Err(e) => html_escape(&format!("(unrenderable: {})", e)),
                };
                (html_escape(&key.to_string()), cell)
            })
            .collect();

        let rendition = if rows.is_empty() {
            format!(
                "<div class=\"outlined highlighted\">(the map \"{}\" is empty)</div>",
                html_escape(name)
            )
        } else {
            let count = rows.len();
            let table = renderer.collapse(gridlines(rows), count, "items");
            object_box(SectionStyle::Neutral, "Map", name, 0, &table)
        };
        self.place(&rendition, "Map", name)?;
        Ok(rendition)
    }

    fn place(&mut self, rendition: &str, type_name: &str, name: &str) -> Result<()> {
        let timestamp = Local::now();
        self.write_to_html(rendition, EMOJI_TEXT_BLANK_LINE, Some(timestamp))?;
        self.echo_plain_text(
            &format!("Showing {}: {} (details in HTML log)", type_name, name),
            EMOJI_OBJECT,
            Some(timestamp),
        )
    }
}

struct ValueRenderer<'a> {
    limits: &'a ShowLimits,
    show_emojis: bool,
}

impl<'a> ValueRenderer<'a> {
    fn new(limits: &'a ShowLimits, show_emojis: bool) -> Self {
        Self { limits, show_emojis }
    }

    /// `depth` 0 is the top-level box; deeper boxes are collapsible.
    fn render(&self, value: &Value, type_name: &str, name: &str, depth: usize) -> String {
        if depth > self.limits.max_recursion {
            return too_deep(self.show_emojis);
        }

        match value {
            Value::Null => highlight(&format!("({} is Null)", html_escape(name))),
            Value::Bool(b) => self.scalar(&b.to_string(), type_name, name, depth),
            Value::Number(n) => self.scalar(&n.to_string(), type_name, name, depth),
            Value::String(s) => {
                let shown = html_escape(&process_string(name, s, None));
                self.scalar(&shown, type_name, name, depth)
            }
            Value::Array(items) => self.array(items, type_name, name, depth),
            Value::Object(fields) => self.object(fields, type_name, name, depth),
        }
    }

    // Nested scalars are inlined; only a top-level scalar gets its own box.
    fn scalar(&self, shown: &str, type_name: &str, name: &str, depth: usize) -> String {
        if depth > 0 {
            return shown.to_string();
        }
        object_box(SectionStyle::Neutral, &html_escape(type_name), name, 0, shown)
    }

    fn array(&self, items: &[Value], type_name: &str, name: &str, depth: usize) -> String {
        let class_name = if type_name.is_empty() { "Array" } else { type_name };
        if items.is_empty() {
            return format!(
                "<div class=\"outlined\">({} \"{}\" is empty)</div>",
                html_escape(class_name),
                html_escape(name)
            );
        }

        let rows = items
            .iter()
            .enumerate()
            .map(|(index, item)| {
                let slot = format!("Array slot #{}", index);
                (index.to_string(), self.render(item, "", &slot, depth + 1))
            })
            .collect();
        let table = self.collapse(gridlines(rows), items.len(), "items");
        object_box(SectionStyle::Neutral, &html_escape(class_name), name, depth, &table)
    }

    fn object(
        &self,
        fields: &serde_json::Map<String, Value>,
        type_name: &str,
        name: &str,
        depth: usize,
    ) -> String {
        let class_name = if type_name.is_empty() { "Object" } else { type_name };
        let count = fields.len();
        let visibility = match count {
            0 => "It has no visible members",
            1 => "The only member is visible",
            _ => "",
        };
        let visibility = if visibility.is_empty() {
            format!("All of the {} members are visible", count)
        } else {
            visibility.to_string()
        };

        let mut body = format!("<br><small><i>{}</i></small><br>", visibility);
        if count > 0 {
            let rows = fields
                .iter()
                .map(|(field, value)| {
                    (html_escape(field), self.render(value, "", field, depth + 1))
                })
                .collect();
            body.push_str(&self.collapse(gridlines(rows), count, "fields"));
        }
        object_box(SectionStyle::Plate, &html_escape(class_name), name, depth, &body)
    }

    fn collapse(&self, table: String, count: usize, noun: &str) -> String {
        if count > self.limits.max_object_fields {
            expander(&format!("(show {} {})", count, noun), &table)
        } else {
            table
        }
    }
}

fn gridlines(rows: Vec<(String, String)>) -> String {
    let mut table = String::from("<br><table class=\"gridlines\">\r\n");
    for (label, cell) in rows {
        table.push_str("<tr><td>");
        table.push_str(&label);
        table.push_str("</td><td>");
        table.push_str(&cell);
        table.push_str("</td></tr>\r\n");
    }
    table.push_str("\r\n</table><br>");
    table
}

/// The rounded box every rendered value sits in.
///
/// Boxes below the top level are wrapped in a checkbox label so they start
/// collapsed.
fn object_box(style: SectionStyle, class_name: &str, name: &str, depth: usize, body: &str) -> String {
    let mut result = format!(
        "\r\n<div class=\"object {} centered\">\r\n",
        style.css_class()
    );

    let nested = depth > 0;
    if nested {
        let identifier = Uuid::new_v4();
        result.push_str(&format!(
            "<label for=\"{0}\">\r\n<input id=\"{0}\" class=\"gone\" type=\"checkbox\">\r\n",
            identifier
        ));
    }

    result.push_str(&format!("<h2>{}</h2>\r\n<small>", class_name));
    if name == NAMELESS {
        result.push_str(NAMELESS);
    } else {
        result.push_str(&format!("\"{}\"", html_escape(name)));
    }
    result.push_str("</small><br>\r\n");

    if nested {
        result.push_str(&format!("<div class=\"{}\">\r\n", encapsulation_tag()));
    }
    result.push_str(body);
    if nested {
        result.push_str("\r\n</div></label>");
    }
    result.push_str("\r\n</div>");
    result
}

fn unrenderable(type_name: &str, name: &str, reason: &str) -> String {
    let note = format!(
        "<small><i>This value could not be rendered: {}</i></small>",
        html_escape(reason)
    );
    object_box(SectionStyle::Plate, &html_escape(type_name), name, 0, &note)
}

/// `std::any::type_name` with module paths stripped, e.g. `Vec<Point>`.
pub(crate) fn short_type_name<T: ?Sized>() -> String {
    let full = std::any::type_name::<T>();
    let mut out = String::with_capacity(full.len());
    let mut segment = String::new();
    for ch in full.chars() {
        match ch {
            ':' => segment.clear(),
            '<' | '>' | ',' | ' ' | '&' | '[' | ']' | ';' | '(' | ')' | '*' => {
                out.push_str(&segment);
                segment.clear();
                out.push(ch);
            }
            _ => segment.push(ch),
        }
    }
    out.push_str(&segment);
    out
}
