//! SVG fragment construction.
//!
//! One structured path to markup for the whole crate: [`Element`] carries a
//! tag, an insertion-ordered attribute map, an optional `<title>` child and
//! pre-rendered children; [`PathData`] builds path `d` strings segment by
//! segment. Everything serializes through the same escaping and number
//! formatting, so no call site formats markup by hand.

use indexmap::IndexMap;

use crate::geometry::Point;

/// Escape text for attribute values and text content.
///
/// Covers both quote characters, so values are safe in either quoting
/// style; ampersands are never passed through raw.
pub(crate) fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#x27;"),
            _ => out.push(c),
        }
    }
    out
}

/// Format a number for SVG output (6 significant figures).
pub(crate) fn fmt_num(value: f64) -> String {
    fmt_num_precision(value, 6)
}

/// Format a number with the given significant figures, trailing zeros
/// trimmed.
pub(crate) fn fmt_num_precision(value: f64, sig_figs: i32) -> String {
    if value == 0.0 {
        return "0".to_string();
    }

    // Round to the requested significant figures
    let abs_val = value.abs();
    let magnitude = abs_val.log10().floor() as i32;
    let scale = 10_f64.powi(sig_figs - 1 - magnitude);
    let rounded = (value * scale).round() / scale;

    // Format with enough decimal places, then trim. Only fractional
    // digits are trimmed; an integral result keeps its trailing zeros.
    let decimals = (sig_figs - 1 - magnitude).max(0) as usize;
    let s = format!("{:.prec$}", rounded, prec = decimals);
    if decimals == 0 {
        return s;
    }
    let s = s.trim_end_matches('0');
    let s = s.trim_end_matches('.');
    s.to_string()
}

/// An attribute value: text (escaped on output) or a number (formatted
/// via [`fmt_num`]).
#[derive(Clone, Debug, PartialEq)]
pub enum AttrValue {
    Text(String),
    Number(f64),
}

impl AttrValue {
    fn render(&self) -> String {
        match self {
            AttrValue::Text(s) => escape(s),
            AttrValue::Number(n) => fmt_num(*n),
        }
    }
}

impl From<&str> for AttrValue {
    fn from(s: &str) -> AttrValue {
        AttrValue::Text(s.to_string())
    }
}

impl From<String> for AttrValue {
    fn from(s: String) -> AttrValue {
        AttrValue::Text(s)
    }
}

impl From<f64> for AttrValue {
    fn from(n: f64) -> AttrValue {
        AttrValue::Number(n)
    }
}

impl From<PathData> for AttrValue {
    fn from(path: PathData) -> AttrValue {
        AttrValue::Text(path.d)
    }
}

/// A single SVG element under construction.
///
/// Attributes keep insertion order, so output is deterministic. Children
/// are already-serialized fragments produced by the same machinery.
#[derive(Clone, Debug)]
pub struct Element {
    tag: &'static str,
    attrs: IndexMap<String, AttrValue>,
    title: Option<String>,
    children: Vec<String>,
}

impl Element {
    pub fn new(tag: &'static str) -> Element {
        Element {
            tag,
            attrs: IndexMap::new(),
            title: None,
            children: Vec::new(),
        }
    }

    pub fn attr(mut self, name: impl Into<String>, value: impl Into<AttrValue>) -> Element {
        self.attrs.insert(name.into(), value.into());
        self
    }

    /// Merge a prepared attribute map, extending in iteration order.
    pub fn attrs(mut self, attrs: IndexMap<String, AttrValue>) -> Element {
        self.attrs.extend(attrs);
        self
    }

    /// Set the `<title>` child (tooltip text, escaped on output).
    pub fn title(mut self, title: impl Into<String>) -> Element {
        self.title = Some(title.into());
        self
    }

    /// Append an already-rendered child fragment.
    pub fn child(mut self, fragment: impl Into<String>) -> Element {
        self.children.push(fragment.into());
        self
    }

    /// Serialize: self-closing when there is no title and no child.
    pub fn render(&self) -> String {
        let mut out = String::new();
        out.push('<');
        out.push_str(self.tag);
        for (name, value) in &self.attrs {
            out.push(' ');
            out.push_str(name);
            out.push_str("='");
            out.push_str(&value.render());
            out.push('\'');
        }
        if self.title.is_none() && self.children.is_empty() {
            out.push_str("/>");
            return out;
        }
        out.push('>');
        if let Some(title) = &self.title {
            out.push_str("<title>");
            out.push_str(&escape(title));
            out.push_str("</title>");
        }
        for child in &self.children {
            out.push_str(child);
        }
        out.push_str("</");
        out.push_str(self.tag);
        out.push('>');
        out
    }
}

/// Fluent builder for SVG path data.
///
/// Coordinate pairs render as `"x,y "` ([`Point::to_path_string`]); the
/// trailing spaces separate segments, e.g.
/// `M 50,50 L 100,50 A 50,50 0 0 1 50,0 Z`.
#[derive(Clone, Debug, Default)]
pub struct PathData {
    d: String,
}

impl PathData {
    pub fn new() -> PathData {
        PathData::default()
    }

    /// Move to an absolute point.
    pub fn move_to(mut self, p: Point) -> PathData {
        self.d.push_str("M ");
        self.d.push_str(&p.to_path_string());
        self
    }

    /// Line to an absolute point.
    pub fn line_to(mut self, p: Point) -> PathData {
        self.d.push_str("L ");
        self.d.push_str(&p.to_path_string());
        self
    }

    /// Continue the current command with another coordinate pair.
    pub fn point(mut self, p: Point) -> PathData {
        self.d.push_str(&p.to_path_string());
        self
    }

    /// Elliptical arc to `end`, x-axis rotation fixed at 0.
    pub fn arc_to(mut self, radii: Point, large_arc: bool, sweep: bool, end: Point) -> PathData {
        self.d.push_str("A ");
        self.d.push_str(&radii.to_path_string());
        self.d.push_str("0 ");
        self.d.push_str(if large_arc { "1 " } else { "0 " });
        self.d.push_str(if sweep { "1 " } else { "0 " });
        self.d.push_str(&end.to_path_string());
        self
    }

    /// Close the path.
    pub fn close(mut self) -> PathData {
        self.d.push('Z');
        self
    }

    pub fn is_empty(&self) -> bool {
        self.d.is_empty()
    }
}
