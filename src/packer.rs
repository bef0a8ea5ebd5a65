//! Line layout of a class attribute value.
//!
//! Classes are bucketed by category, each bucket is split into responsive
//! clusters, and clusters are packed into lines under a width budget.

use clap::ValueEnum;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::classifier::{classify, Category, EMIT_ORDER};
use crate::grouper::group_responsive;
use crate::variant::split_classes;

/// Indentation of continuation lines inside a category.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum WrapIndentStyle {
    /// Continuation lines start at the class indent
    #[default]
    Same,
    /// Continuation lines get two more spaces than the class indent
    Extra,
}

impl WrapIndentStyle {
    pub fn as_str(self) -> &'static str {
        match self {
            WrapIndentStyle::Same => "same",
            WrapIndentStyle::Extra => "extra",
        }
    }
}

impl fmt::Display for WrapIndentStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for WrapIndentStyle {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "same" => Ok(WrapIndentStyle::Same),
            "extra" => Ok(WrapIndentStyle::Extra),
            other => Err(format!("unknown wrap indent style '{}', expected 'same' or 'extra'", other)),
        }
    }
}

/// Options for laying out one class attribute.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LayoutOptions {
    /// Indentation of the line holding the tag
    pub base_indent: String,
    /// Indentation of the attribute lines of the tag
    pub attribute_indent: String,
    /// Put the closing quote on its own line at attribute indent
    pub close_quote_on_new_line: bool,
    /// Soft line budget in characters, indentation included. 0 disables wrapping.
    pub max_line_width: usize,
    pub wrap_indent_style: WrapIndentStyle,
}

impl Default for LayoutOptions {
    fn default() -> Self {
        Self {
            base_indent: String::new(),
            attribute_indent: "  ".to_string(),
            close_quote_on_new_line: true,
            max_line_width: 80,
            wrap_indent_style: WrapIndentStyle::Same,
        }
    }
}

impl LayoutOptions {
    /// Indent of the first line of every category.
    pub fn class_indent(&self) -> String {
        format!("{}  ", self.attribute_indent)
    }

    /// Indent of continuation lines within a category.
    pub fn wrap_indent(&self) -> String {
        match self.wrap_indent_style {
            WrapIndentStyle::Same => self.class_indent(),
            WrapIndentStyle::Extra => format!("{}    ", self.attribute_indent),
        }
    }
}

/// A line under construction, tracking its character width.
struct LineBuilder {
    text: String,
    width: usize,
}

impl LineBuilder {
    fn start(indent: &str, cluster: &str) -> Self {
        let mut text = String::with_capacity(indent.len() + cluster.len());
        text.push_str(indent);
        text.push_str(cluster);
        Self {
            text,
            width: indent.chars().count() + cluster.chars().count(),
        }
    }

    /// Append `cluster` after a space if the result stays within `max_width`.
    fn try_extend(&mut self, cluster: &str, cluster_width: usize, max_width: usize) -> bool {
        let width = self.width + 1 + cluster_width;
        if width > max_width {
            return false;
        }
        self.text.push(' ');
        self.text.push_str(cluster);
        self.width = width;
        true
    }
}

/// Lay out classes into indented lines, without the surrounding newlines.
pub fn pack_lines(class_string: &str, options: &LayoutOptions) -> Vec<String> {
    let mut buckets: IndexMap<Category, Vec<&str>> = IndexMap::new();
    for class in split_classes(class_string) {
        buckets.entry(classify(class)).or_default().push(class);
    }

    let class_indent = options.class_indent();
    let wrap_indent = options.wrap_indent();
    let mut lines = Vec::new();

    for category in EMIT_ORDER {
        let Some(bucket) = buckets.get(&category) else {
            continue;
        };
        let clusters = group_responsive(bucket);

        if options.max_line_width == 0 {
            lines.extend(clusters.iter().map(|c| format!("{}{}", class_indent, c.joined())));
            continue;
        }

        let mut current: Option<LineBuilder> = None;
        for cluster in &clusters {
            let joined = cluster.joined();
            match current.as_mut() {
                None => current = Some(LineBuilder::start(&class_indent, &joined)),
                Some(line) => {
                    if !line.try_extend(&joined, cluster.width(), options.max_line_width) {
                        let full = std::mem::replace(line, LineBuilder::start(&wrap_indent, &joined));
                        lines.push(full.text);
                    }
                }
            }
        }
        if let Some(line) = current {
            lines.push(line.text);
        }
    }

    lines
}

/// Format a class attribute value.
///
/// The result always starts with a newline. With `close_quote_on_new_line`
/// it ends with a newline plus the attribute indent, so the closing quote
/// sits on its own line; otherwise the quote follows the last class.
pub fn pack(class_string: &str, options: &LayoutOptions) -> String {
    let lines = pack_lines(class_string, options);
    let body = lines.join("\n");

    if options.close_quote_on_new_line {
        format!("\n{}\n{}", body, options.attribute_indent)
    } else {
        format!("\n{}", body)
    }
}

/// Flat-argument form of [`pack`].
pub fn format_class_list(
    class_string: &str,
    base_indent: &str,
    attribute_indent: &str,
    close_quote_on_new_line: bool,
    max_line_width: usize,
    wrap_indent_style: WrapIndentStyle,
) -> String {
    let options = LayoutOptions {
        base_indent: base_indent.to_string(),
        attribute_indent: attribute_indent.to_string(),
        close_quote_on_new_line,
        max_line_width,
        wrap_indent_style,
    };
    pack(class_string, &options)
}
