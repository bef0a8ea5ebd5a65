//! Whole-document formatting: every tag with a class attribute is rebuilt
//! with one attribute per line and a packed class value.

use std::ops::Range;

use crate::config::FormatterConfig;
use crate::packer::pack;
use crate::tag_scanner::{line_indent, scan_class_tags, ClassTag};

/// Replacement of a byte range of the source document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextEdit {
    pub range: Range<usize>,
    pub new_text: String,
}

/// Result of formatting a document
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormattedDocument {
    pub text: String,
    /// Tags with a class attribute found in the source
    pub tags_scanned: usize,
    /// Tags that were rewritten
    pub tags_formatted: usize,
}

impl FormattedDocument {
    pub fn changed(&self) -> bool {
        self.tags_formatted > 0
    }
}

/// Compute the edits that format every class attribute in `text`.
///
/// Edits are in source order and never overlap. A tag is only edited when
/// its packed class value differs from the current one, so formatting a
/// formatted document yields no edits.
pub fn format_document(text: &str, config: &FormatterConfig) -> Vec<TextEdit> {
    scan_class_tags(text)
        .into_iter()
        .filter_map(|tag| {
            let base_indent = line_indent(text, tag.span.start);
            let layout = config.layout_for(base_indent);
            let packed = pack(tag.value, &layout);

            if packed == tag.value {
                return None;
            }

            tracing::debug!(
                tag = tag.tag_name,
                offset = tag.span.start,
                "formatting {} attribute",
                tag.attribute
            );

            Some(TextEdit {
                range: tag.span.clone(),
                new_text: rebuild_tag(&tag, &packed, base_indent, &layout.attribute_indent),
            })
        })
        .collect()
}

/// Rebuild a tag with each attribute group on its own line and `>` back at
/// the tag's indentation.
fn rebuild_tag(tag: &ClassTag<'_>, packed: &str, base_indent: &str, attribute_indent: &str) -> String {
    let mut out = format!("<{}", tag.tag_name);

    let before = tag.before.trim();
    if !before.is_empty() {
        out.push('\n');
        out.push_str(attribute_indent);
        out.push_str(before);
    }

    out.push('\n');
    out.push_str(attribute_indent);
    out.push_str(tag.attribute.as_str());
    out.push('=');
    out.push(tag.quote);
    out.push_str(packed);
    out.push(tag.quote);

    let after = tag.after.trim();
    if !after.is_empty() {
        out.push('\n');
        out.push_str(attribute_indent);
        out.push_str(after);
    }

    out.push('\n');
    out.push_str(base_indent);
    out.push('>');
    out
}

/// Apply non-overlapping edits computed against `text`.
pub fn apply_edits(text: &str, edits: &[TextEdit]) -> String {
    let mut sorted: Vec<&TextEdit> = edits.iter().collect();
    sorted.sort_by_key(|edit| edit.range.start);

    let mut result = text.to_string();
    for edit in sorted.into_iter().rev() {
        result.replace_range(edit.range.clone(), &edit.new_text);
    }
    result
}

/// Format a document and return the new text with counts.
pub fn format_text(text: &str, config: &FormatterConfig) -> FormattedDocument {
    let tags_scanned = scan_class_tags(text).len();
    let edits = format_document(text, config);

    FormattedDocument {
        text: apply_edits(text, &edits),
        tags_scanned,
        tags_formatted: edits.len(),
    }
}
