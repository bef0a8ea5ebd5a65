use regex::Regex;
use std::fmt;
use std::ops::Range;
use std::sync::LazyLock;

/// Opening tag carrying a `class` or `className` attribute.
///
/// Captures: tag name, attributes before, attribute spelling, double-quoted
/// value, single-quoted value, attributes after. The value runs to the next
/// occurrence of its own quote, so `font-['Inter']` survives inside double
/// quotes. An empty value does not match.
static CLASS_TAG: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"<([A-Za-z0-9_]+)([^>]*?)(class(?:Name)?)=(?:"([^"]+)"|'([^']+)')([^>]*?)>"#)
        .expect("class tag pattern is valid")
});

/// Spelling of the class attribute in the source.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttributeName {
    Class,
    ClassName,
}

impl AttributeName {
    pub fn as_str(self) -> &'static str {
        match self {
            AttributeName::Class => "class",
            AttributeName::ClassName => "className",
        }
    }
}

impl fmt::Display for AttributeName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An opening tag found in a document, borrowed from the source text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassTag<'a> {
    /// Byte range of the whole tag, `<` through `>`
    pub span: Range<usize>,
    pub tag_name: &'a str,
    /// Raw text between the tag name and the class attribute
    pub before: &'a str,
    pub attribute: AttributeName,
    pub quote: char,
    /// Raw class attribute value
    pub value: &'a str,
    /// Raw text between the class attribute and `>`
    pub after: &'a str,
}

/// Find every tag with a class attribute, left to right, without overlap.
pub fn scan_class_tags(text: &str) -> Vec<ClassTag<'_>> {
    CLASS_TAG
        .captures_iter(text)
        .filter_map(|caps| {
            let whole = caps.get(0)?;
            let attribute = match caps.get(3)?.as_str() {
                "className" => AttributeName::ClassName,
                _ => AttributeName::Class,
            };
            let (quote, value) = match caps.get(4) {
                Some(value) => ('"', value),
                None => ('\'', caps.get(5)?),
            };

            Some(ClassTag {
                span: whole.range(),
                tag_name: caps.get(1)?.as_str(),
                before: caps.get(2)?.as_str(),
                attribute,
                quote,
                value: value.as_str(),
                after: caps.get(6)?.as_str(),
            })
        })
        .collect()
}

/// Leading whitespace of the line containing byte `offset`.
pub fn line_indent(text: &str, offset: usize) -> &str {
    let line_start = text[..offset].rfind('\n').map_or(0, |i| i + 1);
    let line = &text[line_start..];
    let indent_len = line
        .char_indices()
        .find(|(_, c)| !c.is_whitespace() || *c == '\n' || *c == '\r')
        .map_or(line.len(), |(i, _)| i);
    &line[..indent_len]
}
