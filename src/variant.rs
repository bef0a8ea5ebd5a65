//! Class token decomposition: variant prefixes, responsive breakpoint and
//! base property.
//!
//! A token such as `md:hover:pt-4` is read as a chain of `name:` variant
//! prefixes followed by the base class `pt-4`, whose base property is `pt`.

use std::fmt;

/// Responsive breakpoints, declared in ascending width order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Breakpoint {
    Sm,
    Md,
    Lg,
    Xl,
    Xl2,
}

impl Breakpoint {
    /// All breakpoints in rank order.
    pub const ALL: [Breakpoint; 5] = [
        Breakpoint::Sm,
        Breakpoint::Md,
        Breakpoint::Lg,
        Breakpoint::Xl,
        Breakpoint::Xl2,
    ];

    /// The literal used as a variant prefix (`sm`, `md`, ...).
    pub fn as_str(self) -> &'static str {
        match self {
            Breakpoint::Sm => "sm",
            Breakpoint::Md => "md",
            Breakpoint::Lg => "lg",
            Breakpoint::Xl => "xl",
            Breakpoint::Xl2 => "2xl",
        }
    }

    /// Parse a prefix literal. Only the exact literals are accepted.
    pub fn from_prefix(prefix: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|bp| bp.as_str() == prefix)
    }

    /// Position in the breakpoint list, starting at 0 for `sm`.
    pub fn rank(self) -> i8 {
        self as i8
    }
}

impl fmt::Display for Breakpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Split a raw attribute value into class tokens, dropping empty runs.
pub fn split_classes(class_string: &str) -> Vec<&str> {
    class_string.split_whitespace().collect()
}

/// Length of a leading `[a-z0-9]+:` prefix, colon included.
fn variant_prefix_len(token: &str) -> Option<usize> {
    let run = token
        .bytes()
        .take_while(|b| b.is_ascii_lowercase() || b.is_ascii_digit())
        .count();
    (run > 0 && token.as_bytes().get(run) == Some(&b':')).then_some(run + 1)
}

/// Remove every leading variant prefix.
///
/// `dark:hover:sm:bg-gray-100` becomes `bg-gray-100`. Prefixes that carry
/// other characters (`group-hover:`, `[&>*]:`) stop the stripping.
pub fn strip_variants(token: &str) -> &str {
    let mut rest = token;
    while let Some(len) = variant_prefix_len(rest) {
        rest = &rest[len..];
    }
    rest
}

/// Remove the variant chain in one step, keeping a non-empty remainder.
///
/// Differs from [`strip_variants`] only when stripping every prefix would
/// leave nothing behind: the last prefix is then kept as the base class
/// (`a:b:` yields `b:`), and a lone prefix such as `hover:` is returned
/// unchanged.
pub fn strip_variant_chain(token: &str) -> &str {
    let mut ends = Vec::new();
    let mut offset = 0;
    while let Some(len) = variant_prefix_len(&token[offset..]) {
        offset += len;
        ends.push(offset);
    }

    while let Some(end) = ends.pop() {
        if end < token.len() {
            return &token[end..];
        }
    }
    token
}

/// Breakpoint named by the first variant prefix, if any.
///
/// Only the very first prefix is consulted: `md:hover:pt-4` is `md`, while
/// `hover:md:pt-4` has no breakpoint.
pub fn breakpoint_of(token: &str) -> Option<Breakpoint> {
    let (prefix, _) = token.split_once(':')?;
    Breakpoint::from_prefix(prefix)
}

/// Sort weight for responsive ordering: `-1` without breakpoint, then the
/// breakpoint rank.
pub fn breakpoint_rank(token: &str) -> i8 {
    breakpoint_of(token).map_or(-1, Breakpoint::rank)
}

/// Base property of a token: the leading lowercase letters of its base class.
///
/// `pt-4` is `pt`, `min-w-full` is `min`. A base class without leading
/// letters is returned whole.
pub fn class_property(token: &str) -> &str {
    let base = strip_variants(token);
    let letters = base.bytes().take_while(u8::is_ascii_lowercase).count();
    if letters == 0 {
        base
    } else {
        &base[..letters]
    }
}
