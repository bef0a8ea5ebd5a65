//! Semantic classification of Tailwind utility classes.
//!
//! Two independent orderings are used: [`MATCH_ORDER`] decides which
//! category wins when a class matches rules of several categories, and
//! [`EMIT_ORDER`] decides the order in which categories are written out.

use std::fmt;

use crate::variant::strip_variant_chain;

/// Semantic category of a utility class.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Layout,
    Sizing,
    Spacing,
    Typography,
    Background,
    Borders,
    Effects,
    Filters,
    Interactivity,
    Svg,
    Accessibility,
    Transforms,
    Other,
}

impl Category {
    pub fn as_str(self) -> &'static str {
        match self {
            Category::Layout => "layout",
            Category::Sizing => "sizing",
            Category::Spacing => "spacing",
            Category::Typography => "typography",
            Category::Background => "background",
            Category::Borders => "borders",
            Category::Effects => "effects",
            Category::Filters => "filters",
            Category::Interactivity => "interactivity",
            Category::Svg => "svg",
            Category::Accessibility => "accessibility",
            Category::Transforms => "transforms",
            Category::Other => "other",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Order in which categories are written to the formatted attribute.
pub const EMIT_ORDER: [Category; 13] = [
    Category::Layout,
    Category::Sizing,
    Category::Spacing,
    Category::Typography,
    Category::Background,
    Category::Borders,
    Category::Effects,
    Category::Filters,
    Category::Transforms,
    Category::Interactivity,
    Category::Svg,
    Category::Accessibility,
    Category::Other,
];

/// Order in which categories are tried when classifying.
pub const MATCH_ORDER: [Category; 12] = [
    Category::Layout,
    Category::Sizing,
    Category::Spacing,
    Category::Typography,
    Category::Background,
    Category::Borders,
    Category::Effects,
    Category::Filters,
    Category::Interactivity,
    Category::Svg,
    Category::Accessibility,
    Category::Transforms,
];

/// Rule table, listed in [`MATCH_ORDER`]. Within a category the first
/// matching rule wins, so declaration order matters.
pub static CATEGORY_RULES: [(Category, &[&str]); 12] = [
    (
        Category::Layout,
        &[
            "container", "box-", "block", "inline", "flex", "grid", "table", "hidden", "float-",
            "clear-", "object-", "overflow-", "overscroll-", "static", "fixed", "absolute",
            "relative", "sticky", "isolate", "isolation-", "inset-", "top-", "right-", "bottom-",
            "left-", "visible", "invisible", "z-", "items-", "justify-", "self-",
        ],
    ),
    (
        Category::Sizing,
        &["w-", "h-", "min-w-", "min-h-", "max-w-", "max-h-", "size-"],
    ),
    (
        Category::Spacing,
        &[
            "p-", "px-", "py-", "pt-", "pr-", "pb-", "pl-", "ps-", "pe-", "m-", "mx-", "my-",
            "mt-", "mr-", "mb-", "ml-", "ms-", "me-", "space-",
        ],
    ),
    (
        Category::Typography,
        &[
            "font-", "text-", "antialiased", "subpixel-", "italic", "not-italic", "normal-nums",
            "ordinal", "slashed-zero", "lining-nums", "oldstyle-nums", "proportional-nums",
            "tabular-nums", "diagonal-fractions", "stacked-fractions", "leading-", "tracking-",
            "line-clamp-", "break-", "truncate", "text-ellipsis", "text-clip", "hyphens-",
            "uppercase", "lowercase", "capitalize", "normal-case", "underline", "overline",
            "line-through", "no-underline", "decoration-", "underline-offset-", "indent-",
            "align-", "whitespace-", "text-wrap", "text-nowrap", "text-balance", "text-pretty",
        ],
    ),
    (
        Category::Background,
        &["bg-", "from-", "via-", "to-", "background-"],
    ),
    (
        Category::Borders,
        &["border", "rounded", "divide-", "outline-", "ring-"],
    ),
    (
        Category::Effects,
        &[
            "shadow-", "opacity-", "mix-", "blur-", "brightness-", "contrast-", "grayscale",
            "hue-rotate-", "invert", "saturate-", "sepia", "backdrop-", "transition", "duration-",
            "ease-", "delay-", "animate-",
        ],
    ),
    (Category::Filters, &["filter", "backdrop-filter"]),
    (
        Category::Interactivity,
        &[
            "appearance-", "cursor-", "caret-", "pointer-events-", "resize-", "scroll-", "snap-",
            "touch-", "select-", "will-change-",
        ],
    ),
    (Category::Svg, &["fill-", "stroke-"]),
    (
        Category::Accessibility,
        &["sr-only", "not-sr-only", "forced-color-adjust-"],
    ),
    (
        Category::Transforms,
        &["scale-", "rotate-", "translate-", "skew-", "transform", "origin-"],
    ),
];

/// A rule matches a base class it prefixes, or the rule's bare form
/// (trailing hyphen removed) exactly.
fn rule_matches(base_class: &str, rule: &str) -> bool {
    base_class.starts_with(rule) || base_class == rule.strip_suffix('-').unwrap_or(rule)
}

/// Classify a class token, variants included.
///
/// Unknown classes fall back to [`Category::Other`].
pub fn classify(token: &str) -> Category {
    let base_class = strip_variant_chain(token);

    CATEGORY_RULES
        .iter()
        .find(|(_, rules)| rules.iter().any(|rule| rule_matches(base_class, rule)))
        .map_or(Category::Other, |(category, _)| *category)
}
