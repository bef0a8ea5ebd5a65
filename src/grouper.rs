use indexmap::IndexMap;

use crate::variant::{breakpoint_rank, class_property};

/// Classes sharing one base property, ordered from the unprefixed class
/// through ascending breakpoints.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResponsiveCluster<'a> {
    pub property: &'a str,
    pub classes: Vec<&'a str>,
}

impl ResponsiveCluster<'_> {
    /// The cluster as it appears on an output line.
    pub fn joined(&self) -> String {
        self.classes.join(" ")
    }

    /// Character width of [`Self::joined`].
    pub fn width(&self) -> usize {
        let separators = self.classes.len().saturating_sub(1);
        self.classes.iter().map(|c| c.chars().count()).sum::<usize>() + separators
    }
}

/// Cluster classes by base property.
///
/// Clusters come out in the order their property was first seen. Inside a
/// cluster the sort by breakpoint rank is stable, so equal ranks keep their
/// input order.
pub fn group_responsive<'a>(classes: &[&'a str]) -> Vec<ResponsiveCluster<'a>> {
    let mut by_property: IndexMap<&'a str, Vec<&'a str>> = IndexMap::new();
    for &class in classes {
        by_property.entry(class_property(class)).or_default().push(class);
    }

    by_property
        .into_iter()
        .map(|(property, mut classes)| {
            classes.sort_by_key(|class| breakpoint_rank(class));
            ResponsiveCluster { property, classes }
        })
        .collect()
}
