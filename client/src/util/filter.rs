//! Client-side filters over fetched collections.
//!
//! Filtering is a pure re-derivation of the stored snapshot; changing the
//! selection never triggers a refetch.

#[cfg(test)]
#[path = "filter_test.rs"]
mod filter_test;

use crate::net::types::{ProjectRecord, SkillCategory, SkillRecord};
use crate::util::format::capitalize;

/// Decides whether one record is visible under the current selection.
pub trait FilterPredicate<T> {
    fn matches(&self, item: &T) -> bool;
}

/// Clone out the records that pass `filter`, preserving order.
pub fn apply_filter<T, P>(items: &[T], filter: &P) -> Vec<T>
where
    T: Clone,
    P: FilterPredicate<T> + ?Sized,
{
    items.iter().filter(|item| filter.matches(item)).cloned().collect()
}

/// Skills page selection: everything, or one category.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SkillFilter {
    #[default]
    All,
    Category(SkillCategory),
}

impl SkillFilter {
    /// Button order on the Skills page.
    pub const OPTIONS: [Self; 4] = [
        Self::All,
        Self::Category(SkillCategory::Frontend),
        Self::Category(SkillCategory::Backend),
        Self::Category(SkillCategory::Tools),
    ];

    #[must_use]
    pub fn label(self) -> String {
        match self {
            Self::All => "All".to_owned(),
            Self::Category(c) => capitalize(c.as_str()),
        }
    }
}

impl FilterPredicate<SkillRecord> for SkillFilter {
    fn matches(&self, item: &SkillRecord) -> bool {
        match self {
            Self::All => true,
            Self::Category(c) => item.category == *c,
        }
    }
}

/// Projects page selection.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ProjectFilter {
    #[default]
    All,
    Featured,
}

impl ProjectFilter {
    pub const OPTIONS: [Self; 2] = [Self::All, Self::Featured];

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::All => "All Projects",
            Self::Featured => "Featured Only",
        }
    }
}

impl FilterPredicate<ProjectRecord> for ProjectFilter {
    fn matches(&self, item: &ProjectRecord) -> bool {
        match self {
            Self::All => true,
            Self::Featured => item.featured,
        }
    }
}
