//! Category filter + free-text search over the catalog
use crate::models::Service;

/// Category selector state
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum CategoryFilter {
    #[default]
    All,
    Category(String),
}

impl CategoryFilter {
    /// Build from a selector key, where "all" means no filter
    #[cfg(test)]
    pub fn from_key(key: &str) -> Self {
        if key == "all" {
            CategoryFilter::All
        } else {
            CategoryFilter::Category(key.to_string())
        }
    }

    pub fn matches(&self, category: &str) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Category(selected) => selected == category,
        }
    }
}

/// Services matching both the category and the search text, in catalog order
pub fn visible<'a>(
    catalog: &'a [Service],
    filter: &CategoryFilter,
    search: &str,
) -> Vec<&'a Service> {
    let needle = search.to_lowercase();
    catalog
        .iter()
        .filter(|service| filter.matches(&service.category))
        .filter(|service| {
            needle.is_empty()
                || service.name.to_lowercase().contains(&needle)
                || service.description.to_lowercase().contains(&needle)
        })
        .collect()
}

/// Distinct categories in first-seen order (drives the category chips)
pub fn categories(catalog: &[Service]) -> Vec<&str> {
    let mut seen: Vec<&str> = Vec::new();
    for service in catalog {
        if !seen.contains(&service.category.as_str()) {
            seen.push(&service.category);
        }
    }
    seen
}
