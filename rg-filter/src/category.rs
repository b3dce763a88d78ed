//! Report categories.
//!
//! Categories are defined by the backend, so the set of choices is
//! configuration (see [`crate::config::ReportConfig`]) rather than an enum.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A selected report category value, e.g. `"webinars"`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Category(String);

impl Category {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Category {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

/// A selectable category with its display label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryOption {
    pub value: String,
    pub label: String,
}

impl CategoryOption {
    pub fn new(value: &str, label: &str) -> Self {
        Self {
            value: value.to_string(),
            label: label.to_string(),
        }
    }

    pub fn category(&self) -> Category {
        Category::new(self.value.as_str())
    }
}

/// Categories offered by the JSON-body report service.
pub fn default_catalog() -> Vec<CategoryOption> {
    vec![
        CategoryOption::new("webinars", "Webinars"),
        CategoryOption::new("blogs", "Blogs"),
        CategoryOption::new("certifications", "Certifications"),
        CategoryOption::new("pocs", "POCs"),
    ]
}

/// Categories offered by the older query-string report service.
pub fn legacy_catalog() -> Vec<CategoryOption> {
    vec![
        CategoryOption::new("webinars", "Webinars"),
        CategoryOption::new("blogs", "Blogs"),
        CategoryOption::new("projects", "Projects"),
        CategoryOption::new("sow", "Statements of Work"),
        CategoryOption::new("technology", "Technology"),
        CategoryOption::new("employee", "Employee"),
    ]
}

/// Label for a category value, falling back to the raw value.
pub fn label_for<'a>(catalog: &'a [CategoryOption], category: &'a Category) -> &'a str {
    catalog
        .iter()
        .find(|option| option.value == category.as_str())
        .map(|option| option.label.as_str())
        .unwrap_or_else(|| category.as_str())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_label_lookup() {
        let catalog = legacy_catalog();
        assert_eq!(label_for(&catalog, &Category::new("sow")), "Statements of Work");
        assert_eq!(label_for(&catalog, &Category::new("pocs")), "pocs");
    }

    #[test]
    fn test_category_serializes_as_plain_string() {
        let json = serde_json::to_string(&vec![Category::new("blogs")]).unwrap();
        assert_eq!(json, r#"["blogs"]"#);
    }
}
