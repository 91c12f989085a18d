//! Category catalog
//!
//! The catalog is external, read-only reference data: it populates selection
//! options and resolves display names. The state machine never validates an
//! expense's category id against it; unknown ids render as the raw id.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::CategoryId;

/// A spending category from the external catalog
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    /// Catalog identifier
    pub id: CategoryId,

    /// Display name
    pub name: String,

    /// Icon reference (asset name in the hosting UI)
    pub icon: String,
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

/// Ordered, read-only collection of categories
#[derive(Debug, Clone, Default)]
pub struct CategoryCatalog {
    categories: Vec<Category>,
}

impl CategoryCatalog {
    /// The stock catalog shipped with the application
    pub fn standard() -> Self {
        let categories = [
            ("savings", "Savings", "icon_savings"),
            ("food", "Food", "icon_food"),
            ("home", "Home", "icon_home"),
            ("miscellaneous", "Miscellaneous", "icon_miscellaneous"),
            ("leisure", "Leisure", "icon_leisure"),
            ("health", "Health", "icon_health"),
            ("subscriptions", "Subscriptions", "icon_subscriptions"),
        ]
        .into_iter()
        .map(|(id, name, icon)| Category {
            id: CategoryId::new(id),
            name: name.to_string(),
            icon: icon.to_string(),
        })
        .collect();

        Self { categories }
    }

    /// Look up a category by id
    pub fn find(&self, id: &CategoryId) -> Option<&Category> {
        self.categories.iter().find(|c| &c.id == id)
    }

    /// Resolve a display name, falling back to the raw id for unknown ids
    pub fn display_name(&self, id: &CategoryId) -> String {
        self.find(id)
            .map(|c| c.name.clone())
            .unwrap_or_else(|| id.to_string())
    }

    /// Iterate the catalog in its defined order
    pub fn iter(&self) -> impl Iterator<Item = &Category> {
        self.categories.iter()
    }

    pub fn len(&self) -> usize {
        self.categories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }
}
