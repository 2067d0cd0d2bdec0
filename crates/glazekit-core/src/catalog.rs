//! Window and door type catalog
//!
//! This module provides:
//! - Window/door categories
//! - Allowed and default dimensions per type
//! - Lookup by type id with a fallback to the first entry

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::OnceLock;

use crate::error::{Dimension, DimensionError};

/// Catalog categories
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WindowCategory {
    /// Glazed window units
    Window,
    /// External and internal doors
    Door,
}

impl WindowCategory {
    /// Get category as string
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Window => "window",
            Self::Door => "door",
        }
    }

    /// Parse from string
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "window" | "windows" => Some(Self::Window),
            "door" | "doors" => Some(Self::Door),
            _ => None,
        }
    }
}

impl std::fmt::Display for WindowCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Window => write!(f, "Window"),
            Self::Door => write!(f, "Door"),
        }
    }
}

/// Static description of one window or door type
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TypeCatalogEntry {
    /// Unique type identifier, e.g. `double-transom`
    pub id: String,
    /// Display name
    pub name: String,
    /// Brief description
    pub description: String,
    /// Window or door
    pub category: WindowCategory,
    /// Smallest allowed width in mm
    pub min_width: i64,
    /// Largest allowed width in mm
    pub max_width: i64,
    /// Smallest allowed height in mm
    pub min_height: i64,
    /// Largest allowed height in mm
    pub max_height: i64,
    /// Width used for new records
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_width: Option<i64>,
    /// Height used for new records
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_height: Option<i64>,
}

impl TypeCatalogEntry {
    fn new(
        id: &str,
        name: &str,
        description: &str,
        category: WindowCategory,
        width: (i64, i64),
        height: (i64, i64),
        default_size: Option<(i64, i64)>,
    ) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            description: description.to_string(),
            category,
            min_width: width.0,
            max_width: width.1,
            min_height: height.0,
            max_height: height.1,
            default_width: default_size.map(|(w, _)| w),
            default_height: default_size.map(|(_, h)| h),
        }
    }

    /// Default size for new records, falling back to the middle of the range
    pub fn default_size(&self) -> (i64, i64) {
        (
            self.default_width
                .unwrap_or((self.min_width + self.max_width) / 2),
            self.default_height
                .unwrap_or((self.min_height + self.max_height) / 2),
        )
    }

    /// Is the type a door
    pub fn is_door(&self) -> bool {
        self.category == WindowCategory::Door
    }

    /// Check a size against this entry's allowed range
    pub fn check_dimensions(&self, width: i64, height: i64) -> Result<(), DimensionError> {
        check_positive(width, height)?;

        let checks = [
            (Dimension::Width, width, self.min_width, self.max_width),
            (Dimension::Height, height, self.min_height, self.max_height),
        ];
        for (dimension, value, min, max) in checks {
            if !(min..=max).contains(&value) {
                return Err(DimensionError::OutOfRange {
                    type_id: self.id.clone(),
                    dimension,
                    value,
                    min,
                    max,
                });
            }
        }
        Ok(())
    }
}

/// Reject zero and negative sizes
pub fn check_positive(width: i64, height: i64) -> Result<(), DimensionError> {
    if width <= 0 {
        return Err(DimensionError::NonPositive {
            dimension: Dimension::Width,
            value: width,
        });
    }
    if height <= 0 {
        return Err(DimensionError::NonPositive {
            dimension: Dimension::Height,
            value: height,
        });
    }
    Ok(())
}

/// Result of resolving a type id
#[derive(Debug, Clone, Copy)]
pub struct CatalogMatch<'a> {
    /// The entry that will be used
    pub entry: &'a TypeCatalogEntry,
    /// True when the requested id was unknown and the first entry was substituted
    pub used_fallback: bool,
}

/// Ordered catalog of window and door types
#[derive(Debug, Clone)]
pub struct TypeCatalog {
    entries: Vec<TypeCatalogEntry>,
    index: HashMap<String, usize>,
}

impl TypeCatalog {
    /// Build a catalog from entries. Later duplicates of an id are dropped.
    ///
    /// Returns `None` for an empty list, since lookup always needs a fallback entry.
    pub fn from_entries(entries: Vec<TypeCatalogEntry>) -> Option<Self> {
        if entries.is_empty() {
            return None;
        }
        Some(Self::build(entries))
    }

    fn build(entries: Vec<TypeCatalogEntry>) -> Self {
        let mut kept = Vec::with_capacity(entries.len());
        let mut index = HashMap::new();
        for entry in entries {
            if index.contains_key(&entry.id) {
                tracing::warn!("Duplicate catalog id '{}' ignored", entry.id);
                continue;
            }
            index.insert(entry.id.clone(), kept.len());
            kept.push(entry);
        }

        Self {
            entries: kept,
            index,
        }
    }

    /// The standard catalog of window and door types
    pub fn standard() -> Self {
        use WindowCategory::{Door, Window};

        let entries = vec![
            TypeCatalogEntry::new(
                "single",
                "Single Casement",
                "One opening or fixed casement",
                Window,
                (300, 1200),
                (300, 2400),
                Some((600, 1050)),
            ),
            TypeCatalogEntry::new(
                "double",
                "Double Casement",
                "Two casements divided by a mullion",
                Window,
                (600, 2400),
                (300, 2400),
                Some((1200, 1050)),
            ),
            TypeCatalogEntry::new(
                "triple",
                "Triple Casement",
                "Three casements divided by two mullions",
                Window,
                (900, 3000),
                (300, 2400),
                Some((1800, 1050)),
            ),
            TypeCatalogEntry::new(
                "quad",
                "Quad Casement",
                "Four casements divided by three mullions",
                Window,
                (1200, 3600),
                (300, 2400),
                Some((2400, 1050)),
            ),
            TypeCatalogEntry::new(
                "single-transom",
                "Single Casement with Transom",
                "One casement below a fixed or top-hung light",
                Window,
                (300, 1200),
                (600, 2700),
                Some((600, 1350)),
            ),
            TypeCatalogEntry::new(
                "double-transom",
                "Double Casement with Transom",
                "Two casements below a transom bar",
                Window,
                (600, 2400),
                (600, 2700),
                Some((1200, 1350)),
            ),
            TypeCatalogEntry::new(
                "triple-transom",
                "Triple Casement with Transom",
                "Three casements below a transom bar",
                Window,
                (900, 3000),
                (600, 2700),
                Some((1800, 1350)),
            ),
            TypeCatalogEntry::new(
                "quad-transom",
                "Quad Casement with Transom",
                "Four casements below a transom bar",
                Window,
                (1200, 3600),
                (600, 2700),
                Some((2400, 1350)),
            ),
            TypeCatalogEntry::new(
                "sliding",
                "Sliding Sash",
                "Two sashes sliding past each other",
                Window,
                (900, 3000),
                (600, 2400),
                Some((1500, 1200)),
            ),
            TypeCatalogEntry::new(
                "door-boarded",
                "Boarded Door",
                "Ledged and braced door of vertical boards",
                Door,
                (600, 1100),
                (1800, 2400),
                Some((838, 1981)),
            ),
            TypeCatalogEntry::new(
                "door-glazed",
                "Fully Glazed Door",
                "Single glazed panel within a door frame",
                Door,
                (600, 1100),
                (1800, 2400),
                Some((838, 1981)),
            ),
            TypeCatalogEntry::new(
                "door-half-glazed",
                "Half Glazed Door",
                "Glazed upper half above a solid panel",
                Door,
                (600, 1100),
                (1800, 2400),
                Some((838, 1981)),
            ),
            TypeCatalogEntry::new(
                "door-six-panel",
                "Six Panel Door",
                "Traditional door with three rows of two panels",
                Door,
                (600, 1100),
                (1800, 2400),
                None,
            ),
        ];

        Self::build(entries)
    }

    /// Shared instance of the standard catalog
    pub fn global() -> &'static TypeCatalog {
        static CATALOG: OnceLock<TypeCatalog> = OnceLock::new();
        CATALOG.get_or_init(TypeCatalog::standard)
    }

    /// Exact lookup
    pub fn get(&self, id: &str) -> Option<&TypeCatalogEntry> {
        self.index.get(id).map(|&i| &self.entries[i])
    }

    /// Resolve an id, substituting the first entry when unknown
    pub fn resolve(&self, id: &str) -> CatalogMatch<'_> {
        match self.get(id) {
            Some(entry) => CatalogMatch {
                entry,
                used_fallback: false,
            },
            None => CatalogMatch {
                entry: self.fallback(),
                used_fallback: true,
            },
        }
    }

    /// Lookup that never fails: unknown ids yield the first entry
    pub fn lookup(&self, id: &str) -> &TypeCatalogEntry {
        self.resolve(id).entry
    }

    /// The entry used for unknown ids
    pub fn fallback(&self) -> &TypeCatalogEntry {
        &self.entries[0]
    }

    /// All entries in catalog order
    pub fn entries(&self) -> impl Iterator<Item = &TypeCatalogEntry> {
        self.entries.iter()
    }

    /// Entries of one category in catalog order
    pub fn by_category(
        &self,
        category: WindowCategory,
    ) -> impl Iterator<Item = &TypeCatalogEntry> {
        self.entries.iter().filter(move |e| e.category == category)
    }

    /// Window entries
    pub fn windows(&self) -> impl Iterator<Item = &TypeCatalogEntry> {
        self.by_category(WindowCategory::Window)
    }

    /// Door entries
    pub fn doors(&self) -> impl Iterator<Item = &TypeCatalogEntry> {
        self.by_category(WindowCategory::Door)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for TypeCatalog {
    fn default() -> Self {
        Self::standard()
    }
}
