//! Window and door records
//!
//! `WindowSpec` mirrors the persisted record shape (camelCase JSON).
//! Optional fields stay optional here; defaults are applied once by the
//! drawing engine when it normalizes a record.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::catalog::TypeCatalogEntry;

/// Glass fill vocabulary
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum GlassType {
    /// Clear float glass
    #[default]
    Clear,
    /// Obscured privacy glass
    Obscure,
    /// Tinted solar glass
    Tinted,
    /// Low-emissivity coated glass
    LowE,
}

impl GlassType {
    /// Get glass type as its record string
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Clear => "clear",
            Self::Obscure => "obscure",
            Self::Tinted => "tinted",
            Self::LowE => "low-e",
        }
    }

    /// Parse from string, `None` for values outside the vocabulary
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "clear" => Some(Self::Clear),
            "obscure" | "obscured" | "frosted" => Some(Self::Obscure),
            "tinted" => Some(Self::Tinted),
            "low-e" | "lowe" | "low-emissivity" => Some(Self::LowE),
            _ => None,
        }
    }
}

impl From<String> for GlassType {
    fn from(s: String) -> Self {
        Self::parse(&s).unwrap_or_default()
    }
}

impl From<GlassType> for String {
    fn from(g: GlassType) -> Self {
        g.as_str().to_string()
    }
}

impl fmt::Display for GlassType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Which casements open
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CasementSide {
    /// Leftmost casement, hinged on its left
    Left,
    /// Rightmost casement, hinged on its right
    Right,
    /// Both outer casements
    Both,
    /// Nothing opens
    None,
    /// Second casement from the left, hinged on its left
    CenterLeft,
    /// Second casement from the right, hinged on its right
    CenterRight,
}

impl CasementSide {
    /// Get side as its record string
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Left => "left",
            Self::Right => "right",
            Self::Both => "both",
            Self::None => "none",
            Self::CenterLeft => "center-left",
            Self::CenterRight => "center-right",
        }
    }

    /// Parse from string, `None` for unrecognized values
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "left" => Some(Self::Left),
            "right" => Some(Self::Right),
            "both" => Some(Self::Both),
            "none" => Some(Self::None),
            "center-left" | "centre-left" => Some(Self::CenterLeft),
            "center-right" | "centre-right" => Some(Self::CenterRight),
            _ => None,
        }
    }
}

impl fmt::Display for CasementSide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A window or door configuration as stored in a project
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WindowSpec {
    /// Unique identifier, assigned on creation
    pub id: u64,
    /// Owning project
    pub project_id: u64,
    /// Display label
    #[serde(default)]
    pub name: String,
    /// Catalog type id
    #[serde(rename = "type")]
    pub window_type: String,
    /// Overall width in mm
    pub width: i64,
    /// Overall height in mm
    pub height: i64,
    #[serde(default)]
    pub glass_type: GlassType,
    #[serde(default)]
    pub has_georgian_bars: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub georgian_bars_horizontal: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub georgian_bars_vertical: Option<u32>,
    /// Raw opening side of the main casements
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub openable_casements: Option<String>,
    /// Raw opening side of the upper band on transom types
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub top_casements_openable: Option<String>,
    #[serde(default)]
    pub has_transom: bool,
    /// Transom offset from the top, in mm
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub transom_height: Option<i64>,
    #[serde(default)]
    pub position_x: f64,
    #[serde(default)]
    pub position_y: f64,
}

impl WindowSpec {
    /// Create a record with no optional fields set
    pub fn new(
        name: impl Into<String>,
        window_type: impl Into<String>,
        width: i64,
        height: i64,
    ) -> Self {
        Self {
            id: 0,
            project_id: 0,
            name: name.into(),
            window_type: window_type.into(),
            width,
            height,
            glass_type: GlassType::default(),
            has_georgian_bars: false,
            georgian_bars_horizontal: None,
            georgian_bars_vertical: None,
            openable_casements: None,
            top_casements_openable: None,
            has_transom: false,
            transom_height: None,
            position_x: 0.0,
            position_y: 0.0,
        }
    }

    /// Create a record for a catalog type using its default size
    pub fn for_type(entry: &TypeCatalogEntry, name: impl Into<String>) -> Self {
        let (width, height) = entry.default_size();
        Self::new(name, entry.id.clone(), width, height)
    }

    pub fn with_ids(mut self, id: u64, project_id: u64) -> Self {
        self.id = id;
        self.project_id = project_id;
        self
    }

    pub fn with_glass(mut self, glass_type: GlassType) -> Self {
        self.glass_type = glass_type;
        self
    }

    /// Enable Georgian bars with the given counts per axis
    pub fn with_georgian_bars(mut self, horizontal: u32, vertical: u32) -> Self {
        self.has_georgian_bars = true;
        self.georgian_bars_horizontal = Some(horizontal);
        self.georgian_bars_vertical = Some(vertical);
        self
    }

    pub fn with_openable(mut self, side: impl Into<String>) -> Self {
        self.openable_casements = Some(side.into());
        self
    }

    pub fn with_top_openable(mut self, side: impl Into<String>) -> Self {
        self.top_casements_openable = Some(side.into());
        self
    }

    /// Set a transom offset (mm from the top)
    pub fn with_transom(mut self, transom_height: i64) -> Self {
        self.has_transom = true;
        self.transom_height = Some(transom_height);
        self
    }

    /// Parse a single record from JSON
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }
}
