//! JSON layout files: an optional grid section plus the blocks placed on it

use std::fs;
use std::path::Path;

use glam::{IVec2, Vec2};
use serde::{Deserialize, Serialize};

use crate::algorithm::batch::Snappable;
use crate::io::configuration::{DEFAULT_CELL_SIZE, DEFAULT_MAX_CELL, DEFAULT_MIN_CELL, DEFAULT_PIVOT};
use crate::io::error::{Result, WithPath};
use crate::spatial::footprint::{BlockShape, Footprint};
use crate::spatial::grid::Grid;

/// Grid parameters as stored in a layout file
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GridConfig {
    /// Edge length of one cell in world units
    pub cell_size: f32,
    /// Lowest cell index (inclusive)
    pub min: [i32; 2],
    /// Upper cell index bound (exclusive)
    pub max: [i32; 2],
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            cell_size: DEFAULT_CELL_SIZE,
            min: DEFAULT_MIN_CELL,
            max: DEFAULT_MAX_CELL,
        }
    }
}

impl GridConfig {
    /// Validate the parameters and build the grid
    ///
    /// # Errors
    ///
    /// Returns an error if the parameters violate the grid invariants
    pub fn build(&self) -> Result<Grid> {
        Grid::new(
            self.cell_size,
            IVec2::from_array(self.min),
            IVec2::from_array(self.max),
        )
    }
}

/// One block in a layout
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BlockSpec {
    /// Display name, only used in messages
    #[serde(default)]
    pub name: String,
    /// Anchor position in world units
    pub position: Vec2,
    /// Block size in world units
    pub size: Vec2,
    /// Normalized anchor position inside the block
    #[serde(default = "default_pivot")]
    pub pivot: Vec2,
}

fn default_pivot() -> Vec2 {
    Vec2::from_array(DEFAULT_PIVOT)
}

impl BlockSpec {
    /// Shape of the block independent of its position
    ///
    /// # Errors
    ///
    /// Returns an error if the size is negative or a value is not finite
    pub fn shape(&self) -> Result<BlockShape> {
        BlockShape::new(self.size, self.pivot)
    }
}

impl Snappable for BlockSpec {
    fn footprint(&self) -> Result<Footprint> {
        self.shape()?.footprint_at(self.position)
    }

    fn set_position(&mut self, position: Vec2) {
        self.position = position;
    }
}

/// Contents of a layout file
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Layout {
    /// Grid the blocks live on; defaults apply when absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub grid: Option<GridConfig>,
    /// Blocks to snap
    #[serde(default)]
    pub blocks: Vec<BlockSpec>,
}

impl Layout {
    /// Parse a layout from JSON text
    ///
    /// # Errors
    ///
    /// Returns an error if the text is not a valid layout
    pub fn from_json(json: &str, origin: &Path) -> Result<Self> {
        serde_json::from_str(json).with_path(origin, "parse")
    }

    /// Read and parse a layout file
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or is not a valid layout
    pub fn load(path: &Path) -> Result<Self> {
        let json = fs::read_to_string(path).with_path(path, "read")?;
        Self::from_json(&json, path)
    }

    /// Write the layout as pretty-printed JSON
    ///
    /// # Errors
    ///
    /// Returns an error if serialization or writing fails
    pub fn save(&self, path: &Path) -> Result<()> {
        let mut json = serde_json::to_string_pretty(self).with_path(path, "serialize")?;
        json.push('\n');
        fs::write(path, json).with_path(path, "write")
    }

    /// Grid section, or the default grid parameters
    pub fn grid_config(&self) -> GridConfig {
        self.grid.unwrap_or_default()
    }
}
