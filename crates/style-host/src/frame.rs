//! Container frame description

use design_tokens::Rgba;
use serde::Serialize;

/// A point in canvas coordinates
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Point {
    /// Horizontal coordinate
    pub x: f64,
    /// Vertical coordinate
    pub y: f64,
}

/// Visible region of the canvas
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Viewport {
    /// Visible width in canvas units
    pub width: f64,
    /// Visible height in canvas units
    pub height: f64,
    /// Center of the visible region
    pub center: Point,
}

impl Viewport {
    /// Viewport of the given size centered on `center`
    pub fn new(width: f64, height: f64, center: Point) -> Self {
        Self {
            width,
            height,
            center,
        }
    }
}

/// Axis sizing mode for auto-layout frames
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SizingMode {
    /// Size is set explicitly
    Fixed,
    /// Size hugs the content
    Auto,
}

/// Layout grid pattern
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum GridPattern {
    /// Vertical columns
    Columns,
    /// Square grid
    Grid,
}

/// Column alignment within the frame
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum GridAlignment {
    /// Columns centered in the frame
    Center,
}

/// A layout grid overlay
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LayoutGrid {
    /// Grid pattern
    pub pattern: GridPattern,
    /// Alignment (columns only)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alignment: Option<GridAlignment>,
    /// Gutter between columns (columns only)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gutter_size: Option<f64>,
    /// Column count (columns only)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub count: Option<u32>,
    /// Column width or grid cell size
    pub section_size: f64,
    /// Whether the grid is shown
    pub visible: bool,
    /// Overlay tint
    pub color: Rgba,
}

/// A frame to be created, placed, selected and scrolled into view
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FrameSpec {
    /// Frame name
    pub name: String,
    /// Width in pixels
    pub width: f64,
    /// Height in pixels
    pub height: f64,
    /// Horizontal auto layout with `(primary, counter)` sizing modes
    #[serde(skip_serializing_if = "Option::is_none")]
    pub auto_layout: Option<(SizingMode, SizingMode)>,
    /// Layout grid overlays
    pub layout_grids: Vec<LayoutGrid>,
    /// Solid fills
    pub fills: Vec<Rgba>,
    /// Top-left corner position
    pub position: Point,
}

impl FrameSpec {
    /// Whether the frame hugs its content horizontally
    pub fn is_auto_layout(&self) -> bool {
        self.auto_layout.is_some()
    }

    /// Center of the frame
    pub fn center(&self) -> Point {
        Point {
            x: self.position.x + self.width / 2.0,
            y: self.position.y + self.height / 2.0,
        }
    }
}
