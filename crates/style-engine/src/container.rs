//! Container frame planning

use design_tokens::ContainerSize;
use style_host::{FrameSpec, GridAlignment, GridPattern, LayoutGrid, Point, SizingMode, Viewport};

use crate::config::FrameConfig;

/// Column grid plus a full-bleed margin grid
fn layout_grids(config: &FrameConfig) -> Vec<LayoutGrid> {
    vec![
        LayoutGrid {
            pattern: GridPattern::Columns,
            alignment: Some(GridAlignment::Center),
            gutter_size: Some(config.gutter),
            count: Some(config.column_count),
            section_size: config.section_size,
            visible: true,
            color: config.column_color,
        },
        LayoutGrid {
            pattern: GridPattern::Grid,
            alignment: None,
            gutter_size: None,
            count: None,
            section_size: config.section_size,
            visible: true,
            color: config.margin_color,
        },
    ]
}

/// Describe the container frame for a breakpoint, centered in the viewport
///
/// `ContainerSize::None` spans the viewport width with horizontal auto
/// layout; other sizes use their fixed width. Requesting a grid always sets
/// the height to the configured grid height.
pub fn plan_container_frame(
    size: ContainerSize,
    add_grid: bool,
    viewport: &Viewport,
    config: &FrameConfig,
) -> FrameSpec {
    let (width, auto_layout) = match size.fixed_width() {
        Some(width) => (width, None),
        None => (viewport.width, Some((SizingMode::Fixed, SizingMode::Auto))),
    };

    let (height, layout_grids, fills) = if add_grid {
        (config.grid_height, layout_grids(config), vec![config.fill])
    } else {
        (config.default_height, Vec::new(), Vec::new())
    };

    FrameSpec {
        name: "Frame".to_string(),
        width,
        height,
        auto_layout,
        layout_grids,
        fills,
        position: Point {
            x: viewport.center.x - width / 2.0,
            y: viewport.center.y - height / 2.0,
        },
    }
}
