//! Color buckets and level count handed to the rendering layer.

use crate::utils::config::{FRAME_LEVELS, TREEMAP_COLORS};

/// One color per package color index, cycling the palette
///
/// Index 0 (no package) gets the first color like every other bucket.
pub fn color_palette(max_package_count: usize) -> Vec<&'static str> {
    (0..max_package_count)
        .map(|index| TREEMAP_COLORS[index % TREEMAP_COLORS.len()])
        .collect()
}

/// Number of style levels the renderer needs for a tree of `max_depth`
pub fn level_count(max_depth: usize) -> usize {
    max_depth + FRAME_LEVELS
}
