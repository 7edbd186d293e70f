//! Fit-to-page geometry
//!
//! Images are scaled uniformly so they fit the page, never enlarged, and
//! centered on both axes. All values are in points.

use crate::types::{Dimensions, PageSize};

/// Where an image lands on its page
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PageLayout {
    /// Uniform scale applied to the image (1.0 = natural size)
    pub scale: f32,
    /// Placed width
    pub width: f32,
    /// Placed height
    pub height: f32,
    /// Distance from the left page edge
    pub offset_x: f32,
    /// Distance from the bottom page edge
    pub offset_y: f32,
}

/// Compute scale and centering offsets for one image.
///
/// Images that already fit keep scale 1.0. Otherwise the axis that
/// overflows the most decides the scale, so both sides end up inside
/// the page. Degenerate (zero-sized) images are rejected by the decoder
/// before they get here.
pub fn compute_layout(image: Dimensions, page: PageSize) -> PageLayout {
    let scale = if image.width <= page.width_pt && image.height <= page.height_pt {
        1.0
    } else {
        let scale_w = page.width_pt / image.width;
        let scale_h = page.height_pt / image.height;
        scale_w.min(scale_h)
    };

    let width = image.width * scale;
    let height = image.height * scale;

    PageLayout {
        scale,
        width,
        height,
        offset_x: (page.width_pt - width) / 2.0,
        offset_y: (page.height_pt - height) / 2.0,
    }
}
