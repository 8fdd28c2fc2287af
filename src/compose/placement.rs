//! Pixel geometry of the caption block and the attribution lines.
//!
//! Everything here is pure arithmetic over sizes so it can be checked without shaping text.

use kurbo::Point;

use crate::{compose::style::VerticalAnchor, foundation::math::round_px};

/// Caption and attribution font sizes in pixels.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FontSizes {
    pub large: u32,
    pub small: u32,
}

/// `large = round(0.9 * W / (wrap / 2))`, `small = round(large / 4)`, both at least 1px.
pub fn font_sizes(image_width: u32, wrap_width: usize) -> FontSizes {
    let wrap = wrap_width.max(1) as f64;
    let large = round_px(0.90 * f64::from(image_width) / (wrap / 2.0)).max(1);
    let small = round_px(large as f64 / 4.0).max(1);
    FontSizes {
        large: large as u32,
        small: small as u32,
    }
}

/// Top-left corner of the caption block.
///
/// - `Bottom`: the block's bottom edge sits `large` px above the image bottom.
/// - `Middle`: centered, then lifted by `large / 2`.
/// - `Top`: the block's top edge sits `large` px below the image top.
pub fn caption_origin(
    image: (u32, u32),
    block: (f64, f64),
    large: u32,
    anchor: VerticalAnchor,
) -> Point {
    let (w, h) = (f64::from(image.0), f64::from(image.1));
    let (bw, bh) = block;
    let l = f64::from(large);

    let x = round_px(w / 2.0 - bw / 2.0);
    let y = match anchor {
        VerticalAnchor::Bottom => round_px(h - (bh + l)),
        VerticalAnchor::Middle => round_px(h / 2.0 - (bh + l) / 2.0),
        VerticalAnchor::Top => i64::from(large),
    };
    Point::new(x as f64, y as f64)
}

/// Caption origin displaced by `offset * large` on both axes.
pub fn shadow_origin(origin: Point, large: u32, offset: f64) -> Point {
    let d = f64::from(large) * offset;
    Point::new(origin.x + d, origin.y + d)
}

/// Image credit: bottom-left, inset by `small / 2` from the left and bottom edges.
pub fn image_attribution_origin(image: (u32, u32), text: (f64, f64), small: u32) -> Point {
    let inset = f64::from(small) / 2.0;
    let x = round_px(inset);
    let y = round_px(f64::from(image.1) - (text.1 + inset));
    Point::new(x as f64, y as f64)
}

/// Caption credit: bottom-right, inset by `small / 2` from the right and bottom edges.
pub fn caption_attribution_origin(image: (u32, u32), text: (f64, f64), small: u32) -> Point {
    let inset = f64::from(small) / 2.0;
    let x = round_px(f64::from(image.0) - (text.0 + inset));
    let y = round_px(f64::from(image.1) - (text.1 + inset));
    Point::new(x as f64, y as f64)
}

#[cfg(test)]
#[path = "../../tests/unit/compose/placement.rs"]
mod tests;
