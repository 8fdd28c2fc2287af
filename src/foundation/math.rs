/// `round(x * y / 255)` for 8-bit channel products.
pub(crate) fn mul_div255_u8(x: u16, y: u16) -> u8 {
    (((u32::from(x) * u32::from(y)) + 127) / 255) as u8
}

/// Round half to even, matching the rounding the layout constants were tuned against.
pub(crate) fn round_px(v: f64) -> i64 {
    v.round_ties_even() as i64
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/math.rs"]
mod tests;
