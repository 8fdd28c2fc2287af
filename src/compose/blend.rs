use crate::foundation::{
    error::{MashupError, MashupResult},
    math::mul_div255_u8,
};

pub type PremulRgba8 = [u8; 4];

/// Porter-Duff source-over on premultiplied pixels.
pub fn over(dst: PremulRgba8, src: PremulRgba8) -> PremulRgba8 {
    match src[3] {
        0 => dst,
        255 => src,
        sa => {
            let keep = 255 - u16::from(sa);
            std::array::from_fn(|i| src[i].saturating_add(mul_div255_u8(u16::from(dst[i]), keep)))
        }
    }
}

/// Composite a premultiplied overlay onto `dst`, pixel by pixel.
pub fn over_in_place(dst: &mut [u8], overlay: &[u8]) -> MashupResult<()> {
    if dst.len() != overlay.len() || !dst.len().is_multiple_of(4) {
        return Err(MashupError::render(format!(
            "overlay of {} bytes does not match a {}-byte rgba8 canvas",
            overlay.len(),
            dst.len()
        )));
    }
    for (d, s) in dst.chunks_exact_mut(4).zip(overlay.chunks_exact(4)) {
        let out = over([d[0], d[1], d[2], d[3]], [s[0], s[1], s[2], s[3]]);
        d.copy_from_slice(&out);
    }
    Ok(())
}

/// Un-premultiply and drop alpha. Fully transparent pixels become black.
pub fn flatten_to_rgb(premul: &[u8]) -> Vec<u8> {
    let mut out = Vec::with_capacity(premul.len() / 4 * 3);
    for px in premul.chunks_exact(4) {
        let a = u32::from(px[3]);
        match a {
            255 => out.extend_from_slice(&px[..3]),
            0 => out.extend_from_slice(&[0, 0, 0]),
            _ => {
                for &c in &px[..3] {
                    let v = (u32::from(c) * 255 + a / 2) / a;
                    out.push(v.min(255) as u8);
                }
            }
        }
    }
    out
}

#[cfg(test)]
#[path = "../../tests/unit/compose/blend.rs"]
mod tests;
