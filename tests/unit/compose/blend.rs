use super::*;

#[test]
fn translucent_over_translucent_accumulates_alpha() {
    let dst = [0, 0, 0, 128];
    let src = [100, 100, 100, 128];
    assert_eq!(over(dst, src), [100, 100, 100, 192]);
}

#[test]
fn over_src_alpha_0_is_noop() {
    let dst = [10, 20, 30, 40];
    let src = [255, 255, 255, 0];
    assert_eq!(over(dst, src), dst);
}

#[test]
fn over_src_opaque_replaces_dst() {
    let dst = [0, 0, 0, 255];
    let src = [255, 255, 255, 255];
    assert_eq!(over(dst, src), src);
}

#[test]
fn half_white_over_black_is_mid_grey() {
    // White at 50% alpha, premultiplied.
    let src = [128, 128, 128, 128];
    let dst = [0, 0, 0, 255];
    assert_eq!(over(dst, src), [128, 128, 128, 255]);
}

#[test]
fn shadow_darkens_to_a_quarter() {
    // Black at 75% alpha over white keeps a quarter of the white.
    let src = [0, 0, 0, 192];
    let dst = [255, 255, 255, 255];
    assert_eq!(over(dst, src), [63, 63, 63, 255]);
}

#[test]
fn over_in_place_rejects_mismatched_buffers() {
    let mut dst = vec![0u8; 8];
    assert!(over_in_place(&mut dst, &[0u8; 4]).is_err());
    let mut odd = vec![0u8; 6];
    assert!(over_in_place(&mut odd, &[0u8; 6]).is_err());
}

#[test]
fn transparent_overlay_leaves_opaque_rgb_identical() {
    let src: Vec<u8> = (0..64u8)
        .flat_map(|i| [i.wrapping_mul(7), i.wrapping_mul(13), i.wrapping_mul(29), 255])
        .collect();
    let mut dst = src.clone();
    over_in_place(&mut dst, &vec![0u8; src.len()]).unwrap();
    let rgb = flatten_to_rgb(&dst);

    let expected: Vec<u8> = src
        .chunks_exact(4)
        .flat_map(|px| [px[0], px[1], px[2]])
        .collect();
    assert_eq!(rgb, expected);
}

#[test]
fn flatten_unpremultiplies() {
    assert_eq!(flatten_to_rgb(&[10, 20, 30, 255]), vec![10, 20, 30]);
    assert_eq!(flatten_to_rgb(&[9, 9, 9, 0]), vec![0, 0, 0]);
    assert_eq!(flatten_to_rgb(&[64, 32, 0, 128]), vec![128, 64, 0]);
}
