use std::sync::Arc;

use super::*;
use crate::assets::font::local_test_font;

#[test]
fn garbage_font_bytes_are_a_render_error() {
    let font = FontAsset {
        name: "junk.ttf".to_string(),
        bytes: Arc::new(b"junk".to_vec()),
    };
    let err = TextLayoutEngine::new(&font).err().unwrap();
    assert!(matches!(err, MashupError::Render(_)));
}

#[test]
fn block_lines_are_stacked_and_centered_with_local_font_if_present() {
    let Some(font) = local_test_font() else {
        return;
    };
    let mut engine = TextLayoutEngine::new(&font).unwrap();
    assert!(!engine.family_name().is_empty());

    let lines = vec!["a much longer first line".to_string(), "short".to_string()];
    let block = engine.layout_block(&lines, 32.0).unwrap();
    assert_eq!(block.lines.len(), 2);

    let first = &block.lines[0];
    let second = &block.lines[1];
    assert_eq!(block.width, first.width);
    assert!(second.width < first.width);
    assert_eq!(first.x, 0.0);
    assert!((second.x - (block.width - second.width) / 2.0).abs() < 1e-3);
    assert_eq!(first.y, 0.0);
    assert_eq!(second.y, first.height);
    assert!((block.height - (first.height + second.height)).abs() < 1e-3);
}

#[test]
fn empty_block_has_no_extent_with_local_font_if_present() {
    let Some(font) = local_test_font() else {
        return;
    };
    let mut engine = TextLayoutEngine::new(&font).unwrap();
    let block = engine.layout_block(&[], 32.0).unwrap();
    assert!(block.is_empty());
    assert_eq!(block.width, 0.0);
    assert_eq!(block.height, 0.0);
}

#[test]
fn non_positive_size_is_rejected_with_local_font_if_present() {
    let Some(font) = local_test_font() else {
        return;
    };
    let mut engine = TextLayoutEngine::new(&font).unwrap();
    assert!(engine.layout_line("x", 0.0).is_err());
    assert!(engine.layout_line("x", f32::NAN).is_err());
}
