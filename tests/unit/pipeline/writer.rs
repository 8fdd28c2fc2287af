use super::*;

#[test]
fn names_are_sequential_without_padding() {
    let w = OutputWriter::new("out");
    assert_eq!(w.path_for(0), Path::new("out").join("output_0.jpg"));
    assert_eq!(w.path_for(12), Path::new("out").join("output_12.jpg"));
}

#[test]
fn writes_rgb_jpegs_in_order() {
    let tmp = tempfile::tempdir().unwrap();
    let mut w = OutputWriter::new(tmp.path());
    let a = image::RgbImage::from_pixel(16, 8, image::Rgb([200, 10, 10]));
    let b = image::RgbImage::from_pixel(8, 16, image::Rgb([10, 200, 10]));

    let pa = w.write(&a).unwrap();
    let pb = w.write(&b).unwrap();
    assert_eq!(w.written(), 2);
    assert_eq!(pa, tmp.path().join("output_0.jpg"));
    assert_eq!(pb, tmp.path().join("output_1.jpg"));

    let back = image::open(&pb).unwrap();
    assert_eq!((back.width(), back.height()), (8, 16));
    assert_eq!(back.color(), image::ColorType::Rgb8);
    assert_eq!(
        image::ImageFormat::from_path(&pa).unwrap(),
        image::ImageFormat::Jpeg
    );
}

#[test]
fn failed_write_does_not_advance_index() {
    let tmp = tempfile::tempdir().unwrap();
    let mut w = OutputWriter::new(tmp.path().join("missing"));
    let img = image::RgbImage::new(4, 4);
    assert!(w.write(&img).is_err());
    assert_eq!(w.written(), 0);
}

#[test]
fn prepare_creates_nested_dirs() {
    let tmp = tempfile::tempdir().unwrap();
    let dir = tmp.path().join("a").join("b");
    prepare_output_dir(&dir, false).unwrap();
    assert!(dir.is_dir());
    prepare_output_dir(&dir, false).unwrap();
}

#[test]
fn clear_removes_previous_outputs() {
    let tmp = tempfile::tempdir().unwrap();
    let dir = tmp.path().join("out");
    std::fs::create_dir_all(dir.join("sub")).unwrap();
    std::fs::write(dir.join("output_0.jpg"), b"old").unwrap();

    prepare_output_dir(&dir, false).unwrap();
    assert!(dir.join("output_0.jpg").exists());

    prepare_output_dir(&dir, true).unwrap();
    assert!(dir.is_dir());
    assert_eq!(std::fs::read_dir(&dir).unwrap().count(), 0);
}

#[test]
fn clear_of_missing_dir_is_fine() {
    let tmp = tempfile::tempdir().unwrap();
    let dir = tmp.path().join("never-made");
    prepare_output_dir(&dir, true).unwrap();
    assert!(dir.is_dir());
}
