//! Integration tests for decoding images from disk.

#![allow(clippy::unwrap_used, clippy::expect_used)]

use std::path::Path;

use augkit_adapters::CodecImageReader;
use augkit_core::{ImageReader, ReadFlags};
use image::{GrayImage, Luma, Rgb, RgbImage};
use rstest::rstest;

fn write_gray(path: &Path) {
    GrayImage::from_fn(8, 6, |x, _| Luma([u8::try_from(x * 10).unwrap()]))
        .save(path)
        .unwrap();
}

fn write_rgb(path: &Path) {
    RgbImage::from_fn(8, 6, |_, _| Rgb([10, 20, 30]))
        .save(path)
        .unwrap();
}

#[rstest]
#[case::unchanged(ReadFlags::Unchanged, &[6, 8])]
#[case::grayscale(ReadFlags::Grayscale, &[6, 8])]
#[case::color(ReadFlags::Color, &[6, 8, 3])]
fn test_decode_gray_png(#[case] flags: ReadFlags, #[case] shape: &[usize]) {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("gray.png");
    write_gray(&path);

    let array = CodecImageReader
        .imread(path.to_str().unwrap(), flags)
        .expect("should decode PNG");
    assert_eq!(array.shape(), shape);
}

#[rstest]
#[case::unchanged(ReadFlags::Unchanged, &[6, 8, 3])]
#[case::grayscale(ReadFlags::Grayscale, &[6, 8])]
#[case::color(ReadFlags::Color, &[6, 8, 3])]
fn test_decode_rgb_png(#[case] flags: ReadFlags, #[case] shape: &[usize]) {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("rgb.png");
    write_rgb(&path);

    let array = CodecImageReader
        .imread(path.to_str().unwrap(), flags)
        .expect("should decode PNG");
    assert_eq!(array.shape(), shape);
}

#[test]
fn test_decoded_values_match() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("rgb.png");
    write_rgb(&path);

    let array = CodecImageReader::new()
        .imread(path.to_str().unwrap(), ReadFlags::Unchanged)
        .unwrap();
    let channels = array.as_channels().unwrap();
    assert_eq!(channels[[0, 0, 0]], 10);
    assert_eq!(channels[[5, 7, 1]], 20);
    assert_eq!(channels[[3, 3, 2]], 30);
}

#[test]
fn test_missing_file_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nope.png");

    let err = CodecImageReader
        .imread(path.to_str().unwrap(), ReadFlags::default())
        .unwrap_err();
    assert!(format!("{err:#}").contains("nope.png"));
}

#[test]
fn test_garbage_file_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("garbage.png");
    std::fs::write(&path, b"definitely not a png").unwrap();

    assert!(CodecImageReader
        .imread(path.to_str().unwrap(), ReadFlags::Color)
        .is_err());
}
