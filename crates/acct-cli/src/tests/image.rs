use crate::image::{data_url_from_file, encode_data_url, mime_for};
use crate::CliError;

use std::path::Path;

use googletest::assert_that;
use googletest::prelude::contains_substring;
use tempfile::TempDir;

#[test]
fn given_known_extensions_when_mime_for_then_image_types() {
    assert_eq!(mime_for(Path::new("a.png")), "image/png");
    assert_eq!(mime_for(Path::new("a.JPG")), "image/jpeg");
    assert_eq!(mime_for(Path::new("a.jpeg")), "image/jpeg");
    assert_eq!(mime_for(Path::new("a.webp")), "image/webp");
    assert_eq!(mime_for(Path::new("a.svg")), "image/svg+xml");
}

#[test]
fn given_unknown_extension_when_mime_for_then_octet_stream() {
    assert_eq!(mime_for(Path::new("avatar")), "application/octet-stream");
    assert_eq!(mime_for(Path::new("avatar.tiff")), "application/octet-stream");
}

#[test]
fn given_bytes_when_encode_then_base64_data_url() {
    let url = encode_data_url("image/png", b"hello");

    assert_eq!(url, "data:image/png;base64,aGVsbG8=");
}

#[test]
fn given_file_when_data_url_from_file_then_encodes_contents() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("avatar.gif");
    std::fs::write(&path, [0x47, 0x49, 0x46]).unwrap();

    let url = data_url_from_file(&path).unwrap();

    assert_eq!(url, "data:image/gif;base64,R0lG");
}

#[test]
fn given_missing_file_when_data_url_from_file_then_image_read_error() {
    let temp = TempDir::new().unwrap();

    let err = data_url_from_file(&temp.path().join("nope.png")).unwrap_err();

    assert!(matches!(err, CliError::ImageRead { .. }));
    assert_that!(err.user_message(), contains_substring("nope.png"));
}
