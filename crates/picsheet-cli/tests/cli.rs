//! CLI integration tests: files on disk in, workbook on disk out.

#![allow(clippy::unwrap_used)]

use std::io::Cursor;
use std::path::{Path, PathBuf};

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn cli() -> Command {
    Command::cargo_bin("picsheet-cli").unwrap()
}

/// Write a two-tone image of the given size and format into `dir`.
fn write_image(dir: &Path, name: &str, width: u32, height: u32, format: image::ImageFormat) -> PathBuf {
    let img = image::RgbImage::from_fn(width, height, |x, _| {
        if x < width / 2 {
            image::Rgb([10, 20, 30])
        } else {
            image::Rgb([200, 210, 220])
        }
    });
    let mut buf = Cursor::new(Vec::new());
    img.write_to(&mut buf, format).unwrap();
    let path = dir.join(name);
    std::fs::write(&path, buf.into_inner()).unwrap();
    path
}

#[test]
fn writes_workbook_for_png_and_jpeg() {
    let dir = TempDir::new().unwrap();
    let a = write_image(dir.path(), "a.png", 100, 50, image::ImageFormat::Png);
    let b = write_image(dir.path(), "b.jpg", 50, 100, image::ImageFormat::Jpeg);
    let out = dir.path().join("image_list.xlsx");

    cli()
        .arg(&a)
        .arg(&b)
        .arg("--output")
        .arg(&out)
        .assert()
        .success()
        .stderr(predicate::str::contains("Wrote 2 images"));

    let bytes = std::fs::read(&out).unwrap();
    assert!(bytes.starts_with(b"PK\x03\x04"));
}

#[test]
fn defaults_output_to_image_list_in_working_directory() {
    let dir = TempDir::new().unwrap();
    let a = write_image(dir.path(), "a.png", 20, 10, image::ImageFormat::Png);

    cli().current_dir(dir.path()).arg(&a).assert().success();

    assert!(dir.path().join("image_list.xlsx").exists());
}

#[test]
fn unsupported_suffix_fails_without_writing() {
    let dir = TempDir::new().unwrap();
    let a = write_image(dir.path(), "a.png", 20, 10, image::ImageFormat::Png);
    let webp = dir.path().join("c.webp");
    std::fs::write(&webp, b"RIFF\0\0\0\0WEBP").unwrap();
    let out = dir.path().join("out.xlsx");

    cli()
        .arg(&a)
        .arg(&webp)
        .arg("-o")
        .arg(&out)
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("c.webp"));

    assert!(!out.exists());
}

#[test]
fn missing_input_fails_without_writing() {
    let dir = TempDir::new().unwrap();
    let out = dir.path().join("out.xlsx");

    cli()
        .arg(dir.path().join("nope.png"))
        .arg("-o")
        .arg(&out)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error reading"));

    assert!(!out.exists());
}

#[test]
fn config_json_is_honoured() {
    let dir = TempDir::new().unwrap();
    let a = write_image(dir.path(), "a.png", 20, 10, image::ImageFormat::Png);
    let out = dir.path().join("custom.xlsx");

    cli()
        .arg(&a)
        .arg("-o")
        .arg(&out)
        .arg("--config-json")
        .arg(r#"{"sheet_name": "Gallery", "max_cell_width": 90.0}"#)
        .assert()
        .success();

    let bytes = std::fs::read(&out).unwrap();
    assert!(bytes.starts_with(b"PK\x03\x04"));
}

#[test]
fn invalid_config_json_is_rejected() {
    let dir = TempDir::new().unwrap();
    let a = write_image(dir.path(), "a.png", 20, 10, image::ImageFormat::Png);
    let out = dir.path().join("out.xlsx");

    cli()
        .arg(&a)
        .arg("-o")
        .arg(&out)
        .arg("--config-json")
        .arg(r#"{"sheet_name": "bad/name"}"#)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error exporting"));

    assert!(!out.exists());
}

#[test]
fn config_file_is_read() {
    let dir = TempDir::new().unwrap();
    let a = write_image(dir.path(), "a.png", 20, 10, image::ImageFormat::Png);
    let config = dir.path().join("config.json");
    std::fs::write(&config, r#"{"file_name": "from_config.xlsx"}"#).unwrap();

    cli()
        .current_dir(dir.path())
        .arg(&a)
        .arg("--config")
        .arg(&config)
        .assert()
        .success();

    assert!(dir.path().join("from_config.xlsx").exists());
}

#[test]
fn requires_at_least_one_image() {
    cli().assert().failure();
}
