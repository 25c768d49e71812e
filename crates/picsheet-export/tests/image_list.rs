//! Integration test: ingest a PNG and a JPEG, export them, and check the workbook container.

#![allow(clippy::unwrap_used, clippy::expect_used)]

use std::io::Cursor;
use std::path::PathBuf;

use picsheet_catalog::{NoPreview, SelectedFile, Session, assemble_batch};
use picsheet_export::{ExportConfig, to_xlsx};

fn encode(width: u32, height: u32, format: image::ImageFormat) -> Vec<u8> {
    let img = image::RgbImage::from_fn(width, height, |x, _| {
        if x < width / 2 {
            image::Rgb([0, 0, 0])
        } else {
            image::Rgb([255, 255, 255])
        }
    });
    let mut buf = Cursor::new(Vec::new());
    img.write_to(&mut buf, format).unwrap();
    buf.into_inner()
}

/// Returns `true` if `needle` occurs anywhere in `haystack`.
fn contains(haystack: &[u8], needle: &[u8]) -> bool {
    haystack.windows(needle.len()).any(|w| w == needle)
}

#[test]
fn png_and_jpeg_export_to_xlsx() {
    let files = vec![
        SelectedFile::new("a.png", encode(100, 50, image::ImageFormat::Png)),
        SelectedFile::new("b.jpg", encode(50, 100, image::ImageFormat::Jpeg)),
    ];
    let mut session = Session::new();
    session.commit(assemble_batch(files, |_| Ok(NoPreview)).expect("batch should probe"));
    assert_eq!(session.len(), 2);

    let config = ExportConfig::default();
    let bytes = to_xlsx(session.entries(), &config).expect("export should succeed");
    eprintln!("Workbook: {} bytes", bytes.len());

    // xlsx is a zip container; part names are stored uncompressed in the
    // local file headers and the central directory.
    assert!(bytes.starts_with(b"PK\x03\x04"));
    assert!(contains(&bytes, b"xl/worksheets/sheet1.xml"));
    assert!(contains(&bytes, b"xl/drawings/drawing1.xml"));
    assert!(contains(&bytes, b"xl/media/image1.png"));
    assert!(contains(&bytes, b"xl/media/image2.jpeg"));

    // Write the workbook next to other build output so it can be inspected.
    let workspace_root = PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .parent()
        .unwrap()
        .parent()
        .unwrap()
        .to_path_buf();
    let output_path = workspace_root.join("target").join(&config.file_name);
    if std::fs::write(&output_path, &bytes).is_ok() {
        eprintln!("Workbook written to {output_path:?}");
    }
}

#[test]
fn clearing_the_session_leaves_nothing_to_export() {
    let files = vec![SelectedFile::new(
        "only.png",
        encode(8, 8, image::ImageFormat::Png),
    )];
    let mut session = Session::new();
    session.commit(assemble_batch(files, |_| Ok(NoPreview)).unwrap());
    session.clear().unwrap();

    let result = to_xlsx(session.entries(), &ExportConfig::default());
    assert!(matches!(result, Err(picsheet_export::ExportError::NoImages)));
}

#[test]
fn mislabelled_content_never_reaches_the_workbook() {
    let files = vec![
        SelectedFile::new("a.png", encode(10, 10, image::ImageFormat::Png)),
        SelectedFile::new("c.png", encode(10, 10, image::ImageFormat::Jpeg)),
    ];
    let result = assemble_batch(files, |_| Ok(NoPreview));
    assert!(matches!(
        result,
        Err(picsheet_catalog::IngestError::FormatMismatch { ref name, .. }) if name == "c.png"
    ));
}
