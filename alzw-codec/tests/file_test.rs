//! File helper tests.

use alzw_codec::{LzwConfig, LzwError, compress_file, decompress_file};
use std::fs;
use tempfile::TempDir;

#[test]
fn test_file_roundtrip() {
    let dir = TempDir::new().unwrap();
    let src = dir.path().join("input.txt");
    let packed = dir.path().join("input.alzw");
    let unpacked = dir.path().join("output.txt");

    let original = b"This is a test of compression! ".repeat(500);
    fs::write(&src, &original).unwrap();

    for config in [LzwConfig::NONE, LzwConfig::RESET, LzwConfig::MONITOR] {
        let enc = compress_file(&src, &packed, config).unwrap();
        assert_eq!(enc.bytes_in, original.len() as u64);
        assert_eq!(enc.bytes_out, fs::metadata(&packed).unwrap().len());

        let dec = decompress_file(&packed, &unpacked, config).unwrap();
        assert_eq!(dec.bytes_out, original.len() as u64);
        assert_eq!(fs::read(&unpacked).unwrap(), original);
    }
}

#[test]
fn test_empty_file() {
    let dir = TempDir::new().unwrap();
    let src = dir.path().join("empty");
    let packed = dir.path().join("empty.alzw");
    let unpacked = dir.path().join("empty.out");
    fs::write(&src, b"").unwrap();

    compress_file(&src, &packed, LzwConfig::RESET).unwrap();
    assert_eq!(fs::read(&packed).unwrap(), vec![0x60, 0x00]);

    decompress_file(&packed, &unpacked, LzwConfig::RESET).unwrap();
    assert!(fs::read(&unpacked).unwrap().is_empty());
}

#[test]
fn test_missing_source_creates_no_output() {
    let dir = TempDir::new().unwrap();
    let src = dir.path().join("does-not-exist");
    let dst = dir.path().join("out");

    let err = compress_file(&src, &dst, LzwConfig::NONE).unwrap_err();
    assert!(matches!(err, LzwError::SourceUnavailable { ref path, .. } if path == &src));
    assert!(!dst.exists());

    let err = decompress_file(&src, &dst, LzwConfig::NONE).unwrap_err();
    assert!(matches!(err, LzwError::SourceUnavailable { .. }));
    assert!(!dst.exists());
}

#[test]
fn test_corrupt_stream_reports_error() {
    let dir = TempDir::new().unwrap();
    let src = dir.path().join("garbage");
    let dst = dir.path().join("out");
    // Mode flag 11.
    fs::write(&src, [0xFF, 0xFF, 0xFF]).unwrap();

    assert!(matches!(
        decompress_file(&src, &dst, LzwConfig::NONE),
        Err(LzwError::InvalidMode(3))
    ));
}
