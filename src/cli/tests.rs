use std::fs;
use std::path::Path;

use image::{DynamicImage, Rgb, RgbImage};
use tempfile::tempdir;

use crate::model::ContainerSize;
use crate::session::{EditorConfig, EditorVariant};
use crate::surface::{MASK_SELECTED, MASK_UNSELECTED};

use super::runner::describe;
use super::types::parse_container;
use super::{Finish, ReplayError, load_script, replay};

fn write_source(path: &Path, width: u32, height: u32) {
    DynamicImage::ImageRgb8(RgbImage::from_pixel(width, height, Rgb([10, 20, 30])))
        .save(path)
        .expect("write source");
}

const STROKE_SCRIPT: &str = r#"{
    "container": {"width": 100.0, "height": 100.0},
    "events": [
        {"type": "set_brush_size", "size_px": 20},
        {"type": "pointer", "phase": "down", "position": {"x": 30.0, "y": 50.0}},
        {"type": "pointer", "phase": "move", "position": {"x": 70.0, "y": 50.0}},
        {"type": "pointer", "phase": "up", "position": {"x": 70.0, "y": 50.0}}
    ]
}"#;

#[test]
fn replay_applies_and_writes_mask() {
    let dir = tempdir().expect("tempdir");
    let image = dir.path().join("source.png");
    let script = dir.path().join("events.json");
    let output = dir.path().join("mask.png");
    write_source(&image, 100, 100);
    fs::write(&script, STROKE_SCRIPT).expect("write script");

    let report = replay(&image, &script, &output, &EditorConfig::default()).expect("replay");
    assert_eq!(report.status, "applied");
    assert_eq!((report.width, report.height), (100, 100));
    assert_eq!(report.history_len, 2);
    assert!(report.painted_pixels > 0);
    assert!((report.zoom - 1.0).abs() < f32::EPSILON);

    let mask = image::open(&output).expect("read mask").to_rgba8();
    assert_eq!(mask.dimensions(), (100, 100));
    assert_eq!(*mask.get_pixel(50, 50), MASK_SELECTED);
    assert_eq!(*mask.get_pixel(50, 10), MASK_UNSELECTED);
    assert_eq!(*mask.get_pixel(5, 50), MASK_UNSELECTED);
}

#[test]
fn replay_escape_cancels_without_output() {
    let dir = tempdir().expect("tempdir");
    let image = dir.path().join("source.png");
    let script = dir.path().join("events.yaml");
    let output = dir.path().join("mask.png");
    write_source(&image, 40, 30);
    fs::write(
        &script,
        r#"container: {width: 80.0, height: 60.0}
events:
  - type: pointer
    phase: down
    position: {x: 10.0, y: 10.0}
  - type: pointer
    phase: up
    position: {x: 10.0, y: 10.0}
  - type: key
    key: escape
"#,
    )
    .expect("write script");

    let report = replay(&image, &script, &output, &EditorConfig::default()).expect("replay");
    assert_eq!(report.status, "cancelled");
    assert_eq!(report.history_len, 2);
    assert!(!output.exists());
}

#[test]
fn replay_empty_mask_reports_unavailable_apply() {
    let dir = tempdir().expect("tempdir");
    let image = dir.path().join("source.png");
    let script = dir.path().join("events.json");
    write_source(&image, 16, 16);
    fs::write(&script, r#"{"events": [{"type": "undo"}]}"#).expect("write script");

    let error = replay(
        &image,
        &script,
        &dir.path().join("mask.png"),
        &EditorConfig::default(),
    )
    .expect_err("empty mask");
    assert!(matches!(error, ReplayError::Session(_)));
}

#[test]
fn script_defaults_fill_missing_fields() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("events.json");
    fs::write(&path, r#"{"variant": "replacement", "prompt": "a tree", "finish": "cancel"}"#)
        .expect("write script");
    let script = load_script(&path).expect("script");
    assert_eq!(script.variant, EditorVariant::Replacement);
    assert_eq!(script.prompt.as_deref(), Some("a tree"));
    assert_eq!(script.finish, Finish::Cancel);
    assert!(script.events.is_empty());
    assert_eq!(script.container, ContainerSize::new(800.0, 600.0));
}

#[test]
fn describe_reports_fit_viewport() {
    let dir = tempdir().expect("tempdir");
    let image = dir.path().join("wide.png");
    write_source(&image, 200, 100);
    let info = describe(
        &image,
        ContainerSize::new(100.0, 100.0),
        &EditorConfig::default(),
    )
    .expect("describe");
    assert_eq!((info.width, info.height), (200, 100));
    assert!((info.zoom - 0.5).abs() < 1e-6);
    assert!(info.pan.x.abs() < 1e-4);
    assert!((info.pan.y - 25.0).abs() < 1e-4);
}

#[test]
fn container_argument_parses() {
    assert_eq!(parse_container("800x600"), Ok((800.0, 600.0)));
    assert_eq!(parse_container("1024X768"), Ok((1024.0, 768.0)));
    assert!(parse_container("800").is_err());
    assert!(parse_container("0x600").is_err());
    assert!(parse_container("wide x tall").is_err());
}
