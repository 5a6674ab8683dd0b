//! Loading, validating and replaying data files from disk.

use std::fs;
use std::path::PathBuf;

use placement_core::validator::PlacementResult;
use placement_tools::loader::{load_catalog, load_layout, load_script};
use placement_tools::protocol::Event;
use placement_tools::runner::{write_events, ScriptRunner};
use placement_tools::validate::validate_files;
use placement_tools::ToolError;

fn data_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../data")
}

#[test]
fn bundled_data_validates() {
    let dir = data_dir();
    let summary =
        validate_files(&dir.join("meadow.ron"), Some(&dir.join("templates.ron"))).unwrap();

    assert_eq!(summary.width, 7);
    assert_eq!(summary.height, 4);
    assert_eq!(summary.templates, 4);
    assert!(summary.oversized.is_empty());
}

#[test]
fn bundled_script_replays() {
    let dir = data_dir();
    let layout = load_layout(&dir.join("meadow.ron")).unwrap();
    let script = load_script(&dir.join("farm_script.ron")).unwrap();
    let catalog = load_catalog(&dir.join("templates.ron")).unwrap();

    let events = ScriptRunner::new(&layout, &script, Some(&catalog))
        .unwrap()
        .run();

    assert_eq!(events.len(), 11);
    assert!(matches!(events[1], Event::DragStarted { valid: false, .. }));
    assert!(matches!(
        events[3],
        Event::Rejected {
            reason: PlacementResult::Blocked { .. },
            ..
        }
    ));
    assert!(matches!(events[5], Event::Unchanged { step: 4 }));
    assert!(matches!(events[6], Event::Placed { ref changes, .. } if changes.len() == 4));
    assert!(matches!(events[9], Event::Placed { ref changes, .. } if changes.len() == 1));

    match events.last() {
        Some(Event::Finished { placed, grid, .. }) => {
            assert_eq!(*placed, 2);
            assert_eq!(grid, "gggss..\ngGGss.T\ngGGgTTt\nggggTTt\n");
        }
        other => panic!("Expected Finished, got {other:?}"),
    }
}

#[test]
fn replay_output_is_json_lines() {
    let dir = tempfile::tempdir().unwrap();
    let layout_path = dir.path().join("strip.ron");
    let script_path = dir.path().join("script.ron");
    fs::write(&layout_path, r#"MapLayout(name: "strip", rows: ["ggG"])"#).unwrap();
    fs::write(
        &script_path,
        r#"DragScript(
            templates: [(id: "farm", width: 2, height: 1)],
            steps: [Begin(template: "farm"), Move(x: 1.0, y: 0.0), Confirm, Cancel],
        )"#,
    )
    .unwrap();

    let layout = load_layout(&layout_path).unwrap();
    let script = load_script(&script_path).unwrap();
    let events = ScriptRunner::new(&layout, &script, None).unwrap().run();

    let mut out = Vec::new();
    write_events(&events, &mut out).unwrap();
    let text = String::from_utf8(out).unwrap();
    let lines: Vec<&str> = text.lines().collect();

    assert_eq!(lines.len(), 6);
    assert!(lines[0].starts_with(r#"{"type":"ready""#));
    assert!(lines[3].contains(r#""type":"rejected""#));
    assert!(lines[4].contains(r#""type":"cancelled""#));
    for line in lines {
        let value: serde_json::Value = serde_json::from_str(line).unwrap();
        assert!(value.get("type").is_some());
    }
}

#[test]
fn invalid_layout_file_is_reported() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("broken.ron");
    fs::write(&path, r#"MapLayout(rows: ["gg", "g"])"#).unwrap();

    match validate_files(&path, None) {
        Err(ToolError::Invalid(errors)) => {
            assert_eq!(errors, vec!["layout: row 1 has 1 cells, expected 2".to_string()]);
        }
        other => panic!("Expected Invalid, got {other:?}"),
    }
}
