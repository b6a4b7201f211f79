use std::sync::Arc;

use serde_json::json;
use tempfile::tempdir;

use crate::controls::{ControlEdit, FontCatalog, StaticFontCatalog};
use crate::dialogs::{CloseReason, SessionState};
use crate::model::{CharacterFormat, FontWeight};
use crate::settings::{Geometry, MemorySettingsStore, SettingsStore};

use super::{
    DialogKind, EditScript, ScriptStep, load_catalog, load_formats, load_script, run_script,
    save_report,
};

fn catalog() -> Arc<dyn FontCatalog> {
    Arc::new(
        StaticFontCatalog::default()
            .with_typeface("Sans", &[FontWeight::Normal, FontWeight::Bold]),
    )
}

fn character_script(steps: Vec<ScriptStep>) -> EditScript {
    EditScript {
        name: Some("resize".to_string()),
        dialog: DialogKind::Character,
        selection: vec![
            json!({"font_family": "Sans", "font_size": 12.0}),
            json!({"font_family": "Sans", "font_size": 14.0}),
        ],
        settings_group: None,
        steps,
    }
}

fn edit(attribute: &str, edit: ControlEdit) -> ScriptStep {
    ScriptStep::Edit {
        attribute: attribute.to_string(),
        edit,
    }
}

#[test]
fn script_replays_edits_and_commits_once() {
    let script = character_script(vec![
        ScriptStep::Show,
        edit(
            "font_size",
            ControlEdit::SetText {
                text: "16".to_string(),
            },
        ),
        ScriptStep::Accept,
    ]);
    let report = run_script(&script, catalog(), None).expect("script");

    assert_eq!(report.steps.len(), 3);
    assert_eq!(report.failed_steps(), 0);
    assert_eq!(report.steps[1].changed, vec!["font_size".to_string()]);
    assert!(report.steps[1].commit_enabled);
    assert_eq!(report.steps[2].updated, 2);
    assert_eq!(report.issued.len(), 1);
    assert_eq!(
        report.final_state,
        SessionState::Closed(CloseReason::Accepted)
    );
}

#[test]
fn failing_steps_are_recorded_and_replay_continues() {
    let script = character_script(vec![
        edit("italic", ControlEdit::Click),
        ScriptStep::Show,
        ScriptStep::Accept,
        ScriptStep::Reject,
    ]);
    let report = run_script(&script, catalog(), None).expect("script");

    assert_eq!(report.failed_steps(), 2);
    assert!(report.steps[0].error.is_some());
    assert!(report.steps[1].error.is_none());
    assert!(report.steps[2].error.is_some());
    assert!(report.issued.is_empty());
    assert_eq!(
        report.final_state,
        SessionState::Closed(CloseReason::Rejected)
    );
}

#[test]
fn apply_keeps_the_session_open_on_the_new_formats() {
    let script = character_script(vec![
        ScriptStep::Show,
        edit("italic", ControlEdit::Click),
        ScriptStep::Apply,
    ]);
    let report = run_script(&script, catalog(), None).expect("script");

    assert_eq!(report.final_state, SessionState::Clean);
    let objects = report.final_selection.as_array().expect("objects");
    let formats = objects
        .iter()
        .map(|object| serde_json::from_value::<CharacterFormat>(object["format"].clone()))
        .collect::<Result<Vec<_>, _>>()
        .expect("formats");
    assert_eq!(formats.len(), 2);
    assert!(formats.iter().all(|format| format.italic));
}

#[test]
fn select_step_repopulates_the_dialog() {
    let script = EditScript {
        name: None,
        dialog: DialogKind::Image,
        selection: vec![json!({"horizontal_mode": "fixed_points", "horizontal_value": 20.0})],
        settings_group: None,
        steps: vec![
            ScriptStep::Show,
            ScriptStep::Select {
                selection: vec![json!({}), json!({"rotation": "clockwise90"})],
            },
        ],
    };
    let report = run_script(&script, catalog(), None).expect("script");

    assert_eq!(report.failed_steps(), 0);
    let rotation = report
        .aggregate
        .iter()
        .find(|attribute| attribute.name == "rotation")
        .expect("rotation");
    assert_eq!(rotation.candidates.len(), 2);
}

#[test]
fn preferences_are_restored_and_stored() {
    let mut store = MemorySettingsStore::new();
    store
        .set_value("CharacterFormatDialog", "page", json!("font"))
        .expect("seed");
    let script = character_script(vec![
        ScriptStep::Show,
        ScriptStep::Resize {
            geometry: Geometry {
                x: 10,
                y: 20,
                width: 400,
                height: 300,
            },
        },
        ScriptStep::Reject,
    ]);
    let report = run_script(&script, catalog(), Some(&mut store as &mut dyn SettingsStore)).expect("script");

    assert_eq!(report.preferences.page.as_deref(), Some("font"));
    assert!(store.value("CharacterFormatDialog", "geometry").is_some());
    assert!(store.value("CharacterFormatDialog", "font_size").is_none());
}

#[test]
fn invalid_scripts_are_rejected() {
    let empty = character_script(Vec::new());
    assert!(run_script(&empty, catalog(), None).is_err());

    let unnamed = character_script(vec![edit("  ", ControlEdit::Click)]);
    assert!(unnamed.validate().is_err());
}

#[test]
fn yaml_script_and_json_report_round_trip() {
    let dir = tempdir().expect("tempdir");
    let script_path = dir.path().join("script.yaml");
    std::fs::write(
        &script_path,
        r#"
name: bold
dialog: character
selection:
  - font_family: Sans
steps:
  - step: show
  - step: edit
    attribute: font_weight
    edit:
      action: select
      value:
        kind: weight
        value: bold
  - step: accept
"#,
    )
    .expect("write script");

    let script = load_script(&script_path).expect("load");
    assert_eq!(script.steps.len(), 3);
    let report = run_script(&script, catalog(), None).expect("script");
    assert_eq!(report.failed_steps(), 0);
    assert_eq!(report.issued.len(), 1);

    let report_path = dir.path().join("report.json");
    save_report(&report_path, &report).expect("save");
    let saved: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&report_path).expect("read"))
            .expect("json");
    assert_eq!(saved["script_name"], json!("bold"));
}

#[test]
fn formats_and_catalogs_load_from_files() {
    let dir = tempdir().expect("tempdir");
    let formats_path = dir.path().join("selection.json");
    std::fs::write(&formats_path, r#"[{"font_size": 9.0}, {"italic": true}]"#)
        .expect("write");
    let selection = load_formats::<CharacterFormat>(&formats_path).expect("formats");
    assert_eq!(selection.len(), 2);

    let catalog_path = dir.path().join("catalog.yml");
    std::fs::write(
        &catalog_path,
        "typefaces:\n  Mono:\n    weights: [normal]\n",
    )
    .expect("write");
    let catalog = load_catalog(&catalog_path).expect("catalog");
    assert_eq!(catalog.supported_weights("Mono", 12.0), vec![FontWeight::Normal]);
    assert_eq!(
        catalog.supported_weights("Other", 12.0),
        vec![FontWeight::Normal, FontWeight::Bold]
    );
}
