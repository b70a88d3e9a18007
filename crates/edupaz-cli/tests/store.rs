//! Tests for form file persistence.

use anyhow::anyhow;
use edupaz_cli::store::{edit_form, init_form, load_form, save_form};
use edupaz_model::{EventField, FormState, GeneralField};

#[test]
fn init_then_load_gives_fresh_form() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("form.json");

    init_form(&path, false).unwrap();
    assert_eq!(load_form(&path).unwrap(), FormState::new());
}

#[test]
fn init_refuses_to_overwrite_without_force() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("form.json");
    let mut form = FormState::new();
    form.set_general(GeneralField::Name, "IE Test");
    save_form(&path, &form).unwrap();

    let err = init_form(&path, false).unwrap_err();
    assert!(err.to_string().contains("already exists"));
    assert_eq!(load_form(&path).unwrap().general().name, "IE Test");

    init_form(&path, true).unwrap();
    assert_eq!(load_form(&path).unwrap().general().name, "");
}

#[test]
fn save_creates_parent_directories_and_leaves_no_staging_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested").join("form.json");
    save_form(&path, &FormState::new()).unwrap();

    let names: Vec<_> = std::fs::read_dir(path.parent().unwrap())
        .unwrap()
        .map(|entry| entry.unwrap().file_name())
        .collect();
    assert_eq!(names, vec![std::ffi::OsString::from("form.json")]);
}

#[test]
fn failed_edit_is_not_saved() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("form.json");
    init_form(&path, false).unwrap();

    let result: anyhow::Result<()> = edit_form(&path, |form| {
        form.update_event(0, EventField::Period, "2001")?;
        Err(anyhow!("abort"))
    });
    assert!(result.is_err());
    assert_eq!(load_form(&path).unwrap().events()[0].period, "");
}

#[test]
fn edit_persists_changes() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("form.json");
    init_form(&path, false).unwrap();

    let len = edit_form(&path, |form| Ok(form.add_event())).unwrap();
    assert_eq!(len, 2);
    assert_eq!(load_form(&path).unwrap().events().len(), 2);
}

#[test]
fn missing_form_mentions_init() {
    let dir = tempfile::tempdir().unwrap();
    let err = load_form(&dir.path().join("absent.json")).unwrap_err();
    assert!(err.to_string().contains("edupaz init"));
}
