//! Form file persistence for the command line host.
//!
//! The form lives in a pretty-printed JSON file between invocations. Each
//! command loads it, applies one operation and saves it back.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};

use edupaz_model::FormState;

/// Form file used when `--form` is not given.
pub const DEFAULT_FORM_PATH: &str = "formulario.json";

/// Load a form file.
pub fn load_form(path: &Path) -> Result<FormState> {
    let text = fs::read_to_string(path).with_context(|| {
        format!(
            "read form {} (run `edupaz init` to create one)",
            path.display()
        )
    })?;
    serde_json::from_str(&text).with_context(|| format!("parse form {}", path.display()))
}

/// Save a form file, replacing the previous content in one rename.
pub fn save_form(path: &Path, form: &FormState) -> Result<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent).with_context(|| format!("create {}", parent.display()))?;
    }
    let mut json = serde_json::to_string_pretty(form).context("serialize form")?;
    json.push('\n');
    let staging = staging_path(path);
    fs::write(&staging, json).with_context(|| format!("write {}", staging.display()))?;
    fs::rename(&staging, path).with_context(|| format!("replace {}", path.display()))?;
    Ok(())
}

/// Write a fresh form. Refuses to overwrite unless `force` is set.
pub fn init_form(path: &Path, force: bool) -> Result<FormState> {
    if path.exists() && !force {
        bail!(
            "form {} already exists (use --force to replace it)",
            path.display()
        );
    }
    let form = FormState::new();
    save_form(path, &form)?;
    Ok(form)
}

/// Load, apply `edit`, and save only if the edit succeeded.
pub fn edit_form<T, F>(path: &Path, edit: F) -> Result<T>
where
    F: FnOnce(&mut FormState) -> Result<T>,
{
    let mut form = load_form(path)?;
    let value = edit(&mut form)?;
    save_form(path, &form)?;
    Ok(value)
}

fn staging_path(path: &Path) -> PathBuf {
    let mut name = path
        .file_name()
        .map(|name| name.to_os_string())
        .unwrap_or_default();
    name.push(".tmp");
    path.with_file_name(name)
}
