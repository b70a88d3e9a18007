use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::{debug, info, info_span, warn};

use edupaz_cli::store::{edit_form, init_form, load_form};
use edupaz_model::{FormState, GeneralField, missing_required_fields};
use edupaz_report::{DirectorySink, ExportError, ExportFormat, ExportSink, export};

use crate::cli::{
    ExportArgs, ExportFormatArg, InitArgs, RemoveEventArgs, SetArgs, UpdateEventArgs,
};

/// A file written by `export`.
#[derive(Debug)]
pub struct DeliveredExport {
    pub format: ExportFormat,
    pub path: PathBuf,
    pub bytes: usize,
}

pub fn run_init(form_path: &Path, args: &InitArgs) -> Result<()> {
    init_form(form_path, args.force)?;
    info!(form = %form_path.display(), "form created");
    Ok(())
}

pub fn run_set(form_path: &Path, args: &SetArgs) -> Result<()> {
    edit_form(form_path, |form| {
        form.set_general(args.field, args.value.as_str());
        Ok(())
    })?;
    info!(field = %args.field, "general field updated");
    debug!(field = %args.field, value = %args.value, "new value");
    Ok(())
}

pub fn run_add_event(form_path: &Path) -> Result<usize> {
    let len = edit_form(form_path, |form| Ok(form.add_event()))?;
    info!(events = len, "event added");
    Ok(len)
}

pub fn run_remove_event(form_path: &Path, args: &RemoveEventArgs) -> Result<()> {
    let remaining = edit_form(form_path, |form| {
        form.remove_event(args.index)
            .with_context(|| format!("remove event {}", args.index))?;
        Ok(form.events().len())
    })?;
    info!(index = args.index, events = remaining, "event removed");
    Ok(())
}

pub fn run_update_event(form_path: &Path, args: &UpdateEventArgs) -> Result<()> {
    edit_form(form_path, |form| {
        form.update_event(args.index, args.field, args.value.as_str())
            .with_context(|| format!("update event {}", args.index))?;
        Ok(())
    })?;
    info!(index = args.index, field = %args.field, "event updated");
    debug!(index = args.index, field = %args.field, value = %args.value, "new value");
    Ok(())
}

pub fn run_show(form_path: &Path) -> Result<FormState> {
    load_form(form_path)
}

/// Returns the required fields that are still blank.
pub fn run_check(form_path: &Path) -> Result<Vec<GeneralField>> {
    let form = load_form(form_path)?;
    Ok(missing_required_fields(&form))
}

pub fn run_export(form_path: &Path, args: &ExportArgs) -> Result<Vec<DeliveredExport>> {
    let form = load_form(form_path)?;
    let span = info_span!("export", output_dir = %args.output_dir.display());
    let _guard = span.enter();
    let mut sink = DirectorySink::new(&args.output_dir);
    let mut delivered = Vec::new();
    for format in export_formats(args.format) {
        let artifact = export(&form, format).inspect_err(|error| {
            if let ExportError::NotReady { missing } = error {
                warn!(?missing, "export refused");
            }
        })?;
        debug!(%format, bytes = artifact.bytes.len(), "encoded");
        let path = sink.deliver(&artifact)?;
        info!(%format, path = %path.display(), "export written");
        delivered.push(DeliveredExport {
            format,
            path,
            bytes: artifact.bytes.len(),
        });
    }
    Ok(delivered)
}

fn export_formats(format: ExportFormatArg) -> Vec<ExportFormat> {
    match format {
        ExportFormatArg::Xlsx => vec![ExportFormat::Xlsx],
        ExportFormatArg::Docx => vec![ExportFormat::Docx],
        ExportFormatArg::Both => ExportFormat::ALL.to_vec(),
    }
}

#[cfg(test)]
mod tests {
    use edupaz_model::EventField;

    use super::*;

    fn ready_form(dir: &Path) -> PathBuf {
        let path = dir.join("form.json");
        run_init(&path, &InitArgs { force: false }).unwrap();
        run_set(
            &path,
            &SetArgs {
                field: GeneralField::Name,
                value: "Escuela Rural #1".to_string(),
            },
        )
        .unwrap();
        run_set(
            &path,
            &SetArgs {
                field: GeneralField::Municipality,
                value: "Anapoima".to_string(),
            },
        )
        .unwrap();
        path
    }

    #[test]
    fn test_export_both_formats() {
        let dir = tempfile::tempdir().unwrap();
        let form = ready_form(dir.path());
        let out = dir.path().join("out");

        let delivered = run_export(
            &form,
            &ExportArgs {
                format: ExportFormatArg::Both,
                output_dir: out.clone(),
            },
        )
        .unwrap();

        assert_eq!(delivered.len(), 2);
        assert_eq!(delivered[0].path, out.join("Info_Institucion_Escuela_Rural_1.xlsx"));
        assert_eq!(delivered[1].path, out.join("Info_Institucion_Escuela_Rural_1.docx"));
        assert!(delivered.iter().all(|d| d.path.is_file() && d.bytes > 0));
    }

    #[test]
    fn test_export_not_ready_writes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let form = dir.path().join("form.json");
        run_init(&form, &InitArgs { force: false }).unwrap();
        let out = dir.path().join("out");

        let err = run_export(
            &form,
            &ExportArgs {
                format: ExportFormatArg::Xlsx,
                output_dir: out.clone(),
            },
        )
        .unwrap_err();

        assert!(matches!(
            err.downcast_ref::<ExportError>(),
            Some(ExportError::NotReady { .. })
        ));
        assert!(!out.exists());
    }

    #[test]
    fn test_event_commands_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let form = ready_form(dir.path());

        assert_eq!(run_add_event(&form).unwrap(), 2);
        run_update_event(
            &form,
            &UpdateEventArgs {
                index: 1,
                field: EventField::Period,
                value: "X".to_string(),
            },
        )
        .unwrap();
        run_remove_event(&form, &RemoveEventArgs { index: 0 }).unwrap();

        let state = run_show(&form).unwrap();
        assert_eq!(state.events().len(), 1);
        assert_eq!(state.events()[0].period, "X");
        assert!(run_check(&form).unwrap().is_empty());
    }

    #[test]
    fn test_remove_out_of_range_keeps_file() {
        let dir = tempfile::tempdir().unwrap();
        let form = ready_form(dir.path());

        let err = run_remove_event(&form, &RemoveEventArgs { index: 3 }).unwrap_err();
        assert!(format!("{err:#}").contains("event index 3 out of range"));
        assert_eq!(run_show(&form).unwrap().events().len(), 1);
    }
}
