use crate::errors::{AppError, AppResult};
use crate::export::ExportFormat;
use crate::export::fs_utils::ensure_writable;
use crate::export::json_csv::{export_csv, export_json};
use crate::export::model::TicketExport;
use crate::export::xlsx::export_xlsx;
use crate::models::TicketReport;
use crate::ui::messages::warning;
use crate::utils::path::expand_tilde;

/// High-level export entry point.
pub struct ExportLogic;

impl ExportLogic {
    /// Write the given (already filtered) view of the table to `file`.
    ///
    /// The path must be absolute (or `~/`-anchored); relative paths are
    /// rejected so the output never lands in a surprise directory.
    pub fn export(
        reports: &[TicketReport],
        format: ExportFormat,
        file: &str,
        force: bool,
    ) -> AppResult<()> {
        let path = expand_tilde(file);

        if !path.is_absolute() {
            return Err(AppError::Export(format!(
                "output file path must be absolute: {file}"
            )));
        }

        ensure_writable(&path, force)?;

        if reports.is_empty() {
            warning("No tickets to export for the selected view.");
            return Ok(());
        }

        let rows: Vec<TicketExport> = reports.iter().map(TicketExport::from_report).collect();

        match format {
            ExportFormat::Csv => export_csv(&rows, &path)?,
            ExportFormat::Json => export_json(&rows, &path)?,
            ExportFormat::Xlsx => export_xlsx(&rows, &path)?,
        }

        Ok(())
    }
}
