//! File Operations for Condominio Admin
//!
//! Native file dialogs via the `rfd` crate: choosing where to save a
//! downloaded contract PDF and picking a visitor photo for upload.

use chrono::{DateTime, Utc};
use rfd::AsyncFileDialog;
use std::path::PathBuf;

use condo_core::{AdminError, AdminResult};

// ============================================================================
// Default names
// ============================================================================

/// Default filename for a downloaded contract PDF, embedding the moment of
/// download so repeated saves never collide.
pub fn pdf_default_filename(now: DateTime<Utc>) -> String {
    format!("contrato_{}.pdf", now.format("%Y%m%d_%H%M%S"))
}

// ============================================================================
// File Dialog Functions
// ============================================================================

/// Ask the user where to save a contract PDF.
///
/// Returns `AdminError::Cancelled` if the dialog was dismissed.
pub async fn show_pdf_save_dialog(default_name: &str) -> AdminResult<PathBuf> {
    let file = AsyncFileDialog::new()
        .set_title("Guardar PDF")
        .set_file_name(default_name)
        .add_filter("PDF", &["pdf"])
        .save_file()
        .await
        .ok_or(AdminError::Cancelled)?;

    Ok(file.path().to_path_buf())
}

/// Ask the user for a visitor photo to upload.
///
/// Returns `AdminError::Cancelled` if the dialog was dismissed.
pub async fn show_photo_pick_dialog() -> AdminResult<PathBuf> {
    let file = AsyncFileDialog::new()
        .set_title("Seleccionar foto")
        .add_filter("Imágenes", &["png", "jpg", "jpeg"])
        .add_filter("All Files", &["*"])
        .pick_file()
        .await
        .ok_or(AdminError::Cancelled)?;

    Ok(file.path().to_path_buf())
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_pdf_default_filename_embeds_timestamp() {
        let moment = Utc.with_ymd_and_hms(2024, 3, 15, 10, 30, 45).unwrap();
        assert_eq!(pdf_default_filename(moment), "contrato_20240315_103045.pdf");
    }

    #[test]
    fn test_pdf_default_filenames_differ_across_moments() {
        let a = Utc.with_ymd_and_hms(2024, 3, 15, 10, 30, 45).unwrap();
        let b = Utc.with_ymd_and_hms(2024, 3, 15, 10, 30, 46).unwrap();
        assert_ne!(pdf_default_filename(a), pdf_default_filename(b));
    }
}
