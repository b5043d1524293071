//! Writing finished invoices to disk.

use std::fs;
use std::path::{Path, PathBuf};

use snapzone_invoicing::{BusinessProfile, Invoice};

use crate::error::{ExportError, RenderError};
use crate::layout::layout_invoice;
use crate::pdf::PdfSurface;
use crate::surface::{DrawingSurface, render};

/// Lay out and render `invoice` as PDF bytes.
pub fn render_pdf(invoice: &Invoice, profile: &BusinessProfile) -> Result<Vec<u8>, RenderError> {
    let title = format!("Invoice {}", invoice.order_number);
    render(&layout_invoice(invoice, profile), PdfSurface::a4(title))
}

/// Render `invoice` as PDF into `out_dir`, returning the written path.
pub fn export_invoice(
    invoice: &Invoice,
    profile: &BusinessProfile,
    out_dir: &Path,
) -> Result<PathBuf, ExportError> {
    let title = format!("Invoice {}", invoice.order_number);
    export_invoice_with(invoice, profile, out_dir, PdfSurface::a4(title))
}

/// Like [`export_invoice`], drawing onto the given surface.
///
/// The output directory is created if missing. Nothing is written when
/// rendering fails.
pub fn export_invoice_with<S: DrawingSurface>(
    invoice: &Invoice,
    profile: &BusinessProfile,
    out_dir: &Path,
    surface: S,
) -> Result<PathBuf, ExportError> {
    let bytes = render(&layout_invoice(invoice, profile), surface).inspect_err(|e| {
        tracing::error!(order_number = %invoice.order_number, error = %e, "invoice rendering failed");
    })?;

    let path = out_dir.join(invoice.file_name());
    fs::create_dir_all(out_dir)
        .and_then(|()| fs::write(&path, &bytes))
        .map_err(|source| {
            tracing::error!(path = %path.display(), error = %source, "failed to write invoice");
            ExportError::Io {
                path: path.clone(),
                source,
            }
        })?;

    tracing::info!(
        order_number = %invoice.order_number,
        path = %path.display(),
        bytes = bytes.len(),
        "invoice exported"
    );
    Ok(path)
}
