//! Invoice presentation: page layout, PDF output, terminal preview.
//!
//! Rendering only consumes a validated [`Invoice`](snapzone_invoicing::Invoice);
//! it never sees raw form input.

pub mod error;
pub mod export;
pub mod layout;
pub mod pdf;
pub mod preview;
pub mod style;
pub mod surface;
pub mod text;

pub use error::{ExportError, RenderError};
pub use export::{export_invoice, export_invoice_with, render_pdf};
pub use layout::{DrawOp, Point, Rect, layout_invoice};
pub use pdf::PdfSurface;
pub use preview::{Preview, preview};
pub use surface::{DrawingSurface, render};
