//! The drawing collaborator seam.

use crate::error::RenderError;
use crate::layout::DrawOp;

/// A target that can draw layout operations and produce a finished document.
pub trait DrawingSurface {
    fn draw(&mut self, op: &DrawOp) -> Result<(), RenderError>;

    /// Finish the document and return its bytes.
    fn finish(self) -> Result<Vec<u8>, RenderError>
    where
        Self: Sized;
}

/// Draw every operation in order, then finish the surface.
///
/// Stops at the first failing operation.
pub fn render<S: DrawingSurface>(ops: &[DrawOp], mut surface: S) -> Result<Vec<u8>, RenderError> {
    for op in ops {
        surface.draw(op)?;
    }
    surface.finish()
}
