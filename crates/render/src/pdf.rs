//! PDF output through `lopdf`.
//!
//! Layout coordinates are millimetres from the top-left corner; PDF user
//! space is points from the bottom-left. Text uses the standard Helvetica
//! fonts with WinAnsi encoding, so nothing needs embedding.

use lopdf::content::{Content, Operation};
use lopdf::{Document, Object, Stream, StringFormat, dictionary};

use crate::error::RenderError;
use crate::layout::{DrawOp, PAGE_HEIGHT_MM, PAGE_WIDTH_MM, Point, Rect};
use crate::style::{Rgb, TextStyle, Weight};
use crate::surface::DrawingSurface;
use crate::text::win_ansi;

/// Points per millimetre.
const MM_TO_PT: f32 = 72.0 / 25.4;

const REGULAR_FONT: &str = "F1";
const BOLD_FONT: &str = "F2";

/// Single A4 page accumulating content operations.
#[derive(Debug)]
pub struct PdfSurface {
    title: String,
    operations: Vec<Operation>,
}

impl PdfSurface {
    pub fn a4(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            operations: Vec::new(),
        }
    }

    fn push(&mut self, operator: &str, operands: Vec<Object>) {
        self.operations.push(Operation::new(operator, operands));
    }

    fn fill_color(&mut self, color: Rgb) {
        let [r, g, b] = color.unit();
        self.push("rg", vec![r.into(), g.into(), b.into()]);
    }

    fn stroke_color(&mut self, color: Rgb) {
        let [r, g, b] = color.unit();
        self.push("RG", vec![r.into(), g.into(), b.into()]);
    }

    fn rect(&mut self, rect: &Rect) -> Result<(), RenderError> {
        let (x, y) = to_page(rect.x, rect.y + rect.h)?;
        let (w, h) = (finite(rect.w)? * MM_TO_PT, finite(rect.h)? * MM_TO_PT);
        self.push("re", vec![x.into(), y.into(), w.into(), h.into()]);
        Ok(())
    }

    fn text(&mut self, at: &Point, text: &str, style: &TextStyle) -> Result<(), RenderError> {
        let (x, y) = to_page(at.x, at.y)?;
        let font = match style.weight {
            Weight::Normal => REGULAR_FONT,
            Weight::Bold => BOLD_FONT,
        };
        self.push("BT", vec![]);
        self.push("Tf", vec![font.into(), finite(style.size)?.into()]);
        self.fill_color(style.color);
        self.push("Td", vec![x.into(), y.into()]);
        self.push(
            "Tj",
            vec![Object::String(win_ansi(text), StringFormat::Literal)],
        );
        self.push("ET", vec![]);
        Ok(())
    }
}

impl DrawingSurface for PdfSurface {
    fn draw(&mut self, op: &DrawOp) -> Result<(), RenderError> {
        match op {
            DrawOp::FillRect { rect, color } => {
                self.fill_color(*color);
                self.rect(rect)?;
                self.push("f", vec![]);
            }
            DrawOp::StrokeRect { rect, color, width } => {
                self.stroke_color(*color);
                self.push("w", vec![finite(*width)?.into()]);
                self.rect(rect)?;
                self.push("S", vec![]);
            }
            DrawOp::Line {
                from,
                to,
                color,
                width,
            } => {
                let (x1, y1) = to_page(from.x, from.y)?;
                let (x2, y2) = to_page(to.x, to.y)?;
                self.stroke_color(*color);
                self.push("w", vec![finite(*width)?.into()]);
                self.push("m", vec![x1.into(), y1.into()]);
                self.push("l", vec![x2.into(), y2.into()]);
                self.push("S", vec![]);
            }
            DrawOp::Text { at, text, style } => self.text(at, text, style)?,
        }
        Ok(())
    }

    fn finish(self) -> Result<Vec<u8>, RenderError> {
        let mut doc = Document::with_version("1.5");
        let pages_id = doc.new_object_id();

        let font_dict = |base: &str| {
            dictionary! {
                "Type" => "Font",
                "Subtype" => "Type1",
                "BaseFont" => base,
                "Encoding" => "WinAnsiEncoding",
            }
        };
        let regular_id = doc.add_object(font_dict("Helvetica"));
        let bold_id = doc.add_object(font_dict("Helvetica-Bold"));
        let resources_id = doc.add_object(dictionary! {
            "Font" => dictionary! {
                REGULAR_FONT => regular_id,
                BOLD_FONT => bold_id,
            },
        });

        let content = Content {
            operations: self.operations,
        };
        let encoded = content
            .encode()
            .map_err(|e| RenderError::Encode(e.to_string()))?;
        let content_id = doc.add_object(Stream::new(dictionary! {}, encoded));

        let page_id = doc.add_object(dictionary! {
            "Type" => "Page",
            "Parent" => pages_id,
            "Contents" => content_id,
        });
        doc.objects.insert(
            pages_id,
            Object::Dictionary(dictionary! {
                "Type" => "Pages",
                "Kids" => vec![Object::Reference(page_id)],
                "Count" => 1,
                "Resources" => resources_id,
                "MediaBox" => vec![
                    0.into(),
                    0.into(),
                    (PAGE_WIDTH_MM * MM_TO_PT).into(),
                    (PAGE_HEIGHT_MM * MM_TO_PT).into(),
                ],
            }),
        );

        let catalog_id = doc.add_object(dictionary! {
            "Type" => "Catalog",
            "Pages" => pages_id,
        });
        let info_id = doc.add_object(dictionary! {
            "Title" => Object::String(win_ansi(&self.title), StringFormat::Literal),
            "Producer" => Object::string_literal("snapzone"),
        });
        doc.trailer.set("Root", catalog_id);
        doc.trailer.set("Info", info_id);
        doc.compress();

        let mut bytes = Vec::new();
        doc.save_to(&mut bytes)
            .map_err(|e| RenderError::Encode(e.to_string()))?;
        Ok(bytes)
    }
}

fn finite(value: f32) -> Result<f32, RenderError> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(RenderError::Drawing(format!("non-finite coordinate {value}")))
    }
}

/// Layout millimetres (top-left origin) to page points (bottom-left origin).
///
/// Points off the page are rejected rather than silently clipped.
fn to_page(x: f32, y: f32) -> Result<(f32, f32), RenderError> {
    let (x, y) = (finite(x)?, finite(y)?);
    if !(0.0..=PAGE_WIDTH_MM).contains(&x) || !(0.0..=PAGE_HEIGHT_MM).contains(&y) {
        return Err(RenderError::Drawing(format!(
            "content at ({x:.1} mm, {y:.1} mm) does not fit on the page"
        )));
    }
    Ok((x * MM_TO_PT, (PAGE_HEIGHT_MM - y) * MM_TO_PT))
}
