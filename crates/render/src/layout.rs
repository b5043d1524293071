//! Invoice page layout.
//!
//! Produces the complete list of drawing operations for one A4 page, in
//! millimetres with the origin at the top-left corner and text positioned by
//! its baseline. Surfaces translate these into their own coordinate systems.
//! The cursor only moves down; a long address or term list can run past the
//! page, and the PDF surface rejects such content.

use snapzone_core::Rupees;
use snapzone_invoicing::{BusinessProfile, COURIER_CHARGE, Invoice};

use crate::style::{self, Rgb, TextStyle};
use crate::text::wrap_text;

pub const PAGE_WIDTH_MM: f32 = 210.0;
pub const PAGE_HEIGHT_MM: f32 = 297.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

/// Axis-aligned rectangle given by its top-left corner and size.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

#[derive(Debug, Clone, PartialEq)]
pub enum DrawOp {
    FillRect { rect: Rect, color: Rgb },
    StrokeRect { rect: Rect, color: Rgb, width: f32 },
    Line { from: Point, to: Point, color: Rgb, width: f32 },
    Text { at: Point, text: String, style: TextStyle },
}

const HEADER_BAND: Rect = Rect { x: 0.0, y: 0.0, w: PAGE_WIDTH_MM, h: 45.0 };
const BRAND_X: f32 = 20.0;
const INVOICE_X: f32 = 150.0;
const BODY_X: f32 = 20.0;
const BODY_TOP: f32 = 65.0;
const ADDRESS_WIDTH: f32 = 80.0;

/// Service table: header text and left edge of each column.
const SERVICE_COLUMNS: [(&str, f32); 5] = [
    ("DESCRIPTION", 25.0),
    ("SIZE", 90.0),
    ("QTY", 120.0),
    ("UNIT PRICE", 140.0),
    ("AMOUNT", 170.0),
];
const TABLE_LEFT: f32 = 20.0;
const TABLE_RIGHT: f32 = 190.0;
const TOTALS_RULE_LEFT: f32 = 120.0;
const TOTALS_LABEL_X: f32 = 140.0;
const TOTALS_VALUE_X: f32 = 170.0;
const RULE_WIDTH: f32 = 0.5;

const BORDER_X: f32 = 15.0;
const BORDER_TOP: f32 = 50.0;
const BORDER_WIDTH: f32 = 180.0;

/// Lay out `invoice` as drawing operations, top to bottom.
pub fn layout_invoice(invoice: &Invoice, profile: &BusinessProfile) -> Vec<DrawOp> {
    let mut page = Page::default();
    header(&mut page, invoice, profile);
    bill_to(&mut page, invoice);
    service_table(&mut page, invoice);
    totals(&mut page, invoice);
    terms_and_footer(&mut page, profile);

    let body_height = page.y - (BORDER_TOP - 10.0);
    page.ops.push(DrawOp::StrokeRect {
        rect: Rect {
            x: BORDER_X,
            y: BORDER_TOP,
            w: BORDER_WIDTH,
            h: body_height,
        },
        color: style::LIGHT_GRAY,
        width: 1.0,
    });
    page.ops
}

/// Operation list plus the running vertical cursor.
#[derive(Default)]
struct Page {
    ops: Vec<DrawOp>,
    y: f32,
}

impl Page {
    fn text(&mut self, x: f32, y: f32, text: impl Into<String>, style: TextStyle) {
        self.ops.push(DrawOp::Text {
            at: Point { x, y },
            text: text.into(),
            style,
        });
    }

    fn fill(&mut self, rect: Rect, color: Rgb) {
        self.ops.push(DrawOp::FillRect { rect, color });
    }

    fn rule(&mut self, from_x: f32, to_x: f32, y: f32) {
        self.ops.push(DrawOp::Line {
            from: Point { x: from_x, y },
            to: Point { x: to_x, y },
            color: style::LIGHT_GRAY,
            width: RULE_WIDTH,
        });
    }

    fn row(&mut self, cells: [String; 5], style: TextStyle) {
        let y = self.y;
        for (cell, (_, x)) in cells.into_iter().zip(SERVICE_COLUMNS) {
            self.text(x, y, cell, style);
        }
    }
}

fn header(page: &mut Page, invoice: &Invoice, profile: &BusinessProfile) {
    page.fill(HEADER_BAND, style::PRIMARY);

    page.text(BRAND_X, 20.0, profile.company_name.to_uppercase(), style::BRAND);
    let details = [
        Some(profile.tagline.clone()),
        profile.phone_line(),
        Some(format!("Email: {}", profile.email)),
    ];
    for (line, y) in details.into_iter().flatten().zip([28.0, 35.0, 42.0]) {
        page.text(BRAND_X, y, line, style::BRAND_DETAIL);
    }

    page.text(INVOICE_X, 20.0, "INVOICE", style::INVOICE_TITLE);
    page.text(
        INVOICE_X,
        30.0,
        format!("Invoice #: {}", invoice.order_number),
        style::INVOICE_DETAIL,
    );
    page.text(
        INVOICE_X,
        38.0,
        format!("Date: {}", invoice.display_date()),
        style::INVOICE_DETAIL,
    );
}

fn bill_to(page: &mut Page, invoice: &Invoice) {
    page.y = BODY_TOP;
    page.text(BODY_X, page.y, "BILL TO:", style::SECTION);
    page.y += 8.0;

    let customer = &invoice.customer;
    page.text(BODY_X, page.y, customer.name.clone(), style::CUSTOMER_NAME);
    page.y += 6.0;

    for contact in [&customer.phone, &customer.email].into_iter().flatten() {
        page.text(BODY_X, page.y, contact.clone(), style::BODY);
        page.y += 6.0;
    }

    for line in wrap_text(&customer.address, ADDRESS_WIDTH, style::BODY.size) {
        page.text(BODY_X, page.y, line, style::BODY);
        page.y += 6.0;
    }

    page.text(
        BODY_X,
        page.y,
        format!("Location: {}", invoice.location_label()),
        style::BODY,
    );
    page.y += 15.0;
}

fn service_table(page: &mut Page, invoice: &Invoice) {
    page.fill(
        Rect {
            x: TABLE_LEFT,
            y: page.y - 5.0,
            w: TABLE_RIGHT - TABLE_LEFT,
            h: 12.0,
        },
        style::BAND,
    );
    page.text(25.0, page.y + 2.0, "SERVICE DETAILS", style::BAND_TITLE);
    page.y += 15.0;

    page.row(SERVICE_COLUMNS.map(|(title, _)| title.to_string()), style::TABLE_HEAD);
    page.y += 8.0;
    page.rule(TABLE_LEFT, TABLE_RIGHT, page.y - 2.0);
    page.y += 5.0;

    let frame = &invoice.frame;
    page.row(
        [
            frame.description(),
            frame.size.clone(),
            frame.quantity.to_string(),
            frame.unit_amount.ascii(),
            invoice.totals.subtotal.ascii(),
        ],
        style::TABLE_CELL,
    );
    page.y += 8.0;

    if invoice.has_courier() {
        page.row(
            [
                "Courier Service".to_string(),
                "-".to_string(),
                "1".to_string(),
                COURIER_CHARGE.ascii(),
                COURIER_CHARGE.ascii(),
            ],
            style::TABLE_CELL,
        );
        page.y += 8.0;
    }
}

fn totals(page: &mut Page, invoice: &Invoice) {
    page.rule(TOTALS_RULE_LEFT, TABLE_RIGHT, page.y);
    page.y += 8.0;

    let lines: [(&str, Rupees); 2] = [
        ("Subtotal:", invoice.totals.subtotal),
        ("Courier Charges:", invoice.totals.courier_charge),
    ];
    for ((label, amount), advance) in lines.into_iter().zip([6.0, 8.0]) {
        page.text(TOTALS_LABEL_X, page.y, label, style::TABLE_CELL);
        page.text(TOTALS_VALUE_X, page.y, amount.ascii(), style::TABLE_CELL);
        page.y += advance;
    }

    page.fill(
        Rect {
            x: TOTALS_RULE_LEFT,
            y: page.y - 5.0,
            w: TABLE_RIGHT - TOTALS_RULE_LEFT,
            h: 12.0,
        },
        style::PRIMARY,
    );
    page.text(125.0, page.y + 2.0, "TOTAL:", style::TOTAL);
    page.text(
        TOTALS_VALUE_X,
        page.y + 2.0,
        invoice.totals.grand_total.ascii(),
        style::TOTAL,
    );
    page.y += 20.0;
}

fn terms_and_footer(page: &mut Page, profile: &BusinessProfile) {
    page.text(BODY_X, page.y, "TERMS & CONDITIONS:", style::TERMS_TITLE);
    page.y += 8.0;
    for term in &profile.terms {
        page.text(BODY_X, page.y, format!("• {term}"), style::TERMS);
        page.y += 6.0;
    }
    page.y += 8.0;

    page.text(BODY_X, page.y, profile.thank_you.clone(), style::THANKS);
    page.y += 6.0;
    page.text(BODY_X, page.y, profile.closing.clone(), style::CLOSING);
}
