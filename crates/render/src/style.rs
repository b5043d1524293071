//! Palette and text styles of the invoice page.

/// 8-bit RGB colour.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    /// Components scaled to `0.0..=1.0`, as PDF colour operators expect.
    pub fn unit(self) -> [f32; 3] {
        [
            f32::from(self.0) / 255.0,
            f32::from(self.1) / 255.0,
            f32::from(self.2) / 255.0,
        ]
    }
}

pub const PRIMARY: Rgb = Rgb(37, 99, 235);
pub const TEXT: Rgb = Rgb(30, 41, 59);
pub const LIGHT_GRAY: Rgb = Rgb(148, 163, 184);
pub const DARK_GRAY: Rgb = Rgb(75, 85, 99);
pub const WHITE: Rgb = Rgb(255, 255, 255);
pub const BAND: Rgb = Rgb(240, 240, 240);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Weight {
    Normal,
    Bold,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextStyle {
    /// Size in points.
    pub size: f32,
    pub weight: Weight,
    pub color: Rgb,
}

const fn style(size: f32, weight: Weight, color: Rgb) -> TextStyle {
    TextStyle {
        size,
        weight,
        color,
    }
}

pub const BRAND: TextStyle = style(22.0, Weight::Bold, WHITE);
pub const BRAND_DETAIL: TextStyle = style(11.0, Weight::Normal, WHITE);
pub const INVOICE_TITLE: TextStyle = style(16.0, Weight::Bold, WHITE);
pub const INVOICE_DETAIL: TextStyle = style(12.0, Weight::Normal, WHITE);
pub const SECTION: TextStyle = style(16.0, Weight::Bold, PRIMARY);
pub const CUSTOMER_NAME: TextStyle = style(11.0, Weight::Bold, TEXT);
pub const BODY: TextStyle = style(11.0, Weight::Normal, TEXT);
pub const BAND_TITLE: TextStyle = style(12.0, Weight::Bold, PRIMARY);
pub const TABLE_HEAD: TextStyle = style(10.0, Weight::Bold, DARK_GRAY);
pub const TABLE_CELL: TextStyle = style(10.0, Weight::Normal, TEXT);
pub const TOTAL: TextStyle = style(12.0, Weight::Bold, WHITE);
pub const TERMS_TITLE: TextStyle = style(11.0, Weight::Bold, TEXT);
pub const TERMS: TextStyle = style(9.0, Weight::Normal, TEXT);
pub const THANKS: TextStyle = style(11.0, Weight::Bold, PRIMARY);
pub const CLOSING: TextStyle = style(9.0, Weight::Normal, TEXT);
