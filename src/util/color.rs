//! Color parsing and formatting for the dashboard background picker.

#[cfg(test)]
#[path = "color_test.rs"]
mod color_test;

/// Default dashboard background.
pub const DEFAULT_BACKGROUND: &str = "#1F77B4";

/// An RGBA color as produced by the background picker.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    /// Opacity in `0.0..=1.0`.
    pub a: f64,
}

impl Rgba {
    pub fn new(r: u8, g: u8, b: u8, a: f64) -> Self {
        Self { r, g, b, a: a.clamp(0.0, 1.0) }
    }

    /// Format as a CSS `rgba(r,g,b,a)` string.
    ///
    /// Whole alpha values print without a fractional part (`1`, not `1.0`).
    pub fn to_css(&self) -> String {
        format!("rgba({},{},{},{})", self.r, self.g, self.b, self.a)
    }

    /// Format the RGB channels as lowercase `#rrggbb`, dropping alpha.
    pub fn to_hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

/// Parse `#RGB` or `#RRGGBB` values into RGB channels.
pub fn parse_hex_rgb(raw: &str) -> Option<(u8, u8, u8)> {
    let hex = raw.trim().strip_prefix('#')?;
    if !hex.is_ascii() {
        return None;
    }
    match hex.len() {
        3 => {
            let r = u8::from_str_radix(&hex[0..1].repeat(2), 16).ok()?;
            let g = u8::from_str_radix(&hex[1..2].repeat(2), 16).ok()?;
            let b = u8::from_str_radix(&hex[2..3].repeat(2), 16).ok()?;
            Some((r, g, b))
        }
        6 => {
            let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
            let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
            let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
            Some((r, g, b))
        }
        _ => None,
    }
}

/// Parse `rgba(r, g, b, a)` or `rgb(r, g, b)`; whitespace is optional.
pub fn parse_rgba(raw: &str) -> Option<Rgba> {
    let trimmed = raw.trim();
    let (inner, has_alpha) = if let Some(rest) = trimmed.strip_prefix("rgba(") {
        (rest.strip_suffix(')')?, true)
    } else {
        (trimmed.strip_prefix("rgb(")?.strip_suffix(')')?, false)
    };
    let parts: Vec<&str> = inner.split(',').map(str::trim).collect();
    let expected = if has_alpha { 4 } else { 3 };
    if parts.len() != expected {
        return None;
    }
    let r = parts[0].parse::<u8>().ok()?;
    let g = parts[1].parse::<u8>().ok()?;
    let b = parts[2].parse::<u8>().ok()?;
    let a = if has_alpha { parts[3].parse::<f64>().ok()? } else { 1.0 };
    if !(0.0..=1.0).contains(&a) {
        return None;
    }
    Some(Rgba::new(r, g, b, a))
}

/// Read any supported CSS color into RGBA. Hex colors are fully opaque.
pub fn parse_css_color(raw: &str) -> Option<Rgba> {
    if let Some((r, g, b)) = parse_hex_rgb(raw) {
        return Some(Rgba::new(r, g, b, 1.0));
    }
    parse_rgba(raw)
}

/// Normalize a CSS color for an `<input type="color">`, falling back to the
/// default background when the value can't be read.
pub fn picker_hex(value: &str) -> String {
    parse_css_color(value)
        .or_else(|| parse_css_color(DEFAULT_BACKGROUND))
        .map_or_else(|| "#1f77b4".to_owned(), |c| c.to_hex())
}
