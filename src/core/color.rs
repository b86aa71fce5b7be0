use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ColorError {
    #[error("color `{0}` is not in #rrggbb form")]
    Format(String),
    #[error("color `{0}` has a non-hex digit")]
    Digit(String),
}

/// Opaque sRGB triple; alpha is supplied per draw call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse `#rrggbb`. Surrounding whitespace is ignored since CSS custom
    /// properties come back with a leading space.
    pub fn from_hex(hex: &str) -> Result<Self, ColorError> {
        let s = hex.trim();
        let digits = s
            .strip_prefix('#')
            .filter(|d| d.len() == 6 && d.is_ascii())
            .ok_or_else(|| ColorError::Format(s.to_string()))?;
        if !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(ColorError::Digit(s.to_string()));
        }
        let channel = |i: usize| {
            u8::from_str_radix(&digits[i..i + 2], 16).map_err(|_| ColorError::Digit(s.to_string()))
        };
        Ok(Self::new(channel(0)?, channel(2)?, channel(4)?))
    }

    /// CSS `rgba(...)` string for canvas fill/stroke styles.
    pub fn css_rgba(&self, alpha: f32) -> String {
        format!("rgba({}, {}, {}, {})", self.r, self.g, self.b, alpha)
    }
}
