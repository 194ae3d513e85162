#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Color(pub u8, pub u8, pub u8, pub u8);

impl Color {
    pub const TRANSPARENT: Color = Color(0, 0, 0, 0);
    pub const BLACK: Color = Color(0, 0, 0, 255);
    pub const WHITE: Color = Color(255, 255, 255, 255);

    pub const fn from_rgb(r: u8, g: u8, b: u8) -> Self {
        Color(r, g, b, 255)
    }

    pub const fn from_rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Color(r, g, b, a)
    }

    /// Parses `#rgb`, `#rrggbb` or `#rrggbbaa`. Malformed input yields opaque
    /// black.
    pub fn from_hex(hex: &str) -> Self {
        let s = hex.trim_start_matches('#');
        let byte = |i: usize| {
            s.get(i..i + 2)
                .and_then(|h| u8::from_str_radix(h, 16).ok())
                .unwrap_or(0)
        };
        let nibble = |i: usize| {
            s.get(i..i + 1)
                .and_then(|h| u8::from_str_radix(h, 16).ok())
                .map(|n| n * 17)
                .unwrap_or(0)
        };
        match s.len() {
            3 => Color(nibble(0), nibble(1), nibble(2), 255),
            6 => Color(byte(0), byte(2), byte(4), 255),
            8 => Color(byte(0), byte(2), byte(4), byte(6)),
            _ => Color::BLACK,
        }
    }

    pub fn with_alpha(self, a: u8) -> Self {
        Color(self.0, self.1, self.2, a)
    }

    /// CSS color value: `#rrggbb` when opaque, `rgba(..)` otherwise.
    pub fn to_css(self) -> String {
        if self.3 == 255 {
            format!("#{:02x}{:02x}{:02x}", self.0, self.1, self.2)
        } else {
            let a = (self.3 as f32 / 255.0 * 100.0).round() / 100.0;
            format!("rgba({},{},{},{})", self.0, self.1, self.2, a)
        }
    }
}
