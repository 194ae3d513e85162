use folio_core::Color;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Theme {
    pub background: Color,
    pub border: Color,
    pub accent: Color,
    pub accent2: Color,
    pub text: Color,
    pub muted: Color,
    /// Tag chips in the skills grid.
    pub chip: Color,
    pub chip_border: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            background: Color::from_rgb(0x0a, 0x0a, 0x0a),
            border: Color::from_rgb(0x22, 0x22, 0x22),
            accent: Color::from_rgb(0xe8, 0xff, 0x47),
            accent2: Color::from_rgb(0x47, 0xb3, 0xff),
            text: Color::WHITE,
            muted: Color::from_rgb(0x66, 0x66, 0x66),
            chip: Color::from_rgb(0x18, 0x18, 0x18),
            chip_border: Color::from_rgb(0x28, 0x28, 0x28),
        }
    }
}

impl Theme {
    /// Document-level CSS the inline styles can't express.
    pub fn stylesheet(&self) -> String {
        let bg = self.background.to_css();
        format!(
            "body{{background:{bg};overflow-x:hidden}}\
             ::-webkit-scrollbar{{width:4px}}\
             ::-webkit-scrollbar-track{{background:{bg}}}\
             ::-webkit-scrollbar-thumb{{background:#333}}"
        )
    }
}

pub const FONTS_HREF: &str = "https://fonts.googleapis.com/css2?family=Playfair+Display:wght@700;900&family=Syne:wght@400;700;800&family=JetBrains+Mono:wght@300;400&display=swap";

pub const FAVICON: &str = "data:image/svg+xml,%3Csvg xmlns='http://www.w3.org/2000/svg' viewBox='0 0 100 100'%3E%3Crect width='100' height='100' fill='%230a0a0a'/%3E%3Ctext x='50' y='78' font-family='Georgia,serif' font-size='80' font-weight='900' fill='%23e8ff47' text-anchor='middle'%3ES%3C/text%3E%3C/svg%3E";
