// Simple color struct, created from an unsigned 32 representing RRGGBB.
// Alpha is supplied per draw call, so only the hue lives here.

#[derive(Copy, Clone, PartialEq, Debug)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

// The one accent hue shared by particles and connection lines.
pub const ACCENT: Color = Color::from_u32(0x3b82f6);

impl Color {
    pub const fn from_u32(num: u32) -> Color {
        let r = (num >> 16) as u8;
        let g = (num >> 8) as u8;
        let b = num as u8;

        Color { r, g, b }
    }

    // CSS color string for the canvas fill/stroke styles.
    pub fn to_css(&self, alpha: f64) -> String {
        format!("rgba({}, {}, {}, {})", self.r, self.g, self.b, alpha)
    }
}
