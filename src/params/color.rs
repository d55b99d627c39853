//! sRGB colors as edited in the panel and their linear shader form.

/// 8-bit sRGB color, the representation the color pickers edit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SrgbColor(pub [u8; 3]);

impl SrgbColor {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self([r, g, b])
    }

    /// Parse `#rrggbb` (leading `#` optional)
    pub fn from_hex(hex: &str) -> Option<Self> {
        let digits = hex.strip_prefix('#').unwrap_or(hex);
        if digits.len() != 6 || !digits.is_ascii() {
            return None;
        }
        let channel = |i: usize| u8::from_str_radix(&digits[i..i + 2], 16).ok();
        Some(Self([channel(0)?, channel(2)?, channel(4)?]))
    }

    pub fn to_hex(self) -> String {
        let [r, g, b] = self.0;
        format!("#{r:02x}{g:02x}{b:02x}")
    }

    /// Linear RGB in [0, 1], the space the shader blends in
    pub fn to_linear(self) -> [f32; 3] {
        self.0.map(|c| srgb_to_linear(c as f32 / 255.0))
    }

    /// Clear color for an sRGB render target (wgpu expects linear values)
    pub fn to_wgpu(self) -> wgpu::Color {
        let [r, g, b] = self.to_linear();
        wgpu::Color {
            r: r as f64,
            g: g as f64,
            b: b as f64,
            a: 1.0,
        }
    }
}

fn srgb_to_linear(c: f32) -> f32 {
    if c <= 0.04045 {
        c / 12.92
    } else {
        ((c + 0.055) / 1.055).powf(2.4)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hex_parsing() {
        assert_eq!(
            SrgbColor::from_hex("#a48c5d"),
            Some(SrgbColor::new(0xa4, 0x8c, 0x5d))
        );
        assert_eq!(
            SrgbColor::from_hex("9D0202"),
            Some(SrgbColor::new(0x9d, 0x02, 0x02))
        );
        assert_eq!(SrgbColor::from_hex("#bb84"), None);
        assert_eq!(SrgbColor::from_hex("#gg0000"), None);
        assert_eq!(SrgbColor::new(0xbb, 0x84, 0x27).to_hex(), "#bb8427");
    }

    #[test]
    fn test_linear_conversion_endpoints() {
        assert_eq!(SrgbColor::new(0, 0, 0).to_linear(), [0.0, 0.0, 0.0]);
        let white = SrgbColor::new(255, 255, 255).to_linear();
        for c in white {
            assert!((c - 1.0).abs() < 1e-6);
        }

        // Mid grey is darker in linear space
        let [grey, _, _] = SrgbColor::new(128, 128, 128).to_linear();
        assert!(grey > 0.2 && grey < 0.23, "got {}", grey);
    }
}
