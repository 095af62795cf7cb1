//! 24-bit colors for ring segments and the ball

use rand::Rng;

/// An opaque sRGB color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const WHITE: Rgb = Rgb::new(0xff, 0xff, 0xff);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Build from the low 24 bits of `value` (0xRRGGBB)
    pub const fn from_u24(value: u32) -> Self {
        Self {
            r: ((value >> 16) & 0xff) as u8,
            g: ((value >> 8) & 0xff) as u8,
            b: (value & 0xff) as u8,
        }
    }

    /// Uniform random color below 0xFFFFFF
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self::from_u24(rng.random_range(0..0xff_ffff))
    }

    /// Parse `#rrggbb`
    pub fn parse_hex(s: &str) -> Option<Self> {
        let hex = s.strip_prefix('#')?;
        if hex.len() != 6 || !hex.chars().all(|c| c.is_ascii_hexdigit()) {
            return None;
        }
        u32::from_str_radix(hex, 16).ok().map(Self::from_u24)
    }

    /// Format as `#rrggbb` (always six digits)
    pub fn to_hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    /// RGBA bytes with full alpha
    pub fn to_rgba(&self) -> [u8; 4] {
        [self.r, self.g, self.b, 0xff]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    #[test]
    fn test_hex_is_zero_padded() {
        assert_eq!(Rgb::from_u24(0x00_0a_01).to_hex(), "#000a01");
        assert_eq!(Rgb::WHITE.to_hex(), "#ffffff");
    }

    #[test]
    fn test_parse_hex() {
        assert_eq!(Rgb::parse_hex("#12ab3C"), Some(Rgb::new(0x12, 0xab, 0x3c)));
        assert_eq!(Rgb::parse_hex("12ab3c"), None);
        assert_eq!(Rgb::parse_hex("#fff"), None);
        assert_eq!(Rgb::parse_hex("#gggggg"), None);
        assert_eq!(Rgb::parse_hex("#+12345"), None);
    }

    #[test]
    fn test_random_is_seeded() {
        let mut a = Pcg32::seed_from_u64(42);
        let mut b = Pcg32::seed_from_u64(42);
        for _ in 0..10 {
            assert_eq!(Rgb::random(&mut a), Rgb::random(&mut b));
        }
    }
}
