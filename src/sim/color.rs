//! Sprite colors
//!
//! Every freshly spawned sprite gets a random "happy" color: bright and
//! saturated, sampled from a restricted HSV space so nothing washes out
//! against the white background.

use rand::Rng;

/// An 8-bit RGB color
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const WHITE: Rgb = Rgb {
        r: 255,
        g: 255,
        b: 255,
    };

    /// Convert from HSV. Hue in degrees [0, 360), saturation and value in [0, 1].
    pub fn from_hsv(h: f32, s: f32, v: f32) -> Self {
        let h = h.rem_euclid(360.0);
        let c = v * s;
        let x = c * (1.0 - ((h / 60.0) % 2.0 - 1.0).abs());
        let m = v - c;

        let (r, g, b) = match h as u32 / 60 {
            0 => (c, x, 0.0),
            1 => (x, c, 0.0),
            2 => (0.0, c, x),
            3 => (0.0, x, c),
            4 => (x, 0.0, c),
            _ => (c, 0.0, x),
        };

        Rgb {
            r: ((r + m) * 255.0).round() as u8,
            g: ((g + m) * 255.0).round() as u8,
            b: ((b + m) * 255.0).round() as u8,
        }
    }

    /// Sample a random bright color: hue anywhere, saturation in [0.7, 1.0),
    /// value in [0.6, 0.9).
    pub fn happy<R: Rng>(rng: &mut R) -> Self {
        let h = rng.random_range(0.0..360.0);
        let s = rng.random_range(0.7..1.0);
        let v = rng.random_range(0.6..0.9);
        Rgb::from_hsv(h, s, v)
    }

    /// CSS hex string, for canvas fill styles
    pub fn css(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}
