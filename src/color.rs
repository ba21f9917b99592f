//! RGB colours, channel interpolation and the sky palettes blended by the day/night cycle.

/// Colour with floating point channels in 0..=255 so interpolated values are not truncated.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rgb {
    pub r: f64,
    pub g: f64,
    pub b: f64,
}

impl Rgb {
    pub const WHITE: Rgb = Rgb::new(255.0, 255.0, 255.0);

    pub const fn new(r: f64, g: f64, b: f64) -> Self {
        Self { r, g, b }
    }

    /// CSS colour string accepted by `fillStyle` / `addColorStop`.
    pub fn to_css(&self, alpha: f64) -> String {
        format!("rgba({}, {}, {}, {})", self.r, self.g, self.b, alpha)
    }
}

/// `a` at `t = 0`, `b` at `t = 1`.
#[inline]
pub fn lerp_value(a: f64, b: f64, t: f64) -> f64 {
    a * (1.0 - t) + b * t
}

pub fn lerp_color(a: Rgb, b: Rgb, t: f64) -> Rgb {
    Rgb::new(
        lerp_value(a.r, b.r, t),
        lerp_value(a.g, b.g, t),
        lerp_value(a.b, b.b, t),
    )
}

/// Gradient stop offsets of the five sky bands (top of the sky to the ground).
pub const SKY_BAND_OFFSETS: [f64; 5] = [0.0, 0.5, 0.8, 0.9, 1.0];

/// Five sky bands plus the sun / moon glow colour.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SkyPalette {
    pub bands: [Rgb; 5],
    pub glow: Rgb,
}

impl SkyPalette {
    /// Blend two palettes; `t = 0` is `night`, `t = 1` is `day`.
    pub fn blend(night: &SkyPalette, day: &SkyPalette, t: f64) -> SkyPalette {
        let mut bands = night.bands;
        for (band, (n, d)) in bands.iter_mut().zip(night.bands.iter().zip(day.bands.iter())) {
            *band = lerp_color(*n, *d, t);
        }
        SkyPalette {
            bands,
            glow: lerp_color(night.glow, day.glow, t),
        }
    }
}

/// Sunset sky with the moon.
pub const NIGHT_PALETTE: SkyPalette = SkyPalette {
    bands: [
        Rgb::new(12.0, 18.0, 44.0),
        Rgb::new(42.0, 10.0, 86.0),
        Rgb::new(83.0, 50.0, 86.0),
        Rgb::new(157.0, 50.0, 4.0),
        Rgb::new(0.0, 0.0, 0.0), // ground
    ],
    glow: Rgb::new(244.0, 241.0, 201.0),
};

/// Sunrise sky with the sun.
pub const DAY_PALETTE: SkyPalette = SkyPalette {
    bands: [
        Rgb::new(32.0, 70.0, 106.0),
        Rgb::new(120.0, 166.0, 232.0),
        Rgb::new(194.0, 195.0, 199.0),
        Rgb::new(221.0, 178.0, 133.0),
        Rgb::new(255.0, 92.0, 61.0), // ground
    ],
    glow: Rgb::new(249.0, 215.0, 28.0),
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lerp_value_endpoints_and_midpoint() {
        assert_eq!(lerp_value(10.0, 20.0, 0.0), 10.0);
        assert_eq!(lerp_value(10.0, 20.0, 1.0), 20.0);
        assert_eq!(lerp_value(10.0, 20.0, 0.5), 15.0);
    }

    #[test]
    fn lerp_color_is_per_channel() {
        let c = lerp_color(Rgb::new(0.0, 100.0, 200.0), Rgb::new(100.0, 100.0, 0.0), 0.25);
        assert_eq!(c, Rgb::new(25.0, 100.0, 150.0));
    }

    #[test]
    fn blend_endpoints_match_palettes() {
        assert_eq!(SkyPalette::blend(&NIGHT_PALETTE, &DAY_PALETTE, 0.0), NIGHT_PALETTE);
        assert_eq!(SkyPalette::blend(&NIGHT_PALETTE, &DAY_PALETTE, 1.0), DAY_PALETTE);
    }

    #[test]
    fn css_string_format() {
        assert_eq!(Rgb::new(1.0, 2.5, 3.0).to_css(1.0), "rgba(1, 2.5, 3, 1)");
        assert_eq!(Rgb::WHITE.to_css(0.0), "rgba(255, 255, 255, 0)");
    }
}
