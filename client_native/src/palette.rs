//! Colours

/// An sRGB colour as authored, converted to linear for the GPU
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb(pub u8, pub u8, pub u8);

pub const CORAL_PINK: Rgb = Rgb(255, 128, 128);
pub const TEAL_GREEN: Rgb = Rgb(0, 130, 127);

impl Rgb {
    /// Linear RGBA for an sRGB render target
    pub fn to_linear(self) -> [f32; 4] {
        [
            srgb_to_linear(self.0),
            srgb_to_linear(self.1),
            srgb_to_linear(self.2),
            1.0,
        ]
    }

    pub fn to_wgpu(self) -> wgpu::Color {
        let [r, g, b, a] = self.to_linear();
        wgpu::Color {
            r: r as f64,
            g: g as f64,
            b: b as f64,
            a: a as f64,
        }
    }
}

fn srgb_to_linear(channel: u8) -> f32 {
    let c = channel as f32 / 255.0;
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
    fn test_extremes_map_exactly() {
        assert_eq!(Rgb(0, 0, 0).to_linear(), [0.0, 0.0, 0.0, 1.0]);
        let white = Rgb(255, 255, 255).to_linear();
        for c in &white[..3] {
            assert!((c - 1.0).abs() < 1e-6);
        }
    }

    #[test]
    fn test_midtones_darken_in_linear_space() {
        let [r, g, b, _] = CORAL_PINK.to_linear();
        assert!((r - 1.0).abs() < 1e-6);
        assert!((g - 0.2158).abs() < 1e-3, "128/255 sRGB is ~0.216 linear");
        assert_eq!(g, b);
    }
}
