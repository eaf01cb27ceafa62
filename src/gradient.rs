use crate::utils::{Interpolate, Rgba, map_t_of_range_a_to_range_b};
use itertools::Itertools;

pub type Rgb = [u8; 3];
type TColor = (f32, Rgb);

struct Spectrum(Vec<TColor>);

impl Spectrum {
    pub fn from_colors(color_a: Rgb, color_b: Rgb) -> Self {
        Self(vec![(0f32, color_a), (1f32, color_b)])
    }

    pub fn color_at_t(&self, t: f32) -> Rgb {
        let t = t.clamp(0.0, 1.0);
        let (before_color, after_color) = self.get_bounding_colors_for_t(t);
        let mapped_t = if after_color.0 > before_color.0 {
            map_t_of_range_a_to_range_b(t, before_color.0..after_color.0, 0.0..1.0)
        } else {
            0.0
        };

        mix_rgb(before_color.1, after_color.1, mapped_t)
    }

    fn get_bounding_colors_for_t(&self, t: f32) -> (TColor, TColor) {
        if let Some((position, upper_color)) =
            self.0.iter().find_position(|(color_t, _)| *color_t >= t)
        {
            if position >= 1 {
                return (self.0[position - 1], *upper_color);
            }
            return (*upper_color, *upper_color);
        };

        ((0.0, [0, 0, 0]), (1.0, [255, 255, 255]))
    }
}

fn mix_rgb(a: Rgb, b: Rgb, t: f32) -> Rgb {
    let [r1, g1, b1] = a;
    let [r2, g2, b2] = b;

    [
        r1.interpolate(&r2, t),
        g1.interpolate(&g2, t),
        b1.interpolate(&b2, t),
    ]
}

/// A two-stop color ramp, optionally pulled toward a tint.
pub struct ColorGradient {
    spectrum: Spectrum,
    tint: Option<(Rgb, f32)>,
}

impl ColorGradient {
    pub fn from_colors(color_a: Rgb, color_b: Rgb) -> Self {
        Self {
            spectrum: Spectrum::from_colors(color_a, color_b),
            tint: None,
        }
    }

    pub fn tinted(mut self, tint: Rgb, amount: f32) -> Self {
        self.tint = Some((tint, amount));
        self
    }

    /// Blends along the ramp first, then toward the tint.
    pub fn color_at_t(&self, t: f32) -> Rgba {
        let [r, g, b] = match self.tint {
            Some((tint, amount)) => mix_rgb(self.spectrum.color_at_t(t), tint, amount),
            None => self.spectrum.color_at_t(t),
        };

        [r, g, b, 255]
    }
}

#[cfg(test)]
mod tests {
    use super::ColorGradient;

    #[test]
    fn test_endpoints() {
        let gradient = ColorGradient::from_colors([197, 191, 237], [121, 245, 214]);

        assert_eq!([197, 191, 237, 255], gradient.color_at_t(0.0));
        assert_eq!([121, 245, 214, 255], gradient.color_at_t(1.0));
    }

    #[test]
    fn test_midpoint() {
        let gradient = ColorGradient::from_colors([0, 0, 0], [200, 100, 50]);

        assert_eq!([100, 50, 25, 255], gradient.color_at_t(0.5));
    }

    #[test]
    fn test_tint_is_applied_after_ramp() {
        let gradient = ColorGradient::from_colors([0, 0, 0], [0, 0, 0]).tinted([200, 100, 0], 0.5);

        assert_eq!([100, 50, 0, 255], gradient.color_at_t(0.3));
    }
}
