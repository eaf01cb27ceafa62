use crate::gradient::{ColorGradient, Rgb};
use crate::utils::Rgba;

pub const BACKGROUND: Rgba = [15, 15, 15, 255];
pub const DISH_EDGE: Rgba = [180, 180, 255, 80];

pub const AMOEBA_TRAIL: Rgba = [180, 255, 120, 255];

pub const COCCI_LAYERS: [Rgba; 3] = [
    [255, 80, 120, 255], // pink
    [140, 40, 255, 255], // purple
    [60, 200, 255, 255], // blue
];

pub const FILAMENT_WARM: [Rgb; 4] = [
    [255, 160, 140],
    [255, 140, 120],
    [255, 200, 180],
    [255, 100, 80],
];

const MEMBRANE_INNER: Rgb = [0xC5, 0xBF, 0xED];
const MEMBRANE_OUTER: Rgb = [0x79, 0xF5, 0xD6];
const SOFT_PINK: Rgb = [255, 175, 205];

lazy_static::lazy_static! {
    pub static ref MEMBRANE: ColorGradient =
        ColorGradient::from_colors(MEMBRANE_INNER, MEMBRANE_OUTER).tinted(SOFT_PINK, 0.15);
}

#[cfg(test)]
mod tests {
    use super::MEMBRANE;

    #[test]
    fn test_membrane_is_pink_tinted() {
        // 197 * 0.85 + 255 * 0.15, truncated
        assert_eq!([205, 188, 232, 255], MEMBRANE.color_at_t(0.0));
    }
}
