use crate::pixel_grid::GridPoint;
use log::warn;
use std::env;
use std::str::FromStr;

pub const SEED_VAR: &str = "CELL_GALLERY_SEED";
pub const FPS_VAR: &str = "CELL_GALLERY_FPS";
pub const PIXEL_SIZE_VAR: &str = "CELL_GALLERY_PIXEL_SIZE";

#[derive(Debug, Clone, PartialEq)]
pub struct GalleryConfig {
    pub width: u32,
    pub height: u32,
    pub pixel_size: u32,
    pub dish_radius: f32,
    pub frame_rate: u32,
    pub seed: Option<u64>,
    /// Amoebas, cocci, filaments, eukaryote; a compact 2x2 layout.
    pub dish_centers: [GridPoint; 4],
}

impl Default for GalleryConfig {
    fn default() -> Self {
        Self {
            width: 1440,
            height: 900,
            pixel_size: 4,
            dish_radius: 150.0,
            frame_rate: 60,
            seed: None,
            dish_centers: [
                GridPoint::new(480.0, 300.0),
                GridPoint::new(960.0, 300.0),
                GridPoint::new(480.0, 680.0),
                GridPoint::new(960.0, 680.0),
            ],
        }
    }
}

impl GalleryConfig {
    /// Defaults, overridden by a `.env` file and then the process environment.
    pub fn from_env() -> Self {
        dotenv::dotenv().ok();

        let mut config = Self::default();
        config.apply_overrides(|key| env::var(key).ok());
        config
    }

    pub fn apply_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(seed) = lookup(SEED_VAR).and_then(|raw| parse_var::<u64>(SEED_VAR, &raw)) {
            self.seed = Some(seed);
        }
        if let Some(fps) = lookup(FPS_VAR).and_then(|raw| parse_positive(FPS_VAR, &raw)) {
            self.frame_rate = fps;
        }
        if let Some(size) =
            lookup(PIXEL_SIZE_VAR).and_then(|raw| parse_positive(PIXEL_SIZE_VAR, &raw))
        {
            self.pixel_size = size;
        }
    }
}

fn parse_var<T: FromStr>(key: &str, raw: &str) -> Option<T> {
    match raw.trim().parse() {
        Ok(value) => Some(value),
        Err(_) => {
            warn!("Ignoring {}={:?}: not a valid number", key, raw);
            None
        }
    }
}

fn parse_positive(key: &str, raw: &str) -> Option<u32> {
    match parse_var::<u32>(key, raw)? {
        0 => {
            warn!("Ignoring {}=0: must be positive", key);
            None
        }
        value => Some(value),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn with_vars(vars: &[(&str, &str)]) -> GalleryConfig {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        let mut config = GalleryConfig::default();
        config.apply_overrides(|key| vars.get(key).cloned());
        config
    }

    #[test]
    fn test_defaults() {
        let config = GalleryConfig::default();

        assert_eq!((1440, 900), (config.width, config.height));
        assert_eq!(4, config.pixel_size);
        assert_eq!(60, config.frame_rate);
        assert_eq!(None, config.seed);
    }

    #[test]
    fn test_overrides() {
        let config = with_vars(&[(SEED_VAR, "42"), (FPS_VAR, " 30 "), (PIXEL_SIZE_VAR, "8")]);

        assert_eq!(Some(42), config.seed);
        assert_eq!(30, config.frame_rate);
        assert_eq!(8, config.pixel_size);
    }

    #[test]
    fn test_bad_values_keep_defaults() {
        let config = with_vars(&[(SEED_VAR, "abc"), (FPS_VAR, "0"), (PIXEL_SIZE_VAR, "-3")]);

        assert_eq!(GalleryConfig::default(), config);
    }
}
