use crate::config::GalleryConfig;
use crate::dish::{AmoebaDish, CocciDish, Dish, DishBounds, EukaryoteDish, FilamentDish};
use crate::palettes::BACKGROUND;
use crate::pixel_grid::PixelGrid;
use crate::random::RandomSource;
use crate::surface::Surface;
use log::info;

/// The four dishes and the clock and randomness they share.
pub struct Gallery {
    rng: RandomSource,
    frame: u64,
    dishes: Vec<Box<dyn Dish>>,
}

impl Gallery {
    pub fn new(config: &GalleryConfig, rng: RandomSource) -> Self {
        let grid = PixelGrid::new(config.pixel_size as f32);
        let [amoebas, cocci, filaments, eukaryote] = config
            .dish_centers
            .map(|center| DishBounds::new(grid, center, config.dish_radius));

        let mut gallery = Self {
            rng,
            frame: 0,
            dishes: vec![
                Box::new(AmoebaDish::new(amoebas)),
                Box::new(CocciDish::new(cocci)),
                Box::new(FilamentDish::new(filaments)),
                Box::new(EukaryoteDish::new(eukaryote)),
            ],
        };
        gallery.init();
        gallery
    }

    /// Throws away every dish's entities and generates new ones.
    pub fn init(&mut self) {
        for dish in &mut self.dishes {
            dish.init(&mut self.rng);
        }
        info!(
            "Initialized {} dishes (seed {})",
            self.dishes.len(),
            self.rng.seed()
        );
    }

    pub fn frame(&self) -> u64 {
        self.frame
    }

    pub fn dish_names(&self) -> Vec<&'static str> {
        self.dishes.iter().map(|d| d.name()).collect()
    }

    /// Advances one frame and draws every dish over a cleared background.
    pub fn render_frame(&mut self, surface: &mut dyn Surface) {
        self.frame += 1;
        let time = self.frame as f32;

        surface.clear(BACKGROUND);
        for dish in &mut self.dishes {
            dish.render_frame(time, &mut self.rng, surface);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::surface::Canvas;
    use crate::surface::testing::RecordingSurface;

    #[test]
    fn test_dish_order() {
        let gallery = Gallery::new(&GalleryConfig::default(), RandomSource::seeded(1));

        assert_eq!(
            vec!["amoebas", "cocci", "filaments", "eukaryote"],
            gallery.dish_names()
        );
    }

    #[test]
    fn test_render_clears_then_draws() {
        let mut gallery = Gallery::new(&GalleryConfig::default(), RandomSource::seeded(1));
        let mut surface = RecordingSurface::default();

        gallery.render_frame(&mut surface);
        gallery.render_frame(&mut surface);

        assert_eq!(2, gallery.frame());
        assert_eq!(vec![BACKGROUND, BACKGROUND], surface.clears);
        assert!(!surface.fills.is_empty());
        assert!(!surface.strokes.is_empty());
    }

    #[test]
    fn test_same_seed_same_frames() {
        let config = GalleryConfig::default();
        let mut a = Gallery::new(&config, RandomSource::seeded(99));
        let mut b = Gallery::new(&config, RandomSource::seeded(99));
        let mut surface_a = RecordingSurface::default();
        let mut surface_b = RecordingSurface::default();

        for _ in 0..3 {
            a.render_frame(&mut surface_a);
            b.render_frame(&mut surface_b);
        }

        assert_eq!(surface_a.fills, surface_b.fills);
    }

    #[test]
    fn test_renders_into_canvas() {
        let config = GalleryConfig::default();
        let mut gallery = Gallery::new(&config, RandomSource::seeded(5));
        let mut frame = vec![0u8; (config.width * config.height * 4) as usize];
        let mut canvas = Canvas::new(&mut frame, config.width, config.height);

        gallery.render_frame(&mut canvas);

        assert_eq!(Some(BACKGROUND), canvas.pixel(0, 0));
        assert_ne!(Some(BACKGROUND), canvas.pixel(960, 680));
    }
}
