pub mod amoebas;
pub mod cocci;
pub mod eukaryote;
pub mod filaments;

use crate::pixel_grid::{GridPoint, PixelGrid};
use crate::random::RandomSource;
use crate::surface::Surface;

pub use amoebas::AmoebaDish;
pub use cocci::CocciDish;
pub use eukaryote::EukaryoteDish;
pub use filaments::FilamentDish;

/// One independent simulation region. `init` rebuilds every entity from scratch;
/// `render_frame` advances and draws them for frame `time`.
pub trait Dish {
    fn name(&self) -> &'static str;

    fn init(&mut self, rng: &mut RandomSource);

    fn render_frame(&mut self, time: f32, rng: &mut RandomSource, surface: &mut dyn Surface);
}

/// Where a dish sits on the canvas and how it snaps.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DishBounds {
    pub grid: PixelGrid,
    pub center: GridPoint,
    pub radius: f32,
}

impl DishBounds {
    pub fn new(grid: PixelGrid, center: GridPoint, radius: f32) -> Self {
        Self {
            grid,
            center,
            radius,
        }
    }

    /// The dish radius minus a two pixel margin for the wall.
    pub fn inner_radius(&self) -> f32 {
        self.radius - self.grid.pixel_size() * 2.0
    }

    pub fn draw_outline(&self, surface: &mut dyn Surface) {
        self.grid.draw_pixel_dish(surface, self.center, self.radius);
    }
}

#[cfg(test)]
pub(crate) fn test_bounds(x: f32, y: f32) -> DishBounds {
    DishBounds::new(PixelGrid::new(4.0), GridPoint::new(x, y), 150.0)
}
