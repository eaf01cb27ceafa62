use super::{Dish, DishBounds};
use crate::palettes::COCCI_LAYERS;
use crate::pixel_grid::GridPoint;
use crate::random::RandomSource;
use crate::surface::Surface;
use crate::utils::Rgba;
use log::debug;

const BLOB_COUNT: usize = 20;
const SAFE_MARGIN: f32 = 24.0;
const BREATH_RATE: f32 = 0.02;
const BREATH_AMPLITUDE: f32 = 2.0;

#[derive(Debug, Clone, PartialEq)]
pub struct Blob {
    pub center: GridPoint,
    pub base_size: f32,
    pub layers: Vec<Rgba>,
    pub offset: f32,
}

impl Blob {
    /// Diameter of layer `i` before breathing.
    pub fn layer_base_diameter(&self, i: usize) -> f32 {
        let step = self.base_size / self.layers.len() as f32;
        self.base_size - i as f32 * step
    }

    /// Diameter of layer `i` at `time`, clamped so the circle fits in `max_radius`.
    pub fn layer_diameter(&self, i: usize, time: f32, max_radius: f32) -> f32 {
        let breath = (time * BREATH_RATE + self.offset + i as f32).sin() * BREATH_AMPLITUDE;
        let d = self.layer_base_diameter(i) + breath;

        if d / 2.0 > max_radius { max_radius * 2.0 } else { d }
    }
}

pub struct CocciDish {
    bounds: DishBounds,
    blobs: Vec<Blob>,
}

impl CocciDish {
    pub fn new(bounds: DishBounds) -> Self {
        Self {
            bounds,
            blobs: Vec::new(),
        }
    }

    pub fn blobs(&self) -> &[Blob] {
        &self.blobs
    }

    /// Nothing is drawn farther than this from a blob's center.
    pub fn safe_radius(&self) -> f32 {
        self.bounds.inner_radius() - SAFE_MARGIN
    }
}

impl Dish for CocciDish {
    fn name(&self) -> &'static str {
        "cocci"
    }

    fn init(&mut self, rng: &mut RandomSource) {
        let max_r = self.safe_radius();
        let DishBounds { grid, center, .. } = self.bounds;

        self.blobs = (0..BLOB_COUNT)
            .map(|_| {
                let angle = rng.angle();
                let r = rng.range(0.0, max_r);
                Blob {
                    center: grid.snap(GridPoint::polar(center, angle, r)),
                    base_size: rng.range(6.0, 14.0).floor() * grid.pixel_size(),
                    layers: COCCI_LAYERS.to_vec(),
                    offset: rng.range(0.0, 1000.0),
                }
            })
            .collect();

        debug!("{}: {} blobs", self.name(), self.blobs.len());
    }

    fn render_frame(&mut self, time: f32, _rng: &mut RandomSource, surface: &mut dyn Surface) {
        let max_r = self.safe_radius();
        self.bounds.draw_outline(surface);

        for blob in &self.blobs {
            for (i, color) in blob.layers.iter().enumerate() {
                let d = blob.layer_diameter(i, time, max_r);
                self.bounds
                    .grid
                    .draw_pixel_circle(surface, blob.center, d, Some(max_r), *color);
            }
        }
    }
}
