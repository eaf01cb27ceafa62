use super::{Dish, DishBounds};
use crate::palettes::MEMBRANE;
use crate::pixel_grid::{GridPoint, PixelGrid, grid_steps};
use crate::random::{NoiseField, RandomSource};
use crate::surface::Surface;
use crate::utils::{Rgba, clamp_channel};
use itertools::iproduct;
use log::debug;
use rayon::prelude::*;

const BODY_SCALE: f32 = 0.95;
const LAYER_COUNT: usize = 7;
const LAYER_SHRINK: f32 = 0.12;
const NOISE_SCALE: f32 = 0.01;
const NOISE_LAYER_SPACING: f32 = 10.0;
const EDGE_BASE: f32 = 0.78;
const EDGE_NOISE: f32 = 0.12;

const GLOBAL_BREATH_RATE: f32 = 0.03;
const GLOBAL_BREATH_AMPLITUDE: f32 = 10.0;
const COLOR_SHIFT_RATE: f32 = 0.025;
const COLOR_SHIFT_AMPLITUDE: f32 = 18.0;
const POINT_DRIFT: f32 = 1.2;

const BUBBLE_COUNT: usize = 14;
const BUBBLE_SPREAD: f32 = 0.65;
const BUBBLE_DRIFT: f32 = 6.0;
const BUBBLE_BREATH_RATE: f32 = 0.05;
const BUBBLE_BREATH_AMPLITUDE: f32 = 2.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayerPoint {
    pub position: GridPoint,
    pub offset: f32,
}

impl LayerPoint {
    /// Where this point is drawn at `time`, snapped to the grid.
    pub fn drifted(&self, time: f32, grid: &PixelGrid) -> GridPoint {
        let dx = (time * 0.01 + self.offset).sin() * POINT_DRIFT;
        let dy = (time * 0.012 + self.offset).cos() * POINT_DRIFT;
        grid.snap(self.position.offset(dx, dy))
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct DiffuseLayer {
    pub points: Vec<LayerPoint>,
    pub color: Rgba,
    pub base_radius: f32,
    pub breathing_speed: f32,
    pub breathing_amp: f32,
}

impl DiffuseLayer {
    pub fn live_radius(&self, time: f32) -> f32 {
        self.base_radius
            + (time * self.breathing_speed).sin() * self.breathing_amp
            + global_breath(time)
    }

    /// Drifted positions of the points inside the live radius at `time`.
    pub fn visible_cells<'a>(
        &'a self,
        time: f32,
        center: GridPoint,
        grid: &'a PixelGrid,
    ) -> impl Iterator<Item = GridPoint> + 'a {
        let live = self.live_radius(time);

        self.points
            .iter()
            .map(move |p| p.drifted(time, grid))
            .filter(move |p| p.distance_to(center) <= live)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Bubble {
    pub center: GridPoint,
    pub radius: f32,
    pub irregularity: f32,
    pub drift_x: f32,
    pub drift_y: f32,
    pub move_speed: f32,
    pub color: Rgba,
}

impl Bubble {
    pub fn drifted_center(&self, time: f32) -> GridPoint {
        let phase = time * self.move_speed;
        self.center.offset(
            (phase + self.drift_x).sin() * BUBBLE_DRIFT,
            (phase + self.drift_y).cos() * BUBBLE_DRIFT,
        )
    }

    /// The radius fraction a cell at offset `(x, y)` must fall inside to be filled.
    pub fn cutoff(&self, x: f32, y: f32, time: f32) -> f32 {
        let breath = (time * BUBBLE_BREATH_RATE + self.drift_x).sin() * BUBBLE_BREATH_AMPLITUDE;
        self.radius * (self.irregularity + (x * 0.15 + y * 0.2).sin() * 0.1 + breath * 0.01)
    }

    pub fn cells(&self, time: f32, grid: &PixelGrid) -> impl Iterator<Item = GridPoint> {
        let c = self.drifted_center(time);
        let steps = grid_steps(self.radius, grid.pixel_size());
        let grid = *grid;

        iproduct!(steps.clone(), steps)
            .filter(move |&(x, y)| x.hypot(y) < self.cutoff(x, y, time))
            .map(move |(x, y)| grid.snap(c.offset(x, y)))
    }
}

pub fn global_breath(time: f32) -> f32 {
    (time * GLOBAL_BREATH_RATE).sin() * GLOBAL_BREATH_AMPLITUDE
}

pub fn global_color_shift(time: f32) -> f32 {
    (time * COLOR_SHIFT_RATE).sin() * COLOR_SHIFT_AMPLITUDE
}

/// Adds `shift` to every color channel, saturating at the display range.
pub fn shift_color([r, g, b, a]: Rgba, shift: f32) -> Rgba {
    let shifted = |c: u8| clamp_channel((f32::from(c) + shift).round() as i32);
    [shifted(r), shifted(g), shifted(b), a]
}

/// Offsets inside a disk of `radius` whose edge has been eaten away by noise.
pub fn carve_layer(radius: f32, layer: usize, step: f32, noise: &NoiseField) -> Vec<(f32, f32)> {
    let steps = grid_steps(radius, step);

    iproduct!(steps.clone(), steps)
        .filter(|&(x, y)| {
            let d = x.hypot(y);
            if d > radius {
                return false;
            }
            let n = noise.sample(
                x * NOISE_SCALE,
                y * NOISE_SCALE,
                layer as f32 * NOISE_LAYER_SPACING,
            );
            d <= radius * (EDGE_BASE + n * EDGE_NOISE)
        })
        .collect()
}

pub struct EukaryoteDish {
    bounds: DishBounds,
    layers: Vec<DiffuseLayer>,
    bubbles: Vec<Bubble>,
}

impl EukaryoteDish {
    pub fn new(bounds: DishBounds) -> Self {
        Self {
            bounds,
            layers: Vec::new(),
            bubbles: Vec::new(),
        }
    }

    pub fn layers(&self) -> &[DiffuseLayer] {
        &self.layers
    }

    pub fn bubbles(&self) -> &[Bubble] {
        &self.bubbles
    }

    fn body_radius(&self) -> f32 {
        self.bounds.inner_radius() * BODY_SCALE
    }

    fn build_layers(&self, rng: &mut RandomSource) -> Vec<DiffuseLayer> {
        let body = self.body_radius();
        let center = self.bounds.center;
        let step = self.bounds.grid.pixel_size();

        let noise = rng.noise();
        let carved: Vec<(f32, Vec<(f32, f32)>)> = (0..LAYER_COUNT)
            .into_par_iter()
            .map(|i| {
                let radius = body * (1.0 - i as f32 * LAYER_SHRINK);
                (radius, carve_layer(radius, i, step, noise))
            })
            .collect();

        carved
            .into_iter()
            .enumerate()
            .map(|(i, (radius, offsets))| {
                let points = offsets
                    .into_iter()
                    .map(|(x, y)| LayerPoint {
                        position: center.offset(x, y),
                        offset: rng.range(0.0, 1000.0),
                    })
                    .collect();

                DiffuseLayer {
                    points,
                    color: MEMBRANE.color_at_t(i as f32 / LAYER_COUNT as f32),
                    base_radius: radius,
                    breathing_speed: rng.range(0.006, 0.015),
                    breathing_amp: rng.range(4.0, 10.0),
                }
            })
            .collect()
    }

    fn build_bubbles(&self, rng: &mut RandomSource) -> Vec<Bubble> {
        let body = self.body_radius();

        (0..BUBBLE_COUNT)
            .map(|_| {
                let angle = rng.angle();
                let r = rng.range(0.0, body * BUBBLE_SPREAD);
                Bubble {
                    center: GridPoint::polar(self.bounds.center, angle, r),
                    radius: rng.range(12.0, 24.0),
                    irregularity: rng.range(0.4, 0.9),
                    drift_x: rng.range(0.0, 1000.0),
                    drift_y: rng.range(0.0, 2000.0),
                    move_speed: rng.range(0.002, 0.005),
                    color: [
                        rng.range(180.0, 210.0) as u8,
                        rng.range(140.0, 170.0) as u8,
                        rng.range(200.0, 230.0) as u8,
                        200,
                    ],
                }
            })
            .collect()
    }
}

impl Dish for EukaryoteDish {
    fn name(&self) -> &'static str {
        "eukaryote"
    }

    fn init(&mut self, rng: &mut RandomSource) {
        self.layers = self.build_layers(rng);
        self.bubbles = self.build_bubbles(rng);

        debug!(
            "{}: {} layers ({} points), {} bubbles",
            self.name(),
            self.layers.len(),
            self.layers.iter().map(|l| l.points.len()).sum::<usize>(),
            self.bubbles.len()
        );
    }

    fn render_frame(&mut self, time: f32, _rng: &mut RandomSource, surface: &mut dyn Surface) {
        let grid = self.bounds.grid;
        let center = self.bounds.center;
        self.bounds.draw_outline(surface);

        let shift = global_color_shift(time);
        for layer in &self.layers {
            let color = shift_color(layer.color, shift);
            for p in layer.visible_cells(time, center, &grid) {
                grid.fill_pixel(surface, p, color);
            }
        }

        for bubble in &self.bubbles {
            for p in bubble.cells(time, &grid) {
                grid.fill_pixel(surface, p, bubble.color);
            }
        }
    }
}
