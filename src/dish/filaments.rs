use super::{Dish, DishBounds};
use crate::palettes::FILAMENT_WARM;
use crate::pixel_grid::GridPoint;
use crate::random::RandomSource;
use crate::surface::Surface;
use crate::utils::{Rgba, clamp_channel, map_t_of_range_a_to_range_b};
use log::debug;

const CELL_COUNT: usize = 40;
const SEED_MIN: f32 = 0.15;
const SEED_MAX: f32 = 0.85;
const BRANCHES: (f32, f32) = (4.0, 7.0);
const BRANCH_STEPS: (f32, f32) = (25.0, 60.0);
const MAX_TURN: f32 = 0.35;
const ALPHA_RANGE: (f32, f32) = (160.0, 220.0);

const TIP_FRACTION: f32 = 0.6;
const WOBBLE_RATE: f32 = 0.05;
const WOBBLE_SPREAD: f32 = 0.3;
const MICRO_BRANCH_CHANCE: f32 = 0.04;
const MICRO_BRANCH_BOOST: i32 = 25;
const MICRO_BRANCH_ALPHA_BOOST: f32 = 30.0;

pub type Branch = Vec<GridPoint>;

#[derive(Debug, Clone, PartialEq)]
pub struct FilamentCell {
    pub branches: Vec<Branch>,
    pub color: Rgba,
}

/// Walks `steps` pixels from `origin`, turning a little after every step.
/// Stops at the first step that would leave `bounds`.
pub fn grow_branch(
    origin: GridPoint,
    heading: f32,
    steps: usize,
    bounds: &DishBounds,
    rng: &mut RandomSource,
) -> Branch {
    let step = bounds.grid.pixel_size();
    let limit = bounds.inner_radius();
    let mut angle = heading;
    let mut p = origin;
    let mut points = Vec::with_capacity(steps);

    for _ in 0..steps {
        p = p.offset(angle.cos() * step, angle.sin() * step);
        angle += rng.range(-MAX_TURN, MAX_TURN);

        if p.distance_to(bounds.center) > limit {
            break;
        }
        points.push(p);
    }

    points
}

impl FilamentCell {
    pub fn generate(origin: GridPoint, bounds: &DishBounds, rng: &mut RandomSource) -> Self {
        let branch_count = rng.range(BRANCHES.0, BRANCHES.1) as usize;
        let branches = (0..branch_count)
            .map(|_| {
                let steps = rng.range(BRANCH_STEPS.0, BRANCH_STEPS.1) as usize;
                let heading = rng.angle();
                grow_branch(origin, heading, steps, bounds, rng)
            })
            .collect();

        let [r, g, b] = rng.choose(&FILAMENT_WARM).unwrap_or(FILAMENT_WARM[0]);
        let alpha = rng.range(ALPHA_RANGE.0, ALPHA_RANGE.1) as u8;

        Self {
            branches,
            color: [r, g, b, alpha],
        }
    }
}

/// Color of point `i` on a branch of `len` points: fading toward the tip,
/// warmer past the first 60%.
pub fn point_color(base: Rgba, i: usize, len: usize) -> Rgba {
    let fade = map_t_of_range_a_to_range_b(i as f32, 0.0..len as f32, 255.0..120.0);
    let [r, g, b, _] = base.map(i32::from);

    let (r, g, b) = if i as f32 > len as f32 * TIP_FRACTION {
        ((r + 20).min(255), (g - 20).min(200), b - 10)
    } else {
        (r, g, b)
    };

    [
        clamp_channel(r),
        clamp_channel(g),
        clamp_channel(b),
        clamp_channel(fade as i32),
    ]
}

fn micro_branch_color([r, g, b, a]: Rgba) -> Rgba {
    [
        clamp_channel(i32::from(r) + MICRO_BRANCH_BOOST),
        clamp_channel(i32::from(g) + MICRO_BRANCH_BOOST),
        clamp_channel(i32::from(b) + MICRO_BRANCH_BOOST),
        clamp_channel((f32::from(a) + MICRO_BRANCH_ALPHA_BOOST) as i32),
    ]
}

pub struct FilamentDish {
    bounds: DishBounds,
    cells: Vec<FilamentCell>,
}

impl FilamentDish {
    pub fn new(bounds: DishBounds) -> Self {
        Self {
            bounds,
            cells: Vec::new(),
        }
    }

    pub fn cells(&self) -> &[FilamentCell] {
        &self.cells
    }
}

impl Dish for FilamentDish {
    fn name(&self) -> &'static str {
        "filaments"
    }

    fn init(&mut self, rng: &mut RandomSource) {
        let bounds = self.bounds;
        let radius = bounds.inner_radius();

        self.cells = (0..CELL_COUNT)
            .map(|_| {
                let angle = rng.angle();
                let r = rng.range(radius * SEED_MIN, radius * SEED_MAX);
                let origin = bounds.grid.snap(GridPoint::polar(bounds.center, angle, r));
                FilamentCell::generate(origin, &bounds, rng)
            })
            .collect();

        debug!(
            "{}: {} cells, {} points",
            self.name(),
            self.cells.len(),
            self.cells
                .iter()
                .flat_map(|c| &c.branches)
                .map(Vec::len)
                .sum::<usize>()
        );
    }

    fn render_frame(&mut self, time: f32, rng: &mut RandomSource, surface: &mut dyn Surface) {
        let grid = self.bounds.grid;
        let step = grid.pixel_size();
        let limit = self.bounds.inner_radius();
        self.bounds.draw_outline(surface);

        for cell in &self.cells {
            for branch in &cell.branches {
                for (i, p) in branch.iter().enumerate() {
                    let color = point_color(cell.color, i, branch.len());

                    let phase = time * WOBBLE_RATE + i as f32 * WOBBLE_SPREAD;
                    let wobbled = p.offset(phase.sin() * step, phase.cos() * step);
                    grid.fill_pixel(surface, grid.snap(wobbled), color);

                    if rng.chance(MICRO_BRANCH_CHANCE) {
                        let kx = rng.choose(&[-1.0, 0.0, 1.0]).unwrap_or(0.0);
                        let ky = rng.choose(&[-1.0, 0.0, 1.0]).unwrap_or(0.0);
                        let twig = p.offset(kx * step, ky * step);

                        if twig.distance_to(self.bounds.center) <= limit {
                            grid.fill_pixel(surface, grid.snap(twig), micro_branch_color(color));
                        }
                    }
                }
            }
        }
    }
}
