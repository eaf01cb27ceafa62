use super::{Dish, DishBounds};
use crate::palettes::AMOEBA_TRAIL;
use crate::pixel_grid::GridPoint;
use crate::random::RandomSource;
use crate::surface::Surface;
use crate::utils::{Rgba, map_t_of_range_a_to_range_b};
use circular_queue::CircularQueue;
use log::debug;

const WALKER_COUNT: usize = 25;
const SPAWN_SPREAD: f32 = 60.0;
pub const TRAIL_LENGTH: usize = 200;
const TRAIL_ALPHA_HEAD: f32 = 255.0;
const TRAIL_ALPHA_TAIL: f32 = 30.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Direction {
    East,
    West,
    South,
    North,
}

impl Direction {
    const ALL: [Direction; 4] = [
        Direction::East,
        Direction::West,
        Direction::South,
        Direction::North,
    ];

    fn delta(self, step: f32) -> (f32, f32) {
        match self {
            Direction::East => (step, 0.0),
            Direction::West => (-step, 0.0),
            Direction::South => (0.0, step),
            Direction::North => (0.0, -step),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum StepOutcome {
    Moved,
    Recentered,
}

pub struct Walker {
    pub position: GridPoint,
    trail: CircularQueue<GridPoint>,
    pub color: Rgba,
}

impl Walker {
    pub fn new(position: GridPoint, color: Rgba) -> Self {
        Self {
            position,
            trail: CircularQueue::with_capacity(TRAIL_LENGTH),
            color,
        }
    }

    /// Newest first.
    pub fn trail(&self) -> impl Iterator<Item = &GridPoint> {
        self.trail.iter()
    }

    pub fn trail_len(&self) -> usize {
        self.trail.len()
    }

    /// Moves one pixel in `direction`; a walker that leaves the dish starts over at its center.
    pub fn step(&mut self, direction: Direction, bounds: &DishBounds) -> StepOutcome {
        let (dx, dy) = direction.delta(bounds.grid.pixel_size());
        self.position = self.position.offset(dx, dy);

        let outcome = if self.position.distance_to(bounds.center) > bounds.inner_radius() {
            self.position = bounds.grid.snap(bounds.center);
            StepOutcome::Recentered
        } else {
            StepOutcome::Moved
        };

        self.trail.push(self.position);
        outcome
    }

    fn draw(&self, bounds: &DishBounds, surface: &mut dyn Surface) {
        let len = self.trail.len() as f32;
        let [r, g, b, _] = self.color;

        for (i, p) in self.trail.iter().enumerate() {
            let alpha =
                map_t_of_range_a_to_range_b(i as f32, 0.0..len, TRAIL_ALPHA_HEAD..TRAIL_ALPHA_TAIL);
            bounds.grid.fill_pixel(surface, *p, [r, g, b, alpha as u8]);
        }
    }
}

pub struct AmoebaDish {
    bounds: DishBounds,
    walkers: Vec<Walker>,
}

impl AmoebaDish {
    pub fn new(bounds: DishBounds) -> Self {
        Self {
            bounds,
            walkers: Vec::new(),
        }
    }

    pub fn walkers(&self) -> &[Walker] {
        &self.walkers
    }
}

impl Dish for AmoebaDish {
    fn name(&self) -> &'static str {
        "amoebas"
    }

    fn init(&mut self, rng: &mut RandomSource) {
        let DishBounds { grid, center, .. } = self.bounds;

        self.walkers = (0..WALKER_COUNT)
            .map(|_| {
                let x = center.x + rng.range(-SPAWN_SPREAD, SPAWN_SPREAD);
                let y = center.y + rng.range(-SPAWN_SPREAD, SPAWN_SPREAD);
                Walker::new(grid.snap(GridPoint::new(x, y)), AMOEBA_TRAIL)
            })
            .collect();

        debug!("{}: {} walkers", self.name(), self.walkers.len());
    }

    fn render_frame(&mut self, _time: f32, rng: &mut RandomSource, surface: &mut dyn Surface) {
        self.bounds.draw_outline(surface);

        for walker in &mut self.walkers {
            let direction = rng.choose(&Direction::ALL).unwrap_or(Direction::East);
            walker.step(direction, &self.bounds);
            walker.draw(&self.bounds, surface);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dish::test_bounds;
    use crate::surface::testing::RecordingSurface;

    #[test]
    fn test_reset_threshold() {
        let bounds = test_bounds(480.0, 300.0);
        let mut walker = Walker::new(GridPoint::new(480.0 + 138.0, 300.0), AMOEBA_TRAIL);

        assert_eq!(StepOutcome::Moved, walker.step(Direction::East, &bounds));
        assert_eq!(142.0, walker.position.distance_to(bounds.center));

        assert_eq!(StepOutcome::Recentered, walker.step(Direction::East, &bounds));
        assert_eq!(0.0, walker.position.distance_to(bounds.center));
    }

    #[test]
    fn test_steps_move_one_axis_by_one_pixel() {
        let bounds = test_bounds(480.0, 300.0);
        let mut rng = RandomSource::seeded(11);
        let mut walker = Walker::new(bounds.center, AMOEBA_TRAIL);

        for _ in 0..5000 {
            let before = walker.position;
            let direction = rng.choose(&Direction::ALL).unwrap();
            match walker.step(direction, &bounds) {
                StepOutcome::Moved => {
                    let dx = (walker.position.x - before.x).abs();
                    let dy = (walker.position.y - before.y).abs();
                    assert!((dx == 4.0 && dy == 0.0) || (dx == 0.0 && dy == 4.0));
                }
                StepOutcome::Recentered => {
                    assert_eq!(0.0, walker.position.distance_to(bounds.center));
                }
            }
        }
    }

    #[test]
    fn test_trail_is_bounded_and_newest_first() {
        let bounds = test_bounds(480.0, 300.0);
        let mut walker = Walker::new(bounds.center, AMOEBA_TRAIL);

        for i in 0..450 {
            let direction = if i % 2 == 0 { Direction::South } else { Direction::North };
            walker.step(direction, &bounds);
            assert!(walker.trail_len() <= TRAIL_LENGTH);
        }
        assert_eq!(TRAIL_LENGTH, walker.trail_len());
        assert_eq!(Some(&walker.position), walker.trail().next());
    }

    #[test]
    fn test_trail_fades_toward_tail() {
        let bounds = test_bounds(480.0, 300.0);
        let mut walker = Walker::new(bounds.center, AMOEBA_TRAIL);
        for _ in 0..10 {
            walker.step(Direction::East, &bounds);
        }

        let mut surface = RecordingSurface::default();
        walker.draw(&bounds, &mut surface);

        let alphas: Vec<u8> = surface.fills.iter().map(|c| c.color[3]).collect();
        assert_eq!(10, alphas.len());
        assert_eq!(255, alphas[0]);
        assert!(alphas.windows(2).all(|w| w[0] > w[1]));
        assert!(alphas[9] > 30);
    }

    #[test]
    fn test_init_replaces_walkers() {
        let mut rng = RandomSource::seeded(5);
        let mut dish = AmoebaDish::new(test_bounds(480.0, 300.0));
        dish.init(&mut rng);

        let mut surface = RecordingSurface::default();
        for t in 0..30 {
            dish.render_frame(t as f32, &mut rng, &mut surface);
        }
        assert!(dish.walkers().iter().all(|w| w.trail_len() == 30));

        dish.init(&mut rng);
        assert_eq!(WALKER_COUNT, dish.walkers().len());
        assert!(dish.walkers().iter().all(|w| w.trail_len() == 0));
    }

    #[test]
    fn test_walkers_spawn_on_grid_near_center() {
        let mut rng = RandomSource::seeded(8);
        let mut dish = AmoebaDish::new(test_bounds(480.0, 300.0));
        dish.init(&mut rng);

        for walker in dish.walkers() {
            assert_eq!(0.0, walker.position.x % 4.0);
            assert_eq!(0.0, walker.position.y % 4.0);
            assert!((walker.position.x - 480.0).abs() <= 64.0);
            assert!((walker.position.y - 300.0).abs() <= 64.0);
        }
    }
}
