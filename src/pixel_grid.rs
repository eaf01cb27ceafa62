use crate::palettes::DISH_EDGE;
use crate::surface::Surface;
use crate::utils::{Rgba, distance};
use itertools::iproduct;

const DISH_STROKE_WEIGHT: f32 = 2.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridPoint {
    pub x: f32,
    pub y: f32,
}

impl GridPoint {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    pub fn polar(center: GridPoint, angle: f32, r: f32) -> Self {
        Self::new(center.x + angle.cos() * r, center.y + angle.sin() * r)
    }

    pub fn distance_to(&self, other: GridPoint) -> f32 {
        distance(self.x, self.y, other.x, other.y)
    }

    pub fn offset(&self, dx: f32, dy: f32) -> Self {
        Self::new(self.x + dx, self.y + dy)
    }
}

/// `-half_extent, -half_extent + step, ...` up to and including `half_extent` when it lands on a step.
pub fn grid_steps(half_extent: f32, step: f32) -> impl Iterator<Item = f32> + Clone {
    let count = if half_extent >= 0.0 {
        (2.0 * half_extent / step).floor() as i32
    } else {
        -1
    };

    (0..=count).map(move |k| -half_extent + k as f32 * step)
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PixelGrid {
    pixel_size: f32,
}

impl PixelGrid {
    pub fn new(pixel_size: f32) -> Self {
        debug_assert!(pixel_size > 0.0);
        Self { pixel_size }
    }

    pub fn pixel_size(&self) -> f32 {
        self.pixel_size
    }

    pub fn quantize(&self, v: f32) -> f32 {
        (v / self.pixel_size).floor() * self.pixel_size
    }

    pub fn snap(&self, p: GridPoint) -> GridPoint {
        GridPoint::new(self.quantize(p.x), self.quantize(p.y))
    }

    /// Offsets from the center of every cell inside a disk of `diameter`,
    /// optionally limited to `max_radius`.
    pub fn circle_offsets(
        &self,
        diameter: f32,
        max_radius: Option<f32>,
    ) -> impl Iterator<Item = (f32, f32)> {
        let r = diameter / 2.0;
        let steps = grid_steps(r, self.pixel_size);

        iproduct!(steps.clone(), steps).filter(move |&(x, y)| {
            x * x + y * y <= r * r && max_radius.is_none_or(|max| x.hypot(y) <= max)
        })
    }

    pub fn fill_pixel(&self, surface: &mut dyn Surface, p: GridPoint, color: Rgba) {
        surface.fill_cell(p.x, p.y, self.pixel_size, color);
    }

    pub fn draw_pixel_circle(
        &self,
        surface: &mut dyn Surface,
        center: GridPoint,
        diameter: f32,
        max_radius: Option<f32>,
        color: Rgba,
    ) {
        for (x, y) in self.circle_offsets(diameter, max_radius) {
            self.fill_pixel(surface, self.snap(center.offset(x, y)), color);
        }
    }

    /// The petri-dish boundary: the disk's cells outlined, never filled.
    pub fn draw_pixel_dish(&self, surface: &mut dyn Surface, center: GridPoint, radius: f32) {
        for (x, y) in self.circle_offsets(radius * 2.0, None) {
            let cell = self.snap(center.offset(x, y));
            surface.stroke_cell(
                cell.x,
                cell.y,
                self.pixel_size,
                DISH_STROKE_WEIGHT,
                DISH_EDGE,
            );
        }
    }
}
