use std::ops::{Add, Div, Mul, Range, Sub};

pub fn map_t_of_range_a_to_range_b<T>(t: T, range_a: Range<T>, range_b: Range<T>) -> T
where
    T: Copy + Sub<Output = T> + Div<Output = T> + Add<Output = T> + Mul<Output = T>,
{
    let slope = (range_b.end - range_b.start) / (range_a.end - range_a.start);
    range_b.start + slope * (t - range_a.start)
}

pub fn distance(x1: f32, y1: f32, x2: f32, y2: f32) -> f32 {
    (x2 - x1).hypot(y2 - y1)
}

/// Clamps an integer channel computation back into displayable range.
pub fn clamp_channel(value: i32) -> u8 {
    value.clamp(0, 255) as u8
}

pub trait Interpolate {
    fn interpolate(&self, other: &Self, t: f32) -> Self;
}

pub type Rgba = [u8; 4];

impl Interpolate for Rgba {
    fn interpolate(&self, other: &Self, t: f32) -> Self {
        let [r1, g1, b1, a1] = self;
        let [r2, g2, b2, a2] = other;

        [
            r1.interpolate(r2, t),
            g1.interpolate(g2, t),
            b1.interpolate(b2, t),
            a1.interpolate(a2, t),
        ]
    }
}

impl Interpolate for u8 {
    fn interpolate(&self, other: &Self, t: f32) -> u8 {
        if self == other {
            *self
        } else {
            (f32::from(*self) * (1.0 - t) + f32::from(*other) * t) as u8
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_map_range() {
        assert_eq!(255.0, map_t_of_range_a_to_range_b(0.0, 0.0..10.0, 255.0..30.0));
        assert_eq!(142.5, map_t_of_range_a_to_range_b(5.0, 0.0..10.0, 255.0..30.0));
        assert_eq!(30.0, map_t_of_range_a_to_range_b(10.0, 0.0..10.0, 255.0..30.0));
    }

    #[test]
    fn test_interpolate_rgba() {
        let a: Rgba = [0, 100, 200, 255];
        let b: Rgba = [100, 100, 0, 55];

        assert_eq!(a, a.interpolate(&b, 0.0));
        assert_eq!([50, 100, 100, 155], a.interpolate(&b, 0.5));
        assert_eq!(b, a.interpolate(&b, 1.0));
    }

    #[test]
    fn test_clamp_channel() {
        assert_eq!(0, clamp_channel(-12));
        assert_eq!(128, clamp_channel(128));
        assert_eq!(255, clamp_channel(300));
    }

    #[test]
    fn test_distance() {
        assert_eq!(5.0, distance(0.0, 0.0, 3.0, 4.0));
        assert_eq!(0.0, distance(480.0, 300.0, 480.0, 300.0));
    }
}
