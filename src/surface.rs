use crate::utils::Rgba;

/// Everything a dish needs from the thing it draws on.
pub trait Surface {
    fn clear(&mut self, color: Rgba);

    /// Fills the square `[x, x + size) x [y, y + size)`.
    fn fill_cell(&mut self, x: f32, y: f32, size: f32, color: Rgba);

    /// Outlines the same square with a band `weight` wide, centered on its edge.
    fn stroke_cell(&mut self, x: f32, y: f32, size: f32, weight: f32, color: Rgba);
}

/// An RGBA8 framebuffer with source-over blending. Cells are clipped to the frame.
pub struct Canvas<'a> {
    frame: &'a mut [u8],
    width: usize,
    height: usize,
}

impl<'a> Canvas<'a> {
    pub fn new(frame: &'a mut [u8], width: u32, height: u32) -> Self {
        let (width, height) = (width as usize, height as usize);
        debug_assert_eq!(frame.len(), width * height * 4);

        Self {
            frame,
            width,
            height,
        }
    }

    pub fn pixel(&self, x: usize, y: usize) -> Option<Rgba> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let idx = (y * self.width + x) * 4;
        let px = &self.frame[idx..idx + 4];

        Some([px[0], px[1], px[2], px[3]])
    }

    fn fill_span(&mut self, left: f32, top: f32, right: f32, bottom: f32, color: Rgba) {
        if color[3] == 0 {
            return;
        }

        let x0 = (left.floor().max(0.0) as usize).min(self.width);
        let y0 = (top.floor().max(0.0) as usize).min(self.height);
        let x1 = (right.floor().max(0.0) as usize).min(self.width);
        let y1 = (bottom.floor().max(0.0) as usize).min(self.height);

        for y in y0..y1 {
            let row = y * self.width;
            for x in x0..x1 {
                let idx = (row + x) * 4;
                blend(&mut self.frame[idx..idx + 4], color);
            }
        }
    }
}

fn blend(dst: &mut [u8], [r, g, b, a]: Rgba) {
    if a == 255 {
        dst.copy_from_slice(&[r, g, b, 255]);
        return;
    }

    let alpha = u32::from(a);
    let inv = 255 - alpha;
    for (channel, src) in dst.iter_mut().zip([r, g, b]) {
        *channel = ((u32::from(src) * alpha + u32::from(*channel) * inv + 127) / 255) as u8;
    }
    dst[3] = 255;
}

impl Surface for Canvas<'_> {
    fn clear(&mut self, color: Rgba) {
        for pixel in self.frame.chunks_exact_mut(4) {
            pixel.copy_from_slice(&color);
        }
    }

    fn fill_cell(&mut self, x: f32, y: f32, size: f32, color: Rgba) {
        self.fill_span(x, y, x + size, y + size, color);
    }

    fn stroke_cell(&mut self, x: f32, y: f32, size: f32, weight: f32, color: Rgba) {
        let half = weight / 2.0;
        let (left, top) = (x - half, y - half);
        let (right, bottom) = (x + size + half, y + size + half);

        self.fill_span(left, top, right, top + weight, color);
        self.fill_span(left, bottom - weight, right, bottom, color);
        self.fill_span(left, top + weight, left + weight, bottom - weight, color);
        self.fill_span(right - weight, top + weight, right, bottom - weight, color);
    }
}

#[cfg(test)]
pub(crate) mod testing {
    use super::Surface;
    use crate::utils::Rgba;

    #[derive(Debug, Clone, Copy, PartialEq)]
    pub struct Cell {
        pub x: f32,
        pub y: f32,
        pub color: Rgba,
    }

    /// Records draw calls instead of rasterizing them.
    #[derive(Default)]
    pub struct RecordingSurface {
        pub clears: Vec<Rgba>,
        pub fills: Vec<Cell>,
        pub strokes: Vec<Cell>,
    }

    impl Surface for RecordingSurface {
        fn clear(&mut self, color: Rgba) {
            self.clears.push(color);
            self.fills.clear();
            self.strokes.clear();
        }

        fn fill_cell(&mut self, x: f32, y: f32, _size: f32, color: Rgba) {
            self.fills.push(Cell { x, y, color });
        }

        fn stroke_cell(&mut self, x: f32, y: f32, _size: f32, _weight: f32, color: Rgba) {
            self.strokes.push(Cell { x, y, color });
        }
    }
}
