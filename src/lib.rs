pub mod config;
pub mod dish;
pub mod frame_clock;
pub mod gallery;
pub mod gradient;
pub mod palettes;
pub mod pixel_grid;
pub mod random;
pub mod surface;
pub mod utils;

// Re-export commonly used items
pub use config::GalleryConfig;
pub use dish::Dish;
pub use frame_clock::FrameClock;
pub use gallery::Gallery;
pub use pixel_grid::{GridPoint, PixelGrid};
pub use random::RandomSource;
pub use surface::{Canvas, Surface};
