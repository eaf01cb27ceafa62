use anyhow::Result;
use cell_gallery::{Canvas, FrameClock, Gallery, GalleryConfig, RandomSource};
use log::{debug, error, info};
use pixels::{Pixels, SurfaceTexture};
use std::time::Instant;
use winit::dpi::LogicalSize;
use winit::event::{ElementState, Event, MouseButton, WindowEvent};
use winit::event_loop::{ControlFlow, EventLoop};
use winit::keyboard::KeyCode;
use winit::window::{Fullscreen, Window, WindowBuilder};
use winit_input_helper::WinitInputHelper;

const FPS_REPORT_FRAMES: u64 = 100;

fn main() -> Result<()> {
    env_logger::init();

    let config = GalleryConfig::from_env();
    let rng = match config.seed {
        Some(seed) => RandomSource::seeded(seed),
        None => RandomSource::from_entropy(),
    };
    info!(
        "Cell gallery {}x{} at {} FPS, pixel size {}, seed {}",
        config.width,
        config.height,
        config.frame_rate,
        config.pixel_size,
        rng.seed()
    );

    let event_loop = EventLoop::new()?;
    let mut input = WinitInputHelper::new();
    let window = {
        let size = LogicalSize::new(config.width as f64, config.height as f64);
        WindowBuilder::new()
            .with_title("Cell Gallery")
            .with_inner_size(size)
            .build(&event_loop)?
    };

    let mut pixels = {
        let window_size = window.inner_size();
        let surface_texture = SurfaceTexture::new(window_size.width, window_size.height, &window);
        Pixels::new(config.width, config.height, surface_texture)?
    };

    let mut gallery = Gallery::new(&config, rng);
    let mut clock = FrameClock::new(config.frame_rate, Instant::now());
    let mut frame_due = false;

    event_loop.run(|event, elwt| {
        match &event {
            Event::WindowEvent {
                event: WindowEvent::RedrawRequested,
                ..
            } => {
                if frame_due {
                    let mut canvas = Canvas::new(pixels.frame_mut(), config.width, config.height);
                    gallery.render_frame(&mut canvas);
                    frame_due = false;

                    if gallery.frame() % FPS_REPORT_FRAMES == 0 {
                        if let Some(fps) = clock.fps() {
                            debug!("FPS: {:.1}", fps);
                        }
                    }
                }

                if let Err(err) = pixels.render() {
                    error!("pixels.render() failed: {}", err);
                    elwt.exit();
                    return;
                }
            }
            Event::WindowEvent {
                event:
                    WindowEvent::MouseInput {
                        state: ElementState::Pressed,
                        button: MouseButton::Left,
                        ..
                    },
                ..
            } => toggle_fullscreen(&window),
            _ => (),
        }

        if input.update(&event) {
            if input.key_pressed(KeyCode::Escape) || input.close_requested() {
                elwt.exit();
                return;
            }

            if input.key_pressed(KeyCode::KeyR) {
                info!("Re-initializing dishes");
                gallery.init();
            }

            if let Some(size) = input.window_resized() {
                if let Err(err) = pixels.resize_surface(size.width, size.height) {
                    error!("pixels.resize_surface() failed: {}", err);
                    elwt.exit();
                    return;
                }
            }

            if clock.tick(Instant::now()) {
                frame_due = true;
                window.request_redraw();
            }
            elwt.set_control_flow(ControlFlow::WaitUntil(clock.next_tick()));
        }
    })?;

    Ok(())
}

fn toggle_fullscreen(window: &Window) {
    if window.fullscreen().is_some() {
        window.set_fullscreen(None);
    } else {
        window.set_fullscreen(Some(Fullscreen::Borderless(None)));
    }
}
