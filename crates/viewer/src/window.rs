// File: crates/viewer/src/window.rs
// Summary: On-screen display surface; re-renders the chart to RGBA on every redraw and blits it via softbuffer.

use std::num::NonZeroU32;

use chart_core::{Chart, RenderOptions};
use ring_bench::{DisplaySurface, Error};
use tracing::{debug, error};
use winit::dpi::LogicalSize;
use winit::event::{ElementState, Event, KeyboardInput, VirtualKeyCode, WindowEvent};
use winit::event_loop::{ControlFlow, EventLoop};
use winit::window::WindowBuilder;

/// Opens a window the size of the figure and keeps it up until it is closed.
/// `show` owns the thread for the lifetime of the window and exits the process when it closes.
#[derive(Debug, Default)]
pub struct WindowSurface;

impl WindowSurface {
    pub fn new() -> Self { Self }
}

impl DisplaySurface for WindowSurface {
    fn show(&mut self, chart: &Chart, options: &RenderOptions) -> ring_bench::Result<()> {
        let event_loop = EventLoop::new();
        let window = WindowBuilder::new()
            .with_title(chart.title.as_str())
            .with_inner_size(LogicalSize::new(options.width as f64, options.height as f64))
            .build(&event_loop)
            .map_err(|e| Error::display(e.to_string()))?;

        let context = unsafe { softbuffer::Context::new(&window) }.map_err(|e| Error::display(e.to_string()))?;
        let mut surface =
            unsafe { softbuffer::Surface::new(&context, &window) }.map_err(|e| Error::display(e.to_string()))?;

        let chart = chart.clone();
        let base = options.clone();

        event_loop.run(move |event, _, cf| {
            // keep the softbuffer context alive as long as the loop
            let _ = &context;
            *cf = ControlFlow::Wait;
            match event {
                Event::WindowEvent { event, .. } => match event {
                    WindowEvent::CloseRequested
                    | WindowEvent::KeyboardInput {
                        input:
                            KeyboardInput {
                                state: ElementState::Pressed,
                                virtual_keycode: Some(VirtualKeyCode::Escape),
                                ..
                            },
                        ..
                    } => {
                        *cf = ControlFlow::Exit;
                    }
                    WindowEvent::Resized(_) => window.request_redraw(),
                    _ => {}
                },
                Event::RedrawRequested(_) => {
                    let size = window.inner_size();
                    let (Some(w), Some(h)) = (NonZeroU32::new(size.width), NonZeroU32::new(size.height)) else {
                        return; // minimized
                    };
                    let mut opts = base.clone();
                    opts.width = w.get() as i32;
                    opts.height = h.get() as i32;
                    if let Err(e) = present(&mut surface, &chart, &opts, w, h) {
                        error!("failed to present chart: {e}");
                        *cf = ControlFlow::ExitWithCode(1);
                    }
                }
                _ => {}
            }
        })
    }
}

fn present(
    surface: &mut softbuffer::Surface,
    chart: &Chart,
    opts: &RenderOptions,
    w: NonZeroU32,
    h: NonZeroU32,
) -> Result<(), Error> {
    surface.resize(w, h).map_err(|e| Error::display(e.to_string()))?;
    let (rgba, _, _, _) = chart.render_to_rgba8(opts)?;

    let mut frame = surface.buffer_mut().map_err(|e| Error::display(e.to_string()))?;
    // softbuffer pixels are 0RGB in a u32
    for (dst, px) in frame.iter_mut().zip(rgba.chunks_exact(4)) {
        let (r, g, b) = (px[0] as u32, px[1] as u32, px[2] as u32);
        *dst = (r << 16) | (g << 8) | b;
    }
    frame.present().map_err(|e| Error::display(e.to_string()))?;
    debug!(width = opts.width, height = opts.height, "presented frame");
    Ok(())
}
