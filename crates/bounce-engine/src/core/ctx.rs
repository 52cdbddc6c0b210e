use winit::dpi::PhysicalSize;
use winit::window::{Window, WindowId};

use crate::device::Gpu;
use crate::math::Rgba;
use crate::render::{RenderCtx, RenderTarget};
use crate::time::FrameTime;
use crate::window::RuntimeCtx;

use super::app::AppControl;

/// Window handle and metadata for the current frame.
pub struct WindowCtx<'a> {
    pub id: WindowId,
    pub window: &'a Window,
}

/// Per-frame context passed to `core::App::on_frame`.
///
/// Lifetimes:
/// - `'a` is the duration of the callback invocation
/// - `'w` is the window-borrow lifetime carried by `Gpu<'w>`
pub struct FrameCtx<'a, 'w> {
    pub window: WindowCtx<'a>,
    pub gpu: &'a mut Gpu<'w>,
    pub time: FrameTime,
    pub runtime: &'a mut RuntimeCtx,
}

impl<'a, 'w> FrameCtx<'a, 'w> {
    /// Framebuffer size in physical pixels; the basis for NDC extents.
    #[inline]
    pub fn framebuffer_size(&self) -> PhysicalSize<u32> {
        self.gpu.size()
    }

    /// Clears the surface to `clear`, runs `draw`, and presents.
    ///
    /// Surface errors are handled here. A fatal one is handed to the runtime as
    /// the run's error and returns `Exit`.
    pub fn render<F>(&mut self, clear: Rgba, draw: F) -> AppControl
    where
        F: FnOnce(&RenderCtx<'_>, &mut RenderTarget<'_>),
    {
        if !self.gpu.is_drawable() {
            return AppControl::Continue;
        }

        let mut frame = match self.gpu.begin_frame() {
            Ok(f) => f,
            Err(err) => {
                return match self.gpu.handle_surface_error(err).into_fatal() {
                    Some(fatal) => {
                        self.runtime.fail(fatal);
                        AppControl::Exit
                    }
                    None => AppControl::Continue,
                };
            }
        };

        frame.clear(clear);

        {
            let rctx = RenderCtx::from_gpu(self.gpu);
            let mut target = RenderTarget::from_frame(&mut frame);
            draw(&rctx, &mut target);
        }

        self.window.window.pre_present_notify();
        self.gpu.submit(frame);

        AppControl::Continue
    }
}
