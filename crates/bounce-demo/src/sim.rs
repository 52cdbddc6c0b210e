use bounce_engine::color::SpeedColorMapper;
use bounce_engine::core::{App, AppControl, FrameCtx};
use bounce_engine::math::{Mat4, Rgba};
use bounce_engine::physics::{Body, BodyParams, Extents};
use bounce_engine::render::{ParticleRenderer, ShaderSource};

/// Frames between title refreshes.
const TITLE_EVERY: u64 = 30;

/// One bouncing particle.
pub struct BounceApp {
    title: String,
    body: Body,
    params: BodyParams,
    mapper: SpeedColorMapper,
    renderer: ParticleRenderer,
    clear: Rgba,
}

impl BounceApp {
    pub fn new(
        title: String,
        body: Body,
        params: BodyParams,
        mapper: SpeedColorMapper,
        shader: ShaderSource,
        clear: Rgba,
    ) -> Self {
        Self {
            title,
            body,
            params,
            mapper,
            renderer: ParticleRenderer::new(shader),
            clear,
        }
    }

    /// Advances the body one frame inside a `width` x `height` framebuffer.
    ///
    /// A 0x0 framebuffer (minimized window) has no walls to bounce off, so the
    /// step is skipped and `None` returned.
    fn step(&mut self, width: u32, height: u32, dt: f32) -> Option<Extents> {
        if width == 0 || height == 0 {
            return None;
        }

        let extents = Extents::from_viewport(width, height, self.params.half_extent_px);
        let hit = self.body.advance(&self.params, extents, dt);
        if !hit.is_empty() {
            log::trace!(
                "bounce {:?} at {:?}, v = {:?}",
                hit.iter().map(|e| e.name()).collect::<Vec<_>>(),
                self.body.position,
                self.body.velocity
            );
        }
        Some(extents)
    }
}

impl App for BounceApp {
    fn on_frame(&mut self, ctx: &mut FrameCtx<'_, '_>) -> AppControl {
        let size = ctx.framebuffer_size();

        // ── Simulate ──────────────────────────────────────────────────────
        let Some(extents) = self.step(size.width, size.height, ctx.time.dt) else {
            return AppControl::Continue;
        };

        let speed = self.body.velocity.length();
        if ctx.time.frame_index % TITLE_EVERY == 0 {
            ctx.runtime.set_title(format!("{}  |  speed {speed:.2}", self.title));
        }

        // ── Render ────────────────────────────────────────────────────────
        let color = self.mapper.color_for(self.body.velocity);
        let model = Mat4::translation(self.body.position) * Mat4::scaling(extents.scale());

        let renderer = &mut self.renderer;
        ctx.render(self.clear, |rctx, target| {
            renderer.draw(rctx, target, &model, color);
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bounce_engine::math::Vec3;
    use bounce_engine::physics::Bounds;

    fn app(position: Vec3, velocity: Vec3) -> BounceApp {
        BounceApp::new(
            "test".to_string(),
            Body::new(position, velocity),
            BodyParams {
                bounds: Bounds::all(),
                ..BodyParams::default()
            },
            SpeedColorMapper::default(),
            ShaderSource::builtin(),
            Rgba::black(),
        )
    }

    // ── minimized window ──────────────────────────────────────────────────

    #[test]
    fn zero_sized_framebuffer_leaves_body_untouched() {
        let start = Body::new(Vec3::new(0.5, -0.5, 0.0), Vec3::new(1.0, 0.0, 0.0));
        let mut a = app(start.position, start.velocity);

        for (w, h) in [(0, 0), (0, 480), (640, 0)] {
            assert!(a.step(w, h, 0.016).is_none(), "{w}x{h}");
            assert_eq!(a.body, start, "{w}x{h}");
        }
    }

    #[test]
    fn restored_framebuffer_resumes_stepping() {
        let mut a = app(Vec3::new(0.5, -0.5, 0.0), Vec3::new(1.0, 0.0, 0.0));
        assert!(a.step(0, 0, 0.016).is_none());

        let extents = a.step(640, 480, 0.016).expect("drawable framebuffer steps");
        assert_eq!(extents, Extents::from_viewport(640, 480, 6.0));
        assert!((a.body.position.x - 0.516).abs() < 1e-5, "{:?}", a.body);
        assert!(a.body.velocity.y < 0.0);
    }

    #[test]
    fn wall_hit_reflects_inside_real_framebuffer() {
        let mut a = app(Vec3::new(0.97, 0.0, 0.0), Vec3::new(3.0, 0.0, 0.0));
        let extents = a.step(640, 480, 0.1).expect("drawable framebuffer steps");
        assert_eq!(a.body.position.x, extents.right());
        assert!(a.body.velocity.x < 0.0);
    }
}
