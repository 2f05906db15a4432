/// Platform-independent frame loop state: the clock, the camera and the scene
use crate::backend::{Gpu, Viewport};
use crate::camera::{CameraMatrices, OrbitCamera};
use crate::config::DemoConfig;
use crate::error::Result;
use crate::scene::Scene;
use crate::texture::TextureSet;

/// Accumulates frame deltas into elapsed seconds
#[derive(Debug, Clone, Copy, Default)]
pub struct FrameClock {
    seconds: f64,
}

impl FrameClock {
    /// Add a delta in milliseconds and return the new elapsed time
    pub fn advance(&mut self, dt_ms: f64) -> f32 {
        self.seconds += dt_ms.max(0.0) / 1000.0;
        self.seconds as f32
    }

    pub fn time(&self) -> f32 {
        self.seconds as f32
    }
}

pub struct App<G: Gpu> {
    scene: Scene<G>,
    camera: OrbitCamera,
    clock: FrameClock,
    background: [f32; 4],
}

impl<G: Gpu> App<G> {
    pub fn new(gpu: &mut G, images: &TextureSet<G::Image>, config: &DemoConfig) -> Result<Self> {
        Ok(Self {
            scene: Scene::new(gpu, images, config)?,
            camera: config.camera.clone(),
            clock: FrameClock::default(),
            background: config.background,
        })
    }

    /// Advance by `dt_ms`, clear the frame, orbit the camera and draw the
    /// scene once
    pub fn tick(&mut self, gpu: &mut G, dt_ms: f64, viewport: Viewport) -> CameraMatrices {
        let time = self.clock.advance(dt_ms);

        gpu.begin_frame(viewport, self.background);

        let camera = self.camera.matrices(time, viewport.aspect());
        self.scene.draw(gpu, time, &camera.projection, &camera.view);
        camera
    }

    pub fn time(&self) -> f32 {
        self.clock.time()
    }

    pub fn scene_mut(&mut self) -> &mut Scene<G> {
        &mut self.scene
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{uniform, Call, RecordingGpu};
    use crate::uniforms::UniformValue;
    use approx::assert_relative_eq;

    fn app(gpu: &mut RecordingGpu) -> App<RecordingGpu> {
        let images = TextureSet::from_array(["d", "n", "s"]);
        App::new(gpu, &images, &DemoConfig::default()).unwrap()
    }

    #[test]
    fn test_clock_accumulates_seconds() {
        let mut clock = FrameClock::default();
        clock.advance(16.0);
        clock.advance(500.0);
        assert_relative_eq!(clock.advance(484.0), 1.0);
        assert_relative_eq!(clock.advance(-10.0), 1.0);
    }

    #[test]
    fn test_tick_begins_frame_then_draws() {
        let mut gpu = RecordingGpu::new();
        let mut app = app(&mut gpu);
        gpu.take_calls();

        let viewport = Viewport::new(1920, 1080);
        app.tick(&mut gpu, 16.0, viewport);

        let calls = gpu.take_calls();
        assert_eq!(
            calls[0],
            Call::BeginFrame {
                viewport,
                clear_color: [0.0, 0.0, 0.0, 1.0]
            }
        );
        let draws = calls.iter().filter(|c| matches!(c, Call::Draw { .. })).count();
        assert_eq!(draws, 2);
    }

    #[test]
    fn test_tick_orbits_camera() {
        let mut gpu = RecordingGpu::new();
        let mut app = app(&mut gpu);

        let viewport = Viewport::new(800, 600);
        let mut previous = None;
        for _ in 0..120 {
            let camera = app.tick(&mut gpu, 1000.0 / 60.0, viewport);
            let eye = camera.eye;
            assert_relative_eq!(eye.x * eye.x + eye.z * eye.z, 16.0, epsilon = 1e-3);
            assert_ne!(Some(eye), previous);
            previous = Some(eye);
        }
        assert_relative_eq!(app.time(), 2.0, epsilon = 1e-4);
    }

    #[test]
    fn test_tick_uploads_camera_matrices() {
        let mut gpu = RecordingGpu::new();
        let mut app = app(&mut gpu);
        gpu.take_calls();

        let viewport = Viewport::new(1000, 500);
        let camera = app.tick(&mut gpu, 250.0, viewport);
        let expected = DemoConfig::default().camera.matrices(0.25, 2.0);
        assert_eq!(camera, expected);

        for program in ["phong", "basic"] {
            let values = &gpu.uniforms_for(program)[0];
            assert_eq!(uniform(values, "projection"), Some(UniformValue::Mat4(expected.projection)));
            assert_eq!(uniform(values, "view"), Some(UniformValue::Mat4(expected.view)));
        }
    }

    #[test]
    fn test_flat_shading_through_app() {
        let mut gpu = RecordingGpu::new();
        let mut app = app(&mut gpu);
        app.scene_mut().set_flat_shading(true);
        gpu.take_calls();

        app.tick(&mut gpu, 16.0, Viewport::new(640, 480));
        let values = &gpu.uniforms_for("phong")[0];
        assert_eq!(uniform(values, "flatShading"), Some(UniformValue::Int(1)));
        let light = DemoConfig::default().light_path.position_at(app.time());
        assert_eq!(uniform(values, "light.position"), Some(UniformValue::Vec3(light.coords)));
    }
}
