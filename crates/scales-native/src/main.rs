use scales_core::{
    animation, layout, Clock, ContainerBounds, PointerState, Scene, SceneOptions, Theme,
    ThemeBridge,
};
use scales_render::{Renderer, SurfaceRecovery};
use winit::{
    dpi::PhysicalSize,
    event::*,
    event_loop::EventLoop,
    keyboard::Key,
    window::{Window, WindowBuilder},
};

// Stand-ins for the page background the web canvas is composited over
const LIGHT_BACKGROUND: wgpu::Color = wgpu::Color {
    r: 0.973,
    g: 0.976,
    b: 0.98,
    a: 1.0,
};
const DARK_BACKGROUND: wgpu::Color = wgpu::Color {
    r: 0.129,
    g: 0.145,
    b: 0.161,
    a: 1.0,
};

struct Preview<'w> {
    window: &'w Window,
    renderer: Renderer<'w>,
    scene: Scene,
    theme: ThemeBridge,
    pointer: PointerState,
    clock: Clock,
}

impl<'w> Preview<'w> {
    fn set_theme(&mut self, name: &str) {
        let chosen = self
            .theme
            .set_theme(&mut self.scene.materials, name, self.clock.elapsed_secs());
        self.renderer.set_clear_color(match chosen {
            Theme::Light => LIGHT_BACKGROUND,
            Theme::Dark => DARK_BACKGROUND,
        });
    }

    fn toggle_theme(&mut self) {
        let next = self.theme.theme().unwrap_or(Theme::Light).toggled();
        log::info!("[theme] {}", next.as_str());
        self.set_theme(next.as_str());
    }

    fn resize(&mut self, size: PhysicalSize<u32>) {
        let scale = self.window.scale_factor() as f32;
        let bounds = ContainerBounds::new(size.width as f32 / scale, size.height as f32 / scale);
        let outcome = layout::on_resize(&mut self.scene, bounds, scale);
        log::debug!("[layout] {:?}", outcome.mode);
        self.renderer.resize_if_needed(size.width, size.height);
    }

    fn pointer_moved(&mut self, x: f64, y: f64) {
        let size = self.window.inner_size();
        self.pointer =
            PointerState::from_client(x as f32, y as f32, size.width as f32, size.height as f32);
    }

    fn frame(&mut self) -> Result<(), wgpu::SurfaceError> {
        let now = self.clock.elapsed_secs();
        self.theme.update(&mut self.scene.materials, now);
        animation::tick(&mut self.scene, self.pointer, now);
        self.renderer.render(&self.scene)
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::builder()
        .filter_level(log::LevelFilter::Info)
        .init();

    let initial_theme = std::env::args().nth(1).unwrap_or_else(|| "light".to_string());

    let event_loop = EventLoop::new()?;
    let window = WindowBuilder::new()
        .with_title("Scales (native preview)")
        .with_inner_size(PhysicalSize::new(1280, 720))
        .build(&event_loop)?;

    let size = window.inner_size();
    let instance = wgpu::Instance::default();
    let surface = instance.create_surface(&window)?;
    let scene = Scene::new(&SceneOptions::default());
    let renderer = pollster::block_on(Renderer::new(
        &instance,
        surface,
        size.width,
        size.height,
        scene.particles.positions(),
    ))?;

    let mut preview = Preview {
        window: &window,
        renderer,
        scene,
        theme: ThemeBridge::new(),
        pointer: PointerState::default(),
        clock: Clock::start(),
    };
    preview.set_theme(&initial_theme);
    preview.resize(size);
    log::info!("press 't' to toggle the theme");

    event_loop.run(move |event, elwt| match event {
        Event::WindowEvent {
            event: WindowEvent::Resized(size),
            ..
        } => preview.resize(size),
        Event::WindowEvent {
            event: WindowEvent::CursorMoved { position, .. },
            ..
        } => preview.pointer_moved(position.x, position.y),
        Event::WindowEvent {
            event:
                WindowEvent::KeyboardInput {
                    event:
                        KeyEvent {
                            logical_key: Key::Character(ref c),
                            state: ElementState::Pressed,
                            repeat: false,
                            ..
                        },
                    ..
                },
            ..
        } if c.as_str().eq_ignore_ascii_case("t") => preview.toggle_theme(),
        Event::WindowEvent {
            event: WindowEvent::CloseRequested,
            ..
        } => elwt.exit(),
        Event::AboutToWait => match preview.frame() {
            Ok(_) => preview.window.request_redraw(),
            Err(e) => match SurfaceRecovery::for_error(&e) {
                SurfaceRecovery::Reconfigure => preview.renderer.reconfigure(),
                SurfaceRecovery::Skip => log::warn!("render error: {:?}", e),
                SurfaceRecovery::Stop => {
                    log::error!("render error: {:?}; exiting", e);
                    elwt.exit()
                }
            },
        },
        _ => {}
    })?;
    Ok(())
}
