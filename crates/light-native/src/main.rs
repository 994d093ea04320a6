use glam::DVec2;
use winit::{
    event::{ElementState, Event, KeyEvent, MouseButton, Touch, TouchPhase, WindowEvent},
    event_loop::EventLoop,
    keyboard::{Key, NamedKey},
    window::{Fullscreen, Window, WindowBuilder},
};

use light_core::{
    DragTracker, GestureSample, IdleGuard, IdleInhibitor, LightConfig, Rgb, Session, Surface, View,
};

// Arrow keys act like a drag of this many logical pixels
const KEY_NUDGE_PX: f64 = 30.0;

const USAGE: &str = "screenlight · drag up/down: brightness · drag left/right: warmth · i: close";

struct GpuState<'w> {
    surface: wgpu::Surface<'w>,
    device: wgpu::Device,
    queue: wgpu::Queue,
    config: wgpu::SurfaceConfiguration,
}

impl<'w> GpuState<'w> {
    async fn new(window: &'w Window) -> anyhow::Result<Self> {
        let size = window.inner_size();
        let instance = wgpu::Instance::default();
        let surface = instance.create_surface(window)?;
        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::LowPower,
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await
            .ok_or_else(|| anyhow::anyhow!("No GPU adapter"))?;
        let (device, queue) = adapter
            .request_device(
                &wgpu::DeviceDescriptor {
                    required_features: wgpu::Features::empty(),
                    required_limits: wgpu::Limits::default(),
                    memory_hints: wgpu::MemoryHints::MemoryUsage,
                    label: None,
                },
                None,
            )
            .await?;

        let surface_caps = surface.get_capabilities(&adapter);
        let format = surface_caps
            .formats
            .iter()
            .copied()
            .find(|f| !f.is_srgb())
            .or_else(|| surface_caps.formats.first().copied())
            .ok_or_else(|| anyhow::anyhow!("surface reports no formats"))?;
        let config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format,
            width: size.width.max(1),
            height: size.height.max(1),
            present_mode: wgpu::PresentMode::Fifo,
            alpha_mode: surface_caps.alpha_modes[0],
            desired_maximum_frame_latency: 2,
            view_formats: vec![],
        };
        surface.configure(&device, &config);
        log::info!("[gpu] surface ready ({:?})", format);

        Ok(Self {
            surface,
            device,
            queue,
            config,
        })
    }

    fn resize(&mut self, new_size: winit::dpi::PhysicalSize<u32>) {
        if new_size.width == 0 || new_size.height == 0 {
            return;
        }
        self.config.width = new_size.width;
        self.config.height = new_size.height;
        self.surface.configure(&self.device, &self.config);
    }

    fn render(&mut self, color: Rgb) -> Result<(), wgpu::SurfaceError> {
        let clear = if self.config.format.is_srgb() {
            color.to_linear()
        } else {
            color
        };
        let frame = self.surface.get_current_texture()?;
        let view = frame
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());
        let mut encoder = self
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("encoder"),
            });
        {
            let _rpass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("light_fill"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(wgpu::Color {
                            r: clear.r,
                            g: clear.g,
                            b: clear.b,
                            a: 1.0,
                        }),
                        store: wgpu::StoreOp::Store,
                    },
                })],
                depth_stencil_attachment: None,
                timestamp_writes: None,
                occlusion_query_set: None,
            });
        }
        self.queue.submit(Some(encoder.finish()));
        frame.present();
        Ok(())
    }
}

// ---------------- Session surface ----------------

struct NativeSurface<'w> {
    window: &'w Window,
    gpu: GpuState<'w>,
    color: Rgb,
}

impl Surface for NativeSurface<'_> {
    fn present(&mut self, view: &View) {
        self.color = view.paint.resolve();
        self.window.set_title(&window_title(view));
        self.window.request_redraw();
    }
}

impl NativeSurface<'_> {
    fn redraw(&mut self) -> Result<(), wgpu::SurfaceError> {
        match self.gpu.render(self.color) {
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                self.gpu.resize(self.window.inner_size());
                self.gpu.render(self.color)
            }
            other => other,
        }
    }
}

fn window_title(view: &View) -> String {
    if view.info_visible {
        USAGE.to_string()
    } else {
        format!(
            "screenlight · brightness {}% · warmth {}%",
            view.readout.brightness_percent, view.readout.warmth_percent
        )
    }
}

// ---------------- Idle sleep ----------------

/// winit has no screen-saver inhibition, so the desktop preview keeps the
/// window fullscreen and only tracks the requested state.
#[derive(Default)]
struct PreviewInhibitor {
    disabled: bool,
}

impl IdleInhibitor for PreviewInhibitor {
    fn set_idle_disabled(&mut self, disabled: bool) {
        if self.disabled != disabled {
            self.disabled = disabled;
            log::info!(
                "[idle] screen sleep {}",
                if disabled { "suppression requested" } else { "restored" }
            );
        }
    }
}

// ---------------- Keyboard ----------------

fn nudge_for_key(key: &Key) -> Option<GestureSample> {
    match key {
        Key::Named(NamedKey::ArrowUp) => Some(GestureSample::new(0.0, -KEY_NUDGE_PX)),
        Key::Named(NamedKey::ArrowDown) => Some(GestureSample::new(0.0, KEY_NUDGE_PX)),
        Key::Named(NamedKey::ArrowRight) => Some(GestureSample::new(KEY_NUDGE_PX, 0.0)),
        Key::Named(NamedKey::ArrowLeft) => Some(GestureSample::new(-KEY_NUDGE_PX, 0.0)),
        _ => None,
    }
}

fn toggle_fullscreen(window: &Window) {
    if window.fullscreen().is_some() {
        window.set_fullscreen(None);
    } else {
        window.set_fullscreen(Some(Fullscreen::Borderless(None)));
    }
}

fn load_config() -> LightConfig {
    let query = std::env::args().skip(1).collect::<Vec<_>>().join("&");
    match LightConfig::from_query(&query) {
        Ok(config) => config,
        Err(e) => {
            log::warn!("[config] {}; using defaults", e);
            LightConfig::default()
        }
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::builder()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    let config = load_config();

    let event_loop = EventLoop::new()?;
    let window = WindowBuilder::new()
        .with_title("screenlight")
        .with_fullscreen(Some(Fullscreen::Borderless(None)))
        .build(&event_loop)?;

    let gpu = pollster::block_on(GpuState::new(&window))?;
    let mut session = Session::new(
        config,
        NativeSurface {
            window: &window,
            gpu,
            color: Rgb::WHITE,
        },
    );
    let mut drag = DragTracker::default();
    let mut cursor = DVec2::ZERO;
    let mut active_touch: Option<u64> = None;
    let mut idle = Some(IdleGuard::acquire(PreviewInhibitor::default()));
    let window = &window;

    event_loop.run(move |event, elwt| {
        let Event::WindowEvent { event, .. } = event else {
            return;
        };
        match event {
            WindowEvent::CloseRequested => elwt.exit(),
            WindowEvent::Resized(size) => {
                session.surface_mut().gpu.resize(size);
                session.refresh();
            }
            WindowEvent::RedrawRequested => match session.surface_mut().redraw() {
                Ok(()) => {}
                Err(wgpu::SurfaceError::OutOfMemory) => elwt.exit(),
                Err(e) => log::warn!("[gpu] render failed: {:?}", e),
            },
            WindowEvent::Focused(true) => {
                if idle.is_none() {
                    idle = Some(IdleGuard::acquire(PreviewInhibitor::default()));
                }
            }
            WindowEvent::Focused(false) => {
                idle = None;
                if drag.end() {
                    session.drag_ended();
                }
            }
            WindowEvent::CursorMoved { position, .. } => {
                let logical = position.to_logical::<f64>(window.scale_factor());
                cursor = DVec2::new(logical.x, logical.y);
                if active_touch.is_none() {
                    if let Some(sample) = drag.update(cursor) {
                        session.drag_changed(sample);
                    }
                }
            }
            WindowEvent::MouseInput {
                state,
                button: MouseButton::Left,
                ..
            } => match state {
                ElementState::Pressed => drag.begin(cursor),
                ElementState::Released => {
                    if drag.end() {
                        session.drag_ended();
                    }
                }
            },
            WindowEvent::Touch(Touch {
                phase, location, id, ..
            }) => {
                let logical = location.to_logical::<f64>(window.scale_factor());
                let pos = DVec2::new(logical.x, logical.y);
                match phase {
                    TouchPhase::Started if active_touch.is_none() => {
                        active_touch = Some(id);
                        drag.begin(pos);
                    }
                    TouchPhase::Moved if active_touch == Some(id) => {
                        if let Some(sample) = drag.update(pos) {
                            session.drag_changed(sample);
                        }
                    }
                    TouchPhase::Ended | TouchPhase::Cancelled if active_touch == Some(id) => {
                        active_touch = None;
                        if drag.end() {
                            session.drag_ended();
                        }
                    }
                    _ => {}
                }
            }
            WindowEvent::KeyboardInput {
                event:
                    KeyEvent {
                        logical_key,
                        state: ElementState::Pressed,
                        ..
                    },
                ..
            } => {
                if let Some(sample) = nudge_for_key(&logical_key) {
                    session.drag_changed(sample);
                    return;
                }
                match logical_key {
                    Key::Named(NamedKey::Enter) => toggle_fullscreen(window),
                    Key::Named(NamedKey::Escape) => {
                        if session.info_visible() {
                            session.set_info_visible(false);
                        } else if window.fullscreen().is_some() {
                            window.set_fullscreen(None);
                        } else {
                            elwt.exit();
                        }
                    }
                    Key::Character(ref c) => match c.as_str() {
                        "i" | "I" | "h" | "H" => session.toggle_info(),
                        "f" | "F" => toggle_fullscreen(window),
                        _ => {}
                    },
                    _ => {}
                }
            }
            _ => {}
        }
    })?;

    Ok(())
}
