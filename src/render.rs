use light_core::Rgb;
use wasm_bindgen::JsCast;
use web_sys as web;

// ===================== Canvas painter =====================

/// Fills the canvas with a single color, through WebGPU when the browser has
/// it and through a 2D context otherwise.
pub enum Painter {
    Gpu(GpuState),
    Canvas2d(web::CanvasRenderingContext2d),
    Unavailable,
}

impl Painter {
    pub async fn new(canvas: &web::HtmlCanvasElement) -> Self {
        // GpuState::new leaves the canvas untouched unless it succeeds, so a 2D
        // context is still available after a failed WebGPU init
        if has_webgpu() {
            match GpuState::new(canvas).await {
                Ok(gpu) => {
                    log::info!("[gpu] WebGPU painter ready ({:?})", gpu.config.format);
                    return Painter::Gpu(gpu);
                }
                Err(e) => log::warn!("[gpu] WebGPU init failed: {:?}", e),
            }
        }
        match context_2d(canvas) {
            Some(ctx) => {
                log::info!("[gpu] using 2D canvas painter");
                Painter::Canvas2d(ctx)
            }
            None => {
                log::error!("[gpu] no drawing context available");
                Painter::Unavailable
            }
        }
    }

    pub fn paint(&mut self, canvas: &web::HtmlCanvasElement, color: Rgb) {
        match self {
            Painter::Gpu(gpu) => {
                gpu.resize_if_needed(canvas.width(), canvas.height());
                match gpu.render(color) {
                    Ok(()) => {}
                    Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                        gpu.reconfigure();
                        if let Err(e) = gpu.render(color) {
                            log::warn!("[gpu] render after reconfigure failed: {:?}", e);
                        }
                    }
                    Err(e) => log::warn!("[gpu] render failed: {:?}", e),
                }
            }
            Painter::Canvas2d(ctx) => {
                ctx.set_fill_style_str(&color.to_css());
                ctx.fill_rect(0.0, 0.0, canvas.width() as f64, canvas.height() as f64);
            }
            Painter::Unavailable => {}
        }
    }
}

fn has_webgpu() -> bool {
    web::window()
        .map(|w| js_sys::Reflect::has(&w.navigator(), &"gpu".into()).unwrap_or(false))
        .unwrap_or(false)
}

fn context_2d(canvas: &web::HtmlCanvasElement) -> Option<web::CanvasRenderingContext2d> {
    canvas
        .get_context("2d")
        .ok()
        .flatten()
        .and_then(|ctx| ctx.dyn_into::<web::CanvasRenderingContext2d>().ok())
}

// ===================== WebGPU state =====================

pub struct GpuState {
    surface: wgpu::Surface<'static>,
    device: wgpu::Device,
    queue: wgpu::Queue,
    config: wgpu::SurfaceConfiguration,
}

impl GpuState {
    pub async fn new(canvas: &web::HtmlCanvasElement) -> anyhow::Result<Self> {
        let width = canvas.width().max(1);
        let height = canvas.height().max(1);

        let instance = wgpu::Instance::default();
        // The surface claims the canvas's "webgpu" context, which rules out a 2D
        // context afterwards; create it only once an adapter and device exist
        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                // A flat fill needs no discrete GPU
                power_preference: wgpu::PowerPreference::LowPower,
                compatible_surface: None,
                force_fallback_adapter: false,
            })
            .await
            .ok_or_else(|| anyhow::anyhow!("No WebGPU adapter"))?;
        let (device, queue) = adapter
            .request_device(
                &wgpu::DeviceDescriptor {
                    required_features: wgpu::Features::empty(),
                    // Use default limits on web to avoid passing unknown fields to older WebGPU impls
                    required_limits: wgpu::Limits::default(),
                    memory_hints: wgpu::MemoryHints::MemoryUsage,
                    label: None,
                },
                None,
            )
            .await
            .map_err(|e| anyhow::anyhow!(format!("request_device error: {:?}", e)))?;
        let surface = instance.create_surface(wgpu::SurfaceTarget::Canvas(canvas.clone()))?;
        let caps = surface.get_capabilities(&adapter);
        // Colors are sRGB encoded already; prefer a format that stores them as-is
        let format = caps
            .formats
            .iter()
            .copied()
            .find(|f| !f.is_srgb())
            .or_else(|| caps.formats.first().copied())
            .ok_or_else(|| anyhow::anyhow!("surface reports no formats"))?;
        let config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format,
            width,
            height,
            present_mode: wgpu::PresentMode::Fifo,
            alpha_mode: caps.alpha_modes[0],
            view_formats: vec![],
            desired_maximum_frame_latency: 2,
        };
        surface.configure(&device, &config);

        Ok(Self {
            surface,
            device,
            queue,
            config,
        })
    }

    pub fn resize_if_needed(&mut self, width: u32, height: u32) {
        if width == 0 || height == 0 {
            return;
        }
        if width == self.config.width && height == self.config.height {
            return;
        }
        self.config.width = width;
        self.config.height = height;
        self.reconfigure();
    }

    pub fn reconfigure(&mut self) {
        self.surface.configure(&self.device, &self.config);
    }

    pub fn render(&mut self, color: Rgb) -> Result<(), wgpu::SurfaceError> {
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
                label: Some("light_encoder"),
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
