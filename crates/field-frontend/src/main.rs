//! Field Dashboard native entry point

#[cfg(not(target_arch = "wasm32"))]
fn main() -> eframe::Result<()> {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "field_frontend=debug,field_transport=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting Field Dashboard");

    // Field laptops often lack a GPU driver; flat 2D drawing runs fine on GL with WebGL2 limits
    let wgpu_options = egui_wgpu::WgpuConfiguration {
        wgpu_setup: egui_wgpu::WgpuSetup::CreateNew {
            supported_backends: wgpu::Backends::GL,
            power_preference: wgpu::PowerPreference::LowPower,
            device_descriptor: std::sync::Arc::new(|_adapter| wgpu::DeviceDescriptor {
                label: Some("field-dashboard device"),
                required_features: wgpu::Features::empty(),
                required_limits: wgpu::Limits::downlevel_webgl2_defaults(),
                memory_hints: wgpu::MemoryHints::default(),
            }),
        },
        ..Default::default()
    };

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1280.0, 760.0])
            .with_min_inner_size([480.0, 360.0])
            .with_title("Field Dashboard"),
        wgpu_options,
        ..Default::default()
    };

    eframe::run_native(
        "field-dashboard",
        native_options,
        Box::new(|cc| Ok(Box::new(field_frontend::FieldApp::new(cc)))),
    )
}

// The browser build starts from `field_frontend::start` instead.
#[cfg(target_arch = "wasm32")]
fn main() {}
