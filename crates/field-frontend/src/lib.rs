//! Field Dashboard Frontend
//!
//! egui application showing the live robot pose on the field schematic and
//! publishing operator-selected targets over rosbridge.

mod app;
mod clock;
pub mod config;
pub mod endpoint;
pub mod interaction;
pub mod painter;
mod panels;
pub mod pose_feed;
pub mod scheduler;
pub mod session;
pub mod state;

pub use app::FieldApp;
pub use session::DashboardSession;
pub use state::DashboardState;

/// Id of the canvas element the web build mounts on
#[cfg(target_arch = "wasm32")]
const CANVAS_ID: &str = "field_canvas";

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    use wasm_bindgen::JsCast;

    eframe::WebLogger::init(log::LevelFilter::Debug).ok();

    wasm_bindgen_futures::spawn_local(async {
        let Some(document) = web_sys::window().and_then(|w| w.document()) else {
            log::error!("No document to mount the dashboard on");
            return;
        };
        let Some(canvas) = document
            .get_element_by_id(CANVAS_ID)
            .and_then(|e| e.dyn_into::<web_sys::HtmlCanvasElement>().ok())
        else {
            log::error!("Canvas element #{} not found", CANVAS_ID);
            return;
        };

        let result = eframe::WebRunner::new()
            .start(
                canvas,
                eframe::WebOptions::default(),
                Box::new(|cc| Ok(Box::new(FieldApp::new(cc)))),
            )
            .await;
        if let Err(e) = result {
            log::error!("Failed to start field dashboard: {:?}", e);
        }
    });
}
