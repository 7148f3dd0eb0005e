mod viewer;

pub use viewer::ForecastViewer;

use salaryrs_core::PlotSpec;

pub const APP_NAME: &str = "salaryrs";

/// Opens a window showing `spec`. Blocks until the window is closed.
pub fn show(spec: PlotSpec) -> eframe::Result {
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1024.0, 768.0])
            .with_title(spec.title.clone()),
        ..Default::default()
    };
    let app = ForecastViewer::new(spec);
    tracing::debug!("opening plot window");
    eframe::run_native(APP_NAME, options, Box::new(|_cc| Ok(Box::new(app))))
}
