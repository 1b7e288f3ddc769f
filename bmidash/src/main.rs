//! BmiDash - animated BMI dashboard
//!
//! Computes BMI from weight and height, then charts the session history and
//! shows where the latest value falls on the category meter.

mod app;
mod state;

use app::BmiDashApp;
use bmicore::DashConfig;
use eframe::NativeOptions;

fn main() -> eframe::Result<()> {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    let config = DashConfig::load();
    log::info!("bmidash {} starting", env!("CARGO_PKG_VERSION"));

    let options = NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([950.0, 420.0])
            .with_min_inner_size([820.0, 400.0])
            .with_title("Animated BMI Dashboard"),
        ..Default::default()
    };

    eframe::run_native(
        "bmidash",
        options,
        Box::new(move |cc| {
            bmicore::DashTheme::default().apply(&cc.egui_ctx);
            Box::new(BmiDashApp::new(cc, config))
        }),
    )
}
