mod app;

use app::MyApp;
use jaspresso::{AppConfig, Store};

fn main() -> eframe::Result<()> {
    env_logger::init();

    let config = AppConfig::from_env();

    let store = match Store::open(&config.db_path) {
        Ok(store) => store,
        Err(e) => {
            log::error!(
                "Failed to open {}: {}. Progress will not be kept this session.",
                config.db_path.display(),
                e
            );
            Store::open_in_memory().expect("Failed to initialize in-memory database")
        }
    };

    let font = config.font_path.as_ref().and_then(|path| {
        std::fs::read(path)
            .inspect_err(|e| log::warn!("Could not read font {}: {}", path.display(), e))
            .ok()
    });

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default().with_inner_size([900.0, 720.0]),
        ..Default::default()
    };
    eframe::run_native(
        "Jaspresso",
        options,
        Box::new(move |cc| {
            if let Some(bytes) = font {
                app::install_cjk_font(&cc.egui_ctx, bytes);
            }
            Ok(Box::new(MyApp::new(store)))
        }),
    )
}
