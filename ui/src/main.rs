#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

use userdeck_ui::UserdeckApp;
use userdeck_ui::state::State;

mod alloc {
    #[global_allocator]
    static MALLOC: mimalloc::MiMalloc = mimalloc::MiMalloc;
}

fn main() -> eframe::Result {
    // Log to stderr (if you run with `RUST_LOG=debug`).
    env_logger::Builder::from_env(env_logger::Env::default()).init();

    // Async commands spawn onto this runtime; the UI thread stays inside
    // its context for the lifetime of the event loop.
    let runtime = tokio::runtime::Runtime::new().expect("Failed to start tokio runtime");
    let _guard = runtime.enter();

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1080.0, 720.0])
            .with_min_inner_size([800.0, 520.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Userdeck",
        native_options,
        Box::new(|cc| {
            let state = State::default();
            Ok(Box::new(UserdeckApp::new(state, &cc.egui_ctx)))
        }),
    )
}
