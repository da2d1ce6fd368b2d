use egui::{Color32, Response, Ui};
use userdeck_utils::version_info;

/// Version label for the top bar, e.g. `v0.1.0 (2026-08-23)`.
pub fn env_version(ui: &mut Ui) -> Response {
    ui.colored_label(
        Color32::from_rgb(200, 200, 200),
        version_info::format_version(),
    )
}
