use egui::{Color32, Response, RichText, Ui};
use userdeck_business::UserStatus;

/// Colored pill showing an account status.
pub fn status_badge(ui: &mut Ui, status: UserStatus) -> Response {
    let (text_color, fill) = match status {
        UserStatus::Active => (
            Color32::from_rgb(22, 101, 52),
            Color32::from_rgb(220, 252, 231),
        ),
        UserStatus::Disabled => (
            Color32::from_rgb(153, 27, 27),
            Color32::from_rgb(254, 226, 226),
        ),
    };

    egui::Frame::new()
        .fill(fill)
        .inner_margin(egui::Margin::symmetric(8, 2))
        .corner_radius(8.0)
        .show(ui, |ui| {
            ui.label(RichText::new(status.as_str()).color(text_color).small());
        })
        .response
}

#[cfg(test)]
mod status_badge_test {
    use egui_kittest::Harness;
    use kittest::Queryable;
    use userdeck_business::UserStatus;

    #[test]
    fn shows_the_status_text() {
        let mut harness = Harness::new_ui(|ui| {
            super::status_badge(ui, UserStatus::Active);
            super::status_badge(ui, UserStatus::Disabled);
        });
        harness.run();

        assert!(harness.query_by_label("active").is_some());
        assert!(harness.query_by_label("disabled").is_some());
    }
}
