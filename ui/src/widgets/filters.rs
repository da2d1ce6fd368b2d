use egui::Ui;
use userdeck_business::{StatusFilter, UserFilters};

/// Search field plus status dropdown.
///
/// Mutates `filters` in place and returns true when either input changed
/// this frame, so the caller can refetch from page 1.
pub fn user_filters(ui: &mut Ui, filters: &mut UserFilters) -> bool {
    let mut changed = false;

    ui.horizontal(|ui| {
        let search = egui::TextEdit::singleline(&mut filters.search)
            .hint_text("Search by name or email...")
            .desired_width(260.0);
        if ui.add(search).changed() {
            changed = true;
        }

        egui::ComboBox::from_id_salt("status_filter")
            .selected_text(filters.status.label())
            .show_ui(ui, |ui| {
                for option in [
                    StatusFilter::All,
                    StatusFilter::Active,
                    StatusFilter::Disabled,
                ] {
                    if ui
                        .selectable_value(&mut filters.status, option, option.label())
                        .changed()
                    {
                        changed = true;
                    }
                }
            });
    });

    changed
}
