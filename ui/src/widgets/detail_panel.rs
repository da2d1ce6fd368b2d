use egui::{Color32, RichText};
use ustr::Ustr;
use userdeck_business::{RESET_ERROR_PREFIX, User, UserDetailState, UserStatus};

use super::status_badge;

/// Intent reported by the detail panel this frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DetailAction {
    /// Close button, backdrop click, or Escape.
    Close,
    ResetPassword(Ustr),
    ToggleStatus(Ustr, UserStatus),
}

/// Modal detail panel. Call only while [`UserDetailState::is_open`]; the
/// modal dims the backdrop and consumes input behind it.
pub fn detail_panel(ctx: &egui::Context, detail: &UserDetailState) -> Option<DetailAction> {
    let mut action = None;

    let modal = egui::Modal::new(egui::Id::new("user_detail_modal")).show(ctx, |ui| {
        ui.set_width(380.0);

        ui.horizontal(|ui| {
            ui.heading("User Details");
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                if ui.button("Close").clicked() {
                    action = Some(DetailAction::Close);
                }
            });
        });
        ui.separator();

        if detail.loading {
            ui.horizontal(|ui| {
                ui.spinner();
                ui.label("Loading user details...");
            });
            return;
        }

        if let Some(error) = &detail.error {
            ui.colored_label(Color32::from_rgb(153, 27, 27), error);
            return;
        }

        let Some(user) = &detail.selected else {
            return;
        };

        user_summary(ui, user);
        ui.add_space(8.0);
        user_info_grid(ui, user);
        ui.separator();

        // Password reset
        ui.horizontal(|ui| {
            let button = ui.add_enabled(
                !detail.reset_password_loading,
                egui::Button::new("Reset Password"),
            );
            if button.clicked() {
                action = Some(DetailAction::ResetPassword(user.id));
            }
            if detail.reset_password_loading {
                ui.spinner();
            }
        });
        if let Some(message) = &detail.reset_password_message {
            let color = if message.starts_with(RESET_ERROR_PREFIX) {
                Color32::from_rgb(153, 27, 27)
            } else {
                Color32::from_rgb(22, 101, 52)
            };
            ui.colored_label(color, message);
        }

        ui.add_space(4.0);

        // Status toggle
        let toggle_text = match user.status {
            UserStatus::Active => "Disable User",
            UserStatus::Disabled => "Enable User",
        };
        ui.horizontal(|ui| {
            let button = ui.add_enabled(!detail.status_loading, egui::Button::new(toggle_text));
            if button.clicked() {
                action = Some(DetailAction::ToggleStatus(user.id, user.status.toggled()));
            }
            if detail.status_loading {
                ui.spinner();
            }
        });
        if let Some(error) = &detail.status_error {
            ui.colored_label(Color32::from_rgb(153, 27, 27), error);
        }
    });

    if modal.should_close() {
        action = Some(DetailAction::Close);
    }

    action
}

fn user_summary(ui: &mut egui::Ui, user: &User) {
    ui.horizontal(|ui| {
        ui.label(RichText::new(user.initials()).heading().strong());
        ui.vertical(|ui| {
            ui.label(RichText::new(&user.name).strong());
            ui.label(&user.email);
        });
        status_badge(ui, user.status);
    });
}

fn user_info_grid(ui: &mut egui::Ui, user: &User) {
    egui::Grid::new("user_info")
        .num_columns(2)
        .spacing([24.0, 4.0])
        .show(ui, |ui| {
            ui.label(RichText::new("Role").strong());
            ui.label(&user.role);
            ui.end_row();

            ui.label(RichText::new("Department").strong());
            ui.label(&user.department);
            ui.end_row();

            if let Some(phone) = &user.phone {
                ui.label(RichText::new("Phone").strong());
                ui.label(phone);
                ui.end_row();
            }

            ui.label(RichText::new("Last Login").strong());
            ui.label(user.last_login.format("%b %d, %Y %H:%M").to_string());
            ui.end_row();

            ui.label(RichText::new("Created").strong());
            ui.label(user.created_at.format("%b %d, %Y").to_string());
            ui.end_row();
        });
}
