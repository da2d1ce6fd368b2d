use chrono::{DateTime, Utc};
use egui::{Color32, RichText, Ui};
use ustr::Ustr;
use userdeck_business::UserListState;

use super::status_badge;

/// Intent reported by the table this frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TableAction {
    /// A row was clicked; open the detail panel for this user.
    Select(Ustr),
    /// The error banner's Retry button was clicked.
    Retry,
}

/// The users table: error banner, loading spinner, empty label, or one
/// clickable row per user in response order.
pub fn users_table(ui: &mut Ui, list: &UserListState, now: DateTime<Utc>) -> Option<TableAction> {
    let mut action = None;

    if let Some(error) = &list.error {
        egui::Frame::new()
            .fill(Color32::from_rgb(254, 226, 226))
            .inner_margin(egui::Margin::symmetric(10, 6))
            .corner_radius(4.0)
            .show(ui, |ui| {
                ui.horizontal(|ui| {
                    ui.colored_label(Color32::from_rgb(153, 27, 27), error);
                    if ui.button("Retry").clicked() {
                        action = Some(TableAction::Retry);
                    }
                });
            });
        ui.add_space(6.0);
    }

    if list.loading {
        ui.horizontal(|ui| {
            ui.spinner();
            ui.label("Loading users...");
        });
        return action;
    }

    if list.users.is_empty() {
        ui.label(RichText::new("No users found").italics());
        return action;
    }

    egui::Grid::new("users_table")
        .num_columns(6)
        .striped(true)
        .min_col_width(90.0)
        .show(ui, |ui| {
            for title in ["Name", "Email", "Role", "Department", "Status", "Last Login"] {
                ui.label(RichText::new(title).strong());
            }
            ui.end_row();

            for user in &list.users {
                if ui.selectable_label(false, &user.name).clicked() {
                    action = Some(TableAction::Select(user.id));
                }
                ui.label(&user.email);
                ui.label(&user.role);
                ui.label(&user.department);
                status_badge(ui, user.status);
                ui.label(last_login_text(now, user.last_login));
                ui.end_row();
            }
        });

    action
}

/// Relative wording for recent logins, absolute date otherwise.
fn last_login_text(now: DateTime<Utc>, at: DateTime<Utc>) -> String {
    match (now - at).num_days() {
        0 => "Today".to_owned(),
        1 => "Yesterday".to_owned(),
        days @ 2..=30 => format!("{days} days ago"),
        _ => at.format("%Y-%m-%d").to_string(),
    }
}

#[cfg(test)]
mod users_table_test {
    use chrono::{Duration, Utc};
    use egui_kittest::Harness;
    use kittest::Queryable;
    use userdeck_business::{UserListState, roster};

    use super::last_login_text;

    fn harness_with(list: UserListState) -> Harness<'static, UserListState> {
        Harness::new_ui_state(
            |ui, list| {
                super::users_table(ui, list, Utc::now());
            },
            list,
        )
    }

    #[test]
    fn shows_one_row_per_user() {
        let mut list = UserListState::new();
        list.users = roster().into_iter().take(3).collect();

        let mut harness = harness_with(list);
        harness.run();

        assert!(harness.query_by_label("Ava Chen").is_some());
        assert!(harness.query_by_label("liam.okafor@userdeck.io").is_some());
        assert!(harness.query_by_label("Mia Lindqvist").is_some());
    }

    #[test]
    fn loading_replaces_rows_with_a_spinner() {
        let mut list = UserListState::new();
        list.users = roster();
        list.loading = true;

        let mut harness = harness_with(list);
        // The spinner repaints every frame, so `run()` would panic; step a
        // fixed number of frames instead.
        harness.run_steps(2);

        assert!(harness.query_by_label("Loading users...").is_some());
        assert!(harness.query_by_label("Ava Chen").is_none());
    }

    #[test]
    fn empty_result_shows_a_placeholder() {
        let mut harness = harness_with(UserListState::new());
        harness.run();

        assert!(harness.query_by_label("No users found").is_some());
    }

    #[test]
    fn error_banner_offers_retry_above_previous_rows() {
        let mut list = UserListState::new();
        list.users = roster().into_iter().take(1).collect();
        list.error = Some("Failed to fetch users. Please try again.".to_owned());

        let mut harness = harness_with(list);
        harness.run();

        assert!(
            harness
                .query_by_label("Failed to fetch users. Please try again.")
                .is_some()
        );
        assert!(harness.query_by_label("Retry").is_some());
        // Previously fetched rows stay visible behind the banner.
        assert!(harness.query_by_label("Ava Chen").is_some());
    }

    #[test]
    fn last_login_wording() {
        let now = Utc::now();

        assert_eq!(last_login_text(now, now), "Today");
        assert_eq!(last_login_text(now, now - Duration::days(1)), "Yesterday");
        assert_eq!(last_login_text(now, now - Duration::days(12)), "12 days ago");

        let old = now - Duration::days(90);
        assert_eq!(last_login_text(now, old), old.format("%Y-%m-%d").to_string());
    }
}
