use chrono::{DateTime, Utc};
use userdeck_business::{
    UserDetailState, UserListState, apply_filters, fetch_user_detail, fetch_users, refresh_users,
    reset_password, update_user_status,
};
use userdeck_states::Time;

use crate::state::State;
use crate::widgets;
use crate::widgets::{DetailAction, TableAction};

pub struct UserdeckApp {
    state: State,
}

impl UserdeckApp {
    /// Called once before the first frame. Dispatches the initial page-1
    /// fetch so the table starts loading immediately.
    pub fn new(mut state: State, egui_ctx: &egui::Context) -> Self {
        let api = state.api.clone();
        let list = state.ctx.state_mut::<UserListState>();
        fetch_users(api, egui_ctx.clone(), list, 1);

        Self { state }
    }

    pub fn state(&self) -> &State {
        &self.state
    }

    pub fn state_mut(&mut self) -> &mut State {
        &mut self.state
    }
}

impl eframe::App for UserdeckApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Apply async completions before drawing this frame. Status changes
        // confirmed by the detail panel patch the list in place.
        let patches = self.state.ctx.state_mut::<UserDetailState>().poll();
        {
            let list = self.state.ctx.state_mut::<UserListState>();
            list.poll();
            for user in &patches {
                list.replace_user(user);
            }
        }

        let api = self.state.api.clone();
        let now: DateTime<Utc> = *self.state.ctx.state_ref::<Time>().as_ref();

        egui::TopBottomPanel::top("top_panel").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.heading("Userdeck");
                let total = self.state.ctx.state_ref::<UserListState>().pagination.total;
                ui.label(format!("{total} users"));
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    widgets::env_version(ui);
                });
            });
        });

        let mut filters_changed = false;
        let mut table_action = None;
        let mut goto_page = None;

        egui::CentralPanel::default().show(ctx, |ui| {
            let list = self.state.ctx.state_mut::<UserListState>();

            filters_changed = widgets::user_filters(ui, &mut list.filters);
            ui.add_space(8.0);
            table_action = widgets::users_table(ui, list, now);
            ui.add_space(8.0);
            goto_page = widgets::pagination(ui, &list.pagination);
        });

        if filters_changed {
            let list = self.state.ctx.state_mut::<UserListState>();
            let filters = list.filters.clone();
            apply_filters(api.clone(), ctx.clone(), list, filters);
        }
        if let Some(page) = goto_page {
            let list = self.state.ctx.state_mut::<UserListState>();
            fetch_users(api.clone(), ctx.clone(), list, page);
        }
        match table_action {
            Some(TableAction::Select(id)) => {
                let detail = self.state.ctx.state_mut::<UserDetailState>();
                fetch_user_detail(api.clone(), ctx.clone(), detail, id);
            }
            Some(TableAction::Retry) => {
                let list = self.state.ctx.state_mut::<UserListState>();
                refresh_users(api.clone(), ctx.clone(), list);
            }
            None => {}
        }

        let detail_action = {
            let detail = self.state.ctx.state_ref::<UserDetailState>();
            if detail.is_open() {
                widgets::detail_panel(ctx, detail)
            } else {
                None
            }
        };
        match detail_action {
            Some(DetailAction::Close) => {
                self.state.ctx.state_mut::<UserDetailState>().close();
            }
            Some(DetailAction::ResetPassword(id)) => {
                let detail = self.state.ctx.state_mut::<UserDetailState>();
                reset_password(api.clone(), ctx.clone(), detail, id);
            }
            Some(DetailAction::ToggleStatus(id, status)) => {
                let detail = self.state.ctx.state_mut::<UserDetailState>();
                update_user_status(api, ctx.clone(), detail, id, status);
            }
            None => {}
        }
    }
}
