//! State container for the detail panel: the selected user plus the
//! password-reset and status-toggle action states. Independent of the
//! list state; completions arrive through its own channel and are applied
//! by [`UserDetailState::poll`].

use std::any::Any;
use std::sync::Arc;

use flume::{Receiver, Sender};
use tokio::task::JoinHandle;
use ustr::Ustr;
use userdeck_states::State;

use crate::error::ApiError;
use crate::mock_api::{MockApi, PasswordReset};
use crate::user::{User, UserStatus};

/// Prefix marking a failed password reset in `reset_password_message`.
/// The UI keys success/error styling off this prefix.
pub const RESET_ERROR_PREFIX: &str = "Error: ";

/// Completion of one detail-panel operation.
#[derive(Debug)]
pub enum DetailMessage {
    Detail {
        token: u64,
        result: Result<User, ApiError>,
    },
    PasswordReset {
        result: Result<PasswordReset, ApiError>,
    },
    StatusUpdate {
        result: Result<User, ApiError>,
    },
}

/// State for the user detail panel.
#[derive(Debug)]
pub struct UserDetailState {
    pub selected: Option<User>,
    /// True while a detail fetch is in flight.
    pub loading: bool,
    /// Error message of the last failed detail fetch.
    pub error: Option<String>,
    pub reset_password_loading: bool,
    /// Confirmation message on success, `"Error: ..."` on failure.
    pub reset_password_message: Option<String>,
    pub status_loading: bool,
    pub status_error: Option<String>,

    token: u64,
    tx: Sender<DetailMessage>,
    rx: Receiver<DetailMessage>,
}

impl Default for UserDetailState {
    fn default() -> Self {
        let (tx, rx) = flume::unbounded();
        Self {
            selected: None,
            loading: false,
            error: None,
            reset_password_loading: false,
            reset_password_message: None,
            status_loading: false,
            status_error: None,
            token: 0,
            tx,
            rx,
        }
    }
}

impl State for UserDetailState {
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}

impl UserDetailState {
    pub fn new() -> Self {
        Self::default()
    }

    /// The panel is shown while a user is selected, a fetch for one is in
    /// flight, or the last fetch failed (so the error is visible).
    pub fn is_open(&self) -> bool {
        self.selected.is_some() || self.loading || self.error.is_some()
    }

    /// Marks a detail fetch as started: sets loading, clears the previous
    /// error and reset message, and invalidates earlier fetches.
    pub fn begin_detail_fetch(&mut self) -> (u64, Sender<DetailMessage>) {
        self.loading = true;
        self.error = None;
        self.reset_password_message = None;
        self.status_error = None;
        self.token += 1;
        (self.token, self.tx.clone())
    }

    /// Closes the panel. Clears everything visible and bumps the token so
    /// a still-pending fetch can never repopulate a closed panel.
    pub fn close(&mut self) {
        self.selected = None;
        self.loading = false;
        self.error = None;
        self.reset_password_loading = false;
        self.reset_password_message = None;
        self.status_loading = false;
        self.status_error = None;
        self.token += 1;
    }

    /// Applies every completion received since the last frame.
    ///
    /// Returns the users whose status changed, so the caller can patch
    /// the list without a refetch.
    pub fn poll(&mut self) -> Vec<User> {
        let mut patches = Vec::new();
        let messages: Vec<DetailMessage> = self.rx.try_iter().collect();
        for message in messages {
            match message {
                DetailMessage::Detail { token, result } => {
                    if token != self.token {
                        log::debug!(
                            "Discarding stale detail result (token {} != {})",
                            token,
                            self.token
                        );
                        continue;
                    }
                    self.loading = false;
                    match result {
                        Ok(user) => {
                            self.selected = Some(user);
                            self.error = None;
                        }
                        Err(err) => {
                            self.error = Some(err.to_string());
                            self.selected = None;
                        }
                    }
                }
                DetailMessage::PasswordReset { result } => {
                    self.reset_password_loading = false;
                    self.reset_password_message = Some(match result {
                        Ok(reset) => reset.message,
                        Err(err) => format!("{RESET_ERROR_PREFIX}{err}"),
                    });
                }
                DetailMessage::StatusUpdate { result } => {
                    self.status_loading = false;
                    match result {
                        Ok(user) => {
                            if self.selected.as_ref().is_some_and(|s| s.id == user.id) {
                                self.selected = Some(user.clone());
                            }
                            patches.push(user);
                        }
                        Err(err) => {
                            self.status_error = Some(err.to_string());
                        }
                    }
                }
            }
        }
        patches
    }
}

/// Fetches the detail record for `id`.
pub fn fetch_user_detail(
    api: Arc<MockApi>,
    egui_ctx: egui::Context,
    state: &mut UserDetailState,
    id: Ustr,
) -> JoinHandle<()> {
    let (token, tx) = state.begin_detail_fetch();

    log::info!("fetch_user_detail: id={id}");

    tokio::spawn(async move {
        let result = api.get_user_by_id(id).await;
        if let Err(err) = &result {
            log::error!("fetch_user_detail failed for id={id}: {err}");
        }
        let _ = tx.send(DetailMessage::Detail { token, result });
        egui_ctx.request_repaint();
    })
}

/// Sends the (pretend) password reset email for `id`.
pub fn reset_password(
    api: Arc<MockApi>,
    egui_ctx: egui::Context,
    state: &mut UserDetailState,
    id: Ustr,
) -> JoinHandle<()> {
    state.reset_password_loading = true;
    state.reset_password_message = None;
    let tx = state.tx.clone();

    log::info!("reset_password: id={id}");

    tokio::spawn(async move {
        let result = api.reset_password(id).await;
        if let Err(err) = &result {
            log::error!("reset_password failed for id={id}: {err}");
        }
        let _ = tx.send(DetailMessage::PasswordReset { result });
        egui_ctx.request_repaint();
    })
}

/// Sets the status of `id`. On success the updated record is applied to
/// the selected user and handed back through [`UserDetailState::poll`]
/// for the list patch.
pub fn update_user_status(
    api: Arc<MockApi>,
    egui_ctx: egui::Context,
    state: &mut UserDetailState,
    id: Ustr,
    status: UserStatus,
) -> JoinHandle<()> {
    state.status_loading = true;
    state.status_error = None;
    let tx = state.tx.clone();

    log::info!("update_user_status: id={id} status={status}");

    tokio::spawn(async move {
        let result = api.update_status(id, status).await;
        if let Err(err) = &result {
            log::error!("update_user_status failed for id={id}: {err}");
        }
        let _ = tx.send(DetailMessage::StatusUpdate { result });
        egui_ctx.request_repaint();
    })
}

#[cfg(test)]
mod tests {
    use crate::mock_api::{FailurePolicy, Latency, UserStore};
    use crate::seed;

    use super::*;

    fn deterministic_api() -> Arc<MockApi> {
        Arc::new(MockApi::deterministic(UserStore::seeded()))
    }

    #[tokio::test]
    async fn fetch_detail_selects_the_user() {
        let api = deterministic_api();
        let mut state = UserDetailState::new();

        let handle = fetch_user_detail(api, egui::Context::default(), &mut state, Ustr::from("7"));
        assert!(state.loading);
        assert!(state.is_open());

        handle.await.unwrap();
        let patches = state.poll();

        assert!(patches.is_empty());
        assert!(!state.loading);
        assert_eq!(
            state.selected.as_ref().map(|u| u.name.as_str()),
            Some("Sophia Marchetti")
        );
    }

    #[tokio::test]
    async fn fetch_detail_unknown_id_sets_error_and_no_selection() {
        let api = deterministic_api();
        let mut state = UserDetailState::new();

        fetch_user_detail(api, egui::Context::default(), &mut state, Ustr::from("999"))
            .await
            .unwrap();
        state.poll();

        assert_eq!(state.error.as_deref(), Some("User not found"));
        assert!(state.selected.is_none());
        assert!(state.is_open());
    }

    #[test]
    fn stale_resolution_cannot_repopulate_after_close_and_reopen() {
        let mut state = UserDetailState::new();
        let roster = seed::roster();
        let first = roster[0].clone();
        let second = roster[1].clone();

        let (first_token, first_tx) = state.begin_detail_fetch();
        state.close();
        let (second_token, second_tx) = state.begin_detail_fetch();

        // The first fetch resolves late, after the panel was reopened for
        // a different user.
        second_tx
            .send(DetailMessage::Detail {
                token: second_token,
                result: Ok(second.clone()),
            })
            .unwrap();
        first_tx
            .send(DetailMessage::Detail {
                token: first_token,
                result: Ok(first),
            })
            .unwrap();

        state.poll();

        assert_eq!(state.selected, Some(second));
    }

    #[test]
    fn close_clears_all_visible_state() {
        let mut state = UserDetailState::new();
        state.selected = Some(seed::roster()[0].clone());
        state.error = Some("boom".to_owned());
        state.reset_password_message = Some("sent".to_owned());
        state.status_error = Some("boom".to_owned());

        state.close();

        assert!(!state.is_open());
        assert!(state.selected.is_none());
        assert!(state.error.is_none());
        assert!(state.reset_password_message.is_none());
        assert!(state.status_error.is_none());
    }

    #[tokio::test]
    async fn reset_password_stores_confirmation_message() {
        let api = deterministic_api();
        let mut state = UserDetailState::new();

        let handle = reset_password(api, egui::Context::default(), &mut state, Ustr::from("1"));
        assert!(state.reset_password_loading);

        handle.await.unwrap();
        state.poll();

        assert!(!state.reset_password_loading);
        assert_eq!(
            state.reset_password_message.as_deref(),
            Some("Password reset email sent to ava.chen@userdeck.io")
        );
    }

    #[tokio::test]
    async fn failed_reset_uses_error_prefix_convention() {
        let api = Arc::new(
            MockApi::deterministic(UserStore::seeded())
                .with_failure_policy(FailurePolicy::Always)
                .with_latency(Latency::none()),
        );
        let mut state = UserDetailState::new();

        reset_password(api, egui::Context::default(), &mut state, Ustr::from("1"))
            .await
            .unwrap();
        state.poll();

        let message = state.reset_password_message.expect("message set");
        assert!(message.starts_with(RESET_ERROR_PREFIX));
        assert!(message.contains("Failed to reset password"));
    }

    #[tokio::test]
    async fn status_update_patches_selection_and_reports_for_list() {
        let api = deterministic_api();
        let mut state = UserDetailState::new();

        fetch_user_detail(
            api.clone(),
            egui::Context::default(),
            &mut state,
            Ustr::from("2"),
        )
        .await
        .unwrap();
        state.poll();

        update_user_status(
            api,
            egui::Context::default(),
            &mut state,
            Ustr::from("2"),
            UserStatus::Disabled,
        )
        .await
        .unwrap();
        let patches = state.poll();

        assert_eq!(patches.len(), 1);
        assert_eq!(patches[0].status, UserStatus::Disabled);
        assert_eq!(
            state.selected.as_ref().map(|u| u.status),
            Some(UserStatus::Disabled)
        );
        assert!(state.status_error.is_none());
    }

    #[tokio::test]
    async fn failed_status_update_sets_status_error() {
        let api = Arc::new(
            MockApi::deterministic(UserStore::seeded())
                .with_failure_policy(FailurePolicy::Always)
                .with_latency(Latency::none()),
        );
        let mut state = UserDetailState::new();
        state.selected = Some(seed::roster()[1].clone());

        update_user_status(
            api,
            egui::Context::default(),
            &mut state,
            Ustr::from("2"),
            UserStatus::Disabled,
        )
        .await
        .unwrap();
        let patches = state.poll();

        assert!(patches.is_empty());
        assert_eq!(
            state.status_error.as_deref(),
            Some("Failed to update user status. Please try again.")
        );
    }
}
