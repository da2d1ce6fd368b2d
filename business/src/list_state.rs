//! State container for the paginated, filtered user list.
//!
//! Fetching is a side effect: commands spawn a tokio task that awaits the
//! mock API and posts a [`ListMessage`] back through a channel. The UI
//! thread applies results by calling [`UserListState::poll`] once per
//! frame. Every fetch carries a monotonically increasing token; `poll`
//! discards results whose token is not the latest issued, so overlapping
//! fetches resolve last-issued-wins instead of last-resolved-wins.

use std::any::Any;
use std::sync::Arc;

use flume::{Receiver, Sender};
use tokio::task::JoinHandle;
use userdeck_states::State;

use crate::error::ApiError;
use crate::mock_api::MockApi;
use crate::user::{PaginatedResponse, User, UserFilters};

/// Rows per page unless configured otherwise.
pub const DEFAULT_PAGE_LIMIT: u32 = 10;

/// Pagination bookkeeping derived from the last successful response.
/// Authoritative until the next fetch resolves.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    pub page: u32,
    pub limit: u32,
    pub total: usize,
    pub total_pages: u32,
}

impl Default for Pagination {
    fn default() -> Self {
        Self {
            page: 1,
            limit: DEFAULT_PAGE_LIMIT,
            total: 0,
            total_pages: 0,
        }
    }
}

/// Completion of one list fetch.
#[derive(Debug)]
pub struct ListMessage {
    pub token: u64,
    pub result: Result<PaginatedResponse<User>, ApiError>,
}

/// State for the users table: current page of users, request state, and
/// the active filters.
#[derive(Debug)]
pub struct UserListState {
    /// The current page's users, in store order.
    pub users: Vec<User>,
    /// True while any list fetch is in flight.
    pub loading: bool,
    /// Error message of the last failed fetch, cleared on the next fetch.
    pub error: Option<String>,
    pub pagination: Pagination,
    pub filters: UserFilters,

    token: u64,
    tx: Sender<ListMessage>,
    rx: Receiver<ListMessage>,
}

impl Default for UserListState {
    fn default() -> Self {
        let (tx, rx) = flume::unbounded();
        Self {
            users: Vec::new(),
            loading: false,
            error: None,
            pagination: Pagination::default(),
            filters: UserFilters::default(),
            token: 0,
            tx,
            rx,
        }
    }
}

impl State for UserListState {
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}

impl UserListState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Marks a fetch as started and hands out the token + sender the
    /// completion must use.
    pub fn begin_fetch(&mut self) -> (u64, Sender<ListMessage>) {
        self.loading = true;
        self.error = None;
        self.token += 1;
        (self.token, self.tx.clone())
    }

    /// Applies every completion received since the last frame.
    ///
    /// Success replaces users and pagination wholesale; failure keeps the
    /// previously shown data and only sets `error`.
    pub fn poll(&mut self) {
        let messages: Vec<ListMessage> = self.rx.try_iter().collect();
        for message in messages {
            if message.token != self.token {
                log::debug!(
                    "Discarding stale list result (token {} != {})",
                    message.token,
                    self.token
                );
                continue;
            }

            self.loading = false;
            match message.result {
                Ok(response) => {
                    self.users = response.data;
                    self.pagination = Pagination {
                        page: response.page,
                        limit: response.limit,
                        total: response.total,
                        total_pages: response.total_pages,
                    };
                    self.error = None;
                }
                Err(err) => {
                    self.error = Some(err.to_string());
                }
            }
        }
    }

    /// Patches a single record in the current page by id, without a
    /// network round-trip. Used to reflect status changes made in the
    /// detail panel.
    pub fn replace_user(&mut self, updated: &User) {
        if let Some(slot) = self.users.iter_mut().find(|u| u.id == updated.id) {
            *slot = updated.clone();
        }
    }
}

/// Fetches `page` with the state's current filters and limit.
pub fn fetch_users(
    api: Arc<MockApi>,
    egui_ctx: egui::Context,
    state: &mut UserListState,
    page: u32,
) -> JoinHandle<()> {
    let (token, tx) = state.begin_fetch();
    let filters = state.filters.clone();
    let limit = state.pagination.limit;

    log::info!(
        "fetch_users: page={page} limit={limit} search={:?} status={:?}",
        filters.search,
        filters.status
    );

    tokio::spawn(async move {
        let result = api.list_users(page, limit, &filters).await;
        if let Err(err) = &result {
            log::error!("fetch_users failed: {err}");
        }
        let _ = tx.send(ListMessage { token, result });
        egui_ctx.request_repaint();
    })
}

/// Installs new filters and refetches from page 1.
pub fn apply_filters(
    api: Arc<MockApi>,
    egui_ctx: egui::Context,
    state: &mut UserListState,
    filters: UserFilters,
) -> JoinHandle<()> {
    state.filters = filters;
    fetch_users(api, egui_ctx, state, 1)
}

/// Re-issues the last fetch (current page, current filters). Backs the
/// Retry action in the error banner.
pub fn refresh_users(
    api: Arc<MockApi>,
    egui_ctx: egui::Context,
    state: &mut UserListState,
) -> JoinHandle<()> {
    let page = state.pagination.page;
    fetch_users(api, egui_ctx, state, page)
}
