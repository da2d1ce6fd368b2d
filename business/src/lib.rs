//! Domain layer of the Userdeck dashboard.
//!
//! Holds the user model, the in-process mock API the UI talks to, and the
//! state containers plus async commands that bridge tokio tasks back to
//! the egui frame loop.

mod config;
mod detail_state;
mod error;
mod list_state;
mod mock_api;
mod seed;
mod user;

pub use config::DashboardConfig;
pub use detail_state::{
    DetailMessage, RESET_ERROR_PREFIX, UserDetailState, fetch_user_detail, reset_password,
    update_user_status,
};
pub use error::ApiError;
pub use list_state::{
    DEFAULT_PAGE_LIMIT, ListMessage, Pagination, UserListState, apply_filters, fetch_users,
    refresh_users,
};
pub use mock_api::{FailurePolicy, Latency, MockApi, PasswordReset, UserStore};
pub use seed::roster;
pub use user::{PaginatedResponse, StatusFilter, User, UserFilters, UserStatus};
