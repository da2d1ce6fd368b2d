//! In-process mock of the user API.
//!
//! Stands in for the HTTP backend the dashboard would normally talk to:
//! every call sleeps for a bounded random delay and may fail with a
//! simulated server error. Both behaviors are injectable so tests run
//! deterministically, and the store is an owned repository rather than
//! process-global state.

use std::sync::{Mutex, MutexGuard};
use std::time::Duration;

use rand::Rng as _;
use serde::{Deserialize, Serialize};
use ustr::Ustr;

use crate::error::ApiError;
use crate::seed;
use crate::user::{PaginatedResponse, User, UserFilters, UserStatus};

/// Owned, ordered user repository.
///
/// A `Mutex` guards the records because API futures resolve on tokio
/// worker threads while the UI thread reads the results.
#[derive(Debug, Default)]
pub struct UserStore {
    users: Mutex<Vec<User>>,
}

impl UserStore {
    pub fn new(users: Vec<User>) -> Self {
        Self {
            users: Mutex::new(users),
        }
    }

    /// A store populated with the default 25-account roster.
    pub fn seeded() -> Self {
        Self::new(seed::roster())
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    fn lock(&self) -> MutexGuard<'_, Vec<User>> {
        self.users.lock().expect("user store mutex poisoned")
    }
}

/// Decides whether a call fails with a simulated server error.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FailurePolicy {
    /// Fail with the given probability per call. The dashboard default
    /// is `Random(0.1)`.
    Random(f64),
    Never,
    Always,
}

impl Default for FailurePolicy {
    fn default() -> Self {
        Self::Random(0.1)
    }
}

impl FailurePolicy {
    fn should_fail(self) -> bool {
        match self {
            Self::Random(rate) => rand::random::<f64>() < rate,
            Self::Never => false,
            Self::Always => true,
        }
    }
}

/// Per-operation artificial delay ranges, in milliseconds.
///
/// The exact ranges only matter for feel; they mirror what a small REST
/// API does under normal load.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Latency {
    list_ms: (u64, u64),
    get_ms: (u64, u64),
    reset_ms: (u64, u64),
    update_ms: (u64, u64),
}

impl Latency {
    pub fn simulated() -> Self {
        Self {
            list_ms: (300, 600),
            get_ms: (200, 400),
            reset_ms: (500, 1000),
            update_ms: (200, 500),
        }
    }

    /// No delay at all, for tests.
    pub fn none() -> Self {
        Self {
            list_ms: (0, 0),
            get_ms: (0, 0),
            reset_ms: (0, 0),
            update_ms: (0, 0),
        }
    }
}

impl Default for Latency {
    fn default() -> Self {
        Self::simulated()
    }
}

async fn wait((lo, hi): (u64, u64)) {
    if hi == 0 {
        return;
    }
    let ms = rand::rng().random_range(lo..=hi);
    tokio::time::sleep(Duration::from_millis(ms)).await;
}

/// Result of a password reset. No password state actually changes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PasswordReset {
    pub success: bool,
    pub message: String,
}

/// The mock API service.
///
/// Unknown ids always surface as [`ApiError::NotFound`]: the id lookup is
/// checked before the failure policy, so the simulated error can never
/// mask a 404.
#[derive(Debug)]
pub struct MockApi {
    store: UserStore,
    failure: FailurePolicy,
    latency: Latency,
}

impl MockApi {
    pub fn new(store: UserStore) -> Self {
        Self {
            store,
            failure: FailurePolicy::default(),
            latency: Latency::default(),
        }
    }

    /// No latency, no failures. What tests want.
    pub fn deterministic(store: UserStore) -> Self {
        Self::new(store)
            .with_failure_policy(FailurePolicy::Never)
            .with_latency(Latency::none())
    }

    pub fn with_failure_policy(mut self, failure: FailurePolicy) -> Self {
        self.failure = failure;
        self
    }

    pub fn with_latency(mut self, latency: Latency) -> Self {
        self.latency = latency;
        self
    }

    pub fn store(&self) -> &UserStore {
        &self.store
    }

    /// Lists users matching `filters`, paginated in store order.
    pub async fn list_users(
        &self,
        page: u32,
        limit: u32,
        filters: &UserFilters,
    ) -> Result<PaginatedResponse<User>, ApiError> {
        wait(self.latency.list_ms).await;

        if self.failure.should_fail() {
            return Err(ApiError::server("Failed to fetch users. Please try again."));
        }

        let filtered: Vec<User> = {
            let users = self.store.lock();
            users.iter().filter(|u| filters.matches(u)).cloned().collect()
        };

        let limit = limit.max(1);
        let page = page.max(1);
        let total = filtered.len();
        let total_pages = total.div_ceil(limit as usize) as u32;
        let start = (page as usize - 1) * limit as usize;
        let data: Vec<User> = filtered
            .into_iter()
            .skip(start)
            .take(limit as usize)
            .collect();

        Ok(PaginatedResponse {
            data,
            total,
            page,
            limit,
            total_pages,
        })
    }

    pub async fn get_user_by_id(&self, id: Ustr) -> Result<User, ApiError> {
        wait(self.latency.get_ms).await;

        let user = self
            .store
            .lock()
            .iter()
            .find(|u| u.id == id)
            .cloned()
            .ok_or(ApiError::NotFound)?;

        if self.failure.should_fail() {
            return Err(ApiError::server(
                "Failed to fetch user details. Please try again.",
            ));
        }

        Ok(user)
    }

    /// Pretends to send a password reset email. Returns the confirmation
    /// message the UI displays verbatim.
    pub async fn reset_password(&self, id: Ustr) -> Result<PasswordReset, ApiError> {
        wait(self.latency.reset_ms).await;

        let email = self
            .store
            .lock()
            .iter()
            .find(|u| u.id == id)
            .map(|u| u.email.clone())
            .ok_or(ApiError::NotFound)?;

        if self.failure.should_fail() {
            return Err(ApiError::server(
                "Failed to reset password. Please try again.",
            ));
        }

        Ok(PasswordReset {
            success: true,
            message: format!("Password reset email sent to {email}"),
        })
    }

    /// Sets the record's status in place and returns the updated record.
    /// Idempotent.
    pub async fn update_status(&self, id: Ustr, status: UserStatus) -> Result<User, ApiError> {
        wait(self.latency.update_ms).await;

        let mut users = self.store.lock();
        let user = users
            .iter_mut()
            .find(|u| u.id == id)
            .ok_or(ApiError::NotFound)?;

        if self.failure.should_fail() {
            return Err(ApiError::server(
                "Failed to update user status. Please try again.",
            ));
        }

        user.status = status;
        Ok(user.clone())
    }
}
