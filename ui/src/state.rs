use std::sync::Arc;

use userdeck_business::{DashboardConfig, MockApi, UserDetailState, UserListState, UserStore};
use userdeck_states::{StateCtx, Time};

/// The main application state: the typed state storage plus the API
/// handle async commands clone into their tasks.
pub struct State {
    pub ctx: StateCtx,
    pub api: Arc<MockApi>,
}

impl Default for State {
    fn default() -> Self {
        Self::with_config(DashboardConfig::default(), UserStore::seeded())
    }
}

impl State {
    pub fn with_config(config: DashboardConfig, store: UserStore) -> Self {
        let api = Arc::new(config.build_api(store));

        let mut list = UserListState::new();
        list.pagination.limit = config.page_limit;

        let mut ctx = StateCtx::new();
        ctx.add_state(Time::now());
        ctx.add_state(config);
        ctx.add_state(list);
        ctx.add_state(UserDetailState::new());

        Self { ctx, api }
    }

    /// Deterministic state for harness tests: no latency, no failures,
    /// default seed roster.
    pub fn test() -> Self {
        Self::with_config(DashboardConfig::test(), UserStore::seeded())
    }

    /// Deterministic state over a caller-provided store.
    pub fn test_with_store(store: UserStore) -> Self {
        Self::with_config(DashboardConfig::test(), store)
    }
}
