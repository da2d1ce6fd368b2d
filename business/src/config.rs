use std::any::Any;

use userdeck_states::State;

use crate::mock_api::{FailurePolicy, Latency, MockApi, UserStore};

/// Dashboard-wide knobs. Registered in the `StateCtx` at startup.
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardConfig {
    /// Rows per page in the users table.
    pub page_limit: u32,
    /// Probability that any mock API call fails with a simulated 500.
    pub failure_rate: f64,
    /// Whether mock API calls sleep for their simulated latency.
    pub simulate_latency: bool,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            page_limit: 10,
            failure_rate: 0.1,
            simulate_latency: true,
        }
    }
}

impl DashboardConfig {
    /// Deterministic configuration for harness tests.
    pub fn test() -> Self {
        Self {
            failure_rate: 0.0,
            simulate_latency: false,
            ..Self::default()
        }
    }

    /// Builds a mock API honoring this configuration over `store`.
    pub fn build_api(&self, store: UserStore) -> MockApi {
        let failure = if self.failure_rate <= 0.0 {
            FailurePolicy::Never
        } else {
            FailurePolicy::Random(self.failure_rate)
        };
        let latency = if self.simulate_latency {
            Latency::simulated()
        } else {
            Latency::none()
        };

        MockApi::new(store)
            .with_failure_policy(failure)
            .with_latency(latency)
    }
}

impl State for DashboardConfig {
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}
