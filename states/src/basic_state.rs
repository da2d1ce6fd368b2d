use std::any::Any;

use chrono::{DateTime, Utc};

use crate::State;

/// Virtual clock state.
///
/// Widgets read time through this state instead of calling `Utc::now()`
/// directly so tests can pin the clock.
#[derive(Debug, Default)]
pub struct Time {
    virt: DateTime<Utc>,
}

impl Time {
    pub fn now() -> Self {
        Self { virt: Utc::now() }
    }
}

impl State for Time {
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}

impl AsMut<DateTime<Utc>> for Time {
    fn as_mut(&mut self) -> &mut DateTime<Utc> {
        &mut self.virt
    }
}

impl AsRef<DateTime<Utc>> for Time {
    fn as_ref(&self) -> &DateTime<Utc> {
        &self.virt
    }
}
