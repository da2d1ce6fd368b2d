use std::any::{TypeId, type_name};
use std::collections::BTreeMap;

use crate::State;

/// Type-keyed storage for application state.
///
/// One instance lives in the app; widgets and poll functions look states up
/// by type. Registering the same type twice replaces the previous value.
#[derive(Default)]
pub struct StateCtx {
    storage: BTreeMap<TypeId, Box<dyn State>>,
}

impl StateCtx {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_state<T: State>(&mut self, state: T) {
        self.storage.insert(TypeId::of::<T>(), Box::new(state));
    }

    /// Returns a reference to the state of type `T`.
    ///
    /// # Panics
    /// Panics if `T` was never registered; registration happens once during
    /// app setup, so a miss is a programming error.
    pub fn state_ref<T: State>(&self) -> &T {
        self.try_state_ref::<T>()
            .unwrap_or_else(|| panic!("State {} is not registered", type_name::<T>()))
    }

    /// Returns a mutable reference to the state of type `T`.
    ///
    /// # Panics
    /// Panics if `T` was never registered.
    pub fn state_mut<T: State>(&mut self) -> &mut T {
        self.try_state_mut::<T>()
            .unwrap_or_else(|| panic!("State {} is not registered", type_name::<T>()))
    }

    pub fn try_state_ref<T: State>(&self) -> Option<&T> {
        self.storage
            .get(&TypeId::of::<T>())
            .and_then(|boxed| boxed.as_any().downcast_ref::<T>())
    }

    pub fn try_state_mut<T: State>(&mut self) -> Option<&mut T> {
        self.storage
            .get_mut(&TypeId::of::<T>())
            .and_then(|boxed| boxed.as_any_mut().downcast_mut::<T>())
    }

    /// Mutates the state of type `T` in place.
    pub fn update<T: State>(&mut self, f: impl FnOnce(&mut T)) {
        f(self.state_mut::<T>());
    }
}

impl std::fmt::Debug for StateCtx {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StateCtx")
            .field("states", &self.storage.len())
            .finish()
    }
}
