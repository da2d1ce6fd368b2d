//! Typed state storage shared by the Userdeck crates.
//!
//! - [`State`]: marker trait for state structs
//! - [`StateCtx`]: type-keyed storage the app owns
//! - [`Time`]: a mockable clock state

mod basic_state;
mod ctx;
mod state;

pub use basic_state::Time;
pub use ctx::StateCtx;
pub use state::State;
