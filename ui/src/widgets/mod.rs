mod badge;
mod detail_panel;
mod env_version;
mod filters;
mod pagination;
mod table;

pub use badge::status_badge;
pub use detail_panel::{DetailAction, detail_panel};
pub use env_version::env_version;
pub use filters::user_filters;
pub use pagination::pagination;
pub use table::{TableAction, users_table};
