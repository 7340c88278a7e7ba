//! Contacts app: HTTP surface, configuration and logging around the contact list.
pub mod platform;

pub use platform::app::run;
pub use platform::config::{Config, LogDestination};
pub use platform::routes::{build_router, ServerState};
