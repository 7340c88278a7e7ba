//! Contacts engine: the data provider behind the contact list.
mod id;
mod persist;
mod search;
mod store;
mod types;

pub use id::new_contact_id;
pub use persist::{ensure_data_dir, AtomicFileWriter, PersistError};
pub use search::{matches_query, sort_contacts};
pub use store::{ContactStore, DataProvider};
pub use types::{ContactMutation, ContactRecord, StoreError};
