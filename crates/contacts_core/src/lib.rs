//! Contacts core: pure state machine and view-model helpers for the contact list.
mod contact;
mod effect;
mod location;
mod msg;
mod state;
mod update;
mod view_model;

pub use contact::{Contact, ContactId};
pub use effect::Effect;
pub use location::{Location, SEARCH_PARAM};
pub use msg::Msg;
pub use state::{AppState, NavigationKind, NavigationState, PendingNavigation, RequestSeq};
pub use update::update;
pub use view_model::{
    ContactLabel, ContactListBody, ContactListView, ContactRowView, LinkState, FAVORITE_MARKER,
    NO_CONTACTS, NO_NAME,
};
