use crate::{AppState, Contact, ContactId, NavigationState, SEARCH_PARAM};

pub const NO_CONTACTS: &str = "No contacts";
pub const NO_NAME: &str = "No Name";
pub const FAVORITE_MARKER: &str = "★";

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ContactListView {
    /// Value shown in the search input.
    pub search_value: String,
    /// A pending navigation targets a URL with a `q` parameter.
    pub searching: bool,
    pub navigation: NavigationState,
    /// The detail pane shows its loading state.
    pub detail_loading: bool,
    pub body: ContactListBody,
    pub location: String,
    pub error: Option<String>,
    pub dirty: bool,
}

/// Either a placeholder or a list; an empty list is never rendered.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ContactListBody {
    #[default]
    Empty,
    Entries(Vec<ContactRowView>),
}

impl ContactListBody {
    pub fn entries(&self) -> &[ContactRowView] {
        match self {
            ContactListBody::Empty => &[],
            ContactListBody::Entries(rows) => rows,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactRowView {
    pub id: ContactId,
    pub href: String,
    pub label: ContactLabel,
    pub favorite: bool,
    pub link_state: LinkState,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContactLabel {
    Named(String),
    NoName,
}

impl ContactLabel {
    pub fn text(&self) -> &str {
        match self {
            ContactLabel::Named(name) => name,
            ContactLabel::NoName => NO_NAME,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkState {
    Active,
    Pending,
    Inactive,
}

impl LinkState {
    pub fn css_class(self) -> &'static str {
        match self {
            LinkState::Active => "active",
            LinkState::Pending => "pending",
            LinkState::Inactive => "",
        }
    }
}

impl ContactListView {
    pub(crate) fn from_state(state: &AppState) -> Self {
        let pending = state.pending();
        let searching =
            pending.is_some_and(|pending| pending.location.has_query_param(SEARCH_PARAM));
        let navigation = state.navigation_state();

        // The draft only lives until its navigation commits; afterwards `q` wins.
        let search_value = match (pending, state.search_draft()) {
            (Some(_), Some(draft)) => draft.to_string(),
            _ => state.query().unwrap_or_default().to_string(),
        };

        let body = if state.contacts().is_empty() {
            ContactListBody::Empty
        } else {
            ContactListBody::Entries(
                state
                    .contacts()
                    .iter()
                    .map(|contact| row_view(state, contact))
                    .collect(),
            )
        };

        Self {
            search_value,
            searching,
            navigation,
            detail_loading: navigation == NavigationState::Loading && !searching,
            body,
            location: state.location().href(),
            error: state.error().map(str::to_owned),
            dirty: state.is_dirty(),
        }
    }
}

fn row_view(state: &AppState, contact: &Contact) -> ContactRowView {
    let href = contact.href();
    let link_state = if state.location().is_within(&href) {
        LinkState::Active
    } else if state
        .pending()
        .is_some_and(|pending| pending.location.is_within(&href))
    {
        LinkState::Pending
    } else {
        LinkState::Inactive
    };

    ContactRowView {
        id: contact.id.clone(),
        label: match contact.display_name() {
            Some(name) => ContactLabel::Named(name),
            None => ContactLabel::NoName,
        },
        favorite: contact.favorite,
        link_state,
        href,
    }
}
