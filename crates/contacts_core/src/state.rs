use crate::view_model::ContactListView;
use crate::{Contact, Location};

/// Monotonically increasing number identifying a navigation.
pub type RequestSeq = u64;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NavigationState {
    #[default]
    Idle,
    Loading,
    Submitting,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavigationKind {
    /// GET navigation: only the loader runs.
    Load,
    /// Form POST: the action runs first.
    Submit,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingNavigation {
    pub seq: RequestSeq,
    pub kind: NavigationKind,
    pub location: Location,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppState {
    contacts: Vec<Contact>,
    query: Option<String>,
    search_draft: Option<String>,
    location: Location,
    pending: Option<PendingNavigation>,
    last_seq: RequestSeq,
    error: Option<String>,
    dirty: bool,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn view(&self) -> ContactListView {
        ContactListView::from_state(self)
    }

    pub fn contacts(&self) -> &[Contact] {
        &self.contacts
    }

    pub fn query(&self) -> Option<&str> {
        self.query.as_deref()
    }

    pub fn search_draft(&self) -> Option<&str> {
        self.search_draft.as_deref()
    }

    pub fn location(&self) -> &Location {
        &self.location
    }

    pub fn pending(&self) -> Option<&PendingNavigation> {
        self.pending.as_ref()
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn navigation_state(&self) -> NavigationState {
        match self.pending.as_ref().map(|pending| pending.kind) {
            None => NavigationState::Idle,
            Some(NavigationKind::Load) => NavigationState::Loading,
            Some(NavigationKind::Submit) => NavigationState::Submitting,
        }
    }

    /// Returns whether a render is due and clears the flag.
    pub fn consume_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    pub(crate) fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Starts a navigation, superseding any pending one.
    pub(crate) fn begin_navigation(
        &mut self,
        kind: NavigationKind,
        location: Location,
    ) -> RequestSeq {
        self.last_seq += 1;
        self.pending = Some(PendingNavigation {
            seq: self.last_seq,
            kind,
            location,
        });
        self.dirty = true;
        self.last_seq
    }

    pub(crate) fn is_latest(&self, seq: RequestSeq, kind: NavigationKind) -> bool {
        self.pending
            .as_ref()
            .is_some_and(|pending| pending.seq == seq && pending.kind == kind)
    }

    pub(crate) fn set_search_draft(&mut self, text: Option<String>) {
        self.search_draft = text;
        self.dirty = true;
    }

    pub(crate) fn commit_load(&mut self, query: Option<String>, contacts: Vec<Contact>) {
        self.finish_pending();
        self.query = query;
        self.contacts = contacts;
        self.error = None;
    }

    pub(crate) fn commit_failure(&mut self, message: String) {
        self.finish_pending();
        self.error = Some(message);
    }

    fn finish_pending(&mut self) {
        if let Some(pending) = self.pending.take() {
            self.location = pending.location;
        }
        self.search_draft = None;
        self.dirty = true;
    }
}
