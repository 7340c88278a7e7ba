#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// Link click, history traversal, or a URL typed into the address bar.
    Navigate { href: String },
    /// User edited the search input; submits the search form.
    SearchInputChanged(String),
    /// User pressed "New".
    NewContactSubmitted,
    /// Loader result for navigation `seq`.
    ContactsLoaded {
        seq: crate::RequestSeq,
        query: Option<String>,
        result: Result<Vec<crate::Contact>, String>,
    },
    /// Action result for submission `seq`.
    ContactCreated {
        seq: crate::RequestSeq,
        result: Result<crate::ContactId, String>,
    },
    /// Fallback for placeholder wiring.
    NoOp,
}
