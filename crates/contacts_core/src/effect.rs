use crate::RequestSeq;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Run the contact list loader for navigation `seq`.
    LoadContacts { seq: RequestSeq, query: Option<String> },
    /// Run the "New" action for submission `seq`.
    CreateContact { seq: RequestSeq },
}
