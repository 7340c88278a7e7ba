pub type ContactId = String;

/// A contact as the list view sees it. Text fields may be empty.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Contact {
    pub id: ContactId,
    pub first: String,
    pub last: String,
    pub avatar: String,
    pub twitter: String,
    pub notes: String,
    pub favorite: bool,
}

impl Contact {
    pub fn new(id: impl Into<ContactId>) -> Self {
        Self {
            id: id.into(),
            ..Self::default()
        }
    }

    pub fn with_name(mut self, first: impl Into<String>, last: impl Into<String>) -> Self {
        self.first = first.into();
        self.last = last.into();
        self
    }

    pub fn with_favorite(mut self, favorite: bool) -> Self {
        self.favorite = favorite;
        self
    }

    /// `"first last"` with empty parts dropped, or `None` when both are empty.
    /// Whitespace counts as a name.
    pub fn display_name(&self) -> Option<String> {
        let parts: Vec<&str> = [self.first.as_str(), self.last.as_str()]
            .into_iter()
            .filter(|part| !part.is_empty())
            .collect();
        if parts.is_empty() {
            None
        } else {
            Some(parts.join(" "))
        }
    }

    pub fn href(&self) -> String {
        format!("/contacts/{}", self.id)
    }

    pub fn edit_href(&self) -> String {
        edit_href(&self.id)
    }
}

pub(crate) fn edit_href(id: &str) -> String {
    format!("/contacts/{id}/edit")
}
