use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::PersistError;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactRecord {
    pub id: String,
    #[serde(default)]
    pub first: String,
    #[serde(default)]
    pub last: String,
    #[serde(default)]
    pub avatar: String,
    #[serde(default)]
    pub twitter: String,
    #[serde(default)]
    pub notes: String,
    #[serde(default)]
    pub favorite: bool,
    pub created_at: DateTime<Utc>,
}

impl ContactRecord {
    /// A record with every field blank.
    pub fn empty(id: impl Into<String>, created_at: DateTime<Utc>) -> Self {
        Self {
            id: id.into(),
            first: String::new(),
            last: String::new(),
            avatar: String::new(),
            twitter: String::new(),
            notes: String::new(),
            favorite: false,
            created_at,
        }
    }

    pub fn apply(&mut self, updates: ContactMutation) {
        let ContactMutation {
            first,
            last,
            avatar,
            twitter,
            notes,
            favorite,
        } = updates;
        if let Some(first) = first {
            self.first = first;
        }
        if let Some(last) = last {
            self.last = last;
        }
        if let Some(avatar) = avatar {
            self.avatar = avatar;
        }
        if let Some(twitter) = twitter {
            self.twitter = twitter;
        }
        if let Some(notes) = notes {
            self.notes = notes;
        }
        if let Some(favorite) = favorite {
            self.favorite = favorite;
        }
    }
}

/// Partial update; `None` leaves a field as it is.
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
pub struct ContactMutation {
    pub first: Option<String>,
    pub last: Option<String>,
    pub avatar: Option<String>,
    pub twitter: Option<String>,
    pub notes: Option<String>,
    pub favorite: Option<bool>,
}

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("no contact with id {0}")]
    NotFound(String),
    #[error("persist failed: {0}")]
    Persist(#[from] PersistError),
    #[error("encode failed: {0}")]
    Encode(String),
    #[error("decode failed: {0}")]
    Decode(String),
}
