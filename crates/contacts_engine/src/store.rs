use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use chrono::Utc;
use contacts_logging::{contacts_debug, contacts_info, contacts_warn};
use serde::{Deserialize, Serialize};
use tokio::sync::Mutex;

use crate::{
    matches_query, new_contact_id, sort_contacts, AtomicFileWriter, ContactMutation,
    ContactRecord, PersistError, StoreError,
};

/// Source and sink of contact records.
#[async_trait]
pub trait DataProvider: Send + Sync {
    /// Contacts whose name matches `query`, or all of them when it is blank.
    async fn get_contacts(&self, query: Option<&str>) -> Result<Vec<ContactRecord>, StoreError>;

    /// Allocates and persists a blank contact with a fresh id.
    async fn create_empty_contact(&self) -> Result<ContactRecord, StoreError>;

    async fn get_contact(&self, id: &str) -> Result<Option<ContactRecord>, StoreError>;

    async fn update_contact(
        &self,
        id: &str,
        updates: ContactMutation,
    ) -> Result<ContactRecord, StoreError>;

    async fn delete_contact(&self, id: &str) -> Result<(), StoreError>;
}

#[derive(Debug, Default, Serialize, Deserialize)]
struct PersistedContacts {
    contacts: Vec<ContactRecord>,
}

#[derive(Debug)]
struct Backing {
    writer: AtomicFileWriter,
    filename: String,
}

/// Contact store kept in memory and optionally mirrored to a RON file.
///
/// Mutations are applied to a copy which is persisted before it replaces the
/// live list, so a failed write leaves the store as it was.
#[derive(Debug)]
pub struct ContactStore {
    contacts: Mutex<Vec<ContactRecord>>,
    backing: Option<Backing>,
}

impl ContactStore {
    pub fn in_memory() -> Self {
        Self::with_contacts(Vec::new())
    }

    pub fn with_contacts(contacts: Vec<ContactRecord>) -> Self {
        Self {
            contacts: Mutex::new(contacts),
            backing: None,
        }
    }

    /// Opens the store persisted at `path`. A missing file is an empty store.
    pub fn open(path: &Path) -> Result<Self, StoreError> {
        let filename = path
            .file_name()
            .and_then(|name| name.to_str())
            .ok_or_else(|| StoreError::Decode(format!("not a file path: {}", path.display())))?
            .to_string();
        let dir = match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
            _ => PathBuf::from("."),
        };

        let contacts = match fs::read_to_string(path) {
            Ok(text) => {
                let persisted: PersistedContacts = ron::from_str(&text)
                    .map_err(|err| StoreError::Decode(format!("{}: {err}", path.display())))?;
                contacts_info!(
                    "Loaded {} contacts from {:?}",
                    persisted.contacts.len(),
                    path
                );
                persisted.contacts
            }
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                contacts_info!("No contact file at {:?}; starting empty", path);
                Vec::new()
            }
            Err(err) => return Err(StoreError::Persist(err.into())),
        };

        Ok(Self {
            contacts: Mutex::new(contacts),
            backing: Some(Backing {
                writer: AtomicFileWriter::new(dir),
                filename,
            }),
        })
    }

    pub fn path(&self) -> Option<PathBuf> {
        self.backing
            .as_ref()
            .map(|backing| backing.writer.dir().join(&backing.filename))
    }

    /// Writes `contacts` on the blocking pool; the caller keeps the list locked
    /// so writes land in mutation order.
    async fn save(&self, contacts: &[ContactRecord]) -> Result<(), StoreError> {
        let Some(backing) = &self.backing else {
            return Ok(());
        };
        let persisted = PersistedContacts {
            contacts: contacts.to_vec(),
        };
        let pretty = ron::ser::PrettyConfig::new();
        let content = ron::ser::to_string_pretty(&persisted, pretty)
            .map_err(|err| StoreError::Encode(err.to_string()))?;

        let writer = backing.writer.clone();
        let filename = backing.filename.clone();
        tokio::task::spawn_blocking(move || writer.write(&filename, &content))
            .await
            .map_err(|err| PersistError::Io(io::Error::other(err.to_string())))??;
        contacts_debug!("Persisted {} contacts", contacts.len());
        Ok(())
    }
}

#[async_trait]
impl DataProvider for ContactStore {
    async fn get_contacts(&self, query: Option<&str>) -> Result<Vec<ContactRecord>, StoreError> {
        let guard = self.contacts.lock().await;
        let mut matching: Vec<ContactRecord> = match query {
            Some(query) => guard
                .iter()
                .filter(|record| matches_query(record, query))
                .cloned()
                .collect(),
            None => guard.clone(),
        };
        sort_contacts(&mut matching);
        Ok(matching)
    }

    async fn create_empty_contact(&self) -> Result<ContactRecord, StoreError> {
        let mut guard = self.contacts.lock().await;
        let id = new_contact_id(|candidate| guard.iter().any(|record| record.id == candidate));
        let record = ContactRecord::empty(id, Utc::now());

        let mut next = guard.clone();
        next.push(record.clone());
        self.save(&next).await?;
        *guard = next;

        contacts_info!("Created contact {}", record.id);
        Ok(record)
    }

    async fn get_contact(&self, id: &str) -> Result<Option<ContactRecord>, StoreError> {
        let guard = self.contacts.lock().await;
        Ok(guard.iter().find(|record| record.id == id).cloned())
    }

    async fn update_contact(
        &self,
        id: &str,
        updates: ContactMutation,
    ) -> Result<ContactRecord, StoreError> {
        let mut guard = self.contacts.lock().await;
        let mut next = guard.clone();
        let Some(record) = next.iter_mut().find(|record| record.id == id) else {
            contacts_warn!("Update for unknown contact {}", id);
            return Err(StoreError::NotFound(id.to_string()));
        };
        record.apply(updates);
        let updated = record.clone();

        self.save(&next).await?;
        *guard = next;

        contacts_info!("Updated contact {}", id);
        Ok(updated)
    }

    async fn delete_contact(&self, id: &str) -> Result<(), StoreError> {
        let mut guard = self.contacts.lock().await;
        let Some(index) = guard.iter().position(|record| record.id == id) else {
            contacts_warn!("Delete for unknown contact {}", id);
            return Err(StoreError::NotFound(id.to_string()));
        };

        let mut next = guard.clone();
        next.remove(index);
        self.save(&next).await?;
        *guard = next;

        contacts_info!("Deleted contact {}", id);
        Ok(())
    }
}
