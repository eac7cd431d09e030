use super::confirm::Confirmation;
use super::contact::{Contact, ContactId, NewContact};
use super::outcome::Outcome;
use crate::prelude::AppError;
use crate::storage::RemoteContactStore;
use tracing::{debug, info, warn};

/// Local, ordered copy of the backend's contact list.
///
/// The list only changes after the backend has answered. A failed call
/// leaves it as it was; a "not found" answer on update or delete drops the
/// stale local entry so the list matches the server again.
pub struct ContactManager {
    mem: Vec<Contact>,
    pub storage: Box<dyn RemoteContactStore>,
}

impl ContactManager {
    /// Creates an empty manager. Call `load()` to fill it.
    pub fn new(storage: Box<dyn RemoteContactStore>) -> Self {
        Self {
            mem: Vec::new(),
            storage,
        }
    }

    pub fn contact_list(&self) -> &[Contact] {
        &self.mem
    }

    pub fn len(&self) -> usize {
        self.mem.len()
    }

    pub fn is_empty(&self) -> bool {
        self.mem.is_empty()
    }

    pub fn find_by_name(&self, name: &str) -> Option<&Contact> {
        self.mem.iter().find(|c| c.has_name(name))
    }

    pub fn find_by_id(&self, id: &ContactId) -> Option<&Contact> {
        self.mem.iter().find(|c| &c.id == id)
    }

    /// Replaces the local list with whatever the backend holds.
    pub fn load(&mut self) -> Result<(), AppError> {
        match self.storage.list() {
            Ok(contacts) => {
                info!(
                    medium = self.storage.get_medium(),
                    count = contacts.len(),
                    "loaded contacts"
                );
                self.mem = contacts;
                Ok(())
            }
            Err(err) => {
                warn!(error = %err, "loading contacts failed");
                Err(err)
            }
        }
    }

    /// Adds a contact, or replaces the number of the contact that already
    /// has this name once `confirmation` agrees.
    pub fn upsert(
        &mut self,
        name: &str,
        number: &str,
        confirmation: &mut dyn Confirmation,
    ) -> Result<Outcome, AppError> {
        let draft = NewContact::parse(name, number)?;

        let existing = match self.find_by_name(&draft.name) {
            Some(existing) => existing.clone(),
            None => return self.create(draft),
        };

        let question = format!(
            "{} is already added to phonebook, replace the old number with a new one?",
            existing.name
        );
        if !confirmation.confirm(&question) {
            debug!(name = %existing.name, "update cancelled");
            return Ok(Outcome::Cancelled);
        }

        // The stored name wins so that only the number changes.
        let change = NewContact {
            name: existing.name.clone(),
            number: draft.number,
        };

        match self.storage.update(&existing.id, &change) {
            Ok(updated) => {
                let slot = self.position_of(&existing.id);
                if let Some(stored) = slot.and_then(|i| self.mem.get_mut(i)) {
                    stored.number = updated.number;
                }
                let stored = slot
                    .and_then(|i| self.mem.get(i))
                    .cloned()
                    .unwrap_or_else(|| existing.clone());

                info!(id = %stored.id, name = %stored.name, "updated contact");
                Ok(Outcome::Updated(stored))
            }
            Err(err) if err.is_not_found() => Ok(self.drop_stale(existing.id, existing.name)),
            Err(err) => {
                warn!(id = %existing.id, error = %err, "updating contact failed");
                Err(err)
            }
        }
    }

    /// Deletes a contact on the backend once `confirmation` agrees.
    pub fn remove(
        &mut self,
        id: &ContactId,
        name: &str,
        confirmation: &mut dyn Confirmation,
    ) -> Result<Outcome, AppError> {
        if !confirmation.confirm(&format!("Delete {}?", name)) {
            debug!(%id, "delete cancelled");
            return Ok(Outcome::Cancelled);
        }

        match self.storage.delete(id) {
            Ok(()) => {
                let removed = match self.position_of(id) {
                    Some(index) => self.mem.remove(index),
                    None => Contact {
                        id: id.clone(),
                        name: name.to_string(),
                        number: String::new(),
                    },
                };
                info!(%id, name = %removed.name, "deleted contact");
                Ok(Outcome::Removed(removed))
            }
            Err(err) if err.is_not_found() => Ok(self.drop_stale(id.clone(), name.to_string())),
            Err(err) => {
                warn!(%id, error = %err, "deleting contact failed");
                Err(err)
            }
        }
    }

    /// Contacts whose name contains `needle`, ignoring case, in list order.
    pub fn filter(&self, needle: &str) -> Vec<&Contact> {
        self.mem.iter().filter(|c| c.name_contains(needle)).collect()
    }

    fn create(&mut self, draft: NewContact) -> Result<Outcome, AppError> {
        match self.storage.create(&draft) {
            Ok(created) => {
                info!(id = %created.id, name = %created.name, "created contact");
                self.mem.push(created.clone());
                Ok(Outcome::Created(created))
            }
            Err(err) => {
                warn!(name = %draft.name, error = %err, "creating contact failed");
                Err(err)
            }
        }
    }

    fn drop_stale(&mut self, id: ContactId, name: String) -> Outcome {
        warn!(%id, %name, "contact already removed from server");
        self.mem.retain(|c| c.id != id);
        Outcome::AlreadyGone { id, name }
    }

    fn position_of(&self, id: &ContactId) -> Option<usize> {
        self.mem.iter().position(|c| &c.id == id)
    }
}
