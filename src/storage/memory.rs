use std::cell::RefCell;

use super::RemoteContactStore;
use crate::prelude::{AppError, Contact, ContactId, NewContact};
use uuid::Uuid;

/// Backend kept inside the process. It behaves like the REST server
/// (assigns ids, reports unknown ids as not found) but forgets everything
/// when dropped.
pub struct MemoryStorage {
    pub medium: String,
    data: RefCell<Vec<Contact>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::with_contacts(Vec::new())
    }

    pub fn with_contacts(contacts: Vec<Contact>) -> Self {
        Self {
            medium: "mem".to_string(),
            data: RefCell::new(contacts),
        }
    }
}

impl Default for MemoryStorage {
    fn default() -> Self {
        Self::new()
    }
}

impl RemoteContactStore for MemoryStorage {
    fn list(&self) -> Result<Vec<Contact>, AppError> {
        Ok(self.data.borrow().clone())
    }

    fn create(&self, contact: &NewContact) -> Result<Contact, AppError> {
        let created = Contact {
            id: ContactId::from(Uuid::new_v4().to_string()),
            name: contact.name.clone(),
            number: contact.number.clone(),
        };
        self.data.borrow_mut().push(created.clone());
        Ok(created)
    }

    fn update(&self, id: &ContactId, contact: &NewContact) -> Result<Contact, AppError> {
        let mut data = self.data.borrow_mut();
        let stored = data
            .iter_mut()
            .find(|c| &c.id == id)
            .ok_or_else(|| AppError::NotFound(format!("Contact {}", id)))?;

        stored.name = contact.name.clone();
        stored.number = contact.number.clone();
        Ok(stored.clone())
    }

    fn delete(&self, id: &ContactId) -> Result<(), AppError> {
        let mut data = self.data.borrow_mut();
        let index = data
            .iter()
            .position(|c| &c.id == id)
            .ok_or_else(|| AppError::NotFound(format!("Contact {}", id)))?;

        data.remove(index);
        Ok(())
    }

    fn get_medium(&self) -> &str {
        &self.medium
    }
}
