pub mod countries;
pub mod memory;
pub mod remote;

use crate::prelude::{AppError, Contact, ContactId, NewContact};

/// Create/read/update/delete over the backend's contact collection.
///
/// `update` and `delete` return `AppError::NotFound` when the id is no
/// longer known to the backend. Any other failure is `AppError::Connection`.
pub trait RemoteContactStore {
    fn list(&self) -> Result<Vec<Contact>, AppError>;

    fn create(&self, contact: &NewContact) -> Result<Contact, AppError>;

    fn update(&self, id: &ContactId, contact: &NewContact) -> Result<Contact, AppError>;

    fn delete(&self, id: &ContactId) -> Result<(), AppError>;

    fn get_medium(&self) -> &str;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StorageMediums {
    Remote,
    Mem,
}

impl StorageMediums {
    pub fn is_remote(&self) -> bool {
        matches!(self, StorageMediums::Remote)
    }

    pub fn is_mem(&self) -> bool {
        matches!(self, StorageMediums::Mem)
    }

    pub fn is_which(&self) -> &str {
        if self.is_remote() { "remote" } else { "mem" }
    }

    pub fn from(str: &str) -> Result<Self, AppError> {
        match str.to_lowercase().as_str() {
            "remote" => Ok(StorageMediums::Remote),
            "mem" => Ok(StorageMediums::Mem),
            _ => Err(AppError::Validation(
                "Not a recognized storage medium".to_string(),
            )),
        }
    }
}

pub fn parse_storage_type(
    medium: StorageMediums,
    base_url: &str,
) -> Result<Box<dyn RemoteContactStore>, AppError> {
    // The url only matters for the remote medium.
    if medium.is_mem() {
        return Ok(Box::new(memory::MemoryStorage::new()));
    }
    Ok(Box::new(remote::RemoteStorage::new(base_url)?))
}
