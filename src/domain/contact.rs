use core::fmt;

use crate::prelude::AppError;
use serde::{Deserialize, Serialize};

/// Identifier handed out by the backend. Some servers emit numeric ids and
/// others strings, so both are accepted and kept as an opaque string.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "RawId", into = "String")]
pub struct ContactId(String);

#[derive(Deserialize)]
#[serde(untagged)]
enum RawId {
    Number(u64),
    Text(String),
}

impl From<RawId> for ContactId {
    fn from(raw: RawId) -> Self {
        match raw {
            RawId::Number(n) => ContactId(n.to_string()),
            RawId::Text(s) => ContactId(s),
        }
    }
}

impl From<ContactId> for String {
    fn from(id: ContactId) -> Self {
        id.0
    }
}

impl ContactId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for ContactId {
    fn from(s: &str) -> Self {
        ContactId(s.to_string())
    }
}

impl From<String> for ContactId {
    fn from(s: String) -> Self {
        ContactId(s)
    }
}

impl From<u64> for ContactId {
    fn from(n: u64) -> Self {
        ContactId(n.to_string())
    }
}

impl From<i32> for ContactId {
    fn from(n: i32) -> Self {
        ContactId(n.to_string())
    }
}

impl fmt::Display for ContactId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A contact as confirmed by the backend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contact {
    pub id: ContactId,
    pub name: String,
    pub number: String,
}

/// Payload for create and update requests. It has no id because the
/// backend assigns one on create and the id travels in the url on update.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewContact {
    pub name: String,
    pub number: String,
}

impl Contact {
    pub fn new(id: impl Into<ContactId>, name: &str, number: &str) -> Self {
        Contact {
            id: id.into(),
            name: name.to_string(),
            number: number.to_string(),
        }
    }

    pub fn has_name(&self, name: &str) -> bool {
        names_match(&self.name, name)
    }

    pub fn name_contains(&self, needle: &str) -> bool {
        self.name.to_lowercase().contains(&needle.to_lowercase())
    }
}

impl NewContact {
    /// Trims both fields and rejects a blank name.
    pub fn parse(name: &str, number: &str) -> Result<Self, AppError> {
        let draft = NewContact {
            name: name.trim().to_string(),
            number: number.trim().to_string(),
        };

        if !draft.validate_name() {
            return Err(AppError::Validation(ValidationReq::name_req()));
        }
        Ok(draft)
    }

    pub fn validate_name(&self) -> bool {
        !self.name.trim().is_empty()
    }
}

pub enum ValidationReq {
    __,
}

impl ValidationReq {
    pub fn name_req() -> String {
        "Name must not be empty".to_string()
    }
}

/// Names are unique per phonebook regardless of case.
pub fn names_match(a: &str, b: &str) -> bool {
    a.to_lowercase() == b.to_lowercase()
}
