use super::RemoteContactStore;
use crate::helper::parse_base_url;
use crate::prelude::{AppError, Contact, ContactId, NewContact};
use reqwest::blocking;
use tracing::debug;

/// Contact collection behind a json-server style REST resource:
/// `GET base`, `POST base`, `PUT base/{id}`, `DELETE base/{id}`.
pub struct RemoteStorage {
    pub medium: String,
    pub base_url: String,
    client: blocking::Client,
}

impl RemoteStorage {
    pub fn new(base_url: &str) -> Result<Self, AppError> {
        let parsed = parse_base_url(base_url)?;

        Ok(Self {
            medium: "remote".to_string(),
            base_url: parsed.as_str().trim_end_matches('/').to_string(),
            client: blocking::Client::new(),
        })
    }

    pub fn url_for(&self, id: &ContactId) -> String {
        format!("{}/{}", self.base_url, id)
    }
}

impl RemoteContactStore for RemoteStorage {
    fn get_medium(&self) -> &str {
        &self.medium
    }

    fn list(&self) -> Result<Vec<Contact>, AppError> {
        debug!(url = %self.base_url, "GET contacts");
        let response = self.client.get(&self.base_url).send()?;

        let response = response.error_for_status()?;
        let res_str = response.text()?;
        let contacts: Vec<Contact> = serde_json::from_str(&res_str)?;
        Ok(contacts)
    }

    fn create(&self, contact: &NewContact) -> Result<Contact, AppError> {
        debug!(url = %self.base_url, name = %contact.name, "POST contact");
        let res = self
            .client
            .post(&self.base_url)
            .header(reqwest::header::CONTENT_TYPE, "application/json")
            .body(serde_json::to_vec(contact)?)
            .send()?;

        let res = res.error_for_status()?;
        let created: Contact = serde_json::from_str(&res.text()?)?;
        Ok(created)
    }

    fn update(&self, id: &ContactId, contact: &NewContact) -> Result<Contact, AppError> {
        let url = self.url_for(id);
        debug!(url = %url, "PUT contact");

        let res = self
            .client
            .put(&url)
            .header(reqwest::header::CONTENT_TYPE, "application/json")
            .body(serde_json::to_vec(contact)?)
            .send()?;

        // A 404 turns into `AppError::NotFound` through `From<reqwest::Error>`
        let res = res.error_for_status()?;
        let updated: Contact = serde_json::from_str(&res.text()?)?;
        Ok(updated)
    }

    fn delete(&self, id: &ContactId) -> Result<(), AppError> {
        let url = self.url_for(id);
        debug!(url = %url, "DELETE contact");

        self.client.delete(&url).send()?.error_for_status()?;
        Ok(())
    }
}
