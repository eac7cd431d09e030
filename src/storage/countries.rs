use crate::helper::parse_base_url;
use crate::prelude::{AppError, Country};
use reqwest::blocking;
use tracing::debug;

pub trait CountrySource {
    fn fetch_all(&self) -> Result<Vec<Country>, AppError>;
}

/// Public restcountries mirror that only serves the full list.
pub struct RestCountries {
    pub url: String,
    client: blocking::Client,
}

impl RestCountries {
    pub fn new(url: &str) -> Result<Self, AppError> {
        Ok(Self {
            url: parse_base_url(url)?.to_string(),
            client: blocking::Client::new(),
        })
    }
}

impl CountrySource for RestCountries {
    fn fetch_all(&self) -> Result<Vec<Country>, AppError> {
        debug!(url = %self.url, "GET countries");
        let res = self.client.get(&self.url).send()?.error_for_status()?;

        let countries: Vec<Country> = serde_json::from_str(&res.text()?)?;
        Ok(countries)
    }
}
