use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// More matches than this and the caller is asked to narrow the query.
pub const MAX_LISTED_MATCHES: usize = 10;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CountryName {
    pub common: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Flags {
    #[serde(default)]
    pub png: String,
}

/// The subset of a restcountries record this crate reads.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Country {
    pub name: CountryName,
    #[serde(default)]
    pub cca3: String,
    #[serde(default)]
    pub capital: Option<Vec<String>>,
    #[serde(default)]
    pub area: Option<f64>,
    /// Code to language name, kept in payload order.
    #[serde(default)]
    pub languages: Option<Map<String, Value>>,
    #[serde(default)]
    pub flags: Flags,
}

impl Country {
    pub fn common_name(&self) -> &str {
        &self.name.common
    }

    pub fn capital_or_na(&self) -> &str {
        self.capital
            .as_ref()
            .and_then(|c| c.first())
            .map(String::as_str)
            .unwrap_or("N/A")
    }

    pub fn language_list(&self) -> String {
        self.languages
            .as_ref()
            .map(|langs| {
                langs
                    .values()
                    .filter_map(Value::as_str)
                    .collect::<Vec<&str>>()
                    .join(", ")
            })
            .unwrap_or_default()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum CountryMatches {
    /// Empty query; nothing to look for.
    Empty,
    NoMatch,
    TooMany(usize),
    Several(Vec<String>),
    Single(Box<Country>),
}

/// Case-insensitive substring match on the common name. The query is used
/// as typed, surrounding whitespace included.
pub fn search_countries(query: &str, countries: &[Country]) -> CountryMatches {
    if query.is_empty() {
        return CountryMatches::Empty;
    }
    let query = query.to_lowercase();

    let mut matched: Vec<&Country> = countries
        .iter()
        .filter(|c| c.common_name().to_lowercase().contains(&query))
        .collect();

    match matched.len() {
        0 => CountryMatches::NoMatch,
        1 => CountryMatches::Single(Box::new(matched.remove(0).clone())),
        n if n > MAX_LISTED_MATCHES => CountryMatches::TooMany(n),
        _ => CountryMatches::Several(
            matched
                .iter()
                .map(|c| c.common_name().to_string())
                .collect(),
        ),
    }
}
