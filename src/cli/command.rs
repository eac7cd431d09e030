use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::helper::{DEFAULT_COUNTRIES_URL, DEFAULT_PHONEBOOK_URL};

#[derive(Parser, Debug)]
#[command(name = "phonebook", version, about = "Phonebook backed by a REST server")]
pub struct Cli {
    /// Where contacts live (remote, mem)
    #[arg(long, env = "STORAGE_CHOICE", default_value_t = String::from("remote"))]
    pub storage_choice: String,

    /// Base url of the contact collection
    #[arg(long, env = "PHONEBOOK_URL", default_value_t = String::from(DEFAULT_PHONEBOOK_URL))]
    pub url: String,

    /// Url that returns every country
    #[arg(long, env = "COUNTRIES_URL", default_value_t = String::from(DEFAULT_COUNTRIES_URL))]
    pub countries_url: String,

    /// Log filter, e.g. "info" or "rusty_phonebook=debug"
    #[arg(long, env = "PHONEBOOK_LOG", default_value_t = String::from("warn"))]
    pub log_level: String,

    #[command(subcommand)]
    pub command: Commands,
}

/// Subcommand and their flags
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List contacts in server order
    List,

    /// Show contacts whose name contains the query (case-insensitive)
    Search {
        /// Part of a name
        #[arg(default_value_t = String::new())]
        query: String,
    },

    /// Add a contact, or replace the number of an existing one
    Add {
        /// Contact name
        #[arg(long)]
        name: String,

        /// Contact phone number
        #[arg(long, default_value_t = String::new())]
        number: String,

        /// Replace an existing number without asking
        #[arg(short, long)]
        yes: bool,
    },

    /// Delete a contact by name
    Delete {
        /// Name of contact to delete
        #[arg(long)]
        name: String,

        /// Delete without asking
        #[arg(short, long)]
        yes: bool,
    },

    /// Look up countries by name
    Countries {
        /// Part of a country name
        query: String,
    },

    /// Summarize courses and their exercise counts
    Courses {
        /// JSON file holding an array of courses; built-in samples if omitted
        #[arg(long)]
        file: Option<PathBuf>,
    },

    /// Interactive menu
    Shell,
}
