pub use crate::cli::{command, run_app};
pub use crate::domain::{
    Confirmation, Contact, ContactId, ContactManager, Country, CountryMatches, Course,
    NewContact, Notice, NoticeKind, Outcome, Part,
    confirm::RecordingConfirmation,
    contact::{self, names_match},
    search_countries,
};
pub use crate::errors::AppError;
pub use crate::storage::{
    self, RemoteContactStore, StorageMediums,
    countries::{CountrySource, RestCountries},
    memory::MemoryStorage,
    parse_storage_type,
    remote::RemoteStorage,
};
