pub mod confirm;
pub mod contact;
pub mod country;
pub mod course;
pub mod manager;
pub mod notice;
pub mod outcome;

pub use confirm::Confirmation;
pub use contact::{Contact, ContactId, NewContact};
pub use country::{Country, CountryMatches, search_countries};
pub use course::{Course, Part};
pub use manager::ContactManager;
pub use notice::{Notice, NoticeKind};
pub use outcome::Outcome;
