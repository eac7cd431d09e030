use std::cell::{Cell, RefCell};
use std::rc::Rc;

use rusty_phonebook::prelude::*;

/// Backend double: keeps contacts in a list, records every call and can be
/// told to fail the next one.
#[derive(Default)]
struct Backend {
    contacts: RefCell<Vec<Contact>>,
    next_error: RefCell<Option<AppError>>,
    calls: RefCell<Vec<&'static str>>,
    last_id: Cell<u32>,
}

impl Backend {
    fn seeded(contacts: Vec<Contact>) -> Rc<Self> {
        let backend = Backend {
            last_id: Cell::new(100),
            ..Default::default()
        };
        *backend.contacts.borrow_mut() = contacts;
        Rc::new(backend)
    }

    fn fail_next(&self, err: AppError) {
        *self.next_error.borrow_mut() = Some(err);
    }

    fn calls(&self) -> Vec<&'static str> {
        self.calls.borrow().clone()
    }

    fn enter(&self, call: &'static str) -> Result<(), AppError> {
        self.calls.borrow_mut().push(call);
        match self.next_error.borrow_mut().take() {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }
}

struct MockStorage(Rc<Backend>);

impl RemoteContactStore for MockStorage {
    fn list(&self) -> Result<Vec<Contact>, AppError> {
        self.0.enter("list")?;
        Ok(self.0.contacts.borrow().clone())
    }

    fn create(&self, contact: &NewContact) -> Result<Contact, AppError> {
        self.0.enter("create")?;
        self.0.last_id.set(self.0.last_id.get() + 1);

        let created = Contact::new(
            self.0.last_id.get().to_string(),
            &contact.name,
            &contact.number,
        );
        self.0.contacts.borrow_mut().push(created.clone());
        Ok(created)
    }

    fn update(&self, id: &ContactId, contact: &NewContact) -> Result<Contact, AppError> {
        self.0.enter("update")?;
        let mut contacts = self.0.contacts.borrow_mut();
        let stored = contacts
            .iter_mut()
            .find(|c| &c.id == id)
            .ok_or_else(|| AppError::NotFound(id.to_string()))?;

        stored.name = contact.name.clone();
        stored.number = contact.number.clone();
        Ok(stored.clone())
    }

    fn delete(&self, id: &ContactId) -> Result<(), AppError> {
        self.0.enter("delete")?;
        let mut contacts = self.0.contacts.borrow_mut();
        let before = contacts.len();
        contacts.retain(|c| &c.id != id);

        if contacts.len() == before {
            return Err(AppError::NotFound(id.to_string()));
        }
        Ok(())
    }

    fn get_medium(&self) -> &str {
        "mock"
    }
}

fn manager_over(backend: &Rc<Backend>) -> Result<ContactManager, AppError> {
    let mut manager = ContactManager::new(Box::new(MockStorage(Rc::clone(backend))));
    manager.load()?;
    Ok(manager)
}

fn ann() -> Contact {
    Contact::new(1, "Ann", "040-1")
}

fn connection_error() -> AppError {
    AppError::Connection("connection refused".to_string())
}

#[test]
fn distinct_names_give_one_contact_each_in_insertion_order() -> Result<(), AppError> {
    let backend = Backend::seeded(vec![]);
    let mut manager = manager_over(&backend)?;

    for (name, number) in [("Ann", "1"), ("Bob", "2"), ("Cid", "3"), ("Dee", "4")] {
        let outcome = manager.upsert(name, number, &mut false)?;
        assert!(matches!(outcome, Outcome::Created(_)));
    }

    let names: Vec<&str> = manager.contact_list().iter().map(|c| c.name.as_str()).collect();
    assert_eq!(names, vec!["Ann", "Bob", "Cid", "Dee"]);
    assert_eq!(manager.contact_list()[0].id, ContactId::from(101));
    Ok(())
}

#[test]
fn existing_name_without_confirmation_changes_nothing() -> Result<(), AppError> {
    let backend = Backend::seeded(vec![ann(), Contact::new(2, "Bob", "040-2")]);
    let mut manager = manager_over(&backend)?;
    let before = manager.contact_list().to_vec();

    let outcome = manager.upsert("Ann", "040-9", &mut false)?;

    assert_eq!(outcome, Outcome::Cancelled);
    assert_eq!(manager.contact_list(), before.as_slice());
    assert_eq!(backend.calls(), vec!["list"]);
    Ok(())
}

#[test]
fn duplicate_detection_ignores_case() -> Result<(), AppError> {
    let backend = Backend::seeded(vec![ann()]);
    let mut manager = manager_over(&backend)?;
    let mut confirm = RecordingConfirmation::answering(false);

    manager.upsert("  aNN ", "040-9", &mut confirm)?;

    assert_eq!(confirm.asked.len(), 1);
    assert_eq!(manager.len(), 1);
    Ok(())
}

#[test]
fn confirmed_update_replaces_only_the_number() -> Result<(), AppError> {
    let backend = Backend::seeded(vec![
        Contact::new(7, "Zed", "1"),
        ann(),
        Contact::new(9, "Bob", "2"),
    ]);
    let mut manager = manager_over(&backend)?;

    let outcome = manager.upsert("ANN", "040-2", &mut true)?;

    assert_eq!(outcome, Outcome::Updated(Contact::new(1, "Ann", "040-2")));
    assert_eq!(
        manager.contact_list(),
        &[
            Contact::new(7, "Zed", "1"),
            Contact::new(1, "Ann", "040-2"),
            Contact::new(9, "Bob", "2"),
        ]
    );
    // the stored spelling of the name was sent, not the typed one
    assert_eq!(backend.contacts.borrow()[1].name, "Ann");
    Ok(())
}

#[test]
fn scenario_update_existing_contact() -> Result<(), AppError> {
    let backend = Backend::seeded(vec![ann()]);
    let mut manager = manager_over(&backend)?;

    manager.upsert("Ann", "040-2", &mut true)?;

    assert_eq!(manager.contact_list(), &[Contact::new(1, "Ann", "040-2")]);
    assert_eq!(backend.calls(), vec!["list", "update"]);
    Ok(())
}

#[test]
fn update_of_contact_gone_remotely_drops_it_locally() -> Result<(), AppError> {
    let backend = Backend::seeded(vec![ann(), Contact::new(2, "Bob", "040-2")]);
    let mut manager = manager_over(&backend)?;
    backend.contacts.borrow_mut().remove(0);

    let outcome = manager.upsert("Ann", "040-2", &mut true)?;

    assert!(outcome.is_stale_conflict());
    assert_eq!(
        outcome,
        Outcome::AlreadyGone {
            id: 1.into(),
            name: "Ann".to_string()
        }
    );
    assert_eq!(manager.contact_list(), &[Contact::new(2, "Bob", "040-2")]);
    Ok(())
}

#[test]
fn failed_update_keeps_the_old_number() -> Result<(), AppError> {
    let backend = Backend::seeded(vec![ann()]);
    let mut manager = manager_over(&backend)?;
    backend.fail_next(connection_error());

    let err = manager.upsert("Ann", "040-2", &mut true).unwrap_err();

    assert!(matches!(err, AppError::Connection(_)));
    assert_eq!(manager.contact_list(), &[ann()]);
    Ok(())
}

#[test]
fn failed_create_adds_nothing() -> Result<(), AppError> {
    let backend = Backend::seeded(vec![ann()]);
    let mut manager = manager_over(&backend)?;
    backend.fail_next(connection_error());

    let err = manager.upsert("Bob", "040-2", &mut true).unwrap_err();

    assert!(matches!(err, AppError::Connection(_)));
    assert_eq!(manager.len(), 1);
    Ok(())
}

#[test]
fn blank_name_is_rejected_before_any_call() -> Result<(), AppError> {
    let backend = Backend::seeded(vec![]);
    let mut manager = manager_over(&backend)?;

    let err = manager.upsert("", "040-2", &mut true).unwrap_err();

    assert!(matches!(err, AppError::Validation(_)));
    assert_eq!(backend.calls(), vec!["list"]);
    Ok(())
}

#[test]
fn scenario_remove_contact_already_gone() -> Result<(), AppError> {
    let backend = Backend::seeded(vec![ann()]);
    let mut manager = manager_over(&backend)?;
    backend.fail_next(AppError::NotFound("1".to_string()));

    let outcome = manager.remove(&1.into(), "Ann", &mut true)?;

    assert!(outcome.is_stale_conflict());
    assert!(manager.find_by_id(&1.into()).is_none());
    assert!(manager.is_empty());
    Ok(())
}

#[test]
fn remove_without_confirmation_makes_no_call() -> Result<(), AppError> {
    let backend = Backend::seeded(vec![ann()]);
    let mut manager = manager_over(&backend)?;
    let mut confirm = RecordingConfirmation::answering(false);

    let outcome = manager.remove(&1.into(), "Ann", &mut confirm)?;

    assert_eq!(outcome, Outcome::Cancelled);
    assert_eq!(confirm.asked, vec!["Delete Ann?"]);
    assert_eq!(backend.calls(), vec!["list"]);
    assert_eq!(manager.len(), 1);
    Ok(())
}

#[test]
fn failed_remove_keeps_the_contact() -> Result<(), AppError> {
    let backend = Backend::seeded(vec![ann()]);
    let mut manager = manager_over(&backend)?;
    backend.fail_next(connection_error());

    assert!(manager.remove(&1.into(), "Ann", &mut true).is_err());
    assert_eq!(manager.contact_list(), &[ann()]);
    Ok(())
}

#[test]
fn remove_keeps_order_of_the_rest() -> Result<(), AppError> {
    let backend = Backend::seeded(vec![
        Contact::new(1, "Ann", "1"),
        Contact::new(2, "Bob", "2"),
        Contact::new(3, "Cid", "3"),
    ]);
    let mut manager = manager_over(&backend)?;

    let outcome = manager.remove(&2.into(), "Bob", &mut true)?;

    assert_eq!(outcome, Outcome::Removed(Contact::new(2, "Bob", "2")));
    let ids: Vec<&str> = manager.contact_list().iter().map(|c| c.id.as_str()).collect();
    assert_eq!(ids, vec!["1", "3"]);
    Ok(())
}

#[test]
fn failed_reload_keeps_the_current_list() -> Result<(), AppError> {
    let backend = Backend::seeded(vec![ann()]);
    let mut manager = manager_over(&backend)?;
    backend.fail_next(connection_error());

    assert!(manager.load().is_err());
    assert_eq!(manager.contact_list(), &[ann()]);
    Ok(())
}

#[test]
fn failed_initial_load_leaves_an_empty_list() {
    let backend = Backend::seeded(vec![ann()]);
    backend.fail_next(connection_error());

    let mut manager = ContactManager::new(Box::new(MockStorage(Rc::clone(&backend))));

    assert!(manager.load().is_err());
    assert!(manager.is_empty());
}

#[test]
fn filter_is_a_case_insensitive_view() -> Result<(), AppError> {
    let backend = Backend::seeded(vec![
        ann(),
        Contact::new(2, "Dan Abramov", "2"),
        Contact::new(3, "Arto Hellas", "3"),
    ]);
    let manager = manager_over(&backend)?;

    let all: Vec<&Contact> = manager.contact_list().iter().collect();
    assert_eq!(manager.filter(""), all);

    let names: Vec<&str> = manager.filter("AN").iter().map(|c| c.name.as_str()).collect();
    assert_eq!(names, vec!["Ann", "Dan Abramov"]);

    // reading does not touch the list or the backend
    assert_eq!(manager.filter("AN"), manager.filter("AN"));
    assert_eq!(backend.calls(), vec!["list"]);
    Ok(())
}
