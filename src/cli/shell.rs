use super::Terminal;
use super::run::{delete_by_name, print_contacts, report_outcome};
use crate::prelude::{AppError, ContactManager, Notice};
use std::io::{BufRead, Write};

enum MenuChoice {
    Add,
    List,
    Search,
    Delete,
    Reload,
    Exit,
}

fn parse_menu_choice(input: &str) -> Result<MenuChoice, AppError> {
    match input {
        "1" => Ok(MenuChoice::Add),
        "2" => Ok(MenuChoice::List),
        "3" => Ok(MenuChoice::Search),
        "4" => Ok(MenuChoice::Delete),
        "5" => Ok(MenuChoice::Reload),
        "6" => Ok(MenuChoice::Exit),
        _ => Err(AppError::Validation(format!("Unrecognized command: '{}'", input))),
    }
}

const MENU: &str = "\n1. Add contact\n2. List contacts\n3. Search\n4. Delete contact\n5. Reload from server\n6. Exit";

/// Menu loop over one session. The list is whatever `manager` already
/// holds; failures are shown as notices and the loop carries on.
pub fn run_shell<R: BufRead, W: Write>(
    manager: &mut ContactManager,
    term: &mut Terminal<R, W>,
) -> Result<(), AppError> {
    term.say("\n--- PHONEBOOK ---")?;

    'outerloop: loop {
        let Some(action) = term.ask(MENU)? else {
            break 'outerloop;
        };

        let choice = match parse_menu_choice(&action) {
            Ok(choice) => choice,
            Err(err) => {
                term.show_notice(&Notice::from(&err))?;
                continue 'outerloop;
            }
        };

        let result = match choice {
            MenuChoice::Add => {
                let Some(name) = term.ask("Enter contact name (* to go back):")? else {
                    break 'outerloop;
                };
                if name == "*" {
                    continue 'outerloop;
                }
                let Some(number) = term.ask("Enter contact number:")? else {
                    break 'outerloop;
                };

                manager
                    .upsert(&name, &number, term)
                    .and_then(|outcome| report_outcome(&outcome, term))
            }
            MenuChoice::List => {
                print_contacts(manager.contact_list().iter(), term, "No contact in phonebook")
            }
            MenuChoice::Search => {
                let Some(query) = term.ask("Filter shown with:")? else {
                    break 'outerloop;
                };
                let found = manager.filter(&query);
                print_contacts(found.into_iter(), term, "No match")
            }
            MenuChoice::Delete => {
                let Some(name) = term.ask("Name of contact to delete (* to go back):")? else {
                    break 'outerloop;
                };
                if name == "*" {
                    continue 'outerloop;
                }

                delete_by_name(manager, &name, term)
                    .and_then(|outcome| report_outcome(&outcome, term))
            }
            MenuChoice::Reload => manager
                .load()
                .and_then(|_| term.say(&format!("Loaded {} contacts", manager.len()))),
            MenuChoice::Exit => break 'outerloop,
        };

        if let Err(err) = result {
            term.show_notice(&Notice::from(&err))?;
        }
    }

    term.say("Bye!")
}
