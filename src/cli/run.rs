use super::{Terminal, display_contact, shell};
use crate::{
    domain::course,
    helper,
    prelude::{
        AppError, Confirmation, Contact, ContactManager, CountryMatches, CountrySource, Course,
        Notice, Outcome, RestCountries, StorageMediums,
        command::{Cli, Commands},
        parse_storage_type, search_countries,
    },
};
use clap::Parser;
use std::fs;
use std::io::{self, BufRead, Write};
use std::path::Path;
use tracing::debug;

pub fn run_app() -> Result<(), AppError> {
    helper::load_env();
    let cli = Cli::parse();
    helper::init_logger(&cli.log_level)?;

    let stdin = io::stdin();
    let mut term = Terminal::new(stdin.lock(), io::stdout());
    execute(cli, &mut term)
}

pub fn execute<R: BufRead, W: Write>(cli: Cli, term: &mut Terminal<R, W>) -> Result<(), AppError> {
    match cli.command {
        Commands::Countries { query } => {
            let source = RestCountries::new(&cli.countries_url)?;
            show_countries(&query, &source, term)
        }

        Commands::Courses { file } => {
            let courses = load_courses(file.as_deref())?;
            show_courses(&courses, term)
        }

        Commands::Shell => {
            let mut manager = build_manager(&cli.storage_choice, &cli.url)?;

            // The shell still starts with an empty list if the server is down.
            if let Err(err) = manager.load() {
                term.show_notice(&Notice::from(&err))?;
            }
            shell::run_shell(&mut manager, term)
        }

        Commands::List => {
            let manager = loaded_manager(&cli.storage_choice, &cli.url)?;
            print_contacts(manager.contact_list().iter(), term, "No contact yet")
        }

        Commands::Search { query } => {
            let manager = loaded_manager(&cli.storage_choice, &cli.url)?;
            print_contacts(
                manager.filter(&query).into_iter(),
                term,
                &format!("Couldn't find a name with {}", query),
            )
        }

        Commands::Add { name, number, yes } => {
            let mut manager = loaded_manager(&cli.storage_choice, &cli.url)?;

            let outcome = if yes {
                manager.upsert(&name, &number, &mut true)?
            } else {
                manager.upsert(&name, &number, term)?
            };
            report_outcome(&outcome, term)
        }

        Commands::Delete { name, yes } => {
            let mut manager = loaded_manager(&cli.storage_choice, &cli.url)?;

            let outcome = if yes {
                delete_by_name(&mut manager, &name, &mut true)?
            } else {
                delete_by_name(&mut manager, &name, term)?
            };
            report_outcome(&outcome, term)
        }
    }
}

fn build_manager(storage_choice: &str, url: &str) -> Result<ContactManager, AppError> {
    let medium = StorageMediums::from(storage_choice)?;
    debug!(medium = medium.is_which(), url, "opening contact storage");

    Ok(ContactManager::new(parse_storage_type(medium, url)?))
}

fn loaded_manager(storage_choice: &str, url: &str) -> Result<ContactManager, AppError> {
    let mut manager = build_manager(storage_choice, url)?;
    manager.load()?;
    Ok(manager)
}

pub(crate) fn delete_by_name(
    manager: &mut ContactManager,
    name: &str,
    confirmation: &mut dyn Confirmation,
) -> Result<Outcome, AppError> {
    let contact = manager
        .find_by_name(name.trim())
        .cloned()
        .ok_or_else(|| AppError::NotFound(format!("Contact '{}'", name.trim())))?;

    manager.remove(&contact.id, &contact.name, confirmation)
}

pub(crate) fn report_outcome<R: BufRead, W: Write>(
    outcome: &Outcome,
    term: &mut Terminal<R, W>,
) -> Result<(), AppError> {
    match Notice::from_outcome(outcome) {
        Some(notice) => term.show_notice(&notice),
        None => term.say("Cancelled"),
    }
}

pub(crate) fn print_contacts<'a, R: BufRead, W: Write>(
    contacts: impl Iterator<Item = &'a Contact>,
    term: &mut Terminal<R, W>,
    when_empty: &str,
) -> Result<(), AppError> {
    let mut printed = 0;
    for (mut i, c) in contacts.enumerate() {
        i += 1;
        term.say(&format!("{i:>3}. {}", display_contact(c)))?;
        printed = i;
    }

    if printed == 0 {
        term.say(when_empty)?;
    }
    Ok(())
}

pub fn show_countries<R: BufRead, W: Write>(
    query: &str,
    source: &dyn CountrySource,
    term: &mut Terminal<R, W>,
) -> Result<(), AppError> {
    if query.is_empty() {
        return term.say("Type part of a country name");
    }

    let countries = source.fetch_all()?;

    match search_countries(query, &countries) {
        CountryMatches::Empty => term.say("Type part of a country name"),
        CountryMatches::NoMatch => term.say(&format!("No country matches '{}'", query)),
        CountryMatches::TooMany(_) => term.say("Too many matches, be more specific."),
        CountryMatches::Several(names) => {
            for name in names {
                term.say(&name)?;
            }
            Ok(())
        }
        CountryMatches::Single(country) => {
            term.say(country.common_name())?;
            term.say(&format!("capital {}", country.capital_or_na()))?;
            if let Some(area) = country.area {
                term.say(&format!("area {}", area))?;
            }
            term.say(&format!("languages {}", country.language_list()))?;
            term.say(&format!("flag {}", country.flags.png))
        }
    }
}

fn load_courses(file: Option<&Path>) -> Result<Vec<Course>, AppError> {
    match file {
        Some(path) => {
            debug!(path = %path.display(), "reading courses");
            course::parse_courses(&fs::read_to_string(path)?)
        }
        None => course::sample_courses(),
    }
}

pub fn show_courses<R: BufRead, W: Write>(
    courses: &[Course],
    term: &mut Terminal<R, W>,
) -> Result<(), AppError> {
    if courses.is_empty() {
        return term.say("No courses");
    }

    for c in courses {
        term.say(&c.name)?;
        for part in &c.parts {
            term.say(&format!("{} {}", part.name, part.exercises))?;
        }
        term.say(&format!("Total exercises: {}", c.total_exercises()))?;
    }
    Ok(())
}
