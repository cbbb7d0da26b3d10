use std::path::Path;

use crate::cli::commands::{Cli, Commands, ListArgs, ShowArgs};
use crate::cli::output;
use crate::io::people_io;
use crate::model::person::{Person, Sex};
use crate::ops::derive::{FilterState, GenderFilter, SortKind, SortState, visible_people};

// ---------------------------------------------------------------------------
// Dispatch
// ---------------------------------------------------------------------------

pub fn dispatch(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let json = cli.json;
    let people = load_people_arg(cli.file.as_deref())?;

    match cli.command {
        None => unreachable!("main launches the TUI when no subcommand is given"),
        Some(Commands::List(args)) => cmd_list(&people, args, json),
        Some(Commands::Show(args)) => cmd_show(&people, args, json),
    }
}

fn load_people_arg(file: Option<&str>) -> Result<Vec<Person>, Box<dyn std::error::Error>> {
    Ok(people_io::load_or_default(file.map(Path::new))?)
}

// ---------------------------------------------------------------------------
// Commands
// ---------------------------------------------------------------------------

fn cmd_list(
    people: &[Person],
    args: ListArgs,
    json: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let filter = FilterState {
        query: args.query.unwrap_or_default(),
        gender: parse_gender(args.gender.as_deref())?,
    };
    let sort = SortState {
        kind: parse_sort(args.sort.as_deref())?,
        reversed: args.reverse,
    };

    let visible = visible_people(people, &filter, &sort);

    if json {
        println!("{}", serde_json::to_string_pretty(&output::list_to_json(&visible))?);
    } else {
        print!("{}", output::format_table(&visible));
    }
    Ok(())
}

fn cmd_show(
    people: &[Person],
    args: ShowArgs,
    json: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let person = people
        .iter()
        .find(|p| p.slug == args.slug)
        .ok_or_else(|| format!("no person with slug '{}'", args.slug))?;

    if json {
        println!("{}", serde_json::to_string_pretty(&output::person_to_json(person))?);
    } else {
        print!("{}", output::format_person(person));
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Flag parsing
// ---------------------------------------------------------------------------

fn parse_gender(arg: Option<&str>) -> Result<GenderFilter, String> {
    match arg {
        None | Some("all") => Ok(GenderFilter::All),
        Some(code) => match Sex::from_code(code) {
            Some(Sex::Male) => Ok(GenderFilter::Male),
            Some(Sex::Female) => Ok(GenderFilter::Female),
            None => Err(format!("invalid gender '{}' (expected m, f, or all)", code)),
        },
    }
}

fn parse_sort(arg: Option<&str>) -> Result<SortKind, String> {
    match arg {
        None | Some("none") => Ok(SortKind::None),
        Some("name") => Ok(SortKind::Alphabetical),
        Some("born") => Ok(SortKind::ByBirthYear),
        Some(other) => Err(format!("invalid sort '{}' (expected name, born, or none)", other)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_gender() {
        assert_eq!(parse_gender(None).unwrap(), GenderFilter::All);
        assert_eq!(parse_gender(Some("all")).unwrap(), GenderFilter::All);
        assert_eq!(parse_gender(Some("m")).unwrap(), GenderFilter::Male);
        assert_eq!(parse_gender(Some("f")).unwrap(), GenderFilter::Female);
        assert!(parse_gender(Some("x")).is_err());
    }

    #[test]
    fn test_parse_sort() {
        assert_eq!(parse_sort(None).unwrap(), SortKind::None);
        assert_eq!(parse_sort(Some("none")).unwrap(), SortKind::None);
        assert_eq!(parse_sort(Some("name")).unwrap(), SortKind::Alphabetical);
        assert_eq!(parse_sort(Some("born")).unwrap(), SortKind::ByBirthYear);
        assert!(parse_sort(Some("age")).is_err());
    }
}
