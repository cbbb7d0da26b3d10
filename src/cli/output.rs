use serde::Serialize;
use unicode_width::UnicodeWidthStr;

use crate::model::person::Person;

// ---------------------------------------------------------------------------
// JSON output structs
// ---------------------------------------------------------------------------

#[derive(Serialize)]
pub struct PersonJson {
    pub slug: String,
    pub name: String,
    pub sex: String,
    pub born: i32,
}

#[derive(Serialize)]
pub struct ListJson {
    pub count: usize,
    pub people: Vec<PersonJson>,
}

pub fn person_to_json(person: &Person) -> PersonJson {
    PersonJson {
        slug: person.slug.clone(),
        name: person.name.clone(),
        sex: person.sex.code().to_string(),
        born: person.born,
    }
}

pub fn list_to_json(people: &[Person]) -> ListJson {
    ListJson {
        count: people.len(),
        people: people.iter().map(person_to_json).collect(),
    }
}

// ---------------------------------------------------------------------------
// Text output
// ---------------------------------------------------------------------------

/// Pad a cell to the given display width
fn pad(text: &str, width: usize) -> String {
    let used = UnicodeWidthStr::width(text);
    format!("{}{}", text, " ".repeat(width.saturating_sub(used)))
}

/// Format people as an aligned text table with a header row
pub fn format_table(people: &[Person]) -> String {
    let name_width = people
        .iter()
        .map(|p| UnicodeWidthStr::width(p.name.as_str()))
        .chain(std::iter::once(UnicodeWidthStr::width("name")))
        .max()
        .unwrap_or(4);

    let mut out = String::new();
    out.push_str(&format!("{}  sex  born\n", pad("name", name_width)));
    for person in people {
        out.push_str(&format!(
            "{}  {}    {}\n",
            pad(&person.name, name_width),
            person.sex.code(),
            person.born
        ));
    }
    out
}

/// Format a single person for `show`
pub fn format_person(person: &Person) -> String {
    format!(
        "{}\n  slug: {}\n  sex:  {}\n  born: {}\n",
        person.name,
        person.slug,
        person.sex.code(),
        person.born
    )
}
