use crate::model::person::Person;
use crate::ops::derive::{FilterState, GenderFilter, SortKind, SortState};
use crate::ops::selection::Selection;

/// One table row: a visible person plus its selection flag
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Row<'a> {
    pub person: &'a Person,
    pub is_selected: bool,
}

/// Which controls the renderer should highlight as active
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Controls {
    pub gender: GenderFilter,
    pub sort_kind: SortKind,
    pub reversed: bool,
    /// A non-empty text query is in effect
    pub query_active: bool,
}

/// Pair each visible person with its selection flag, in derived order
pub fn rows<'a>(visible: &'a [Person], selection: &Selection) -> Vec<Row<'a>> {
    visible
        .iter()
        .map(|person| Row {
            person,
            is_selected: selection.is_selected(&person.slug),
        })
        .collect()
}

/// Build the table caption: selected names comma-joined in the order they
/// were added, or the placeholder when nothing is selected.
///
/// Names are resolved against the full record source, not the visible list,
/// so a selected person stays in the caption while filtered out of view.
pub fn caption(selection: &Selection, people: &[Person], placeholder: &str) -> String {
    if selection.is_empty() {
        return placeholder.to_string();
    }
    let names: Vec<&str> = selection
        .iter()
        .filter_map(|slug| {
            people
                .iter()
                .find(|person| person.slug == slug)
                .map(|person| person.name.as_str())
        })
        .collect();
    names.join(", ")
}

/// Derive control-highlight flags from the current filter/sort state
pub fn controls(filter: &FilterState, sort: &SortState) -> Controls {
    Controls {
        gender: filter.gender,
        sort_kind: sort.kind,
        reversed: sort.reversed,
        query_active: !filter.query.trim().is_empty(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::person::Sex;

    fn sample_people() -> Vec<Person> {
        vec![
            Person::new("bob-a-1990", "Bob", Sex::Male, 1990),
            Person::new("ann-b-1985", "Ann", Sex::Female, 1985),
        ]
    }

    #[test]
    fn test_rows_mark_selected() {
        let people = sample_people();
        let mut selection = Selection::new();
        selection.add("ann-b-1985");

        let rows = rows(&people, &selection);
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].person.name, "Bob");
        assert!(!rows[0].is_selected);
        assert_eq!(rows[1].person.name, "Ann");
        assert!(rows[1].is_selected);
    }

    #[test]
    fn test_caption_placeholder_when_empty() {
        let people = sample_people();
        let selection = Selection::new();
        assert_eq!(caption(&selection, &people, "No one selected"), "No one selected");
    }

    #[test]
    fn test_caption_joins_names_in_add_order() {
        let people = sample_people();
        let mut selection = Selection::new();
        // Added Ann first, then Bob; caption follows add order, not table order
        selection.add("ann-b-1985");
        selection.add("bob-a-1990");
        assert_eq!(caption(&selection, &people, "No one selected"), "Ann, Bob");
    }

    #[test]
    fn test_caption_after_remove() {
        let people = sample_people();
        let mut selection = Selection::new();
        selection.add("bob-a-1990");
        selection.add("ann-b-1985");
        selection.remove("bob-a-1990");
        assert_eq!(caption(&selection, &people, "No one selected"), "Ann");
    }

    #[test]
    fn test_controls_flags() {
        let filter = FilterState {
            query: "  ".to_string(),
            gender: GenderFilter::Female,
        };
        let sort = SortState {
            kind: SortKind::ByBirthYear,
            reversed: true,
        };
        let controls = controls(&filter, &sort);
        assert_eq!(controls.gender, GenderFilter::Female);
        assert_eq!(controls.sort_kind, SortKind::ByBirthYear);
        assert!(controls.reversed);
        // Whitespace-only query is not an active filter
        assert!(!controls.query_active);
    }
}
