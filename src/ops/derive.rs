use crate::model::person::{Person, Sex};

/// Gender filter applied to the record list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GenderFilter {
    #[default]
    All,
    Male,
    Female,
}

impl GenderFilter {
    /// Whether a person passes this filter
    pub fn matches(self, sex: Sex) -> bool {
        match self {
            GenderFilter::All => true,
            GenderFilter::Male => sex == Sex::Male,
            GenderFilter::Female => sex == Sex::Female,
        }
    }
}

/// Which column the table is sorted by
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortKind {
    /// Source order
    #[default]
    None,
    /// By name
    Alphabetical,
    /// By birth year, ascending
    ByBirthYear,
}

/// Text and gender filters, mutated by the UI controls
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FilterState {
    /// Free-text name query; empty means no text filter
    pub query: String,
    pub gender: GenderFilter,
}

impl FilterState {
    pub fn reset(&mut self) {
        *self = FilterState::default();
    }
}

/// Sort column and direction, mutated by the UI controls.
///
/// Changing the sort kind deliberately leaves `reversed` untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SortState {
    pub kind: SortKind,
    pub reversed: bool,
}

impl SortState {
    pub fn reset(&mut self) {
        *self = SortState::default();
    }
}

/// Normalize a name or query for matching: trimmed and lowercased
fn normalize(text: &str) -> String {
    text.trim().to_lowercase()
}

/// Sort key for alphabetical ordering. Case-folded so that ordering is
/// insensitive to case, the closest stdlib analogue of locale collation.
fn name_key(person: &Person) -> String {
    person.name.to_lowercase()
}

/// Derive the visible record list from the full record source.
///
/// Filters run before sorts so comparators never see excluded records:
/// 1. text query (substring over normalized names)
/// 2. gender
/// 3. sort by name or birth year (stable; ties keep source order)
/// 4. reverse
///
/// Pure and copy-based: the input slice is never mutated, and identical
/// inputs always produce identical output.
pub fn visible_people(
    people: &[Person],
    filter: &FilterState,
    sort: &SortState,
) -> Vec<Person> {
    let mut visible: Vec<Person> = people.to_vec();

    let query = normalize(&filter.query);
    if !query.is_empty() {
        visible.retain(|person| normalize(&person.name).contains(&query));
    }

    if filter.gender != GenderFilter::All {
        visible.retain(|person| filter.gender.matches(person.sex));
    }

    match sort.kind {
        SortKind::None => {}
        SortKind::Alphabetical => visible.sort_by_key(name_key),
        SortKind::ByBirthYear => visible.sort_by_key(|person| person.born),
    }

    if sort.reversed {
        visible.reverse();
    }

    visible
}
