use std::fs;
use std::path::{Path, PathBuf};

use crate::model::person::Person;

/// The dataset bundled into the binary, used when no --file is given
const DEFAULT_PEOPLE_JSON: &str = include_str!("../../assets/people.json");

/// Error type for record-source loading
#[derive(Debug, thiserror::Error)]
pub enum PeopleError {
    #[error("could not read {path}: {source}")]
    ReadError {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("could not parse people data: {0}")]
    ParseError(#[from] serde_json::Error),
}

/// Load a record source from a JSON file: an array of person objects with
/// `slug`, `name`, `sex` ("m"/"f"), and `born` fields.
pub fn load_people(path: &Path) -> Result<Vec<Person>, PeopleError> {
    let text = fs::read_to_string(path).map_err(|e| PeopleError::ReadError {
        path: path.to_path_buf(),
        source: e,
    })?;
    let people: Vec<Person> = serde_json::from_str(&text)?;
    Ok(people)
}

/// The embedded default dataset. The asset is validated by tests, so a
/// parse failure here is a build defect rather than a runtime condition.
pub fn default_people() -> Vec<Person> {
    serde_json::from_str(DEFAULT_PEOPLE_JSON)
        .unwrap_or_else(|e| panic!("embedded people.json is invalid: {}", e))
}

/// Load from the given path, or fall back to the embedded dataset
pub fn load_or_default(path: Option<&Path>) -> Result<Vec<Person>, PeopleError> {
    match path {
        Some(p) => load_people(p),
        None => Ok(default_people()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::person::Sex;
    use tempfile::TempDir;

    #[test]
    fn test_default_people_parses_and_is_nonempty() {
        let people = default_people();
        assert!(!people.is_empty());
        // Identity field present on every record
        assert!(people.iter().all(|p| !p.slug.is_empty()));
    }

    #[test]
    fn test_load_people_from_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("people.json");
        fs::write(
            &path,
            r#"[
                {"slug":"bob-a-1990","name":"Bob","sex":"m","born":1990},
                {"slug":"ann-b-1985","name":"Ann","sex":"f","born":1985}
            ]"#,
        )
        .unwrap();

        let people = load_people(&path).unwrap();
        assert_eq!(people.len(), 2);
        assert_eq!(people[0].name, "Bob");
        assert_eq!(people[1].sex, Sex::Female);
    }

    #[test]
    fn test_load_people_missing_file() {
        let dir = TempDir::new().unwrap();
        let err = load_people(&dir.path().join("nope.json")).unwrap_err();
        assert!(matches!(err, PeopleError::ReadError { .. }));
    }

    #[test]
    fn test_load_people_malformed_json() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("people.json");
        fs::write(&path, "not json {{{").unwrap();
        let err = load_people(&path).unwrap_err();
        assert!(matches!(err, PeopleError::ParseError(_)));
    }

    #[test]
    fn test_load_or_default_falls_back() {
        let people = load_or_default(None).unwrap();
        assert_eq!(people, default_people());
    }
}
