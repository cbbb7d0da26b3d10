use indexmap::IndexSet;

/// The user-curated set of selected people, by slug.
///
/// Insertion order is preserved because the caption lists selected names in
/// the order they were added.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    slugs: IndexSet<String>,
}

impl Selection {
    pub fn new() -> Self {
        Selection::default()
    }

    /// Add a slug to the selection. Idempotent: a slug already present is
    /// neither duplicated nor moved.
    pub fn add(&mut self, slug: &str) {
        if !self.slugs.contains(slug) {
            self.slugs.insert(slug.to_string());
        }
    }

    /// Remove a slug, keeping the relative order of the rest. No-op when
    /// the slug is absent.
    pub fn remove(&mut self, slug: &str) {
        self.slugs.shift_remove(slug);
    }

    /// Add the slug if absent, remove it if present
    pub fn toggle(&mut self, slug: &str) {
        if self.is_selected(slug) {
            self.remove(slug);
        } else {
            self.add(slug);
        }
    }

    pub fn is_selected(&self, slug: &str) -> bool {
        self.slugs.contains(slug)
    }

    pub fn clear(&mut self) {
        self.slugs.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.slugs.is_empty()
    }

    pub fn len(&self) -> usize {
        self.slugs.len()
    }

    /// Slugs in insertion order
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.slugs.iter().map(|s| s.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn slugs(selection: &Selection) -> Vec<&str> {
        selection.iter().collect()
    }

    #[test]
    fn test_starts_empty() {
        let selection = Selection::new();
        assert!(selection.is_empty());
        assert_eq!(selection.len(), 0);
        assert!(!selection.is_selected("john-x"));
    }

    #[test]
    fn test_add_preserves_insertion_order() {
        let mut selection = Selection::new();
        selection.add("john-x");
        selection.add("mary-y");
        selection.add("ann-z");
        assert_eq!(slugs(&selection), vec!["john-x", "mary-y", "ann-z"]);
    }

    #[test]
    fn test_add_is_idempotent() {
        let mut selection = Selection::new();
        selection.add("john-x");
        selection.add("mary-y");
        selection.add("john-x");
        assert_eq!(selection.len(), 2);
        // No duplicate and no reorder
        assert_eq!(slugs(&selection), vec!["john-x", "mary-y"]);
    }

    #[test]
    fn test_remove_keeps_order_of_rest() {
        let mut selection = Selection::new();
        selection.add("john-x");
        selection.add("mary-y");
        selection.remove("john-x");
        assert_eq!(slugs(&selection), vec!["mary-y"]);
    }

    #[test]
    fn test_remove_absent_is_noop() {
        let mut selection = Selection::new();
        selection.add("john-x");
        selection.remove("nobody");
        assert_eq!(slugs(&selection), vec!["john-x"]);
    }

    #[test]
    fn test_add_then_remove_restores_prior_state() {
        let mut selection = Selection::new();
        selection.add("mary-y");
        let prior: Vec<String> = selection.iter().map(String::from).collect();

        selection.add("john-x");
        selection.remove("john-x");
        let after: Vec<String> = selection.iter().map(String::from).collect();
        // Content and order both restored
        assert_eq!(after, prior);
    }

    #[test]
    fn test_toggle() {
        let mut selection = Selection::new();
        selection.toggle("john-x");
        assert!(selection.is_selected("john-x"));
        selection.toggle("john-x");
        assert!(!selection.is_selected("john-x"));
    }

    #[test]
    fn test_clear() {
        let mut selection = Selection::new();
        selection.add("john-x");
        selection.add("mary-y");
        selection.clear();
        assert!(selection.is_empty());
    }
}
