//! Requested field lists

/// Ordered, de-duplicated set of requested top-level field names.
///
/// Names are matched case-sensitively against declared wire names. An empty
/// selection means "all fields".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldSelection {
    names: Vec<String>,
}

impl FieldSelection {
    /// Selects every field
    pub fn all() -> Self {
        Self::default()
    }

    /// Parses a comma separated list such as `"tracking_number, weight"`
    pub fn parse(fields: &str) -> Self {
        fields.split(',').collect()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.names.iter().any(|n| n == name)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }
}

impl<'s> FromIterator<&'s str> for FieldSelection {
    fn from_iter<I: IntoIterator<Item = &'s str>>(iter: I) -> Self {
        let mut names: Vec<String> = Vec::new();
        for name in iter {
            let name = name.trim();
            if !name.is_empty() && !names.iter().any(|n| n == name) {
                names.push(name.to_string());
            }
        }
        Self { names }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_trims_and_dedupes() {
        let selection = FieldSelection::parse(" tracking_number, weight,,tracking_number ");
        assert_eq!(selection.iter().collect::<Vec<_>>(), vec!["tracking_number", "weight"]);
    }

    #[test]
    fn test_empty_input_selects_all() {
        assert!(FieldSelection::parse("").is_empty());
        assert!(FieldSelection::parse(" , ,").is_empty());
        assert_eq!(FieldSelection::parse(""), FieldSelection::all());
    }

    #[test]
    fn test_matching_is_case_sensitive() {
        let selection = FieldSelection::parse("Weight");
        assert!(selection.contains("Weight"));
        assert!(!selection.contains("weight"));
    }
}
