/// Lowercased, trimmed form of the search box contents.
pub fn normalize(term: &str) -> String {
    term.trim().to_lowercase()
}

/// Case-insensitive substring match; an empty needle matches everything.
pub fn matches(haystack: &str, needle: &str) -> bool {
    needle.is_empty() || haystack.to_lowercase().contains(needle)
}

/// Keeps the records whose haystack contains the search term, in input
/// order. An empty or whitespace-only term returns the input unchanged.
pub fn filter_by_term<'a, T, F>(records: &'a [T], term: &str, haystack: F) -> Vec<&'a T>
where
    F: Fn(&T) -> String,
{
    let needle = normalize(term);
    records
        .iter()
        .filter(|record| matches(&haystack(record), &needle))
        .collect()
}

#[cfg(test)]
mod test {
    use super::*;

    fn names() -> Vec<String> {
        vec![
            "NADI Kampung Baru".to_string(),
            "NADI Taman Melati".to_string(),
            "Pusat Internet Kota Kinabalu".to_string(),
        ]
    }

    #[test]
    fn empty_term_is_identity() {
        let names = names();
        assert_eq!(filter_by_term(&names, "", |n| n.clone()).len(), 3);
        assert_eq!(filter_by_term(&names, "   ", |n| n.clone()).len(), 3);
    }

    #[test]
    fn match_is_case_insensitive() {
        let names = names();
        let filtered = filter_by_term(&names, "nadi", |n| n.clone());
        assert_eq!(filtered.len(), 2);
        let filtered = filter_by_term(&names, "KOTA", |n| n.clone());
        assert_eq!(filtered.len(), 1);
    }

    #[test]
    fn no_match_yields_empty() {
        let names = names();
        assert!(filter_by_term(&names, "penang", |n| n.clone()).is_empty());
    }
}
