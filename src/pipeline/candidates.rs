use std::collections::HashSet;

/// Ordered, duplicate-free accumulator for candidate URLs.
///
/// Uniqueness is by exact string equality; output order is first-insertion
/// order, so results are reproducible across runs.
#[derive(Debug, Default)]
pub struct CandidateSet {
    ordered: Vec<String>,
    seen: HashSet<String>,
}

impl CandidateSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a candidate, returning false if it was already present.
    pub fn insert(&mut self, candidate: String) -> bool {
        if !self.seen.insert(candidate.clone()) {
            return false;
        }
        self.ordered.push(candidate);
        true
    }

    pub fn len(&self) -> usize {
        self.ordered.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ordered.is_empty()
    }

    /// Consumes the set, yielding candidates in insertion order.
    pub fn into_vec(self) -> Vec<String> {
        self.ordered
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_preserves_insertion_order() {
        let mut set = CandidateSet::new();
        set.insert("https://b.com".to_string());
        set.insert("https://a.com".to_string());

        assert_eq!(set.into_vec(), vec!["https://b.com", "https://a.com"]);
    }

    #[test]
    fn test_rejects_duplicates() {
        let mut set = CandidateSet::new();
        assert!(set.insert("https://a.com".to_string()));
        assert!(!set.insert("https://a.com".to_string()));

        assert_eq!(set.len(), 1);
    }
}
