use std::collections::HashSet;

/// Insertion-ordered set of SBOM identifiers.
///
/// Invariant: `order` holds every identifier of `seen` exactly once, in
/// order of first insertion.
#[derive(Debug, Clone, Default)]
pub struct SbomIdSet {
    order: Vec<String>,
    seen: HashSet<String>,
}

impl SbomIdSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts `id`, returning `false` if it was already present
    pub fn insert(&mut self, id: &str) -> bool {
        if self.seen.contains(id) {
            return false;
        }
        self.seen.insert(id.to_string());
        self.order.push(id.to_string());
        true
    }

    /// Inserts every identifier of `ids` and returns how many were new.
    /// Duplicates inside `ids` itself count once.
    pub fn extend_new<'a, I>(&mut self, ids: I) -> usize
    where
        I: IntoIterator<Item = &'a str>,
    {
        ids.into_iter().filter(|id| self.insert(id)).count()
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.order.iter().map(String::as_str)
    }

    pub fn into_vec(self) -> Vec<String> {
        self.order
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_preserves_first_seen_order() {
        let mut ids = SbomIdSet::new();
        assert!(ids.insert("c"));
        assert!(ids.insert("a"));
        assert!(!ids.insert("c"));
        assert!(ids.insert("b"));

        assert_eq!(ids.into_vec(), vec!["c", "a", "b"]);
    }

    #[test]
    fn test_extend_new_counts_only_new_ids() {
        let mut ids = SbomIdSet::new();
        assert_eq!(ids.extend_new(["a", "b"]), 2);
        assert_eq!(ids.extend_new(["b", "c", "a", "d"]), 2);
        assert_eq!(ids.iter().collect::<Vec<_>>(), vec!["a", "b", "c", "d"]);
    }

    #[test]
    fn test_extend_new_dedupes_within_batch() {
        let mut ids = SbomIdSet::new();
        assert_eq!(ids.extend_new(["x", "x", "y", "x"]), 2);
        assert_eq!(ids.len(), 2);
    }

    #[test]
    fn test_empty_set() {
        let ids = SbomIdSet::new();
        assert!(ids.is_empty());
        assert_eq!(ids.iter().count(), 0);
    }
}
