use std::collections::HashSet;

/// Prunes directories whose basename is in the exclusion set.
#[derive(Debug, Clone, Default)]
pub struct PathFilter {
    excluded_names: HashSet<String>,
}

impl PathFilter {
    pub fn new(excluded_names: HashSet<String>) -> Self {
        Self { excluded_names }
    }

    /// Exact, case-sensitive match on a single path segment.
    pub fn is_excluded(&self, directory_basename: &str) -> bool {
        self.excluded_names.contains(directory_basename)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filter(names: &[&str]) -> PathFilter {
        PathFilter::new(names.iter().map(|s| s.to_string()).collect())
    }

    #[test]
    fn empty_set_excludes_nothing() {
        let f = PathFilter::default();
        assert!(!f.is_excluded(".git"));
        assert!(!f.is_excluded(""));
    }

    #[test]
    fn matches_exact_names_only() {
        let f = filter(&[".git", "venv"]);
        assert!(f.is_excluded(".git"));
        assert!(f.is_excluded("venv"));
        assert!(!f.is_excluded("VENV"));
        assert!(!f.is_excluded("venv2"));
        assert!(!f.is_excluded("a/venv"));
    }
}
