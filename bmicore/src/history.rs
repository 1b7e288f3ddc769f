//! Session history of computed BMI values

/// A single computed value. Only [`History`] holds these.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BmiSample {
    pub value: f64,
}

/// Insertion-ordered list of every BMI computed this session.
#[derive(Debug, Clone, Default)]
pub struct History {
    samples: Vec<BmiSample>,
}

impl History {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a value to the end. No validation; callers only pass results of
    /// successful calculations.
    pub fn append(&mut self, value: f64) {
        self.samples.push(BmiSample { value });
    }

    pub fn clear(&mut self) {
        self.samples.clear();
    }

    pub fn values(&self) -> Vec<f64> {
        self.samples.iter().map(|s| s.value).collect()
    }

    pub fn last(&self) -> Option<f64> {
        self.samples.last().map(|s| s.value)
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_append_keeps_order() {
        let mut h = History::new();
        h.append(22.86);
        h.append(17.58);
        h.append(31.14);
        assert_eq!(h.len(), 3);
        assert_eq!(h.values(), vec![22.86, 17.58, 31.14]);
        assert_eq!(h.last(), Some(31.14));
    }

    #[test]
    fn test_duplicates_are_kept() {
        let mut h = History::new();
        h.append(20.0);
        h.append(20.0);
        assert_eq!(h.values(), vec![20.0, 20.0]);
    }

    #[test]
    fn test_clear() {
        let mut h = History::new();
        h.append(22.86);
        h.append(17.58);
        h.clear();
        assert!(h.is_empty());
        assert_eq!(h.len(), 0);
        assert_eq!(h.last(), None);
        // clearing an empty history is fine
        h.clear();
        assert!(h.values().is_empty());
    }
}
