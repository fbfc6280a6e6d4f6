use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Vocabulary index → non-negative weight. Absent indices are zero.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SparseVector {
    entries: BTreeMap<usize, f64>,
}

impl SparseVector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Zero weights are not stored.
    pub fn insert(&mut self, index: usize, weight: f64) {
        if weight != 0.0 {
            self.entries.insert(index, weight);
        }
    }

    pub fn get(&self, index: usize) -> f64 {
        self.entries.get(&index).copied().unwrap_or(0.0)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (usize, f64)> + '_ {
        self.entries.iter().map(|(&i, &w)| (i, w))
    }

    pub fn indices(&self) -> impl Iterator<Item = usize> + '_ {
        self.entries.keys().copied()
    }

    pub fn norm(&self) -> f64 {
        self.entries.values().map(|w| w * w).sum::<f64>().sqrt()
    }

    /// Indices present in only one vector contribute zero.
    pub fn dot(&self, other: &SparseVector) -> f64 {
        let (small, large) = if self.len() <= other.len() {
            (self, other)
        } else {
            (other, self)
        };
        small.iter().map(|(i, w)| w * large.get(i)).sum()
    }
}

impl FromIterator<(usize, f64)> for SparseVector {
    fn from_iter<T: IntoIterator<Item = (usize, f64)>>(iter: T) -> Self {
        let mut vector = SparseVector::new();
        for (index, weight) in iter {
            vector.insert(index, weight);
        }
        vector
    }
}

/// cos(θ) = a·b / (‖a‖ ‖b‖), clamped to [0, 1].
///
/// Exactly 0.0 when either vector is empty or has zero norm.
pub fn cosine_similarity(a: &SparseVector, b: &SparseVector) -> f64 {
    if a.is_empty() || b.is_empty() {
        return 0.0;
    }

    let norm_a = a.norm();
    let norm_b = b.norm();
    if norm_a == 0.0 || norm_b == 0.0 {
        return 0.0;
    }

    (a.dot(b) / (norm_a * norm_b)).clamp(0.0, 1.0)
}
