use serde::{Deserialize, Serialize};

/// Column index into a vector space.
pub type TermId = u32;

/// Sparse vector of fixed dimensionality.
///
/// Entries are kept sorted by column with no duplicates and no explicit zeros.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TermVector {
    dim: usize,
    entries: Vec<(TermId, f32)>,
}

impl TermVector {
    pub fn zeros(dim: usize) -> Self {
        Self { dim, entries: Vec::new() }
    }

    pub fn from_dense(values: &[f32]) -> Self {
        let entries = values
            .iter()
            .enumerate()
            .filter(|(_, v)| **v != 0.0)
            .map(|(i, v)| (i as TermId, *v))
            .collect();
        Self { dim: values.len(), entries }
    }

    /// Build from (column, weight) pairs. Weights for repeated columns are summed;
    /// columns outside `dim` and non-finite weights are rejected.
    pub fn from_pairs(dim: usize, mut pairs: Vec<(TermId, f32)>) -> Option<Self> {
        if pairs.iter().any(|(c, w)| *c as usize >= dim || !w.is_finite()) {
            return None;
        }
        pairs.sort_by_key(|(c, _)| *c);
        let mut entries: Vec<(TermId, f32)> = Vec::with_capacity(pairs.len());
        for (col, w) in pairs {
            match entries.last_mut() {
                Some((last, acc)) if *last == col => *acc += w,
                _ => entries.push((col, w)),
            }
        }
        entries.retain(|(_, w)| *w != 0.0);
        Some(Self { dim, entries })
    }

    pub fn dim(&self) -> usize { self.dim }

    pub fn entries(&self) -> &[(TermId, f32)] { &self.entries }

    pub fn is_zero(&self) -> bool { self.entries.is_empty() }

    pub fn is_finite(&self) -> bool { self.entries.iter().all(|(_, w)| w.is_finite()) }

    pub fn norm(&self) -> f32 {
        self.entries.iter().map(|(_, w)| w * w).sum::<f32>().sqrt()
    }

    pub fn dot(&self, other: &TermVector) -> f32 {
        // merge walk over both sorted column lists
        let (mut i, mut j) = (0, 0);
        let mut acc = 0.0f32;
        while i < self.entries.len() && j < other.entries.len() {
            let (ca, wa) = self.entries[i];
            let (cb, wb) = other.entries[j];
            if ca == cb {
                acc += wa * wb;
                i += 1;
                j += 1;
            } else if ca < cb {
                i += 1;
            } else {
                j += 1;
            }
        }
        acc
    }

    /// Scale to unit length. The zero vector stays zero.
    pub fn normalized(mut self) -> Self {
        let norm = self.norm();
        if norm > 0.0 {
            for (_, w) in self.entries.iter_mut() { *w /= norm; }
        }
        self
    }
}

/// 1 − cosine similarity, clamped to [0, 2].
///
/// A zero vector has similarity 0 with everything, so its distance is 1.
/// A vector with non-finite weights gets the maximum distance 2.
/// Callers are responsible for checking that dimensions agree.
pub fn cosine_distance(a: &TermVector, b: &TermVector) -> f32 {
    let denom = a.norm() * b.norm();
    let similarity = if denom > 0.0 { a.dot(b) / denom } else { 0.0 };
    let distance = 1.0 - similarity;
    if distance.is_nan() {
        return 2.0;
    }
    distance.clamp(0.0, 2.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identical_vectors_have_zero_distance() {
        let a = TermVector::from_dense(&[0.3, 0.0, 0.9]);
        assert!(cosine_distance(&a, &a.clone()) < 1e-6);
    }

    #[test]
    fn orthogonal_vectors_have_unit_distance() {
        let a = TermVector::from_dense(&[1.0, 0.0]);
        let b = TermVector::from_dense(&[0.0, 1.0]);
        assert!((cosine_distance(&a, &b) - 1.0).abs() < 1e-6);
    }

    #[test]
    fn zero_vector_distance_is_one() {
        let a = TermVector::zeros(2);
        let b = TermVector::from_dense(&[0.0, 1.0]);
        assert_eq!(cosine_distance(&a, &b), 1.0);
    }

    #[test]
    fn from_pairs_merges_and_sorts() {
        let v = TermVector::from_pairs(4, vec![(3, 1.0), (1, 2.0), (3, 0.5)]).unwrap();
        assert_eq!(v.entries(), &[(1, 2.0), (3, 1.5)]);
        assert!(TermVector::from_pairs(2, vec![(2, 1.0)]).is_none());
        assert!(TermVector::from_pairs(2, vec![(0, f32::NAN)]).is_none());
        assert!(TermVector::from_pairs(2, vec![(1, f32::INFINITY)]).is_none());
    }

    #[test]
    fn non_finite_weights_are_maximally_distant() {
        let bad = TermVector::from_dense(&[f32::INFINITY, 0.0]);
        let q = TermVector::from_dense(&[1.0, 0.0]);
        assert!(!bad.is_finite());
        assert_eq!(cosine_distance(&bad, &q), 2.0);
        assert_eq!(cosine_distance(&q, &TermVector::from_dense(&[f32::NAN, 1.0])), 2.0);
    }

    #[test]
    fn normalized_has_unit_norm() {
        let v = TermVector::from_dense(&[3.0, 4.0]).normalized();
        assert!((v.norm() - 1.0).abs() < 1e-6);
    }
}
