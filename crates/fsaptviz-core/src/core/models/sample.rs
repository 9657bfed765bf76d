use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use thiserror::Error;

/// Index of an atom within the structure loaded by the viewer.
pub type AtomIndex = u32;

/// A single per-atom FSAPT energy contribution.
///
/// Negative energies are attractive (stabilizing), positive energies are
/// repulsive (destabilizing). Units are kcal/mol.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct InteractionSample {
    /// The atom this contribution belongs to.
    pub atom_index: AtomIndex,
    /// The signed energy contribution in kcal/mol.
    pub energy: f64,
}

impl InteractionSample {
    pub fn new(atom_index: AtomIndex, energy: f64) -> Self {
        Self { atom_index, energy }
    }
}

#[derive(Debug, Error, Clone, PartialEq)]
pub enum InputError {
    #[error(
        "Mismatched payload columns: {atom_indices} atom indices but {energies} energy contributions"
    )]
    LengthMismatch { atom_indices: usize, energies: usize },

    #[error("Atom index {0} appears more than once in the sample set")]
    DuplicateAtomIndex(AtomIndex),

    #[error("Energy contribution for atom {atom_index} is not a finite number")]
    NonFiniteEnergy { atom_index: AtomIndex },
}

/// A validated, immutable set of interaction samples.
///
/// A sample set is built fresh from each analysis payload and is never mutated
/// afterwards; filtering produces a new set. Construction guarantees that atom
/// indices are unique and that every energy is finite.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct SampleSet {
    samples: Vec<InteractionSample>,
}

impl SampleSet {
    pub fn new(samples: Vec<InteractionSample>) -> Result<Self, InputError> {
        let mut seen = HashSet::with_capacity(samples.len());
        for sample in &samples {
            if !sample.energy.is_finite() {
                return Err(InputError::NonFiniteEnergy {
                    atom_index: sample.atom_index,
                });
            }
            if !seen.insert(sample.atom_index) {
                return Err(InputError::DuplicateAtomIndex(sample.atom_index));
            }
        }
        Ok(Self { samples })
    }

    /// Builds a sample set from the two index-aligned columns of an analysis payload.
    ///
    /// # Errors
    ///
    /// Returns [`InputError::LengthMismatch`] if the columns differ in length; the
    /// columns are never truncated to fit.
    pub fn from_columns(atom_indices: &[AtomIndex], energies: &[f64]) -> Result<Self, InputError> {
        if atom_indices.len() != energies.len() {
            return Err(InputError::LengthMismatch {
                atom_indices: atom_indices.len(),
                energies: energies.len(),
            });
        }
        let samples = atom_indices
            .iter()
            .zip(energies)
            .map(|(&atom_index, &energy)| InteractionSample::new(atom_index, energy))
            .collect();
        Self::new(samples)
    }

    /// Keeps only samples whose magnitude reaches `threshold` (inclusive).
    ///
    /// A non-positive threshold keeps every sample.
    pub fn filter_significant(&self, threshold: f64) -> SampleSet {
        if threshold <= 0.0 {
            return self.clone();
        }
        SampleSet {
            samples: self
                .samples
                .iter()
                .filter(|s| s.energy.abs() >= threshold)
                .copied()
                .collect(),
        }
    }

    pub fn as_slice(&self) -> &[InteractionSample] {
        &self.samples
    }

    pub fn iter(&self) -> impl Iterator<Item = &InteractionSample> {
        self.samples.iter()
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn atom_indices(&self) -> Vec<AtomIndex> {
        self.samples.iter().map(|s| s.atom_index).collect()
    }

    pub fn energies(&self) -> Vec<f64> {
        self.samples.iter().map(|s| s.energy).collect()
    }
}

impl AsRef<[InteractionSample]> for SampleSet {
    fn as_ref(&self) -> &[InteractionSample] {
        &self.samples
    }
}

impl<'a> IntoIterator for &'a SampleSet {
    type Item = &'a InteractionSample;
    type IntoIter = std::slice::Iter<'a, InteractionSample>;

    fn into_iter(self) -> Self::IntoIter {
        self.samples.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_columns_pairs_indices_with_energies() {
        let set = SampleSet::from_columns(&[15, 23, 45], &[-2.5, -1.8, 1.5]).unwrap();
        assert_eq!(set.len(), 3);
        assert_eq!(set.as_slice()[1], InteractionSample::new(23, -1.8));
        assert_eq!(set.atom_indices(), vec![15, 23, 45]);
        assert_eq!(set.energies(), vec![-2.5, -1.8, 1.5]);
    }

    #[test]
    fn from_columns_rejects_mismatched_lengths() {
        let result = SampleSet::from_columns(&[1, 2, 3], &[-1.0, 2.0]);
        assert_eq!(
            result,
            Err(InputError::LengthMismatch {
                atom_indices: 3,
                energies: 2
            })
        );
    }

    #[test]
    fn new_rejects_duplicate_atom_indices() {
        let result = SampleSet::new(vec![
            InteractionSample::new(7, -1.0),
            InteractionSample::new(8, 0.5),
            InteractionSample::new(7, 2.0),
        ]);
        assert_eq!(result, Err(InputError::DuplicateAtomIndex(7)));
    }

    #[test]
    fn new_rejects_non_finite_energies() {
        let result = SampleSet::new(vec![InteractionSample::new(3, f64::NAN)]);
        assert_eq!(result, Err(InputError::NonFiniteEnergy { atom_index: 3 }));

        let result = SampleSet::new(vec![InteractionSample::new(4, f64::INFINITY)]);
        assert_eq!(result, Err(InputError::NonFiniteEnergy { atom_index: 4 }));
    }

    #[test]
    fn empty_columns_produce_an_empty_set() {
        let set = SampleSet::from_columns(&[], &[]).unwrap();
        assert!(set.is_empty());
    }

    #[test]
    fn filter_significant_is_inclusive_and_preserves_order() {
        let set = SampleSet::from_columns(&[1, 2, 3, 4], &[-0.5, 0.49, 2.0, -0.1]).unwrap();
        let filtered = set.filter_significant(0.5);
        assert_eq!(filtered.atom_indices(), vec![1, 3]);
    }

    #[test]
    fn filter_significant_with_non_positive_threshold_keeps_everything() {
        let set = SampleSet::from_columns(&[1, 2], &[0.0, 0.01]).unwrap();
        assert_eq!(set.filter_significant(0.0), set);
        assert_eq!(set.filter_significant(-1.0), set);
    }
}
