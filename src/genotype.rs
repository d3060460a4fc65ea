//! Genotypes: ordered sequences of chromosome segments.
//!
//! Segment order is semantically meaningful — it defines crossover cut
//! points and segment identity — so a [`Genotype`] never reorders its
//! segments.

use crate::segment::Segment;
use rand::{Rng, RngCore};

/// An ordered, non-empty sequence of segments.
///
/// Composes segment-level operations into whole-genome operations:
/// randomization touches every segment, crossover recombines around a
/// single random cut index, and mutation perturbs a single segment.
#[derive(Debug, Clone, PartialEq)]
pub struct Genotype<S: Segment> {
    segments: Vec<S>,
}

impl<S: Segment> Genotype<S> {
    /// Creates a genotype from a segment sequence.
    ///
    /// # Panics
    /// Panics if `segments` is empty.
    pub fn new(segments: Vec<S>) -> Self {
        assert!(
            !segments.is_empty(),
            "genotype must contain at least one segment"
        );
        Self { segments }
    }

    /// The segments in order.
    pub fn segments(&self) -> &[S] {
        &self.segments
    }

    /// The number of segments.
    pub fn len(&self) -> usize {
        self.segments.len()
    }

    /// Always false; genotypes are non-empty by construction.
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Randomizes every segment.
    pub fn randomize(&mut self, rng: &mut dyn RngCore) {
        for seg in &mut self.segments {
            seg.randomize(rng);
        }
    }

    /// One-point crossover between `self` and `other`.
    ///
    /// Selects a cut index `k` in `[0, len)`; the child takes segments
    /// `[0, k)` from `self`, segment `k` from a segment-level crossover,
    /// and `(k, len)` from `other`. When `k == len - 1` the slice taken
    /// from `other` is empty, which is still a valid recombination.
    /// Neither operand is mutated.
    ///
    /// # Panics
    /// Panics if the genotypes have different lengths.
    pub fn crossover(&self, other: &Self, rng: &mut dyn RngCore) -> Self {
        assert_eq!(
            self.len(),
            other.len(),
            "genotypes must have equal length for crossover"
        );
        let k = rng.random_range(0..self.segments.len());
        let mut segments = Vec::with_capacity(self.segments.len());
        segments.extend_from_slice(&self.segments[..k]);
        segments.push(self.segments[k].crossover(&other.segments[k], rng));
        segments.extend_from_slice(&other.segments[k + 1..]);
        Self { segments }
    }

    /// Mutates one uniformly chosen segment in place.
    ///
    /// A single call is a single point mutation — it never touches more
    /// than one segment.
    pub fn mutate(&mut self, rng: &mut dyn RngCore) {
        let i = rng.random_range(0..self.segments.len());
        self.segments[i].mutate(rng);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::segment::BinarySegment;
    use proptest::prelude::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn genotype(widths: &[u32], rng: &mut StdRng) -> Genotype<BinarySegment> {
        Genotype::new(
            widths
                .iter()
                .map(|&w| BinarySegment::random(w, rng))
                .collect(),
        )
    }

    #[test]
    #[should_panic(expected = "at least one segment")]
    fn test_empty_genotype_panics() {
        Genotype::<BinarySegment>::new(vec![]);
    }

    #[test]
    fn test_randomize_keeps_segments_in_domain() {
        let mut rng = StdRng::seed_from_u64(42);
        let mut g = genotype(&[1, 2, 3, 8], &mut rng);
        for _ in 0..100 {
            g.randomize(&mut rng);
            for seg in g.segments() {
                assert!(seg.data() <= seg.max_value());
            }
        }
    }

    #[test]
    fn test_crossover_preserves_length_and_widths() {
        let mut rng = StdRng::seed_from_u64(42);
        let a = genotype(&[1, 2, 3], &mut rng);
        let b = genotype(&[1, 2, 3], &mut rng);
        for _ in 0..100 {
            let child = a.crossover(&b, &mut rng);
            assert_eq!(child.len(), 3);
            for (c, p) in child.segments().iter().zip(a.segments()) {
                assert_eq!(c.n_bits(), p.n_bits());
            }
        }
    }

    #[test]
    fn test_crossover_does_not_mutate_parents() {
        let mut rng = StdRng::seed_from_u64(42);
        let a = genotype(&[4, 4, 4, 4], &mut rng);
        let b = genotype(&[4, 4, 4, 4], &mut rng);
        let a_before = a.clone();
        let b_before = b.clone();
        for _ in 0..100 {
            let _ = a.crossover(&b, &mut rng);
        }
        assert_eq!(a, a_before);
        assert_eq!(b, b_before);
    }

    #[test]
    fn test_crossover_single_segment() {
        let mut rng = StdRng::seed_from_u64(42);
        let a = genotype(&[8], &mut rng);
        let b = genotype(&[8], &mut rng);
        let child = a.crossover(&b, &mut rng);
        assert_eq!(child.len(), 1);
    }

    #[test]
    fn test_mutate_changes_exactly_one_bit_in_one_segment() {
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..200 {
            let mut g = genotype(&[3, 5, 7], &mut rng);
            let before: Vec<u64> = g.segments().iter().map(|s| s.data()).collect();
            g.mutate(&mut rng);
            let diffs: u32 = g
                .segments()
                .iter()
                .zip(&before)
                .map(|(s, &b)| (s.data() ^ b).count_ones())
                .sum();
            assert_eq!(diffs, 1, "mutation must flip exactly one bit");
        }
    }

    proptest! {
        #[test]
        fn prop_crossover_non_mutation(seed: u64, widths in prop::collection::vec(1u32..=16, 1..8)) {
            let mut rng = StdRng::seed_from_u64(seed);
            let a = genotype(&widths, &mut rng);
            let b = genotype(&widths, &mut rng);
            let (a_before, b_before) = (a.clone(), b.clone());
            let child = a.crossover(&b, &mut rng);
            prop_assert_eq!(a, a_before);
            prop_assert_eq!(b, b_before);
            prop_assert_eq!(child.len(), widths.len());
        }
    }
}
