//! Chromosome segments: the smallest unit of heritable data.
//!
//! A [`Segment`] knows how to randomize, recombine, and mutate itself.
//! The engine is representation-agnostic — genotypes, populations, and all
//! built-in operators are generic over the segment type. The crate ships
//! one concrete representation, [`BinarySegment`], an unsigned integer
//! bounded by a fixed bit width.

use rand::{Rng, RngCore};

/// The smallest unit of heritable data.
///
/// Implementations must keep their value inside the segment's legal
/// domain after every operation. Crossover returns a *new* segment and
/// must not mutate either operand; genotypes rely on this to keep parents
/// intact during offspring construction.
pub trait Segment: Clone {
    /// Assigns a value uniformly distributed over the legal domain.
    fn randomize(&mut self, rng: &mut dyn RngCore);

    /// Recombines `self` and `other` into a new segment.
    ///
    /// Neither operand may be mutated.
    fn crossover(&self, other: &Self, rng: &mut dyn RngCore) -> Self;

    /// Perturbs the segment's value in place.
    fn mutate(&mut self, rng: &mut dyn RngCore);
}

/// An integer variable encoded by a fixed number of bits.
///
/// The value always lies in `[0, 2^n_bits - 1]`. Out-of-range writes are
/// silently masked to the legal domain rather than rejected — crossover
/// relies on truncation being lossless in range and cheap, so this is a
/// deliberate policy, not a validation gap.
///
/// # Examples
///
/// ```
/// use gaflow::BinarySegment;
///
/// let seg = BinarySegment::with_data(4, 0xFF);
/// assert_eq!(seg.data(), 0x0F); // masked to 4 bits
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BinarySegment {
    data: u64,
    n_bits: u32,
}

impl BinarySegment {
    /// Creates a segment with an explicit value, masked to the domain.
    ///
    /// # Panics
    /// Panics if `n_bits` is not in `1..=64`.
    pub fn with_data(n_bits: u32, data: u64) -> Self {
        assert!(
            (1..=64).contains(&n_bits),
            "n_bits must be in 1..=64, got {n_bits}"
        );
        Self {
            data: data & mask(n_bits),
            n_bits,
        }
    }

    /// Creates a segment with a uniformly random value.
    ///
    /// # Panics
    /// Panics if `n_bits` is not in `1..=64`.
    pub fn random(n_bits: u32, rng: &mut dyn RngCore) -> Self {
        let mut seg = Self::with_data(n_bits, 0);
        seg.randomize(rng);
        seg
    }

    /// The current value.
    pub fn data(&self) -> u64 {
        self.data
    }

    /// Writes a value, masking it to the legal domain.
    pub fn set_data(&mut self, data: u64) {
        self.data = data & mask(self.n_bits);
    }

    /// The bit width of this segment.
    pub fn n_bits(&self) -> u32 {
        self.n_bits
    }

    /// The largest value this segment can hold: `2^n_bits - 1`.
    pub fn max_value(&self) -> u64 {
        mask(self.n_bits)
    }
}

fn mask(n_bits: u32) -> u64 {
    if n_bits >= 64 {
        u64::MAX
    } else {
        (1u64 << n_bits) - 1
    }
}

impl Segment for BinarySegment {
    fn randomize(&mut self, rng: &mut dyn RngCore) {
        self.data = rng.random_range(0..=self.max_value());
    }

    /// One-point crossover within the bit positions.
    ///
    /// Picks a cut point in `[0, n_bits]` inclusive: bits below the cut
    /// come from `self`, bits at and above from `other`. A cut of 0 copies
    /// `other` entirely; a cut of `n_bits` copies `self`.
    fn crossover(&self, other: &Self, rng: &mut dyn RngCore) -> Self {
        let cut = rng.random_range(0..=self.n_bits);
        let low = mask_below(cut);
        Self {
            data: ((self.data & low) | (other.data & !low)) & mask(self.n_bits),
            n_bits: self.n_bits,
        }
    }

    /// Flips exactly one bit chosen uniformly from the segment's positions.
    fn mutate(&mut self, rng: &mut dyn RngCore) {
        let bit = rng.random_range(0..self.n_bits);
        self.data ^= 1u64 << bit;
    }
}

fn mask_below(cut: u32) -> u64 {
    if cut >= 64 {
        u64::MAX
    } else {
        (1u64 << cut) - 1
    }
}
