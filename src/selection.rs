//! Selection operators.
//!
//! Two interchangeable parent-selection strategies produce
//! `population.mating_pool`, a flat index sequence of length
//! `2 * gen_size` consumed pairwise by [`Crossover`](crate::Crossover),
//! plus [`SelectLethals`], which schedules the worst individuals for
//! replacement (elitist truncation).
//!
//! # References
//!
//! - Baker (1987), "Reducing Bias and Inefficiency in the Selection
//!   Algorithm" — stochastic universal sampling
//! - Goldberg & Deb (1991), "A Comparative Analysis of Selection Schemes
//!   Used in Genetic Algorithms"

use crate::error::GaError;
use crate::operator::GeneticOperator;
use crate::population::Population;
use crate::segment::Segment;
use rand::seq::SliceRandom;
use rand::{Rng, RngCore};

/// Stochastic uniform sampling over fitness-proportional weights.
///
/// Builds a selection weight per individual — raw fitness when
/// maximizing, `M - fitness` with `M = max(fitness) + 1` when minimizing
/// so that lower fitness earns higher weight — and walks the cumulative
/// distribution with `2 * gen_size` equally spaced pointers starting at
/// a single random offset. Every pointer lands on the first individual
/// whose cumulative weight exceeds it, which yields expected selection
/// frequencies proportional to weight with minimal sampling variance
/// (the defining SUS property). The resulting pool is shuffled to
/// prevent positional bias in the pairwise crossover that follows.
///
/// Under maximization, fitness values are assumed non-negative; the
/// cumulative walk is undefined for mixed-sign weights. When every
/// weight is zero the walk falls back to uniform weights.
///
/// Note: the minimization transform gives the worst individual a weight
/// of exactly 1 out of a total that may cluster ties at the boundary; an
/// individual with zero weight (only possible through exact float
/// coincidence) would never be selected.
pub struct SusSelection;

impl SusSelection {
    fn select<S: Segment>(&self, population: &mut Population<S>, rng: &mut dyn RngCore) {
        let n = population.len();
        assert!(n > 0, "cannot select from empty population");

        let fitness: Vec<f64> = population.individuals.iter().map(|i| i.fitness).collect();
        let mut weights: Vec<f64> = if population.maximize {
            fitness
        } else {
            let max = fitness.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
            let m = max + 1.0;
            fitness.iter().map(|&f| m - f).collect()
        };

        let mut total: f64 = weights.iter().sum();
        if total <= 0.0 {
            // Degenerate all-zero weights: treat every individual equally.
            weights = vec![1.0; n];
            total = n as f64;
        }

        let mut cdf = Vec::with_capacity(n);
        let mut cumulative = 0.0;
        for w in &weights {
            cumulative += w / total;
            cdf.push(cumulative);
        }

        let m = population.gen_size;
        let delta = 0.5 / m as f64; // pointer spacing 1 / (2m)
        let mut tick = delta * rng.random::<f64>();
        let mut pool = Vec::with_capacity(2 * m);
        for _ in 0..2 * m {
            let idx = cdf
                .iter()
                .position(|&c| c > tick)
                .unwrap_or(n - 1); // float round-off at the top of the cdf
            pool.push(idx);
            tick += delta;
            while tick > 1.0 {
                tick -= 1.0;
            }
        }

        pool.shuffle(rng);
        population.mating_pool = Some(pool);
    }
}

impl<S: Segment> GeneticOperator<S> for SusSelection {
    fn iterate(
        &mut self,
        population: &mut Population<S>,
        rng: &mut dyn RngCore,
    ) -> Result<(), GaError> {
        self.select(population, rng);
        Ok(())
    }
}

/// k-tournament selection.
///
/// Fills each of the `2 * gen_size` mating-pool slots by drawing `k`
/// candidate indices uniformly with replacement and keeping the one with
/// the best fitness per the population's `maximize` flag. Ties go to the
/// first-encountered candidate. Tournaments are independent, so no
/// shuffle is needed. Higher `k` means stronger selection pressure.
pub struct TournamentSelection {
    /// Number of candidates per tournament.
    pub k: usize,
}

impl TournamentSelection {
    /// Creates a tournament operator with the given contest size.
    pub fn new(k: usize) -> Self {
        Self { k }
    }

    fn select<S: Segment>(&self, population: &mut Population<S>, rng: &mut dyn RngCore) {
        let n = population.len();
        assert!(n > 0, "cannot select from empty population");

        let maximize = population.maximize;
        let better = |a: f64, b: f64| if maximize { a > b } else { a < b };
        let k = self.k.max(1);

        let pool: Vec<usize> = (0..2 * population.gen_size)
            .map(|_| {
                let mut best = rng.random_range(0..n);
                for _ in 1..k {
                    let candidate = rng.random_range(0..n);
                    if better(
                        population.individuals[candidate].fitness,
                        population.individuals[best].fitness,
                    ) {
                        best = candidate;
                    }
                }
                best
            })
            .collect();

        population.mating_pool = Some(pool);
    }
}

impl<S: Segment> GeneticOperator<S> for TournamentSelection {
    fn iterate(
        &mut self,
        population: &mut Population<S>,
        rng: &mut dyn RngCore,
    ) -> Result<(), GaError> {
        self.select(population, rng);
        Ok(())
    }
}

/// Elitist truncation: marks the `gen_size` worst individuals as lethal.
///
/// Runs once per iteration after evaluation and before crossover, so the
/// offspring produced this generation overwrite only the currently worst
/// slots and the best individuals always survive.
pub struct SelectLethals;

impl SelectLethals {
    fn select<S: Segment>(&self, population: &mut Population<S>) {
        let m = population.gen_size;
        let mut indexed: Vec<(usize, f64)> = population
            .individuals
            .iter()
            .enumerate()
            .map(|(i, ind)| (i, ind.fitness))
            .collect();
        // Stable sort: ties keep index order, so tie-breaking is
        // deterministic.
        indexed.sort_by(|a, b| a.1.partial_cmp(&b.1).unwrap_or(std::cmp::Ordering::Equal));

        let worst = if population.maximize {
            &indexed[..m]
        } else {
            &indexed[indexed.len() - m..]
        };
        population.lethals = Some(worst.iter().map(|&(i, _)| i).collect());
    }
}

impl<S: Segment> GeneticOperator<S> for SelectLethals {
    fn iterate(
        &mut self,
        population: &mut Population<S>,
        _rng: &mut dyn RngCore,
    ) -> Result<(), GaError> {
        self.select(population);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::PopulationConfig;
    use crate::genotype::Genotype;
    use crate::segment::BinarySegment;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn population(fitnesses: &[f64], maximize: bool) -> Population<BinarySegment> {
        let mut rng = StdRng::seed_from_u64(0);
        let schema = Genotype::new(vec![BinarySegment::with_data(4, 0)]);
        let config = PopulationConfig::default()
            .with_pop_size(fitnesses.len())
            .with_maximize(maximize);
        let mut pop = Population::new("sel", schema, &config, &mut rng).unwrap();
        for (ind, &f) in pop.individuals.iter_mut().zip(fitnesses) {
            ind.fitness = f;
        }
        pop
    }

    // ---- SUS ----

    #[test]
    fn test_sus_pool_length_is_twice_gen_size() {
        let mut rng = StdRng::seed_from_u64(42);
        let mut pop = population(&[1.0; 8], true);
        pop.gen_size = 3;
        SusSelection.select(&mut pop, &mut rng);
        assert_eq!(pop.mating_pool.as_ref().unwrap().len(), 6);
    }

    #[test]
    fn test_sus_indices_in_range() {
        let mut rng = StdRng::seed_from_u64(42);
        let mut pop = population(&[2.0, 1.0, 4.0, 3.0], true);
        for _ in 0..50 {
            SusSelection.select(&mut pop, &mut rng);
            assert!(pop.mating_pool.as_ref().unwrap().iter().all(|&i| i < 4));
        }
    }

    #[test]
    fn test_sus_fairness_uniform_fitness() {
        // With uniform fitness every index must appear with frequency
        // close to 1/n; a loose chi-square bound catches gross bias.
        let mut rng = StdRng::seed_from_u64(42);
        let n = 10;
        let mut pop = population(&vec![1.0; n], true);
        let trials = 500;
        let mut counts = vec![0usize; n];
        for _ in 0..trials {
            SusSelection.select(&mut pop, &mut rng);
            for &i in pop.mating_pool.as_ref().unwrap() {
                counts[i] += 1;
            }
        }
        let total: usize = counts.iter().sum();
        let expected = total as f64 / n as f64;
        let chi_square: f64 = counts
            .iter()
            .map(|&c| {
                let d = c as f64 - expected;
                d * d / expected
            })
            .sum();
        // 9 degrees of freedom; p = 0.001 critical value is 27.88.
        assert!(chi_square < 27.88, "chi-square too high: {chi_square}");
    }

    #[test]
    fn test_sus_selection_proportional_to_fitness() {
        let mut rng = StdRng::seed_from_u64(42);
        let mut pop = population(&[1.0, 3.0], true);
        let mut counts = [0usize; 2];
        for _ in 0..500 {
            SusSelection.select(&mut pop, &mut rng);
            for &i in pop.mating_pool.as_ref().unwrap() {
                counts[i] += 1;
            }
        }
        let ratio = counts[1] as f64 / counts[0] as f64;
        assert!(
            (2.5..3.5).contains(&ratio),
            "expected ~3x selection for 3x fitness, got {ratio}"
        );
    }

    #[test]
    fn test_sus_minimize_prefers_low_fitness() {
        let mut rng = StdRng::seed_from_u64(42);
        let mut pop = population(&[1.0, 3.0], false);
        let mut counts = [0usize; 2];
        for _ in 0..500 {
            SusSelection.select(&mut pop, &mut rng);
            for &i in pop.mating_pool.as_ref().unwrap() {
                counts[i] += 1;
            }
        }
        // Weights are M - fitness = [3, 1] with M = 4.
        assert!(
            counts[0] > counts[1] * 2,
            "low fitness should dominate under minimization: {counts:?}"
        );
    }

    #[test]
    fn test_sus_all_zero_fitness_falls_back_to_uniform() {
        let mut rng = StdRng::seed_from_u64(42);
        let n = 4;
        let mut pop = population(&vec![0.0; n], true);
        let mut counts = vec![0usize; n];
        for _ in 0..200 {
            SusSelection.select(&mut pop, &mut rng);
            for &i in pop.mating_pool.as_ref().unwrap() {
                counts[i] += 1;
            }
        }
        for &c in &counts {
            assert!(c > 0, "uniform fallback must reach every index: {counts:?}");
        }
    }

    #[test]
    fn test_sus_pool_is_shuffled() {
        // An unshuffled SUS pool is sorted (pointers walk the cdf in
        // order); with skewed fitness and many slots, a sorted pool after
        // shuffling is vanishingly unlikely.
        let mut rng = StdRng::seed_from_u64(42);
        let mut pop = population(&[1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0], true);
        let mut saw_unsorted = false;
        for _ in 0..20 {
            SusSelection.select(&mut pop, &mut rng);
            let pool = pop.mating_pool.as_ref().unwrap();
            if pool.windows(2).any(|w| w[0] > w[1]) {
                saw_unsorted = true;
                break;
            }
        }
        assert!(saw_unsorted, "mating pool should not stay cdf-ordered");
    }

    // ---- Tournament ----

    #[test]
    fn test_tournament_pool_length() {
        let mut rng = StdRng::seed_from_u64(42);
        let mut pop = population(&[1.0, 2.0, 3.0, 4.0], true);
        pop.gen_size = 2;
        TournamentSelection::new(3).select(&mut pop, &mut rng);
        assert_eq!(pop.mating_pool.as_ref().unwrap().len(), 4);
    }

    #[test]
    fn test_tournament_monotonic_in_k() {
        // Increasing k must increase the expected fitness of winners.
        let mut rng = StdRng::seed_from_u64(42);
        let fitnesses: Vec<f64> = (0..20).map(|i| i as f64).collect();
        let mut pop = population(&fitnesses, true);

        let mean_winner = |k: usize, pop: &mut Population<BinarySegment>, rng: &mut StdRng| {
            let mut sum = 0.0;
            let mut count = 0usize;
            for _ in 0..50 {
                TournamentSelection::new(k).select(pop, rng);
                for &i in pop.mating_pool.as_ref().unwrap() {
                    sum += pop.individuals[i].fitness;
                    count += 1;
                }
            }
            sum / count as f64
        };

        let m1 = mean_winner(1, &mut pop, &mut rng);
        let m3 = mean_winner(3, &mut pop, &mut rng);
        let m7 = mean_winner(7, &mut pop, &mut rng);
        assert!(m1 < m3 && m3 < m7, "expected {m1} < {m3} < {m7}");
    }

    #[test]
    fn test_tournament_respects_minimize() {
        let mut rng = StdRng::seed_from_u64(42);
        let mut pop = population(&[10.0, 1.0, 10.0, 10.0], false);
        let mut counts = [0usize; 4];
        for _ in 0..100 {
            TournamentSelection::new(4).select(&mut pop, &mut rng);
            for &i in pop.mating_pool.as_ref().unwrap() {
                counts[i] += 1;
            }
        }
        assert!(
            counts[1] > counts[0] && counts[1] > counts[2] && counts[1] > counts[3],
            "lowest fitness should win most tournaments: {counts:?}"
        );
    }

    #[test]
    fn test_tournament_k_zero_treated_as_one() {
        let mut rng = StdRng::seed_from_u64(42);
        let mut pop = population(&[1.0, 2.0], true);
        TournamentSelection::new(0).select(&mut pop, &mut rng);
        assert_eq!(pop.mating_pool.as_ref().unwrap().len(), 4);
    }

    // ---- SelectLethals ----

    #[test]
    fn test_lethals_are_worst_when_maximizing() {
        let mut pop = population(&[5.0, 1.0, 4.0, 2.0, 3.0], true);
        pop.gen_size = 2;
        SelectLethals.select(&mut pop);
        let mut lethals = pop.lethals.clone().unwrap();
        lethals.sort_unstable();
        assert_eq!(lethals, vec![1, 3]); // fitness 1.0 and 2.0
    }

    #[test]
    fn test_lethals_are_worst_when_minimizing() {
        let mut pop = population(&[5.0, 1.0, 4.0, 2.0, 3.0], false);
        pop.gen_size = 2;
        SelectLethals.select(&mut pop);
        let mut lethals = pop.lethals.clone().unwrap();
        lethals.sort_unstable();
        assert_eq!(lethals, vec![0, 2]); // fitness 5.0 and 4.0
    }

    #[test]
    fn test_lethals_ties_break_by_index_order() {
        let mut pop = population(&[1.0, 1.0, 1.0, 1.0], true);
        pop.gen_size = 2;
        SelectLethals.select(&mut pop);
        assert_eq!(pop.lethals.clone().unwrap(), vec![0, 1]);
    }

    #[test]
    fn test_full_replacement_marks_everyone() {
        let mut pop = population(&[3.0, 1.0, 2.0], true);
        SelectLethals.select(&mut pop);
        assert_eq!(pop.lethals.as_ref().unwrap().len(), 3);
    }
}
