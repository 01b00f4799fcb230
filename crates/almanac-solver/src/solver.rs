// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

//! # Minimum-Output Solver
//!
//! Drives a seed set through a pipeline and reduces the output fragments
//! to the minimum reachable value.
//!
//! ## Why the minimum is a fragment start
//!
//! Every stage translates fragments by pure additive shifts or passes them
//! through unchanged, and fragmentation happens exactly at rule
//! boundaries. Endpoint order inside a fragment is therefore preserved
//! through every stage, so the smallest value in any output fragment is
//! its own start bound. Taking `min` over fragment starts answers the
//! query without enumerating a single identifier.
//!
//! ## Parallel fan-out
//!
//! Independent input ranges share nothing, so the solver can chunk them
//! across scoped threads (`std::thread::scope`) and combine partial minima
//! with a plain `min` fold after joining. The reduction is associative and
//! commutative, so chunk boundaries never change the answer.

use crate::{
    num::PipelineNumeric,
    stats::{SolveStatistics, SolveStatisticsBuilder},
};
use almanac_core::math::interval::Interval;
use almanac_model::{pipeline::Pipeline, seeds::SeedSet};

/// The error type for a solve run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SolveError {
    /// The seed set covers no identifier, or the pipeline produced no
    /// non-empty output fragment. There is no minimum to report, which is
    /// distinct from a minimum of zero.
    NoValidSeeds,
}

impl std::fmt::Display for SolveError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NoValidSeeds => {
                write!(f, "seed set covers no identifiers, no minimum exists")
            }
        }
    }
}

impl std::error::Error for SolveError {}

/// The result of a successful solve: the minimum final value plus run
/// statistics.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SolveOutcome<T> {
    minimum: T,
    statistics: SolveStatistics,
}

impl<T> SolveOutcome<T>
where
    T: PipelineNumeric,
{
    /// Returns the minimum final value reachable from the seed set.
    #[inline]
    pub fn minimum(&self) -> T {
        self.minimum
    }

    /// Returns the statistics collected during the solve.
    #[inline]
    pub fn statistics(&self) -> &SolveStatistics {
        &self.statistics
    }
}

impl<T> std::fmt::Display for SolveOutcome<T>
where
    T: PipelineNumeric,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Minimum Output: {}", self.minimum)?;
        write!(f, "{}", self.statistics)
    }
}

/// Drives a pipeline over a seed set and reports the minimum final value.
///
/// # Examples
///
/// ```rust
/// # use almanac_core::math::interval::Interval;
/// # use almanac_model::{pipeline::Pipeline, rule::Rule, seeds::SeedSet, table::TranslationTable};
/// # use almanac_solver::solver::Solver;
///
/// let pipeline = Pipeline::new(vec![TranslationTable::new(
///     "seed-to-soil",
///     vec![
///         Rule::new(Interval::new(98, 100), -48),
///         Rule::new(Interval::new(50, 98), 2),
///     ],
/// )
/// .unwrap()])
/// .unwrap();
///
/// let seeds = SeedSet::ranges(vec![Interval::new(79, 93)]);
/// let outcome = Solver::new().minimum_output(&pipeline, &seeds).unwrap();
/// assert_eq!(outcome.minimum(), 81);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Solver {
    threads: usize,
}

impl Default for Solver {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl Solver {
    /// Creates a sequential solver.
    #[inline]
    pub fn new() -> Self {
        Self { threads: 1 }
    }

    /// Returns the configured worker thread count.
    #[inline]
    pub fn threads(&self) -> usize {
        self.threads
    }

    /// Computes the minimum final value reachable from any identifier in
    /// the seed set.
    ///
    /// Points and ranges take the same path: the seed set's uniform range
    /// view is folded through every stage, and the answer is the smallest
    /// start bound among the non-empty output fragments. An empty seed
    /// domain or an all-empty result is [`SolveError::NoValidSeeds`].
    pub fn minimum_output<T>(
        &self,
        pipeline: &Pipeline<T>,
        seeds: &SeedSet<T>,
    ) -> Result<SolveOutcome<T>, SolveError>
    where
        T: PipelineNumeric,
    {
        let start_time = std::time::Instant::now();

        let ranges: Vec<Interval<T>> = seeds
            .to_ranges()
            .into_iter()
            .filter(|r| !r.is_empty())
            .collect();
        if ranges.is_empty() {
            return Err(SolveError::NoValidSeeds);
        }

        // Never spin up more workers than there are independent ranges.
        let workers = self.threads.min(ranges.len()).max(1);

        let (minimum, fragments) = if workers > 1 {
            Self::solve_parallel(pipeline, &ranges, workers)
        } else {
            Self::solve_chunk(pipeline, &ranges)
        };

        let minimum = minimum.ok_or(SolveError::NoValidSeeds)?;

        let statistics = SolveStatisticsBuilder::new()
            .input_ranges(ranges.len())
            .output_fragments(fragments)
            .stages(pipeline.num_stages())
            .used_threads(workers)
            .solve_duration(start_time.elapsed())
            .build();

        Ok(SolveOutcome {
            minimum,
            statistics,
        })
    }

    /// Folds one chunk of ranges through the pipeline and reduces it.
    fn solve_chunk<T>(pipeline: &Pipeline<T>, ranges: &[Interval<T>]) -> (Option<T>, usize)
    where
        T: PipelineNumeric,
    {
        let output = pipeline.apply_ranges(ranges);
        let minimum = output
            .iter()
            .filter(|r| !r.is_empty())
            .map(|r| r.start())
            .min();
        (minimum, output.len())
    }

    /// Chunks the ranges across scoped worker threads and reduces the
    /// partial results after joining.
    fn solve_parallel<T>(
        pipeline: &Pipeline<T>,
        ranges: &[Interval<T>],
        workers: usize,
    ) -> (Option<T>, usize)
    where
        T: PipelineNumeric,
    {
        let chunk_size = ranges.len().div_ceil(workers);

        std::thread::scope(|scope| {
            let handles: Vec<_> = ranges
                .chunks(chunk_size)
                .map(|chunk| scope.spawn(move || Self::solve_chunk(pipeline, chunk)))
                .collect();

            let mut minimum: Option<T> = None;
            let mut fragments = 0usize;
            for handle in handles {
                let (partial, count) = handle.join().expect("solver worker thread panicked");
                minimum = match (minimum, partial) {
                    (Some(a), Some(b)) => Some(a.min(b)),
                    (a, b) => a.or(b),
                };
                fragments += count;
            }
            (minimum, fragments)
        })
    }
}

/// Builder for a [`Solver`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SolverBuilder {
    threads: usize,
}

impl Default for SolverBuilder {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl SolverBuilder {
    #[inline]
    pub fn new() -> Self {
        Self { threads: 1 }
    }

    /// Sets the number of worker threads for range fan-out. Zero is
    /// treated as one.
    #[inline]
    pub fn with_threads(mut self, threads: usize) -> Self {
        self.threads = threads.max(1);
        self
    }

    #[inline]
    pub fn build(self) -> Solver {
        Solver {
            threads: self.threads,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use almanac_model::{loading::AlmanacLoader, rule::Rule, table::TranslationTable};
    use rand::{rngs::StdRng, Rng, SeedableRng};

    const WORKED_EXAMPLE: &str = "\
seeds: 79 14 55 13

seed-to-soil map:
50 98 2
52 50 48

soil-to-fertilizer map:
0 15 37
37 52 2
39 0 15

fertilizer-to-water map:
49 53 8
0 11 42
42 0 7
57 7 4

water-to-light map:
88 18 7
18 25 70

light-to-temperature map:
45 77 23
81 45 19
68 64 13

temperature-to-humidity map:
0 69 1
1 0 69

humidity-to-location map:
60 56 37
56 93 4
";

    fn single_stage_pipeline() -> Pipeline<i64> {
        Pipeline::new(vec![TranslationTable::new(
            "seed-to-soil",
            vec![
                Rule::new(Interval::new(98, 100), -48),
                Rule::new(Interval::new(50, 98), 2),
            ],
        )
        .unwrap()])
        .unwrap()
    }

    #[test]
    fn test_range_mode_minimum_is_fragment_start() {
        let pipeline = single_stage_pipeline();
        let seeds = SeedSet::ranges(vec![Interval::new(79, 93)]);
        let outcome = Solver::new().minimum_output(&pipeline, &seeds).unwrap();
        assert_eq!(outcome.minimum(), 81);
    }

    #[test]
    fn test_point_mode_matches_apply_point() {
        let pipeline = single_stage_pipeline();
        let seeds = SeedSet::points(vec![79i64, 14, 55, 13]).unwrap();
        let outcome = Solver::new().minimum_output(&pipeline, &seeds).unwrap();

        let expected = [79, 14, 55, 13]
            .iter()
            .map(|&s| pipeline.apply_point(s))
            .min()
            .unwrap();
        assert_eq!(outcome.minimum(), expected);
        assert_eq!(outcome.minimum(), 13);
    }

    #[test]
    fn test_worked_example_both_readings() {
        let almanac = AlmanacLoader::new().from_str::<i64>(WORKED_EXAMPLE).unwrap();
        let solver = Solver::new();

        let points = solver
            .minimum_output(almanac.pipeline(), &almanac.seed_points().unwrap())
            .unwrap();
        assert_eq!(points.minimum(), 35);

        let ranges = solver
            .minimum_output(almanac.pipeline(), &almanac.seed_ranges().unwrap())
            .unwrap();
        assert_eq!(ranges.minimum(), 46);
    }

    #[test]
    fn test_statistics_are_populated() {
        let almanac = AlmanacLoader::new().from_str::<i64>(WORKED_EXAMPLE).unwrap();
        let outcome = Solver::new()
            .minimum_output(almanac.pipeline(), &almanac.seed_points().unwrap())
            .unwrap();

        let stats = outcome.statistics();
        assert_eq!(stats.input_ranges, 4);
        assert_eq!(stats.stages, 7);
        assert_eq!(stats.used_threads, 1);
        assert!(stats.output_fragments >= stats.input_ranges);
    }

    #[test]
    fn test_parallel_matches_sequential() {
        let almanac = AlmanacLoader::new().from_str::<i64>(WORKED_EXAMPLE).unwrap();
        let seeds = almanac.seed_ranges().unwrap();

        let sequential = Solver::new()
            .minimum_output(almanac.pipeline(), &seeds)
            .unwrap();
        let parallel = SolverBuilder::new()
            .with_threads(4)
            .build()
            .minimum_output(almanac.pipeline(), &seeds)
            .unwrap();

        assert_eq!(parallel.minimum(), sequential.minimum());
        assert_eq!(
            parallel.statistics().output_fragments,
            sequential.statistics().output_fragments
        );
        // Two seed ranges cap the fan-out at two workers.
        assert_eq!(parallel.statistics().used_threads, 2);
    }

    #[test]
    fn test_empty_seed_set_is_an_error() {
        let pipeline = single_stage_pipeline();
        assert_eq!(
            Solver::new().minimum_output(&pipeline, &SeedSet::points(Vec::new()).unwrap()),
            Err(SolveError::NoValidSeeds)
        );
        assert_eq!(
            Solver::new().minimum_output(
                &pipeline,
                &SeedSet::ranges(vec![Interval::new(7, 7)])
            ),
            Err(SolveError::NoValidSeeds)
        );
    }

    #[test]
    fn test_builder_clamps_zero_threads() {
        let solver = SolverBuilder::new().with_threads(0).build();
        assert_eq!(solver.threads(), 1);
    }

    /// Builds a pipeline of `stages` random tables with disjoint sources
    /// inside `[0, span)`.
    fn random_pipeline(rng: &mut StdRng, stages: usize, span: i64) -> Pipeline<i64> {
        let tables = (0..stages)
            .map(|i| {
                let mut rules = Vec::new();
                let mut cursor = 0i64;
                while cursor < span {
                    let gap = rng.gen_range(0..span / 8 + 1);
                    let len = rng.gen_range(1..span / 4 + 1);
                    let start = cursor + gap;
                    let end = (start + len).min(span);
                    if start >= end {
                        break;
                    }
                    rules.push(Rule::new(
                        Interval::new(start, end),
                        rng.gen_range(-50..50),
                    ));
                    cursor = end;
                }
                TranslationTable::new(format!("stage-{i}-to-{}", i + 1), rules)
                    .expect("generated sources are disjoint")
            })
            .collect();
        Pipeline::new(tables).unwrap()
    }

    #[test]
    fn test_minimum_matches_brute_force_on_small_ranges() {
        let mut rng = StdRng::seed_from_u64(0x5eed);

        for _ in 0..50 {
            let pipeline = random_pipeline(&mut rng, 3, 400);
            let start = rng.gen_range(0..300i64);
            let len = rng.gen_range(1..100i64);
            let range = Interval::new(start, start + len);

            let brute = range
                .iter()
                .map(|p| pipeline.apply_point(p))
                .min()
                .unwrap();

            let outcome = Solver::new()
                .minimum_output(&pipeline, &SeedSet::ranges(vec![range]))
                .unwrap();
            assert_eq!(
                outcome.minimum(),
                brute,
                "analytic minimum diverged from brute force for {range}"
            );
        }
    }
}
